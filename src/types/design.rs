//! Voice design types.

use serde::Serialize;
use serde_json::{Map, Value};

/// JSON body of `POST /v1/text-to-voice/design`.
///
/// Unknown tuning fields can be passed through with [`VoiceDesignRequest::extra`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct VoiceDesignRequest {
    pub voice_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_generate_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loudness: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance_scale: Option<f32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VoiceDesignRequest {
    pub fn new(voice_description: impl Into<String>) -> Self {
        Self {
            voice_description: voice_description.into(),
            ..Default::default()
        }
    }

    pub fn model(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = Some(model_id.into());
        self
    }

    /// Sample text the previews should read.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn auto_generate_text(mut self, enable: bool) -> Self {
        self.auto_generate_text = Some(enable);
        self
    }

    pub fn loudness(mut self, loudness: f32) -> Self {
        self.loudness = Some(loudness);
        self
    }

    pub fn quality(mut self, quality: f32) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn guidance_scale(mut self, scale: f32) -> Self {
        self.guidance_scale = Some(scale);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// JSON body of `POST /v1/text-to-voice`, which keeps a designed preview.
#[derive(Debug, Clone, Serialize)]
pub struct SaveDesignedVoice {
    pub voice_name: String,
    pub voice_description: String,
    pub generated_voice_id: String,
}

impl SaveDesignedVoice {
    pub fn new(
        voice_name: impl Into<String>,
        voice_description: impl Into<String>,
        generated_voice_id: impl Into<String>,
    ) -> Self {
        Self {
            voice_name: voice_name.into(),
            voice_description: voice_description.into(),
            generated_voice_id: generated_voice_id.into(),
        }
    }
}
