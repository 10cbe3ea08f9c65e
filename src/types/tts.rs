//! Text-to-speech types.

use super::voice::VoiceSettings;
use serde::Serialize;
use std::fmt;

/// Model used by the streaming endpoint when the caller names none.
pub const DEFAULT_MODEL_ID: &str = "eleven_monolingual_v1";

/// Encoded audio format requested from the streaming endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Mp3_22050_32,
    Mp3_44100_64,
    Mp3_44100_96,
    #[default]
    Mp3_44100_128,
    Mp3_44100_192,
    Pcm16000,
    Pcm22050,
    Pcm24000,
    Pcm44100,
    Ulaw8000,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3_22050_32 => "mp3_22050_32",
            Self::Mp3_44100_64 => "mp3_44100_64",
            Self::Mp3_44100_96 => "mp3_44100_96",
            Self::Mp3_44100_128 => "mp3_44100_128",
            Self::Mp3_44100_192 => "mp3_44100_192",
            Self::Pcm16000 => "pcm_16000",
            Self::Pcm22050 => "pcm_22050",
            Self::Pcm24000 => "pcm_24000",
            Self::Pcm44100 => "pcm_44100",
            Self::Ulaw8000 => "ulaw_8000",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3_22050_32
            | Self::Mp3_44100_64
            | Self::Mp3_44100_96
            | Self::Mp3_44100_128
            | Self::Mp3_44100_192 => "audio/mpeg",
            Self::Pcm16000 | Self::Pcm22050 | Self::Pcm24000 | Self::Pcm44100 => "audio/pcm",
            Self::Ulaw8000 => "audio/basic",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let format = match s.to_ascii_lowercase().as_str() {
            "mp3_22050_32" => Self::Mp3_22050_32,
            "mp3_44100_64" => Self::Mp3_44100_64,
            "mp3_44100_96" => Self::Mp3_44100_96,
            "mp3_44100_128" => Self::Mp3_44100_128,
            "mp3_44100_192" => Self::Mp3_44100_192,
            "pcm_16000" => Self::Pcm16000,
            "pcm_22050" => Self::Pcm22050,
            "pcm_24000" => Self::Pcm24000,
            "pcm_44100" => Self::Pcm44100,
            "ulaw_8000" => Self::Ulaw8000,
            _ => return None,
        };
        Some(format)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a synthesis call.
#[derive(Debug, Clone, Default)]
pub struct TtsOptions {
    pub model: Option<String>,
    pub voice_settings: Option<VoiceSettings>,
    /// Streaming only; defaults to [`OutputFormat::Mp3_44100_128`].
    pub output_format: Option<OutputFormat>,
}

impl TtsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn voice_settings(mut self, settings: VoiceSettings) -> Self {
        self.voice_settings = Some(settings);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }
}

/// JSON body of a text-to-speech request.
#[derive(Debug, Clone, Serialize)]
pub struct SynthesisRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<&'a VoiceSettings>,
}

impl<'a> SynthesisRequest<'a> {
    /// Body for the buffered endpoint: fields the caller left out stay out.
    pub fn buffered(text: &'a str, options: &'a TtsOptions) -> Self {
        Self {
            text,
            model_id: options.model.as_deref(),
            voice_settings: options.voice_settings.as_ref(),
        }
    }

    /// Body for the streaming endpoint: `model_id` is always present.
    pub fn streaming(text: &'a str, options: &'a TtsOptions) -> Self {
        Self {
            text,
            model_id: Some(options.model.as_deref().unwrap_or(DEFAULT_MODEL_ID)),
            voice_settings: options.voice_settings.as_ref(),
        }
    }
}

/// Totals for a completed streaming call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub chunks: usize,
    pub bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffered_body_omits_unset_fields() {
        let opts = TtsOptions::new();
        let body = serde_json::to_value(SynthesisRequest::buffered("Hello", &opts)).unwrap();
        assert_eq!(body, serde_json::json!({"text": "Hello"}));
    }

    #[test]
    fn test_streaming_body_defaults_model() {
        let opts = TtsOptions::new();
        let body = serde_json::to_value(SynthesisRequest::streaming("Hi", &opts)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"text": "Hi", "model_id": DEFAULT_MODEL_ID})
        );

        let opts = TtsOptions::new()
            .model("eleven_turbo_v2")
            .voice_settings(VoiceSettings::new(0.5, 0.5));
        let body = serde_json::to_value(SynthesisRequest::streaming("Hi", &opts)).unwrap();
        assert_eq!(body["model_id"], "eleven_turbo_v2");
        assert_eq!(body["voice_settings"]["stability"], 0.5);
    }

    #[test]
    fn test_output_format_names() {
        assert_eq!(OutputFormat::default().as_str(), "mp3_44100_128");
        assert_eq!(OutputFormat::parse("PCM_24000"), Some(OutputFormat::Pcm24000));
        assert_eq!(OutputFormat::parse("wav"), None);
        assert_eq!(OutputFormat::Ulaw8000.mime_type(), "audio/basic");
    }
}
