//! Voice management types.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Voice tuning parameters sent as `voice_settings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    pub stability: f32,
    pub similarity_boost: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl VoiceSettings {
    pub fn new(stability: f32, similarity_boost: f32) -> Self {
        Self {
            stability,
            similarity_boost,
            style: None,
            use_speaker_boost: None,
            speed: None,
        }
    }

    pub fn style(mut self, style: f32) -> Self {
        self.style = Some(style);
        self
    }

    pub fn use_speaker_boost(mut self, enable: bool) -> Self {
        self.use_speaker_boost = Some(enable);
        self
    }

    pub fn speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}

/// One audio sample uploaded when creating or editing a voice.
#[derive(Debug, Clone)]
pub struct VoiceFile {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl VoiceFile {
    pub fn new(file_name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for_file_name(&file_name).to_string();
        Self {
            file_name,
            mime_type,
            data: data.into(),
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Load a sample from disk; the MIME type is guessed from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("sample.mp3")
            .to_string();
        Ok(Self::new(file_name, data))
    }

    pub(crate) fn into_part(self) -> Result<reqwest::multipart::Part> {
        reqwest::multipart::Part::bytes(self.data)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| {
                Error::validation_with_context(
                    format!("Invalid MIME type: {}", e),
                    ErrorContext::new()
                        .with_field_path("mime_type")
                        .with_source("voice_file"),
                )
            })
    }
}

fn mime_for_file_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "wav" => "audio/wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "m4a" => "audio/mp4",
        "webm" => "audio/webm",
        _ => "audio/mpeg",
    }
}

/// Multipart body for `create_voice` / `edit_voice`.
#[derive(Debug, Clone, Default)]
pub struct VoiceForm {
    pub name: String,
    pub description: Option<String>,
    pub files: Vec<VoiceFile>,
}

impl VoiceForm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn file(mut self, file: VoiceFile) -> Self {
        self.files.push(file);
        self
    }

    /// Build the form, naming each sample part `files_field`.
    pub(crate) fn into_multipart(self, files_field: &'static str) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new().text("name", self.name);
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        for file in self.files {
            form = form.part(files_field, file.into_part()?);
        }
        Ok(form)
    }
}
