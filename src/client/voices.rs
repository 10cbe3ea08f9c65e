//! Voice management endpoints.

use super::core::{path_segment, require_non_empty, VoiceClient};
use crate::transport::HttpTransport;
use crate::types::{VoiceForm, VoiceSettings};
use crate::{Error, ErrorContext, Result};
use reqwest::Method;
use serde_json::Value;
use tracing::debug;

impl VoiceClient {
    /// `GET /v1/voices`
    pub async fn list_voices(&self) -> Result<Value> {
        let request = self.request(Method::GET, "/v1/voices")?;
        self.transport.execute_json(request).await
    }

    /// `GET /v1/voices/{voice_id}`
    pub async fn get_voice(&self, voice_id: &str) -> Result<Value> {
        require_non_empty(voice_id, "voice_id", "get_voice")?;
        let path = format!("/v1/voices/{}", path_segment(voice_id));
        let request = self.request(Method::GET, &path)?;
        self.transport.execute_json(request).await
    }

    /// `POST /v1/voices/add` with multipart `name`, `description`, and one
    /// `files` part per sample.
    pub async fn create_voice(&self, form: VoiceForm) -> Result<Value> {
        require_non_empty(&form.name, "name", "create_voice")?;
        if form.files.is_empty() {
            return Err(Error::validation_with_context(
                "at least one sample file is required",
                ErrorContext::new()
                    .with_field_path("files")
                    .with_source("create_voice"),
            ));
        }
        debug!(name = %form.name, files = form.files.len(), "creating voice");
        let multipart = form.into_multipart("files")?;
        let request = self.request(Method::POST, "/v1/voices/add")?.multipart(multipart);
        self.transport.execute_json(request).await
    }

    /// `POST /v1/voices/{voice_id}/edit` with multipart `name`, `description`,
    /// and `files[]` parts.
    pub async fn edit_voice(&self, voice_id: &str, form: VoiceForm) -> Result<Value> {
        require_non_empty(voice_id, "voice_id", "edit_voice")?;
        require_non_empty(&form.name, "name", "edit_voice")?;
        let path = format!("/v1/voices/{}/edit", path_segment(voice_id));
        let multipart = form.into_multipart("files[]")?;
        let request = self.request(Method::POST, &path)?.multipart(multipart);
        self.transport.execute_json(request).await
    }

    /// `DELETE /v1/voices/{voice_id}`
    pub async fn delete_voice(&self, voice_id: &str) -> Result<Value> {
        require_non_empty(voice_id, "voice_id", "delete_voice")?;
        let path = format!("/v1/voices/{}", path_segment(voice_id));
        let request = self.request(Method::DELETE, &path)?;
        self.transport.execute_json(request).await
    }

    /// `GET /v1/voices/settings/default`
    pub async fn default_voice_settings(&self) -> Result<Value> {
        let request = self.request(Method::GET, "/v1/voices/settings/default")?;
        self.transport.execute_json(request).await
    }

    /// `GET /v1/voices/{voice_id}/settings`
    pub async fn get_voice_settings(&self, voice_id: &str) -> Result<Value> {
        require_non_empty(voice_id, "voice_id", "get_voice_settings")?;
        let path = format!("/v1/voices/{}/settings", path_segment(voice_id));
        let request = self.request(Method::GET, &path)?;
        self.transport.execute_json(request).await
    }

    /// `POST /v1/voices/{voice_id}/settings/edit`
    pub async fn edit_voice_settings(
        &self,
        voice_id: &str,
        settings: &VoiceSettings,
    ) -> Result<Value> {
        require_non_empty(voice_id, "voice_id", "edit_voice_settings")?;
        let path = format!("/v1/voices/{}/settings/edit", path_segment(voice_id));
        let request = HttpTransport::json_body(self.request(Method::POST, &path)?, settings);
        self.transport.execute_json(request).await
    }
}
