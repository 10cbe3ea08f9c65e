//! Voice design endpoints.

use super::core::{require_non_empty, VoiceClient};
use crate::transport::HttpTransport;
use crate::types::{SaveDesignedVoice, VoiceDesignRequest};
use crate::Result;
use reqwest::Method;
use serde_json::Value;

impl VoiceClient {
    /// `POST /v1/text-to-voice/design`
    ///
    /// Returns preview audio and temporary `generated_voice_id`s; nothing is
    /// saved until [`VoiceClient::create_voice_from_preview`].
    pub async fn design_voice(&self, request: &VoiceDesignRequest) -> Result<Value> {
        require_non_empty(&request.voice_description, "voice_description", "design_voice")?;
        let http = HttpTransport::json_body(
            self.request(Method::POST, "/v1/text-to-voice/design")?,
            request,
        );
        self.transport.execute_json(http).await
    }

    /// `POST /v1/text-to-voice`: keep one of the designed previews as a voice.
    pub async fn create_voice_from_preview(&self, request: &SaveDesignedVoice) -> Result<Value> {
        require_non_empty(&request.voice_name, "voice_name", "create_voice_from_preview")?;
        require_non_empty(
            &request.generated_voice_id,
            "generated_voice_id",
            "create_voice_from_preview",
        )?;
        let http =
            HttpTransport::json_body(self.request(Method::POST, "/v1/text-to-voice")?, request);
        self.transport.execute_json(http).await
    }
}
