use super::core::VoiceClient;
use crate::Result;
use reqwest::Method;
use serde_json::Value;

impl VoiceClient {
    /// `GET /v1/models`
    pub async fn list_models(&self) -> Result<Value> {
        let request = self.request(Method::GET, "/v1/models")?;
        self.transport.execute_json(request).await
    }
}
