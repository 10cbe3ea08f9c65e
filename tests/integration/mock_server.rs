//! Mock HTTP server setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use xi_voice::VoiceClient;

pub const TEST_KEY: &str = "test-key";

/// Test fixture that owns a mock server and a client pointed at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client with an explicit key, so ambient credentials never leak in.
    pub fn client(&self) -> VoiceClient {
        VoiceClient::builder()
            .api_key(TEST_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("client builds")
    }

    /// JSON response for `method path`, requiring the credential header.
    pub async fn mock_json(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_header("xi-api-key", TEST_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Binary audio response for a POST to `path`.
    pub async fn mock_audio(&mut self, path: &str, audio: &[u8]) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("xi-api-key", TEST_KEY)
            .match_header("accept", "audio/mpeg")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "audio/mpeg")
            .with_body(audio)
            .create_async()
            .await
    }

    /// Error response for `method path`, whatever the query string.
    pub async fn mock_error(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
