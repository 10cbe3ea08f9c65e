use crate::client::core::VoiceClient;
use crate::credentials;
use crate::transport::{HttpTransport, TransportConfig};
use crate::types::OutputFormat;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";

/// Builder for [`VoiceClient`].
///
/// Everything is optional. Unset values fall back to the environment:
/// - `ELEVENLABS_BASE_URL` (default `https://api.elevenlabs.io`)
/// - `ELEVENLABS_HTTP_TIMEOUT_SECS` (default: no timeout)
/// - `ELEVENLABS_PROXY_URL`
///
/// Without an explicit key the client resolves one per call (see
/// [`crate::credentials`]); the keyring part of that lookup runs here, once
/// per process.
#[derive(Debug, Default)]
pub struct VoiceClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    proxy_url: Option<String>,
    output_format: Option<OutputFormat>,
}

impl VoiceClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Override the API host. Primarily for testing with mock servers.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whole-request deadline, including the full streamed body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Output format for streaming calls that do not pick one.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    pub fn build(self) -> Result<VoiceClient> {
        let base_url = self
            .base_url
            .or_else(|| std::env::var("ELEVENLABS_BASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone())
                    .with_source("builder"),
            )
        })?;

        let timeout = self.timeout.or_else(|| {
            std::env::var("ELEVENLABS_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        });
        let proxy_url = self
            .proxy_url
            .or_else(|| std::env::var("ELEVENLABS_PROXY_URL").ok());

        match &self.api_key {
            Some(key) if key.trim().is_empty() => {
                return Err(Error::configuration_with_context(
                    "API key must not be empty",
                    ErrorContext::new()
                        .with_field_path("api_key")
                        .with_source("builder"),
                ));
            }
            Some(_) => {}
            None => credentials::preload_keyring(),
        }

        let transport = HttpTransport::new(&TransportConfig {
            base_url,
            timeout,
            proxy_url,
        })?;

        Ok(VoiceClient {
            transport: Arc::new(transport),
            api_key: self.api_key.map(Arc::from),
            output_format: self.output_format.unwrap_or_default(),
        })
    }
}
