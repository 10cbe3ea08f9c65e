use crate::client::error_classification::error_from_response;
use crate::transport::TransportError;
use crate::{BoxStream, Error, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Proxy, RequestBuilder, Response};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

pub(crate) const API_KEY_HEADER: &str = "xi-api-key";
pub(crate) const AUDIO_MPEG: &str = "audio/mpeg";

/// Settings for the underlying HTTP client.
#[derive(Debug, Clone, Default)]
pub struct TransportConfig {
    pub base_url: String,
    /// Whole-request timeout. `None` leaves deadlines to the caller.
    pub timeout: Option<Duration>,
    pub proxy_url: Option<String>,
}

/// Thin wrapper around `reqwest::Client` that knows the API's header and
/// error conventions.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url)
                .map_err(|e| Error::configuration(format!("Invalid proxy URL: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a request against `path` with the credential header set.
    pub(crate) fn request(&self, method: Method, path: &str, api_key: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(API_KEY_HEADER, api_key)
    }

    /// Send a request and fail with a classified error on any non-success status.
    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let request_id = Uuid::new_v4();
        let (client, request) = request.build_split();
        let request = request.map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%request_id, %method, %path, "sending request");

        let response = client.execute(request).await.map_err(|e| {
            warn!(%request_id, %method, %path, "request failed: {}", e);
            Error::Transport(TransportError::Http(e))
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(%request_id, status = status.as_u16(), "response received");
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        let err = error_from_response(status, &body);
        warn!(%request_id, %method, %path, status = status.as_u16(), "remote error: {}", err);
        Err(err)
    }

    /// Execute a request whose response body is JSON.
    pub(crate) async fn execute_json(&self, request: RequestBuilder) -> Result<serde_json::Value> {
        let response = self.send(request).await?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        serde_json::from_str(&body).map_err(|e| Error::Decode {
            status,
            message: e.to_string(),
            body,
        })
    }

    /// Execute a request whose response body is raw audio, buffered in full.
    pub(crate) async fn execute_bytes(&self, request: RequestBuilder) -> Result<Bytes> {
        let response = self.send(request.header(ACCEPT, AUDIO_MPEG)).await?;
        response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }

    /// Execute a request and hand back the body as it arrives.
    ///
    /// Nothing of the body is read before returning, so a non-success status
    /// fails here with no chunk ever produced.
    pub(crate) async fn execute_stream(
        &self,
        request: RequestBuilder,
    ) -> Result<BoxStream<'static, Bytes>> {
        let response = self.send(request.header(ACCEPT, AUDIO_MPEG)).await?;
        let byte_stream = response
            .bytes_stream()
            .map_err(|e| Error::Transport(TransportError::Http(e)));
        Ok(Box::pin(byte_stream))
    }

    /// Attach a JSON body with an explicit content type.
    pub(crate) fn json_body<T: serde::Serialize + ?Sized>(
        request: RequestBuilder,
        body: &T,
    ) -> RequestBuilder {
        request.header(CONTENT_TYPE, "application/json").json(body)
    }
}
