use crate::client::builder::VoiceClientBuilder;
use crate::credentials;
use crate::transport::HttpTransport;
use crate::types::OutputFormat;
use crate::{Error, ErrorContext, Result};
use reqwest::{Method, RequestBuilder};
use std::sync::Arc;

/// Client for the voice and speech API.
///
/// Cheap to clone; clones share the underlying connection pool. Each call
/// owns its own request/response cycle.
#[derive(Clone)]
pub struct VoiceClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) api_key: Option<Arc<str>>,
    pub(crate) output_format: OutputFormat,
}

impl VoiceClient {
    /// Client with default settings; see [`VoiceClientBuilder`].
    pub fn new() -> Result<Self> {
        VoiceClientBuilder::new().build()
    }

    pub fn builder() -> VoiceClientBuilder {
        VoiceClientBuilder::new()
    }

    /// A client sharing this one's transport but presenting `api_key`.
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            api_key: Some(Arc::from(api_key.into())),
            output_format: self.output_format,
        }
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    /// Start a request with the resolved credential attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let api_key = credentials::resolve_api_key(self.api_key.as_deref())?;
        Ok(self.transport.request(method, path, &api_key))
    }
}

impl std::fmt::Debug for VoiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceClient")
            .field("base_url", &self.base_url())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("output_format", &self.output_format)
            .finish()
    }
}

/// Reject an empty argument before any network I/O.
pub(crate) fn require_non_empty(value: &str, field: &str, source: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation_with_context(
            format!("{} must not be empty", field),
            ErrorContext::new()
                .with_field_path(field)
                .with_source(source),
        ));
    }
    Ok(())
}

/// Percent-encode an opaque identifier for use as one path segment.
pub(crate) fn path_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
