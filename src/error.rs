use crate::error_code::ErrorClass;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for local (pre-request) failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Argument or configuration key that caused the error (e.g., "voice_id", "api_key")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected format, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "builder", "text_to_speech_stream")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for every client call.
///
/// Remote failures are translated once, at the transport boundary, into
/// [`Error::Api`]; nothing is retried and nothing is replaced by a default.
#[derive(Debug, Error)]
pub enum Error {
    #[error("API error: HTTP {status} ({class}): {message}")]
    Api {
        class: ErrorClass,
        status: u16,
        message: String,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Undecodable response body (HTTP {status}): {message}")]
    Decode {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Validation error: {message}{}", format_context(.context))]
    Validation {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a remote API error from a status code and an extracted message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Error::Api {
            class: ErrorClass::from_http_status(status),
            status,
            message: message.into(),
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Create a new validation error with structured context
    pub fn validation_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Validation {
            message: msg.into(),
            context,
        }
    }

    /// The classification of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::Api { class, .. } => *class,
            // A success status with an unreadable body is still a remote fault.
            Error::Decode { .. } => ErrorClass::Api,
            Error::Transport(_) | Error::Io(_) => ErrorClass::Transport,
            Error::Configuration { .. } => ErrorClass::Configuration,
            Error::Validation { .. } => ErrorClass::Validation,
        }
    }

    /// Remote HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } | Error::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message extracted from the remote error detail.
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            Error::Api { message, .. } | Error::Decode { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } | Error::Validation { context, .. } => {
                Some(context)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_class_status_message() {
        let err = Error::api(401, "invalid key");
        assert_eq!(err.class(), ErrorClass::Authentication);
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.remote_message(), Some("invalid key"));
        assert_eq!(
            err.to_string(),
            "API error: HTTP 401 (authentication): invalid key"
        );
    }

    #[test]
    fn test_decode_error_is_generic_api_class() {
        let err = Error::Decode {
            status: 200,
            message: "expected value at line 1 column 1".into(),
            body: "<html>".into(),
        };
        assert_eq!(err.class(), ErrorClass::Api);
        assert_eq!(err.status(), Some(200));
    }

    #[test]
    fn test_context_formatting() {
        let err = Error::validation_with_context(
            "voice id must not be empty",
            ErrorContext::new()
                .with_field_path("voice_id")
                .with_source("text_to_speech"),
        );
        assert_eq!(
            err.to_string(),
            "Validation error: voice id must not be empty (field: voice_id, source: text_to_speech)"
        );
        assert_eq!(err.class(), ErrorClass::Validation);
        assert!(err.context().is_some());
    }

    #[test]
    fn test_transport_class() {
        let err = Error::Transport(TransportError::Other("connection reset".into()));
        assert_eq!(err.class(), ErrorClass::Transport);
        assert_eq!(err.status(), None);
    }
}
