//! HTTP transport: request execution and boundary error translation.

mod http;

pub use http::{HttpTransport, TransportConfig};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
