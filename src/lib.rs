//! # xi-voice
//!
//! Async client for the ElevenLabs text-to-speech HTTP API: voice management,
//! buffered and streamed speech synthesis, and voice design.
//!
//! ## Overview
//!
//! Every operation maps onto exactly one remote endpoint. There is no retry,
//! caching, or rate limiting; a failed call surfaces one [`Error`] carrying an
//! [`ErrorClass`](error_code::ErrorClass), the remote status, and the message
//! extracted from the service's error detail.
//!
//! Streaming synthesis hands back an [`AudioStream`] that yields audio chunks
//! in arrival order. Dropping it, or calling [`CancelHandle::cancel`], closes
//! the connection.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use xi_voice::{TtsOptions, VoiceClient};
//!
//! #[tokio::main]
//! async fn main() -> xi_voice::Result<()> {
//!     let client = VoiceClient::builder().api_key("your-api-key").build()?;
//!
//!     let voices = client.list_voices().await?;
//!     println!("{}", voices);
//!
//!     let mut stream = client
//!         .text_to_speech_stream("21m00Tcm4TlvDq8ikWAM", "Hello there", &TtsOptions::new())
//!         .await?;
//!     while let Some(chunk) = stream.next().await {
//!         let chunk = chunk?;
//!         // feed `chunk` to a player or a file
//!         let _ = chunk;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | `VoiceClient`, its builder, and the streaming types |
//! | [`credentials`] | API key resolution and the process-wide default key |
//! | [`types`] | Request value types |
//! | [`transport`] | HTTP execution and error translation |
//! | [`error`] | `Error` type and its context |
//! | [`error_code`] | Error classification |

pub mod client;
pub mod credentials;
pub mod error_code;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{AudioStream, CancelHandle, VoiceClient, VoiceClientBuilder};
pub use credentials::{clear_default_api_key, set_default_api_key};
pub use error_code::ErrorClass;
pub use types::{
    OutputFormat, SaveDesignedVoice, StreamStats, TtsOptions, VoiceDesignRequest, VoiceFile,
    VoiceForm, VoiceSettings,
};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A unified pinned, boxed stream that emits `Result<T>`
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = Result<T>> + Send + 'a>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
