//! Client for the voice, speech, and model endpoints.
//!
//! One method per remote endpoint; implementation is split into submodules
//! under `src/client/`.

pub mod builder;
pub mod core;
mod design;
pub(crate) mod error_classification;
mod models;
mod tts;
pub mod types;
mod voices;

pub use builder::VoiceClientBuilder;
pub use core::VoiceClient;
pub use types::{AudioStream, CancelHandle};
