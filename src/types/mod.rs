//! Request value types for the voice and speech endpoints.
//!
//! Responses from JSON endpoints are returned as `serde_json::Value`; the
//! types here describe what the caller sends.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`TtsOptions`] | Optional synthesis parameters (model, voice settings, output format) |
//! | [`SynthesisRequest`] | JSON body of a text-to-speech call |
//! | [`VoiceSettings`] | Voice tuning parameters, passed through verbatim |
//! | [`VoiceForm`] / [`VoiceFile`] | Multipart body for creating or editing a voice |
//! | [`VoiceDesignRequest`] | JSON body of a voice design call |
//!
//! ## Example
//!
//! ```rust
//! use xi_voice::types::{TtsOptions, VoiceSettings};
//!
//! let options = TtsOptions::new()
//!     .model("eleven_multilingual_v2")
//!     .voice_settings(VoiceSettings::new(0.5, 0.75).style(0.1));
//! assert_eq!(options.model.as_deref(), Some("eleven_multilingual_v2"));
//! ```

pub mod design;
pub mod tts;
pub mod voice;

pub use design::{SaveDesignedVoice, VoiceDesignRequest};
pub use tts::{OutputFormat, StreamStats, SynthesisRequest, TtsOptions, DEFAULT_MODEL_ID};
pub use voice::{VoiceFile, VoiceForm, VoiceSettings};
