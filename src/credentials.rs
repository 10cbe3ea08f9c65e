//! API key resolution.
//!
//! A client built with an explicit key always uses it. Otherwise the key is
//! resolved on every call, in order:
//!
//! 1. the process-wide default set with [`set_default_api_key`]
//! 2. the OS keyring entry `xi-voice` / `api-key`, read once per process
//! 3. the `ELEVENLABS_API_KEY` environment variable
//!
//! Blank keys count as unset at every step.

use crate::{Error, ErrorContext, Result};
use arc_swap::ArcSwapOption;
use keyring::Entry;
use once_cell::sync::Lazy;
use std::env;
use std::sync::Arc;
use tracing::debug;

pub const API_KEY_ENV: &str = "ELEVENLABS_API_KEY";

const KEYRING_SERVICE: &str = "xi-voice";
const KEYRING_USER: &str = "api-key";

static DEFAULT_API_KEY: Lazy<ArcSwapOption<String>> = Lazy::new(ArcSwapOption::empty);

// The keyring lookup blocks (a D-Bus round trip on Linux); do it once.
static KEYRING_API_KEY: Lazy<Option<String>> = Lazy::new(|| {
    let key = keyring_api_key().filter(|k| !is_blank(k));
    debug!(found = key.is_some(), "keyring lookup");
    key
});

/// Install a process-wide default API key.
///
/// Clients without an explicit key pick this up on their next call. A blank
/// key is treated as no default.
pub fn set_default_api_key(key: impl Into<String>) {
    DEFAULT_API_KEY.store(Some(Arc::new(key.into())));
}

pub fn clear_default_api_key() {
    DEFAULT_API_KEY.store(None);
}

pub fn default_api_key() -> Option<Arc<String>> {
    DEFAULT_API_KEY.load_full()
}

fn is_blank(key: &str) -> bool {
    key.trim().is_empty()
}

fn keyring_api_key() -> Option<String> {
    let entry = Entry::new(KEYRING_SERVICE, KEYRING_USER).ok()?;
    entry.get_password().ok()
}

fn env_api_key() -> Option<String> {
    env::var(API_KEY_ENV).ok().filter(|k| !is_blank(k))
}

/// Run the keyring lookup now so no request pays for it.
pub(crate) fn preload_keyring() {
    Lazy::force(&KEYRING_API_KEY);
}

fn missing_key(details: String) -> Error {
    Error::configuration_with_context(
        "no API key configured",
        ErrorContext::new()
            .with_field_path("api_key")
            .with_details(details),
    )
}

/// Resolve the key for one call. `explicit` wins over every ambient source.
pub(crate) fn resolve_api_key(explicit: Option<&str>) -> Result<String> {
    if let Some(key) = explicit {
        if is_blank(key) {
            return Err(missing_key("the client's API key is blank".to_string()));
        }
        return Ok(key.to_string());
    }
    if let Some(key) = default_api_key().filter(|k| !is_blank(k)) {
        return Ok(key.as_ref().clone());
    }
    KEYRING_API_KEY
        .clone()
        .or_else(env_api_key)
        .ok_or_else(|| {
            missing_key(format!(
                "pass one to the builder, call set_default_api_key, or set {}",
                API_KEY_ENV
            ))
        })
}
