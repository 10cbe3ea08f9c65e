//! Error classes for failed API calls.
//!
//! Every failure surfaced by the client carries exactly one [`ErrorClass`].
//! Remote failures are classified from the HTTP status; local failures
//! (connection, decode, configuration) get their own classes.
//!
//! | Status | Class                 |
//! |--------|-----------------------|
//! | 400    | `bad_request`         |
//! | 401    | `authentication`      |
//! | 404    | `not_found`           |
//! | 422    | `unprocessable_entity`|
//! | other  | `api_error`           |
//!
//! ## Example
//!
//! ```rust
//! use xi_voice::error_code::ErrorClass;
//!
//! let class = ErrorClass::from_http_status(422);
//! assert_eq!(class, ErrorClass::UnprocessableEntity);
//! assert_eq!(class.name(), "unprocessable_entity");
//! assert!(class.is_remote());
//! ```

use std::fmt;

/// Classification of a failed call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// 400: the caller supplied invalid parameters
    BadRequest,
    /// 401: invalid or missing credential
    Authentication,
    /// 404: referenced voice or resource does not exist
    NotFound,
    /// 422: semantically invalid input (e.g. voice description too short)
    UnprocessableEntity,
    /// Any other non-success status, or an unreadable success body
    Api,
    /// Connection refused, dropped mid-stream, or body read failure
    Transport,
    /// Local misconfiguration (no credential, bad base URL)
    Configuration,
    /// Arguments rejected before any request was sent
    Validation,
}

impl ErrorClass {
    /// Returns the snake_case name (e.g. `"not_found"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Authentication => "authentication",
            Self::NotFound => "not_found",
            Self::UnprocessableEntity => "unprocessable_entity",
            Self::Api => "api_error",
            Self::Transport => "transport",
            Self::Configuration => "configuration",
            Self::Validation => "validation",
        }
    }

    /// Whether this class originates from a remote HTTP status.
    #[inline]
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::BadRequest
                | Self::Authentication
                | Self::NotFound
                | Self::UnprocessableEntity
                | Self::Api
        )
    }

    /// Maps a non-success HTTP status to its class.
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Authentication,
            404 => Self::NotFound,
            422 => Self::UnprocessableEntity,
            _ => Self::Api,
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
