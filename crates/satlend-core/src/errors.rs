//! Error types for Satlend

use thiserror::Error;

/// Core errors that can occur in Satlend
#[derive(Debug, Error)]
pub enum Error {
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Domain-rule errors raised at validation seams.
///
/// The pure calculators never raise these; they signal invalid input through
/// sentinel returns. Typed errors appear where a user request is checked
/// against platform policy (extension windows, action gating).
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid loan terms: {message}")]
    InvalidTerms { message: String },

    #[error("Action not allowed: {reason}")]
    ActionNotAllowed { reason: String },

    #[error("Extension not offered by lender on this contract")]
    ExtensionNotOffered,

    #[error("Extension window not open: {days_passed} of {required} required days elapsed")]
    ExtensionWindowClosed { days_passed: i64, required: i64 },

    #[error("Extension duration {requested} days outside allowed range [{min}, {max}]")]
    ExtensionOutOfRange { requested: u32, min: u32, max: u32 },
}

/// Result type alias for Satlend operations
pub type Result<T> = std::result::Result<T, Error>;

impl ProtocolError {
    /// Get an HTTP-friendly error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTerms { .. } => "invalid_terms",
            Self::ActionNotAllowed { .. } => "action_not_allowed",
            Self::ExtensionNotOffered => "extension_not_offered",
            Self::ExtensionWindowClosed { .. } => "extension_window_closed",
            Self::ExtensionOutOfRange { .. } => "extension_out_of_range",
        }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidTerms { .. } => 400,
            Self::ActionNotAllowed { .. } => 422,
            Self::ExtensionNotOffered => 422,
            Self::ExtensionWindowClosed { .. } => 422,
            Self::ExtensionOutOfRange { .. } => 422,
        }
    }
}
