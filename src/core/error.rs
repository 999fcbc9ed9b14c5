//! Error types for key parameter and key serialization operations.
//!
//! Every failure is reported synchronously at the call that caused it.
//! Nothing in this crate hands back a partially valid value.

use thiserror::Error;

use crate::core::variant::Variant;

/// Errors that can occur while building parameters or key serializations.
#[derive(Debug, Error)]
pub enum KeyParamsError {
    /// A single field value lies outside the domain allowed for it.
    #[error("Invalid {name}: {value} (allowed: {allowed})")]
    InvalidParameter {
        /// Which field was rejected.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// The allowed set or range.
        allowed: &'static str,
    },

    /// A required field was never set before `build()`.
    #[error("Incomplete configuration: {missing} not set")]
    IncompleteConfiguration {
        /// The first missing field.
        missing: &'static str,
    },

    /// The id requirement disagrees with the output prefix kind.
    #[error("Id requirement {} for output prefix kind {variant}", presence(.id_present))]
    InvariantViolation {
        /// The requested output prefix kind.
        variant: Variant,
        /// Whether an id was supplied.
        id_present: bool,
    },

    /// A wire value does not name any member of a closed enumeration.
    #[error("Unknown {enumeration} value: {value}")]
    UnknownVariant {
        /// The enumeration being decoded.
        enumeration: &'static str,
        /// The offending wire number.
        value: i32,
    },

    /// Base64 decoding error.
    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

const fn presence(id_present: &bool) -> &'static str {
    if *id_present {
        "present"
    } else {
        "absent"
    }
}

/// Result type alias for key parameter operations.
pub type KeyParamsResult<T> = Result<T, KeyParamsError>;
