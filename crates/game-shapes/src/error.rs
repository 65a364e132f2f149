//! Error types for thickness parsing and profile encoding/decoding.

use thiserror::Error;

/// Error classification shared by every error in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// E001: Input is not a JSON object
    Structural,
    /// E002: Unknown profile variant name
    UnsupportedVariant,
    /// E003: Variant fields missing, out of order, or mistyped
    MalformedVariant,
    /// E004: Invalid thickness text
    Format,
    /// E005: Input exceeds a configured limit
    LimitExceeded,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::Structural => "E001",
            ErrorCode::UnsupportedVariant => "E002",
            ErrorCode::MalformedVariant => "E003",
            ErrorCode::Format => "E004",
            ErrorCode::LimitExceeded => "E005",
        }
    }
}

/// Error while parsing a [`Thickness`](crate::Thickness) from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThicknessParseError {
    #[error("[E004] invalid thickness {input:?}: expected 1, 2 or 4 values, found {count}")]
    InvalidTokenCount { input: String, count: usize },

    #[error("[E004] invalid thickness {input:?}: {token:?} is not an integer")]
    InvalidInteger { input: String, token: String },

    #[error("[E005] thickness text length {len} exceeds maximum {max}")]
    LengthExceedsLimit { len: usize, max: usize },
}

impl ThicknessParseError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ThicknessParseError::LengthExceedsLimit { .. } => ErrorCode::LimitExceeded,
            _ => ErrorCode::Format,
        }
    }
}

/// Error while decoding a [`Profile`](crate::Profile) from JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    // === E001: Structural ===
    #[error("[E001] invalid JSON: {0}")]
    Json(String),

    #[error("[E001] expected object start, found {found}")]
    ExpectedObjectStart { found: &'static str },

    #[error("[E001] profile object has no \"type\" property")]
    MissingType,

    // === E002: Unsupported variant ===
    #[error("[E002] the profile type {name:?} is not supported")]
    UnsupportedVariant { name: String },

    // === E003: Malformed variant ===
    #[error("[E003] {variant} profile is missing property {property:?}")]
    MissingProperty {
        variant: &'static str,
        property: &'static str,
    },

    #[error("[E003] {variant} profile expected property {expected:?}, found {found:?}")]
    UnexpectedProperty {
        variant: &'static str,
        expected: &'static str,
        found: String,
    },

    #[error("[E003] {variant} profile property {property:?} must be {expected}")]
    InvalidFieldType {
        variant: &'static str,
        property: &'static str,
        expected: &'static str,
    },

    #[error("[E003] {variant} profile property {property:?} is not two numbers: {value:?}")]
    InvalidVector {
        variant: &'static str,
        property: &'static str,
        value: String,
    },

    #[error("[E003] {variant} profile has unknown radiate value {value}")]
    InvalidRadiation { variant: &'static str, value: i64 },

    // === E005: Limits ===
    #[error("[E005] profile JSON length {len} exceeds maximum {max}")]
    LengthExceedsLimit { len: usize, max: usize },
}

impl DecodeError {
    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            DecodeError::Json(_)
            | DecodeError::ExpectedObjectStart { .. }
            | DecodeError::MissingType => ErrorCode::Structural,
            DecodeError::UnsupportedVariant { .. } => ErrorCode::UnsupportedVariant,
            DecodeError::LengthExceedsLimit { .. } => ErrorCode::LimitExceeded,
            _ => ErrorCode::MalformedVariant,
        }
    }
}

/// Error while encoding a [`Profile`](crate::Profile) to JSON.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("{variant} profile property {property:?} is not finite")]
    NonFiniteFloat {
        variant: &'static str,
        property: &'static str,
    },
}
