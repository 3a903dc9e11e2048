//! Error types for payment account operations.
//!
//! Field validation failures are recoverable: the caller rejects the input and
//! asks for a correction. Everything raised while decoding wire bytes aborts the
//! whole decode; no partially reconstructed account is ever returned.

use std::fmt;

use thiserror::Error;

/// Error codes for FFI and mobile integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum AccountErrorCode {
    /// Signing capability failed
    Signature = 3100,
    /// Age witness or timestamp rejected
    AgeWitness = 3101,
    /// A field failed its validation rule
    FieldValidation = 5001,
    /// Malformed or oversized wire bytes
    Decode = 5002,
    /// Invalid configuration
    Config = 5003,
    /// Unknown or absent variant tag
    UnresolvableVariant = 5100,
    /// Wire bytes omit a field the variant requires
    MissingRequiredField = 5101,
}

/// The constraint a field value violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// Value is empty but required.
    Empty,
    /// Value is shorter than the declared minimum.
    TooShort {
        /// Minimum length in characters
        min: usize,
        /// Actual length in characters
        actual: usize,
    },
    /// Value is longer than the declared maximum.
    TooLong {
        /// Maximum length in characters
        max: usize,
        /// Actual length in characters
        actual: usize,
    },
    /// Value does not follow the expected shape.
    Pattern(&'static str),
    /// Value is not a member of the allowed set.
    NotAllowed(String),
    /// Checksum over the value failed.
    Checksum,
    /// Value disagrees with another declared value.
    Mismatch {
        /// Value implied by the other field
        expected: String,
        /// Value found
        actual: String,
    },
    /// Value is required for this country or variant but absent.
    Missing,
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "must not be empty"),
            Self::TooShort { min, actual } => {
                write!(f, "must be at least {} characters, got {}", min, actual)
            }
            Self::TooLong { max, actual } => {
                write!(f, "must be at most {} characters, got {}", max, actual)
            }
            Self::Pattern(expected) => write!(f, "expected {}", expected),
            Self::NotAllowed(value) => write!(f, "{} is not supported", value),
            Self::Checksum => write!(f, "checksum verification failed"),
            Self::Mismatch { expected, actual } => {
                write!(f, "expected {} but found {}", expected, actual)
            }
            Self::Missing => write!(f, "is required"),
        }
    }
}

/// A declared field failed a length, format or business rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {constraint}")]
pub struct ValidationError {
    /// Field name
    pub field: String,
    /// Violated constraint
    pub constraint: Constraint,
}

impl ValidationError {
    /// Create a validation error for a field.
    pub fn new(field: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            field: field.into(),
            constraint,
        }
    }
}

/// Errors raised by construction, codec and age-witness operations.
#[derive(Debug, Error)]
pub enum AccountError {
    /// A payload field failed validation.
    #[error(transparent)]
    FieldValidation(#[from] ValidationError),

    /// Wire bytes declare a tag outside the closed set, no tag at all, or an
    /// account variant that does not match its payload variant.
    #[error("unresolvable {level} variant: {detail}")]
    UnresolvableVariant {
        /// Hierarchy level that failed to resolve
        level: &'static str,
        /// What was found instead
        detail: String,
    },

    /// Wire bytes omit a field the variant requires.
    #[error("{variant} requires {field}")]
    MissingRequiredField {
        /// Variant being reconstructed
        variant: &'static str,
        /// Missing field
        field: &'static str,
    },

    /// Bytes are not a valid message or exceed the configured size.
    #[error("decode error: {0}")]
    Decode(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The signing capability failed.
    #[error("signature error: {0}")]
    Signature(String),

    /// An age witness or account timestamp did not verify.
    #[error("age witness rejected: {0}")]
    AgeWitness(String),
}

impl AccountError {
    /// Get the error code for FFI/mobile integration.
    pub fn code(&self) -> AccountErrorCode {
        match self {
            Self::FieldValidation(_) => AccountErrorCode::FieldValidation,
            Self::UnresolvableVariant { .. } => AccountErrorCode::UnresolvableVariant,
            Self::MissingRequiredField { .. } => AccountErrorCode::MissingRequiredField,
            Self::Decode(_) => AccountErrorCode::Decode,
            Self::Config(_) => AccountErrorCode::Config,
            Self::Signature(_) => AccountErrorCode::Signature,
            Self::AgeWitness(_) => AccountErrorCode::AgeWitness,
        }
    }

    /// Get the error message as an owned String (useful for FFI).
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true if the caller can recover by correcting the input.
    ///
    /// Nothing here is worth retrying: every operation is deterministic, so the
    /// same input fails the same way again.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::FieldValidation(_))
    }

    /// The validation error, if this is one.
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::FieldValidation(err) => Some(err),
            _ => None,
        }
    }

    /// Create a field validation error.
    pub fn invalid_field(field: impl Into<String>, constraint: Constraint) -> Self {
        Self::FieldValidation(ValidationError::new(field, constraint))
    }

    /// Create an unresolvable variant error.
    pub fn unresolvable(level: &'static str, detail: impl Into<String>) -> Self {
        Self::UnresolvableVariant {
            level,
            detail: detail.into(),
        }
    }

    /// Create a missing required field error.
    pub fn missing_field(variant: &'static str, field: &'static str) -> Self {
        Self::MissingRequiredField { variant, field }
    }
}

impl From<prost::DecodeError> for AccountError {
    fn from(err: prost::DecodeError) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for AccountError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
