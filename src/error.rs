//! Error types for single value object operations.
//!
//! Every fallible entry point of the crate (parsing, formatting with an explicit
//! format string, wire deserialization, field-container deserialization and
//! untyped comparison) reports failures through [`SvoError`].

use std::fmt;

/// Main error type for single value object operations.
///
/// Each variant corresponds to one error kind of the value object contract.
/// Operations never retry or partially recover: the error is terminal for the
/// call and the caller decides on a fallback.
#[derive(Debug, thiserror::Error)]
pub enum SvoError {
    /// Text did not match any recognizer of the type
    #[error("Not a valid {type_name}")]
    Parse {
        type_name: &'static str,
        input: String,
    },

    /// Format string is not part of the type's format mini-language
    #[error("Input format '{format}' is not supported by {type_name}")]
    InvalidFormat {
        type_name: &'static str,
        format: String,
    },

    /// Wire value of a kind the type does not accept
    #[error("JSON deserialization from {kind} is not supported.")]
    UnsupportedWireKind {
        type_name: &'static str,
        kind: WireKind,
    },

    /// Required container argument was absent
    #[error("Value cannot be null. (Parameter '{parameter}')")]
    NullArgument { parameter: &'static str },

    /// Container present but without the expected field
    #[error("Serialization data for {type_name} is missing field '{key}'")]
    MalformedContainer {
        type_name: &'static str,
        key: String,
    },

    /// Untyped comparison against a missing or incompatible value
    #[error("Argument must be a {type_name}")]
    IncompatibleComparison { type_name: &'static str },

    /// Numeric input outside of the range the type can represent
    #[error("{value} is out of range for {type_name}")]
    OutOfRange {
        type_name: &'static str,
        value: String,
    },

    /// Culture name without built-in data
    #[error("Unknown culture '{name}'")]
    UnknownCulture { name: String },

    /// Invalid configuration values
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The kinds of wire values a JSON-like payload can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireKind {
    Null,
    String,
    Integer,
    Float,
    DateTime,
}

impl fmt::Display for WireKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WireKind::Null => "null",
            WireKind::String => "a string",
            WireKind::Integer => "an integer",
            WireKind::Float => "a number",
            WireKind::DateTime => "a date",
        };
        f.write_str(text)
    }
}

impl SvoError {
    /// Create a parse error for the given type and input.
    pub fn parse(type_name: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            type_name,
            input: input.into(),
        }
    }

    /// Create an invalid format error for the given type and format string.
    pub fn invalid_format(type_name: &'static str, format: impl Into<String>) -> Self {
        Self::InvalidFormat {
            type_name,
            format: format.into(),
        }
    }

    /// Create an unsupported wire kind error.
    pub fn unsupported(type_name: &'static str, kind: WireKind) -> Self {
        Self::UnsupportedWireKind { type_name, kind }
    }

    /// Create an out of range error.
    pub fn out_of_range(type_name: &'static str, value: impl fmt::Display) -> Self {
        Self::OutOfRange {
            type_name,
            value: value.to_string(),
        }
    }

    /// Returns true when the error is a parse failure.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

/// Result type for single value object operations.
pub type SvoResult<T> = Result<T, SvoError>;
