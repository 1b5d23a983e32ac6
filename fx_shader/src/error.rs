//! Error types for fx_shader
//!
//! This module defines the error types used throughout the crate,
//! including stream decoding, backend compilation, and resource access.

use std::fmt;

/// Result type for fx_shader operations
pub type Result<T> = std::result::Result<T, Error>;

/// fx_shader errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Stream truncated, or a length field exceeds the remaining bytes
    MalformedStream(String),

    /// A value that maps to no member of a kind/usage/filter/address-mode enum
    UnknownEnumValue {
        /// Field being decoded (e.g. "sampler kind", "attribute usage")
        field: &'static str,
        /// Offending value as read from the stream or text
        value: String,
    },

    /// Shader compilation failed in the graphics backend
    CompileError(String),

    /// Backend-specific error (unknown handle, lost device, etc.)
    BackendError(String),

    /// Invalid resource access (bad region, short buffer, etc.)
    InvalidResource(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MalformedStream(msg) => write!(f, "Malformed stream: {}", msg),
            Error::UnknownEnumValue { field, value } => {
                write!(f, "Unknown {} value: {}", field, value)
            }
            Error::CompileError(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub(crate) fn unknown_enum(field: &'static str, value: impl ToString) -> Self {
        Error::UnknownEnumValue { field, value: value.to_string() }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
