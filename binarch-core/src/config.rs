//! Codec configuration
//!
//! The default configuration imposes no limits, so every well-formed value
//! round-trips. Callers decoding untrusted input opt into limits with
//! [`CodecConfig::with_max_length`] and [`CodecConfig::with_max_depth`].

use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_LENGTH};
use crate::error::CodecError;
use serde::{Deserialize, Serialize};

/// Limits shared by an [`Encoder`](crate::Encoder) and its matching
/// [`Decoder`](crate::Decoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Largest length field either side accepts
    pub max_length: u64,
    /// Deepest nesting of values the decoder enters
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecConfig {
    /// Create a configuration with the default (unbounded) limits
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum length field
    pub const fn with_max_length(mut self, max_length: u64) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the maximum decode nesting depth
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check a length field against the configured maximum
    pub fn check_length(&self, length: u64) -> Result<(), CodecError> {
        if length > self.max_length {
            return Err(CodecError::LengthLimit {
                length,
                limit: self.max_length,
            });
        }
        Ok(())
    }
}
