//! Error types for Binarch encode/decode operations

use alloc::string::String;

/// Errors that can occur while encoding or decoding a value
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// IO error reported by a `std::io` sink or source
    #[cfg_attr(feature = "std", error("IO error: {0}"))]
    Io(String),

    /// The byte source ran out before a read completed
    #[cfg_attr(feature = "std", error("Unexpected end of input: needed {needed} bytes, {remaining} remaining"))]
    UnexpectedEof {
        /// The number of bytes the read asked for.
        needed: usize,
        /// The number of bytes the source still held.
        remaining: usize,
    },

    /// The byte sink has no room left for a write
    #[cfg_attr(feature = "std", error("Sink full: needed {needed} bytes, {remaining} available"))]
    SinkFull {
        /// The number of bytes the write asked for.
        needed: usize,
        /// The number of bytes the sink could still take.
        remaining: usize,
    },

    /// Sum-type discriminant outside the alternative list
    #[cfg_attr(feature = "std", error("Invalid discriminant {index} for sum type with {arity} alternatives"))]
    InvalidDiscriminant {
        /// The decoded discriminant.
        index: u64,
        /// The number of alternatives of the destination type.
        arity: usize,
    },

    /// Enumeration repr value that names no variant
    #[cfg_attr(feature = "std", error("Invalid value {value} for enum {name}"))]
    InvalidEnum {
        /// The enumeration's type name.
        name: &'static str,
        /// The decoded repr value.
        value: String,
    },

    /// Byte that is neither 0 nor 1 where a `bool` was expected
    #[cfg_attr(feature = "std", error("Invalid bool byte: {0:#04x}"))]
    InvalidBool(u8),

    /// Value that is not a Unicode scalar where a `char` was expected
    #[cfg_attr(feature = "std", error("Invalid char value: {0:#x}"))]
    InvalidChar(u32),

    /// String payload that is not valid UTF-8
    #[cfg_attr(feature = "std", error("Invalid UTF-8 in string: {0}"))]
    InvalidUtf8(String),

    /// Length field that does not fit the platform's `usize`
    #[cfg_attr(feature = "std", error("Length {0} does not fit in usize"))]
    LengthOverflow(u64),

    /// Length field above the configured maximum
    #[cfg_attr(feature = "std", error("Length {length} exceeds maximum {limit}"))]
    LengthLimit {
        /// The offending length.
        length: u64,
        /// The configured maximum.
        limit: u64,
    },

    /// Values nested deeper than the configured maximum
    #[cfg_attr(feature = "std", error("Nesting depth exceeds maximum {0}"))]
    DepthLimit(usize),

    /// Duration tick count whose seconds do not fit in `u64`
    #[cfg_attr(feature = "std", error("Duration out of range"))]
    DurationOverflow,

    /// Time point earlier than the UNIX epoch
    #[cfg_attr(feature = "std", error("Time point is before the UNIX epoch"))]
    TimeBeforeEpoch,

    /// Input left over after a complete value was decoded
    #[cfg_attr(feature = "std", error("{0} trailing bytes after decoded value"))]
    TrailingBytes(usize),
}

#[cfg(feature = "std")]
impl From<std::io::Error> for CodecError {
    fn from(err: std::io::Error) -> Self {
        CodecError::Io(err.to_string())
    }
}
