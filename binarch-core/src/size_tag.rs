//! Length fields
//!
//! Every length on the wire goes through [`SizeTag`], which pins it to a
//! single fixed width (`u64`, native endian) regardless of how the container
//! stores its own size. Encoder and decoder therefore agree on the width on
//! every platform.

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

/// A length field, routed through the arithmetic path as a `u64`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SizeTag(u64);

impl SizeTag {
    /// Tag an in-memory length
    pub const fn from_len(len: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self(len as u64)
    }

    /// The raw wire value
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Convert back to an in-memory length
    pub fn to_len(self) -> Result<usize, CodecError> {
        usize::try_from(self.0).map_err(|_| CodecError::LengthOverflow(self.0))
    }
}

impl From<u64> for SizeTag {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Encode for SizeTag {
    const CATEGORY: Category = Category::Arithmetic;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.encode(&self.0)
    }
}

impl Decode for SizeTag {
    // Length fields do not count toward the nesting depth.
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        self.0.decode(dec)
    }
}
