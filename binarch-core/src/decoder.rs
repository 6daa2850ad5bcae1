//! Value decoding
//!
//! Decoding is in place: the caller supplies a slot of the same static type
//! the value was encoded from, and the decoder overwrites it. Decoding with a
//! different type sequence than the one used at encode time is not detected
//! and yields unspecified (but memory-safe) results.

use crate::config::CodecConfig;
use crate::constants::MAX_PREALLOC_BYTES;
use crate::error::CodecError;
use crate::io::ByteSource;
use crate::size_tag::SizeTag;
use crate::traits::Decode;
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::{trace, warn};

/// Reads values from a byte source
#[derive(Debug)]
pub struct Decoder<S> {
    source: S,
    config: CodecConfig,
    depth: usize,
}

impl<S: ByteSource> Decoder<S> {
    /// Bind a decoder to a source with the default configuration
    pub fn new(source: S) -> Self {
        Self::with_config(source, CodecConfig::default())
    }

    /// Bind a decoder to a source with an explicit configuration
    pub fn with_config(source: S, config: CodecConfig) -> Self {
        Self {
            source,
            config,
            depth: 0,
        }
    }

    /// Decode into one slot, returning the number of bytes read
    ///
    /// Every nested value re-enters here, so [`CodecConfig::max_depth`]
    /// bounds how deep a recursive type may go. To decode several slots in
    /// one call, use [`decode!`](crate::decode) or pass a tuple of mutable
    /// references.
    pub fn decode<T: Decode + ?Sized>(&mut self, slot: &mut T) -> Result<usize, CodecError> {
        if self.depth >= self.config.max_depth {
            #[cfg(feature = "logging")]
            warn!("Rejecting value nested {} levels deep", self.depth);
            return Err(CodecError::DepthLimit(self.config.max_depth));
        }

        self.depth += 1;
        let result = slot.decode(self);
        self.depth -= 1;
        let read = result?;

        #[cfg(feature = "logging")]
        trace!(type_name = core::any::type_name::<T>(), bytes = read, "decoded value");

        Ok(read)
    }

    /// Fill `buf` with raw bytes
    pub fn read_raw(&mut self, buf: &mut [u8]) -> Result<usize, CodecError> {
        self.source.read_bytes(buf)?;
        Ok(buf.len())
    }

    /// Append `len` raw bytes to `buf`, growing it only as input arrives
    pub(crate) fn read_raw_chunked(
        &mut self,
        buf: &mut Vec<u8>,
        len: usize,
    ) -> Result<usize, CodecError> {
        let mut done = 0;
        while done < len {
            let step = (len - done).min(MAX_PREALLOC_BYTES);
            let start = buf.len();
            buf.resize(start + step, 0);
            self.read_raw(&mut buf[start..])?;
            done += step;
        }
        Ok(len)
    }

    /// Read a length field, returning `(length, bytes read)`
    ///
    /// The length is checked against [`CodecConfig::max_length`] before any
    /// destination grows.
    pub fn read_len(&mut self) -> Result<(usize, usize), CodecError> {
        let mut tag = SizeTag::default();
        let read = tag.decode(self)?;

        if let Err(e) = self.config.check_length(tag.get()) {
            #[cfg(feature = "logging")]
            warn!("Rejecting length field {}: {:?}", tag.get(), e);
            return Err(e);
        }

        Ok((tag.to_len()?, read))
    }

    /// The active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Borrow the source
    pub fn get_ref(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the source
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwrap the source
    pub fn into_inner(self) -> S {
        self.source
    }
}

/// Number of `T` slots a decoder allocates ahead of consumed input
pub(crate) fn prealloc_items<T>() -> usize {
    (MAX_PREALLOC_BYTES / core::mem::size_of::<T>().max(1)).max(1)
}

/// Decode a value from a byte slice that must contain exactly that value
///
/// Returns [`CodecError::TrailingBytes`] if input is left over.
pub fn from_bytes<T: Decode + Default>(data: &[u8]) -> Result<T, CodecError> {
    let mut value = T::default();
    let mut dec = Decoder::new(data);
    dec.decode(&mut value)?;

    let rest = dec.into_inner();
    if !rest.is_empty() {
        return Err(CodecError::TrailingBytes(rest.len()));
    }

    Ok(value)
}

/// Decode into an existing slot from the front of a byte slice
///
/// Returns the number of bytes consumed; trailing input is ignored.
pub fn decode_into<T: Decode + ?Sized>(data: &[u8], slot: &mut T) -> Result<usize, CodecError> {
    Decoder::new(data).decode(slot)
}

/// Decode a value from a [`std::io::Read`]
#[cfg(feature = "std")]
pub fn read_from<T: Decode + Default, R: std::io::Read>(reader: R) -> Result<T, CodecError> {
    let mut value = T::default();
    Decoder::new(crate::io::ReadSource::new(reader)).decode(&mut value)?;
    Ok(value)
}
