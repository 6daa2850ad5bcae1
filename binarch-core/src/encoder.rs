//! Value encoding

use crate::config::CodecConfig;
use crate::error::CodecError;
use crate::io::{ByteSink, CountingSink};
use crate::size_tag::SizeTag;
use crate::traits::Encode;
use bytes::{Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::trace;

/// Writes values to a byte sink
///
/// The encoder owns its sink for the duration of one logical message. It
/// keeps no state between calls besides the sink and its [`CodecConfig`];
/// nested values re-enter the same encoder, so the sink cursor is threaded
/// through the whole call tree.
#[derive(Debug)]
pub struct Encoder<S> {
    sink: S,
    config: CodecConfig,
}

impl<S: ByteSink> Encoder<S> {
    /// Bind an encoder to a sink with the default configuration
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, CodecConfig::default())
    }

    /// Bind an encoder to a sink with an explicit configuration
    pub fn with_config(sink: S, config: CodecConfig) -> Self {
        Self { sink, config }
    }

    /// Encode one value, returning the number of bytes written
    ///
    /// To encode several values in one call, use [`encode!`](crate::encode)
    /// or pass a tuple of references; both fold left to right.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<usize, CodecError> {
        let written = value.encode(self)?;

        #[cfg(feature = "logging")]
        trace!(type_name = core::any::type_name::<T>(), bytes = written, "encoded value");

        Ok(written)
    }

    /// Write raw bytes with no framing
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<usize, CodecError> {
        self.sink.write_bytes(bytes)?;
        Ok(bytes.len())
    }

    /// Write a length field
    pub fn write_len(&mut self, len: usize) -> Result<usize, CodecError> {
        let tag = SizeTag::from_len(len);
        self.config.check_length(tag.get())?;
        self.encode(&tag)
    }

    /// The active configuration
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Borrow the sink
    pub fn get_ref(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Unwrap the sink
    pub fn into_inner(self) -> S {
        self.sink
    }
}

/// Encode a value into a fresh buffer
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Bytes, CodecError> {
    let mut buf = BytesMut::new();
    Encoder::new(&mut buf).encode(value)?;
    Ok(buf.freeze())
}

/// Append the encoding of a value to an existing buffer
pub fn encode_into<T: Encode + ?Sized>(
    value: &T,
    buf: &mut alloc::vec::Vec<u8>,
) -> Result<usize, CodecError> {
    Encoder::new(buf).encode(value)
}

/// Count the bytes a value encodes to without storing them
pub fn encoded_len<T: Encode + ?Sized>(value: &T) -> Result<usize, CodecError> {
    let mut enc = Encoder::new(CountingSink::new());
    enc.encode(value)?;
    Ok(enc.into_inner().count())
}

/// Encode a value to a [`std::io::Write`]
#[cfg(feature = "std")]
pub fn write_to<T: Encode + ?Sized, W: std::io::Write>(
    value: &T,
    writer: W,
) -> Result<usize, CodecError> {
    let mut enc = Encoder::new(crate::io::WriteSink::new(writer));
    let written = enc.encode(value)?;
    enc.get_mut().flush()?;
    Ok(written)
}
