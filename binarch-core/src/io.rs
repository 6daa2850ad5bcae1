//! Byte sinks and sources
//!
//! The codec only needs sequential raw writes and reads. Anything that
//! implements [`bytes::BufMut`] is a [`ByteSink`] (`Vec<u8>`, `BytesMut`,
//! `&mut [u8]`, ...) and anything that implements [`bytes::Buf`] is a
//! [`ByteSource`] (`&[u8]`, `Bytes`, `std::io::Cursor`, ...). With the `std`
//! feature, [`WriteSink`] and [`ReadSource`] adapt `std::io` streams.

use crate::error::CodecError;
use bytes::{Buf, BufMut};
#[cfg(feature = "std")]
use std::io::{ErrorKind, Read, Write};

/// Sequential destination for raw bytes
pub trait ByteSink {
    /// Write all of `bytes`, or fail without a partial-write guarantee
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError>;
}

/// Sequential origin of raw bytes
pub trait ByteSource {
    /// Fill all of `buf`, or fail
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), CodecError>;
}

impl<B: BufMut> ByteSink for B {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        let remaining = self.remaining_mut();
        if remaining < bytes.len() {
            return Err(CodecError::SinkFull {
                needed: bytes.len(),
                remaining,
            });
        }
        self.put_slice(bytes);
        Ok(())
    }
}

impl<B: Buf> ByteSource for B {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), CodecError> {
        let remaining = self.remaining();
        if remaining < buf.len() {
            return Err(CodecError::UnexpectedEof {
                needed: buf.len(),
                remaining,
            });
        }
        self.copy_to_slice(buf);
        Ok(())
    }
}

/// Sink that discards bytes and only counts them
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    count: usize,
}

impl CountingSink {
    /// Create a counter at zero
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Bytes written so far
    pub const fn count(&self) -> usize {
        self.count
    }
}

impl ByteSink for CountingSink {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.count += bytes.len();
        Ok(())
    }
}

/// Adapter from [`std::io::Write`] to [`ByteSink`]
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct WriteSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: Write> WriteSink<W> {
    /// Wrap a writer
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flush the underlying writer
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: Write> ByteSink for WriteSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), CodecError> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

/// Adapter from [`std::io::Read`] to [`ByteSource`]
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReadSource<R> {
    inner: R,
}

#[cfg(feature = "std")]
impl<R: Read> ReadSource<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: Read> ByteSource for ReadSource<R> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), CodecError> {
        match self.inner.read_exact(buf) {
            Ok(()) => Ok(()),
            // read_exact does not say how much it got before EOF
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(CodecError::UnexpectedEof {
                needed: buf.len(),
                remaining: 0,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
