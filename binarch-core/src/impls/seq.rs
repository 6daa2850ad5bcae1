//! Sequence containers
//!
//! Contiguous sequences (`[T]`, `Vec`, byte buffers) hand their elements to
//! `encode_slice` / `decode_slice`, which arithmetic element types answer
//! with one bulk block. Node-based sequences (`VecDeque`, `LinkedList`)
//! always go element by element.
//!
//! Decoding never trusts a length field for allocation: destinations grow in
//! steps of [`MAX_PREALLOC_BYTES`](crate::constants::MAX_PREALLOC_BYTES) as
//! input is consumed, and elements already present are decoded over in place.

use crate::category::Category;
use crate::constants::MAX_PREALLOC_BYTES;
use crate::decoder::{prealloc_items, Decoder};
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};
use alloc::collections::{LinkedList, VecDeque};
use alloc::vec::Vec;
use bytes::{Bytes, BytesMut};

#[cfg(feature = "logging")]
use tracing::debug;

impl<T: Encode> Encode for [T] {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        Ok(enc.write_len(self.len())? + T::encode_slice(self, enc)?)
    }
}

impl<T: Encode> Encode for Vec<T> {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        self.as_slice().encode(enc)
    }
}

impl<T: Decode + Default> Decode for Vec<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, mut read) = dec.read_len()?;

        #[cfg(feature = "logging")]
        debug!("Decoding sequence of {} elements", len);

        self.truncate(len);
        let step = prealloc_items::<T>();
        let mut done = 0;
        while done < len {
            let end = done + step.min(len - done);
            if self.len() < end {
                self.resize_with(end, T::default);
            }
            read += T::decode_slice(&mut self[done..end], dec)?;
            done = end;
        }
        Ok(read)
    }
}

impl<T: Encode> Encode for VecDeque<T> {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        let mut written = enc.write_len(self.len())?;
        for item in self {
            written += enc.encode(item)?;
        }
        Ok(written)
    }
}

impl<T: Decode + Default> Decode for VecDeque<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, mut read) = dec.read_len()?;
        self.truncate(len);
        for item in self.iter_mut() {
            read += dec.decode(item)?;
        }

        self.reserve(prealloc_items::<T>().min(len - self.len()));
        while self.len() < len {
            let mut item = T::default();
            read += dec.decode(&mut item)?;
            self.push_back(item);
        }
        Ok(read)
    }
}

impl<T: Encode> Encode for LinkedList<T> {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        let mut written = enc.write_len(self.len())?;
        for item in self {
            written += enc.encode(item)?;
        }
        Ok(written)
    }
}

impl<T: Decode + Default> Decode for LinkedList<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, mut read) = dec.read_len()?;
        while self.len() > len {
            self.pop_back();
        }
        for item in self.iter_mut() {
            read += dec.decode(item)?;
        }
        while self.len() < len {
            let mut item = T::default();
            read += dec.decode(&mut item)?;
            self.push_back(item);
        }
        Ok(read)
    }
}

impl Encode for Bytes {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        self.as_ref().encode(enc)
    }
}

impl Decode for Bytes {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut buf = BytesMut::new();
        let read = dec.decode(&mut buf)?;
        *self = buf.freeze();
        Ok(read)
    }
}

impl Encode for BytesMut {
    const CATEGORY: Category = Category::Sequence;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        self.as_ref().encode(enc)
    }
}

impl Decode for BytesMut {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, mut read) = dec.read_len()?;
        self.clear();
        while self.len() < len {
            let start = self.len();
            self.resize(start + (len - start).min(MAX_PREALLOC_BYTES), 0);
            read += dec.read_raw(&mut self[start..])?;
        }
        Ok(read)
    }
}
