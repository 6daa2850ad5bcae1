//! References and owning pointers are transparent: same bytes, same category

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use core::mem;

impl<T: Encode + ?Sized> Encode for &T {
    const CATEGORY: Category = T::CATEGORY;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        (**self).encode(enc)
    }
}

impl<T: Encode + ?Sized> Encode for &mut T {
    const CATEGORY: Category = T::CATEGORY;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        (**self).encode(enc)
    }
}

impl<T: Decode + ?Sized> Decode for &mut T {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        (**self).decode(dec)
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    const CATEGORY: Category = T::CATEGORY;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        (**self).encode(enc)
    }
}

impl<T: Decode> Decode for Box<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        (**self).decode(dec)
    }
}

/// Decoded through a `Vec`.
impl<T: Decode + Default> Decode for Box<[T]> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut items = mem::take(self).into_vec();
        let read = dec.decode(&mut items);
        *self = items.into_boxed_slice();
        read
    }
}

impl Decode for Box<str> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut text = String::from(mem::take(self));
        let read = dec.decode(&mut text);
        *self = text.into_boxed_str();
        read
    }
}

impl<T: Encode + ?Sized> Encode for Rc<T> {
    const CATEGORY: Category = T::CATEGORY;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        (**self).encode(enc)
    }
}

/// Decoding clones the pointee first if the `Rc` is shared.
impl<T: Decode + Clone> Decode for Rc<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        Rc::make_mut(self).decode(dec)
    }
}

impl<T: Encode + ?Sized> Encode for Arc<T> {
    const CATEGORY: Category = T::CATEGORY;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        (**self).encode(enc)
    }
}

/// Decoding clones the pointee first if the `Arc` is shared.
impl<T: Decode + Clone> Decode for Arc<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        Arc::make_mut(self).decode(dec)
    }
}
