//! Arithmetic scalars: raw native-endian bit patterns
//!
//! Slices of scalars are written and read as one contiguous block, which is
//! what gives `Vec<u32>` and `[f64; N]` their single-call bulk path.

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};
use alloc::vec;
use alloc::vec::Vec;
use core::mem::size_of;

macro_rules! impl_number {
    ($($ty:ty),* $(,)?) => {$(
        impl Encode for $ty {
            const CATEGORY: Category = Category::Arithmetic;

            #[inline]
            fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
                enc.write_raw(&self.to_ne_bytes())
            }

            fn encode_slice<S: ByteSink>(
                items: &[Self],
                enc: &mut Encoder<S>,
            ) -> Result<usize, CodecError> {
                let mut block = Vec::with_capacity(items.len() * size_of::<$ty>());
                for item in items {
                    block.extend_from_slice(&item.to_ne_bytes());
                }
                enc.write_raw(&block)
            }
        }

        impl Decode for $ty {
            #[inline]
            fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
                let mut raw = [0u8; size_of::<$ty>()];
                let read = dec.read_raw(&mut raw)?;
                *self = <$ty>::from_ne_bytes(raw);
                Ok(read)
            }

            fn decode_slice<S: ByteSource>(
                items: &mut [Self],
                dec: &mut Decoder<S>,
            ) -> Result<usize, CodecError> {
                let mut block = vec![0u8; items.len() * size_of::<$ty>()];
                let read = dec.read_raw(&mut block)?;
                for (item, chunk) in items.iter_mut().zip(block.chunks_exact(size_of::<$ty>())) {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(chunk);
                    *item = <$ty>::from_ne_bytes(raw);
                }
                Ok(read)
            }
        }
    )*};
}

impl_number!(i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize, f32, f64);

// Bytes need no repacking in either direction.
impl Encode for u8 {
    const CATEGORY: Category = Category::Arithmetic;

    #[inline]
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.write_raw(&[*self])
    }

    fn encode_slice<S: ByteSink>(items: &[Self], enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.write_raw(items)
    }
}

impl Decode for u8 {
    #[inline]
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut raw = [0u8; 1];
        let read = dec.read_raw(&mut raw)?;
        *self = raw[0];
        Ok(read)
    }

    fn decode_slice<S: ByteSource>(
        items: &mut [Self],
        dec: &mut Decoder<S>,
    ) -> Result<usize, CodecError> {
        dec.read_raw(items)
    }
}

fn bool_from_byte(byte: u8) -> Result<bool, CodecError> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CodecError::InvalidBool(other)),
    }
}

impl Encode for bool {
    const CATEGORY: Category = Category::Arithmetic;

    #[inline]
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.write_raw(&[u8::from(*self)])
    }

    fn encode_slice<S: ByteSink>(items: &[Self], enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        let block: Vec<u8> = items.iter().map(|b| u8::from(*b)).collect();
        enc.write_raw(&block)
    }
}

impl Decode for bool {
    #[inline]
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut raw = [0u8; 1];
        let read = dec.read_raw(&mut raw)?;
        *self = bool_from_byte(raw[0])?;
        Ok(read)
    }

    fn decode_slice<S: ByteSource>(
        items: &mut [Self],
        dec: &mut Decoder<S>,
    ) -> Result<usize, CodecError> {
        let mut block = vec![0u8; items.len()];
        let read = dec.read_raw(&mut block)?;
        for (item, byte) in items.iter_mut().zip(block) {
            *item = bool_from_byte(byte)?;
        }
        Ok(read)
    }
}

fn char_from_raw(raw: [u8; 4]) -> Result<char, CodecError> {
    let scalar = u32::from_ne_bytes(raw);
    char::from_u32(scalar).ok_or(CodecError::InvalidChar(scalar))
}

impl Encode for char {
    const CATEGORY: Category = Category::Arithmetic;

    #[inline]
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.write_raw(&u32::from(*self).to_ne_bytes())
    }

    fn encode_slice<S: ByteSink>(items: &[Self], enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        let mut block = Vec::with_capacity(items.len() * size_of::<char>());
        for c in items {
            block.extend_from_slice(&u32::from(*c).to_ne_bytes());
        }
        enc.write_raw(&block)
    }
}

impl Decode for char {
    #[inline]
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut raw = [0u8; 4];
        let read = dec.read_raw(&mut raw)?;
        *self = char_from_raw(raw)?;
        Ok(read)
    }

    fn decode_slice<S: ByteSource>(
        items: &mut [Self],
        dec: &mut Decoder<S>,
    ) -> Result<usize, CodecError> {
        let mut block = vec![0u8; items.len() * size_of::<char>()];
        let read = dec.read_raw(&mut block)?;
        for (item, chunk) in items.iter_mut().zip(block.chunks_exact(4)) {
            let mut raw = [0u8; 4];
            raw.copy_from_slice(chunk);
            *item = char_from_raw(raw)?;
        }
        Ok(read)
    }
}
