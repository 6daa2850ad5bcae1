//! Optional values: presence flag, then the payload when present

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

impl<T: Encode> Encode for Option<T> {
    const CATEGORY: Category = Category::Optional;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        match self {
            Some(value) => Ok(enc.encode(&true)? + enc.encode(value)?),
            None => enc.encode(&false),
        }
    }
}

impl<T: Decode + Default> Decode for Option<T> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut present = false;
        let mut read = dec.decode(&mut present)?;
        if present {
            read += dec.decode(self.get_or_insert_with(T::default))?;
        } else {
            *self = None;
        }
        Ok(read)
    }
}
