//! Strings: length field (UTF-8 code units) followed by the raw bytes

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};
use alloc::string::{String, ToString};

impl Encode for str {
    const CATEGORY: Category = Category::Text;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        Ok(enc.write_len(self.len())? + enc.write_raw(self.as_bytes())?)
    }
}

impl Encode for String {
    const CATEGORY: Category = Category::Text;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        self.as_str().encode(enc)
    }
}

impl Decode for String {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, mut read) = dec.read_len()?;

        // Reuse the destination's allocation as the read buffer.
        let mut buf = core::mem::take(self).into_bytes();
        buf.clear();
        read += dec.read_raw_chunked(&mut buf, len)?;

        *self = String::from_utf8(buf).map_err(|e| CodecError::InvalidUtf8(e.to_string()))?;
        Ok(read)
    }
}
