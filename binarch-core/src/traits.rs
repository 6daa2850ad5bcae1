//! The `Encode` / `Decode` capability traits
//!
//! Every supported type implements both. Built-in impls live in
//! [`crate::impls`]; user-defined types implement them by hand and call back
//! into the same [`Encoder`] / [`Decoder`] for their fields, in whatever
//! order the type defines. That hand-written impl is the custom hook: a type
//! that does not override [`Encode::CATEGORY`] is [`Category::Custom`].
//!
//! ```
//! use binarch_core::{ByteSink, ByteSource, Decode, Decoder, Encode, Encoder, Result};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Edge {
//!     from: u32,
//!     to: u32,
//!     label: String,
//! }
//!
//! impl Encode for Edge {
//!     fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize> {
//!         binarch_core::encode!(enc, self.from, self.to, self.label)
//!     }
//! }
//!
//! impl Decode for Edge {
//!     fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize> {
//!         binarch_core::decode!(dec, self.from, self.to, self.label)
//!     }
//! }
//!
//! let edge = Edge { from: 1, to: 2, label: "data".into() };
//! let bytes = binarch_core::to_bytes(&edge).unwrap();
//! let back: Edge = binarch_core::from_bytes(&bytes).unwrap();
//! assert_eq!(back, edge);
//! ```

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};

/// A value that can be written to an [`Encoder`]
pub trait Encode {
    /// Wire category of this type
    const CATEGORY: Category = Category::Custom;

    /// Write this value, returning the number of bytes written
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError>;

    /// Write a contiguous run of values with no length field
    ///
    /// Arithmetic scalars override this with a single bulk write; everything
    /// else goes element by element.
    #[doc(hidden)]
    fn encode_slice<S: ByteSink>(items: &[Self], enc: &mut Encoder<S>) -> Result<usize, CodecError>
    where
        Self: Sized,
    {
        let mut written = 0;
        for item in items {
            written += enc.encode(item)?;
        }
        Ok(written)
    }
}

/// A value that can be rebuilt in place from a [`Decoder`]
pub trait Decode {
    /// Overwrite this value from the source, returning the number of bytes read
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError>;

    /// Fill a contiguous run of slots with no length field
    #[doc(hidden)]
    fn decode_slice<S: ByteSource>(
        items: &mut [Self],
        dec: &mut Decoder<S>,
    ) -> Result<usize, CodecError>
    where
        Self: Sized,
    {
        let mut read = 0;
        for item in items {
            read += dec.decode(item)?;
        }
        Ok(read)
    }
}
