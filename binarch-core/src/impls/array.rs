//! Fixed-size arrays: no length field, the arity is part of the type

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

/// Compile-time guard: evaluating `NonEmpty::<0>::CHECK` fails the build
struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    const CHECK: () = assert!(N > 0, "fixed-size arrays of length zero are not encodable");
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    const CATEGORY: Category = Category::FixedArray;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        #[allow(clippy::let_unit_value)]
        let () = NonEmpty::<N>::CHECK;
        T::encode_slice(self, enc)
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        #[allow(clippy::let_unit_value)]
        let () = NonEmpty::<N>::CHECK;
        T::decode_slice(self, dec)
    }
}
