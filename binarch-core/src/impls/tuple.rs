//! Tuples: members folded left to right, no arity field
//!
//! This is the same accumulation the top-level multi-value call uses;
//! [`encode!`](crate::encode) and [`decode!`](crate::decode) are thin
//! wrappers that build a tuple of references and hand it here.

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

impl Encode for () {
    const CATEGORY: Category = Category::Tuple;

    fn encode<S: ByteSink>(&self, _enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        Ok(0)
    }
}

impl Decode for () {
    fn decode<S: ByteSource>(&mut self, _dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        Ok(0)
    }
}

macro_rules! tuple_impls {
    ($($name:ident)+) => {
        impl<$($name: Encode),+> Encode for ($($name,)+) {
            const CATEGORY: Category = Category::Tuple;

            #[allow(non_snake_case)]
            fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
                let ($($name,)+) = self;
                Ok(0 $(+ enc.encode($name)?)+)
            }
        }

        impl<$($name: Decode),+> Decode for ($($name,)+) {
            #[allow(non_snake_case)]
            fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
                let ($($name,)+) = self;
                Ok(0 $(+ dec.decode($name)?)+)
            }
        }
    };
}

tuple_impls!(A);
tuple_impls!(A B);
tuple_impls!(A B C);
tuple_impls!(A B C D);
tuple_impls!(A B C D E);
tuple_impls!(A B C D E F);
tuple_impls!(A B C D E F G);
tuple_impls!(A B C D E F G H);
tuple_impls!(A B C D E F G H I);
tuple_impls!(A B C D E F G H I J);
tuple_impls!(A B C D E F G H I J K);
tuple_impls!(A B C D E F G H I J K L);
