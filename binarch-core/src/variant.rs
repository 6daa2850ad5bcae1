//! Sum types with a runtime discriminant
//!
//! A variant value is written as the zero-based index of its active
//! alternative (a `u64`), followed by that alternative's value. Decoding
//! reads the index, finds the alternative by a bounded scan over the
//! alternative list, and switches the destination to it if needed.
//!
//! User enums opt in with [`impl_variant!`](crate::impl_variant); every
//! variant must hold exactly one value, and every held type must implement
//! `Default` so a fresh alternative can be built before decoding into it.
//!
//! ```
//! use binarch_core::{from_bytes, impl_variant, to_bytes};
//!
//! #[derive(Debug, PartialEq)]
//! enum Reading {
//!     Celsius(f32),
//!     Raw(Vec<u8>),
//! }
//!
//! impl Default for Reading {
//!     fn default() -> Self {
//!         Reading::Celsius(0.0)
//!     }
//! }
//!
//! impl_variant!(Reading { Celsius, Raw });
//!
//! let bytes = to_bytes(&Reading::Raw(vec![7, 7])).unwrap();
//! assert_eq!(&bytes[..8], &1u64.to_ne_bytes());
//! assert_eq!(from_bytes::<Reading>(&bytes).unwrap(), Reading::Raw(vec![7, 7]));
//! ```

use crate::category::Category;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

#[cfg(feature = "logging")]
use tracing::warn;

/// A closed set of alternatives, exactly one of which is active
pub trait Variant {
    /// Number of alternatives
    const ARITY: usize;

    /// Zero-based index of the active alternative
    fn index(&self) -> usize;
}

/// Validate a decoded discriminant against the alternative count
#[doc(hidden)]
pub fn check_index(index: u64, arity: usize) -> Result<usize, CodecError> {
    match usize::try_from(index) {
        Ok(i) if i < arity => Ok(i),
        _ => {
            #[cfg(feature = "logging")]
            warn!("Discriminant {} out of range for {} alternatives", index, arity);

            Err(CodecError::InvalidDiscriminant { index, arity })
        }
    }
}

/// Implement [`Variant`], [`Encode`] and [`Decode`] for an enum whose
/// variants each hold one value
///
/// The listed order defines the wire discriminants and must name every
/// variant of the enum.
#[macro_export]
macro_rules! impl_variant {
    ($ty:ident { $($alt:ident),+ $(,)? }) => {
        impl $crate::Variant for $ty {
            const ARITY: usize = [$(stringify!($alt)),+].len();

            #[allow(unused_assignments)]
            fn index(&self) -> usize {
                let mut index = 0usize;
                $(
                    if let Self::$alt(_) = self {
                        return index;
                    }
                    index += 1;
                )+
                index
            }
        }

        impl $crate::Encode for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Variant;

            fn encode<S: $crate::ByteSink>(
                &self,
                enc: &mut $crate::Encoder<S>,
            ) -> ::core::result::Result<usize, $crate::CodecError> {
                let index = $crate::Variant::index(self) as u64;
                let written = enc.encode(&index)?;
                let payload = match self {
                    $(Self::$alt(value) => enc.encode(value)?,)+
                };
                Ok(written + payload)
            }
        }

        impl $crate::Decode for $ty {
            #[allow(unused_assignments)]
            fn decode<S: $crate::ByteSource>(
                &mut self,
                dec: &mut $crate::Decoder<S>,
            ) -> ::core::result::Result<usize, $crate::CodecError> {
                let mut raw = 0u64;
                let read = dec.decode(&mut raw)?;
                let target =
                    $crate::variant::check_index(raw, <Self as $crate::Variant>::ARITY)?;

                let mut index = 0usize;
                $(
                    if index == target {
                        if let Self::$alt(value) = self {
                            return Ok(read + dec.decode(value)?);
                        }
                        let mut value = ::core::default::Default::default();
                        let payload = dec.decode(&mut value)?;
                        *self = Self::$alt(value);
                        return Ok(read + payload);
                    }
                    index += 1;
                )+
                Err($crate::CodecError::InvalidDiscriminant {
                    index: raw,
                    arity: index,
                })
            }
        }
    };
}

impl<T, E> Variant for Result<T, E> {
    const ARITY: usize = 2;

    fn index(&self) -> usize {
        match self {
            Ok(_) => 0,
            Err(_) => 1,
        }
    }
}

impl<T: Encode, E: Encode> Encode for Result<T, E> {
    const CATEGORY: Category = Category::Variant;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        let written = enc.encode(&(self.index() as u64))?;
        let payload = match self {
            Ok(value) => enc.encode(value)?,
            Err(error) => enc.encode(error)?,
        };
        Ok(written + payload)
    }
}

impl<T: Decode + Default, E: Decode + Default> Decode for Result<T, E> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut raw = 0u64;
        let read = dec.decode(&mut raw)?;
        let payload = match (check_index(raw, Self::ARITY)?, self) {
            (0, Ok(value)) => dec.decode(value)?,
            (1, Err(error)) => dec.decode(error)?,
            (0, slot) => {
                let mut value = T::default();
                let n = dec.decode(&mut value)?;
                *slot = Ok(value);
                n
            }
            (_, slot) => {
                let mut error = E::default();
                let n = dec.decode(&mut error)?;
                *slot = Err(error);
                n
            }
        };
        Ok(read + payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::category_of;
    use crate::constants::DISCRIMINANT_SIZE;
    use crate::decoder::{decode_into, from_bytes};
    use crate::encoder::to_bytes;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Clone, PartialEq)]
    enum Shape {
        Circle(f64),
        Label(String),
        Path(Vec<(i32, i32)>),
    }

    impl Default for Shape {
        fn default() -> Self {
            Shape::Circle(0.0)
        }
    }

    crate::impl_variant!(Shape { Circle, Label, Path });

    #[test]
    fn test_arity_and_index() {
        assert_eq!(Shape::ARITY, 3);
        assert_eq!(Shape::Circle(1.0).index(), 0);
        assert_eq!(Shape::Label(String::new()).index(), 1);
        assert_eq!(Shape::Path(Vec::new()).index(), 2);
        assert_eq!(category_of::<Shape>(), Category::Variant);
    }

    #[test]
    fn test_layout() {
        let bytes = to_bytes(&Shape::Label(String::from("hi"))).unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&1u64.to_ne_bytes());
        expected.extend_from_slice(&2u64.to_ne_bytes());
        expected.extend_from_slice(b"hi");
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[test]
    fn test_switches_alternative() {
        let bytes = to_bytes(&Shape::Path(vec![(1, 2), (3, 4)])).unwrap();
        let mut slot = Shape::Label(String::from("old"));
        let read = decode_into(&bytes, &mut slot).unwrap();
        assert_eq!(read, bytes.len());
        assert_eq!(slot, Shape::Path(vec![(1, 2), (3, 4)]));
    }

    #[test]
    fn test_same_alternative_in_place() {
        let bytes = to_bytes(&Shape::Circle(2.5)).unwrap();
        let mut slot = Shape::Circle(9.0);
        decode_into(&bytes, &mut slot).unwrap();
        assert_eq!(slot, Shape::Circle(2.5));
    }

    #[test]
    fn test_out_of_range_leaves_slot() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&3u64.to_ne_bytes());
        bytes.extend_from_slice(&0f64.to_ne_bytes());

        let mut slot = Shape::Label(String::from("keep"));
        let result = decode_into(&bytes, &mut slot);
        assert_eq!(
            result,
            Err(CodecError::InvalidDiscriminant { index: 3, arity: 3 })
        );
        assert_eq!(slot, Shape::Label(String::from("keep")));
    }

    #[test]
    fn test_huge_discriminant() {
        let result: Result<Shape, _> = from_bytes(&u64::MAX.to_ne_bytes());
        assert_eq!(
            result,
            Err(CodecError::InvalidDiscriminant {
                index: u64::MAX,
                arity: 3
            })
        );
    }

    #[test]
    fn test_result_alternatives() {
        let ok: Result<u32, String> = Ok(7);
        let bytes = to_bytes(&ok).unwrap();
        assert_eq!(&bytes[..DISCRIMINANT_SIZE], &0u64.to_ne_bytes());
        assert_eq!(&bytes[DISCRIMINANT_SIZE..], &7u32.to_ne_bytes());

        let err: Result<u32, String> = Err(String::from("boom"));
        let bytes = to_bytes(&err).unwrap();
        assert_eq!(&bytes[..DISCRIMINANT_SIZE], &1u64.to_ne_bytes());

        let mut slot: Result<u32, String> = Ok(1);
        decode_into(&bytes, &mut slot).unwrap();
        assert_eq!(slot, err);

        let result = decode_into(&2u64.to_ne_bytes(), &mut slot);
        assert_eq!(
            result,
            Err(CodecError::InvalidDiscriminant { index: 2, arity: 2 })
        );
        assert_eq!(slot, err);
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(0));
        assert!(check_index(1, 1).is_err());
        assert!(check_index(0, 0).is_err());
    }
}
