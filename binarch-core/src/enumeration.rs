//! Fieldless enums written through their underlying integer repr

use crate::error::CodecError;
use alloc::string::ToString;
use core::fmt::Display;

#[cfg(feature = "logging")]
use tracing::warn;

/// Build the error for a repr value that names no variant
#[doc(hidden)]
pub fn unknown_enum_value<R: Display>(name: &'static str, raw: R) -> CodecError {
    #[cfg(feature = "logging")]
    warn!("Unknown value {} for enum {}", raw, name);

    CodecError::InvalidEnum {
        name,
        value: raw.to_string(),
    }
}

/// Implement [`Encode`](crate::Encode) and [`Decode`](crate::Decode) for a
/// fieldless enum
///
/// The enum is written as `repr`, so the repr's width is the wire width.
/// Every variant must be listed.
///
/// ```
/// use binarch_core::{from_bytes, impl_enum, to_bytes};
///
/// #[derive(Debug, Default, PartialEq)]
/// #[repr(u16)]
/// enum Level {
///     #[default]
///     Low = 1,
///     High = 500,
/// }
///
/// impl_enum!(Level: u16 { Low, High });
///
/// let bytes = to_bytes(&Level::High).unwrap();
/// assert_eq!(bytes.as_ref(), &500u16.to_ne_bytes());
/// assert_eq!(from_bytes::<Level>(&bytes).unwrap(), Level::High);
/// ```
#[macro_export]
macro_rules! impl_enum {
    ($ty:ident : $repr:ty { $($variant:ident),+ $(,)? }) => {
        impl $crate::Encode for $ty {
            const CATEGORY: $crate::Category = $crate::Category::Enumeration;

            fn encode<S: $crate::ByteSink>(
                &self,
                enc: &mut $crate::Encoder<S>,
            ) -> ::core::result::Result<usize, $crate::CodecError> {
                let raw = match self {
                    $(Self::$variant => $ty::$variant as $repr,)+
                };
                enc.encode(&raw)
            }
        }

        impl $crate::Decode for $ty {
            fn decode<S: $crate::ByteSource>(
                &mut self,
                dec: &mut $crate::Decoder<S>,
            ) -> ::core::result::Result<usize, $crate::CodecError> {
                let mut raw: $repr = ::core::default::Default::default();
                let read = dec.decode(&mut raw)?;
                $(
                    if raw == $ty::$variant as $repr {
                        *self = $ty::$variant;
                        return Ok(read);
                    }
                )+
                Err($crate::enumeration::unknown_enum_value(stringify!($ty), raw))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::category::{category_of, Category};
    use crate::decoder::{decode_into, from_bytes};
    use crate::encoder::to_bytes;
    use crate::error::CodecError;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    #[repr(i8)]
    enum Direction {
        #[default]
        North = 0,
        South = -1,
        East = 5,
    }

    crate::impl_enum!(Direction: i8 { North, South, East });

    #[derive(Debug, Default, PartialEq)]
    enum Mode {
        #[default]
        Read,
        Write,
    }

    crate::impl_enum!(Mode: u32 { Read, Write });

    #[test]
    fn test_repr_width_is_wire_width() {
        assert_eq!(to_bytes(&Direction::South).unwrap().as_ref(), &[0xFF]);
        assert_eq!(
            to_bytes(&Mode::Write).unwrap().as_ref(),
            &1u32.to_ne_bytes()
        );
        assert_eq!(category_of::<Mode>(), Category::Enumeration);
    }

    #[test]
    fn test_round_trip_in_container() {
        let dirs = vec![Direction::East, Direction::North, Direction::South];
        let back: Vec<Direction> = from_bytes(&to_bytes(&dirs).unwrap()).unwrap();
        assert_eq!(back, dirs);
    }

    #[test]
    fn test_unknown_value() {
        let mut slot = Direction::East;
        let result = decode_into(&[3], &mut slot);
        assert_eq!(
            result,
            Err(CodecError::InvalidEnum {
                name: "Direction",
                value: String::from("3"),
            })
        );
        assert_eq!(slot, Direction::East);
    }
}
