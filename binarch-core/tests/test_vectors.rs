//! Byte-exact test vectors for the wire layout
//!
//! The layout is native-endian, so the hex vectors below are the
//! little-endian rendering and are only checked on little-endian targets.
//! The structural assertions run everywhere.

use binarch_core::{
    constants::{DISCRIMINANT_SIZE, LENGTH_FIELD_SIZE, PRESENCE_FLAG_SIZE},
    from_bytes, to_bytes, CodecConfig, CodecError, Decoder,
};
use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

/// Encode a value and render it as lower-case hex
fn hex_of<T: binarch_core::Encode + ?Sized>(value: &T) -> String {
    hex::encode(to_bytes(value).unwrap())
}

#[test]
fn vector_int_sequence() {
    let bytes = to_bytes(&vec![1i32, 2, 3]).unwrap();
    assert_eq!(bytes.len(), LENGTH_FIELD_SIZE + 3 * 4);
    assert_eq!(&bytes[..LENGTH_FIELD_SIZE], &3u64.to_ne_bytes());
}

#[test]
fn vector_absent_optional() {
    let bytes = to_bytes(&Option::<String>::None).unwrap();
    assert_eq!(bytes.len(), PRESENCE_FLAG_SIZE);
    assert_eq!(bytes.as_ref(), &[0x00]);
}

#[test]
fn vector_empty_containers() {
    let zero = 0u64.to_ne_bytes();
    assert_eq!(to_bytes("").unwrap().as_ref(), &zero);
    assert_eq!(to_bytes(&Vec::<Vec<u8>>::new()).unwrap().as_ref(), &zero);
    assert_eq!(to_bytes(&BTreeMap::<u8, String>::new()).unwrap().as_ref(), &zero);
    assert_eq!(to_bytes(&BTreeSet::<u64>::new()).unwrap().as_ref(), &zero);
}

#[test]
fn vector_sum_type_discriminant() {
    let bytes = to_bytes(&Err::<u8, u16>(0x0102)).unwrap();
    assert_eq!(bytes.len(), DISCRIMINANT_SIZE + 2);
    assert_eq!(&bytes[..DISCRIMINANT_SIZE], &1u64.to_ne_bytes());
}

#[cfg(target_endian = "little")]
mod little_endian {
    use super::*;

    #[test]
    fn vector_scalars() {
        assert_eq!(hex_of(&0x1234u16), "3412");
        assert_eq!(hex_of(&-2i32), "feffffff");
        assert_eq!(hex_of(&1.0f32), "0000803f");
        assert_eq!(hex_of(&true), "01");
        assert_eq!(hex_of(&'A'), "41000000");
    }

    #[test]
    fn vector_string() {
        assert_eq!(hex_of("hi"), "02000000000000006869");
    }

    #[test]
    fn vector_int_sequence_hex() {
        assert_eq!(
            hex_of(&vec![1i32, 2, 3]),
            "0300000000000000010000000200000003000000"
        );
    }

    #[test]
    fn vector_fixed_array_has_no_length() {
        assert_eq!(hex_of(&[7u8, 8, 9]), "070809");
        assert_eq!(hex_of(&["a", "b"]), "010000000000000061010000000000000062");
    }

    #[test]
    fn vector_map() {
        let map = BTreeMap::from([(2u8, "b"), (1u8, "a")]);
        assert_eq!(
            hex_of(&map),
            "0200000000000000\
             01010000000000000061\
             02010000000000000062"
        );
    }

    #[test]
    fn vector_optional_and_tuple() {
        assert_eq!(hex_of(&Some(5u8)), "0105");
        assert_eq!(hex_of(&(1u8, Some(2u16), ())), "01010200");
    }

    #[test]
    fn vector_result() {
        assert_eq!(hex_of(&Ok::<u8, String>(9)), "000000000000000009");
    }

    #[test]
    fn vector_duration() {
        assert_eq!(
            hex_of(&Duration::from_secs(1)),
            "00ca9a3b000000000000000000000000"
        );
    }

    #[test]
    fn decode_from_vector() {
        let raw = hex::decode("0200000000000000ffff0100").unwrap();
        let back: Vec<i16> = from_bytes(&raw).unwrap();
        assert_eq!(back, [-1, 1]);
    }
}

#[test]
fn corrupted_vectors() {
    // bool byte outside {0, 1}
    let mut raw = 1u64.to_ne_bytes().to_vec();
    raw.push(0x02);
    let result: Result<Vec<bool>, _> = from_bytes(&raw);
    assert_eq!(result, Err(CodecError::InvalidBool(2)));

    // lone continuation byte
    let mut raw = 1u64.to_ne_bytes().to_vec();
    raw.push(0x80);
    let result: Result<String, _> = from_bytes(&raw);
    assert!(matches!(result, Err(CodecError::InvalidUtf8(_))));

    // surrogate code point
    let result: Result<char, _> = from_bytes(&0xD800u32.to_ne_bytes());
    assert_eq!(result, Err(CodecError::InvalidChar(0xD800)));

    // length field claiming far more than the input holds
    let result: Result<Vec<u8>, _> = from_bytes(&u64::MAX.to_ne_bytes());
    assert!(matches!(result, Err(CodecError::UnexpectedEof { .. })));

    // same field under an explicit limit
    let config = CodecConfig::new().with_max_length(1 << 20);
    let raw = u64::MAX.to_ne_bytes();
    let result = Decoder::with_config(&raw[..], config).decode(&mut Vec::<u8>::new());
    assert_eq!(
        result,
        Err(CodecError::LengthLimit {
            length: u64::MAX,
            limit: 1 << 20
        })
    );
}
