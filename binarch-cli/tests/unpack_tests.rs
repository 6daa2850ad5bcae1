use std::fs;
use tempfile::tempdir;

use binarch_cli::{
    commands::{pack, unpack},
    InputFormat,
};
use binarch_core::{to_bytes, CodecConfig, CodecError};
use serde_json::{json, Value};

#[test]
fn pack_then_unpack_restores_json() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let bin_path = td.path().join("out.bin");
    let out_path = td.path().join("back.json");

    let original = json!([
        {"id": 1, "tags": ["a", "b"], "score": 0.5},
        null,
        {"nested": {"deep": [[], {}]}}
    ]);
    fs::write(&in_path, original.to_string()).unwrap();

    pack::execute(
        in_path.to_str().unwrap(),
        bin_path.to_str().unwrap(),
        InputFormat::Json,
        CodecConfig::default(),
        false,
    )
    .unwrap();

    unpack::execute(
        bin_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        CodecConfig::default(),
    )
    .unwrap();

    let back: Value = serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(back, original);
}

#[test]
fn unpack_rejects_truncated_archive() {
    let docs = pack::parse_documents(r#"[{"k":"value"}]"#, InputFormat::Json).unwrap();
    let data = pack::encode_archive(&docs, CodecConfig::default(), false).unwrap();

    for cut in [0, 7, data.len() - 1] {
        assert!(unpack::decode_archive(&data[..cut], CodecConfig::default()).is_err());
    }
}

#[test]
fn unpack_rejects_trailing_bytes() {
    let mut data = to_bytes(&Vec::<binarch_cli::Document>::new()).unwrap().to_vec();
    data.push(0xAA);

    let err = unpack::decode_archive(&data, CodecConfig::default()).unwrap_err();
    assert!(err.to_string().contains("trailing"));
}

#[test]
fn unpack_rejects_bad_discriminant() {
    let mut data = 1u64.to_ne_bytes().to_vec();
    data.extend_from_slice(&99u64.to_ne_bytes());

    assert!(unpack::decode_archive(&data, CodecConfig::default()).is_err());
}

/// An archive holding one document: `levels` nested single-element lists
/// around a null
fn nested_list_archive(levels: usize) -> Vec<u8> {
    let mut data = 1u64.to_ne_bytes().to_vec();
    for _ in 0..levels {
        data.extend_from_slice(&5u64.to_ne_bytes());
        data.extend_from_slice(&1u64.to_ne_bytes());
    }
    data.extend_from_slice(&0u64.to_ne_bytes());
    data
}

#[test]
fn unpack_rejects_excessive_nesting() {
    let data = nested_list_archive(100_000);
    let config = CodecConfig::new().with_max_depth(64);

    let err = unpack::decode_archive(&data, config).unwrap_err();
    assert_eq!(
        err.downcast_ref::<CodecError>(),
        Some(&CodecError::DepthLimit(64))
    );
}

#[test]
fn unpack_accepts_nesting_within_limit() {
    let data = nested_list_archive(20);
    let config = CodecConfig::new().with_max_depth(64);

    let (docs, read) = unpack::decode_archive(&data, config).unwrap();
    assert_eq!(read, data.len());

    let mut depth = 0;
    let mut node = &docs[0];
    while let binarch_cli::Document::List(items) = node {
        depth += 1;
        node = &items[0];
    }
    assert_eq!(depth, 20);
    assert_eq!(*node, binarch_cli::Document::Null(()));
}
