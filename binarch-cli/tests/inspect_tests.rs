use std::fs;
use tempfile::tempdir;

use binarch_cli::{
    commands::{inspect, pack},
    InputFormat,
};
use binarch_core::CodecConfig;

#[test]
fn inspect_counts_nodes() {
    let docs = pack::parse_documents(
        r#"[{"a": [1, 2.5, "x"]}, true, null]"#,
        InputFormat::Json,
    )
    .unwrap();
    let data = pack::encode_archive(&docs, CodecConfig::default(), false).unwrap();

    let report = inspect::report(&data, CodecConfig::default()).unwrap();
    assert_eq!(report.documents, 3);
    assert_eq!(report.bytes, data.len());
    assert_eq!(report.kinds["object"], 1);
    assert_eq!(report.kinds["list"], 1);
    assert_eq!(report.kinds["int"], 1);
    assert_eq!(report.kinds["float"], 1);
    assert_eq!(report.kinds["text"], 1);
    assert_eq!(report.kinds["bool"], 1);
    assert_eq!(report.kinds["null"], 1);
    assert_eq!(report.nodes(), 7);
    assert_eq!(report.digest, blake3::hash(&data).to_hex().to_string());
}

#[test]
fn inspect_file_json_and_text() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.json");
    let bin_path = td.path().join("out.bin");
    fs::write(&in_path, r#"[{"k": "v"}]"#).unwrap();

    pack::execute(
        in_path.to_str().unwrap(),
        bin_path.to_str().unwrap(),
        InputFormat::Json,
        CodecConfig::default(),
        false,
    )
    .unwrap();

    inspect::execute(bin_path.to_str().unwrap(), false, CodecConfig::default()).unwrap();
    inspect::execute(bin_path.to_str().unwrap(), true, CodecConfig::default()).unwrap();
}

#[test]
fn inspect_fails_on_garbage() {
    let td = tempdir().unwrap();
    let path = td.path().join("garbage.bin");
    fs::write(&path, [0xFFu8; 5]).unwrap();

    assert!(inspect::execute(path.to_str().unwrap(), false, CodecConfig::default()).is_err());
}

#[test]
fn inspect_honors_max_length() {
    let docs = pack::parse_documents(r#"["abcdefgh"]"#, InputFormat::Json).unwrap();
    let data = pack::encode_archive(&docs, CodecConfig::default(), false).unwrap();

    let tight = CodecConfig::new().with_max_length(4);
    assert!(inspect::report(&data, tight).is_err());
}
