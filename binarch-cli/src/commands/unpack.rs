use anyhow::{bail, Context, Result};
use binarch_core::{CodecConfig, Decoder};
use serde_json::Value;
use std::fs;
use tracing::info;

use super::read_input;
use crate::Document;

/// Decode a whole archive, returning the documents and the bytes consumed
///
/// Input left over after the archive is an error.
pub fn decode_archive(data: &[u8], config: CodecConfig) -> Result<(Vec<Document>, usize)> {
    let mut docs: Vec<Document> = Vec::new();
    let mut dec = Decoder::with_config(data, config);
    let read = dec.decode(&mut docs).context("Failed to decode archive")?;

    let rest = dec.into_inner().len();
    if rest > 0 {
        bail!("{} trailing bytes after the archive", rest);
    }

    Ok((docs, read))
}

pub fn execute(input: &str, output: Option<&str>, config: CodecConfig) -> Result<()> {
    info!("Unpacking archive: {}", input);

    let data = read_input(input)?;
    let (docs, read) = decode_archive(&data, config)?;

    info!("Decoded {} documents from {} bytes", docs.len(), read);

    let json = Value::Array(docs.iter().map(Document::to_json).collect());
    let text = serde_json::to_string_pretty(&json).context("Failed to serialize documents")?;

    if let Some(output_path) = output {
        fs::write(output_path, text)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;
        info!("Documents written to: {}", output_path);
    } else {
        println!("{}", text);
    }

    Ok(())
}
