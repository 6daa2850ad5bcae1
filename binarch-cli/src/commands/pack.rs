use anyhow::{Context, Result};
use binarch_core::{CodecConfig, Encoder};
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;
use std::fs;
use tracing::{debug, info};

use super::read_input;
use crate::{Document, InputFormat};

/// Split input text into documents
pub fn parse_documents(content: &str, format: InputFormat) -> Result<Vec<Document>> {
    match format {
        InputFormat::Json => {
            let values: Vec<Value> = serde_json::from_str(content)
                .context("Failed to parse JSON input (expected an array)")?;
            Ok(values.iter().map(Document::from).collect())
        }
        InputFormat::Jsonl => content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                let value: Value = serde_json::from_str(line)
                    .with_context(|| format!("Failed to parse JSON on line {}", i + 1))?;
                Ok(Document::from(&value))
            })
            .collect(),
    }
}

/// Encode documents as one archive: a length field, then each document
pub fn encode_archive(docs: &[Document], config: CodecConfig, progress: bool) -> Result<Vec<u8>> {
    let mut data: Vec<u8> = Vec::new();
    let mut enc = Encoder::with_config(&mut data, config);
    let mut written = enc
        .write_len(docs.len())
        .context("Too many documents for the configured maximum length")?;

    let bar = if progress {
        let bar = ProgressBar::new(docs.len() as u64);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} documents")?.progress_chars("=> "),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    for (i, doc) in docs.iter().enumerate() {
        let n = enc
            .encode(doc)
            .with_context(|| format!("Failed to encode document {}", i))?;
        debug!("Encoded document {} ({}, {} bytes)", i, doc.kind(), n);
        written += n;
        bar.inc(1);
    }
    bar.finish_and_clear();

    debug!("Archive body is {} bytes", written);
    Ok(data)
}

pub fn execute(
    input: &str,
    output: &str,
    format: InputFormat,
    config: CodecConfig,
    progress: bool,
) -> Result<()> {
    info!("Packing documents from {} to {}", input, output);

    let raw = read_input(input)?;
    let content = String::from_utf8(raw).context("Input is not valid UTF-8")?;
    let docs = parse_documents(&content, format)?;

    info!("Found {} documents to pack", docs.len());

    let data = encode_archive(&docs, config, progress)?;

    fs::write(output, &data)
        .with_context(|| format!("Failed to write output file: {}", output))?;

    info!(
        "Successfully packed {} documents ({} bytes total)",
        docs.len(),
        data.len()
    );

    Ok(())
}
