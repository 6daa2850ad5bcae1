use anyhow::{Context, Result};
use binarch_core::CodecConfig;
use colored::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use super::read_input;
use super::unpack::decode_archive;
use crate::document::count_kinds;

/// Summary of one archive
#[derive(Debug, Serialize)]
pub struct InspectReport {
    /// Top-level documents
    pub documents: usize,
    /// Bytes consumed by the decoder
    pub bytes: usize,
    /// BLAKE3 digest of the archive, hex
    pub digest: String,
    /// Nodes per document kind, counted through the whole tree
    pub kinds: BTreeMap<&'static str, usize>,
}

impl InspectReport {
    /// Total nodes across all kinds
    pub fn nodes(&self) -> usize {
        self.kinds.values().sum()
    }
}

/// Decode an archive and summarize it
pub fn report(data: &[u8], config: CodecConfig) -> Result<InspectReport> {
    let (docs, bytes) = decode_archive(data, config)?;
    Ok(InspectReport {
        documents: docs.len(),
        bytes,
        digest: hex::encode(blake3::hash(data).as_bytes()),
        kinds: count_kinds(&docs),
    })
}

pub fn execute(input: &str, json: bool, config: CodecConfig) -> Result<()> {
    info!("Inspecting archive: {}", input);

    let data = read_input(input)?;
    let summary = match report(&data, config) {
        Ok(summary) => summary,
        Err(e) => {
            println!("{} {:#}", "✗".red(), e);
            return Err(e);
        }
    };

    if json {
        let text = serde_json::to_string_pretty(&summary).context("Failed to serialize report")?;
        println!("{}", text);
        return Ok(());
    }

    println!("\n=== Archive ===");
    println!("{} Decoded cleanly", "✓".green());
    println!("Documents:   {}", summary.documents.to_string().green());
    println!("Bytes:       {}", summary.bytes);
    println!("Nodes:       {}", summary.nodes());
    println!("BLAKE3:      {}", summary.digest);
    println!();
    println!("=== Nodes by kind ===");
    for (kind, count) in &summary.kinds {
        let line = format!("{:<8} {}", kind, count);
        if *count == 0 {
            println!("{}", line.dimmed());
        } else {
            println!("{}", line);
        }
    }

    Ok(())
}
