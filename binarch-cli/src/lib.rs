//! Library entry for binarch-cli used by integration tests and embedding.

pub mod commands;
pub mod document;

pub use document::Document;

/// Decode nesting limit applied unless `--max-depth` overrides it
///
/// JSON input is parsed with a nesting limit of 128, and each level costs at
/// most three decode levels, so every packed archive fits well below this.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// How `pack` splits its input into documents
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    /// A single JSON array, one document per element
    Json,
    /// One JSON value per line
    Jsonl,
}

// Re-export commonly used items
pub use crate::commands::{inspect, pack, unpack};
