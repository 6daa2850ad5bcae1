//! # Binarch Core
//!
//! A type-driven binary archive codec: any supported value, however deeply
//! nested, is written to a byte sink and read back into a slot of the same
//! type with a byte-exact, self-consistent layout.
//!
//! ## Modules
//!
//! - `constants`: Wire-format widths and limits
//! - `category`: Static classification of encodable types
//! - `traits`: The `Encode` / `Decode` capability traits
//! - `encoder`: Value encoding and convenience writers
//! - `decoder`: In-place value decoding and convenience readers
//! - `io`: Byte sinks and sources (`bytes` buffers, `std::io` adapters)
//! - `size_tag`: Fixed-width length fields
//! - `kv`: Key/value views used by associative containers
//! - `variant`: Sum types with a runtime discriminant
//! - `enumeration`: Fieldless enums through their repr
//! - `config`: Codec limits
//! - `error`: Error types
//!
//! ## Wire format
//!
//! Everything is native-endian and unframed: scalars are their raw bit
//! pattern, every length is a `u64`, optionals carry a one-byte flag and sum
//! types a `u64` discriminant. Decoding must use the same static types, in
//! the same order, as encoding did.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod category;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod encoder;
pub mod enumeration;
pub mod error;
mod impls;
pub mod io;
pub mod kv;
mod macros;
pub mod size_tag;
pub mod traits;
pub mod variant;

// Re-export commonly used types
pub use category::{category_of, Category};
pub use config::CodecConfig;
pub use decoder::{decode_into, from_bytes, Decoder};
pub use encoder::{encode_into, encoded_len, to_bytes, Encoder};
pub use error::CodecError;
pub use io::{ByteSink, ByteSource, CountingSink};
pub use kv::{KeyValue, KeyValueMut};
pub use size_tag::SizeTag;
pub use traits::{Decode, Encode};
pub use variant::Variant;

#[cfg(feature = "std")]
pub use decoder::read_from;
#[cfg(feature = "std")]
pub use encoder::write_to;
#[cfg(feature = "std")]
pub use io::{ReadSource, WriteSink};

/// Result type alias for Binarch operations
pub type Result<T> = core::result::Result<T, CodecError>;
