//! Fuzz entry points for binarch-core decoding
//!
//! Each entry point decodes arbitrary bytes into a fixed nested type under a
//! small length limit. A harness (cargo-fuzz, AFL, ...) only has to call
//! them; any panic is a bug.

use binarch_core::{decode_into, from_bytes, impl_variant, CodecConfig, Decoder};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::Duration;

/// Length limit used by every entry point, so junk lengths stay cheap
pub const FUZZ_MAX_LENGTH: u64 = 4096;

type Nested = BTreeMap<String, Vec<Option<(i32, String, [u16; 3])>>>;

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Text(String),
    Ticks(Vec<u64>),
    Key((u8, char)),
}

impl Default for Event {
    fn default() -> Self {
        Event::Text(String::new())
    }
}

impl_variant!(Event { Text, Ticks, Key });

fn config() -> CodecConfig {
    CodecConfig::new().with_max_length(FUZZ_MAX_LENGTH)
}

/// Decode into a map of sequences of optional tuples
pub fn fuzz_decode_nested(data: &[u8]) {
    let mut slot = Nested::new();
    let _ = Decoder::with_config(data, config()).decode(&mut slot);
}

/// Decode scalar-heavy values that validate their bit patterns
pub fn fuzz_decode_scalars(data: &[u8]) {
    let mut slot: (Vec<bool>, Vec<char>, Duration, VecDeque<f64>) = Default::default();
    let _ = Decoder::with_config(data, config()).decode(&mut slot);
}

/// Decode sum types and hashed containers, reusing a populated slot
pub fn fuzz_decode_variants(data: &[u8]) {
    let mut slot: HashMap<u8, Event> = HashMap::new();
    slot.insert(0, Event::Text("seed".into()));
    let _ = Decoder::with_config(data, config()).decode(&mut slot);

    let mut result: Result<Event, Option<String>> = Err(None);
    let _ = Decoder::with_config(data, config()).decode(&mut result);
}

/// Decode through the strict convenience helpers with the default (unbounded) configuration
pub fn fuzz_decode_strict(data: &[u8]) {
    let _ = from_bytes::<Vec<String>>(data);
    let _ = decode_into(data, &mut Option::<Box<(u64, String)>>::None);
}

/// Run every entry point on the same input
pub fn fuzz_all(data: &[u8]) {
    fuzz_decode_nested(data);
    fuzz_decode_scalars(data);
    fuzz_decode_variants(data);
    fuzz_decode_strict(data);
}
