//! Wire-format constants and limits

/// Width in bytes of every length field (a native-endian `u64`)
pub const LENGTH_FIELD_SIZE: usize = 8;

/// Width in bytes of a sum-type discriminant (a native-endian `u64`)
pub const DISCRIMINANT_SIZE: usize = 8;

/// Width in bytes of the presence flag written before an optional payload
pub const PRESENCE_FLAG_SIZE: usize = 1;

/// Width in bytes of an encoded duration (nanoseconds as a native-endian `u128`)
pub const DURATION_SIZE: usize = 16;

/// Default upper bound on length fields: no limit
pub const DEFAULT_MAX_LENGTH: u64 = u64::MAX;

/// Default upper bound on decode nesting depth: no limit
pub const DEFAULT_MAX_DEPTH: usize = usize::MAX;

/// Most bytes a decoder allocates ahead of the input it has consumed
///
/// Sequences, strings and hashed containers grow in steps of this size, so a
/// corrupted length field fails with `UnexpectedEof` once the input runs out
/// instead of requesting the whole claimed size up front.
pub const MAX_PREALLOC_BYTES: usize = 64 * 1024;

/// Nanoseconds per second, used to rebuild durations from their tick count
pub const NANOS_PER_SEC: u128 = 1_000_000_000;
