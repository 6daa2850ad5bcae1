//! Durations and time points
//!
//! A duration's tick count is its total nanoseconds, written as a `u128`.
//! A time point is its duration since the UNIX epoch.

use crate::category::Category;
use crate::constants::NANOS_PER_SEC;
use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};
use core::time::Duration;

impl Encode for Duration {
    const CATEGORY: Category = Category::Duration;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        enc.encode(&self.as_nanos())
    }
}

impl Decode for Duration {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let mut ticks = 0u128;
        let read = dec.decode(&mut ticks)?;
        let secs = u64::try_from(ticks / NANOS_PER_SEC).map_err(|_| CodecError::DurationOverflow)?;
        // remainder is below one billion
        let nanos = (ticks % NANOS_PER_SEC) as u32;
        *self = Duration::new(secs, nanos);
        Ok(read)
    }
}

#[cfg(feature = "std")]
mod system_time {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    impl Encode for SystemTime {
        const CATEGORY: Category = Category::TimePoint;

        fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
            let since_epoch = self
                .duration_since(UNIX_EPOCH)
                .map_err(|_| CodecError::TimeBeforeEpoch)?;
            enc.encode(&since_epoch)
        }
    }

    impl Decode for SystemTime {
        fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
            let mut since_epoch = Duration::ZERO;
            let read = dec.decode(&mut since_epoch)?;
            *self = UNIX_EPOCH
                .checked_add(since_epoch)
                .ok_or(CodecError::DurationOverflow)?;
            Ok(read)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DURATION_SIZE;
    use crate::decoder::from_bytes;
    use crate::encoder::to_bytes;

    #[test]
    fn test_duration_is_nanosecond_ticks() {
        let d = Duration::new(3, 500);
        let bytes = to_bytes(&d).unwrap();
        assert_eq!(bytes.len(), DURATION_SIZE);
        assert_eq!(bytes.as_ref(), &3_000_000_500u128.to_ne_bytes());

        let back: Duration = from_bytes(&bytes).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_duration_extremes() {
        let back: Duration = from_bytes(&to_bytes(&Duration::MAX).unwrap()).unwrap();
        assert_eq!(back, Duration::MAX);

        let back: Duration = from_bytes(&to_bytes(&Duration::ZERO).unwrap()).unwrap();
        assert_eq!(back, Duration::ZERO);
    }

    #[test]
    fn test_duration_overflow() {
        let result: Result<Duration, _> = from_bytes(&u128::MAX.to_ne_bytes());
        assert_eq!(result, Err(CodecError::DurationOverflow));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_system_time() {
        use std::time::{SystemTime, UNIX_EPOCH};

        let t = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_789);
        let bytes = to_bytes(&t).unwrap();
        assert_eq!(bytes, to_bytes(&Duration::new(1_700_000_000, 123_456_789)).unwrap());

        let back: SystemTime = from_bytes(&bytes).unwrap();
        assert_eq!(back, t);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_system_time_before_epoch() {
        use std::time::UNIX_EPOCH;

        let t = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(to_bytes(&t), Err(CodecError::TimeBeforeEpoch));
    }
}
