//! Multi-value encode and decode

/// Encode several values in order, returning the total bytes written
///
/// `encode!(enc, a, b, c)` is `enc.encode(&(&a, &b, &c))`: the values are
/// folded left to right exactly like a tuple, with no framing between them.
#[macro_export]
macro_rules! encode {
    ($enc:expr, $($value:expr),+ $(,)?) => {
        $enc.encode(&($(&$value,)+))
    };
}

/// Decode several slots in order, returning the total bytes read
///
/// The slot list must match the value list of the corresponding
/// [`encode!`](crate::encode) call, type for type.
#[macro_export]
macro_rules! decode {
    ($dec:expr, $($slot:expr),+ $(,)?) => {
        $dec.decode(&mut ($(&mut $slot,)+))
    };
}
