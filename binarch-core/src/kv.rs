//! Key-value views over map entries
//!
//! A map entry is pushed through the encoder as a [`KeyValue`] (key bytes
//! followed by value bytes) and pulled back through a [`KeyValueMut`] that
//! points at a pair of staging slots.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::traits::{Decode, Encode};

/// Borrowed key and value of one map entry
#[derive(Debug, Clone, Copy)]
pub struct KeyValue<'a, K: ?Sized, V: ?Sized> {
    key: &'a K,
    value: &'a V,
}

impl<'a, K: ?Sized, V: ?Sized> KeyValue<'a, K, V> {
    /// Pair a key with its value
    pub fn new(key: &'a K, value: &'a V) -> Self {
        Self { key, value }
    }

    /// The key
    pub fn key(&self) -> &'a K {
        self.key
    }

    /// The value
    pub fn value(&self) -> &'a V {
        self.value
    }
}

impl<K: Encode + ?Sized, V: Encode + ?Sized> Encode for KeyValue<'_, K, V> {
    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        Ok(enc.encode(self.key)? + enc.encode(self.value)?)
    }
}

/// Mutable staging slots for one map entry
#[derive(Debug)]
pub struct KeyValueMut<'a, K: ?Sized, V: ?Sized> {
    key: &'a mut K,
    value: &'a mut V,
}

impl<'a, K: ?Sized, V: ?Sized> KeyValueMut<'a, K, V> {
    /// Point at a key slot and a value slot
    pub fn new(key: &'a mut K, value: &'a mut V) -> Self {
        Self { key, value }
    }
}

impl<K: Decode + ?Sized, V: Decode + ?Sized> Decode for KeyValueMut<'_, K, V> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        Ok(dec.decode(&mut *self.key)? + dec.decode(&mut *self.value)?)
    }
}
