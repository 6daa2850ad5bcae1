//! Associative containers: ordered and hashed maps and sets
//!
//! Maps write a length field followed by one [`KeyValue`] per entry; sets
//! write a length field followed by their keys. Decoding clears the
//! destination, reserves a bounded amount of capacity for hashed containers,
//! and moves each entry out of a single reusable staging slot.

use crate::category::Category;
use crate::decoder::{prealloc_items, Decoder};
use crate::encoder::Encoder;
use crate::error::CodecError;
use crate::io::{ByteSink, ByteSource};
use crate::kv::{KeyValue, KeyValueMut};
use crate::traits::{Decode, Encode};
use alloc::collections::{BTreeMap, BTreeSet};
use core::hash::{BuildHasher, Hash};
use core::mem;

#[cfg(feature = "logging")]
use tracing::debug;

fn encode_entries<'a, S, K, V, I>(
    enc: &mut Encoder<S>,
    len: usize,
    entries: I,
) -> Result<usize, CodecError>
where
    S: ByteSink,
    K: Encode + 'a,
    V: Encode + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut written = enc.write_len(len)?;
    for (key, value) in entries {
        written += enc.encode(&KeyValue::new(key, value))?;
    }
    Ok(written)
}

fn decode_entries<S, K, V, M>(
    dec: &mut Decoder<S>,
    len: usize,
    target: &mut M,
) -> Result<usize, CodecError>
where
    S: ByteSource,
    K: Decode + Default,
    V: Decode + Default,
    M: Extend<(K, V)>,
{
    #[cfg(feature = "logging")]
    debug!("Decoding {} map entries", len);

    let mut key = K::default();
    let mut value = V::default();
    let mut read = 0;
    for _ in 0..len {
        read += dec.decode(&mut KeyValueMut::new(&mut key, &mut value))?;
        target.extend(core::iter::once((mem::take(&mut key), mem::take(&mut value))));
    }
    Ok(read)
}

fn encode_keys<'a, S, K, I>(enc: &mut Encoder<S>, len: usize, keys: I) -> Result<usize, CodecError>
where
    S: ByteSink,
    K: Encode + 'a,
    I: IntoIterator<Item = &'a K>,
{
    let mut written = enc.write_len(len)?;
    for key in keys {
        written += enc.encode(key)?;
    }
    Ok(written)
}

fn decode_keys<S, K, M>(dec: &mut Decoder<S>, len: usize, target: &mut M) -> Result<usize, CodecError>
where
    S: ByteSource,
    K: Decode + Default,
    M: Extend<K>,
{
    let mut key = K::default();
    let mut read = 0;
    for _ in 0..len {
        read += dec.decode(&mut key)?;
        target.extend(core::iter::once(mem::take(&mut key)));
    }
    Ok(read)
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
    const CATEGORY: Category = Category::Map;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        encode_entries(enc, self.len(), self)
    }
}

impl<K: Decode + Default + Ord, V: Decode + Default> Decode for BTreeMap<K, V> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, read) = dec.read_len()?;
        self.clear();
        Ok(read + decode_entries(dec, len, self)?)
    }
}

impl<K: Encode> Encode for BTreeSet<K> {
    const CATEGORY: Category = Category::Set;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        encode_keys(enc, self.len(), self)
    }
}

impl<K: Decode + Default + Ord> Decode for BTreeSet<K> {
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, read) = dec.read_len()?;
        self.clear();
        Ok(read + decode_keys(dec, len, self)?)
    }
}

impl<K: Encode, V: Encode, H> Encode for hashbrown::HashMap<K, V, H> {
    const CATEGORY: Category = Category::Map;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        encode_entries(enc, self.len(), self)
    }
}

impl<K, V, H> Decode for hashbrown::HashMap<K, V, H>
where
    K: Decode + Default + Eq + Hash,
    V: Decode + Default,
    H: BuildHasher,
{
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, read) = dec.read_len()?;
        self.clear();
        self.reserve(len.min(prealloc_items::<(K, V)>()));
        Ok(read + decode_entries(dec, len, self)?)
    }
}

impl<K: Encode, H> Encode for hashbrown::HashSet<K, H> {
    const CATEGORY: Category = Category::Set;

    fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
        encode_keys(enc, self.len(), self)
    }
}

impl<K, H> Decode for hashbrown::HashSet<K, H>
where
    K: Decode + Default + Eq + Hash,
    H: BuildHasher,
{
    fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
        let (len, read) = dec.read_len()?;
        self.clear();
        self.reserve(len.min(prealloc_items::<K>()));
        Ok(read + decode_keys(dec, len, self)?)
    }
}

#[cfg(feature = "std")]
mod std_hashed {
    use super::*;
    use std::collections::{HashMap, HashSet};

    impl<K: Encode, V: Encode, H> Encode for HashMap<K, V, H> {
        const CATEGORY: Category = Category::Map;

        fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
            encode_entries(enc, self.len(), self)
        }
    }

    impl<K, V, H> Decode for HashMap<K, V, H>
    where
        K: Decode + Default + Eq + Hash,
        V: Decode + Default,
        H: BuildHasher,
    {
        fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
            let (len, read) = dec.read_len()?;
            self.clear();
            self.reserve(len.min(prealloc_items::<(K, V)>()));
            Ok(read + decode_entries(dec, len, self)?)
        }
    }

    impl<K: Encode, H> Encode for HashSet<K, H> {
        const CATEGORY: Category = Category::Set;

        fn encode<S: ByteSink>(&self, enc: &mut Encoder<S>) -> Result<usize, CodecError> {
            encode_keys(enc, self.len(), self)
        }
    }

    impl<K, H> Decode for HashSet<K, H>
    where
        K: Decode + Default + Eq + Hash,
        H: BuildHasher,
    {
        fn decode<S: ByteSource>(&mut self, dec: &mut Decoder<S>) -> Result<usize, CodecError> {
            let (len, read) = dec.read_len()?;
            self.clear();
            self.reserve(len.min(prealloc_items::<K>()));
            Ok(read + decode_keys(dec, len, self)?)
        }
    }
}
