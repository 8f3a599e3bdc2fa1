//! Adapters that plug the `SipHash-2-4` core into the standard library hashing
//! machinery, along with keyed hash map/set aliases.

use std::hash::BuildHasher;

use sipcore::{Hasher, Key};

/// A [`std::hash::Hasher`] computing `SipHash-2-4` under a fixed key.
///
/// Integers are fed as little-endian bytes, so the same sequence of writes
/// produces the same value on every platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipHasher24(Hasher);

impl SipHasher24 {
    /// Creates a hasher keyed with `key`.
    #[must_use]
    pub const fn new(key: Key) -> Self { Self(Hasher::new(key)) }

    /// Gets the underlying streaming state.
    #[must_use]
    pub const fn inner(&self) -> &Hasher { &self.0 }
}

impl std::hash::Hasher for SipHasher24 {
    fn finish(&self) -> u64 {
        // finalizing consumes the lanes; `finish` may be called repeatedly
        let mut state = self.0;
        state.finalize()
    }

    fn write(&mut self, bytes: &[u8]) { self.0.update(bytes); }

    fn write_u8(&mut self, i: u8) { self.0.update_byte(i); }

    fn write_u16(&mut self, i: u16) { self.0.update(&i.to_le_bytes()); }

    fn write_u32(&mut self, i: u32) { self.0.update(&i.to_le_bytes()); }

    fn write_u64(&mut self, i: u64) { self.0.update(&i.to_le_bytes()); }

    fn write_u128(&mut self, i: u128) { self.0.update(&i.to_le_bytes()); }

    fn write_usize(&mut self, i: usize) { self.0.update(&i.to_le_bytes()); }

    fn write_i8(&mut self, i: i8) { self.0.update(&i.to_le_bytes()); }

    fn write_i16(&mut self, i: i16) { self.0.update(&i.to_le_bytes()); }

    fn write_i32(&mut self, i: i32) { self.0.update(&i.to_le_bytes()); }

    fn write_i64(&mut self, i: i64) { self.0.update(&i.to_le_bytes()); }

    fn write_i128(&mut self, i: i128) { self.0.update(&i.to_le_bytes()); }

    fn write_isize(&mut self, i: isize) { self.0.update(&i.to_le_bytes()); }
}

/// Builds [`SipHasher24`] instances that all share one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSipHasher24 {
    key: Key,
}

impl BuildSipHasher24 {
    /// Creates a builder whose hashers are keyed with `key`.
    #[must_use]
    pub const fn new(key: Key) -> Self { Self { key } }

    /// Gets the key handed to every built hasher.
    #[must_use]
    pub const fn key(&self) -> &Key { &self.key }
}

impl BuildHasher for BuildSipHasher24 {
    type Hasher = SipHasher24;

    fn build_hasher(&self) -> Self::Hasher { SipHasher24::new(self.key) }
}

/// A type alias for a hash map keyed with `SipHash-2-4`.
pub type HashMap<K, V> = std::collections::HashMap<K, V, BuildSipHasher24>;

/// A type alias for a hash set keyed with `SipHash-2-4`.
pub type HashSet<T> = std::collections::HashSet<T, BuildSipHasher24>;

#[cfg(test)]
mod test;
