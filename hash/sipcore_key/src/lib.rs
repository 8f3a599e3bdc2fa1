//! Contains the definition of [`Key`], the 128-bit secret that parameterizes
//! every `SipHash` computation.

use std::fmt::Debug;

pub mod arbitrary;

/// The algorithm identifier reported by keys and hashers of this workspace.
pub const ALGORITHM: &str = "SipHash-2-4";

/// The key was built from a byte sequence whose length is not exactly
/// [`Key::LEN`] bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
#[error("SipHash key must be {expected} bytes, got {length}", expected = Key::LEN)]
pub struct InvalidKeyLength {
    /// The length of the rejected byte sequence.
    pub length: usize,
}

/// An immutable 16-byte `SipHash` key.
///
/// The key is interpreted as two little-endian 64-bit halves, see
/// [`Key::left_half`] and [`Key::right_half`]. The bytes never change after
/// construction, therefore the key can be freely copied and shared across
/// threads.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    bytes: [u8; 16],
}

static_assertions::assert_impl_all!(Key: Send, Sync, Copy);
static_assertions::const_assert_eq!(std::mem::size_of::<Key>(), Key::LEN);

impl Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

impl Key {
    /// The number of bytes in a key.
    pub const LEN: usize = 16;

    /// Creates a key from the given byte sequence.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidKeyLength`] if `bytes` is not exactly [`Self::LEN`]
    /// bytes long.
    pub fn new(bytes: &[u8]) -> Result<Self, InvalidKeyLength> {
        <[u8; Self::LEN]>::try_from(bytes)
            .map(Self::from_bytes)
            .map_err(|_| InvalidKeyLength { length: bytes.len() })
    }

    /// Creates a key from an array of exactly [`Self::LEN`] bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Self::LEN]) -> Self { Self { bytes } }

    /// Creates a key whose [`Self::left_half`] is `left` and whose
    /// [`Self::right_half`] is `right`.
    #[must_use]
    pub const fn from_halves(left: u64, right: u64) -> Self {
        let left = left.to_le_bytes();
        let right = right.to_le_bytes();

        let mut bytes = [0; Self::LEN];
        let mut i = 0;
        while i < 8 {
            bytes[i] = left[i];
            bytes[i + 8] = right[i];
            i += 1;
        }

        Self { bytes }
    }

    /// The little-endian interpretation of bytes `0..8`.
    #[must_use]
    pub const fn left_half(&self) -> u64 {
        let b = &self.bytes;
        u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
    }

    /// The little-endian interpretation of bytes `8..16`.
    #[must_use]
    pub const fn right_half(&self) -> u64 {
        let b = &self.bytes;
        u64::from_le_bytes([
            b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15],
        ])
    }

    /// Gets the raw bytes of the key.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Self::LEN] { &self.bytes }

    /// Gets the name of the algorithm this key is meant for.
    #[must_use]
    pub const fn algorithm(&self) -> &'static str { ALGORITHM }
}

impl From<[u8; 16]> for Key {
    fn from(bytes: [u8; Self::LEN]) -> Self { Self::from_bytes(bytes) }
}

impl TryFrom<&[u8]> for Key {
    type Error = InvalidKeyLength;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> { Self::new(bytes) }
}

impl AsRef<[u8]> for Key {
    fn as_ref(&self) -> &[u8] { &self.bytes }
}

#[cfg(test)]
mod test;
