//! # `SipHash-2-4`
//!
//! A streaming implementation of the `SipHash-2-4` keyed pseudorandom function
//! described by Jean-Philippe Aumasson and Daniel J. Bernstein in their 2012
//! paper "`SipHash`: a fast short-input PRF".
//!
//! A [`Hasher`] is created from a [`Key`], fed with any number of
//! [`Hasher::update`] calls and closed with [`Hasher::finalize`]. The digest
//! only depends on the key and on the concatenation of the updated bytes, not
//! on how the message was split into chunks.
//!
//! ```rust
//! use sipcore::{Hasher, Key};
//!
//! let key = Key::from_bytes([0; 16]);
//!
//! let mut hasher = Hasher::new(key);
//! hasher.update(b"ab");
//! hasher.update(b"cdef");
//!
//! assert_eq!(hasher.finalize(), sipcore::hash(&key, b"abcdef"));
//! ```

use getset::{CopyGetters, Getters};
pub use sipcore_key::{InvalidKeyLength, Key, ALGORITHM};

mod lanes;

use lanes::Lanes;

/// The number of `SipRound`s applied for every compressed message block.
pub const COMPRESSION_ROUNDS: usize = 2;

/// The number of `SipRound`s applied after the final block.
pub const FINALIZATION_ROUNDS: usize = 4;

/// The number of bytes produced by [`Hasher::finalize_bytes`].
pub const DIGEST_LEN: usize = 8;

const BLOCK_LEN: usize = 8;

/// The lifecycle of a [`Hasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum State {
    /// Freshly created or reset; nothing has been absorbed yet.
    #[default]
    Fresh,

    /// At least one [`Hasher::update`] call has been made.
    Absorbing,

    /// The digest has been produced. The hasher must be [`Hasher::reset`]
    /// before it can absorb another message.
    Finalized,
}

/// The streaming `SipHash-2-4` state.
///
/// The hasher owns a copy of its [`Key`], four 64-bit lanes, the tail of the
/// message that doesn't fill a whole 8-byte block yet, and the message length
/// modulo 256. Its footprint is constant regardless of the message size.
///
/// Calling [`Self::update`] or [`Self::finalize`] on a [`State::Finalized`]
/// hasher is a contract violation: it never panics, but the resulting digest
/// is unspecified.
#[derive(Clone, Copy, PartialEq, Eq, Getters, CopyGetters)]
pub struct Hasher {
    /// Gets the key the hasher was created with.
    #[get = "pub"]
    key: Key,

    lanes: Lanes,

    tail: [u8; BLOCK_LEN],
    ntail: usize,

    /// Gets the number of bytes absorbed so far, modulo 256.
    #[get_copy = "pub"]
    total_len: u8,

    /// Gets the current lifecycle state.
    #[get_copy = "pub"]
    state: State,
}

static_assertions::assert_impl_all!(Hasher: Send, Sync, Copy);
static_assertions::const_assert!(std::mem::size_of::<Hasher>() <= 72);

// lanes and buffered bytes are derived from the key and the message
impl std::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hasher")
            .field("state", &self.state)
            .field("total_len", &self.total_len)
            .finish_non_exhaustive()
    }
}

impl Hasher {
    /// Creates a fresh hasher keyed with `key`.
    #[must_use]
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            lanes: Lanes::new(&key),
            tail: [0; BLOCK_LEN],
            ntail: 0,
            total_len: 0,
            state: State::Fresh,
        }
    }

    /// Absorbs `bytes` into the state.
    ///
    /// Full 8-byte blocks are compressed immediately; the remaining bytes are
    /// kept until more input arrives or the hasher is finalized.
    #[allow(clippy::cast_possible_truncation)]
    pub fn update(&mut self, bytes: &[u8]) {
        self.warn_if_finalized("update");
        self.state = State::Absorbing;

        // truncation is the length modulo 256
        self.total_len = self.total_len.wrapping_add(bytes.len() as u8);

        let mut bytes = bytes;

        if self.ntail > 0 {
            let take = bytes.len().min(BLOCK_LEN - self.ntail);

            self.tail[self.ntail..self.ntail + take]
                .copy_from_slice(&bytes[..take]);
            self.ntail += take;
            bytes = &bytes[take..];

            if self.ntail < BLOCK_LEN {
                return;
            }

            self.lanes.compress(u64::from_le_bytes(self.tail));
            self.ntail = 0;
        }

        let mut blocks = bytes.chunks_exact(BLOCK_LEN);
        for block in &mut blocks {
            let mut word = [0; BLOCK_LEN];
            word.copy_from_slice(block);

            self.lanes.compress(u64::from_le_bytes(word));
        }

        let rest = blocks.remainder();
        self.tail[..rest.len()].copy_from_slice(rest);
        self.ntail = rest.len();
    }

    /// Absorbs a single byte, same as `update(&[byte])`.
    pub fn update_byte(&mut self, byte: u8) { self.update(&[byte]); }

    /// Absorbs the final block and produces the 64-bit digest.
    ///
    /// The final block holds the buffered tail in its low bytes and
    /// [`Self::total_len`] in its most significant byte. Afterwards the hasher
    /// is [`State::Finalized`] and must be [`Self::reset`] before reuse.
    pub fn finalize(&mut self) -> u64 {
        self.warn_if_finalized("finalize");

        let mut last = [0; BLOCK_LEN];
        last[..self.ntail].copy_from_slice(&self.tail[..self.ntail]);
        last[BLOCK_LEN - 1] = self.total_len;

        self.lanes.compress(u64::from_le_bytes(last));
        self.state = State::Finalized;

        self.lanes.finish()
    }

    /// Same as [`Self::finalize`], with the digest serialized as little-endian
    /// bytes.
    pub fn finalize_bytes(&mut self) -> [u8; DIGEST_LEN] {
        self.finalize().to_le_bytes()
    }

    /// Produces the digest and immediately resets the hasher so the next
    /// message can be absorbed under the same key.
    pub fn finalize_reset(&mut self) -> u64 {
        let digest = self.finalize();
        self.reset();

        digest
    }

    /// Reinitializes the lanes from the key and discards any absorbed input.
    pub fn reset(&mut self) {
        log::trace!("resetting {ALGORITHM} state from {:?}", self.state);

        *self = Self::new(self.key);
    }

    /// Replaces the key and starts over with a fresh state.
    pub fn set_key(&mut self, key: Key) {
        log::trace!("rekeying {ALGORITHM} state");

        *self = Self::new(key);
    }

    /// Gets the name of the algorithm, `SipHash-2-4`.
    #[must_use]
    pub const fn algorithm(&self) -> &'static str { ALGORITHM }

    fn warn_if_finalized(&self, operation: &str) {
        if self.state == State::Finalized {
            log::warn!(
                "`{operation}` called on a finalized {ALGORITHM} state without \
                 `reset`; the digest is unspecified"
            );
        }
    }
}

impl std::io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
}

/// Computes the digest of `bytes` under `key` in one call.
#[must_use]
pub fn hash(key: &Key, bytes: &[u8]) -> u64 {
    let mut hasher = Hasher::new(*key);
    hasher.update(bytes);
    hasher.finalize()
}

/// Computes the little-endian serialized digest of `bytes` under `key`.
#[must_use]
pub fn hash_bytes(key: &Key, bytes: &[u8]) -> [u8; DIGEST_LEN] {
    hash(key, bytes).to_le_bytes()
}
