//! The four-lane ARX state shared by every `SipHash` computation.

use sipcore_key::Key;

use crate::{COMPRESSION_ROUNDS, FINALIZATION_ROUNDS};

/// "somepseudorandomlygeneratedbytes", split into four big-endian words.
const MAGIC: [u64; 4] = [
    0x736f_6d65_7073_6575,
    0x646f_7261_6e64_6f6d,
    0x6c79_6765_6e65_7261,
    0x7465_6462_7974_6573,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lanes {
    v0: u64,
    v1: u64,
    v2: u64,
    v3: u64,
}

impl Lanes {
    pub(crate) const fn new(key: &Key) -> Self {
        let k0 = key.left_half();
        let k1 = key.right_half();

        Self {
            v0: MAGIC[0] ^ k0,
            v1: MAGIC[1] ^ k1,
            v2: MAGIC[2] ^ k0,
            v3: MAGIC[3] ^ k1,
        }
    }

    #[inline]
    fn round(&mut self) {
        self.v0 = self.v0.wrapping_add(self.v1);
        self.v2 = self.v2.wrapping_add(self.v3);
        self.v1 = self.v1.rotate_left(13);
        self.v3 = self.v3.rotate_left(16);
        self.v1 ^= self.v0;
        self.v3 ^= self.v2;
        self.v0 = self.v0.rotate_left(32);

        self.v2 = self.v2.wrapping_add(self.v1);
        self.v0 = self.v0.wrapping_add(self.v3);
        self.v1 = self.v1.rotate_left(17);
        self.v3 = self.v3.rotate_left(21);
        self.v1 ^= self.v2;
        self.v3 ^= self.v0;
        self.v2 = self.v2.rotate_left(32);
    }

    /// Absorbs one little-endian message word.
    #[inline]
    pub(crate) fn compress(&mut self, block: u64) {
        self.v3 ^= block;

        for _ in 0..COMPRESSION_ROUNDS {
            self.round();
        }

        self.v0 ^= block;
    }

    /// Runs the finalization rounds and folds the lanes into the digest.
    ///
    /// The final block must already have been compressed.
    pub(crate) fn finish(&mut self) -> u64 {
        self.v2 ^= 0xff;

        for _ in 0..FINALIZATION_ROUNDS {
            self.round();
        }

        self.v0 ^ self.v1 ^ self.v2 ^ self.v3
    }
}
