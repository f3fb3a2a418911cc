//! The additive checksum used to spread keys across buckets. Nothing clever:
//! every byte of the key is summed, and the sum modulo the bucket count picks
//! the slot. Multi-byte characters are summed byte by byte, which can bunch
//! keys together but never changes which key matches which.

use std::hash::{BuildHasher, Hasher};

/// Sums the bytes it's fed.
#[derive(Default)]
pub struct ByteSumHasher(u64);

impl Hasher for ByteSumHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.0 = self.0.wrapping_add(u64::from(*byte));
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

/// Builds new ByteSumHashers on demand.
#[derive(Copy, Clone, Debug, Default)]
pub struct BuildByteSumHasher;

impl BuildHasher for BuildByteSumHasher {
    type Hasher = ByteSumHasher;

    fn build_hasher(&self) -> Self::Hasher {
        ByteSumHasher(0)
    }
}

/// Maps a key onto one of `buckets` slots with the given hash builder.
///
/// The key's raw bytes go straight to the hasher rather than through
/// `Hash for str`, which would tack a terminator byte onto the sum.
///
/// Panics if `buckets` is zero; tables refuse that capacity up front.
pub(crate) fn slot_for<S: BuildHasher>(hash_builder: &S, key: &str, buckets: usize) -> usize {
    let mut h = hash_builder.build_hasher();
    h.write(key.as_bytes());
    (h.finish() % buckets as u64) as usize
}

/// The sum of the key's byte values, modulo `buckets`.
///
/// Panics if `buckets` is zero.
pub fn bucket_index(key: &str, buckets: usize) -> usize {
    slot_for(&BuildByteSumHasher, key, buckets)
}
