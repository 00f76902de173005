//! Hash oracles: the key -> `u64` functions a table indexes with.

use core::hash::BuildHasher;

/// Deterministic mapping from a string key to a 64-bit hash.
///
/// A table reduces the result modulo its bucket count, so the only hard
/// requirement is that the same key hashes to the same value for as long as
/// the table lives. Distribution quality affects chain lengths, not
/// correctness.
pub trait HashOracle {
    fn hash(&self, key: &str) -> u64;
}

impl<O: HashOracle + ?Sized> HashOracle for &O {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        (**self).hash(key)
    }
}

/// FNV-1a over the key bytes, rotated left by 13 bits.
///
/// The rotation moves the well-mixed high bits into the low bits that a
/// small power-of-two modulus looks at.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FnvRotate;

impl FnvRotate {
    const OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
    const PRIME: u64 = 1_099_511_628_211;
}

impl HashOracle for FnvRotate {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        let mut h = Self::OFFSET_BASIS;
        for &b in key.as_bytes() {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        h.rotate_left(13)
    }
}

/// Adapts any std [`BuildHasher`] into a [`HashOracle`].
///
/// `RandomState` is deterministic per instance, which is all a table needs.
#[derive(Clone, Debug, Default)]
pub struct BuildHasherOracle<S>(pub S);

impl<S: BuildHasher> HashOracle for BuildHasherOracle<S> {
    #[inline]
    fn hash(&self, key: &str) -> u64 {
        self.0.hash_one(key)
    }
}
