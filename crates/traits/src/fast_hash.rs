//! Fast non-cryptographic hash trait (**NOT CRYPTO**).

use core::fmt::Debug;

/// A one-shot seeded non-cryptographic hash.
///
/// Implementations fingerprint byte buffers for deduplication, sharding, and
/// coverage-novelty detection in non-adversarial settings. They are **not**
/// suitable for signatures, MACs, password hashing, or any input an attacker
/// controls with intent to collide.
///
/// The trait is intentionally one-shot: the target use is hashing a complete
/// in-memory buffer millions of times per second, where streaming state would
/// only add overhead.
pub trait FastHash {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// Hash output type.
  type Output: Copy + Eq + Debug + Default;

  /// Seed type.
  type Seed: Copy + Debug + Default;

  /// Compute the hash of `data` using a default seed.
  #[inline]
  #[must_use]
  fn hash(data: &[u8]) -> Self::Output {
    Self::hash_with_seed(Self::Seed::default(), data)
  }

  /// Compute the hash of `data` using `seed`.
  ///
  /// Same seed and same bytes always produce the same output.
  #[must_use]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output;
}
