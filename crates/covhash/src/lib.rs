//! Seeded 32-bit fingerprint hash for execution-trace bitmaps (**NOT CRYPTO**).
//!
//! `covhash` turns a coverage bitmap into a 32-bit digest for deduplication
//! and novelty detection inside a fuzzing loop. It is tuned for one job:
//! scatter well across the 32-bit space at very high call rates. It offers no
//! resistance to deliberate collision construction and must never be used
//! where an attacker picks the input.
//!
//! Two profiles share one contract and are substitutable at build time:
//!
//! - [`Covhash32`] - multi-round mixing, the default.
//! - [`Covhash32Fast`] - fewer rounds and smaller rotations, trading
//!   diffusion quality for raw throughput.
//!
//! The buffer is consumed in words sized to the target: 8 bytes on 64-bit
//! targets, 4 bytes elsewhere. Buffer length **must** be a multiple of
//! [`WORD_BYTES`]; a ragged length panics rather than silently dropping tail
//! bytes. The two width paths interpret the buffer differently and produce
//! different digests for the same bytes.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `fast`  | No      | Points [`Covhash`] and [`hash32`] at the reduced-round profile |
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

// Both width paths stay compiled on every target so tests and benches can
// exercise them; the public types below bind to the native one.
#[doc(hidden)]
pub mod w32;
#[doc(hidden)]
pub mod w64;

pub use traits::FastHash;

/// Number of input bytes consumed per mixing round on this target.
///
/// Buffer lengths passed to any hash in this crate must be a multiple of this.
#[cfg(target_pointer_width = "64")]
pub const WORD_BYTES: usize = w64::WORD_BYTES;
#[cfg(not(target_pointer_width = "64"))]
pub const WORD_BYTES: usize = w32::WORD_BYTES;

/// Full-strength profile: multi-round mixing with a five-entry round-constant
/// schedule and a three-step avalanche finalizer.
#[derive(Clone, Default)]
pub struct Covhash32;

/// Reduced-round profile: single pass, three-entry schedule, smaller
/// rotations, two-step finalizer.
///
/// Measurably cheaper per word than [`Covhash32`] with weaker diffusion.
/// Acceptable for trace-bitmap fingerprints; wrong for anything else.
#[derive(Clone, Default)]
pub struct Covhash32Fast;

/// The profile selected at build time: [`Covhash32`] unless the `fast`
/// feature is enabled.
#[cfg(not(feature = "fast"))]
pub type Covhash = Covhash32;
/// The profile selected at build time: [`Covhash32Fast`].
#[cfg(feature = "fast")]
pub type Covhash = Covhash32Fast;

impl FastHash for Covhash32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  /// # Panics
  ///
  /// Panics if `data.len()` is not a multiple of [`WORD_BYTES`].
  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    #[cfg(target_pointer_width = "64")]
    {
      w64::hash_full(data, seed)
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
      w32::hash_full(data, seed)
    }
  }
}

impl FastHash for Covhash32Fast {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Seed = u32;

  /// # Panics
  ///
  /// Panics if `data.len()` is not a multiple of [`WORD_BYTES`].
  #[inline]
  fn hash_with_seed(seed: u32, data: &[u8]) -> u32 {
    #[cfg(target_pointer_width = "64")]
    {
      w64::hash_fast(data, seed)
    }
    #[cfg(not(target_pointer_width = "64"))]
    {
      w32::hash_fast(data, seed)
    }
  }
}

/// One-shot digest of `data` under `seed` using the build-time default
/// profile.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of [`WORD_BYTES`].
#[inline]
#[must_use]
pub fn hash32(data: &[u8], seed: u32) -> u32 {
  Covhash::hash_with_seed(seed, data)
}
