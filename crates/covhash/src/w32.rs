//! 32-bit word path: four input bytes folded into the accumulator per round.
//!
//! Used when the target cannot chew 8 bytes per register operation. The full
//! profile keeps the classic MurmurHash3 32-bit body; the fast profile only
//! narrows the two rotations. Both share the standard 16/13/16 avalanche
//! finalizer.

const MUL_A: u32 = 0xcc9e_2d51;
const MUL_B: u32 = 0x1b87_3593;
const SCRAMBLE_ADD: u32 = 0xe654_6b64;

/// Input bytes consumed per mixing round on this path.
pub const WORD_BYTES: usize = 4;

#[inline(always)]
fn avalanche(mut h1: u32) -> u32 {
  h1 ^= h1 >> 16;
  h1 = h1.wrapping_mul(0x85eb_ca6b);
  h1 ^= h1 >> 13;
  h1 = h1.wrapping_mul(0xc2b2_ae35);
  h1 ^= h1 >> 16;
  h1
}

/// Full profile over 32-bit words.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 4.
#[must_use]
pub fn hash_full(data: &[u8], seed: u32) -> u32 {
  assert!(
    data.len() % WORD_BYTES == 0,
    "covhash w32: buffer length must be a multiple of 4 bytes"
  );
  let mut h1 = seed ^ data.len() as u32;

  let (words, _) = data.as_chunks::<4>();
  for w in words {
    let mut k1 = u32::from_le_bytes(*w).wrapping_mul(MUL_A);
    k1 = k1.rotate_left(15);
    k1 = k1.wrapping_mul(MUL_B);

    h1 ^= k1;
    h1 = h1.rotate_left(13);
    h1 = h1.wrapping_mul(5).wrapping_add(SCRAMBLE_ADD);
  }

  avalanche(h1)
}

/// Fast profile over 32-bit words: rotations 13/7 instead of 15/13, same
/// multipliers and finalizer.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 4.
#[must_use]
pub fn hash_fast(data: &[u8], seed: u32) -> u32 {
  assert!(
    data.len() % WORD_BYTES == 0,
    "covhash w32: buffer length must be a multiple of 4 bytes"
  );
  let mut h1 = seed ^ data.len() as u32;

  let (words, _) = data.as_chunks::<4>();
  for w in words {
    let mut k1 = u32::from_le_bytes(*w).wrapping_mul(MUL_A);
    k1 = k1.rotate_left(13);
    k1 = k1.wrapping_mul(MUL_B);

    h1 ^= k1;
    h1 = h1.rotate_left(7);
    h1 = h1.wrapping_mul(5).wrapping_add(SCRAMBLE_ADD);
  }

  avalanche(h1)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_buffer_runs_only_the_finalizer() {
    assert_eq!(hash_full(&[], 0), 0);
    assert_eq!(hash_full(&[], 7), 0x18c9_aec4);
    // Profiles only differ inside the word loop, so they agree on empty input.
    assert_eq!(hash_fast(&[], 7), 0x18c9_aec4);
  }

  #[test]
  fn multi_word_zero_buffers() {
    assert_eq!(hash_full(&[0u8; 12], 0), 0x6386_173f);
    assert_eq!(hash_fast(&[0u8; 12], 0), 0x947b_7137);
  }

  #[test]
  #[should_panic(expected = "multiple of 4")]
  fn full_rejects_ragged_length() {
    let _ = hash_full(&[0u8; 3], 0);
  }

  #[test]
  #[should_panic(expected = "multiple of 4")]
  fn fast_rejects_ragged_length() {
    let _ = hash_fast(&[0u8; 6], 0);
  }
}
