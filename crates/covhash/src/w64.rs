//! 64-bit word path: eight input bytes folded into the accumulator per round.
//!
//! The full profile is a Keccak-constant variant of MurmurHash3 with an
//! unrolled four-word inner block; the fast profile drops the unroll, shrinks
//! the rotations, and shortens the finalizer.

#![allow(clippy::indexing_slicing)] // Fixed-size block parsing

/// Input bytes consumed per mixing round on this path.
pub const WORD_BYTES: usize = 8;

// Round-constant schedule for the full profile (SHA-2 round constants).
const ROUNDS: [u64; 5] = [
  0x428a_2f98_d728_ae22,
  0x7137_4491_23ef_65cd,
  0xb5c0_fbcf_ec4d_3b2f,
  0xe9b5_dba5_8189_dbbc,
  0x3956_c25b_f348_b538,
];

// Shorter schedule for the fast profile (splitmix64 constants).
const ROUNDS_FAST: [u64; 3] = [0x9e37_79b9_7f4a_7c15, 0xbf58_476d_1ce4_e5b9, 0x94d0_49bb_1331_11eb];

const FOLD_MUL: u64 = 0x52dc_e729;
const FOLD_MUL_FAST: u64 = 0x2545_f491;

#[inline(always)]
fn mix(word: u64, a: u64, b: u64) -> u64 {
  let mut k1 = word ^ a;
  k1 = k1.rotate_left(21);
  k1 ^ b
}

#[inline(always)]
fn fold(h1: u64, k1: u64) -> u64 {
  let h1 = (h1 ^ k1).rotate_left(17);
  h1.wrapping_mul(FOLD_MUL)
}

/// Full profile over 64-bit words.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 8.
#[must_use]
pub fn hash_full(data: &[u8], seed: u32) -> u32 {
  assert!(
    data.len() % WORD_BYTES == 0,
    "covhash w64: buffer length must be a multiple of 8 bytes"
  );
  let mut h1 = u64::from(seed ^ data.len() as u32);

  // Four words per iteration; the constant-pair schedule restarts each block.
  let (blocks, rest) = data.as_chunks::<32>();
  for block in blocks {
    let (w, _) = block.as_chunks::<8>();
    h1 = fold(h1, mix(u64::from_le_bytes(w[0]), ROUNDS[0], ROUNDS[1]));
    h1 = fold(h1, mix(u64::from_le_bytes(w[1]), ROUNDS[2], ROUNDS[3]));
    h1 = fold(h1, mix(u64::from_le_bytes(w[2]), ROUNDS[4], ROUNDS[0]));
    h1 = fold(h1, mix(u64::from_le_bytes(w[3]), ROUNDS[1], ROUNDS[2]));
  }

  // 1-3 trailing words, constants indexed by the remaining-word countdown.
  let (words, _) = rest.as_chunks::<8>();
  let mut n = words.len();
  for w in words {
    n -= 1;
    h1 = fold(h1, mix(u64::from_le_bytes(*w), ROUNDS[n % 5], ROUNDS[(n + 1) % 5]));
  }

  h1 ^= h1 >> 29;
  h1 = h1.wrapping_mul(0xff51_afd7_ed55_8ccd);
  h1 ^= h1 >> 33;
  h1 = h1.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
  h1 ^= h1 >> 33;

  (h1 ^ (h1 >> 32)) as u32
}

/// Fast profile over 64-bit words: one loop, three round constants cycled by
/// word index, rotations 13/9, two-step finalizer.
///
/// # Panics
///
/// Panics if `data.len()` is not a multiple of 8.
#[must_use]
pub fn hash_fast(data: &[u8], seed: u32) -> u32 {
  assert!(
    data.len() % WORD_BYTES == 0,
    "covhash w64: buffer length must be a multiple of 8 bytes"
  );
  let mut h1 = u64::from(seed ^ data.len() as u32);

  let (words, _) = data.as_chunks::<8>();
  for (i, w) in words.iter().enumerate() {
    let mut k1 = u64::from_le_bytes(*w) ^ ROUNDS_FAST[i % 3];
    k1 = k1.rotate_left(13);
    k1 ^= ROUNDS_FAST[(i + 1) % 3];

    h1 ^= k1;
    h1 = h1.rotate_left(9);
    h1 = h1.wrapping_mul(FOLD_MUL_FAST);
  }

  h1 ^= h1 >> 15;
  h1 = h1.wrapping_mul(0xc2b2_ae3d_27d4_eb4f);
  h1 ^= h1 >> 15;
  h1 = h1.wrapping_mul(0x1656_67b1_9e37_79f9);

  (h1 ^ (h1 >> 32)) as u32
}
