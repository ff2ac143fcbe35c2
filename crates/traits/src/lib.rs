//! Core hashing traits for covhash.
//!
//! This crate holds the trait seam between hash implementations and their
//! callers. It is `no_std` compatible and has zero dependencies.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod fast_hash;

pub use fast_hash::FastHash;
