// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Substring-search primitives for arbitrary binary data.
//!
//! This crate provides the algorithmic core of a byte-oriented substring
//! search: given a haystack and a pattern, find the first (or last)
//! occurrence, or report absence. All routines operate on raw `&[u8]`
//! slices with no encoding assumptions; `str` callers pass `as_bytes()`.
//!
//! # Architecture
//!
//! Four independent components, leaves first:
//!
//! - [`hash`] - polynomial (Rabin fingerprint) hashing of a byte
//!   sequence, plus the multiplicative factor needed to slide a hash
//!   window by one position.
//! - [`rabin_karp`] - forward and reverse rolling-hash search built on
//!   [`hash`]. Expected linear time; every hash hit is confirmed by a
//!   direct comparison.
//! - [`factorization`] - critical factorization of a pattern into a
//!   maximal-suffix breakpoint and period (Crochemore-Perrin).
//! - [`two_way`] - the Two-Way algorithm for long patterns, combining a
//!   bad-byte shift table with the factorization from [`factorization`].
//!   Amortized linear time, constant extra space.
//!
//! Neither search entry point calls the other: algorithm selection (brute
//! force for tiny patterns, Rabin-Karp for mid-size, Two-Way for long) is
//! the caller's policy, not this crate's.
//!
//! # Concurrency
//!
//! Every routine is a pure function over immutable borrows. All working
//! state (hash accumulators, the shift table, scan memory) is call-local,
//! so searches may run fully in parallel across threads with no
//! synchronization.
//!
//! # Example
//!
//! ```
//! use byte_search::{rabin_karp, two_way};
//!
//! let haystack = b"the quick brown fox";
//! assert_eq!(rabin_karp::index(haystack, b"quick"), Some(4));
//! assert_eq!(two_way::index(haystack, b"brown fox"), Some(10));
//! assert_eq!(rabin_karp::index(haystack, b"wolf"), None);
//! ```

pub mod factorization;
pub mod hash;
pub mod rabin_karp;
pub mod two_way;

// Re-export commonly used types
pub use factorization::{critical_factorization, CriticalFactorization};
pub use two_way::{ShiftTable, Strategy};
