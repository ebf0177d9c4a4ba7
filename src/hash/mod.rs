// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Polynomial (Rabin fingerprint) hashing of byte sequences.
//!
//! The fingerprint of a sequence is a weighted sum of its bytes under a
//! fixed prime base, reduced modulo 2^32 by the natural wraparound of
//! `u32` arithmetic:
//!
//! ```text
//! hash(seq) = seq[0]*P^(n-1) + seq[1]*P^(n-2) + ... + seq[n-1]   (mod 2^32)
//! ```
//!
//! Alongside the hash, each function returns the *roll factor*
//! `P^n mod 2^32`, the multiplier needed to remove the contribution of
//! the byte leaving a sliding window. This is what makes the hash cheap
//! to update as a window advances one byte at a time:
//!
//! ```text
//! h' = h*P + incoming - roll*outgoing
//! ```
//!
//! Overflow is part of the hash definition, not an error; all arithmetic
//! uses explicit wrapping operations.

/// The prime base used in the Rabin-Karp rolling hash.
pub const PRIME_RK: u32 = 16777619;

/// Hash `seq` left to right, returning the fingerprint and roll factor.
///
/// Callers must guarantee `seq` is non-empty; the hash of an empty
/// sequence is not meaningful to the search routines.
///
/// # Example
///
/// ```
/// use byte_search::hash::{hash_bytes, PRIME_RK};
///
/// let (h, _) = hash_bytes(b"ab");
/// assert_eq!(h, (b'a' as u32).wrapping_mul(PRIME_RK) + b'b' as u32);
/// ```
pub fn hash_bytes(seq: &[u8]) -> (u32, u32) {
    let mut hash = 0u32;
    for &b in seq {
        hash = hash.wrapping_mul(PRIME_RK).wrapping_add(u32::from(b));
    }
    (hash, roll_factor(seq.len()))
}

/// Hash `seq` right to left, returning the fingerprint and roll factor.
///
/// Used by searches that anchor their window at the end of the haystack
/// and slide left. The roll factor depends only on length, so it is the
/// same as for [`hash_bytes`].
pub fn hash_bytes_rev(seq: &[u8]) -> (u32, u32) {
    let mut hash = 0u32;
    for &b in seq.iter().rev() {
        hash = hash.wrapping_mul(PRIME_RK).wrapping_add(u32::from(b));
    }
    (hash, roll_factor(seq.len()))
}

/// Compute `PRIME_RK^n mod 2^32` by binary exponentiation.
fn roll_factor(n: usize) -> u32 {
    let mut pow = 1u32;
    let mut sq = PRIME_RK;
    let mut i = n;
    while i > 0 {
        if i & 1 != 0 {
            pow = pow.wrapping_mul(sq);
        }
        sq = sq.wrapping_mul(sq);
        i >>= 1;
    }
    pow
}
