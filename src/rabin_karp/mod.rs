// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rabin-Karp substring search, forward and reverse.
//!
//! Both scans roll a 32-bit polynomial hash across the haystack and only
//! compare bytes when the window hash equals the pattern hash. Hash
//! equality is necessary but not sufficient, so every hit is confirmed
//! with a direct slice comparison before a match is declared; an
//! engineered collision can cost extra comparisons but never a false
//! match.
//!
//! Expected running time is O(haystack + pattern). Adversarial hash
//! collisions degrade this to O(haystack * pattern) in the worst case,
//! which is accepted: the point of Rabin-Karp here is near-zero
//! preprocessing cost on small and mid-size patterns, not a worst-case
//! guarantee (the Two-Way scan provides that for long patterns).
//!
//! # Contract
//!
//! Callers must guarantee `1 <= sep.len() <= s.len()`. Violations are
//! programming errors in the caller (an external dispatcher is expected
//! to pre-check lengths) and are trapped by debug assertions rather than
//! reported as recoverable errors. "Not found" is a normal outcome,
//! returned as `None`.

use crate::hash::{hash_bytes, hash_bytes_rev, PRIME_RK};

/// Return the index of the first occurrence of `sep` in `s`, or `None`.
///
/// The returned index is the lowest start of an exact match.
///
/// # Example
///
/// ```
/// use byte_search::rabin_karp;
///
/// assert_eq!(rabin_karp::index(b"abcabc", b"abc"), Some(0));
/// assert_eq!(rabin_karp::index(b"abcdef", b"xyz"), None);
/// ```
pub fn index(s: &[u8], sep: &[u8]) -> Option<usize> {
    debug_assert!(!sep.is_empty(), "pattern must be non-empty");
    debug_assert!(
        sep.len() <= s.len(),
        "pattern ({}) longer than haystack ({})",
        sep.len(),
        s.len()
    );

    let (hash_sep, pow) = hash_bytes(sep);
    let n = sep.len();

    let mut h = 0u32;
    for &b in &s[..n] {
        h = h.wrapping_mul(PRIME_RK).wrapping_add(u32::from(b));
    }
    if h == hash_sep && &s[..n] == sep {
        return Some(0);
    }

    let mut i = n;
    while i < s.len() {
        h = h
            .wrapping_mul(PRIME_RK)
            .wrapping_add(u32::from(s[i]))
            .wrapping_sub(pow.wrapping_mul(u32::from(s[i - n])));
        i += 1;
        if h == hash_sep && &s[i - n..i] == sep {
            return Some(i - n);
        }
    }
    None
}

/// Return the index of the last occurrence of `sep` in `s`, or `None`.
///
/// The mirror of [`index`]: the initial window is anchored at the end of
/// the haystack and slides left, using the reverse hash. The returned
/// index is the highest start of an exact match.
///
/// # Example
///
/// ```
/// use byte_search::rabin_karp;
///
/// assert_eq!(rabin_karp::last_index(b"abcabc", b"abc"), Some(3));
/// ```
pub fn last_index(s: &[u8], sep: &[u8]) -> Option<usize> {
    debug_assert!(!sep.is_empty(), "pattern must be non-empty");
    debug_assert!(
        sep.len() <= s.len(),
        "pattern ({}) longer than haystack ({})",
        sep.len(),
        s.len()
    );

    let (hash_sep, pow) = hash_bytes_rev(sep);
    let n = sep.len();
    let last = s.len() - n;

    let mut h = 0u32;
    for &b in s[last..].iter().rev() {
        h = h.wrapping_mul(PRIME_RK).wrapping_add(u32::from(b));
    }
    if h == hash_sep && &s[last..] == sep {
        return Some(last);
    }

    let mut i = last;
    while i > 0 {
        i -= 1;
        h = h
            .wrapping_mul(PRIME_RK)
            .wrapping_add(u32::from(s[i]))
            .wrapping_sub(pow.wrapping_mul(u32::from(s[i + n])));
        if h == hash_sep && &s[i..i + n] == sep {
            return Some(i);
        }
    }
    None
}
