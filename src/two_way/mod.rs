// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-Way substring search for long patterns.
//!
//! The scan combines two ingredients computed once per pattern:
//!
//! - a [`ShiftTable`] giving a bad-byte shift for the haystack byte
//!   aligned with the pattern's last position, and
//! - a [`CriticalFactorization`] splitting the pattern into two
//!   synchronizing halves at a breakpoint.
//!
//! A window is only verified when the shift-table probe returns zero,
//! and verification always checks the right half first, then the left
//! half. That order is what the Crochemore-Perrin theorem's shift-safety
//! argument relies on: a mismatch at offset `i` in the right half allows
//! the window to advance by `i - breakpoint + 1`, and a left-half
//! mismatch allows a full-period advance. Replacing it with a naive
//! whole-pattern re-check would void the amortized O(haystack) bound,
//! which is this module's defining contract.
//!
//! How the pattern relates to its own period picks one of two scan
//! [`Strategy`] variants, decided once per call:
//!
//! - [`Strategy::Periodic`] - the prefix before the breakpoint recurs
//!   shifted by the period. Overlapping occurrences are possible, so the
//!   scan carries a memory counter recording how many trailing bytes of
//!   the previous window are already known to match.
//! - [`Strategy::TwoDistinctHalves`] - the halves differ, so any
//!   mismatch licenses a maximal shift and no memory is needed.

pub mod shift_table;

pub use shift_table::ShiftTable;

use crate::factorization::{critical_factorization, CriticalFactorization};
use tracing::trace;

/// Scanning strategy for one pattern, fixed by its critical
/// factorization before the haystack scan begins.
///
/// Modeled as an explicit variant rather than a flag threaded through
/// the loop so each scan can be exercised in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The pattern repeats with `period` across the breakpoint; the scan
    /// must track already-verified bytes to stay linear.
    Periodic { breakpoint: usize, period: usize },
    /// The halves are distinct. `shift` is the maximal safe advance,
    /// `max(breakpoint, len - breakpoint) + 1`.
    TwoDistinctHalves { breakpoint: usize, shift: usize },
}

impl Strategy {
    /// Decide the strategy for `pattern` from its factorization.
    pub fn choose(pattern: &[u8], factorization: CriticalFactorization) -> Self {
        let CriticalFactorization { breakpoint, period } = factorization;
        if factorization.is_periodic(pattern) {
            Strategy::Periodic { breakpoint, period }
        } else {
            Strategy::TwoDistinctHalves {
                breakpoint,
                shift: breakpoint.max(pattern.len() - breakpoint) + 1,
            }
        }
    }

    /// Run this strategy's scan of `s` for `pattern`, using a shift
    /// table built from the same pattern.
    pub fn scan(&self, s: &[u8], pattern: &[u8], table: &ShiftTable) -> Option<usize> {
        match *self {
            Strategy::Periodic { breakpoint, period } => {
                scan_periodic(s, pattern, table, breakpoint, period)
            }
            Strategy::TwoDistinctHalves { breakpoint, shift } => {
                scan_two_distinct_halves(s, pattern, table, breakpoint, shift)
            }
        }
    }
}

/// Return the index of the first occurrence of `pattern` in `s`, or
/// `None`.
///
/// Preprocessing is O(pattern) and the scan is amortized O(s): no
/// haystack byte is revisited more than a constant number of times in
/// either strategy.
///
/// Callers must guarantee `1 <= pattern.len() <= s.len()`; violations
/// are caller bugs trapped by debug assertions.
///
/// # Example
///
/// ```
/// use byte_search::two_way;
///
/// assert_eq!(two_way::index(b"aaaaa", b"aaa"), Some(0));
/// assert_eq!(two_way::index(b"abcabc", b"abc"), Some(0));
/// assert_eq!(two_way::index(b"abcdef", b"xyz"), None);
/// ```
pub fn index(s: &[u8], pattern: &[u8]) -> Option<usize> {
    debug_assert!(!pattern.is_empty(), "pattern must be non-empty");
    debug_assert!(
        pattern.len() <= s.len(),
        "pattern ({}) longer than haystack ({})",
        pattern.len(),
        s.len()
    );

    let factorization = critical_factorization(pattern);
    let table = ShiftTable::new(pattern);
    let strategy = Strategy::choose(pattern, factorization);
    trace!(
        breakpoint = factorization.breakpoint,
        period = factorization.period,
        strategy = ?strategy,
        "two-way scan strategy fixed"
    );
    strategy.scan(s, pattern, &table)
}

/// Scan for a self-periodic pattern.
///
/// `memory` counts the trailing bytes of the previous window already
/// known to match, so a window reached by a period-sized advance skips
/// re-verifying them. A raw table shift smaller than the period while
/// memory is live would land inside the already-verified run, so it is
/// widened to `len - period`; any table-driven advance invalidates the
/// memory.
fn scan_periodic(
    s: &[u8],
    pattern: &[u8],
    table: &ShiftTable,
    breakpoint: usize,
    period: usize,
) -> Option<usize> {
    let n = pattern.len();
    let mut memory = 0;
    let mut j = 0;
    while j + n <= s.len() {
        let mut shift = table.shift(s[j + n - 1]);
        if shift > 0 {
            if memory != 0 && shift < period {
                shift = n - period;
            }
            memory = 0;
            j += shift;
            continue;
        }

        // Right half. The last byte already matched via the shift table.
        let mut i = breakpoint.max(memory);
        while i < n - 1 && pattern[i] == s[j + i] {
            i += 1;
        }
        if i < n - 1 {
            j += i - breakpoint + 1;
            memory = 0;
            continue;
        }

        // Left half, skipping bytes the memory already confirmed.
        if memory >= breakpoint || pattern[memory..breakpoint] == s[j + memory..j + breakpoint] {
            return Some(j);
        }
        // Mismatch: remember the repetitions of the period that the
        // right half verified before advancing by one period.
        j += period;
        memory = n - period;
    }
    None
}

/// Scan for a pattern whose halves are distinct: no memory, and every
/// mismatch in the left half licenses the maximal `shift`.
fn scan_two_distinct_halves(
    s: &[u8],
    pattern: &[u8],
    table: &ShiftTable,
    breakpoint: usize,
    shift: usize,
) -> Option<usize> {
    let n = pattern.len();
    let mut j = 0;
    while j + n <= s.len() {
        let table_shift = table.shift(s[j + n - 1]);
        if table_shift > 0 {
            j += table_shift;
            continue;
        }

        // Right half. The last byte already matched via the shift table.
        let mut i = breakpoint;
        while i < n - 1 && pattern[i] == s[j + i] {
            i += 1;
        }
        if i < n - 1 {
            j += i - breakpoint + 1;
            continue;
        }

        // Left half.
        if pattern[..breakpoint] == s[j..j + breakpoint] {
            return Some(j);
        }
        j += shift;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(s: &[u8], pattern: &[u8]) -> Option<usize> {
        s.windows(pattern.len()).position(|w| w == pattern)
    }

    #[test]
    fn test_match_at_start() {
        assert_eq!(index(b"abcdefgh", b"abcd"), Some(0));
    }

    #[test]
    fn test_match_at_last_window() {
        assert_eq!(index(b"abcabc", b"abc"), Some(0));
        assert_eq!(index(b"xxxabc", b"abc"), Some(3));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(index(b"abcdef", b"xyz"), None);
    }

    #[test]
    fn test_overlapping_periodic_pattern() {
        assert_eq!(index(b"aaaaa", b"aaa"), Some(0));
        assert_eq!(index(b"baaaaa", b"aaa"), Some(1));
        assert_eq!(index(b"ababab", b"abab"), Some(0));
        assert_eq!(index(b"xabababy", b"abab"), Some(1));
    }

    #[test]
    fn test_repeated_unit_pattern() {
        // Pattern built by repeating a short unit; haystack offsets the
        // first full occurrence so the memory path gets exercised.
        let pattern: Vec<u8> = b"abc".repeat(5);
        let mut s = b"ab".to_vec();
        s.extend_from_slice(&b"abc".repeat(8));
        assert_eq!(index(&s, &pattern), brute_force(&s, &pattern));
    }

    #[test]
    fn test_near_miss_runs() {
        // Long runs that differ only at the final unit: the periodic
        // scan must keep advancing without quadratic re-verification.
        let pattern = b"aaaaaaab".to_vec();
        let mut s = vec![b'a'; 200];
        s.push(b'b');
        assert_eq!(index(&s, &pattern), Some(193));
    }

    #[test]
    fn test_strategy_choice_is_stable() {
        for pattern in [&b"abab"[..], b"aaaa", b"abcdefg", b"aabaab"] {
            let f = critical_factorization(pattern);
            assert_eq!(Strategy::choose(pattern, f), Strategy::choose(pattern, f));
        }
    }

    #[test]
    fn test_periodic_strategy_for_uniform_pattern() {
        let pattern = b"aaaa";
        let f = critical_factorization(pattern);
        assert!(matches!(
            Strategy::choose(pattern, f),
            Strategy::Periodic { .. }
        ));
    }

    #[test]
    fn test_distinct_halves_strategy_shift_is_maximal() {
        let pattern = b"abcdef";
        let f = critical_factorization(pattern);
        match Strategy::choose(pattern, f) {
            Strategy::TwoDistinctHalves { breakpoint, shift } => {
                assert_eq!(shift, breakpoint.max(pattern.len() - breakpoint) + 1);
            }
            other => panic!("expected distinct halves, got {:?}", other),
        }
    }

    #[test]
    fn test_scans_in_isolation_agree_with_entry_point() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"abababab", b"abab"),
            (b"zzzzabcdzzzz", b"abcd"),
            (b"mississippi", b"issi"),
            (b"aabaabaabaab", b"aabaab"),
        ];
        for (s, pattern) in cases {
            let f = critical_factorization(pattern);
            let table = ShiftTable::new(pattern);
            let strategy = Strategy::choose(pattern, f);
            assert_eq!(strategy.scan(s, pattern, &table), index(s, pattern));
            assert_eq!(index(s, pattern), brute_force(s, pattern));
        }
    }

    #[test]
    fn test_exhaustive_small_binary_inputs() {
        // Every haystack over {a,b} up to length 10 against every
        // pattern up to length 6: periodic structure is densest in a
        // two-letter alphabet, which is where shift and memory bugs hide.
        for hay_len in 1..=10usize {
            for hay_bits in 0..(1u32 << hay_len) {
                let s: Vec<u8> = (0..hay_len)
                    .map(|i| b'a' + ((hay_bits >> i) & 1) as u8)
                    .collect();
                for pat_len in 1..=hay_len.min(6) {
                    for pat_bits in 0..(1u32 << pat_len) {
                        let pattern: Vec<u8> = (0..pat_len)
                            .map(|i| b'a' + ((pat_bits >> i) & 1) as u8)
                            .collect();
                        assert_eq!(
                            index(&s, &pattern),
                            brute_force(&s, &pattern),
                            "s={:?} pattern={:?}",
                            s,
                            pattern
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_binary_content() {
        let s = [255u8, 0, 254, 0, 0, 254, 255];
        assert_eq!(index(&s, &[0, 254]), Some(1));
        assert_eq!(index(&s, &[0, 0, 254]), Some(3));
    }
}
