// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Critical factorization of a search pattern (Crochemore-Perrin).
//!
//! The Two-Way algorithm needs the pattern split into two halves at a
//! *critical* position: a breakpoint where the local period of the
//! pattern equals its global period, so that a mismatch in either half
//! licenses a provably safe shift. The Crochemore-Perrin theorem
//! guarantees such a position exists within the first global period, and
//! that it can be found as the later-starting of two maximal suffixes:
//! one under the plain byte order and one under the reversed byte order.
//!
//! # Algorithm
//!
//! Each maximal-suffix scan walks the pattern once, maintaining:
//!
//! - `start` - where the best suffix candidate begins,
//! - `j` - where the current challenger begins,
//! - `k` - the offset being compared within the current period,
//! - `period` - the period estimate of the candidate suffix.
//!
//! A byte ordering strictly before the candidate's byte extends the
//! candidate over the challenger; a strictly later byte restarts the
//! candidate just past the challenger; equality advances within the
//! period. Linear time, constant extra space beyond the four counters.
//!
//! Choosing the later-starting of the two suffixes (ties to the
//! reverse-order scan) is required for correctness of the Two-Way shift
//! bound, not a heuristic.

/// A critical factorization of a pattern: the breakpoint separating its
/// two synchronizing halves, and the associated period.
///
/// Computed once per pattern by [`critical_factorization`] and consumed
/// by the Two-Way search. For a pattern of length `n`:
/// `0 <= breakpoint <= n`, `period >= 1`, and
/// `breakpoint + period <= n`, so the self-periodicity probe in
/// [`is_periodic`](Self::is_periodic) is always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalFactorization {
    /// Index separating the pattern's left and right halves.
    pub breakpoint: usize,
    /// Length of the shortest prefix-matching period relevant to the
    /// breakpoint. Not necessarily the pattern's global period.
    pub period: usize,
}

impl CriticalFactorization {
    /// Whether `pattern` repeats with `self.period` across the breakpoint:
    /// true iff the prefix before the breakpoint recurs shifted by the
    /// period. Decides which Two-Way scanning strategy applies.
    pub fn is_periodic(&self, pattern: &[u8]) -> bool {
        pattern[..self.breakpoint] == pattern[self.period..self.period + self.breakpoint]
    }
}

/// Compute a critical factorization of a non-empty pattern.
///
/// Runs both maximal-suffix scans and returns the factorization derived
/// from whichever candidate starts at the larger index, ties favoring
/// the reverse-order scan.
///
/// # Example
///
/// ```
/// use byte_search::factorization::critical_factorization;
///
/// let f = critical_factorization(b"banana");
/// assert!(f.breakpoint <= 6);
/// assert!(f.period >= 1);
/// ```
pub fn critical_factorization(pattern: &[u8]) -> CriticalFactorization {
    let (start, period) = maximal_suffix(pattern, Order::Plain);
    let (start_rev, period_rev) = maximal_suffix(pattern, Order::Reversed);
    if start_rev < start {
        CriticalFactorization {
            breakpoint: start,
            period,
        }
    } else {
        CriticalFactorization {
            breakpoint: start_rev,
            period: period_rev,
        }
    }
}

/// Total order a maximal-suffix scan compares bytes under.
#[derive(Clone, Copy)]
enum Order {
    Plain,
    Reversed,
}

/// One maximal-suffix scan. Returns the start index of the maximal
/// suffix under `order` and the period of that suffix.
fn maximal_suffix(pattern: &[u8], order: Order) -> (usize, usize) {
    let n = pattern.len();
    let mut start = 0; // candidate suffix start
    let mut period = 1;
    let mut j = 0; // challenger position
    let mut k = 1; // offset within the current period

    while j + k < n {
        let a = pattern[j + k];
        let b = pattern[start + k - 1];
        let a_before_b = match order {
            Order::Plain => a < b,
            Order::Reversed => a > b,
        };
        if a_before_b {
            // Challenger orders before the candidate byte: the candidate
            // suffix absorbs everything up to the challenger.
            j += k;
            k = 1;
            period = j + 1 - start;
        } else if a == b {
            if k != period {
                k += 1;
            } else {
                j += period;
                k = 1;
            }
        } else {
            // Strictly later byte: a better suffix starts past j.
            j += 1;
            start = j;
            k = 1;
            period = 1;
        }
    }
    (start, period)
}
