// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

// Each integration test binary compiles this module separately and uses
// a different subset of the helpers.
#![allow(dead_code)]

/// Reference scan: lowest start index of `pattern` in `s`.
pub fn brute_force_index(s: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.len() > s.len() {
        return None;
    }
    s.windows(pattern.len()).position(|w| w == pattern)
}

/// Reference scan: highest start index of `pattern` in `s`.
pub fn brute_force_last_index(s: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.len() > s.len() {
        return None;
    }
    s.windows(pattern.len())
        .rposition(|w| w == pattern)
}

/// Seeded LCG byte generator for reproducible pseudo-random inputs.
pub struct ByteGen {
    state: u64,
}

impl ByteGen {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_byte(&mut self, alphabet: u8) -> u8 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((self.state >> 33) as u8) % alphabet
    }

    pub fn bytes(&mut self, len: usize, alphabet: u8) -> Vec<u8> {
        (0..len).map(|_| self.next_byte(alphabet)).collect()
    }

    pub fn next_usize(&mut self, bound: usize) -> usize {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1);
        ((self.state >> 33) as usize) % bound
    }
}
