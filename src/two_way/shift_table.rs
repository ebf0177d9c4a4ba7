// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bad-byte shift table for the Two-Way scan.

/// Fixed 256-entry table mapping a haystack byte to a shift distance.
///
/// The entry for a byte that never occurs in the pattern is the full
/// pattern length; for a byte that does occur it is the distance from
/// that byte's last occurrence to the end of the pattern. A zero entry
/// therefore means the probed haystack byte matches the pattern's last
/// byte, and only then is a window worth verifying.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    shifts: [usize; 256],
}

impl ShiftTable {
    /// Build the table for `pattern` (last-occurrence heuristic).
    pub fn new(pattern: &[u8]) -> Self {
        let n = pattern.len();
        let mut shifts = [n; 256];
        for (i, &b) in pattern.iter().enumerate() {
            shifts[usize::from(b)] = n - 1 - i;
        }
        Self { shifts }
    }

    /// Shift distance for the haystack byte aligned with the pattern's
    /// last position.
    #[inline]
    pub fn shift(&self, byte: u8) -> usize {
        self.shifts[usize::from(byte)]
    }
}
