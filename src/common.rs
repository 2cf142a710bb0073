/* fixtrig | common.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/******************************************************************************/

/// Fixed-point division: `(num << bits) / den`
///
/// This is the only division primitive used by the arctangent functions, and the place to
/// substitute a hardware divider. The numerator is widened to 64 bits before the shift, so
/// `num` may use the full `i32` range as long as the quotient fits in an `i32`.
///
/// `den` must not be zero.
#[inline]
pub const fn qdiv(num: i32, den: i32, bits: u32) -> i32 {
    (((num as i64) << bits) / den as i64) as i32
}

/// Find the bin of a monotonically increasing table in which `key` lies
///
/// Two adjacent entries form a bin; the index of the lower one is returned, so `index + 1` is
/// always a valid index as long as the table holds at least two entries.
pub const fn lut_bracket(key: u32, table: &[u32]) -> usize {
    let mut low = 0;
    let mut high = table.len() - 1;

    while low + 1 < high {
        let mid = (low + high) / 2;
        if key < table[mid] {
            high = mid;
        } else {
            low = mid;
        }
    }
    low
}

/******************************************************************************/
