/* fixtrig | cordic.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

//! Arctangent by coordinate rotations, using only shifts and additions

/******************************************************************************/

include!(concat!(env!("OUT_DIR"), "/cordic_tables.rs"));

/// Number of pseudo-rotations used by [`crate::atan2_cordic()`]
pub const ITERATIONS: usize = 11;

/// Inputs below this are scaled up to keep precision in the shifts
const SCALE_THRESHOLD: i32 = 0x10000;
const SCALE: i32 = 0x1000;

/// Angle of a first-octant point, in brads
///
/// `(x, y)` must be folded into the first octant (`0 <= y <= x`, `x > 0`). The vector is
/// rotated towards the x axis `iterations` times, by atan(2^-1), atan(2^-2), ... and the
/// applied rotations are summed. The 45 degree step is skipped: octant folding already
/// brought the angle below it. `iterations` is clamped to the table size, and `x` must stay
/// below 2^30 to leave room for the rotation gain.
pub const fn vectoring(mut x: i32, mut y: i32, iterations: usize) -> i32 {
    if x < SCALE_THRESHOLD {
        x *= SCALE;
        y *= SCALE;
    }

    let n = if iterations < ATAN_TABLE.len() - 1 { iterations } else { ATAN_TABLE.len() - 1 };
    let mut phi = 0;
    let mut i = 1;
    while i <= n {
        if y >= 0 {
            (x, y) = (x + (y >> i), y - (x >> i));
            phi += ATAN_TABLE[i];
        } else {
            (x, y) = (x - (y >> i), y + (x >> i));
            phi -= ATAN_TABLE[i];
        }
        i += 1;
    }

    // PI = 0x10000 --> PI = 0x4000
    phi >> 2
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{octant::Octant, BRAD_PI};

    fn error(x: i32, y: i32, iterations: usize) -> f64 {
        let folded = Octant::fold(x, y);
        let angle = folded.base_angle() as i32 + vectoring(folded.x, folded.y, iterations);
        let exact = libm::atan2(y as f64, x as f64) * BRAD_PI as f64 / core::f64::consts::PI;
        libm::fabs(angle as f64 - exact)
    }

    #[test]
    fn test_atan_table() {
        assert_eq!(
            ATAN_TABLE,
            [
                0x4000, 0x25C8, 0x13F6, 0x0A22, 0x0516, 0x028C, 0x0146, 0x00A3,
                0x0051, 0x0029, 0x0014, 0x000A, 0x0005, 0x0003, 0x0001, 0x0001
            ]
        );
    }

    #[test]
    fn test_vectoring() {
        assert_eq!(vectoring(1, 0, ITERATIONS), 0);
        // atan(1/2) = 0x25C8 / 4
        assert_eq!(vectoring(2, 1, 1), 0x25C8 >> 2);
        // Iteration counts past the table are clamped
        assert_eq!(vectoring(4000, 1000, 100), vectoring(4000, 1000, ATAN_TABLE.len() - 1));
    }

    #[test]
    fn test_convergence_bound() {
        // The error itself is not monotone, a rotation can overshoot the point. After n
        // rotations the residual angle is at most the last rotation applied, and that bound
        // shrinks with every iteration.
        for &(x, y) in &[(1000, 300), (4000, 1000), (1000, 1), (100, 41), (7, 2), (1000, 577)] {
            let mut previous_bound = f64::MAX;
            for n in 1..=ITERATIONS {
                let bound = (ATAN_TABLE[n] >> 2) as f64 + 3.0;
                assert!(bound < previous_bound);
                assert!(error(x, y, n) <= bound, "({x}, {y}) after {n} iterations");
                previous_bound = bound;
            }
        }
    }

    #[test]
    fn test_convergence_final() {
        let final_error = error(4000, 1000, ITERATIONS);
        assert!(final_error < 1.0);
        for n in 0..ITERATIONS {
            assert!(final_error <= error(4000, 1000, n));
        }
    }
}
