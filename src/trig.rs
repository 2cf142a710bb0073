/* fixtrig | trig.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Sine, cosine and tangent by table lookup with linear interpolation */

/******************************************************************************/

use crate::lut::*;
use crate::{BRAD_2PI, BRAD_HPI, BRAD_PI};

/// Fractional bits of the values returned by [`isin()`], [`icos()`] and [`itan()`]
pub const TRIG_FP: u32 = 12;

/******************************************************************************/

/// Sine as a Q12 fixed-point number
///
/// `theta` is in brads, any value is accepted and wrapped to a full circle. The result lies in
/// `[-4096, 4096]`.
///
/// ```
/// use fixtrig::{isin, BRAD_HPI};
/// assert_eq!(isin(BRAD_HPI as i32), 1 << 12);
/// assert_eq!(isin(-(BRAD_HPI as i32)), -(1 << 12));
/// ```
pub const fn isin(theta: i32) -> i32 {
    let ux = (theta as u32) % BRAD_2PI;
    let h = (ux % SIN_LUT_STRIDE) as i32;
    let quad = ux / SIN_LUT_STRIDE / SIN_LUT_HPI;
    let index = (ux / SIN_LUT_STRIDE % SIN_LUT_HPI) as usize;

    // Odd quadrants walk the quarter wave backwards
    let (ya, yb) = if quad & 1 != 0 {
        let mirrored = SIN_LUT_HPI as usize - index;
        (SIN_LUT[mirrored] as i32, SIN_LUT[mirrored - 1] as i32)
    } else {
        (SIN_LUT[index] as i32, SIN_LUT[index + 1] as i32)
    };

    let y = (ya + ((yb - ya) * h >> SIN_LUT_STRIDE_SHIFT)) >> (SIN_LUT_FP - TRIG_FP);
    if quad & 2 != 0 { -y } else { y }
}

/// Cosine as a Q12 fixed-point number
///
/// Same as [`isin()`], a quarter circle ahead.
pub const fn icos(theta: i32) -> i32 {
    isin(theta.wrapping_add(BRAD_HPI as i32))
}

/// Sine and cosine of the same angle, as Q12 fixed-point numbers
pub const fn isincos(theta: i32) -> (i32, i32) {
    (isin(theta), icos(theta))
}

/// Tangent as a Q12 fixed-point number
///
/// `theta` is in brads and wrapped to a half circle. Odd multiples of `BRAD_HPI` return the
/// table sentinel, 400.0 (`0x19_0000`).
pub const fn itan(theta: i32) -> i32 {
    let ux = (theta as u32) % BRAD_PI;
    let index = (ux / TAN_LUT_STRIDE) as usize;
    let h = (ux % TAN_LUT_STRIDE) as i32;

    let (ya, yb) = if ux <= BRAD_HPI {
        // The sample after PI/2 does not exist, but h is zero there
        let next = if index + 1 < TAN_LUT.len() { index + 1 } else { index };
        (TAN_LUT[index] as i32, TAN_LUT[next] as i32)
    } else {
        let mirrored = TAN_LUT_PI as usize - index;
        (-(TAN_LUT[mirrored] as i32), -(TAN_LUT[mirrored - 1] as i32))
    };

    (ya + ((yb - ya) * h >> TAN_LUT_STRIDE_SHIFT)) >> (TAN_LUT_FP - TRIG_FP)
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const ONE: i32 = 1 << TRIG_FP;

    fn to_radians(theta: i32) -> f64 {
        theta as f64 * core::f64::consts::PI / BRAD_PI as f64
    }

    #[test]
    fn test_isin_landmarks() {
        assert_eq!(isin(0), 0);
        assert_eq!(isin(BRAD_HPI as i32), ONE);
        assert_eq!(isin(BRAD_PI as i32), 0);
        assert_eq!(isin(3 * BRAD_HPI as i32), -ONE);
        assert_eq!(isin((BRAD_PI / 6) as i32), 2047);
        assert_eq!(icos(0), ONE);
        assert_eq!(icos(BRAD_PI as i32), -ONE);
        assert_eq!(icos((BRAD_PI / 3) as i32), 2048);
        assert_eq!(isincos(BRAD_HPI as i32), (ONE, 0));
    }

    #[test]
    fn test_isin_accuracy() {
        for theta in 0..BRAD_2PI as i32 {
            assert_abs_diff_eq!(isin(theta) as f64, libm::sin(to_radians(theta)) * ONE as f64, epsilon = 2.0);
            assert_abs_diff_eq!(icos(theta) as f64, libm::cos(to_radians(theta)) * ONE as f64, epsilon = 2.0);
        }
    }

    #[test]
    fn test_isin_range() {
        for theta in 0..BRAD_2PI as i32 {
            assert!((-ONE..=ONE).contains(&isin(theta)));
            assert!((-ONE..=ONE).contains(&icos(theta)));
        }
    }

    #[test]
    fn test_periodicity() {
        for theta in (-3 * BRAD_2PI as i32..3 * BRAD_2PI as i32).step_by(7) {
            assert_eq!(isin(theta), isin(theta + BRAD_2PI as i32));
            assert_eq!(icos(theta), icos(theta + BRAD_2PI as i32));
            assert_eq!(itan(theta), itan(theta + BRAD_PI as i32));
        }
        assert_eq!(isin(i32::MIN), isin(0));
        assert_eq!(icos(i32::MAX), icos(-1));
    }

    #[test]
    fn test_symmetry() {
        for theta in -(BRAD_2PI as i32)..BRAD_2PI as i32 {
            assert_eq!(isin(-theta), -isin(theta));
            assert_eq!(isin(BRAD_HPI as i32 - theta), icos(theta));
            assert_eq!(icos(-theta), icos(theta));
        }
    }

    #[test]
    fn test_itan_landmarks() {
        assert_eq!(itan(0), 0);
        assert_eq!(itan((BRAD_PI / 4) as i32), ONE);
        assert_eq!(itan(-((BRAD_PI / 4) as i32)), -ONE);
        assert_eq!(itan((3 * BRAD_PI / 4) as i32), -ONE);
    }

    #[test]
    fn test_itan_accuracy() {
        // Stay within |tan| <= 1, the divergence near PI/2 is covered separately
        let quarter = (BRAD_PI / 4) as i32;
        for theta in -quarter..=quarter {
            assert_abs_diff_eq!(itan(theta) as f64, libm::tan(to_radians(theta)) * ONE as f64, epsilon = 2.0);
        }
    }

    #[test]
    fn test_itan_pole() {
        let sentinel = 400 << TRIG_FP;
        assert_eq!(itan(BRAD_HPI as i32), sentinel);
        assert_eq!(itan(3 * BRAD_HPI as i32), sentinel);
        assert_eq!(itan(-(BRAD_HPI as i32)), sentinel);
        // Just before the pole the value grows, just after it flips sign
        assert!(itan(BRAD_HPI as i32 - 1) > 100 * ONE);
        assert!(itan(BRAD_HPI as i32 + 1) < -100 * ONE);
        for theta in BRAD_HPI as i32 - 256..BRAD_HPI as i32 {
            assert!(itan(theta) <= itan(theta + 1));
        }
    }
}
