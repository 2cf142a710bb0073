/* fixtrig | atan2.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Two-argument arctangent, in several accuracy / speed trade-offs */

/******************************************************************************/

use crate::common::{lut_bracket, qdiv};
use crate::cordic;
use crate::lut::*;
use crate::octant::Octant;
use crate::trig::isin;
use crate::{BRAD_2PI, BRAD_PI};

/// Fractional bits of the quotient used by the polynomial approximations
const POLY_FP: u32 = 15;

/// Largest magnitude, in bits, that folding and CORDIC growth keep inside an `i32`
const INPUT_BITS: u32 = 29;

/// 1 / (PI / 4) with PI = 0x4000 brads, in Q15
const ATAN_BASE: i32 = 0xA2F9;

/// Odd-power Taylor coefficients of atan, highest power first: `ATAN_BASE / 15`, ..., `ATAN_BASE / 1`
const TAYLOR_COEFFS: [i32; 8] = {
    let mut coeffs = [0; 8];
    let mut i = 0;
    while i < coeffs.len() {
        coeffs[i] = ATAN_BASE / (15 - 2 * i as i32);
        i += 1;
    }
    coeffs
};

/// Tuned polynomial, GBA BIOS flavor
const GBA_COEFFS: [i32; 8] = [0x00A9, 0x0390, 0x091C, 0x0FB6, 0x16AA, 0x2081, 0x3651, 0xA2F9];

/// Tuned polynomial, shorter
const TONC_COEFFS: [i32; 5] = [0x0470, 0x1029, 0x1F0B, 0x364C, 0xA2FC];

/******************************************************************************/

/// Shared frame of the arctangent functions
///
/// Points on the x axis are answered directly. Anything else is brought below 2^29, folded
/// into the first octant, and the correction, computed from the folded point bound to
/// `$folded`, is added to the octant's base angle. The sum wraps to a full circle.
macro_rules! gen_atan2 {
    ($x: ident, $y: ident, $folded: ident => $correction: expr) => {
        {
            if $y == 0 {
                return if $x >= 0 { 0 } else { BRAD_PI };
            }
            let ($x, $y) = fit_input($x, $y);
            let $folded = Octant::fold($x, $y);
            (($folded.base_angle() as i32).wrapping_add($correction) as u32) & (BRAD_2PI - 1)
        }
    }
}

/// Shift `(x, y)` right until both magnitudes fit in `INPUT_BITS` bits
///
/// The direction is kept; at most 3 bits are dropped, and the larger coordinate stays non-zero.
const fn fit_input(x: i32, y: i32) -> (i32, i32) {
    let (ax, ay) = (x.unsigned_abs(), y.unsigned_abs());
    let bits = u32::BITS - (if ax > ay { ax } else { ay }).leading_zeros();
    if bits > INPUT_BITS {
        (x >> (bits - INPUT_BITS), y >> (bits - INPUT_BITS))
    } else {
        (x, y)
    }
}

/// Evaluate `coeffs[0] * t2^n + ... + coeffs[n]` by Horner's scheme, in Q15
const fn horner(t2: i32, coeffs: &[i32]) -> i32 {
    let mut acc = coeffs[0];
    let mut i = 1;
    while i < coeffs.len() {
        acc = coeffs[i] + (t2 * acc >> POLY_FP);
        i += 1;
    }
    acc
}

/// Quotient of a folded point in Q15, along with its negated square
const fn poly_quotient(folded: &Octant) -> (i32, i32) {
    let t = qdiv(folded.y, folded.x, POLY_FP);
    (t, -(t * t) >> POLY_FP)
}

/******************************************************************************/

/// Placeholder returning `x` as is
///
/// Not an arctangent at all; it marks the cost of the call itself in comparisons and does not
/// honor the range contract of the other functions.
pub const fn atan2_null(x: i32, _y: i32) -> u32 {
    x as u32
}

/// Start of the octant of `(x, y)`, in brads
///
/// Always at or below the true angle, by less than `BRAD_PI / 4`.
pub const fn atan2_oct(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, _folded => 0)
}

/// Octant start plus the raw Q12 quotient
///
/// Treats atan(t) as linear over the octant, exact only at its edges.
pub const fn atan2_oct_div(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => qdiv(folded.y, folded.x, ATAN_FP))
}

/// Octant start plus the nearest-below arctangent table entry
pub const fn atan2_lookup(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let t = qdiv(folded.y, folded.x, ATAN_FP) as u32;
        ATAN_LUT[(t / ATAN_LUT_STRIDE) as usize] as i32 >> 3
    })
}

/// Arctangent by table lookup with linear interpolation
///
/// The usual choice: about two brads of error at the cost of one division.
///
/// ```
/// use fixtrig::{atan2_lerp, BRAD_HPI, BRAD_PI};
/// assert_eq!(atan2_lerp(5, 0), 0);
/// assert_eq!(atan2_lerp(0, 5), BRAD_HPI);
/// assert_eq!(atan2_lerp(-5, 0), BRAD_PI);
/// ```
pub const fn atan2_lerp(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let t = qdiv(folded.y, folded.x, ATAN_FP) as u32;
        let h = (t % ATAN_LUT_STRIDE) as i32;
        let index = (t / ATAN_LUT_STRIDE) as usize;
        let fa = ATAN_LUT[index] as i32;
        let fb = ATAN_LUT[index + 1] as i32;
        (fa + ((fb - fa) * h >> ATAN_LUT_STRIDE_SHIFT)) >> 3
    })
}

/// Arctangent by searching the tangent table and interpolating inversely
///
/// Trades the arctangent table for a bisection over the tangent table.
pub const fn atan2_inv_lerp(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let t = qdiv(folded.y, folded.x, TAN_LUT_FP) as u32;
        let index = lut_bracket(t, &TAN_LUT);
        let ta = TAN_LUT[index] as i32;
        let tb = TAN_LUT[index + 1] as i32;
        index as i32 * TAN_LUT_STRIDE as i32 + qdiv((t as i32 - ta) * TAN_LUT_STRIDE as i32, tb - ta, 0)
    })
}

/// Arctangent by its Taylor series up to t^15
///
/// The series converges slowly near t = 1, so the error reaches a few table steps at the
/// octant edges.
pub const fn atan2_taylor(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let (t, t2) = poly_quotient(&folded);
        horner(t2, &TAYLOR_COEFFS) * t >> (POLY_FP + 3)
    })
}

/// Arctangent by a tuned 8 coefficient polynomial
pub const fn atan2_gba(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let (t, t2) = poly_quotient(&folded);
        horner(t2, &GBA_COEFFS) * t >> (POLY_FP + 3)
    })
}

/// Arctangent by a tuned 5 coefficient polynomial, rounded to nearest
pub const fn atan2_tonc(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let (t, t2) = poly_quotient(&folded);
        let dphi = horner(t2, &TONC_COEFFS) * t >> POLY_FP;
        (dphi + 4) >> 3
    })
}

/// Arctangent as a weighted sum of two sines of the quotient
pub const fn atan2_sin(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => {
        let t = qdiv(folded.y, folded.x, ATAN_FP);
        (0x14FF * isin(9 * t / 8) + 0x7D * isin(37 * t / 8)) >> 12
    })
}

/// Arctangent by CORDIC vectoring, without any division
///
/// See [`cordic::vectoring()`].
pub const fn atan2_cordic(x: i32, y: i32) -> u32 {
    gen_atan2!(x, y, folded => cordic::vectoring(folded.x, folded.y, cordic::ITERATIONS))
}

/******************************************************************************/
