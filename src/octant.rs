/* fixtrig | octant.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Octant folding of plane coordinates */

/******************************************************************************/

use crate::BRAD_PI;

/// Brads covered by one octant
pub const OCTANT_SIZE: u32 = BRAD_PI / 4;

/// A point folded into the first octant
///
/// `0 <= y <= x` holds for every folded point, and `octant` tells which 45 degree sector the
/// original point was in:
/// - bit 2 is set if the point was below the x axis (rotated by PI)
/// - bit 1 is set if it was then left of the y axis (rotated by PI/2)
/// - bit 0 is set if it was then above the diagonal (rotated by PI/4, scaled by sqrt(2))
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Octant {
    /// Folded x, the larger coordinate
    pub x: i32,
    /// Folded y
    pub y: i32,
    /// Sector of the original point, 0 to 7
    pub octant: u32
}

impl Octant {
    /// Fold `(x, y)` into the first octant
    ///
    /// Only sign flips, swaps, and one sum / difference are involved. They wrap like two's
    /// complement hardware, so `0 <= y <= x` is only guaranteed for magnitudes below 2^30.
    pub const fn fold(mut x: i32, mut y: i32) -> Self {
        let mut octant = 0;
        if y < 0 {
            (x, y) = (x.wrapping_neg(), y.wrapping_neg());
            octant += 4;
        }
        if x <= 0 {
            (x, y) = (y, x.wrapping_neg());
            octant += 2;
        }
        if x <= y {
            (x, y) = (x.wrapping_add(y), y.wrapping_sub(x));
            octant += 1;
        }
        Self { x, y, octant }
    }

    /// Angle of the start of the octant, in brads
    pub const fn base_angle(&self) -> u32 {
        self.octant * OCTANT_SIZE
    }

    /// Undo the folding of `(x, y)`, mapping it back into the original octant
    ///
    /// `Octant::fold(x, y).unfold()` returns exactly `(x, y)` for magnitudes below 2^30.
    pub const fn unfold(&self) -> (i32, i32) {
        let (mut x, mut y) = (self.x, self.y);
        if self.octant & 1 != 0 {
            // x - y is always even here
            (x, y) = (x.wrapping_sub(y) / 2, x.wrapping_add(y) / 2);
        }
        if self.octant & 2 != 0 {
            (x, y) = (y.wrapping_neg(), x);
        }
        if self.octant & 4 != 0 {
            (x, y) = (x.wrapping_neg(), y.wrapping_neg());
        }
        (x, y)
    }
}

/******************************************************************************/
