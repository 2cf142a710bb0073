/* fixtrig | lib.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Fixed-point trigonometry using binary radians */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod atan2;
mod common;
mod lut;
mod method;
mod octant;
mod trig;

pub mod cordic;

pub use atan2::*;
pub use common::qdiv;
pub use method::{Atan2Method, ParseMethodError};
pub use octant::{Octant, OCTANT_SIZE};
pub use trig::{icos, isin, isincos, itan, TRIG_FP};

/******************************************************************************/

/// Half circle in brads, as a shift
pub const BRAD_PI_SHIFT: u32 = 14;
/// Half circle in brads
pub const BRAD_PI: u32 = 1 << BRAD_PI_SHIFT;
/// Quarter circle in brads
pub const BRAD_HPI: u32 = BRAD_PI / 2;
/// Full circle in brads
pub const BRAD_2PI: u32 = BRAD_PI * 2;

/// Convert whole degrees to brads, truncating
///
/// `deg` must stay within ±65535 degrees.
pub const fn brad_from_degrees(deg: i32) -> i32 {
    deg * BRAD_2PI as i32 / 360
}

/// Convert brads to whole degrees in `[0, 360)`, truncating
pub const fn degrees_from_brad(angle: u32) -> u32 {
    (angle % BRAD_2PI) * 360 / BRAD_2PI
}

/******************************************************************************/
