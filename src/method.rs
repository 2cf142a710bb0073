/* fixtrig | method.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Run-time selection among the arctangent functions */

/******************************************************************************/

use core::fmt;
use core::str::FromStr;

use crate::atan2::*;

/******************************************************************************/

/// One of the arctangent functions, for picking or comparing them at run time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Atan2Method {
    /// [`atan2_null()`]
    Null,
    /// [`atan2_oct()`]
    Oct,
    /// [`atan2_oct_div()`]
    OctDiv,
    /// [`atan2_lookup()`]
    Lookup,
    /// [`atan2_lerp()`]
    #[default]
    Lerp,
    /// [`atan2_inv_lerp()`]
    InvLerp,
    /// [`atan2_taylor()`]
    Taylor,
    /// [`atan2_gba()`]
    Gba,
    /// [`atan2_tonc()`]
    Tonc,
    /// [`atan2_sin()`]
    Sin,
    /// [`atan2_cordic()`]
    Cordic
}

impl Atan2Method {
    /// Every method, roughly from cheapest to most involved
    pub const ALL: [Atan2Method; 11] = [
        Self::Null,
        Self::Oct,
        Self::OctDiv,
        Self::Lookup,
        Self::Lerp,
        Self::InvLerp,
        Self::Taylor,
        Self::Gba,
        Self::Tonc,
        Self::Sin,
        Self::Cordic
    ];

    /// Short lowercase name, as accepted by [`str::parse()`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Oct => "oct",
            Self::OctDiv => "octdiv",
            Self::Lookup => "lookup",
            Self::Lerp => "lerp",
            Self::InvLerp => "invlerp",
            Self::Taylor => "taylor",
            Self::Gba => "gba",
            Self::Tonc => "tonc",
            Self::Sin => "sin",
            Self::Cordic => "cordic"
        }
    }

    /// Angle of `(x, y)` in brads
    ///
    /// `(x, y)` must not be the origin.
    pub const fn eval(self, x: i32, y: i32) -> u32 {
        match self {
            Self::Null => atan2_null(x, y),
            Self::Oct => atan2_oct(x, y),
            Self::OctDiv => atan2_oct_div(x, y),
            Self::Lookup => atan2_lookup(x, y),
            Self::Lerp => atan2_lerp(x, y),
            Self::InvLerp => atan2_inv_lerp(x, y),
            Self::Taylor => atan2_taylor(x, y),
            Self::Gba => atan2_gba(x, y),
            Self::Tonc => atan2_tonc(x, y),
            Self::Sin => atan2_sin(x, y),
            Self::Cordic => atan2_cordic(x, y)
        }
    }

    /// Same as [`Atan2Method::eval()`], with `None` for the origin
    ///
    /// ```
    /// use fixtrig::{Atan2Method, BRAD_PI};
    /// assert_eq!(Atan2Method::Cordic.checked(-3, 0), Some(BRAD_PI));
    /// assert_eq!(Atan2Method::Cordic.checked(0, 0), None);
    /// ```
    pub const fn checked(self, x: i32, y: i32) -> Option<u32> {
        if x == 0 && y == 0 {
            None
        } else {
            Some(self.eval(x, y))
        }
    }
}

impl fmt::Display for Atan2Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Atan2Method {
    type Err = ParseMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .ok_or(ParseMethodError)
    }
}

/******************************************************************************/

/// Error returned when parsing an unknown [`Atan2Method`] name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseMethodError;

impl fmt::Display for ParseMethodError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown arctangent method")
    }
}

impl core::error::Error for ParseMethodError {}

/******************************************************************************/
