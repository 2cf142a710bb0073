/* fixtrig | lut.rs
 * Copyright (c) 2025 L. Sartory
 * SPDX-License-Identifier: MIT
 */

/* Precomputed lookup tables */

/******************************************************************************/

/// Number of sine table steps per half circle
pub const SIN_LUT_PI: u32 = 0x100;
/// Number of sine table steps per quarter circle
pub const SIN_LUT_HPI: u32 = SIN_LUT_PI / 2;
/// Brads per sine table step, as a shift
pub const SIN_LUT_STRIDE_SHIFT: u32 = 6;
/// Brads per sine table step
pub const SIN_LUT_STRIDE: u32 = 1 << SIN_LUT_STRIDE_SHIFT;
/// Fractional bits of the sine table
pub const SIN_LUT_FP: u32 = 15;

/// Sine over [0, PI/2] in Q15, with PI = 0x100
///
/// One extra entry past PI/2 keeps the upper interpolation sample in bounds.
pub const SIN_LUT: [u16; 130] = [
    0x0000, 0x0192, 0x0324, 0x04B6, 0x0648, 0x07D9, 0x096B, 0x0AFB,
    0x0C8C, 0x0E1C, 0x0FAB, 0x113A, 0x12C8, 0x1455, 0x15E2, 0x176E,
    0x18F9, 0x1A83, 0x1C0C, 0x1D93, 0x1F1A, 0x209F, 0x2224, 0x23A7,
    0x2528, 0x26A8, 0x2827, 0x29A4, 0x2B1F, 0x2C99, 0x2E11, 0x2F87,
    0x30FC, 0x326E, 0x33DF, 0x354E, 0x36BA, 0x3825, 0x398D, 0x3AF3,
    0x3C57, 0x3DB8, 0x3F17, 0x4074, 0x41CE, 0x4326, 0x447B, 0x45CD,
    0x471D, 0x486A, 0x49B4, 0x4AFB, 0x4C40, 0x4D81, 0x4EC0, 0x4FFB,
    0x5134, 0x5269, 0x539B, 0x54CA, 0x55F6, 0x571E, 0x5843, 0x5964,
    0x5A82, 0x5B9D, 0x5CB4, 0x5DC8, 0x5ED7, 0x5FE4, 0x60EC, 0x61F1,
    0x62F2, 0x63EF, 0x64E9, 0x65DE, 0x66D0, 0x67BD, 0x68A7, 0x698C,
    0x6A6E, 0x6B4B, 0x6C24, 0x6CF9, 0x6DCA, 0x6E97, 0x6F5F, 0x7023,
    0x70E3, 0x719E, 0x7255, 0x7308, 0x73B6, 0x7460, 0x7505, 0x75A6,
    0x7642, 0x76D9, 0x776C, 0x77FB, 0x7885, 0x790A, 0x798A, 0x7A06,
    0x7A7D, 0x7AEF, 0x7B5D, 0x7BC6, 0x7C2A, 0x7C89, 0x7CE4, 0x7D3A,
    0x7D8A, 0x7DD6, 0x7E1E, 0x7E60, 0x7E9D, 0x7ED6, 0x7F0A, 0x7F38,
    0x7F62, 0x7F87, 0x7FA7, 0x7FC2, 0x7FD9, 0x7FEA, 0x7FF6, 0x7FFE,
    0x8000, 0x7FFE,
];

/******************************************************************************/

/// Number of tangent table steps per half circle
pub const TAN_LUT_PI: u32 = 0x100;
/// Brads per tangent table step, as a shift
pub const TAN_LUT_STRIDE_SHIFT: u32 = 6;
/// Brads per tangent table step
pub const TAN_LUT_STRIDE: u32 = 1 << TAN_LUT_STRIDE_SHIFT;
/// Fractional bits of the tangent table
pub const TAN_LUT_FP: u32 = 16;

/// Tangent over [0, PI/2] in Q16, with PI = 0x100
///
/// tan(PI/2) is clamped to 400.0.
pub const TAN_LUT: [u32; 129] = [
    0x00000000, 0x00000324, 0x00000649, 0x0000096E, 0x00000C94, 0x00000FBA, 0x000012E2, 0x0000160C,
    0x00001937, 0x00001C64, 0x00001F93, 0x000022C5, 0x000025F9, 0x00002931, 0x00002C6C, 0x00002FAA,
    0x000032EC, 0x00003632, 0x0000397D, 0x00003CCC, 0x00004020, 0x00004379, 0x000046D8, 0x00004A3D,
    0x00004DA8, 0x0000511A, 0x00005492, 0x00005812, 0x00005B99, 0x00005F28, 0x000062C0, 0x00006660,
    0x00006A0A, 0x00006DBD, 0x0000717A, 0x00007542, 0x00007914, 0x00007CF2, 0x000080DC, 0x000084D2,
    0x000088D6, 0x00008CE7, 0x00009106, 0x00009534, 0x00009971, 0x00009DBE, 0x0000A21C, 0x0000A68C,
    0x0000AB0E, 0x0000AFA3, 0x0000B44C, 0x0000B909, 0x0000BDDD, 0x0000C2C7, 0x0000C7C9, 0x0000CCE3,
    0x0000D218, 0x0000D768, 0x0000DCD4, 0x0000E25E, 0x0000E806, 0x0000EDD0, 0x0000F3BB, 0x0000F9CB,
    0x00010000, 0x0001065D, 0x00010CE3, 0x00011394, 0x00011A74, 0x00012184, 0x000128C6, 0x0001303F,
    0x000137F0, 0x00013FDD, 0x00014809, 0x00015077, 0x0001592D, 0x0001622E, 0x00016B7E, 0x00017523,
    0x00017F22, 0x00018980, 0x00019445, 0x00019F76, 0x0001AB1C, 0x0001B73F, 0x0001C3E7, 0x0001D11F,
    0x0001DEF1, 0x0001ED6A, 0x0001FC96, 0x00020C84, 0x00021D44, 0x00022EE9, 0x00024187, 0x00025534,
    0x00026A0A, 0x00028026, 0x000297A8, 0x0002B0B5, 0x0002CB79, 0x0002E823, 0x000306EC, 0x00032816,
    0x00034BEB, 0x000372C6, 0x00039D11, 0x0003CB48, 0x0003FE02, 0x000435F7, 0x00047405, 0x0004B940,
    0x00050700, 0x00055EF9, 0x0005C35D, 0x00063709, 0x0006BDD0, 0x00075CE6, 0x00081B98, 0x0009046E,
    0x000A2736, 0x000B9CC6, 0x000D8E82, 0x001046EA, 0x00145B00, 0x001B2672, 0x0028BC49, 0x00517BB6,
    0x01900000,
];

/******************************************************************************/

/// Fractional bits of the arctangent table argument
pub const ATAN_FP: u32 = 12;
/// Arctangent table argument steps, as a shift
pub const ATAN_LUT_STRIDE_SHIFT: u32 = 5;
/// Arctangent table argument step: 1.0 in Q12 spread over 128 entries
pub const ATAN_LUT_STRIDE: u32 = 1 << ATAN_LUT_STRIDE_SHIFT;

/// Arctangent over [0, 1] with 128 steps per unit and PI = 0x20000
///
/// Divide by 8 to get brads.
pub const ATAN_LUT: [u16; 130] = [
    0x0000, 0x0146, 0x028C, 0x03D2, 0x0517, 0x065D, 0x07A2, 0x08E7,
    0x0A2C, 0x0B71, 0x0CB5, 0x0DF9, 0x0F3C, 0x107F, 0x11C1, 0x1303,
    0x1444, 0x1585, 0x16C5, 0x1804, 0x1943, 0x1A80, 0x1BBD, 0x1CFA,
    0x1E35, 0x1F6F, 0x20A9, 0x21E1, 0x2319, 0x2450, 0x2585, 0x26BA,
    0x27ED, 0x291F, 0x2A50, 0x2B80, 0x2CAF, 0x2DDC, 0x2F08, 0x3033,
    0x315D, 0x3285, 0x33AC, 0x34D2, 0x35F6, 0x3719, 0x383A, 0x395A,
    0x3A78, 0x3B95, 0x3CB1, 0x3DCB, 0x3EE4, 0x3FFB, 0x4110, 0x4224,
    0x4336, 0x4447, 0x4556, 0x4664, 0x4770, 0x487A, 0x4983, 0x4A8B,
    0x4B90, 0x4C94, 0x4D96, 0x4E97, 0x4F96, 0x5093, 0x518F, 0x5289,
    0x5382, 0x5478, 0x556E, 0x5661, 0x5753, 0x5843, 0x5932, 0x5A1E,
    0x5B0A, 0x5BF3, 0x5CDB, 0x5DC1, 0x5EA6, 0x5F89, 0x606A, 0x614A,
    0x6228, 0x6305, 0x63E0, 0x64B9, 0x6591, 0x6667, 0x673B, 0x680E,
    0x68E0, 0x69B0, 0x6A7E, 0x6B4B, 0x6C16, 0x6CDF, 0x6DA8, 0x6E6E,
    0x6F33, 0x6FF7, 0x70B9, 0x717A, 0x7239, 0x72F6, 0x73B3, 0x746D,
    0x7527, 0x75DF, 0x7695, 0x774A, 0x77FE, 0x78B0, 0x7961, 0x7A10,
    0x7ABF, 0x7B6B, 0x7C17, 0x7CC1, 0x7D6A, 0x7E11, 0x7EB7, 0x7F5C,
    0x8000, 0x80A2,
];

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BRAD_PI;

    #[test]
    fn test_strides() {
        assert_eq!(SIN_LUT_STRIDE * SIN_LUT_PI, BRAD_PI);
        assert_eq!(TAN_LUT_STRIDE * TAN_LUT_PI, BRAD_PI);
        assert_eq!(ATAN_LUT_STRIDE * 128, 1 << ATAN_FP);
    }

    #[test]
    fn test_tables_are_monotonic() {
        assert!(SIN_LUT[..=SIN_LUT_HPI as usize].windows(2).all(|w| w[0] < w[1]));
        assert!(TAN_LUT.windows(2).all(|w| w[0] < w[1]));
        assert!(ATAN_LUT.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_table_landmarks() {
        // sin(PI/2) = 1.0, tan(PI/4) = 1.0, atan(1) = PI/4
        assert_eq!(SIN_LUT[SIN_LUT_HPI as usize], 1 << SIN_LUT_FP);
        assert_eq!(TAN_LUT[(TAN_LUT_PI / 4) as usize], 1 << TAN_LUT_FP);
        assert_eq!(ATAN_LUT[128] as u32 / 8, BRAD_PI / 4);
        // The entry past PI/2 mirrors the one before it
        assert_eq!(SIN_LUT[129], SIN_LUT[127]);
        assert_eq!(TAN_LUT[128], 400 << TAN_LUT_FP);
    }
}
