//! The fixed-point constant tables that drive both conversion directions, and the four parameters
//! they were generated from.
//!
//! The tables are an *input contract*: an offline generator derives them from [`DIGITS`],
//! [`IBITS`], [`EMIN10`] and [`EMIN2`], and the engine only ever reads them. Changing any of the
//! parameters means regenerating every table (the tests in this module re-derive them exactly,
//! which is the quickest way to check a regenerated set).
//!
//! All mantissas are unsigned Q`IBITS`.`FBITS` fixed point numbers, i.e. `0x1000_0000` is `1.0`.

use crate::{Error, Result};

/// Significant decimal digits produced by the formatter.
pub const DIGITS: usize = 8;

/// Integer bits of the fixed-point accumulator (values from `0.0` to just under `16.0`).
pub const IBITS: u32 = 4;

/// Smallest decimal exponent the parser accepts.
pub const EMIN10: i16 = -31;

/// Smallest binary exponent with a row in the binary → decimal table.
pub const EMIN2: i16 = -108;

/// Fraction bits of the fixed-point accumulator.
pub const FBITS: u32 = u32::BITS - IBITS;

/// Largest decimal exponent the parser accepts.
pub const EMAX10: i16 = 1 - EMIN10;

/// The binary → decimal table has one row every `HEX_STRIDE` binary exponents ("pseudo radix 16"):
/// the decimal exponent changes slowly compared to the binary one, so this quarters the table at
/// the cost of at most 3 extra shifts per conversion.
pub const HEX_STRIDE: i16 = 1 << HEX_STRIDE_SHIFT;
pub(crate) const HEX_STRIDE_SHIFT: u32 = 2;

/// Largest binary exponent with a row in the binary → decimal table.
pub const EMAX2: i16 = HEX_STRIDE - EMIN2;

const DEC_ROWS: usize = (EMAX10 - EMIN10 + 1) as usize;
const BIN_ROWS: usize = ((EMAX2 - EMIN2) >> HEX_STRIDE_SHIFT) as usize + 1;

const _: () = {
  assert!(IBITS >= 2 && IBITS < 8, "accumulator needs room for the leading digit");
  assert!(EMIN2 & (HEX_STRIDE - 1) == 0, "EMIN2 must sit on the pseudo-hex stride");
};

/// Fixed-point weight of each decimal digit position: `10.0, 1.0, 0.1, … 1e-8`.
///
/// Position 0 (tens) only ever receives a digit in the formatter, where rescaling can carry the
/// value past `10.0`; the parser starts at position 1.
pub(crate) const DIGIT_WEIGHTS: [u32; DIGITS + 2] = [
  0xA0000000, 0x10000000, 0x199999A, 0x28F5C3, 0x41893, 0x68DC, 0xA7C, 0x10C, 0x1B, 0x3,
];

/// Row `i` holds `10^x / 2^y` for `x = EMIN10 + i`, where `y` is in [`DEC_TO_BIN_EXPONENT`].
const DEC_TO_BIN_MANTISSA: [u32; DEC_ROWS] = [
  0x1039D666, 0x14484BFF, 0xCAD2F7F, 0xFD87B5F, 0x13CE9A37, 0xC612062,
  0xF79687B, 0x1357C29A, 0xC16D9A0, 0xF1C9008, 0x12E3B40A, 0xBCE5086,
  0xEC1E4A8, 0x12725DD2, 0xB877AA3, 0xE69594C, 0x1203AF9F, 0x16849B87,
  0xE12E134, 0x11979981, 0x15FD7FE1, 0xDBE6FED, 0x112E0BE8, 0x15798EE2,
  0xD6BF94D, 0x10C6F7A1, 0x14F8B589, 0xD1B7176, 0x10624DD3, 0x147AE148,
  0xCCCCCCD, 0x10000000, 0x14000000, 0xC800000, 0xFA00000, 0x13880000,
  0xC350000, 0xF424000, 0x1312D000, 0xBEBC200, 0xEE6B280, 0x12A05F20,
  0xBA43B74, 0xE8D4A51, 0x12309CE5, 0xB5E620F, 0xE35FA93, 0x11C37938,
  0x16345786, 0xDE0B6B4, 0x1158E461, 0x15AF1D79, 0xD8D726B, 0x10F0CF06,
  0x152D02C8, 0xD3C21BD, 0x108B2A2C, 0x14ADF4B7, 0xCECB8F2, 0x1027E72F,
  0x1431E0FB, 0xC9F2C9D, 0xFC6F7C4, 0x13B8B5B5,
];

/// `y = round(x · log2(10))` for `x = EMIN10 + i`.
const DEC_TO_BIN_EXPONENT: [i8; DEC_ROWS] = [
  -103, -100, -96, -93, -90, -86, -83, -80, -76, -73, -70, -66,
  -63, -60, -56, -53, -50, -47, -43, -40, -37, -33, -30, -27,
  -23, -20, -17, -13, -10, -7, -3, 0, 3, 7, 10, 13,
  17, 20, 23, 27, 30, 33, 37, 40, 43, 47, 50, 53,
  56, 60, 63, 66, 70, 73, 76, 80, 83, 86, 90, 93,
  96, 100, 103, 106,
];

/// Row `i` holds `2^x / 10^y` for `x = EMIN2 + HEX_STRIDE · i`, where `y` is in
/// [`BIN_TO_DEC_EXPONENT`].
const BIN_TO_DEC_MANTISSA: [u32; BIN_ROWS] = [
  0x314DC645, 0x7E37BE2, 0xC9F2C9D, 0x1431E0FB, 0x204FCE5E, 0x52B7D2E,
  0x8459516, 0xD3C21BD, 0x152D02C8, 0x21E19E0D, 0x56BC75E, 0x8AC7230,
  0xDE0B6B4, 0x16345786, 0x2386F270, 0x5AF3108, 0x9184E73, 0xE8D4A51,
  0x174876E8, 0x2540BE40, 0x5F5E100, 0x9896800, 0xF424000, 0x186A0000,
  0x27100000, 0x6400000, 0xA000000, 0x10000000, 0x1999999A, 0x28F5C28F,
  0x68DB8BB, 0xA7C5AC4, 0x10C6F7A1, 0x1AD7F29B, 0x2AF31DC4, 0x6DF37F6,
  0xAFEBFF1, 0x11979981, 0x1C25C268, 0x2D09370D, 0x734ACA6, 0xB877AA3,
  0x12725DD2, 0x1D83C950, 0x2F394219, 0x78E4804, 0xC16D9A0, 0x1357C29A,
  0x1EF2D0F6, 0x31848189, 0x7EC3DB0, 0xCAD2F7F, 0x14484BFF, 0x2073ACCB,
  0x5313A5E, 0x84EC3C9,
];

/// `y = round(x / log2(10))` for `x = EMIN2 + HEX_STRIDE · i`.
const BIN_TO_DEC_EXPONENT: [i8; BIN_ROWS] = [
  -33, -31, -30, -29, -28, -26, -25, -24, -23, -22, -20, -19,
  -18, -17, -16, -14, -13, -12, -11, -10, -8, -7, -6, -5,
  -4, -2, -1, 0, 1, 2, 4, 5, 6, 7, 8, 10,
  11, 12, 13, 14, 16, 17, 18, 19, 20, 22, 23, 24,
  25, 26, 28, 29, 30, 31, 33, 34,
];

/// One exponent-base rescale: multiplying a value with exponent `from` (in one radix) by
/// `mantissa` (Q`IBITS`.`FBITS`) re-expresses it with exponent `to` in the other radix.
///
/// This is returned alongside conversion results, for callers that want to inspect which table
/// row was used.
#[derive(Debug, Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Scale {
  /// Row of the table that was used.
  pub index: usize,
  /// Fixed-point factor from that row.
  pub mantissa: u32,
  /// Exponent before rescaling.
  pub from: i16,
  /// Exponent after rescaling.
  pub to: i16,
}

/// Look up the factor that turns `10^e10` into `mantissa · 2^to`.
pub(crate) fn decimal_to_binary(e10: i16) -> Result<Scale> {
  let out_of_range = Error::ExponentOutOfRange { exponent: e10, min: EMIN10, max: EMAX10 };
  let index = usize::try_from(i32::from(e10) - i32::from(EMIN10)).map_err(|_| out_of_range)?;
  match (DEC_TO_BIN_MANTISSA.get(index), DEC_TO_BIN_EXPONENT.get(index)) {
    (Some(&mantissa), Some(&to)) => Ok(Scale { index, mantissa, from: e10, to: to.into() }),
    _ => Err(out_of_range),
  }
}

/// Look up the factor that turns `2^e2` into `mantissa · 10^to`. `e2` must be a multiple of
/// [`HEX_STRIDE`].
pub(crate) fn binary_to_decimal(e2: i16) -> Result<Scale> {
  debug_assert!(e2 & (HEX_STRIDE - 1) == 0, "{e2} is not on the pseudo-hex stride");
  let out_of_range = Error::ExponentOutOfRange { exponent: e2, min: EMIN2, max: EMAX2 };
  let index = usize::try_from((i32::from(e2) - i32::from(EMIN2)) >> HEX_STRIDE_SHIFT)
    .map_err(|_| out_of_range)?;
  match (BIN_TO_DEC_MANTISSA.get(index), BIN_TO_DEC_EXPONENT.get(index)) {
    (Some(&mantissa), Some(&to)) => Ok(Scale { index, mantissa, from: e2, to: to.into() }),
    _ => Err(out_of_range),
  }
}
