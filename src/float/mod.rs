//! This module and its submodules contain the two binary representations the engine works with,
//! and the transcoder between them.
//!
//!   - [`Unpacked`] is the pivot format every conversion goes through: sign, unbiased exponent,
//!     and a fraction with its leading bit stored explicitly.
//!   - [`Packed`] is the standard 32-bit IEEE754 single precision layout.
//!
//! Some notation used in the comments:
//!
//!   - **Leading bit**: the `1` in `1.fff…`, bit 23 of an unpacked fraction. IEEE754 leaves it
//!     implicit; the unpacked format stores it.
//!   - **Qm.n**: unsigned fixed point with `m` integer bits and `n` fraction bits.

/// A binary floating point number with its fields laid out for computation rather than storage.
///
/// The value is `(-1)^sign × frac × 2^(exp - 23)`, i.e. `frac` is a Q1.23 number in `[1.0, 2.0)`
/// with the leading bit (`0x80_0000`) set. Zero is the one exception: it is encoded as
/// `exp = -127` and `frac = 0`, the values that pack to IEEE754 zero.
///
/// ```
/// # use fpconv::Unpacked;
/// let one_and_a_half: Unpacked = "1.5".parse().unwrap();
/// assert_eq!(one_and_a_half, Unpacked { sign: false, exp: 0, frac: 0xC0_0000 });
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct Unpacked {
  /// `true` if negative.
  pub sign: bool,
  /// Unbiased base-2 exponent.
  pub exp: i16,
  /// Q1.23 fraction with explicit leading bit.
  pub frac: u32,
}

/// An IEEE754 single precision number, as its raw 32 bits: 1 sign bit, 8 exponent bits (bias
/// 127), and 23 fraction bits with the leading bit implicit.
///
/// ```
/// # use fpconv::Packed;
/// let pi: Packed = "3.1415927".parse().unwrap();
/// assert_eq!(pi.to_bits(), 0x40490FDB);
/// assert_eq!(pi.to_string(), "3.1415927");
/// ```
#[derive(Clone, Copy)]
#[derive(Eq, PartialEq, Hash)]
pub struct Packed(u32);

/// Basics
mod basics;
pub(crate) use basics::MANTISSA_BITS;

/// Unpacked → packed
mod encode;

/// Packed → unpacked
mod decode;

/// Debug and Display
mod fmt;


#[cfg(test)]
pub(crate) mod rational;
