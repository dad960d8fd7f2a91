//! Conversion between decimal text and [`Unpacked`](crate::Unpacked) floats.
//!
//! Both directions work the same way, using nothing but adds, subtracts, shifts and a single
//! 32 × 32 → 64 bit multiply:
//!
//!   1. The digits are handled in a Q4.28 fixed point accumulator, one [digit
//!      weight](crate::tables) at a time. Parsing adds a weight once per unit of each digit;
//!      formatting subtracts it until the subtraction borrows.
//!   2. The exponent is moved between radix 10 and radix 2 by **one** multiplication with a
//!      fixed point factor looked up by exponent in the [constant tables](crate::tables).
//!   3. The accumulator carries [`RBITS`] rounding bits below the 23 fraction bits of the float,
//!      rounded half-up when they are discarded.
//!
//! The text format is `-?[1-9].[0-9]*(e-?[0-9]+)?`: exactly one non-zero digit before the point,
//! which is always present. Zero is the one number with a zero lead digit (`0.e0`). Output is canonicalised to a non-zero leading digit and an exponent suffix
//! only when the exponent is non-zero, with zero written as `0.e0`.

use crate::tables::FBITS;
use crate::float::MANTISSA_BITS;

/// Rounding bits carried below the fraction bits of an [`Unpacked`](crate::Unpacked) while
/// converting.
pub const RBITS: u32 = FBITS - MANTISSA_BITS;

/// One half of the last fraction bit that survives rounding.
pub const ROUND_HALF: u32 = 1 << (RBITS - 1);

/// Longest output: `-1.2345678e-33`.
const BUFFER_LEN: usize = 16;

/// How many digits the formatter writes.
#[derive(Debug, Clone, Copy, Default)]
#[derive(PartialEq, Eq, Hash)]
pub enum Notation {
  /// Trailing zeros after the point are dropped, the point itself is kept: `1.`, `1.5`,
  /// `5.e-3`.
  #[default]
  Canonical,
  /// Always [`DIGITS`](crate::tables::DIGITS) significant digits: `1.0000000`, `1.5000000`,
  /// `5.0000000e-3`.
  Full,
}

/// A stack buffer to format numbers into, without allocating.
///
/// ```
/// # use fpconv::{Buffer, Notation, Packed};
/// let mut buffer = Buffer::new();
/// let x = Packed::from_f32(0.125).unpack().unwrap();
/// assert_eq!(buffer.format(x), Ok("1.25e-1"));
/// assert_eq!(buffer.format_with(x, Notation::Full), Ok("1.2500000e-1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Buffer {
  bytes: [u8; BUFFER_LEN],
}

impl Default for Buffer {
  fn default() -> Self {
    Self::new()
  }
}

impl Buffer {
  pub const fn new() -> Self {
    Self { bytes: [0; BUFFER_LEN] }
  }

  /// Format `value` in [canonical](Notation::Canonical) notation.
  pub fn format(&mut self, value: crate::Unpacked) -> crate::Result<&str> {
    self.format_with(value, Notation::Canonical)
  }

  /// Format `value` in the given notation.
  pub fn format_with(&mut self, value: crate::Unpacked, notation: Notation) -> crate::Result<&str> {
    self.format_scaled(value, notation).map(|(text, _)| text)
  }

  /// As [`Self::format_with`], but also return the exponent rescale that was applied (`None` for
  /// zero, which needs none).
  pub fn format_scaled(
    &mut self,
    value: crate::Unpacked,
    notation: Notation,
  ) -> crate::Result<(&str, Option<crate::tables::Scale>)> {
    let mut out = Writer { bytes: &mut self.bytes, len: 0 };
    let scale = format::format_kernel(value, notation, &mut out)?;
    let len = out.len;
    // SAFETY: the formatter only writes ASCII digits, `-`, `.` and `e`.
    let text = unsafe { core::str::from_utf8_unchecked(&self.bytes[.. len]) };
    Ok((text, scale))
  }
}

/// Append-only view of a [`Buffer`].
pub(crate) struct Writer<'a> {
  bytes: &'a mut [u8],
  len: usize,
}

impl Writer<'_> {
  pub(crate) fn push(&mut self, byte: u8) {
    debug_assert!(byte.is_ascii());
    debug_assert!(self.len < self.bytes.len(), "formatted number overflows its buffer");
    if let Some(slot) = self.bytes.get_mut(self.len) {
      *slot = byte;
      self.len += 1;
    }
  }

  pub(crate) fn push_str(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      self.push(byte)
    }
  }

  pub(crate) fn len(&self) -> usize {
    self.len
  }

  pub(crate) fn truncate(&mut self, len: usize) {
    self.len = self.len.min(len);
  }
}

/// Signed decimal exponents ↔ text
mod exponent;

/// Text → unpacked
mod parse;

/// Unpacked → text
mod format;

pub use parse::{parse, parse_scaled};
