//! This module contains the handful of integer operations the conversion engine is allowed to
//! use. Each one models an instruction class of a small CPU with no hardware divide and no FPU
//! (think 6502-family): a wrapping add, a subtract that reports a borrow, and one widening
//! multiply. These are hidden from the end-user, which only sees the sealed [`Word`] trait,
//! implemented for `u8`, `u16`, `u32`, and `u64`.
//!
//! Nothing in the engine divides. Where a quotient is needed (extracting a decimal digit) it is
//! computed by counting subtractions until one borrows; see [`extract_digit`].

/// The trait for the unsigned machine words the engine computes with (only satisfied by `u8`,
/// `u16`, `u32`, and `u64`).
///
/// This is a *sealed* type.
pub trait Word: Sealed {}

/// Actual operations implemented here.
pub trait Sealed: core::fmt::Debug + Copy + Eq {
  /// The type twice as wide as `Self`, produced by [`Sealed::mul_widening`].
  type Wide: Wide<Narrow = Self>;

  const ZERO: Self;

  /// `self + other`, discarding any carry out of the top bit.
  fn add_wrapping(self, other: Self) -> Self;

  /// `self - other`, plus whether the subtraction borrowed (i.e. whether `other > self`). On a
  /// borrow the difference wraps, exactly like the hardware instruction it stands for.
  ///
  /// ```ignore
  /// assert_eq!(5u8.sub_borrow(3), (2, false));
  /// assert_eq!(3u8.sub_borrow(5), (254, true));
  /// ```
  fn sub_borrow(self, other: Self) -> (Self, bool);

  /// Multiply without overflow or loss of precision, by returning a type that's twice as wide as
  /// `Self`. This is the only multiplication used anywhere in the engine.
  fn mul_widening(self, other: Self) -> Self::Wide;
}

/// This trait models the type that is a [`Word`] with twice the width (e.g. `u32::Wide` = `u64`).
pub trait Wide: core::fmt::Debug + Copy + core::ops::Shr<u32, Output=Self> {
  type Narrow: Word;

  /// Break a `Wide` down into its high and low halves, respectively.
  fn components_hi_lo(self) -> (Self::Narrow, Self::Narrow);

  /// Shift right by `n` and keep the low half. The caller guarantees that the result fits, i.e.
  /// that the high half is zero after the shift.
  fn shr_narrow(self, n: u32) -> Self::Narrow {
    let (hi, lo) = (self >> n).components_hi_lo();
    debug_assert!(hi == Self::Narrow::ZERO, "{self:?} >> {n} does not fit a narrow word");
    lo
  }
}

/// Divide `acc` by `weight` the way a CPU without a divide instruction does: subtract `weight`
/// until the subtraction borrows, then add it back once. Returns the quotient (the number of
/// successful subtractions) and leaves the remainder in `acc`.
///
/// The quotient is a decimal digit, so the loop is capped at 9: if `acc` holds ten or more
/// `weight`s (which only the rounding slack in the weight tables can cause), the excess stays in
/// the remainder and carries into the following, smaller, digits.
#[inline]
pub fn extract_digit<W: Word>(acc: &mut W, weight: W) -> u8 {
  let mut digit = 0;
  while digit < 9 {
    let (rest, borrow) = acc.sub_borrow(weight);
    *acc = rest;
    if borrow {
      *acc = acc.add_wrapping(weight);
      break
    }
    digit += 1;
  }
  digit
}

/// Add `weight` to `acc` once for every unit of `digit`: the inverse of [`extract_digit`], and
/// again multiplication-free.
#[inline]
pub fn accumulate_digit<W: Word>(acc: &mut W, weight: W, digit: u8) {
  debug_assert!(digit <= 9);
  for _ in 0 .. digit {
    *acc = acc.add_wrapping(weight);
  }
}

mod word;
mod wide;
