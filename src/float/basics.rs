use super::*;

/// Exponent bias of the IEEE754 single precision format.
pub(crate) const BIAS: i16 = 127;

/// Explicit fraction bits of the IEEE754 single precision format.
pub(crate) const MANTISSA_BITS: u32 = 23;

/// The leading (hidden) bit of a fraction.
pub(crate) const LEAD_BIT: u32 = 1 << MANTISSA_BITS;

/// Mask of the explicit fraction bits.
pub(crate) const MANTISSA_MASK: u32 = LEAD_BIT - 1;

impl Unpacked {
  /// The exponent that marks zero; it is also what the packed zero's exponent field unbiases to.
  pub const ZERO_EXP: i16 = -BIAS;

  /// Positive zero (`0.e0`).
  pub const ZERO: Self = Self::zero(false);

  /// One (`1.`).
  pub const ONE: Self = Self { sign: false, exp: 0, frac: LEAD_BIT };

  /// Zero with the given sign.
  pub const fn zero(sign: bool) -> Self {
    Self { sign, exp: Self::ZERO_EXP, frac: 0 }
  }

  /// Whether `self` is the zero encoding, of either sign.
  pub const fn is_zero(self) -> bool {
    self.exp == Self::ZERO_EXP && self.frac == 0
  }

  /// Whether `self` is a valid input to the conversions: either zero, or a fraction with the
  /// leading bit set and nothing above it.
  pub const fn is_normalised(self) -> bool {
    self.is_zero() || self.frac & !MANTISSA_MASK == LEAD_BIT
  }
}

impl Packed {
  /// Positive zero.
  pub const ZERO: Self = Self(0);

  /// Construct from the raw IEEE754 bit representation.
  #[inline]
  pub const fn from_bits(bits: u32) -> Self {
    Self(bits)
  }

  /// The raw IEEE754 bit representation.
  #[inline]
  pub const fn to_bits(self) -> u32 {
    self.0
  }

  /// Reinterpret the bits of an `f32`.
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    Self(value.to_bits())
  }

  /// Reinterpret as an `f32`. No arithmetic is involved, so this is available on targets without
  /// an FPU too.
  #[inline]
  pub const fn to_f32(self) -> f32 {
    f32::from_bits(self.0)
  }

  pub(crate) const fn sign(self) -> bool {
    self.0 >> 31 != 0
  }

  pub(crate) const fn biased_exp(self) -> u32 {
    (self.0 >> MANTISSA_BITS) & 0xff
  }

  pub(crate) const fn mantissa(self) -> u32 {
    self.0 & MANTISSA_MASK
  }
}
