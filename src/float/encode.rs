use super::*;
use super::basics::{BIAS, LEAD_BIT, MANTISSA_BITS};
use crate::{Error, Result};

impl Unpacked {
  /// Pack into the IEEE754 single precision layout: copy the sign, bias the exponent, and drop
  /// the explicit leading bit. No rounding takes place; `self.frac` already holds exactly the 24
  /// significant bits.
  ///
  /// Fails with [`Error::UnsupportedValue`] if `self` is not [normalised](Self::is_normalised),
  /// or if its exponent has no normal IEEE754 encoding (that would be a subnormal, an infinity,
  /// or a NaN).
  ///
  /// ```
  /// # use fpconv::Unpacked;
  /// let minus_two = Unpacked { sign: true, exp: 1, frac: 0x80_0000 };
  /// assert_eq!(minus_two.pack().unwrap().to_bits(), 0xC000_0000);
  /// ```
  pub fn pack(self) -> Result<Packed> {
    let sign = u32::from(self.sign) << 31;
    if self.is_zero() {
      return Ok(Packed::from_bits(sign))
    }
    if !self.is_normalised() {
      log::debug!("cannot pack unnormalised {self:?}");
      return Err(Error::UnsupportedValue)
    }
    let biased = i32::from(self.exp) + i32::from(BIAS);
    if !(1 ..= 254).contains(&biased) {
      log::debug!("cannot pack {self:?}: exponent has no normal encoding");
      return Err(Error::UnsupportedValue)
    }
    let exp = (biased as u32) << MANTISSA_BITS;
    let frac = self.frac & !LEAD_BIT;
    Ok(Packed::from_bits(sign | exp | frac))
  }
}

impl TryFrom<Unpacked> for Packed {
  type Error = Error;

  fn try_from(value: Unpacked) -> Result<Self> {
    value.pack()
  }
}
