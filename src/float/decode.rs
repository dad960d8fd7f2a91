use super::*;
use super::basics::{BIAS, LEAD_BIT};
use crate::{Error, Result};

impl Packed {
  /// Unpack from the IEEE754 single precision layout: copy the sign, unbias the exponent, and
  /// re-insert the leading bit that IEEE754 leaves implicit.
  ///
  /// Zero (of either sign) unpacks to the [zero encoding](Unpacked::zero). Subnormals,
  /// infinities and NaNs fail with [`Error::UnsupportedValue`].
  ///
  /// ```
  /// # use fpconv::{Packed, Unpacked};
  /// let minus_two = Packed::from_f32(-2.0).unpack().unwrap();
  /// assert_eq!(minus_two, Unpacked { sign: true, exp: 1, frac: 0x80_0000 });
  /// ```
  pub fn unpack(self) -> Result<Unpacked> {
    let sign = self.sign();
    match (self.biased_exp(), self.mantissa()) {
      (0, 0) => Ok(Unpacked::zero(sign)),
      (0, _) | (0xff, _) => {
        log::debug!("cannot unpack {self:?}: subnormal, infinite or NaN");
        Err(Error::UnsupportedValue)
      },
      (biased, mantissa) => Ok(Unpacked {
        sign,
        exp: biased as i16 - BIAS,
        frac: mantissa | LEAD_BIT,
      }),
    }
  }
}

impl TryFrom<Packed> for Unpacked {
  type Error = Error;

  fn try_from(value: Packed) -> Result<Self> {
    value.unpack()
  }
}
