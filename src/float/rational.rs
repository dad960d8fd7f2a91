use super::*;

use malachite::{Integer, rational::Rational};
use malachite::base::num::arithmetic::traits::{Abs, Pow, PowerOf2};

/// The exact value of an [`Unpacked`], zero included. Panics if `value` is not normalised.
impl From<Unpacked> for Rational {
  fn from(value: Unpacked) -> Self {
    assert!(value.is_normalised(), "{value:?} is not normalised");
    if value.is_zero() {
      return Rational::from(0)
    }
    let magnitude = Rational::from(value.frac)
      * Rational::power_of_2(i64::from(value.exp) - i64::from(MANTISSA_BITS));
    if value.sign {-magnitude} else {magnitude}
  }
}

/// How many units in the last place of `value` separate it from `exact`.
pub(crate) fn ulps(value: Unpacked, exact: &Rational) -> Rational {
  let ulp = Rational::power_of_2(i64::from(value.exp) - i64::from(MANTISSA_BITS));
  (Rational::from(value) - exact).abs() / ulp
}

/// The exact value of decimal text as the formatter writes it: `-?d.ddd(e-?dd)?`. Panics on
/// anything else.
pub(crate) fn decimal_text(text: &str) -> Rational {
  let (negative, text) = match text.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, text),
  };
  let (mantissa, exp) = text.split_once('e').unwrap_or((text, "0"));
  let (lead, fraction) = mantissa.split_once('.').expect("no decimal point");
  let digits: Integer = format!("{lead}{fraction}").parse().expect("not digits");
  let exp: i64 = exp.parse().expect("not an exponent");
  let magnitude = Rational::from(digits) * Rational::from(10).pow(exp - fraction.len() as i64);
  if negative {-magnitude} else {magnitude}
}

/// Signed distance in bits between two packed numbers of the same sign.
pub(crate) fn bits_apart(a: Packed, b: Packed) -> i64 {
  i64::from(a.to_bits()) - i64::from(b.to_bits())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact() {
    assert_eq!(Rational::from(Unpacked::ONE), Rational::from(1));
    assert_eq!(Rational::from(Unpacked::zero(true)), Rational::from(0));
    assert_eq!(
      Rational::from(Unpacked { sign: true, exp: -1, frac: 0xC0_0000 }),
      Rational::from_signeds(-3, 4),
    );
    assert_eq!(
      Rational::from(Unpacked { sign: false, exp: 30, frac: 0x80_0001 }),
      Rational::from(Integer::from((1 << 30) + (1 << 7))),
    );
  }

  #[test]
  fn decimal() {
    assert_eq!(decimal_text("1."), Rational::from(1));
    assert_eq!(decimal_text("0.e0"), Rational::from(0));
    assert_eq!(decimal_text("-2.5e-1"), Rational::from_signeds(-1, 4));
    assert_eq!(decimal_text("1.28e2"), Rational::from(128));
    assert_eq!(decimal_text("7.8125e-3"), Rational::from_signeds(1, 128));
  }

  #[test]
  fn ulps_apart() {
    let one_and_a_bit = Unpacked { sign: false, exp: 0, frac: 0x80_0001 };
    assert_eq!(ulps(one_and_a_bit, &Rational::from(1)), Rational::from(1));
    assert_eq!(ulps(Unpacked::ONE, &Rational::from(1)), Rational::from(0));
  }
}
