use super::{ROUND_HALF, RBITS};
use super::exponent::parse_exponent;
use crate::tables::{self, DIGIT_WEIGHTS, EMAX2, EMIN2, FBITS, IBITS, Scale};
use crate::underlying::{Sealed, Wide, accumulate_digit};
use crate::{Error, Packed, Result, Unpacked};

/// Accumulator bits at or above `2.0`: the normalised value must have none of these set.
const ABOVE_TWO: u32 = ((1 << IBITS) - 2) << FBITS;

/// Accumulator integer bits: the normalised value must have one of these set.
const INTEGER_PART: u32 = ((1 << IBITS) - 1) << FBITS;

/// Parse decimal text of the form `-?[1-9].[0-9]*(e-?[0-9]+)?` into an [`Unpacked`]. Zero is
/// written with a zero lead digit and zeros only after it (`0.e0`, `-0.`, `0.000e5`).
///
/// Exactly one digit goes before the point, and the point is mandatory. Digits after the
/// eighth fraction digit carry no weight and are ignored. The result is rounded half up from
/// [`RBITS`](super::RBITS) extra bits.
///
/// ```
/// # use fpconv::{parse, Error, Unpacked};
/// assert_eq!(parse("-1.e0"), Ok(Unpacked { sign: true, exp: 0, frac: 0x80_0000 }));
/// assert_eq!(parse("1.e5").map(|x| x.exp), Ok(16));
/// assert_eq!(parse("1e5"), Err(Error::MalformedInput));
/// assert_eq!(parse("0.5"), Err(Error::MalformedInput));
/// ```
pub fn parse(text: &str) -> Result<Unpacked> {
  parse_scaled(text).map(|(value, _)| value)
}

/// As [`parse`], but also return the exponent rescale that was applied. There is none (`None`)
/// when the text has no exponent suffix, or when the value is zero.
pub fn parse_scaled(text: &str) -> Result<(Unpacked, Option<Scale>)> {
  let (sign, rest) = match text.as_bytes() {
    [b'-', rest @ ..] => (true, rest),
    bytes => (false, bytes),
  };
  let (mantissa, exponent) = match rest.iter().position(|&b| b == b'e') {
    Some(e) => (&rest[.. e], Some(&rest[e + 1 ..])),
    None => (rest, None),
  };
  let [lead, b'.', fraction @ ..] = mantissa else {
    return Err(Error::MalformedInput)
  };
  if !lead.is_ascii_digit() || !fraction.iter().all(u8::is_ascii_digit) {
    return Err(Error::MalformedInput)
  }
  // A zero lead digit only spells zero
  if *lead == b'0' && fraction.iter().any(|&digit| digit != b'0') {
    return Err(Error::MalformedInput)
  }
  let scale = match exponent {
    Some(exponent) => Some(tables::decimal_to_binary(parse_exponent(exponent)?)?),
    None => None,
  };

  // Q4.28 mantissa; position 0 of the weights (tens) is never used by the parser
  let mut acc = 0u32;
  let digits = core::iter::once(lead).chain(fraction);
  for (&weight, &digit) in DIGIT_WEIGHTS[1 ..].iter().zip(digits) {
    accumulate_digit(&mut acc, weight, digit - b'0');
  }
  if acc == 0 {
    log::trace!("parsed {text:?} as zero");
    return Ok((Unpacked::zero(sign), None))
  }

  // Rescale `acc · 10^e10` to `acc · 2^exp`, then round
  let mut exp = 0;
  if let Some(scale) = scale {
    acc = acc.mul_widening(scale.mantissa).shr_narrow(FBITS);
    exp = scale.to;
  }
  acc = acc.add_wrapping(ROUND_HALF);

  // Normalise to [1.0, 2.0)
  while acc & ABOVE_TWO != 0 {
    acc >>= 1;
    exp += 1;
  }
  while acc & INTEGER_PART == 0 {
    acc <<= 1;
    exp -= 1;
  }
  if !(EMIN2 ..= EMAX2).contains(&exp) {
    return Err(Error::ExponentOutOfRange { exponent: exp, min: EMIN2, max: EMAX2 })
  }

  let value = Unpacked { sign, exp, frac: acc >> RBITS };
  log::trace!("parsed {text:?} as {value:?} (rescale {scale:?})");
  Ok((value, scale))
}

impl core::str::FromStr for Unpacked {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    parse(s)
  }
}

impl core::str::FromStr for Packed {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    parse(s)?.pack()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::float::rational::ulps;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::Pow;
  use proptest::prelude::*;

  fn unpacked(sign: bool, exp: i16, frac: u32) -> Result<Unpacked> {
    Ok(Unpacked { sign, exp, frac })
  }

  #[test]
  fn no_exponent() {
    assert_eq!(parse("1."), unpacked(false, 0, 0x80_0000));
    assert_eq!(parse("1.1"), unpacked(false, 0, 0x8C_CCCD));
    assert_eq!(parse("1.01"), unpacked(false, 0, 0x81_47AE));
    assert_eq!(parse("1.001"), unpacked(false, 0, 0x80_20C5));
    assert_eq!(parse("1.0001"), unpacked(false, 0, 0x80_0347));
    assert_eq!(parse("1.00001"), unpacked(false, 0, 0x80_0054));
    assert_eq!(parse("1.000001"), unpacked(false, 0, 0x80_0008));
    assert_eq!(parse("1.5"), unpacked(false, 0, 0xC0_0000));
    assert_eq!(parse("5."), unpacked(false, 2, 0xA0_0000));
    assert_eq!(parse("5.5"), unpacked(false, 2, 0xB0_0000));
    assert_eq!(parse("5.05"), unpacked(false, 2, 0xA1_9999));
    assert_eq!(parse("5.005"), unpacked(false, 2, 0xA0_28F5));
    assert_eq!(parse("5.0005"), unpacked(false, 2, 0xA0_0418));
    assert_eq!(parse("5.00005"), unpacked(false, 2, 0xA0_0068));
    assert_eq!(parse("5.000005"), unpacked(false, 2, 0xA0_000A));
    assert_eq!(parse("9."), unpacked(false, 3, 0x90_0000));
    assert_eq!(parse("9.9"), unpacked(false, 3, 0x9E_6666));
    assert_eq!(parse("9.09"), unpacked(false, 3, 0x91_70A3));
    assert_eq!(parse("9.009"), unpacked(false, 3, 0x90_24DD));
    assert_eq!(parse("9.0009"), unpacked(false, 3, 0x90_03AF));
    assert_eq!(parse("9.00009"), unpacked(false, 3, 0x90_005E));
    assert_eq!(parse("9.000009"), unpacked(false, 3, 0x90_0009));
    assert_eq!(parse("9.999999"), unpacked(false, 3, 0x9F_FFFF));
    assert_eq!(parse("3.1415927"), unpacked(false, 1, 0xC9_0FDB));
  }

  #[test]
  fn negative() {
    assert_eq!(parse("-1.000001"), unpacked(true, 0, 0x80_0008));
    assert_eq!(parse("-5.000005"), unpacked(true, 2, 0xA0_000A));
    assert_eq!(parse("-9.000009"), unpacked(true, 3, 0x90_0009));
    assert_eq!(parse("-9.999999"), unpacked(true, 3, 0x9F_FFFF));
  }

  #[test]
  fn powers_of_ten() {
    assert_eq!(parse("1.e-31"), unpacked(false, -103, 0x81_CEB3));
    assert_eq!(parse("1.e-5"), unpacked(false, -17, 0xA7_C5AC));
    assert_eq!(parse("1.e-4"), unpacked(false, -14, 0xD1_B718));
    assert_eq!(parse("1.e-3"), unpacked(false, -10, 0x83_126F));
    assert_eq!(parse("1.e-2"), unpacked(false, -7, 0xA3_D70A));
    assert_eq!(parse("1.e-1"), unpacked(false, -4, 0xCC_CCCD));
    assert_eq!(parse("1.e0"), unpacked(false, 0, 0x80_0000));
    assert_eq!(parse("1.e1"), unpacked(false, 3, 0xA0_0000));
    assert_eq!(parse("1.e2"), unpacked(false, 6, 0xC8_0001));
    assert_eq!(parse("1.e3"), unpacked(false, 9, 0xFA_0001));
    assert_eq!(parse("1.e4"), unpacked(false, 13, 0x9C_4000));
    assert_eq!(parse("1.e5"), unpacked(false, 16, 0xC3_5001));
    assert_eq!(parse("1.e32"), unpacked(false, 106, 0x9D_C5AE));
  }

  #[test]
  fn with_exponent() {
    assert_eq!(parse("8.e0"), unpacked(false, 3, 0x80_0000));
    assert_eq!(parse("5.e-3"), unpacked(false, -8, 0xA3_D70A));
    assert_eq!(parse("5.5e-2"), unpacked(false, -5, 0xE1_47AE));
    assert_eq!(parse("5.05e-1"), unpacked(false, -1, 0x81_47AE));
    assert_eq!(parse("5.005e0"), unpacked(false, 2, 0xA0_28F5));
    assert_eq!(parse("5.0005e1"), unpacked(false, 5, 0xC8_051E));
    assert_eq!(parse("5.00005e2"), unpacked(false, 8, 0xFA_00A4));
    assert_eq!(parse("5.000005e3"), unpacked(false, 12, 0x9C_400A));
    assert_eq!(parse("9.e32"), unpacked(false, 109, 0xB1_7E63));
    assert_eq!(parse("9.9999999e32"), unpacked(false, 109, 0xC5_3719));
    assert_eq!(parse("2.7182818e0"), unpacked(false, 1, 0xAD_F854));
  }

  #[test]
  fn packed() {
    for (text, bits) in [
      ("1.", 0x3F80_0000),
      ("1.1", 0x3F8C_CCCD),
      ("-1.000001", 0xBF80_0008),
      ("-5.000005", 0xC0A0_000A),
      ("-9.999999", 0xC11F_FFFF),
      ("1.e-31", 0x0C01_CEB3),
      ("1.e-1", 0x3DCC_CCCD),
      ("1.e32", 0x749D_C5AE),
      ("5.e-3", 0x3BA3_D70A),
      ("9.9999999e32", 0x7645_3719),
      ("3.1415927", 0x4049_0FDB),
      ("0.e0", 0x0000_0000),
      ("-0.e0", 0x8000_0000),
    ] {
      assert_eq!(text.parse::<Packed>(), Ok(Packed::from_bits(bits)), "{text}");
    }
  }

  #[test]
  fn zero() {
    assert_eq!(parse_scaled("0.e0"), Ok((Unpacked::ZERO, None)));
    assert_eq!(parse_scaled("-0.e0"), Ok((Unpacked::zero(true), None)));
    assert_eq!(parse_scaled("0."), Ok((Unpacked::ZERO, None)));
    assert_eq!(parse_scaled("0.0000000e-31"), Ok((Unpacked::ZERO, None)));
    assert_eq!(parse_scaled("-0.000000000000"), Ok((Unpacked::zero(true), None)));
    // The exponent is still checked
    assert_eq!(
      parse("0.e40"),
      Err(Error::ExponentOutOfRange { exponent: 40, min: -31, max: 32 }),
    );
  }

  #[test]
  fn scale() {
    assert_eq!(parse_scaled("1.5"), Ok((Unpacked { sign: false, exp: 0, frac: 0xC0_0000 }, None)));
    let (_, scale) = parse_scaled("1.e0").unwrap();
    assert_eq!(scale, Some(Scale { index: 31, mantissa: 0x1000_0000, from: 0, to: 0 }));
    let (_, scale) = parse_scaled("-2.5e-3").unwrap();
    assert_eq!(scale.map(|s| (s.index, s.from, s.to)), Some((28, -3, -10)));
  }

  #[test]
  fn extra_digits() {
    assert_eq!(parse("1.00000001"), parse("1.0000000"));
    assert_eq!(parse("1.000000099999"), parse("1.0000000"));
    assert_eq!(parse("3.14159265358979"), parse("3.1415926"));
  }

  #[test]
  fn bounds() {
    assert!(parse("1.e-31").is_ok());
    assert!(parse("9.e32").is_ok());
    assert_eq!(
      parse("1.e-32"),
      Err(Error::ExponentOutOfRange { exponent: -32, min: -31, max: 32 }),
    );
    assert_eq!(
      parse("1.e33"),
      Err(Error::ExponentOutOfRange { exponent: 33, min: -31, max: 32 }),
    );
    assert_eq!(
      parse("1.e99999"),
      Err(Error::ExponentOutOfRange { exponent: 1000, min: -31, max: 32 }),
    );
  }

  #[test]
  fn leading_zero() {
    // Only zero may start with a zero digit
    for text in [
      "0.1", "0.5", "-0.5", "0.8e1", "0.0001e-31", "0.00000001", "0.000000001", "-0.00000001e3",
    ] {
      assert_eq!(parse(text), Err(Error::MalformedInput), "{text:?}");
    }
  }

  #[test]
  fn format_after_parse() {
    let mut buffer = crate::Buffer::new();
    for (text, formatted) in [
      ("1.", "1."),
      ("1.1", "1.1"),
      ("1.5", "1.5"),
      ("5.e-3", "5.e-3"),
      ("2.7182818", "2.7182818"),
      ("3.1415927", "3.1415927"),
      ("1.e-31", "1.e-31"),
      ("1.e32", "1.e32"),
      ("5.05", "5.0499997"),
      ("9.999999", "9.9999991"),
      ("-5.000005", "-5.0000048"),
      ("5.5e-2", "5.4999999e-2"),
      ("1.e5", "1.0000001e5"),
      ("9.9999999e32", "1.e33"),
      ("0.e0", "0.e0"),
      ("-0.e0", "0.e0"),
    ] {
      let value = parse(text).expect(text);
      assert_eq!(buffer.format(value), Ok(formatted), "{text}");
      // A second pass changes nothing, unless the text left the parser's range
      if formatted == "1.e33" {
        assert_eq!(
          parse(formatted),
          Err(Error::ExponentOutOfRange { exponent: 33, min: -31, max: 32 }),
        );
      } else {
        let again = parse(formatted).expect(formatted);
        assert_eq!(buffer.format(again), Ok(formatted), "{text}");
      }
    }
  }

  #[test]
  fn malformed() {
    for text in [
      "", "-", "1", ".5", "-.5", "1.5.", "12.5", "1.e", "1.e-", "1.5x", "+1.", "1.E5", "1.e+5",
      " 1.", "1. ", "--1.", "1e5", "1.5e2e3", "a.5", "1.-5", "e5", "1.e5.",
    ] {
      assert_eq!(parse(text), Err(Error::MalformedInput), "{text:?}");
    }
  }

  /// Decimal text, and its exact value.
  fn decimal() -> impl Strategy<Value = (String, Rational)> {
    (
      any::<bool>(),
      1 ..= 9u8,
      0 ..= 9_999_999u32,
      proptest::option::of(-31 ..= 32i16),
    ).prop_map(|(sign, lead, fraction, exp)| {
      let mut text = String::new();
      if sign {
        text.push('-')
      }
      text += &format!("{lead}.{fraction:07}");
      let mut exact = Rational::from(u32::from(lead) * 10_000_000 + fraction)
        / Rational::from(10_000_000);
      if let Some(exp) = exp {
        text += &format!("e{exp}");
        exact *= Rational::from(10).pow(i64::from(exp));
      }
      (text, if sign {-exact} else {exact})
    })
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
    #[test]
    fn accuracy((text, exact) in decimal()) {
      let value = parse(&text).expect("within range");
      assert!(value.is_normalised());
      assert!(ulps(value, &exact) <= Rational::from(2), "{text} parsed as {value:?}");
    }

    #[test]
    fn monotonic((a, exact_a) in decimal(), (b, exact_b) in decimal()) {
      // Orders unpacked values by magnitude, then flips negatives (no zeros are generated)
      let key = |v: Unpacked| if v.sign {(0, -v.exp, -i64::from(v.frac))} else {(1, v.exp, i64::from(v.frac))};
      let (x, y) = (parse(&a).unwrap(), parse(&b).unwrap());
      if exact_a <= exact_b {
        assert!(key(x) <= key(y), "{a} <= {b} but {x:?} > {y:?}")
      }
    }
  }
}
