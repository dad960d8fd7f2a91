use super::Writer;
use crate::underlying::{Sealed, extract_digit};
use crate::{Error, Result};

/// Magnitudes from here on are far outside every table, so the parser stops counting.
const SATURATE: u16 = 1000;

/// Parse the text after the `e`: `-?[0-9]+`. Leading zeros are allowed, and magnitudes that
/// don't fit are clamped (to a value the tables reject later) instead of overflowing.
pub(crate) fn parse_exponent(text: &[u8]) -> Result<i16> {
  let (negative, digits) = match text {
    [b'-', rest @ ..] => (true, rest),
    _ => (false, text),
  };
  if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
    return Err(Error::MalformedInput)
  }
  let mut magnitude: u16 = 0;
  for &digit in digits {
    // × 10 = × 2 + × 8
    magnitude = (magnitude << 1).add_wrapping(magnitude << 3);
    magnitude = magnitude.add_wrapping((digit - b'0').into()).min(SATURATE);
  }
  let magnitude = magnitude as i16;
  Ok(if negative {-magnitude} else {magnitude})
}

/// Write `exp` as `-?[0-9]+` with no leading zeros.
pub(crate) fn write_exponent(exp: i16, out: &mut Writer) {
  if exp < 0 {
    out.push(b'-')
  }
  let magnitude = exp.unsigned_abs();
  debug_assert!(magnitude < 100, "decimal exponent {exp} has more than two digits");
  let mut units = magnitude as u8;
  let tens = extract_digit(&mut units, 10);
  if tens != 0 {
    out.push(b'0' + tens)
  }
  out.push(b'0' + units)
}
