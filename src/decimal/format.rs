use super::{Notation, ROUND_HALF, RBITS, Writer};
use super::exponent::write_exponent;
use crate::tables::{self, DIGIT_WEIGHTS, DIGITS, EMAX2, EMIN2, FBITS, HEX_STRIDE, Scale};
use crate::underlying::{Sealed, extract_digit};
use crate::{Error, Result, Unpacked};

/// Write `value` as decimal text, returning the rescale that was used (none for zero).
pub(crate) fn format_kernel(
  value: Unpacked,
  notation: Notation,
  out: &mut Writer,
) -> Result<Option<Scale>> {
  if value.is_zero() {
    out.push_str(b"0.e0");
    return Ok(None)
  }
  if !value.is_normalised() {
    log::debug!("cannot format unnormalised {value:?}");
    return Err(Error::UnsupportedValue)
  }

  // Align the exponent down to the pseudo-hex stride; the fraction grows by up to 3 bits
  let mut frac = value.frac;
  let mut exp = value.exp;
  while exp & (HEX_STRIDE - 1) != 0 {
    frac <<= 1;
    exp -= 1;
  }
  let scale = tables::binary_to_decimal(exp).map_err(|_| Error::ExponentOutOfRange {
    exponent: value.exp,
    min: EMIN2,
    max: EMAX2 + HEX_STRIDE - 1,
  })?;

  // Rescale `frac · 2^exp` to `acc · 10^exp10`. The product can reach 16.0 when the fraction is
  // close to 16, so the accumulator stays wide.
  let frac = (frac << RBITS).add_wrapping(ROUND_HALF);
  let mut acc: u64 = frac.mul_widening(scale.mantissa) >> FBITS;
  let mut exp10 = scale.to;

  if value.sign {
    out.push(b'-')
  }
  let mut end = DIGITS + 1;
  let mut leading = false;
  let mut significant = out.len();
  for (position, &weight) in DIGIT_WEIGHTS.iter().enumerate() {
    if position == end {
      break
    }
    let digit = extract_digit(&mut acc, weight.into());
    if !leading {
      if digit == 0 {
        continue
      }
      leading = true;
      let (shift, last) = place_point(position);
      exp10 += shift;
      end = last;
      out.push(b'0' + digit);
      out.push(b'.');
      significant = out.len();
    } else {
      out.push(b'0' + digit);
      if digit != 0 {
        significant = out.len();
      }
    }
  }
  // A normalised fraction rescales to at least 0.3, so some digit always leads
  debug_assert!(leading, "{value:?} produced no digits");

  if notation == Notation::Canonical {
    out.truncate(significant);
  }
  if exp10 != 0 {
    out.push(b'e');
    write_exponent(exp10, out);
  }
  log::trace!("formatted {value:?} (rescale {scale:?})");
  Ok(Some(scale))
}

/// The first non-zero digit, found at `position` of the weights, has weight `10^(1 - position)`
/// and becomes the single digit before the point. Returns the adjustment to the decimal exponent
/// this implies, and the position just past the last significant digit.
fn place_point(position: usize) -> (i16, usize) {
  (1 - position as i16, position + DIGITS)
}
