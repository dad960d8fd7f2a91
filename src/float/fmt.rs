use super::*;

use core::fmt::{Debug, Display};
use crate::decimal::{Buffer, Notation};

impl Debug for Unpacked {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let frac_lead = self.frac >> MANTISSA_BITS;
    let frac_explicit = self.frac & basics::MANTISSA_MASK;
    f.debug_struct("Unpacked")
      .field("sign", &self.sign)
      .field("exp", &format_args!("{:+}", self.exp))
      .field("frac", &format_args!("0x{frac_lead:x}_{frac_explicit:06x}"))
      .finish()
  }
}

impl Debug for Packed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let bits = self.0;
    f.debug_tuple("Packed")
      .field(&format_args!("0x{bits:08x}"))
      .finish()
  }
}

/// Decimal text, in [canonical](Notation::Canonical) notation, or [full](Notation::Full) notation
/// with the alternate flag (`{:#}`). Values the converter does not support are a formatting
/// error.
impl Display for Unpacked {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let notation = if f.alternate() {Notation::Full} else {Notation::Canonical};
    let mut buffer = Buffer::new();
    match buffer.format_with(*self, notation) {
      Ok(text) => f.write_str(text),
      Err(error) => {
        log::debug!("cannot display {self:?}: {error}");
        Err(core::fmt::Error)
      },
    }
  }
}

/// As for [`Unpacked`].
impl Display for Packed {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.unpack() {
      Ok(unpacked) => Display::fmt(&unpacked, f),
      Err(_) => Err(core::fmt::Error),
    }
  }
}
