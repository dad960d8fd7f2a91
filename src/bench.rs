//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{Packed, Result, Scale, Unpacked};

impl Packed {
  /// Unpack then pack again, the transcoder's full round trip.
  pub fn bench_roundtrip(self) -> Result<Packed> {
    self.unpack()?.pack()
  }
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn fpconv_parse_unpacked(text: &str) -> Result<Unpacked> {
  crate::parse(text)
}

#[unsafe(no_mangle)]
pub fn fpconv_parse_packed(text: &str) -> Result<Packed> {
  crate::parse(text)?.pack()
}

#[unsafe(no_mangle)]
pub fn fpconv_format_unpacked(buffer: &mut crate::Buffer, value: Unpacked) -> Result<(&str, Option<Scale>)> {
  buffer.format_scaled(value, crate::Notation::Canonical)
}

#[unsafe(no_mangle)]
pub fn fpconv_pack(value: Unpacked) -> Result<Packed> {
  value.pack()
}

#[unsafe(no_mangle)]
pub fn fpconv_unpack(value: Packed) -> Result<Unpacked> {
  value.unpack()
}
