#![cfg_attr(not(test), no_std)]
//! This crate converts between decimal text and IEEE754 single precision floats, without ever
//! dividing and without a floating point unit.
//!
//! # Introduction
//!
//! Small CPUs (think 8-bit microcontrollers, or the 6502) have no FPU and often no hardware
//! divide, yet still need to print and read floating point numbers. The usual algorithms lean on
//! division, or on big integer arithmetic. This crate does both conversions with 32-bit adds,
//! subtracts and shifts, plus exactly **one** 32 × 32 → 64 bit multiply per conversion.
//!
//! The trick is a pair of precomputed [fixed point tables](tables): one maps a decimal exponent
//! to a binary one, the other maps a binary exponent (in strides of 4, "pseudo radix 16") to a
//! decimal one. Decimal digits are then added or subtracted one weight at a time.
//!
//! The price is accuracy: results are within about one unit in the last place, not correctly
//! rounded, and the exponent range is limited to what the tables cover (decimal exponents from
//! −31 to 32).
//!
//! # Usage
//!
//! ```
//! use fpconv::{Buffer, Notation, Packed, Unpacked};
//!
//! // Decimal text → IEEE754 bits. The point is mandatory, and there is exactly one digit before it.
//! let pi: Packed = "3.1415927".parse().unwrap();
//! assert_eq!(pi.to_bits(), 0x4049_0FDB);
//! assert_eq!(pi.to_f32(), core::f32::consts::PI);
//!
//! // The unpacked form exposes sign, exponent and fraction, leading bit included.
//! let x: Unpacked = "-5.e-3".parse().unwrap();
//! assert_eq!(x, Unpacked { sign: true, exp: -8, frac: 0xA3_D70A });
//!
//! // IEEE754 bits → decimal text, into a stack buffer or through `Display`.
//! let mut buffer = Buffer::new();
//! assert_eq!(buffer.format(x), Ok("-5.e-3"));
//! assert_eq!(buffer.format_with(x, Notation::Full), Ok("-5.0000000e-3"));
//! assert_eq!(Packed::from_f32(0.5).to_string(), "5.e-1");
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns a [`Result`] with an [`Error`]: the text is malformed, an
//! exponent is out of the tables' range, or the value is not zero or a normal number (subnormals,
//! infinities and NaNs are not supported).
//!
//! # Logging
//!
//! Conversions log through the [`log`] facade: each conversion at `trace` level, and every
//! rejected value at `debug` level. Install any logger to see them; without one the calls cost
//! next to nothing.
//!
//! This crate includes benchmarks; run them with `cargo bench -F bench`.

mod underlying;
pub mod tables;
mod float;
mod decimal;
mod error;

pub use float::{Packed, Unpacked};
pub use decimal::{Buffer, Notation, RBITS, ROUND_HALF, parse, parse_scaled};
pub use error::{Error, Result};
pub use tables::Scale;

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x4_0000};
