/// Everything that can go wrong in a conversion. There is no partial result: each operation either
/// succeeds in one pass or returns one of these.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// The decimal text does not match `-?[1-9].[0-9]*(e-?[0-9]+)?`, and is not a zero.
  #[error("malformed decimal number")]
  MalformedInput,

  /// An exponent falls outside the range covered by the constant tables.
  #[error("exponent {exponent} is outside the supported range {min}..={max}")]
  ExponentOutOfRange { exponent: i16, min: i16, max: i16 },

  /// Infinities, NaNs, subnormals, and unnormalised fractions are not supported.
  #[error("unsupported value (only zero and normal finite numbers are supported)")]
  UnsupportedValue,
}

/// Shorthand for a [`core::result::Result`] with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
