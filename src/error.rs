use std::fmt;
use std::io;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by calendar, export, command, and calculator operations.
///
/// Every failure is reported before any state is touched, so a calendar that returned an error is
/// exactly as it was before the call.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
  /// A month, day, or year outside its allowed range.
  OutOfRange { field: &'static str, value: i64, min: i64, max: i64 },

  /// An argument that is well-formed but not acceptable (e.g. a date in the wrong year).
  InvalidArgument(String),

  /// A calculator division, remainder, or reciprocal with a zero divisor.
  DivisionByZero,

  /// Text that could not be read as a date or an export line.
  Parse { src: String, reason: String },

  /// The export sink or import source failed.
  Io(io::Error),
}

impl Error {
  pub(crate) fn out_of_range(
    field: &'static str,
    value: impl Into<i64>,
    min: impl Into<i64>,
    max: impl Into<i64>,
  ) -> Self {
    Self::OutOfRange { field, value: value.into(), min: min.into(), max: max.into() }
  }

  pub(crate) fn invalid(msg: impl Into<String>) -> Self {
    Self::InvalidArgument(msg.into())
  }

  pub(crate) fn parse(src: impl Into<String>, reason: impl fmt::Display) -> Self {
    Self::Parse { src: src.into(), reason: reason.to_string() }
  }
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::OutOfRange { field, value, min, max } => {
        write!(f, "{field} {value} is out of range ({min}-{max})")
      },
      Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
      Self::DivisionByZero => f.write_str("division by zero"),
      Self::Parse { src, reason } => write!(f, "could not parse {src:?}: {reason}"),
      Self::Io(e) => write!(f, "I/O error: {e}"),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for Error {
  fn from(value: io::Error) -> Self {
    Self::Io(value)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_display() {
    let err = Error::out_of_range("month", 13u8, 1u8, 12u8);
    check!(err.to_string() == "month 13 is out of range (1-12)");
    check!(Error::invalid("wrong year").to_string() == "invalid argument: wrong year");
    check!(Error::DivisionByZero.to_string() == "division by zero");
    check!(Error::parse("foo", "bad date").to_string() == r#"could not parse "foo": bad date"#);
  }

  #[test]
  fn test_io_source() {
    let err: Error = io::Error::other("disk full").into();
    check!(std::error::Error::source(&err).is_some());
    check!(err.to_string().contains("disk full"));
  }
}
