use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::fmt::Result;
use std::fmt::Write;

use crate::Date;

/// A date with a requested format.
pub struct FormattedDate<'a> {
  pub(crate) date: Date,
  pub(crate) format: &'a str,
}

impl Debug for FormattedDate<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for FormattedDate<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let d = self.date;
    let (year, month, day) = d.ymd();
    let mut flag = false;
    let mut padding = Padding::Default;
    for c in self.format.chars() {
      if !flag {
        match c {
          '%' => {
            flag = true;
            padding = Padding::Default;
          },
          _ => f.write_char(c)?,
        }
        continue;
      }

      #[rustfmt::skip]
      match c {
        '0' => { padding = Padding::Zero; continue; },
        '-' => { padding = Padding::Suppress; continue; },
        '_' => { padding = Padding::Space; continue; },
        _ => {},
      };

      flag = false;
      match c {
        'Y' => padding.write(f, 4, year)?,
        'm' => padding.write(f, 2, month)?,
        'd' => padding.write(f, 2, day)?,
        'e' => padding.or(Padding::Space).write(f, 2, day)?,
        'j' => padding.write(f, 3, d.day_of_year())?,
        'B' => f.write_str(month_name(month))?,
        'b' | 'h' => f.write_str(&month_name(month)[..3])?,
        'A' => write!(f, "{}", d.weekday())?,
        'a' => f.write_str(d.weekday().abbv())?,
        'F' => write!(f, "{year:04}-{month:02}-{day:02}")?,
        '%' => f.write_char('%')?,
        _ => Err(Error)?,
      }
    }
    Ok(())
  }
}

impl PartialEq<&str> for FormattedDate<'_> {
  fn eq(&self, other: &&str) -> bool {
    &self.to_string().as_str() == other
  }
}

const MONTH_NAMES: [&str; 12] = [
  "January",
  "February",
  "March",
  "April",
  "May",
  "June",
  "July",
  "August",
  "September",
  "October",
  "November",
  "December",
];

/// The English name of a month (1-12).
pub(crate) const fn month_name(month: u8) -> &'static str {
  MONTH_NAMES[month as usize - 1]
}

/// A padding modifier
#[derive(Clone, Copy)]
enum Padding {
  /// Use the default padding for the directive.
  Default,
  /// Explicitly pad with `0`
  Zero,
  /// Explicitly pad with ` `.
  Space,
  /// Explicitly prevent padding, even if the token has default padding.
  Suppress,
}

impl Padding {
  /// Replace `Default` with a directive-specific default.
  fn or(self, default: Padding) -> Padding {
    match self {
      Padding::Default => default,
      other => other,
    }
  }

  fn write(self, f: &mut Formatter<'_>, width: usize, value: impl Display) -> Result {
    match self {
      Padding::Default | Padding::Zero => write!(f, "{value:0width$}"),
      Padding::Space => write!(f, "{value:width$}"),
      Padding::Suppress => write!(f, "{value}"),
    }
  }
}
