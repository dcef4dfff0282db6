//! The `yearcal` crate models a single calendar year: which days it has, which of them fall on a
//! weekend, how a month lays out on a Monday-first grid, and a free-text comment attached to any
//! day of that year. Comments can be exported to (and read back from) a simple quoted CSV file.
//!
//! The crate also ships a small memory calculator ([`Calculator`]) whose whole state is an
//! explicit value, passed into and returned from each operation.
//!
//! ## Examples
//!
//! Building a calendar and annotating a day:
//!
//! ```
//! use yearcal::YearCalendar;
//!
//! let mut cal = YearCalendar::new(2024)?;
//! let date = cal.date(1, 6)?;
//! cal.add_comment(date, "  Epiphany  ")?;
//! assert_eq!(cal.get_comment(date), Some("Epiphany"));
//! assert!(cal.render_month(1)?.contains(" 6!"));
//! # Ok::<(), yearcal::Error>(())
//! ```
//!
//! Dates can also be written with the `date!` macro:
//!
//! ```
//! use yearcal::date;
//!
//! let d = date! { 2024-01-06 };
//! assert_eq!(d.weekday(), yearcal::Weekday::Saturday);
//! ```

use std::fmt;

/// Construct a date from a `YYYY-MM-DD` literal.
///
/// ## Examples
///
/// ```
/// # use yearcal::date;
/// let d = date! { 2024-02-29 };
/// assert_eq!(d.year(), 2024);
/// assert_eq!(d.month(), 2);
/// assert_eq!(d.day(), 29);
/// ```
#[macro_export]
macro_rules! date {
  ($y:literal-$m:literal-$d:literal) => {{
    #[allow(clippy::zero_prefixed_literal)]
    {
      $crate::Date::new($y, $m, $d)
    }
  }};
}

// Structured debug records, compiled out without the `log` feature.
macro_rules! debug {
  ($($t:tt)*) => {
    #[cfg(feature = "log")]
    log::debug!($($t)*);
  };
}

pub mod calc;
pub mod calendar;
pub mod command;
mod error;
pub mod export;
mod format;
pub mod iter;
mod parse;
mod render;
#[cfg(feature = "serde")]
mod serde;
mod utils;
mod weekday;

pub use calc::Calculator;
pub use calendar::DateComment;
pub use calendar::DayInfo;
pub use calendar::LeapYear;
pub use calendar::YearCalendar;
pub use command::Command;
pub use error::Error;
pub use error::Result;
pub use format::FormattedDate;
pub use weekday::Weekday;

/// A single day in the proleptic Gregorian calendar.
///
/// There is no time-of-day component, so two `Date`s for the same day always compare equal.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Date(i32);

impl Date {
  /// Construct a new `Date` from the provided year, month, and day.
  ///
  /// ## Examples
  ///
  /// ```
  /// use yearcal::Date;
  /// let date = Date::new(2012, 4, 21);
  /// assert_eq!(date.year(), 2012);
  /// assert_eq!(date.month(), 4);
  /// assert_eq!(date.day(), 21);
  /// ```
  ///
  /// ## Panic
  ///
  /// This function panics if it receives "out-of-bounds" values (e.g. "March 32" or "February
  /// 30"). Use [`Date::try_new`] for values that come from user input.
  pub const fn new(year: i16, month: u8, day: u8) -> Self {
    assert!(month >= 1 && month <= 12, "Month out-of-bounds");
    assert!(
      day >= 1 && day <= utils::days_in_month(month, utils::is_leap_year(year)),
      "Day out-of-bounds"
    );

    // The algorithm to convert from a civil year/month/day to the number of days that have elapsed
    // since the epoch is taken from here:
    // https://howardhinnant.github.io/date_algorithms.html#days_from_civil
    let year = year as i32 - if month <= 2 { 1 } else { 0 };
    let month = month as i32;
    let day = day as i32;
    let era: i32 = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let day_of_year = (153 * (if month > 2 { month - 3 } else { month + 9 }) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    Self(era * 146097 + day_of_era - 719468)
  }

  /// Construct a new `Date`, reporting impossible values as [`Error::OutOfRange`].
  ///
  /// ```
  /// use yearcal::Date;
  /// assert!(Date::try_new(2024, 2, 29).is_ok());
  /// assert!(Date::try_new(2023, 2, 29).is_err());
  /// assert!(Date::try_new(2023, 13, 1).is_err());
  /// ```
  pub fn try_new(year: i16, month: u8, day: u8) -> Result<Self> {
    utils::check_month(month)?;
    let last = utils::days_in_month(month, utils::is_leap_year(year));
    if day < 1 || day > last {
      return Err(Error::out_of_range("day", day, 1, last));
    }
    Ok(Self::new(year, month, day))
  }

  /// The date a number of days after (or, if negative, before) this one.
  #[inline]
  pub const fn add_days(&self, days: i32) -> Self {
    Self(self.0 + days)
  }
}

impl Date {
  /// The year, month, and day for the given date.
  pub(crate) const fn ymd(&self) -> (i16, u8, u8) {
    // The inverse of `new`, also from:
    // https://howardhinnant.github.io/date_algorithms.html#civil_from_days
    let shifted = self.0 + 719468; // Days from March 1, 0 A.D.
    let era = if shifted >= 0 { shifted } else { shifted - 146_096 } / 146_097;
    let doe = shifted - era * 146_097; // day of era: [0, 146_097)
    let year_of_era = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let year = year_of_era + era * 400;
    let day_of_year = doe - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let mp = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    (year as i16 + if month <= 2 { 1 } else { 0 }, month as u8, day as u8)
  }

  /// Returns the year number in the calendar date.
  #[inline]
  pub const fn year(&self) -> i16 {
    self.ymd().0
  }

  /// Returns the month number, starting from 1.
  #[inline]
  pub const fn month(&self) -> u8 {
    self.ymd().1
  }

  /// Returns the day of the month, starting from 1.
  #[inline]
  pub const fn day(&self) -> u8 {
    self.ymd().2
  }

  /// The day of the current year. Range: `[1, 366]`
  #[inline]
  pub const fn day_of_year(&self) -> u16 {
    (self.0 - Date::new(self.year(), 1, 1).0 + 1) as u16
  }

  /// Whether this date's year is a Gregorian leap year.
  #[inline]
  pub const fn is_leap_year(&self) -> bool {
    utils::is_leap_year(self.year())
  }
}

impl Date {
  /// Format the date according to the provided `strftime` specifier.
  ///
  /// Supported: `%Y %m %d %e %B %b %A %a %j %F %%`, with the `-` (no padding), `_` (space
  /// padding), and `0` (zero padding) modifiers.
  pub fn format<'a>(&self, format_str: &'a str) -> FormattedDate<'a> {
    FormattedDate { date: *self, format: format_str }
  }

  /// An iterator of dates beginning with this date, and ending with the provided end date
  /// (inclusive).
  pub fn iter_through(&self, end: Date) -> iter::DateIterator {
    iter::DateIterator::new(self, end)
  }
}

impl fmt::Debug for Date {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d"))
  }
}

impl fmt::Display for Date {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.format("%Y-%m-%d"))
  }
}
