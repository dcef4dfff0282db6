use std::fmt::Display;

use crate::Date;

impl Date {
  /// Return the weekday corresponding to the given date.
  ///
  /// 1970-01-01 was a Thursday; every other weekday follows from the day count, so this holds for
  /// the whole proleptic Gregorian range.
  #[inline]
  pub const fn weekday(&self) -> Weekday {
    match (self.0 + 4).rem_euclid(7) {
      0 => Weekday::Sunday,
      1 => Weekday::Monday,
      2 => Weekday::Tuesday,
      3 => Weekday::Wednesday,
      4 => Weekday::Thursday,
      5 => Weekday::Friday,
      6 => Weekday::Saturday,
      #[cfg(not(tarpaulin_include))]
      _ => panic!("Unreachable: rem_euclid(7) is always within 0..7"),
    }
  }

  /// Whether this date falls on a Saturday or a Sunday.
  #[inline]
  pub const fn is_weekend(&self) -> bool {
    self.weekday().is_weekend()
  }
}

/// A representation of the day of the week.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
  Sunday = 0,
  Monday = 1,
  Tuesday = 2,
  Wednesday = 3,
  Thursday = 4,
  Friday = 5,
  Saturday = 6,
}

impl Display for Weekday {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    macro_rules! display {
      ($($e:ident),*) => {
        f.write_str(match self {
          $(Self::$e => stringify!($e)),*
        })
      };
    }
    display!(Sunday, Monday, Tuesday, Wednesday, Thursday, Friday, Saturday)
  }
}

impl Weekday {
  /// The three-letter abbreviation for this weekday.
  pub const fn abbv(&self) -> &'static str {
    match self {
      Self::Sunday => "Sun",
      Self::Monday => "Mon",
      Self::Tuesday => "Tue",
      Self::Wednesday => "Wed",
      Self::Thursday => "Thu",
      Self::Friday => "Fri",
      Self::Saturday => "Sat",
    }
  }

  /// Saturday and Sunday.
  #[inline]
  pub const fn is_weekend(&self) -> bool {
    matches!(self, Self::Saturday | Self::Sunday)
  }

  /// The zero-based grid column of this weekday in a Monday-first week (Monday = 0, Sunday = 6).
  #[inline]
  pub const fn column(&self) -> u8 {
    (*self as u8 + 6) % 7
  }
}
