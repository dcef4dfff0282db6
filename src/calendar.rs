//! A single calendar year and the comments attached to its days.

use std::collections::HashMap;

use crate::Date;
use crate::Error;
use crate::Result;
use crate::Weekday;
use crate::iter::DateIterator;
use crate::utils;

/// How a [`YearCalendar`] decides whether its year is a leap year.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum LeapYear {
  /// Divisible by 4, and not by 100 unless also by 400.
  #[default]
  Gregorian,
  /// Always a leap year, whatever the year number.
  Leap,
  /// Never a leap year, whatever the year number.
  Common,
}

impl LeapYear {
  /// Whether `year` is a leap year under this mode.
  pub const fn resolve(self, year: i16) -> bool {
    match self {
      Self::Gregorian => utils::is_leap_year(year),
      Self::Leap => true,
      Self::Common => false,
    }
  }

  /// The forced value, or `None` when the Gregorian rule applies.
  pub const fn as_override(self) -> Option<bool> {
    match self {
      Self::Gregorian => None,
      Self::Leap => Some(true),
      Self::Common => Some(false),
    }
  }
}

impl From<Option<bool>> for LeapYear {
  fn from(value: Option<bool>) -> Self {
    match value {
      None => Self::Gregorian,
      Some(true) => Self::Leap,
      Some(false) => Self::Common,
    }
  }
}

/// One stored comment, paired with its date.
///
/// This is a copy taken when listing or exporting; changing it does not touch the calendar.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct DateComment {
  date: Date,
  comment: String,
}

impl DateComment {
  pub fn new(date: Date, comment: impl Into<String>) -> Self {
    Self { date, comment: comment.into() }
  }

  pub const fn date(&self) -> Date {
    self.date
  }

  pub fn comment(&self) -> &str {
    &self.comment
  }
}

/// Everything known about one day of a calendar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DayInfo {
  date: Date,
  weekday: Weekday,
  weekend: bool,
  comment: Option<String>,
}

impl DayInfo {
  pub const fn date(&self) -> Date {
    self.date
  }

  pub const fn weekday(&self) -> Weekday {
    self.weekday
  }

  pub const fn is_weekend(&self) -> bool {
    self.weekend
  }

  pub fn comment(&self) -> Option<&str> {
    self.comment.as_deref()
  }
}

/// A calendar for one year, with an optional leap-year override and a comment per day.
///
/// ## Examples
///
/// ```
/// use yearcal::LeapYear;
/// use yearcal::YearCalendar;
///
/// let cal = YearCalendar::new(2023)?.with_leap_year(LeapYear::Leap);
/// assert!(cal.is_leap_year());
/// assert_eq!(cal.days_in_month(2)?, 29);
/// # Ok::<(), yearcal::Error>(())
/// ```
#[derive(Clone, Debug)]
pub struct YearCalendar {
  year: i16,
  leap_year: LeapYear,
  comments: HashMap<Date, String>,
}

impl YearCalendar {
  /// The latest year a calendar can hold; exported dates always have a four-digit year.
  pub const MAX_YEAR: i16 = 9999;

  /// Create an empty calendar for `year`, which must be in `1..=9999`.
  pub fn new(year: i16) -> Result<Self> {
    if !(1..=Self::MAX_YEAR).contains(&year) {
      return Err(Error::out_of_range("year", year, 1, Self::MAX_YEAR));
    }
    Ok(Self { year, leap_year: LeapYear::Gregorian, comments: HashMap::new() })
  }

  /// Replace the leap-year mode, builder style.
  #[must_use]
  pub fn with_leap_year(mut self, leap_year: impl Into<LeapYear>) -> Self {
    self.set_leap_year(leap_year);
    self
  }

  /// Replace the leap-year mode.
  ///
  /// Existing comments are kept; a forced non-leap year simply stops showing February 29.
  pub fn set_leap_year(&mut self, leap_year: impl Into<LeapYear>) {
    self.leap_year = leap_year.into();
    debug!(year = self.year, leap = self.is_leap_year(); "Leap year mode changed");
  }

  pub const fn year(&self) -> i16 {
    self.year
  }

  pub const fn leap_year(&self) -> LeapYear {
    self.leap_year
  }

  /// Whether this calendar's year has a February 29, honoring any override.
  pub const fn is_leap_year(&self) -> bool {
    self.leap_year.resolve(self.year)
  }

  /// The number of days in `month` (1-12).
  pub fn days_in_month(&self, month: u8) -> Result<u8> {
    utils::check_month(month)?;
    Ok(utils::days_in_month(month, self.is_leap_year()))
  }

  /// The date of `day` in `month` of this year.
  ///
  /// Fails with [`Error::OutOfRange`] if the month or day is not part of this calendar, including
  /// February 29 of a Gregorian common year that is forced to be a leap year (there is no such
  /// date to point at).
  pub fn date(&self, month: u8, day: u8) -> Result<Date> {
    let last = self.days_in_month(month)?;
    if day < 1 || day > last {
      return Err(Error::out_of_range("day", day, 1, last));
    }
    Date::try_new(self.year, month, day)
  }

  /// Every representable date of `month`, in order.
  pub fn month_days(&self, month: u8) -> Result<DateIterator> {
    let last = self.days_in_month(month)?;
    let last = last.min(utils::days_in_month(month, utils::is_leap_year(self.year)));
    let first = Date::new(self.year, month, 1);
    Ok(first.iter_through(Date::new(self.year, month, last)))
  }
}

impl YearCalendar {
  /// Attach `comment` to `date`, replacing any comment already there.
  ///
  /// The text is trimmed. Fails with [`Error::InvalidArgument`] if `date` is not in this
  /// calendar's year or the trimmed text is empty; the calendar is unchanged in either case.
  pub fn add_comment(&mut self, date: Date, comment: impl AsRef<str>) -> Result<()> {
    if date.year() != self.year {
      return Err(Error::invalid(format!("{date} is not in {}", self.year)));
    }
    let comment = comment.as_ref().trim();
    if comment.is_empty() {
      return Err(Error::invalid("comment is empty"));
    }
    self.comments.insert(date, comment.to_owned());
    debug!(year = self.year, month = date.month(), day = date.day(); "Comment added");
    Ok(())
  }

  /// Remove the comment on `date`, returning it. Removing a missing comment is not an error.
  pub fn remove_comment(&mut self, date: Date) -> Option<String> {
    let removed = self.comments.remove(&date);
    if removed.is_some() {
      debug!(year = self.year, month = date.month(), day = date.day(); "Comment removed");
    }
    removed
  }

  /// The comment on `date`, if any.
  pub fn get_comment(&self, date: Date) -> Option<&str> {
    self.comments.get(&date).map(String::as_str)
  }

  /// All comments, in no particular order.
  pub fn list_comments(&self) -> Vec<DateComment> {
    self.comments.iter().map(|(date, comment)| DateComment::new(*date, comment.as_str())).collect()
  }

  /// All comments, earliest date first.
  pub fn sorted_comments(&self) -> Vec<DateComment> {
    let mut comments = self.list_comments();
    comments.sort_unstable_by_key(DateComment::date);
    comments
  }

  /// The number of days that carry a comment.
  pub fn len(&self) -> usize {
    self.comments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.comments.is_empty()
  }
}

impl YearCalendar {
  /// The Saturdays and Sundays of `month`, in ascending order.
  pub fn weekends_of_month(&self, month: u8) -> Result<Vec<Date>> {
    Ok(self.month_days(month)?.filter(Date::is_weekend).collect())
  }

  /// The date, weekday, weekend flag, and comment for one day.
  pub fn day_info(&self, month: u8, day: u8) -> Result<DayInfo> {
    let date = self.date(month, day)?;
    Ok(DayInfo {
      date,
      weekday: date.weekday(),
      weekend: date.is_weekend(),
      comment: self.get_comment(date).map(str::to_owned),
    })
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use assert2::check;

  use super::*;

  fn cal(year: i16) -> YearCalendar {
    YearCalendar::new(year).unwrap()
  }

  #[test]
  fn test_new() {
    check!(cal(2024).year() == 2024);
    check!(cal(2024).is_empty());
    check!(cal(2024).leap_year() == LeapYear::Gregorian);
    check!(let Err(Error::OutOfRange { field: "year", .. }) = YearCalendar::new(0));
    check!(YearCalendar::new(-5).is_err());
    check!(cal(9999).year() == 9999);
    check!(let Err(Error::OutOfRange { field: "year", value: 10000, max: 9999, .. }) =
      YearCalendar::new(10000));
    check!(YearCalendar::new(i16::MAX).is_err());
  }

  #[test]
  fn test_is_leap_year() {
    check!(cal(2000).is_leap_year());
    check!(cal(2024).is_leap_year());
    check!(!cal(1900).is_leap_year());
    check!(!cal(2023).is_leap_year());
  }

  #[test]
  fn test_leap_override() {
    check!(cal(2023).with_leap_year(LeapYear::Leap).is_leap_year());
    check!(!cal(2024).with_leap_year(LeapYear::Common).is_leap_year());
    check!(cal(1900).with_leap_year(Some(true)).is_leap_year());
    check!(cal(2000).with_leap_year(LeapYear::Gregorian).is_leap_year());
    check!(LeapYear::from(None) == LeapYear::Gregorian);
    check!(LeapYear::from(Some(false)) == LeapYear::Common);

    let mut c = cal(2024);
    c.set_leap_year(Some(false));
    check!(c.leap_year().as_override() == Some(false));
    check!(c.days_in_month(2).unwrap() == 28);
  }

  #[test]
  fn test_days_in_month() -> Result<()> {
    check!(cal(2024).days_in_month(2)? == 29);
    check!(cal(2023).days_in_month(2)? == 28);
    check!(cal(2023).with_leap_year(LeapYear::Leap).days_in_month(2)? == 29);
    check!(cal(2023).days_in_month(1)? == 31);
    check!(cal(2023).days_in_month(9)? == 30);
    let c = cal(2023);
    check!(let Err(Error::OutOfRange { field: "month", value: 0, .. }) = c.days_in_month(0));
    check!(let Err(Error::OutOfRange { field: "month", value: 13, .. }) = c.days_in_month(13));
    Ok(())
  }

  #[test]
  fn test_date() -> Result<()> {
    check!(cal(2024).date(2, 29)? == date! { 2024-02-29 });
    check!(let Err(Error::OutOfRange { field: "day", .. }) = cal(2023).date(2, 29));
    check!(let Err(Error::OutOfRange { field: "day", .. }) = cal(2024).date(4, 31));
    check!(let Err(Error::OutOfRange { field: "day", .. }) = cal(2024).date(4, 0));
    check!(cal(2024).with_leap_year(LeapYear::Common).date(2, 29).is_err());
    check!(cal(2023).with_leap_year(LeapYear::Leap).date(2, 29).is_err());
    Ok(())
  }

  #[test]
  fn test_comments() -> Result<()> {
    let mut c = cal(2024);
    let date = date! { 2024-03-08 };
    c.add_comment(date, "  holiday \n")?;
    check!(c.get_comment(date) == Some("holiday"));
    check!(c.len() == 1);

    c.add_comment(date, "moved")?;
    check!(c.get_comment(date) == Some("moved"));
    check!(c.len() == 1);

    check!(c.remove_comment(date) == Some("moved".to_owned()));
    check!(c.get_comment(date).is_none());
    check!(c.remove_comment(date).is_none());
    check!(c.is_empty());
    Ok(())
  }

  #[test]
  fn test_comment_wrong_year() -> Result<()> {
    let mut c = cal(2024);
    c.add_comment(date! { 2024-01-01 }, "kept")?;
    check!(let Err(Error::InvalidArgument(_)) = c.add_comment(date! { 2023-12-31 }, "nope"));
    check!(c.len() == 1);
    check!(c.get_comment(date! { 2023-12-31 }).is_none());
    Ok(())
  }

  #[test]
  fn test_comment_blank() {
    let mut c = cal(2024);
    check!(let Err(Error::InvalidArgument(_)) = c.add_comment(date! { 2024-01-01 }, "   "));
    check!(c.is_empty());
  }

  #[test]
  fn test_list_comments() -> Result<()> {
    let mut c = cal(2024);
    c.add_comment(date! { 2024-12-25 }, "xmas")?;
    c.add_comment(date! { 2024-01-01 }, "new year")?;
    c.add_comment(date! { 2024-07-04 }, "fireworks")?;

    let listed: HashSet<DateComment> = c.list_comments().into_iter().collect();
    check!(listed.len() == 3);
    check!(listed.contains(&DateComment::new(date! { 2024-07-04 }, "fireworks")));

    let sorted: Vec<Date> = c.sorted_comments().iter().map(DateComment::date).collect();
    check!(sorted == [date! { 2024-01-01 }, date! { 2024-07-04 }, date! { 2024-12-25 }]);
    Ok(())
  }

  #[test]
  fn test_weekends_of_month() -> Result<()> {
    let days: Vec<u8> = cal(2024).weekends_of_month(1)?.iter().map(Date::day).collect();
    check!(days == [6, 7, 13, 14, 20, 21, 27, 28]);

    let feb: Vec<u8> = cal(2020).weekends_of_month(2)?.iter().map(Date::day).collect();
    check!(feb == [1, 2, 8, 9, 15, 16, 22, 23, 29]);

    check!(cal(2024).weekends_of_month(13).is_err());
    Ok(())
  }

  #[test]
  fn test_weekends_forced_leap() -> Result<()> {
    // 2026-02-28 is a Saturday; a forced 29th has no date to report.
    let c = cal(2026).with_leap_year(LeapYear::Leap);
    let feb = c.weekends_of_month(2)?;
    check!(feb.last() == Some(&date! { 2026-02-28 }));
    check!(c.month_days(2)?.len() == 28);
    Ok(())
  }

  #[test]
  fn test_day_info() -> Result<()> {
    let mut c = cal(2024);
    c.add_comment(date! { 2024-01-06 }, "party")?;
    let info = c.day_info(1, 6)?;
    check!(info.date() == date! { 2024-01-06 });
    check!(info.weekday() == Weekday::Saturday);
    check!(info.is_weekend());
    check!(info.comment() == Some("party"));

    let info = c.day_info(1, 8)?;
    check!(!info.is_weekend());
    check!(info.comment().is_none());

    check!(c.day_info(2, 30).is_err());
    Ok(())
  }
}
