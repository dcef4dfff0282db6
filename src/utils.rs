use crate::Error;
use crate::Result;

/// Number of days in each month of a common year, January first.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Return true if this is a Gregorian leap year, false otherwise.
pub(crate) const fn is_leap_year(year: i16) -> bool {
  year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// The length of the given month (1-12). February depends on `leap`.
///
/// Callers must have validated `month`; out-of-range values panic.
pub(crate) const fn days_in_month(month: u8, leap: bool) -> u8 {
  match (month, leap) {
    (2, true) => 29,
    _ => MONTH_DAYS[month as usize - 1],
  }
}

/// Reject month numbers outside `1..=12`.
pub(crate) fn check_month(month: u8) -> Result<()> {
  match month {
    1..=12 => Ok(()),
    _ => Err(Error::out_of_range("month", month, 1, 12)),
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_is_leap_year() {
    check!(is_leap_year(2000));
    check!(is_leap_year(2024));
    check!(!is_leap_year(1900));
    check!(!is_leap_year(2023));
    check!(!is_leap_year(2100));
  }

  #[test]
  fn test_days_in_month() {
    check!(days_in_month(2, true) == 29);
    check!(days_in_month(2, false) == 28);
    check!(days_in_month(1, false) == 31);
    check!(days_in_month(4, true) == 30);
    check!(days_in_month(12, false) == 31);
    check!((1..=12).map(|m| days_in_month(m, false) as u16).sum::<u16>() == 365);
  }

  #[test]
  fn test_check_month() {
    check!(check_month(1).is_ok());
    check!(check_month(12).is_ok());
    check!(check_month(0).is_err());
    check!(check_month(13).is_err());
  }
}
