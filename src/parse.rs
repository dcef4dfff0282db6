use std::str::FromStr;

use strptime::Parser;

use crate::Date;
use crate::Error;
use crate::Result;

impl Date {
  /// Parse a date from a string, according to the provided format string.
  ///
  /// Text that matches the format but names an impossible day (e.g. `2023-02-29`) is rejected.
  ///
  /// ```
  /// use yearcal::Date;
  /// assert_eq!(Date::parse("04/21/12", "%m/%d/%y")?, Date::new(2012, 4, 21));
  /// # Ok::<(), yearcal::Error>(())
  /// ```
  pub fn parse(date_str: impl AsRef<str>, date_fmt: &'static str) -> Result<Date> {
    let date_str = date_str.as_ref();
    let parser = Parser::new(date_fmt);
    let raw_date = parser
      .parse(date_str)
      .and_then(|raw| raw.date())
      .map_err(|e| Error::parse(date_str, e))?;
    Date::try_new(raw_date.year(), raw_date.month(), raw_date.day())
      .map_err(|e| Error::parse(date_str, e))
  }
}

impl FromStr for Date {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::parse(s, "%Y-%m-%d")
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_from_str() -> Result<()> {
    check!("2012-04-21".parse::<Date>()? == date! { 2012-04-21 });
    check!("2024-02-29".parse::<Date>()? == date! { 2024-02-29 });
    check!("2012-4-21".parse::<Date>().is_err());
    check!("04/21/2012".parse::<Date>().is_err());
    check!("12-04-21".parse::<Date>().is_err());
    check!("foo".parse::<Date>().map_err(|e| e.to_string()).unwrap_err().contains("foo"));
    Ok(())
  }

  #[test]
  fn test_impossible_day() {
    check!(let Err(Error::Parse { .. }) = "2023-02-29".parse::<Date>());
  }

  #[test]
  fn test_parse() -> Result<()> {
    check!(Date::parse("04/21/12", "%m/%d/%y")? == date! { 2012-04-21 });
    check!(Date::parse("Saturday, April 21, 2012", "%A, %B %-d, %Y")? == date! { 2012-04-21 });
    Ok(())
  }
}
