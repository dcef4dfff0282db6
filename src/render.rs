//! Text rendering of month grids.

use std::fmt;

use crate::Result;
use crate::YearCalendar;
use crate::format::month_name;

const HEADER: &str = "Mo Tu We Th Fr Sa Su";
const LEGEND: &str = "* weekend, ! has comment";

/// Cell markers, in order of precedence.
const COMMENT_MARK: char = '!';
const WEEKEND_MARK: char = '*';

impl YearCalendar {
  /// Render `month` as a Monday-first grid.
  ///
  /// Each day is a three-character cell: the day number right-aligned in two columns, then `!`
  /// if the day has a comment, `*` if it is a weekend without one, or a space. Rows end after the
  /// Sunday column.
  ///
  /// ```
  /// use yearcal::YearCalendar;
  ///
  /// let grid = YearCalendar::new(2024)?.render_month(1)?;
  /// let mut lines = grid.lines();
  /// assert_eq!(lines.next(), Some("January 2024"));
  /// assert_eq!(lines.next(), Some("Mo Tu We Th Fr Sa Su"));
  /// assert_eq!(lines.next(), Some(" 1  2  3  4  5  6* 7*"));
  /// # Ok::<(), yearcal::Error>(())
  /// ```
  pub fn render_month(&self, month: u8) -> Result<String> {
    let days = self.days_in_month(month)?;
    let start_col = self.date(month, 1)?.weekday().column();
    Ok(MonthGrid { calendar: self, month, days, start_col }.to_string())
  }

  /// Render all twelve months, separated by blank lines.
  pub fn render_year(&self) -> Result<String> {
    let months = (1..=12).map(|m| self.render_month(m)).collect::<Result<Vec<_>>>()?;
    Ok(months.join("\n"))
  }
}

/// A validated month, ready to be written out as a grid.
struct MonthGrid<'a> {
  calendar: &'a YearCalendar,
  month: u8,
  days: u8,
  /// Column of the 1st, Monday being 0.
  start_col: u8,
}

impl MonthGrid<'_> {
  fn marker(&self, day: u8, column: u8) -> char {
    // Days past the last real date (a forced February 29) have no comment to look up.
    let cal = self.calendar;
    let comment = cal.date(self.month, day).ok().and_then(|d| cal.get_comment(d));
    match (comment, column >= 5) {
      (Some(_), _) => COMMENT_MARK,
      (None, true) => WEEKEND_MARK,
      (None, false) => ' ',
    }
  }
}

impl fmt::Display for MonthGrid<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{} {}", month_name(self.month), self.calendar.year())?;
    writeln!(f, "{HEADER}")?;
    for _ in 0..self.start_col {
      f.write_str("   ")?;
    }
    for day in 1..=self.days {
      let column = (self.start_col + day - 1) % 7;
      write!(f, "{day:>2}{}", self.marker(day, column))?;
      if column == 6 {
        f.write_str("\n")?;
      }
    }
    if (self.start_col + self.days) % 7 != 0 {
      f.write_str("\n")?;
    }
    writeln!(f, "{LEGEND}")
  }
}
