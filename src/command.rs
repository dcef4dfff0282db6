//! The command vocabulary of the calendar's console front end.
//!
//! Only parsing lives here; reading lines and printing results is left to the front end.

use std::num::IntErrorKind;
use std::str::FromStr;

use crate::Error;
use crate::Result;

/// One parsed front-end command. Month and day numbers are only range-checked here when they do
/// not fit a `u8`; the calendar reports the rest when the command is carried out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
  /// `show M`: render a month grid.
  Show { month: u8 },
  /// `day M D`: details for one date.
  Day { month: u8, day: u8 },
  /// `addc M D [text...]`: comment on a date. Without text, the front end should ask for it.
  AddComment { month: u8, day: u8, text: Option<String> },
  /// `clearc M D`: remove a comment.
  ClearComment { month: u8, day: u8 },
  /// `weekends M`: list a month's weekend days.
  Weekends { month: u8 },
  /// `listc`: list all comments.
  ListComments,
  /// `export`: write comments to the default CSV file.
  Export,
  Help,
  Exit,
}

impl Command {
  /// A one-line-per-command summary, suitable for `help`.
  pub const HELP: &'static str = "\
show M            show the calendar for month M (1-12)
day M D           show details for a date
addc M D [TEXT]   add a comment to a date
clearc M D        remove the comment from a date
weekends M        list the weekend days of month M
listc             list all comments
export            export comments to CSV
help              show this help
exit              quit";
}

impl FromStr for Command {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let mut words = s.split_whitespace();
    let verb = words.next().ok_or_else(|| Error::invalid("empty command"))?.to_lowercase();
    let mut number = |name: &'static str| -> Result<u8> {
      let word = words.next().ok_or_else(|| Error::invalid(format!("{verb}: missing {name}")))?;
      let n = match word.parse::<i64>() {
        Ok(n) => n,
        Err(e) => match e.kind() {
          IntErrorKind::PosOverflow => i64::MAX,
          IntErrorKind::NegOverflow => i64::MIN,
          _ => return Err(Error::invalid(format!("{verb}: {name} {word:?} is not a number"))),
        },
      };
      let max: u8 = if name == "month" { 12 } else { 31 };
      u8::try_from(n).map_err(|_| Error::out_of_range(name, n, 1, max))
    };

    let command = match verb.as_str() {
      "show" => Self::Show { month: number("month")? },
      "day" => Self::Day { month: number("month")?, day: number("day")? },
      "addc" => {
        let (month, day) = (number("month")?, number("day")?);
        // Keep the comment's inner spacing: take everything after the day argument.
        let text = rest_after(s, 3).filter(|t| !t.is_empty()).map(str::to_owned);
        return Ok(Self::AddComment { month, day, text });
      },
      "clearc" => Self::ClearComment { month: number("month")?, day: number("day")? },
      "weekends" => Self::Weekends { month: number("month")? },
      "listc" => Self::ListComments,
      "export" => Self::Export,
      "help" => Self::Help,
      "exit" => Self::Exit,
      _ => return Err(Error::invalid(format!("unknown command {verb:?}"))),
    };
    match words.next() {
      Some(extra) => Err(Error::invalid(format!("{verb}: unexpected argument {extra:?}"))),
      None => Ok(command),
    }
  }
}

/// The trimmed remainder of `s` after its first `n` whitespace-separated words.
fn rest_after(s: &str, n: usize) -> Option<&str> {
  let mut rest = s.trim_start();
  for _ in 0..n {
    let end = rest.find(char::is_whitespace)?;
    rest = rest[end..].trim_start();
  }
  Some(rest.trim_end())
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_parse() -> Result<()> {
    check!("show 3".parse::<Command>()? == Command::Show { month: 3 });
    check!("  DAY 2 29 ".parse::<Command>()? == Command::Day { month: 2, day: 29 });
    check!("clearc 12 25".parse::<Command>()? == Command::ClearComment { month: 12, day: 25 });
    check!("weekends 1".parse::<Command>()? == Command::Weekends { month: 1 });
    check!("listc".parse::<Command>()? == Command::ListComments);
    check!("export".parse::<Command>()? == Command::Export);
    check!("Help".parse::<Command>()? == Command::Help);
    check!("exit".parse::<Command>()? == Command::Exit);
    Ok(())
  }

  #[test]
  fn test_add_comment() -> Result<()> {
    check!(
      "addc 1 6  buy  cake ".parse::<Command>()?
        == Command::AddComment { month: 1, day: 6, text: Some("buy  cake".into()) }
    );
    check!("addc 1 6".parse::<Command>()? == Command::AddComment { month: 1, day: 6, text: None });
    check!(
      "addc 1 6   ".parse::<Command>()? == Command::AddComment { month: 1, day: 6, text: None }
    );
    Ok(())
  }

  #[test]
  fn test_errors() {
    check!(let Err(Error::InvalidArgument(_)) = "".parse::<Command>());
    check!(let Err(Error::InvalidArgument(_)) = "frobnicate".parse::<Command>());
    check!(let Err(Error::InvalidArgument(_)) = "show".parse::<Command>());
    check!(let Err(Error::InvalidArgument(_)) = "show march".parse::<Command>());
    check!(let Err(Error::InvalidArgument(_)) = "day 3".parse::<Command>());
    check!(let Err(Error::InvalidArgument(_)) = "show 3 4".parse::<Command>());
  }

  #[test]
  fn test_numbers_out_of_range() {
    check!(let Err(Error::OutOfRange { field: "month", value: 300, .. }) =
      "show 300".parse::<Command>());
    check!(let Err(Error::OutOfRange { field: "month", value: 300, max: 12, .. }) =
      "day 300 1".parse::<Command>());
    check!(let Err(Error::OutOfRange { field: "day", value: -1, max: 31, .. }) =
      "clearc 1 -1".parse::<Command>());
    check!(let Err(Error::OutOfRange { field: "day", value: i64::MAX, .. }) =
      "addc 1 99999999999999999999 x".parse::<Command>());
  }

  #[test]
  fn test_rest_after() {
    check!(rest_after("a b c d e", 3) == Some("d e"));
    check!(rest_after("a b c", 3) == None);
    check!(rest_after("a b c ", 3) == Some(""));
  }

  #[test]
  fn test_help_lists_every_verb() {
    for verb in ["show", "day", "addc", "clearc", "weekends", "listc", "export", "help", "exit"] {
      check!(Command::HELP.lines().any(|l| l.starts_with(verb)));
    }
  }
}
