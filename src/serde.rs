use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Visitor;
use serde::ser::SerializeStruct;

use crate::Date;
use crate::DateComment;
use crate::LeapYear;

impl Serialize for Date {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&self.format("%Y-%m-%d"))
  }
}

struct DateVisitor;

impl Visitor<'_> for DateVisitor {
  type Value = Date;

  #[cfg(not(tarpaulin_include))]
  fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    formatter.write_str("a YYYY-MM-DD date string")
  }

  fn visit_str<E: serde::de::Error>(self, s: &str) -> Result<Self::Value, E> {
    s.parse().map_err(E::custom)
  }
}

impl<'de> Deserialize<'de> for Date {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    deserializer.deserialize_str(DateVisitor)
  }
}

impl Serialize for DateComment {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("DateComment", 2)?;
    state.serialize_field("date", &self.date())?;
    state.serialize_field("comment", self.comment())?;
    state.end()
  }
}

/// A leap-year mode is written as its override: `true`, `false`, or `null` for Gregorian.
impl Serialize for LeapYear {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_override().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for LeapYear {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Option::<bool>::deserialize(deserializer).map(LeapYear::from)
  }
}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_serde() -> Result<(), serde_json::Error> {
    let json = r#"{"date":"2012-04-21","leap":null}"#;
    let struct_: TestStruct = serde_json::from_str(json)?;
    check!(struct_.date == date! { 2012-04-21 });
    check!(struct_.leap == LeapYear::Gregorian);
    let json = serde_json::to_string(&struct_)?;
    check!(json == r#"{"date":"2012-04-21","leap":null}"#);
    Ok(())
  }

  #[test]
  fn test_bad_date() {
    check!(serde_json::from_str::<TestStruct>(r#"{"date":"2023-02-29","leap":true}"#).is_err());
  }

  #[test]
  fn test_leap_year() -> Result<(), serde_json::Error> {
    check!(serde_json::to_string(&LeapYear::Leap)? == "true");
    check!(serde_json::from_str::<LeapYear>("false")? == LeapYear::Common);
    Ok(())
  }

  #[test]
  fn test_date_comment() -> Result<(), serde_json::Error> {
    let c = DateComment::new(date! { 2024-01-06 }, "party");
    check!(serde_json::to_string(&c)? == r#"{"date":"2024-01-06","comment":"party"}"#);
    Ok(())
  }

  #[derive(Deserialize, Serialize)]
  struct TestStruct {
    date: Date,
    leap: LeapYear,
  }
}
