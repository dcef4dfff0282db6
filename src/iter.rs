//! Iteration over runs of consecutive days.

use std::iter::FusedIterator;

use crate::Date;

/// An iterator over consecutive dates, from a start date through an end date (inclusive).
///
/// Yields nothing if the end precedes the start.
#[derive(Clone, Debug)]
pub struct DateIterator {
  cursor: Date,
  end: Date,
}

impl DateIterator {
  pub(crate) const fn new(d: &Date, end: Date) -> Self {
    Self { cursor: *d, end }
  }
}

impl Iterator for DateIterator {
  type Item = Date;

  fn next(&mut self) -> Option<Self::Item> {
    match self.cursor > self.end {
      true => None,
      false => {
        let answer = Some(self.cursor);
        self.cursor = self.cursor.add_days(1);
        answer
      },
    }
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = (self.end.0 - self.cursor.0 + 1).max(0) as usize;
    (remaining, Some(remaining))
  }
}

impl ExactSizeIterator for DateIterator {}

impl FusedIterator for DateIterator {}

#[cfg(test)]
mod tests {
  use assert2::check;

  use super::*;

  #[test]
  fn test_iter() {
    let start = date! { 2012-04-21 };
    check!(start.iter_through(date! { 2012-04-25 }).count() == 5);
    check!(start.iter_through(date! { 2012-04-21 }).count() == 1);
    check!(start.iter_through(date! { 2012-04-20 }).next().is_none());
    check!(start.iter_through(date! { 2012-04-20 }).len() == 0);
  }

  #[test]
  fn test_iter_across_february() {
    let days: Vec<Date> = date! { 2024-02-27 }.iter_through(date! { 2024-03-01 }).collect();
    check!(days.len() == 4);
    check!(days[2] == date! { 2024-02-29 });
    check!(days[3] == date! { 2024-03-01 });
    check!(date! { 2023-02-27 }.iter_through(date! { 2023-03-01 }).len() == 3);
  }
}
