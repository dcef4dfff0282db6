//! Export of calendar comments to a quoted CSV file, and reading such a file back.
//!
//! The file starts with a `Date,Comment` header, followed by one line per comment in date order:
//!
//! ```text
//! Date,Comment
//! "2024-01-06","say ""cheese"""
//! "2024-12-25","xmas"
//! ```
//!
//! Both fields are always quoted, and a `"` inside a comment is written twice.

use std::fs::File;
use std::io::BufWriter;
use std::io::Read;
use std::io::Write;
use std::mem;
use std::path::Path;

use crate::Date;
use crate::DateComment;
use crate::Error;
use crate::Result;
use crate::YearCalendar;

const HEADER: [&str; 2] = ["Date", "Comment"];

/// The file name used for a year's export: `comments_<year>.csv`.
pub fn default_file_name(year: i16) -> String {
  format!("comments_{year}.csv")
}

/// Write every comment of `calendar` to `writer`, earliest first.
///
/// Returns the number of comments written (the header line is not counted).
pub fn write_comments<W: Write>(calendar: &YearCalendar, mut writer: W) -> Result<usize> {
  writeln!(writer, "{}", HEADER.join(","))?;
  let comments = calendar.sorted_comments();
  for c in &comments {
    let escaped = c.comment().replace('"', "\"\"");
    writeln!(writer, "\"{}\",\"{escaped}\"", c.date().format("%Y-%m-%d"))?;
  }
  writer.flush()?;
  Ok(comments.len())
}

/// Read comments previously written by [`write_comments`].
///
/// Blank lines, and a `Date,Comment` header before the first entry, are skipped. Any other line
/// must hold exactly a `YYYY-MM-DD` date and a comment, or the whole read fails with
/// [`Error::Parse`].
pub fn read_comments<R: Read>(mut reader: R) -> Result<Vec<DateComment>> {
  let mut src = String::new();
  reader.read_to_string(&mut src)?;

  let mut comments = Vec::new();
  let mut started = false;
  for (index, record) in records(&src)?.into_iter().enumerate() {
    match record.as_slice() {
      [blank] if blank.is_empty() => continue,
      [date, comment] if !started && [date.as_str(), comment.as_str()] == HEADER => {},
      [date, comment] => comments.push(DateComment::new(date.parse::<Date>()?, comment.as_str())),
      _ => {
        return Err(Error::parse(
          record.join(","),
          format!("record {} has {} fields, expected 2", index + 1, record.len()),
        ));
      },
    }
    started = true;
  }
  Ok(comments)
}

/// Split CSV text into records of unquoted fields.
fn records(src: &str) -> Result<Vec<Vec<String>>> {
  let mut records = Vec::new();
  let mut record = Vec::new();
  let mut field = String::new();
  let mut quoted = false;
  let mut chars = src.chars().peekable();
  while let Some(c) = chars.next() {
    match (quoted, c) {
      (true, '"') if chars.peek() == Some(&'"') => {
        chars.next();
        field.push('"');
      },
      (true, '"') => quoted = false,
      (true, c) => field.push(c),
      (false, '"') if field.is_empty() => quoted = true,
      (false, ',') => record.push(mem::take(&mut field)),
      (false, '\r') => {},
      (false, '\n') => {
        record.push(mem::take(&mut field));
        records.push(mem::take(&mut record));
      },
      (false, c) => field.push(c),
    }
  }
  if quoted {
    return Err(Error::parse(field, "unterminated quoted field"));
  }
  if !field.is_empty() || !record.is_empty() {
    record.push(field);
    records.push(record);
  }
  Ok(records)
}

impl YearCalendar {
  /// Write all comments to the file at `path`, replacing it if it exists.
  pub fn export_to_path(&self, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let count = write_comments(self, BufWriter::new(File::create(path)?))?;
    debug!(year = self.year(), count = count; "Exported comments");
    Ok(count)
  }

  /// Add every comment read from `reader`, replacing comments already on the same dates.
  ///
  /// Nothing is added unless every entry is acceptable: a date outside this calendar's year or an
  /// empty comment fails with [`Error::InvalidArgument`] and leaves the calendar untouched.
  pub fn import<R: Read>(&mut self, reader: R) -> Result<usize> {
    let comments = read_comments(reader)?;
    let mut staged = self.clone();
    for c in &comments {
      staged.add_comment(c.date(), c.comment())?;
    }
    *self = staged;
    debug!(year = self.year(), count = comments.len(); "Imported comments");
    Ok(comments.len())
  }

  /// [`YearCalendar::import`] from the file at `path`.
  pub fn import_from_path(&mut self, path: impl AsRef<Path>) -> Result<usize> {
    self.import(File::open(path)?)
  }
}
