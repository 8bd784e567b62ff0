//! Conversion between form text and event date-times.
//!
//! Dates are written `dd-MM-yyyy` and times `HH:mm` (24-hour). The shape of
//! the text is checked strictly before chrono validates the calendar values,
//! so inputs like `1-3-2024` or `9:5` are rejected rather than guessed at.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AgendaError, AgendaResult};

/// chrono pattern for the date half of an event.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// chrono pattern for the time half of an event.
pub const TIME_FORMAT: &str = "%H:%M";

/// Parse a date (`dd-MM-yyyy`) and a time (`HH:mm`) into one point in time.
pub fn parse(date: &str, time: &str) -> AgendaResult<NaiveDateTime> {
    Ok(NaiveDateTime::new(parse_date(date)?, parse_time(time)?))
}

pub fn format_date(date_time: &NaiveDateTime) -> String {
    date_time.format(DATE_FORMAT).to_string()
}

pub fn format_time(date_time: &NaiveDateTime) -> String {
    date_time.format(TIME_FORMAT).to_string()
}

fn parse_date(s: &str) -> AgendaResult<NaiveDate> {
    if !matches_shape(s, "dd-dd-dddd") {
        return Err(AgendaError::Parse(format!(
            "'{}' is not a date, expected dd-MM-yyyy",
            s
        )));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| AgendaError::Parse(format!("'{}' is not a valid calendar date", s)))
}

fn parse_time(s: &str) -> AgendaResult<NaiveTime> {
    if !matches_shape(s, "dd:dd") {
        return Err(AgendaError::Parse(format!(
            "'{}' is not a time, expected HH:mm",
            s
        )));
    }
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .map_err(|_| AgendaError::Parse(format!("'{}' is not a valid time of day", s)))
}

/// Check `s` against a template where `d` stands for any ASCII digit and
/// every other character must match literally.
fn matches_shape(s: &str, template: &str) -> bool {
    s.len() == template.len()
        && s.bytes().zip(template.bytes()).all(|(c, t)| match t {
            b'd' => c.is_ascii_digit(),
            _ => c == t,
        })
}
