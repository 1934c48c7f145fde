//! Canonical text for field values.

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::description::Scalar;
use crate::escape::escape;

/// RFC 822 style date pattern, e.g. `Tue, 03 Jun 2008 11:05:30 +0000`
pub const DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Fields whose values are date/time instants
pub const DATE_FIELDS: &[&str] = &["pubDate", "lastBuildDate"];

/// Free-text fields that are escaped before they become element content
pub const ESCAPED_FIELDS: &[&str] = &["title", "link", "description", "author"];

pub fn is_date_field(name: &str) -> bool {
    DATE_FIELDS.contains(&name)
}

pub fn is_escaped_field(name: &str) -> bool {
    ESCAPED_FIELDS.contains(&name)
}

/// Renders a date with [`DATE_FORMAT`], keeping the date's own offset.
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format(DATE_FORMAT).to_string()
}

/// Maps a field name and value to the text that becomes element content.
///
/// Dates are rendered with [`DATE_FORMAT`] regardless of the field they sit
/// in; text in [`ESCAPED_FIELDS`] is escaped; anything else keeps its plain
/// string form.
pub fn format_value(field: &str, value: &Scalar) -> String {
    match value {
        Scalar::Date(date) => format_date::<FixedOffset>(date),
        Scalar::Text(text) if is_escaped_field(field) => escape(text).into_owned(),
        other => other.to_string(),
    }
}
