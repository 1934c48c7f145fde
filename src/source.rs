//! Loading feed descriptions from TOML or JSON documents.
//!
//! A source document has a `channel` table and an optional `items` array.
//! Each value's shape is decided here, once:
//!
//! - strings, numbers and booleans become scalars
//! - `null` omits the field
//! - an array whose first element is a table is an attributed value
//! - any other array is a repeated value
//! - a bare table is an attributed value with no text values
//!
//! Strings and TOML datetimes under date fields are parsed into dates.

use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use crate::description::{Description, Entry, FieldValue, Scalar};
use crate::document::FeedBuilder;
use crate::element::Attributes;
use crate::error::{Result, RssError};
use crate::format::is_date_field;

/// A channel description plus its entries, as read from a document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedSource {
    pub channel: Description,
    pub entries: Vec<Entry>,
}

impl FeedSource {
    /// Loads a source file (TOML or JSON)
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            Some(ext) => Err(RssError::UnsupportedFormat(ext.to_string())),
            None => {
                // Try to parse as TOML first, then JSON
                if let Ok(source) = Self::from_toml_str(&content) {
                    Ok(source)
                } else {
                    Self::from_json_str(&content)
                }
            }
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_value(toml_to_json(toml::Value::Table(table)))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(content)?)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut root) = value else {
            return Err(RssError::InvalidDescription(
                "expected a table at the top level".to_string(),
            ));
        };

        let channel = match root.remove("channel") {
            None | Some(Value::Null) => Description::new(),
            Some(Value::Object(fields)) => description(fields)?,
            Some(_) => {
                return Err(RssError::InvalidDescription(
                    "`channel` must be a table".to_string(),
                ));
            }
        };

        let entries = match root.remove("items") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.into_iter().map(entry).collect::<Result<_>>()?,
            Some(_) => {
                return Err(RssError::InvalidDescription(
                    "`items` must be an array".to_string(),
                ));
            }
        };

        if let Some(key) = root.keys().next() {
            return Err(RssError::InvalidDescription(format!(
                "unexpected top-level key `{key}`"
            )));
        }

        debug!(
            channel_fields = channel.len(),
            entries = entries.len(),
            "feed source loaded"
        );
        Ok(Self { channel, entries })
    }

    pub fn into_parts(self) -> (Description, Vec<Entry>) {
        (self.channel, self.entries)
    }

    /// A validating [`FeedBuilder`] over this source
    pub fn into_builder(self) -> FeedBuilder {
        FeedBuilder::from_channel(self.channel).entries(self.entries)
    }
}

fn entry(value: Value) -> Result<Entry> {
    match value {
        Value::Object(fields) => Ok(Entry::Item(description(fields)?)),
        Value::Array(group) => Ok(Entry::Group(
            group.into_iter().map(entry).collect::<Result<_>>()?,
        )),
        other => Err(RssError::InvalidDescription(format!(
            "item must be a table or an array of tables, found {other}"
        ))),
    }
}

fn description(fields: Map<String, Value>) -> Result<Description> {
    let mut description = Description::new();
    for (name, value) in fields {
        let value = field_value(&name, value)?;
        description.insert(name, value);
    }
    Ok(description)
}

fn field_value(name: &str, value: Value) -> Result<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::Omitted),
        Value::Object(table) => Ok(FieldValue::Attributed(attributes(name, table)?, Vec::new())),
        Value::Array(items) if matches!(items.first(), Some(Value::Object(_))) => {
            let mut items = items.into_iter();
            let attributes = match items.next() {
                Some(Value::Object(table)) => attributes(name, table)?,
                _ => Attributes::new(),
            };
            let values = items
                .map(|item| scalar(name, item))
                .collect::<Result<_>>()?;
            Ok(FieldValue::Attributed(attributes, values))
        }
        Value::Array(items) => Ok(FieldValue::Repeated(
            items
                .into_iter()
                .map(|item| field_value(name, item))
                .collect::<Result<_>>()?,
        )),
        scalar_value => Ok(FieldValue::Scalar(scalar(name, scalar_value)?)),
    }
}

fn scalar(name: &str, value: Value) -> Result<Scalar> {
    match value {
        Value::String(text) if is_date_field(name) => parse_date(name, &text).map(Scalar::Date),
        Value::String(text) => Ok(Scalar::Text(text)),
        Value::Bool(b) => Ok(Scalar::Boolean(b)),
        Value::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Ok(Scalar::Integer(i)),
            (None, Some(u)) => Ok(Scalar::Unsigned(u)),
            (None, None) => Ok(Scalar::Float(n.as_f64().unwrap_or(f64::NAN))),
        },
        other => Err(RssError::InvalidDescription(format!(
            "`{name}` content must be a string, number or boolean, found {other}"
        ))),
    }
}

fn attributes(name: &str, table: Map<String, Value>) -> Result<Attributes> {
    table
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            Value::Number(n) => Ok((key, n.to_string())),
            Value::Bool(b) => Ok((key, b.to_string())),
            other => Err(RssError::InvalidDescription(format!(
                "attribute `{key}` of `{name}` must be a scalar, found {other}"
            ))),
        })
        .collect()
}

/// Accepts RFC 3339, RFC 2822, and offset-less datetimes or dates (taken as UTC).
pub fn parse_date(field: &str, text: &str) -> Result<DateTime<FixedOffset>> {
    let text = text.trim();
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_rfc2822(text))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .or_else(|| {
                    NaiveDate::parse_from_str(text, "%Y-%m-%d")
                        .ok()
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
                .map(|naive| naive.and_utc().fixed_offset())
        })
        .ok_or_else(|| RssError::InvalidDate {
            field: field.to_string(),
            value: text.to_string(),
        })
}

fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => Value::from(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, value)| (key, toml_to_json(value)))
                .collect(),
        ),
    }
}
