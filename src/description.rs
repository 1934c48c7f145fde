//! Caller-supplied field descriptions for channels and items.
//!
//! The shape of every value (scalar, repeated, attributed, omitted) is fixed
//! when the value is constructed, so the tree builder never has to inspect
//! it ad hoc.

use std::fmt;

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::element::Attributes;
use crate::format::format_date;

/// A single leaf value
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Date(DateTime<FixedOffset>),
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Boolean(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Date(date) => f.write_str(&format_date(date)),
            Scalar::Integer(n) => write!(f, "{n}"),
            Scalar::Unsigned(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl From<i32> for Scalar {
    fn from(n: i32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<u32> for Scalar {
    fn from(n: u32) -> Self {
        Scalar::Integer(i64::from(n))
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or(Scalar::Unsigned(n), Scalar::Integer)
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Float(n)
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Boolean(b)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Scalar {
    fn from(date: DateTime<Tz>) -> Self {
        Scalar::Date(date.fixed_offset())
    }
}

/// The value bound to a field name
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// One element with one text child
    Scalar(Scalar),
    /// One sibling element per item, each built as if it stood alone
    Repeated(Vec<FieldValue>),
    /// One element carrying attributes, one text child per value
    Attributed(Attributes, Vec<Scalar>),
    /// Dropped before building
    Omitted,
}

impl FieldValue {
    /// Attributed value from any attribute pairs and content values
    pub fn attributed<K, V, S>(
        attributes: impl IntoIterator<Item = (K, V)>,
        values: impl IntoIterator<Item = S>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        S: Into<Scalar>,
    {
        FieldValue::Attributed(
            attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            values.into_iter().map(Into::into).collect(),
        )
    }

    /// Repeated value from plain scalars
    pub fn repeated<S: Into<Scalar>>(values: impl IntoIterator<Item = S>) -> Self {
        FieldValue::Repeated(
            values
                .into_iter()
                .map(|value| FieldValue::Scalar(value.into()))
                .collect(),
        )
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, FieldValue::Omitted)
    }

    /// The first leaf value, searching repeated values in order
    pub fn first_scalar(&self) -> Option<&Scalar> {
        match self {
            FieldValue::Scalar(scalar) => Some(scalar),
            FieldValue::Repeated(values) => values.iter().find_map(FieldValue::first_scalar),
            FieldValue::Attributed(_, values) => values.first(),
            FieldValue::Omitted => None,
        }
    }
}

macro_rules! scalar_field_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Scalar(value.into())
                }
            }
        )*
    };
}

scalar_field_value!(Scalar, &str, String, i64, i32, u32, u64, f64, bool);

impl<Tz: TimeZone> From<DateTime<Tz>> for FieldValue {
    fn from(date: DateTime<Tz>) -> Self {
        FieldValue::Scalar(date.into())
    }
}

impl<S: Into<Scalar>> From<Option<S>> for FieldValue {
    fn from(value: Option<S>) -> Self {
        value.map_or(FieldValue::Omitted, |v| FieldValue::Scalar(v.into()))
    }
}

/// Ordered mapping from field name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Description {
    fields: Vec<(String, FieldValue)>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field; an existing field keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Removes a field, returning its value
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        let index = self.fields.iter().position(|(key, _)| key == name)?;
        Some(self.fields.remove(index).1)
    }

    /// Chaining form of [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Whether the field is present with a non-omitted value
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_omitted())
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Copy of the description with every omitted field removed
    pub fn without_omitted(&self) -> Self {
        Self {
            fields: self
                .fields
                .iter()
                .filter(|(_, value)| !value.is_omitted())
                .cloned()
                .collect(),
        }
    }

    /// Text of a scalar field, if present
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            FieldValue::Scalar(scalar) => Some(scalar.to_string()),
            _ => None,
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Description
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut description = Description::new();
        for (name, value) in iter {
            description.insert(name, value);
        }
        description
    }
}

/// An item description or a nested group of them
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Item(Description),
    Group(Vec<Entry>),
}

impl Entry {
    /// Depth-first flattening that keeps submission order
    pub fn flatten(entries: &[Entry]) -> Vec<&Description> {
        let mut flat = Vec::new();
        for entry in entries {
            entry.collect_into(&mut flat);
        }
        flat
    }

    fn collect_into<'a>(&'a self, flat: &mut Vec<&'a Description>) {
        match self {
            Entry::Item(description) => flat.push(description),
            Entry::Group(group) => {
                for entry in group {
                    entry.collect_into(flat);
                }
            }
        }
    }
}

impl From<Description> for Entry {
    fn from(description: Description) -> Self {
        Entry::Item(description)
    }
}

impl From<Vec<Description>> for Entry {
    fn from(descriptions: Vec<Description>) -> Self {
        Entry::Group(descriptions.into_iter().map(Entry::Item).collect())
    }
}
