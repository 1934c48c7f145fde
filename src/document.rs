//! Assembles channel and item descriptions into a complete RSS document tree.

use tracing::{debug, instrument, warn};

use crate::builder::build;
use crate::description::{Description, Entry, FieldValue};
use crate::element::{Element, Node};
use crate::error::Result;
use crate::schema::{REQUIRED_CHANNEL_FIELDS, validate_entry, validate_feed};

/// Value of the `generator` field injected into every channel
pub const GENERATOR: &str = concat!("rss-gen ", env!("CARGO_PKG_VERSION"));

/// Namespace URI bound to the `atom` prefix on the root element
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

pub const RSS_VERSION: &str = "2.0";

/// Builds the document tree.
///
/// When `validate` is set, the channel and every item are checked before
/// anything is built; the first failure aborts the whole construction.
#[instrument(skip_all, fields(validate = validate, entries = entries.len()))]
pub fn assemble(validate: bool, feed: &Description, entries: &[Entry]) -> Result<Element> {
    let feed = feed.without_omitted();
    let items: Vec<Description> = Entry::flatten(entries)
        .into_iter()
        .map(Description::without_omitted)
        .collect();
    debug!(items = items.len(), "entries flattened");

    if validate {
        validate_feed(&feed, REQUIRED_CHANNEL_FIELDS)?;
        for item in &items {
            validate_entry(item)?;
        }
    } else if !feed.is_empty() || !items.is_empty() {
        warn!("building feed without validation");
    }

    let mut content: Vec<Node> = Vec::new();
    if let Some(href) = feed.get("link").and_then(FieldValue::first_scalar) {
        content.push(self_link(href.to_string()).into());
    }

    let mut channel_fields = feed;
    if channel_fields.remove("generator").is_some() {
        debug!("replacing caller-supplied generator");
    }
    channel_fields.insert("generator", GENERATOR);
    content.extend(build(&channel_fields).into_iter().map(Node::from));
    content.extend(items.iter().map(|item| Node::from(item_element(item))));

    let channel = Element::new("channel", None, Some(content));
    Ok(Element::new(
        "rss",
        Some(vec![
            ("version".to_string(), RSS_VERSION.to_string()),
            ("xmlns:atom".to_string(), ATOM_NAMESPACE.to_string()),
        ]),
        Some(vec![channel.into()]),
    ))
}

fn self_link(href: String) -> Element {
    Element::new(
        "atom:link",
        Some(vec![
            ("href".to_string(), href),
            ("rel".to_string(), "self".to_string()),
            ("type".to_string(), "application/rss+xml".to_string()),
        ]),
        None,
    )
}

fn item_element(item: &Description) -> Element {
    Element::new(
        "item",
        None,
        Some(build(item).into_iter().map(Node::from).collect()),
    )
}

/// Incremental construction of a feed, validating by default.
///
/// Validation is skipped automatically when both the channel and the item
/// list are empty, so an empty builder yields a placeholder document.
#[derive(Debug, Clone)]
pub struct FeedBuilder {
    channel: Description,
    entries: Vec<Entry>,
    validate: bool,
}

impl Default for FeedBuilder {
    fn default() -> Self {
        Self {
            channel: Description::new(),
            entries: Vec::new(),
            validate: true,
        }
    }
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing channel description
    pub fn from_channel(channel: Description) -> Self {
        Self {
            channel,
            ..Self::default()
        }
    }

    pub fn channel_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.channel.insert(name, value);
        self
    }

    pub fn entry(mut self, entry: impl Into<Entry>) -> Self {
        self.entries.push(entry.into());
        self
    }

    pub fn entries<E: Into<Entry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
        self.entries.extend(entries.into_iter().map(Into::into));
        self
    }

    pub fn validate(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }

    fn is_blank(&self) -> bool {
        self.channel.without_omitted().is_empty() && Entry::flatten(&self.entries).is_empty()
    }

    /// Whether [`build`](Self::build) will actually run validation
    pub fn will_validate(&self) -> bool {
        self.validate && !self.is_blank()
    }

    pub fn build(&self) -> Result<Element> {
        let validate = self.will_validate();
        if self.validate && !validate {
            debug!("empty feed, skipping validation");
        }
        assemble(validate, &self.channel, &self.entries)
    }

    /// Builds and serializes the document
    pub fn render(&self) -> Result<String> {
        Ok(crate::serialize::serialize(&self.build()?))
    }
}
