//! # rss-gen Library
//!
//! Builds RSS 2.0 documents from ordered field descriptions: values are
//! formatted and escaped per field, expanded into an element tree, checked
//! against the RSS 2.0 channel and item field sets, and serialized to a
//! single line of markup.
//!
//! ```
//! use rss_gen::{Description, FieldValue, render_feed};
//!
//! let channel = Description::new()
//!     .with("title", "T")
//!     .with("link", "http://x")
//!     .with("description", "D");
//! let item = Description::new()
//!     .with("title", "E1")
//!     .with("category", FieldValue::attributed([("domain", "http://example.com")], ["Tech"]));
//!
//! let xml = render_feed(&channel, &[item.into()]).unwrap();
//! assert!(xml.contains("<category domain='http://example.com'>Tech</category>"));
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod description;
pub mod document;
pub mod element;
pub mod error;
pub mod error_reporter;
pub mod escape;
pub mod format;
pub mod output;
pub mod schema;
pub mod serialize;
pub mod source;

pub use builder::build;
pub use cli::{Cli, VerbosityLevel};
pub use config::{Config, ConfigError, ConfigManager};
pub use description::{Description, Entry, FieldValue, Scalar};
pub use document::{ATOM_NAMESPACE, FeedBuilder, GENERATOR, assemble};
pub use element::{Attributes, Element, Node};
pub use error::{Result, RssError, Scope};
pub use error_reporter::ErrorReporter;
pub use escape::{cdata, escape};
pub use format::{DATE_FORMAT, format_value};
pub use output::{Output, RenderSummary};
pub use schema::{CHANNEL_FIELDS, ITEM_FIELDS, REQUIRED_CHANNEL_FIELDS, validate_entry, validate_feed};
pub use serialize::{XML_DECLARATION, serialize};
pub use source::FeedSource;

/// Builds the document tree, validating unless the whole input is empty.
pub fn build_feed(feed: &Description, entries: &[Entry]) -> Result<Element> {
    FeedBuilder::from_channel(feed.clone())
        .entries(entries.iter().cloned())
        .build()
}

/// Builds and serializes the document, validating unless the whole input is empty.
pub fn render_feed(feed: &Description, entries: &[Entry]) -> Result<String> {
    Ok(serialize(&build_feed(feed, entries)?))
}
