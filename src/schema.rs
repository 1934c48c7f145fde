//! RSS 2.0 field sets and description validation.

use tracing::debug;

use crate::description::Description;
use crate::error::{Result, RssError, Scope};

/// Fields a channel must carry
pub const REQUIRED_CHANNEL_FIELDS: &[&str] = &["title", "link", "description"];

/// Every field allowed at channel level
pub const CHANNEL_FIELDS: &[&str] = &[
    "title",
    "link",
    "description",
    "category",
    "cloud",
    "copyright",
    "docs",
    "image",
    "language",
    "lastBuildDate",
    "managingEditor",
    "pubDate",
    "rating",
    "skipDays",
    "skipHours",
    "ttl",
    "webMaster",
];

/// Every field allowed at item level
pub const ITEM_FIELDS: &[&str] = &[
    "title",
    "link",
    "description",
    "author",
    "category",
    "comments",
    "enclosure",
    "guid",
    "pubDate",
    "source",
];

/// At least one of these must be present on an item
pub const ITEM_CONTENT_FIELDS: &[&str] = &["title", "description"];

impl Scope {
    /// Field names allowed in this scope
    pub fn allowed_fields(self) -> &'static [&'static str] {
        match self {
            Scope::Channel => CHANNEL_FIELDS,
            Scope::Item => ITEM_FIELDS,
        }
    }
}

/// Checks required channel fields, then the channel field set.
pub fn validate_feed(description: &Description, required: &[&str]) -> Result<()> {
    if let Some(missing) = required.iter().find(|name| !description.contains(name)) {
        return Err(RssError::MissingRequiredField {
            field: missing.to_string(),
        });
    }
    check_recognized(description, Scope::Channel)
}

/// Checks that an item has a title or description, then the item field set.
pub fn validate_entry(description: &Description) -> Result<()> {
    if !ITEM_CONTENT_FIELDS
        .iter()
        .any(|name| description.contains(name))
    {
        return Err(RssError::MissingRequiredContent);
    }
    check_recognized(description, Scope::Item)
}

fn check_recognized(description: &Description, scope: Scope) -> Result<()> {
    let allowed = scope.allowed_fields();
    let mut unrecognized: Vec<String> = description
        .field_names()
        .filter(|name| !allowed.contains(name))
        .map(str::to_string)
        .collect();

    if unrecognized.is_empty() {
        debug!(%scope, fields = description.len(), "description validated");
        return Ok(());
    }

    unrecognized.sort();
    unrecognized.dedup();
    Err(RssError::UnrecognizedField {
        scope,
        fields: unrecognized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> Description {
        Description::new()
            .with("title", "T")
            .with("link", "http://x")
            .with("description", "D")
    }

    #[test]
    fn test_valid_channel() {
        assert!(validate_feed(&channel(), REQUIRED_CHANNEL_FIELDS).is_ok());
    }

    #[test]
    fn test_each_missing_required_field_is_named() {
        for field in REQUIRED_CHANNEL_FIELDS {
            let description: Description = channel()
                .iter()
                .filter(|(name, _)| name != field)
                .map(|(name, value)| (name, value.clone()))
                .collect();

            match validate_feed(&description, REQUIRED_CHANNEL_FIELDS) {
                Err(RssError::MissingRequiredField { field: missing }) => {
                    assert_eq!(missing, *field)
                }
                other => panic!("Expected MissingRequiredField, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unrecognized_channel_fields_are_all_reported() {
        let description = channel()
            .with("author", "me")
            .with("ttl", 5)
            .with("colour", "red");

        match validate_feed(&description, REQUIRED_CHANNEL_FIELDS) {
            Err(RssError::UnrecognizedField { scope, fields }) => {
                assert_eq!(scope, Scope::Channel);
                assert_eq!(fields, ["author", "colour"]);
            }
            other => panic!("Expected UnrecognizedField, got {other:?}"),
        }
    }

    #[test]
    fn test_required_fields_are_checked_first() {
        let description = Description::new().with("bogus", "x");
        assert!(matches!(
            validate_feed(&description, REQUIRED_CHANNEL_FIELDS),
            Err(RssError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn test_entry_needs_title_or_description() {
        let description = Description::new().with("link", "http://x/1");
        assert!(matches!(
            validate_entry(&description),
            Err(RssError::MissingRequiredContent)
        ));

        assert!(validate_entry(&Description::new().with("title", "E")).is_ok());
        assert!(validate_entry(&Description::new().with("description", "E")).is_ok());
    }

    #[test]
    fn test_unrecognized_entry_fields() {
        let description = Description::new()
            .with("title", "E")
            .with("ttl", 5)
            .with("language", "en");

        match validate_entry(&description) {
            Err(RssError::UnrecognizedField { scope, fields }) => {
                assert_eq!(scope, Scope::Item);
                assert_eq!(fields, ["language", "ttl"]);
            }
            other => panic!("Expected UnrecognizedField, got {other:?}"),
        }
    }

    #[test]
    fn test_author_is_item_only() {
        assert!(Scope::Item.allowed_fields().contains(&"author"));
        assert!(!Scope::Channel.allowed_fields().contains(&"author"));
    }
}
