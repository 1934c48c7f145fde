//! Validation behaviour of the public entry points.

mod common;

use std::collections::BTreeSet;

use common::{item, minimal_channel};
use rss_gen::{
    CHANNEL_FIELDS, Description, Entry, FieldValue, ITEM_FIELDS, REQUIRED_CHANNEL_FIELDS,
    RssError, Scope, build_feed, validate_entry, validate_feed,
};

#[test]
fn test_missing_required_channel_field_is_named() {
    for missing in REQUIRED_CHANNEL_FIELDS {
        let channel: Description = minimal_channel()
            .iter()
            .filter(|(name, _)| name != missing)
            .map(|(name, value)| (name, value.clone()))
            .collect();

        match build_feed(&channel, &[]) {
            Err(RssError::MissingRequiredField { field }) => assert_eq!(field, *missing),
            other => panic!("Expected MissingRequiredField for {missing}, got {other:?}"),
        }
    }
}

#[test]
fn test_omitted_required_field_counts_as_missing() {
    let channel = minimal_channel().with("link", FieldValue::Omitted);
    assert!(matches!(
        build_feed(&channel, &[]),
        Err(RssError::MissingRequiredField { field }) if field == "link"
    ));
}

#[test]
fn test_every_unrecognized_channel_field_is_reported() {
    let channel = minimal_channel()
        .with("zeta", 1)
        .with("author", "me")
        .with("alpha", 2);

    match build_feed(&channel, &[]) {
        Err(RssError::UnrecognizedField { scope, fields }) => {
            assert_eq!(scope, Scope::Channel);
            let reported: BTreeSet<_> = fields.into_iter().collect();
            let expected: BTreeSet<_> = ["zeta", "author", "alpha"]
                .into_iter()
                .map(String::from)
                .collect();
            assert_eq!(reported, expected);
        }
        other => panic!("Expected UnrecognizedField, got {other:?}"),
    }
}

#[test]
fn test_all_schema_fields_are_accepted() {
    let channel: Description = CHANNEL_FIELDS.iter().map(|name| (*name, "x")).collect();
    assert!(validate_feed(&channel, REQUIRED_CHANNEL_FIELDS).is_ok());

    let entry: Description = ITEM_FIELDS.iter().map(|name| (*name, "x")).collect();
    assert!(validate_entry(&entry).is_ok());
}

#[test]
fn test_entry_without_title_or_description() {
    let entry = Description::new()
        .with("link", "http://x/1")
        .with("title", FieldValue::Omitted);

    assert!(matches!(
        build_feed(&minimal_channel(), &[entry.into()]),
        Err(RssError::MissingRequiredContent)
    ));
}

#[test]
fn test_content_check_precedes_field_check() {
    let entry = Description::new().with("bogus", "x");
    assert!(matches!(
        validate_entry(&entry),
        Err(RssError::MissingRequiredContent)
    ));
}

#[test]
fn test_every_unrecognized_item_field_is_reported() {
    let entry = item("E").with("ttl", 5).with("docs", "d").with("image", "i");

    match build_feed(&minimal_channel(), &[entry.into()]) {
        Err(RssError::UnrecognizedField { scope, fields }) => {
            assert_eq!(scope, Scope::Item);
            assert_eq!(fields.len(), 3);
            for name in ["ttl", "docs", "image"] {
                assert!(fields.iter().any(|f| f == name), "{name} not reported");
            }
        }
        other => panic!("Expected UnrecognizedField, got {other:?}"),
    }
}

#[test]
fn test_invalid_item_deep_in_a_group_aborts() {
    let entries = vec![
        Entry::from(item("ok")),
        Entry::Group(vec![Entry::from(Description::new().with("guid", "g"))]),
    ];
    assert!(matches!(
        build_feed(&minimal_channel(), &entries),
        Err(RssError::MissingRequiredContent)
    ));
}

#[test]
fn test_items_are_validated_even_with_empty_channel() {
    let result = build_feed(&Description::new(), &[item("E").into()]);
    assert!(matches!(
        result,
        Err(RssError::MissingRequiredField { field }) if field == "title"
    ));
}
