//! Expands a [`Description`] into a flat list of elements.

use crate::description::{Description, FieldValue, Scalar};
use crate::element::{Element, Node};
use crate::format::format_value;

/// Builds one element per field (several for repeated values), in field order.
///
/// Omitted fields produce nothing.
pub fn build(description: &Description) -> Vec<Element> {
    let mut elements = Vec::with_capacity(description.len());
    for (name, value) in description.iter() {
        build_field(name, value, &mut elements);
    }
    elements
}

/// Appends the elements for a single field to `out`.
pub fn build_field(name: &str, value: &FieldValue, out: &mut Vec<Element>) {
    match value {
        FieldValue::Scalar(scalar) => out.push(Element::new(
            name,
            None,
            Some(vec![text_node(name, scalar)]),
        )),
        FieldValue::Attributed(attributes, values) => {
            let content = values.iter().map(|value| text_node(name, value)).collect();
            out.push(Element::new(name, Some(attributes.clone()), Some(content)));
        }
        FieldValue::Repeated(items) => {
            for item in items {
                build_field(name, item, out);
            }
        }
        FieldValue::Omitted => {}
    }
}

fn text_node(name: &str, value: &Scalar) -> Node {
    Node::Text(format_value(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_fields_in_order() {
        let description = Description::new()
            .with("title", "Fish & Chips")
            .with("ttl", 60)
            .with("category", "R&D");

        let elements = build(&description);
        let names: Vec<_> = elements.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["title", "ttl", "category"]);
        assert_eq!(elements[0].text(), "Fish &amp; Chips");
        assert_eq!(elements[1].text(), "60");
        assert_eq!(elements[2].text(), "R&D");
    }

    #[test]
    fn test_attributed_value() {
        let description = Description::new().with(
            "category",
            FieldValue::attributed([("domain", "http://example.com")], ["Tech"]),
        );

        let elements = build(&description);
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].attribute("domain"), Some("http://example.com"));
        assert_eq!(elements[0].content, Some(vec![Node::Text("Tech".to_string())]));
    }

    #[test]
    fn test_attributed_without_values_keeps_tag_pair() {
        let description = Description::new().with(
            "enclosure",
            FieldValue::attributed(
                [
                    ("url", "http://x/a.mp3"),
                    ("length", "1024"),
                    ("type", "audio/mpeg"),
                ],
                Vec::<Scalar>::new(),
            ),
        );

        let elements = build(&description);
        assert!(!elements[0].is_self_closing());
        assert_eq!(elements[0].content, Some(Vec::new()));
        assert_eq!(elements[0].attributes.as_ref().map(Vec::len), Some(3));
    }

    #[test]
    fn test_repeated_values_become_siblings() {
        let description = Description::new()
            .with("title", "T")
            .with("category", FieldValue::repeated(["a", "b", "c"]))
            .with("link", "http://x");

        let elements = build(&description);
        let rendered: Vec<_> = elements
            .iter()
            .map(|e| (e.name.as_str(), e.text()))
            .collect();
        assert_eq!(
            rendered,
            [
                ("title", "T".to_string()),
                ("category", "a".to_string()),
                ("category", "b".to_string()),
                ("category", "c".to_string()),
                ("link", "http://x".to_string()),
            ]
        );
    }

    #[test]
    fn test_repeated_mixed_with_attributed_items() {
        let description = Description::new().with(
            "category",
            FieldValue::Repeated(vec![
                FieldValue::from("plain"),
                FieldValue::attributed([("domain", "d")], ["tagged"]),
                FieldValue::Omitted,
            ]),
        );

        let elements = build(&description);
        assert_eq!(elements.len(), 2);
        assert!(elements[0].attributes.is_none());
        assert_eq!(elements[1].attribute("domain"), Some("d"));
    }

    #[test]
    fn test_omitted_fields_are_skipped() {
        let description = Description::new()
            .with("title", "T")
            .with("ttl", FieldValue::Omitted);
        assert_eq!(build(&description).len(), 1);
    }
}
