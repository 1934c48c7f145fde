//! Single-line markup serializer.
//!
//! Text nodes were escaped while the tree was built, so nothing is escaped
//! here. Attribute values are emitted verbatim inside single quotes.

use tracing::debug;

use crate::element::{Element, Node};

/// Prologue emitted once before the root element
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='UTF-8'?>";

/// Serializes a document, declaration first.
pub fn serialize(document: &Element) -> String {
    let mut output = String::from(XML_DECLARATION);
    serialize_element(document, &mut output);
    debug!(bytes = output.len(), "document serialized");
    output
}

/// Appends one element and its subtree to `output`, without a declaration.
pub fn serialize_element(element: &Element, output: &mut String) {
    output.push('<');
    output.push_str(&element.name);

    for (name, value) in element.attributes.iter().flatten() {
        output.push(' ');
        output.push_str(name);
        output.push_str("='");
        output.push_str(value);
        output.push('\'');
    }

    match &element.content {
        Some(content) => {
            output.push('>');
            for node in content {
                serialize_node(node, output);
            }
            output.push_str("</");
            output.push_str(&element.name);
            output.push('>');
        }
        None => output.push_str("/>"),
    }
}

fn serialize_node(node: &Node, output: &mut String) {
    match node {
        Node::Text(text) => output.push_str(text),
        Node::Element(element) => serialize_element(element, output),
    }
}
