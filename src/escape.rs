//! Markup escaping for element text.
//!
//! Text wrapped as `<![CDATA[...]]>` is treated as pre-formatted and passed
//! through untouched. Everything else has the four markup-significant
//! characters replaced by their entities.

use std::borrow::Cow;

/// Opening marker of a raw-content section
pub const CDATA_OPEN: &str = "<![CDATA[";

/// Closing marker of a raw-content section
pub const CDATA_CLOSE: &str = "]]>";

/// Returns `true` if `text` is wrapped exactly in CDATA markers.
pub fn is_cdata(text: &str) -> bool {
    text.len() >= CDATA_OPEN.len() + CDATA_CLOSE.len()
        && text.starts_with(CDATA_OPEN)
        && text.ends_with(CDATA_CLOSE)
}

/// Wraps `body` in CDATA markers so that [`escape`] leaves it alone.
pub fn cdata(body: &str) -> String {
    format!("{CDATA_OPEN}{body}{CDATA_CLOSE}")
}

/// Escapes `<`, `>`, `&` and `"` unless the text is a CDATA section.
///
/// Borrows the input when nothing needs replacing.
pub fn escape(text: &str) -> Cow<'_, str> {
    if is_cdata(text) || !text.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}
