//! Render summary reporting
//!
//! Human-readable description of a rendered document, printed on stderr in
//! verbose mode.

use std::path::PathBuf;

use crate::cli::VerbosityLevel;
use crate::element::Element;

/// What was rendered and where it went
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    pub channel_title: Option<String>,
    pub item_count: usize,
    pub bytes: usize,
    pub validated: bool,
    pub destination: Option<PathBuf>,
}

impl RenderSummary {
    /// Summarizes a document tree and its serialized size
    pub fn from_document(
        document: &Element,
        bytes: usize,
        validated: bool,
        destination: Option<PathBuf>,
    ) -> Self {
        let channel = document.child("channel");
        Self {
            channel_title: channel
                .and_then(|channel| channel.child("title"))
                .map(Element::text),
            item_count: channel
                .map(|channel| channel.children().filter(|e| e.name == "item").count())
                .unwrap_or(0),
            bytes,
            validated,
            destination,
        }
    }
}

/// Simple output formatter for human-readable summaries
pub struct Output {
    verbosity: VerbosityLevel,
    show_colors: bool,
}

impl Output {
    pub fn new(verbosity: VerbosityLevel) -> Self {
        Self {
            verbosity,
            show_colors: atty::is(atty::Stream::Stderr),
        }
    }

    /// Output with colours forced on or off
    pub fn with_colors(verbosity: VerbosityLevel, show_colors: bool) -> Self {
        Self {
            verbosity,
            show_colors,
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.show_colors {
            format!("\x1b[{}m{}\x1b[0m", color, text)
        } else {
            text.to_string()
        }
    }

    /// Empty unless verbose
    pub fn format_summary(&self, summary: &RenderSummary) -> String {
        if self.verbosity < VerbosityLevel::Verbose {
            return String::new();
        }

        let mut output = String::new();
        output.push_str("Render Summary:\n");
        output.push_str(&format!(
            "  Channel: {}\n",
            summary.channel_title.as_deref().unwrap_or("(untitled)")
        ));
        output.push_str(&format!(
            "  Items: {} item{}\n",
            summary.item_count,
            if summary.item_count == 1 { "" } else { "s" }
        ));
        output.push_str(&format!("  Size: {}\n", format_bytes(summary.bytes)));
        output.push_str(&format!(
            "  Validation: {}\n",
            if summary.validated {
                self.colorize("passed", "32")
            } else {
                self.colorize("skipped", "33")
            }
        ));
        output.push_str(&format!(
            "  Output: {}\n",
            summary
                .destination
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "stdout".to_string())
        ));
        output
    }
}

fn format_bytes(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{Description, Entry};
    use crate::document::assemble;

    fn sample_summary() -> RenderSummary {
        let feed = Description::new()
            .with("title", "Example")
            .with("link", "http://x")
            .with("description", "D");
        let entries = vec![
            Entry::from(Description::new().with("title", "1")),
            Entry::from(Description::new().with("title", "2")),
        ];
        let document = assemble(true, &feed, &entries).unwrap();
        RenderSummary::from_document(&document, 2048, true, None)
    }

    #[test]
    fn test_summary_from_document() {
        let summary = sample_summary();
        assert_eq!(summary.channel_title.as_deref(), Some("Example"));
        assert_eq!(summary.item_count, 2);
    }

    #[test]
    fn test_output_summary() {
        let output = Output::with_colors(VerbosityLevel::Verbose, false);
        let formatted = output.format_summary(&sample_summary());
        assert!(formatted.contains("Render Summary:"));
        assert!(formatted.contains("Channel: Example"));
        assert!(formatted.contains("Items: 2 items"));
        assert!(formatted.contains("Size: 2.0 KiB"));
        assert!(formatted.contains("Validation: passed"));
        assert!(formatted.contains("Output: stdout"));
    }

    #[test]
    fn test_summary_hidden_below_verbose() {
        let output = Output::with_colors(VerbosityLevel::Normal, false);
        assert!(output.format_summary(&sample_summary()).is_empty());
    }
}
