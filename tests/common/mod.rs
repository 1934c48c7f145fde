#![allow(dead_code)]

use std::path::PathBuf;

use rss_gen::Description;
use tempfile::TempDir;

/// Channel with exactly the required fields
pub fn minimal_channel() -> Description {
    Description::new()
        .with("title", "T")
        .with("link", "http://x")
        .with("description", "D")
}

pub fn item(title: &str) -> Description {
    Description::new().with("title", title)
}

pub const SAMPLE_TOML: &str = r#"
[channel]
title = "Example & Co"
link = "http://example.com/"
description = "News from <example>"
language = "en-us"
lastBuildDate = 2008-06-03T11:05:30Z

[[items]]
title = "First post"
link = "http://example.com/1"
pubDate = "Tue, 03 Jun 2008 09:39:21 +0000"
category = [{ domain = "http://example.com/tags" }, "Tech"]

[[items]]
description = "<![CDATA[<p>Second & last</p>]]>"
guid = "http://example.com/2"
"#;

pub const SAMPLE_JSON: &str = r#"{
  "channel": {
    "title": "Example & Co",
    "link": "http://example.com/",
    "description": "News from <example>"
  },
  "items": [
    { "title": "First post", "category": ["a", "b"] },
    [ { "title": "Grouped one" }, { "title": "Grouped two" } ]
  ]
}"#;

/// Writes `content` to `name` inside a fresh temporary directory
pub fn write_temp(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}
