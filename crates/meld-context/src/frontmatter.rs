//! Frontmatter splitting and parsing for SKILL.md files.

use serde_json::{Map, Value};

/// Split a document into its frontmatter block and body.
///
/// The document must begin with a line containing only `---`, followed by
/// the frontmatter lines, a second `---` line, then the body. A single
/// leading blank line after the closing fence is not part of the body.
pub fn split(content: &str) -> Option<(String, String)> {
    let mut segments = content.split_inclusive('\n');

    let first = segments.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let mut frontmatter = String::new();
    let mut body_offset = None;
    let mut offset = first.len();
    for line in segments {
        if line.trim_end() == "---" {
            body_offset = Some(offset + line.len());
            break;
        }
        frontmatter.push_str(line);
        offset += line.len();
    }

    let body = &content[body_offset?..];
    let body = body
        .strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body);

    Some((frontmatter, body.to_string()))
}

/// Parse frontmatter lines into a JSON map.
///
/// Values follow YAML scalars: strings, booleans, arrays, and nested maps
/// (used by the per-agent `model` field). Returns `None` when the block is
/// not parseable as a string-keyed mapping.
pub fn parse(frontmatter: &str) -> Option<Map<String, Value>> {
    if frontmatter.trim().is_empty() {
        return Some(Map::new());
    }
    serde_yaml::from_str::<Map<String, Value>>(frontmatter).ok()
}
