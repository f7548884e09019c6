//! # Lenient JSON Parsing
//!
//! Content files are edited by hand and exported from various tools, so
//! they sometimes carry debris a strict parser rejects.
//!
//! ## Two-Pass Parse
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  raw text ──► serde_json::from_str ──► Ok ──────────────────► value     │
//! │                      │                                                  │
//! │                      ▼ Err (warn)                                       │
//! │               clean_json_text()                                         │
//! │               ├── strip leading BOM (U+FEFF)                            │
//! │               ├── U+2000..=U+200F → ' ' (exotic spaces, zero-width)     │
//! │               └── cut everything after the last '}' or ']'              │
//! │                      │                                                  │
//! │                      ▼                                                  │
//! │               serde_json::from_str ──► Ok ──────────────────► value     │
//! │                      │                                                  │
//! │                      ▼ Err                                              │
//! │               ContentError::Parse                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{ContentError, ContentResult};

/// Number of characters of raw/cleaned text included in debug logs.
const LOG_PREVIEW_CHARS: usize = 100;

/// Removes the debris that commonly breaks hand-edited JSON.
///
/// ## Example
/// ```rust
/// use storefront_content::json::clean_json_text;
///
/// let raw = "\u{FEFF}{\"title\":\u{2003}\"Tea\"}\n<!-- trailing -->";
/// assert_eq!(clean_json_text(raw), "{\"title\": \"Tea\"}");
/// ```
pub fn clean_json_text(raw: &str) -> String {
    let text = raw.strip_prefix('\u{FEFF}').unwrap_or(raw);

    let mut cleaned: String = text
        .chars()
        .map(|c| if ('\u{2000}'..='\u{200F}').contains(&c) { ' ' } else { c })
        .collect();

    // Both delimiters are single-byte, so idx + 1 is a char boundary
    if let Some(idx) = cleaned.rfind(['}', ']']) {
        cleaned.truncate(idx + 1);
    }

    cleaned
}

/// Parses `text` as `T`, retrying once on cleaned text.
///
/// `path` is only used for logs and errors.
pub fn parse_lenient<T: DeserializeOwned>(path: &Path, text: &str) -> ContentResult<T> {
    match serde_json::from_str(text) {
        Ok(value) => Ok(value),
        Err(first) => {
            warn!(path = %path.display(), error = %first, "JSON parse failed, retrying after cleanup");
            debug!(path = %path.display(), raw = %preview(text), "Raw content");

            let cleaned = clean_json_text(text);
            debug!(path = %path.display(), cleaned = %preview(&cleaned), "Cleaned content");

            serde_json::from_str(&cleaned).map_err(|e| ContentError::parse(path, e.to_string()))
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parse(text: &str) -> ContentResult<Value> {
        parse_lenient(Path::new("test.json"), text)
    }

    #[test]
    fn test_clean_strips_bom() {
        assert_eq!(clean_json_text("\u{FEFF}[1,2]"), "[1,2]");
    }

    #[test]
    fn test_clean_replaces_exotic_spaces() {
        let raw = "{\"a\":\u{2000}1,\u{200B}\"b\":\u{200F}2}";
        assert_eq!(clean_json_text(raw), "{\"a\": 1, \"b\": 2}");
    }

    #[test]
    fn test_clean_truncates_after_last_closing_delimiter() {
        assert_eq!(clean_json_text("{\"a\":[1]} garbage"), "{\"a\":[1]}");
        assert_eq!(clean_json_text("[{\"a\":1}]\u{0}\u{0}"), "[{\"a\":1}]");
    }

    #[test]
    fn test_clean_without_delimiters_keeps_text() {
        assert_eq!(clean_json_text("42"), "42");
    }

    #[test]
    fn test_clean_keeps_non_latin_text() {
        let raw = "{\"title\":\"ชาสมุนไพร\"}";
        assert_eq!(clean_json_text(raw), raw);
    }

    #[test]
    fn test_parse_valid_json_directly() {
        assert_eq!(parse("{\"a\":1}").unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_parse_recovers_after_cleanup() {
        let raw = "\u{FEFF}{\"meta\":{\"title\":\u{2002}\"Shop\"}}\r\n%%EOF";
        assert_eq!(parse(raw).unwrap(), json!({"meta": {"title": "Shop"}}));
    }

    #[test]
    fn test_parse_fails_when_cleanup_does_not_help() {
        let err = parse("{\"a\": }").unwrap_err();
        assert!(matches!(err, ContentError::Parse { .. }));
        assert_eq!(err.path(), Path::new("test.json"));
    }
}
