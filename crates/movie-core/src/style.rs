//! CSS-like style strings
//!
//! Converts `width: 320px; height: 240px` into an ordered map of lower-case
//! property names and back.

use crate::error::{Error, Result};
use indexmap::IndexMap;

/// Ordered mapping of CSS property name to value
pub type StyleMap = IndexMap<String, String>;

/// Parse a style string into a [`StyleMap`]
///
/// Segments are separated by `;` and split on their first `:`. Empty
/// segments are ignored. A later duplicate overwrites the earlier value but
/// keeps its position.
pub fn parse(text: &str) -> Result<StyleMap> {
    let mut style = StyleMap::new();

    for segment in text.split(';') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        let (key, value) = segment
            .split_once(':')
            .ok_or_else(|| Error::MalformedStyle(format!("missing ':' in {:?}", segment)))?;

        let key = key.trim().to_ascii_lowercase();
        if key.is_empty() {
            return Err(Error::MalformedStyle(format!("empty property name in {:?}", segment)));
        }

        style.insert(key, value.trim().to_string());
    }

    Ok(style)
}

/// Serialize a [`StyleMap`] as `key:value;` pairs in map order
pub fn serialize(style: &StyleMap) -> String {
    style.iter().map(|(key, value)| format!("{}:{};", key, value)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  ;  ; ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_trims_and_lowercases() {
        let style = parse(" Width : 320px ;height:240px").unwrap();
        assert_eq!(style.get("width").map(String::as_str), Some("320px"));
        assert_eq!(style.get("height").map(String::as_str), Some("240px"));
        assert_eq!(style.len(), 2);
    }

    #[test]
    fn test_parse_splits_on_first_colon() {
        let style = parse("background-image:url(http://example.com/a.png)").unwrap();
        assert_eq!(style["background-image"], "url(http://example.com/a.png)");
    }

    #[test]
    fn test_parse_duplicate_keeps_position() {
        let style = parse("width:1px;height:2px;width:3px").unwrap();
        let keys: Vec<_> = style.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["width", "height"]);
        assert_eq!(style["width"], "3px");
    }

    #[test]
    fn test_parse_rejects_segment_without_colon() {
        let err = parse("width:320px; bogus").unwrap_err();
        assert!(matches!(err, Error::MalformedStyle(_)));
        assert!(err.to_string().contains("bogus"));
    }

    #[test]
    fn test_parse_rejects_empty_property() {
        assert!(matches!(parse(":red").unwrap_err(), Error::MalformedStyle(_)));
    }

    #[test]
    fn test_serialize_in_order() {
        let mut style = StyleMap::new();
        style.insert("margin".to_string(), "0 auto".to_string());
        style.insert("display".to_string(), "block".to_string());
        assert_eq!(serialize(&style), "margin:0 auto;display:block;");
    }

    #[test]
    fn test_round_trip() {
        let mut style = StyleMap::new();
        style.insert("width".to_string(), "640px".to_string());
        style.insert("border".to_string(), "1px solid #ccc".to_string());
        style.insert("background-image".to_string(), "url(/chrome/splash.png)".to_string());

        assert_eq!(parse(&serialize(&style)).unwrap(), style);
    }
}
