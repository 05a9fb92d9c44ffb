//! Query-string parameters with type coercion
//!
//! Player parameters arrive as plain query strings (`autoplay=1&muted`) and
//! leave either as a query string again (iframe providers) or as a JSON
//! object handed to the client-side player.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Number;
use std::borrow::Cow;
use std::fmt;

/// Ordered mapping of parameter name to value
pub type QueryParams = IndexMap<String, ParamValue>;

/// A single parameter value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Plain string
    Str(String),
    /// Boolean flag; `true` serializes as a bare key
    Bool(bool),
    /// Integer or decimal number
    Number(Number),
    /// Explicit null, omitted from query strings
    Null,
    /// Ordered list of numbers, comma-joined in query strings
    Numbers(Vec<Number>),
}

impl ParamValue {
    /// Coerce a decoded query value into the most specific type
    ///
    /// A value is only coerced when its query literal reproduces `raw`
    /// exactly, so `030`, `TRUE` or `1.50` stay strings.
    pub fn coerce(raw: &str) -> Self {
        let candidate = match raw {
            "true" => Some(Self::Bool(true)),
            "false" => Some(Self::Bool(false)),
            _ if raw.contains(',') => parse_numbers(raw).map(Self::Numbers),
            _ => parse_number(raw).map(Self::Number),
        };

        match candidate {
            Some(value) if value.literal().as_deref() == Some(raw) => value,
            _ => Self::Str(raw.to_string()),
        }
    }

    /// Unquoted query text of a non-string value
    ///
    /// Lists shorter than two carry a trailing comma so they read back as
    /// lists: `[]` is `,` and `[1]` is `1,`.
    fn literal(&self) -> Option<String> {
        match self {
            Self::Str(_) | Self::Null => None,
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(n.to_string()),
            Self::Numbers(numbers) => {
                let mut joined = numbers.iter().map(Number::to_string).collect::<Vec<_>>().join(",");
                if numbers.len() < 2 {
                    joined.push(',');
                }
                Some(joined)
            }
        }
    }

    /// Build a number value, keeping integral values as integers
    pub fn from_f64(value: f64) -> Self {
        Self::Number(number_from_f64(value))
    }

    /// Get the value as a string slice if it is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Check if this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Null => Ok(()),
            Self::Numbers(numbers) => {
                let joined: Vec<String> = numbers.iter().map(Number::to_string).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}

/// Convert an `f64` into a JSON number, integral values become integers
pub fn number_from_f64(value: f64) -> Number {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Number::from(value as i64)
    } else {
        Number::from_f64(value).unwrap_or_else(|| Number::from(0))
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    if let Ok(int) = raw.parse::<i64>() {
        return Some(Number::from(int));
    }
    if let Ok(int) = raw.parse::<u64>() {
        return Some(Number::from(int));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

fn parse_numbers(raw: &str) -> Option<Vec<Number>> {
    let body = raw.strip_suffix(',').unwrap_or(raw);
    if body.is_empty() {
        return Some(Vec::new());
    }
    body.split(',').map(parse_number).collect()
}

fn decode(raw: &str) -> String {
    let spaced: Cow<'_, str> = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

fn split_pairs(query: &str) -> impl Iterator<Item = (&str, Option<&str>)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        })
}

/// Parse a query string into [`QueryParams`]
///
/// A bare key maps to `true`. Repeated keys overwrite earlier ones. Values
/// holding a percent escape are never coerced.
pub fn parse(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for (key, value) in split_pairs(query) {
        let key = decode(key);
        if key.is_empty() {
            continue;
        }
        let value = match value {
            Some(raw) if raw.contains('%') => ParamValue::Str(decode(raw)),
            Some(raw) => ParamValue::coerce(&decode(raw)),
            None => ParamValue::Bool(true),
        };
        params.insert(key, value);
    }

    params
}

/// Decoded, uncoerced value of the last `key` in `query`
///
/// A bare key yields an empty string.
pub fn get_raw(query: &str, key: &str) -> Option<String> {
    split_pairs(query)
        .filter(|(name, _)| decode(name) == key)
        .last()
        .map(|(_, value)| value.map(decode).unwrap_or_default())
}

/// Percent-encode a string value
///
/// A string that would read back as another type gets its first byte
/// escaped, which [`parse`] keeps as a string.
fn encode_str(s: &str) -> String {
    if ParamValue::coerce(s) == ParamValue::Str(s.to_string()) {
        return urlencoding::encode(s).into_owned();
    }
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii() => {
            format!("%{:02X}{}", first as u8, urlencoding::encode(chars.as_str()))
        }
        _ => urlencoding::encode(s).into_owned(),
    }
}

/// Serialize [`QueryParams`] into a percent-encoded query string
pub fn serialize(params: &QueryParams) -> String {
    let mut pairs = Vec::with_capacity(params.len());

    for (key, value) in params {
        let key = urlencoding::encode(key);
        match value {
            ParamValue::Null => continue,
            ParamValue::Bool(true) => pairs.push(key.into_owned()),
            ParamValue::Str(s) => pairs.push(format!("{}={}", key, encode_str(s))),
            other => pairs.push(format!("{}={}", key, other.literal().unwrap_or_default())),
        }
    }

    pairs.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_key_is_true() {
        let params = parse("muted&v=abc");
        assert_eq!(params["muted"], ParamValue::Bool(true));
        assert_eq!(params["v"], ParamValue::Str("abc".to_string()));
    }

    #[test]
    fn test_parse_coerces_types() {
        let params = parse("adaptiveRatio=false&volume=0.5&start=30&speeds=0.5,1,2&hl=en");
        assert_eq!(params["adaptiveRatio"], ParamValue::Bool(false));
        assert_eq!(params["volume"], ParamValue::from_f64(0.5));
        assert_eq!(params["start"], ParamValue::Number(Number::from(30)));
        assert_eq!(
            params["speeds"],
            ParamValue::Numbers(vec![number_from_f64(0.5), Number::from(1), Number::from(2)])
        );
        assert_eq!(params["hl"], ParamValue::Str("en".to_string()));
    }

    #[test]
    fn test_parse_does_not_coerce_lookalikes() {
        let params = parse("a=1.&b=.5&c=1e5&d=NaN&e=1,x&f=030&g=TRUE&h=1.50&i=1,2,&j=%31");
        for key in ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"] {
            assert!(matches!(params[key], ParamValue::Str(_)), "{} was coerced", key);
        }
    }

    #[test]
    fn test_parse_percent_decodes() {
        let params = parse("?title=hello%20world&q=a+b&k%26=x");
        assert_eq!(params["title"].as_str(), Some("hello world"));
        assert_eq!(params["q"].as_str(), Some("a b"));
        assert_eq!(params["k&"].as_str(), Some("x"));
    }

    #[test]
    fn test_parse_last_occurrence_wins() {
        let params = parse("list=a&list=b");
        assert_eq!(params.len(), 1);
        assert_eq!(params["list"].as_str(), Some("b"));
    }

    #[test]
    fn test_parse_skips_empty_pairs() {
        assert!(parse("").is_empty());
        assert_eq!(parse("&&a=x&").len(), 1);
    }

    #[test]
    fn test_serialize_rules() {
        let mut params = QueryParams::new();
        params.insert("fs".to_string(), ParamValue::Bool(true));
        params.insert("loop".to_string(), ParamValue::Bool(false));
        params.insert("origin".to_string(), ParamValue::Null);
        params.insert("speeds".to_string(), ParamValue::Numbers(vec![
            number_from_f64(0.25),
            Number::from(1),
        ]));
        params.insert("title".to_string(), ParamValue::from("a&b c"));

        assert_eq!(serialize(&params), "fs&loop=false&speeds=0.25,1&title=a%26b%20c");
    }

    #[test]
    fn test_round_trip() {
        let mut params = QueryParams::new();
        params.insert("color".to_string(), ParamValue::from("red"));
        params.insert("keyboard".to_string(), ParamValue::Bool(true));
        params.insert("muted".to_string(), ParamValue::Bool(false));
        params.insert("volume".to_string(), ParamValue::from_f64(0.8));
        params.insert("speeds".to_string(), ParamValue::Numbers(vec![
            number_from_f64(0.5),
            number_from_f64(1.5),
        ]));
        params.insert("name".to_string(), ParamValue::from("my movie"));

        assert_eq!(parse(&serialize(&params)), params);
    }

    #[test]
    fn test_round_trip_drops_null() {
        let mut params = QueryParams::new();
        params.insert("a".to_string(), ParamValue::from("x"));
        params.insert("b".to_string(), ParamValue::Null);

        let reparsed = parse(&serialize(&params));
        assert_eq!(reparsed.len(), 1);
        assert!(!reparsed.contains_key("b"));
    }

    #[test]
    fn test_round_trip_every_value_kind() {
        let values = [
            ParamValue::from("red"),
            ParamValue::from(""),
            ParamValue::from("0"),
            ParamValue::from("-1.5"),
            ParamValue::from("true"),
            ParamValue::from("false"),
            ParamValue::from("1,2"),
            ParamValue::from(","),
            ParamValue::from("030"),
            ParamValue::from("100%"),
            ParamValue::Bool(true),
            ParamValue::Bool(false),
            ParamValue::Number(Number::from(0)),
            ParamValue::Number(Number::from(-7)),
            ParamValue::Number(Number::from(u64::MAX)),
            ParamValue::from_f64(0.1),
            ParamValue::from_f64(1e21),
            ParamValue::Numbers(vec![]),
            ParamValue::Numbers(vec![Number::from(1)]),
            ParamValue::Numbers(vec![number_from_f64(0.25), Number::from(2)]),
        ];

        for value in values {
            let mut params = QueryParams::new();
            params.insert("key".to_string(), value.clone());
            assert_eq!(parse(&serialize(&params)), params, "{:?}", value);
        }
    }

    #[test]
    fn test_serialize_escapes_coercible_strings() {
        let mut params = QueryParams::new();
        params.insert("autoplay".to_string(), ParamValue::from("0"));
        params.insert("fs".to_string(), ParamValue::Number(Number::from(1)));
        params.insert("speeds".to_string(), ParamValue::Numbers(vec![Number::from(1)]));
        params.insert("none".to_string(), ParamValue::Numbers(vec![]));

        assert_eq!(serialize(&params), "autoplay=%30&fs=1&speeds=1,&none=,");
    }

    #[test]
    fn test_parse_keeps_numeric_text() {
        let params = parse("v=01234567890&start=030");
        assert_eq!(params["v"].as_str(), Some("01234567890"));
        assert_eq!(serialize(&params), "v=01234567890&start=030");
    }

    #[test]
    fn test_get_raw() {
        let query = "?v=01234567890&muted&t=1&t=true&title=a+b";
        assert_eq!(get_raw(query, "v").as_deref(), Some("01234567890"));
        assert_eq!(get_raw(query, "muted").as_deref(), Some(""));
        assert_eq!(get_raw(query, "t").as_deref(), Some("true"));
        assert_eq!(get_raw(query, "title").as_deref(), Some("a b"));
        assert_eq!(get_raw(query, "missing"), None);
    }

    #[test]
    fn test_json_payload() {
        let params = parse("muted=false&speeds=0.25,1&engine=html5&ratio");
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"muted":false,"speeds":[0.25,1],"engine":"html5","ratio":true}"#);
    }

    #[test]
    fn test_number_from_f64_keeps_integers() {
        assert_eq!(number_from_f64(2.0).to_string(), "2");
        assert_eq!(number_from_f64(0.25).to_string(), "0.25");
    }
}
