//! Untyped JSON payloads returned by the NSE quote endpoints
//!
//! The endpoints answer with deeply nested objects whose sections come and
//! go per symbol, so fields are read through safe pointer lookups instead of
//! typed deserialization. Every fallback chain in the merge layer is built
//! from these accessors.

use serde_json::Value;

/// Numeric coercion applied to every numeric field lookup.
///
/// NSE mixes plain numbers, comma-grouped strings (`"1,234.50"`) and the
/// literal `"-"` for absent values. Missing and unparseable values coerce
/// to zero.
pub fn clean_value(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text == "-" {
                0.0
            } else {
                text.replace(',', "").parse().unwrap_or(0.0)
            }
        }
        _ => 0.0,
    }
}

/// A response body from one of the quote endpoints.
///
/// Wraps the raw JSON; a failed or unparseable request is represented by an
/// empty payload rather than an error, since a sparse row can still be
/// built as long as the main payload has content.
#[derive(Debug, Clone)]
pub struct Payload(Value);

impl Payload {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// The payload used when a request failed or returned nothing usable.
    pub fn empty() -> Self {
        Self(Value::Null)
    }

    /// Anything but a non-empty JSON object is empty: no row can be built
    /// from it.
    pub fn is_empty(&self) -> bool {
        !matches!(&self.0, Value::Object(map) if !map.is_empty())
    }

    /// Raw value at `pointer` if it would win a fallback chain.
    ///
    /// Null, zero, empty strings and empty containers lose the chain and
    /// hand over to the next source; the winning raw value still goes
    /// through [`clean_value`] for numeric columns.
    pub fn present_at(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer).filter(|value| has_value(value))
    }

    /// Whether `pointer` holds a non-empty object.
    pub fn has_section(&self, pointer: &str) -> bool {
        matches!(self.present_at(pointer), Some(Value::Object(_)))
    }

    /// Numeric field with NSE coercion rules (missing yields zero).
    pub fn number_at(&self, pointer: &str) -> f64 {
        clean_value(self.0.pointer(pointer))
    }

    /// Text field; missing or non-string yields `None`.
    pub fn text_at(&self, pointer: &str) -> Option<String> {
        self.0
            .pointer(pointer)
            .and_then(|value| value.as_str())
            .map(|text| text.to_string())
    }
}

fn has_value(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(false, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clean_value_missing_is_zero() {
        assert_eq!(clean_value(None), 0.0);
        assert_eq!(clean_value(Some(&Value::Null)), 0.0);
    }

    #[test]
    fn test_clean_value_dash_sentinel_is_zero() {
        assert_eq!(clean_value(Some(&json!("-"))), 0.0);
    }

    #[test]
    fn test_clean_value_strips_commas() {
        assert_eq!(clean_value(Some(&json!("1,234.5"))), 1234.5);
        assert_eq!(clean_value(Some(&json!("3,65,90,51,373"))), 3_659_051_373.0);
    }

    #[test]
    fn test_clean_value_passes_numbers_through() {
        assert_eq!(clean_value(Some(&json!(42))), 42.0);
        assert_eq!(clean_value(Some(&json!(3704.9))), 3704.9);
    }

    #[test]
    fn test_clean_value_unparseable_string_is_zero() {
        assert_eq!(clean_value(Some(&json!("No Band"))), 0.0);
    }

    #[test]
    fn test_present_at_skips_falsy_values() {
        let payload = Payload::new(json!({
            "a": 0,
            "b": "",
            "c": null,
            "d": 7,
            "e": "-"
        }));
        assert!(payload.present_at("/a").is_none());
        assert!(payload.present_at("/b").is_none());
        assert!(payload.present_at("/c").is_none());
        assert!(payload.present_at("/missing").is_none());
        assert_eq!(payload.present_at("/d"), Some(&json!(7)));
        // The dash sentinel is a non-empty string, so it wins the chain
        // and only coerces to zero afterwards.
        assert_eq!(payload.present_at("/e"), Some(&json!("-")));
    }

    #[test]
    fn test_is_empty() {
        assert!(Payload::empty().is_empty());
        assert!(Payload::new(json!({})).is_empty());
        assert!(Payload::new(json!([1, 2])).is_empty());
        assert!(!Payload::new(json!({"info": {}})).is_empty());
    }

    #[test]
    fn test_nested_accessors() {
        let payload = Payload::new(json!({
            "priceInfo": {"lastPrice": 100.5, "vwap": "-"},
            "info": {"symbol": "TCS"}
        }));
        assert_eq!(payload.number_at("/priceInfo/lastPrice"), 100.5);
        assert_eq!(payload.number_at("/priceInfo/vwap"), 0.0);
        assert_eq!(payload.number_at("/priceInfo/open"), 0.0);
        assert_eq!(payload.text_at("/info/symbol"), Some("TCS".to_string()));
        assert_eq!(payload.text_at("/info/companyName"), None);
        assert!(payload.has_section("/priceInfo"));
        assert!(!payload.has_section("/securityWiseDP"));
    }
}
