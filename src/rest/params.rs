//! Ordered request parameters.
//!
//! The same [`Params`] value feeds both the signed query string and the JSON
//! body, so every value has exactly one text form. Numbers keep the digits they
//! were built from; with `serde_json`'s `arbitrary_precision` they reach the
//! body unchanged.

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Sent as a JSON string.
    Str(String),
    /// Sent as a JSON number.
    Number(serde_json::Number),
    /// Comma-joined in the query string, a JSON array in the body.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Build a number from its decimal text.
    fn number(text: String) -> Self {
        match text.parse::<serde_json::Number>() {
            Ok(number) => Self::Number(number),
            Err(_) => Self::Str(text),
        }
    }

    /// Text used in the query string.
    pub fn to_query_value(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::List(items) => items
                .iter()
                .map(ParamValue::to_query_value)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Str(s) => serializer.serialize_str(s),
            Self::Number(n) => n.serialize(serializer),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_query_value())
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        Self::number(value.to_string())
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    Self::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u32, u64, i32, i64);

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

/// Insertion-ordered mapping from parameter name to value.
///
/// Order is significant: it is the order of the signed query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Append a parameter, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a parameter only when a value is present.
    ///
    /// `None` leaves the name out entirely; `Some("")` is sent as an empty value.
    pub fn with_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Look up the first value for a name.
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Form-urlencoded `key=value` pairs joined by `&`, in insertion order.
    ///
    /// This is both the signing base string and, for GET and DELETE, the
    /// transmitted query string.
    pub fn to_query_string(&self) -> String {
        let pairs: Vec<(&str, String)> = self
            .entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.to_query_value()))
            .collect();
        // A list of string pairs always serializes.
        serde_urlencoded::to_string(&pairs).unwrap_or_default()
    }
}

impl Serialize for Params {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.push(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_query_string_preserves_insertion_order() {
        let params = Params::new().with("symbol", "BTCUSDT").with("side", "buy");
        assert_eq!(params.to_query_string(), "symbol=BTCUSDT&side=buy");

        let reversed = Params::new().with("side", "buy").with("symbol", "BTCUSDT");
        assert_eq!(reversed.to_query_string(), "side=buy&symbol=BTCUSDT");
        assert_ne!(params.to_query_string(), reversed.to_query_string());
    }

    #[test]
    fn test_query_string_encoding() {
        let params = Params::new()
            .with("memo", "hello world")
            .with("note", "a&b=c")
            .with("keep", "A-z_0.9*");
        assert_eq!(
            params.to_query_string(),
            "memo=hello+world&note=a%26b%3Dc&keep=A-z_0.9*"
        );
    }

    #[test]
    fn test_empty_params_give_empty_query() {
        assert_eq!(Params::new().to_query_string(), "");
    }

    #[test]
    fn test_with_opt_skips_none_but_keeps_empty() {
        let params = Params::new()
            .with_opt("symbol", None::<&str>)
            .with_opt("memo", Some(""));
        assert!(params.get("symbol").is_none());
        assert_eq!(params.get("memo"), Some(&ParamValue::Str(String::new())));
        assert_eq!(params.to_query_string(), "memo=");
    }

    #[test]
    fn test_decimal_text_matches_in_query_and_json() {
        let params = Params::new()
            .with("price", Decimal::from_str("50000").unwrap())
            .with("volume", Decimal::from_str("0.01").unwrap());
        assert_eq!(params.to_query_string(), "price=50000&volume=0.01");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"price":50000,"volume":0.01}"#
        );
    }

    #[test]
    fn test_decimal_keeps_trailing_zeros() {
        let params = Params::new().with("amount", Decimal::from_str("1.500").unwrap());
        assert_eq!(params.to_query_string(), "amount=1.500");
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"amount":1.500}"#);
    }

    #[test]
    fn test_list_values() {
        let params = Params::new().with("coinsList", vec!["BTC", "ETH"]);
        assert_eq!(params.to_query_string(), "coinsList=BTC%2CETH");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"coinsList":["BTC","ETH"]}"#
        );
    }

    #[test]
    fn test_json_preserves_insertion_order() {
        let params: Params = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(serde_json::to_string(&params).unwrap(), r#"{"b":"2","a":"1"}"#);
    }

    #[test]
    fn test_integer_values() {
        let params = Params::new().with("page", 2u32).with("from", 1_700_000_000i64);
        assert_eq!(params.to_query_string(), "page=2&from=1700000000");
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"page":2,"from":1700000000}"#
        );
    }
}
