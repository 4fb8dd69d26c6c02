//! Filter schema registry
//!
//! A page declares which query parameters it understands and how each one is
//! typed. The schema drives both directions of the URL mapping: raw strings
//! from the query string are decoded into [`FilterValue`]s and values are
//! encoded back into strings.

use std::collections::BTreeMap;

/// Primitive kind of a filter parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    String,
    Number,
    Boolean,
}

/// Decoded value of a filter parameter
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Number(f64),
    Bool(bool),
}

impl FilterValue {
    pub fn kind(&self) -> FilterKind {
        match self {
            FilterValue::Str(_) => FilterKind::String,
            FilterValue::Number(_) => FilterKind::Number,
            FilterValue::Bool(_) => FilterKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FilterValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FilterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Values that must never reach the URL: empty strings and NaN
    pub fn is_empty(&self) -> bool {
        match self {
            FilterValue::Str(s) => s.is_empty(),
            FilterValue::Number(n) => !n.is_finite(),
            FilterValue::Bool(_) => false,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Str(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

impl FilterKind {
    /// Encode a value for the query string.
    ///
    /// Returns `None` when the value does not belong to this kind.
    pub fn serialize(&self, value: &FilterValue) -> Option<String> {
        match (self, value) {
            (FilterKind::String, FilterValue::Str(s)) => Some(s.clone()),
            // f64 Display prints integral values without a fraction ("2")
            (FilterKind::Number, FilterValue::Number(n)) => Some(n.to_string()),
            (FilterKind::Boolean, FilterValue::Bool(b)) => {
                Some(if *b { "true" } else { "false" }.to_string())
            }
            _ => None,
        }
    }

    /// Decode a raw query string value. Never fails loudly: anything that
    /// does not parse becomes `None`.
    pub fn deserialize(&self, raw: &str) -> Option<FilterValue> {
        match self {
            FilterKind::String => {
                if raw.is_empty() {
                    None
                } else {
                    Some(FilterValue::Str(raw.to_string()))
                }
            }
            FilterKind::Number => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(FilterValue::Number),
            FilterKind::Boolean => match raw {
                "true" => Some(FilterValue::Bool(true)),
                "false" => Some(FilterValue::Bool(false)),
                _ => None,
            },
        }
    }
}

/// How one filter key is typed and what it falls back to when absent
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDescriptor {
    pub kind: FilterKind,
    pub default: Option<FilterValue>,
}

impl FilterDescriptor {
    pub fn new(kind: FilterKind) -> Self {
        Self {
            kind,
            default: None,
        }
    }

    pub fn with_default(kind: FilterKind, default: impl Into<FilterValue>) -> Self {
        Self {
            kind,
            default: Some(default.into()),
        }
    }

    /// `value` carries nothing worth writing to the URL
    pub fn is_redundant(&self, value: &FilterValue) -> bool {
        value.is_empty() || self.default.as_ref() == Some(value)
    }
}

/// Set of typed query parameters supported by one page.
///
/// Keys keep their declaration order. Declaring the same key twice replaces
/// the earlier descriptor; collisions are not reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSchema {
    fields: Vec<(String, FilterDescriptor)>,
}

impl FilterSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, key: &str, descriptor: FilterDescriptor) -> Self {
        if let Some(existing) = self.fields.iter_mut().find(|(k, _)| k == key) {
            existing.1 = descriptor;
        } else {
            self.fields.push((key.to_string(), descriptor));
        }
        self
    }

    pub fn string(self, key: &str) -> Self {
        self.field(key, FilterDescriptor::new(FilterKind::String))
    }

    pub fn number(self, key: &str) -> Self {
        self.field(key, FilterDescriptor::new(FilterKind::Number))
    }

    pub fn boolean(self, key: &str) -> Self {
        self.field(key, FilterDescriptor::new(FilterKind::Boolean))
    }

    pub fn get(&self, key: &str) -> Option<&FilterDescriptor> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, d)| d)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterDescriptor)> {
        self.fields.iter().map(|(k, d)| (k.as_str(), d))
    }
}

/// Decoded filters of a page: one entry per schema key
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    values: BTreeMap<String, Option<FilterValue>>,
}

impl FilterState {
    pub fn insert(&mut self, key: &str, value: Option<FilterValue>) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.values.get(key).and_then(|v| v.as_ref())
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FilterValue::as_str)
    }

    /// String value as an owned `Option`, handy when building request DTOs
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_str(key).map(str::to_string)
    }

    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(FilterValue::as_number)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(FilterValue::as_bool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&FilterValue>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Number of keys holding a value
    pub fn active_count(&self) -> usize {
        self.values.values().filter(|v| v.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_serialization() {
        let kind = FilterKind::Number;
        assert_eq!(kind.serialize(&FilterValue::Number(2.0)).as_deref(), Some("2"));
        assert_eq!(kind.serialize(&FilterValue::Number(2.5)).as_deref(), Some("2.5"));
        assert_eq!(kind.serialize(&FilterValue::Number(-7.0)).as_deref(), Some("-7"));
        assert_eq!(kind.serialize(&FilterValue::Str("2".into())), None);
    }

    #[test]
    fn test_number_deserialization() {
        let kind = FilterKind::Number;
        assert_eq!(kind.deserialize("42"), Some(FilterValue::Number(42.0)));
        assert_eq!(kind.deserialize(" 3.5 "), Some(FilterValue::Number(3.5)));
        assert_eq!(kind.deserialize("abc"), None);
        assert_eq!(kind.deserialize("NaN"), None);
        assert_eq!(kind.deserialize("inf"), None);
        assert_eq!(kind.deserialize(""), None);
    }

    #[test]
    fn test_boolean_is_strict() {
        let kind = FilterKind::Boolean;
        assert_eq!(kind.deserialize("true"), Some(FilterValue::Bool(true)));
        assert_eq!(kind.deserialize("false"), Some(FilterValue::Bool(false)));
        assert_eq!(kind.deserialize("TRUE"), None);
        assert_eq!(kind.deserialize("1"), None);
        assert_eq!(kind.serialize(&FilterValue::Bool(false)).as_deref(), Some("false"));
    }

    #[test]
    fn test_string_empty_is_absent() {
        assert_eq!(FilterKind::String.deserialize(""), None);
        assert_eq!(
            FilterKind::String.deserialize("north"),
            Some(FilterValue::Str("north".into()))
        );
    }

    #[test]
    fn test_redundant_values() {
        let page = FilterDescriptor::with_default(FilterKind::Number, 1.0);
        assert!(page.is_redundant(&FilterValue::Number(1.0)));
        assert!(page.is_redundant(&FilterValue::Number(f64::NAN)));
        assert!(!page.is_redundant(&FilterValue::Number(2.0)));

        let search = FilterDescriptor::new(FilterKind::String);
        assert!(search.is_redundant(&FilterValue::Str(String::new())));
        assert!(!search.is_redundant(&FilterValue::Str("a".into())));
    }

    #[test]
    fn test_schema_redeclaration_replaces() {
        let schema = FilterSchema::new()
            .string("q")
            .number("page")
            .field("q", FilterDescriptor::new(FilterKind::Boolean));
        assert_eq!(schema.keys().collect::<Vec<_>>(), vec!["q", "page"]);
        assert_eq!(schema.get("q").map(|d| d.kind), Some(FilterKind::Boolean));
        assert!(!schema.contains("missing"));
    }
}
