//! Ordered query string codec
//!
//! Mirrors the browser's `URLSearchParams`: pairs keep their order, `+`
//! decodes to a space and a leading `?` is ignored.

use std::borrow::Cow;

/// Query string as an ordered list of pairs.
///
/// Not `serde_qs`: a filter write must keep every other key, including ones
/// no schema declares, at its original position, and a struct round trip
/// would drop or reorder them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(search: &str) -> Self {
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match segment.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(segment), String::new()),
            })
            .collect();
        Self { pairs }
    }

    /// First value of `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Replace every occurrence of `key` with a single pair kept at the
    /// position of the first one; appends when the key is new.
    pub fn set(&mut self, key: &str, value: String) {
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = 0;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialized form without the leading `?`
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Serialized form suitable for `location.search`: `""` or `"?a=1"`
    pub fn to_search(&self) -> String {
        if self.pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", self.to_query_string())
        }
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(Cow::Borrowed(s)) => s.to_string(),
        Ok(Cow::Owned(s)) => s,
        // Malformed escapes are kept verbatim
        Err(_) => spaced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decodes_pairs() {
        let params = QueryParams::parse("?q=night+shift&branch=H%C3%A0%20N%E1%BB%99i&flag");
        assert_eq!(params.get("q"), Some("night shift"));
        assert_eq!(params.get("branch"), Some("Hà Nội"));
        assert_eq!(params.get("flag"), Some(""));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_set_keeps_position_and_dedupes() {
        let mut params = QueryParams::parse("a=1&b=2&a=3&c=4");
        params.set("a", "9".into());
        assert_eq!(params.to_query_string(), "a=9&b=2&c=4");
        params.set("d", "x y".into());
        assert_eq!(params.to_query_string(), "a=9&b=2&c=4&d=x%20y");
    }

    #[test]
    fn test_remove_and_empty_search() {
        let mut params = QueryParams::parse("?a=1");
        params.remove("a");
        assert!(params.is_empty());
        assert_eq!(params.to_search(), "");
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }
}
