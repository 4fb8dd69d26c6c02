//! URL state store
//!
//! Translates between the current query string and a typed [`FilterState`].
//! Nothing is cached here: every read goes back to the location, so the URL
//! stays the only source of truth and updater functions always see the value
//! written by the previous call.

use super::location::{LocationService, NavigateOptions};
use super::query_string::QueryParams;
use super::schema::{FilterSchema, FilterState, FilterValue};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UrlStateError {
    #[error("filter '{0}' is not declared in the page schema")]
    UnknownKey(String),
    #[error("filter '{key}' expects a {expected:?} value")]
    KindMismatch {
        key: String,
        expected: super::schema::FilterKind,
    },
}

/// Decode `search` against `schema`.
///
/// Present keys are deserialized (failures become `None`); absent or empty
/// keys fall back to the descriptor default.
pub fn read_filters(schema: &FilterSchema, search: &str) -> FilterState {
    let params = QueryParams::parse(search);
    let mut state = FilterState::default();
    for (key, descriptor) in schema.iter() {
        let value = match params.get(key) {
            Some(raw) if !raw.is_empty() => descriptor.kind.deserialize(raw),
            _ => descriptor.default.clone(),
        };
        state.insert(key, value);
    }
    state
}

#[derive(Clone)]
pub struct UrlStateStore {
    schema: FilterSchema,
    location: Arc<dyn LocationService>,
}

impl UrlStateStore {
    pub fn new(schema: FilterSchema, location: Arc<dyn LocationService>) -> Self {
        Self { schema, location }
    }

    pub fn schema(&self) -> &FilterSchema {
        &self.schema
    }

    /// Current query string of the underlying location
    pub fn search(&self) -> String {
        self.location.search()
    }

    pub fn read(&self) -> FilterState {
        read_filters(&self.schema, &self.location.search())
    }

    /// Write one filter. `None`, empty and default values remove the key.
    pub fn set(&self, key: &str, value: Option<FilterValue>) -> Result<(), UrlStateError> {
        self.set_many([(key.to_string(), value)])
    }

    /// Write one filter computed from its current decoded value
    pub fn update<F>(&self, key: &str, updater: F) -> Result<(), UrlStateError>
    where
        F: FnOnce(Option<FilterValue>) -> Option<FilterValue>,
    {
        if !self.schema.contains(key) {
            return Err(UrlStateError::UnknownKey(key.to_string()));
        }
        let previous = self.read().get(key).cloned();
        self.set(key, updater(previous))
    }

    /// Write several filters in one navigation
    pub fn set_many<I>(&self, values: I) -> Result<(), UrlStateError>
    where
        I: IntoIterator<Item = (String, Option<FilterValue>)>,
    {
        let current = self.location.search();
        let mut params = QueryParams::parse(&current);
        for (key, value) in values {
            self.apply(&mut params, &key, value)?;
        }
        self.commit(&current, &params);
        Ok(())
    }

    /// Drop every schema key from the URL in a single navigation
    pub fn clear_all(&self) {
        let current = self.location.search();
        let mut params = QueryParams::parse(&current);
        for key in self.schema.keys() {
            params.remove(key);
        }
        self.commit(&current, &params);
    }

    fn apply(
        &self,
        params: &mut QueryParams,
        key: &str,
        value: Option<FilterValue>,
    ) -> Result<(), UrlStateError> {
        let descriptor = self
            .schema
            .get(key)
            .ok_or_else(|| UrlStateError::UnknownKey(key.to_string()))?;
        match value {
            Some(value) if !descriptor.is_redundant(&value) => {
                let encoded = descriptor.kind.serialize(&value).ok_or_else(|| {
                    UrlStateError::KindMismatch {
                        key: key.to_string(),
                        expected: descriptor.kind,
                    }
                })?;
                params.set(key, encoded);
            }
            _ => params.remove(key),
        }
        Ok(())
    }

    fn commit(&self, current: &str, params: &QueryParams) {
        if QueryParams::parse(current) == *params {
            return;
        }
        let next = params.to_search();
        log::debug!("url_state: '{}' -> '{}'", current, next);
        self.location.navigate(&next, NavigateOptions { replace: true });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::url_state::location::MemoryLocation;
    use crate::shared::url_state::schema::{FilterDescriptor, FilterKind};

    fn schema() -> FilterSchema {
        FilterSchema::new()
            .field("page", FilterDescriptor::with_default(FilterKind::Number, 1.0))
            .string("search")
            .boolean("isActive")
    }

    fn store(search: &str) -> (UrlStateStore, Arc<MemoryLocation>) {
        let location = Arc::new(MemoryLocation::new(search));
        (UrlStateStore::new(schema(), location.clone()), location)
    }

    #[test]
    fn test_read_applies_defaults_only_when_absent() {
        let state = read_filters(&schema(), "");
        assert_eq!(state.get_number("page"), Some(1.0));
        assert_eq!(state.get_str("search"), None);

        // Present but malformed: no default
        let state = read_filters(&schema(), "?page=abc&isActive=yes");
        assert_eq!(state.get_number("page"), None);
        assert_eq!(state.get_bool("isActive"), None);

        // Present but empty counts as absent
        let state = read_filters(&schema(), "?page=&search=");
        assert_eq!(state.get_number("page"), Some(1.0));
        assert_eq!(state.get_str("search"), None);
    }

    #[test]
    fn test_default_or_empty_values_leave_key_absent() {
        let (store, location) = store("?page=3&search=night&isActive=true");

        store.set("page", Some(FilterValue::Number(1.0))).unwrap();
        store.set("search", Some("".into())).unwrap();
        store.set("isActive", None).unwrap();

        assert_eq!(location.search(), "");
        let state = store.read();
        assert_eq!(state.get_number("page"), Some(1.0));
        assert_eq!(state.get_str("search"), None);
        assert_eq!(state.get_bool("isActive"), None);
    }

    #[test]
    fn test_number_round_trip() {
        let (store, location) = store("");
        for value in [2.0, 17.0, 0.5, -4.0, 1234567.0] {
            store.set("page", Some(FilterValue::Number(value))).unwrap();
            assert_eq!(store.read().get_number("page"), Some(value));
        }
        assert_eq!(location.search(), "?page=1234567");
    }

    #[test]
    fn test_updater_sees_latest_value() {
        let (store, _location) = store("?page=2");
        let increment = |prev: Option<FilterValue>| {
            prev.and_then(|v| v.as_number()).map(|n| FilterValue::Number(n + 1.0))
        };
        store.update("page", increment).unwrap();
        store.update("page", increment).unwrap();
        assert_eq!(store.read().get_number("page"), Some(4.0));
    }

    #[test]
    fn test_set_preserves_other_keys_and_replaces_history() {
        let (store, location) = store("?tab=shifts&page=2");
        store.set("search", Some("morning".into())).unwrap();

        assert_eq!(location.search(), "?tab=shifts&page=2&search=morning");
        let navigations = location.navigations();
        assert_eq!(navigations.len(), 1);
        assert!(navigations[0].1.replace);
    }

    #[test]
    fn test_clear_all_is_single_navigation() {
        let (store, location) = store("?page=5&search=x&isActive=false&tab=keep");
        store.clear_all();

        assert_eq!(location.search(), "?tab=keep");
        assert_eq!(location.navigations().len(), 1);
        let state = store.read();
        assert_eq!(state.get_number("page"), Some(1.0));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn test_unchanged_url_skips_navigation() {
        let (store, location) = store("?search=x");
        store.set("search", Some("x".into())).unwrap();
        store.set("page", Some(FilterValue::Number(1.0))).unwrap();
        assert!(location.navigations().is_empty());
    }

    #[test]
    fn test_rejects_unknown_key_and_wrong_kind() {
        let (store, location) = store("");
        assert_eq!(
            store.set("nope", Some("x".into())),
            Err(UrlStateError::UnknownKey("nope".into()))
        );
        assert!(matches!(
            store.set("page", Some("two".into())),
            Err(UrlStateError::KindMismatch { .. })
        ));
        assert!(store.update("nope", |v| v).is_err());
        assert!(location.navigations().is_empty());
    }

    #[test]
    fn test_set_many_writes_once() {
        let (store, location) = store("?page=4");
        store
            .set_many(vec![
                ("search".to_string(), Some("a b".into())),
                ("page".to_string(), None),
            ])
            .unwrap();
        assert_eq!(location.search(), "?search=a%20b");
        assert_eq!(location.navigations().len(), 1);
        assert_eq!(store.read().get_str("search"), Some("a b"));
    }
}
