use super::location::{LocationService, RouterLocation};
use super::schema::{FilterSchema, FilterState, FilterValue};
use super::store::{read_filters, UrlStateError, UrlStateStore};
use leptos::prelude::*;
use std::sync::Arc;

/// Location used by [`use_url_filters`] instead of the router's when one is
/// provided through context.
#[derive(Clone)]
pub struct LocationHandle(pub Arc<dyn LocationService>);

/// Where the reactive query string comes from
#[derive(Clone, Copy)]
enum SearchSource {
    /// Router location; every navigation, ours or not, shows up here
    Router(Signal<String>),
    /// Location without change notifications, refreshed after each write
    Detached(RwSignal<String>),
}

impl SearchSource {
    fn get(&self) -> String {
        match self {
            SearchSource::Router(search) => search.get(),
            SearchSource::Detached(search) => search.get(),
        }
    }
}

/// Reactive view of a page's URL filters
#[derive(Clone, Copy)]
pub struct UrlFilters {
    store: StoredValue<UrlStateStore>,
    source: SearchSource,
    state: Memo<FilterState>,
}

/// Bind `schema` to the current location.
///
/// Inside a `<Router>` the decoded state follows the router's location, so
/// link clicks and history moves re-compute it like this page's own writes.
pub fn use_url_filters(schema: FilterSchema) -> UrlFilters {
    let (location, source): (Arc<dyn LocationService>, SearchSource) =
        match use_context::<LocationHandle>() {
            Some(LocationHandle(location)) => {
                let search = RwSignal::new(location.search());
                (location, SearchSource::Detached(search))
            }
            None => {
                let location = RouterLocation::from_context();
                let search = location.search_signal();
                (Arc::new(location), SearchSource::Router(search))
            }
        };

    let store = StoredValue::new(UrlStateStore::new(schema, location));
    let state = Memo::new(move |_| {
        let current = source.get();
        store.with_value(|s| read_filters(s.schema(), &current))
    });

    UrlFilters {
        store,
        source,
        state,
    }
}

impl UrlFilters {
    pub fn state(&self) -> Memo<FilterState> {
        self.state
    }

    pub fn set(&self, key: &str, value: Option<FilterValue>) {
        let result = self.store.with_value(|s| s.set(key, value));
        self.finish(result);
    }

    pub fn update<F>(&self, key: &str, updater: F)
    where
        F: FnOnce(Option<FilterValue>) -> Option<FilterValue>,
    {
        let result = self.store.with_value(|s| s.update(key, updater));
        self.finish(result);
    }

    pub fn set_many(&self, values: Vec<(String, Option<FilterValue>)>) {
        let result = self.store.with_value(|s| s.set_many(values));
        self.finish(result);
    }

    pub fn clear_all(&self) {
        self.store.with_value(|s| s.clear_all());
        self.finish(Ok(()));
    }

    fn finish(&self, result: Result<(), UrlStateError>) {
        if let Err(err) = result {
            log::warn!("url_state: {}", err);
            return;
        }
        if let SearchSource::Detached(search) = self.source {
            search.set(self.store.with_value(|s| s.search()));
        }
    }
}
