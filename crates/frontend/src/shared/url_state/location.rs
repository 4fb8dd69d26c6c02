use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::location::Location;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one
    pub replace: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self { replace: true }
    }
}

/// Access to the query component of the current location.
///
/// The URL is the durable store for page filters; this trait keeps every read
/// and write of it behind one seam so it can be faked outside a browser.
pub trait LocationService: Send + Sync {
    /// Current query string including the leading `?`, or `""`
    fn search(&self) -> String;

    /// Make `search` the current query string
    fn navigate(&self, search: &str, options: NavigateOptions);
}

type RouterNavigate = Box<dyn Fn(&str, leptos_router::NavigateOptions)>;

/// Location owned by the enclosing `<Router>`.
///
/// Writes go through the router, so filter changes, `<A>` links and history
/// moves all land in the same reactive `search` memo.
#[derive(Clone)]
pub struct RouterLocation {
    location: Location,
    navigate: StoredValue<RouterNavigate, LocalStorage>,
}

impl RouterLocation {
    /// Must be called inside a `<Router>`
    pub fn from_context() -> Self {
        let navigate: RouterNavigate = Box::new(use_navigate());
        Self {
            location: use_location(),
            navigate: StoredValue::new_local(navigate),
        }
    }

    /// Reactive query string in the same `?a=1` form as [`LocationService::search`]
    pub fn search_signal(&self) -> Signal<String> {
        let search = self.location.search;
        Signal::derive(move || with_prefix(search.get()))
    }
}

impl LocationService for RouterLocation {
    fn search(&self) -> String {
        with_prefix(self.location.search.get_untracked())
    }

    fn navigate(&self, search: &str, options: NavigateOptions) {
        let url = format!(
            "{}{}{}",
            self.location.pathname.get_untracked(),
            search,
            self.location.hash.get_untracked()
        );
        let options = leptos_router::NavigateOptions {
            resolve: false,
            replace: options.replace,
            scroll: false,
            ..Default::default()
        };
        self.navigate.with_value(|navigate| navigate(&url, options));
    }
}

/// The router keeps the query without its `?`
fn with_prefix(raw: String) -> String {
    if raw.is_empty() || raw.starts_with('?') {
        raw
    } else {
        format!("?{}", raw)
    }
}

#[cfg(test)]
pub use self::memory::MemoryLocation;

#[cfg(test)]
mod memory {
    use super::{LocationService, NavigateOptions};
    use std::sync::Mutex;

    /// In-memory location recording every navigation
    #[derive(Debug, Default)]
    pub struct MemoryLocation {
        inner: Mutex<MemoryLocationState>,
    }

    #[derive(Debug, Default)]
    struct MemoryLocationState {
        search: String,
        history: Vec<(String, NavigateOptions)>,
    }

    impl MemoryLocation {
        pub fn new(search: &str) -> Self {
            Self {
                inner: Mutex::new(MemoryLocationState {
                    search: search.to_string(),
                    history: Vec::new(),
                }),
            }
        }

        /// Navigations performed so far, oldest first
        pub fn navigations(&self) -> Vec<(String, NavigateOptions)> {
            self.inner
                .lock()
                .map(|state| state.history.clone())
                .unwrap_or_default()
        }
    }

    impl LocationService for MemoryLocation {
        fn search(&self) -> String {
            self.inner
                .lock()
                .map(|state| state.search.clone())
                .unwrap_or_default()
        }

        fn navigate(&self, search: &str, options: NavigateOptions) {
            if let Ok(mut state) = self.inner.lock() {
                state.search = search.to_string();
                state.history.push((search.to_string(), options));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_search_gets_question_mark() {
        assert_eq!(with_prefix(String::new()), "");
        assert_eq!(with_prefix("page=2".into()), "?page=2");
        assert_eq!(with_prefix("?page=2".into()), "?page=2");
    }
}
