use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_signals::signal::{Mutable, Signal, SignalExt};

use crate::api::ApiClient;
use crate::model::Country;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Country>),
    /// Logged only; the selector just ends up empty.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn countries(&self) -> &[Country] {
        match self {
            LoadState::Loaded(countries) => countries,
            LoadState::Loading | LoadState::Failed(_) => &[],
        }
    }

    /// The selector is usable only once there is something to pick.
    pub fn selector_enabled(&self) -> bool {
        !self.countries().is_empty()
    }

    pub fn placeholder(&self) -> &'static str {
        if self.is_loading() {
            "Loading countries..."
        } else {
            "Select your country"
        }
    }
}

/// Country list backing the sign-up form's selector.
pub struct CountryLoader {
    state: Mutable<LoadState>,
    generation: AtomicU64,
}

impl CountryLoader {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutable::new(LoadState::Loading),
            generation: AtomicU64::new(0),
        })
    }

    /// Fetches the first page once and stores its `results` verbatim. A
    /// response that arrives after [`cancel`](Self::cancel) or after a newer
    /// `load` is dropped.
    pub async fn load(&self, client: &dyn ApiClient) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.set(LoadState::Loading);

        let result = client.fetch_countries().await;

        if self.generation.load(Ordering::SeqCst) != generation {
            log::debug!("Dropping stale country response (generation {})", generation);
            return;
        }

        match result {
            Ok(page) => {
                log::debug!("Loaded {} countries", page.results.len());
                self.state.set(LoadState::Loaded(page.results));
            }
            Err(e) => {
                log::error!("Failed to load countries: {}", e);
                self.state.set(LoadState::Failed(e.to_string()));
            }
        }
    }

    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn state(&self) -> LoadState {
        self.state.get_cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock_ref().is_loading()
    }

    pub fn countries(&self) -> Vec<Country> {
        self.state.lock_ref().countries().to_vec()
    }

    pub fn is_loading_signal(&self) -> impl Signal<Item = bool> {
        self.state.signal_ref(LoadState::is_loading)
    }

    pub fn selector_enabled_signal(&self) -> impl Signal<Item = bool> {
        self.state.signal_ref(LoadState::selector_enabled).dedupe()
    }

    pub fn placeholder_signal(&self) -> impl Signal<Item = &'static str> {
        self.state.signal_ref(LoadState::placeholder)
    }

    pub fn countries_signal(&self) -> impl Signal<Item = Vec<Country>> {
        self.state.signal_ref(|state| state.countries().to_vec())
    }
}
