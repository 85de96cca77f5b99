// web_app/state/mod.rs - Per-view state containers
//
// Each list view owns exactly one state container. Fetch results replace the
// collection wholesale; nothing here is shared between views except the
// client roster, which is a read-through cache and never mutates view state.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::web_app::api::ResourceGateway;
use crate::web_app::error::ApiError;
use crate::web_app::model::{filter_records, owner_name, Car, Client, Searchable};

/// State of one list view (collection, loading flag, banner, search, modal)
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub search_term: String,
    pub modal_open: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
            search_term: String::new(),
            modal_open: false,
        }
    }
}

impl<T> ListState<T> {
    /// Called before every fetch
    pub fn begin_fetch(&mut self) {
        self.error = None;
    }

    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.error = None;
    }

    /// Record a failed fetch. The previous collection is kept.
    pub fn fail(&mut self, banner: String) {
        self.error = Some(banner);
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
    }
}

impl<T: Searchable + Clone> ListState<T> {
    /// Records matching the current search term
    pub fn filtered(&self) -> Vec<T> {
        filter_records(&self.items, &self.search_term)
    }

    pub fn phase(&self) -> ListPhase<T> {
        if self.loading {
            ListPhase::Loading
        } else if let Some(banner) = &self.error {
            ListPhase::Failed(banner.clone())
        } else {
            ListPhase::Ready(self.filtered())
        }
    }
}

/// What a list view renders: the spinner wins over the banner, the banner
/// wins over the rows.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPhase<T> {
    Loading,
    Failed(String),
    Ready(Vec<T>),
}

/// State of the car view: its own list plus the clients used to name owners
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarBoard {
    pub cars: ListState<Car>,
    pub owners: Vec<Client>,
}

impl CarBoard {
    pub fn owner_name(&self, client_id: Option<i64>) -> &str {
        owner_name(&self.owners, client_id)
    }

    /// Matching cars with their owner label, ready for rendering
    pub fn rows(&self) -> Vec<(Car, String)> {
        self.cars
            .filtered()
            .into_iter()
            .map(|car| {
                let owner = self.owner_name(car.client_id).to_string();
                (car, owner)
            })
            .collect()
    }

    pub fn phase(&self) -> ListPhase<(Car, String)> {
        match self.cars.phase() {
            ListPhase::Loading => ListPhase::Loading,
            ListPhase::Failed(banner) => ListPhase::Failed(banner),
            ListPhase::Ready(_) => ListPhase::Ready(self.rows()),
        }
    }
}

/// A place a view keeps its state in.
///
/// Components use a reactive signal; tests and non-reactive callers use
/// `Rc<RefCell<_>>`.
pub trait StateCell<S> {
    /// Apply `f` to the state. Returns false when the state no longer exists.
    fn update_with(&self, f: impl FnOnce(&mut S)) -> bool;
}

impl<S> StateCell<S> for Rc<RefCell<S>> {
    fn update_with(&self, f: impl FnOnce(&mut S)) -> bool {
        f(&mut *self.borrow_mut());
        true
    }
}

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl<S: Send + Sync + 'static> StateCell<S> for leptos::prelude::RwSignal<S> {
    fn update_with(&self, f: impl FnOnce(&mut S)) -> bool {
        use leptos::prelude::Update;
        self.try_update(f).is_some()
    }
}

/// Liveness of a mounted view.
///
/// Created on mount and disposed on cleanup; async work checks it before
/// writing results back so a late response never touches a disposed view.
#[derive(Clone, Debug)]
pub struct MountToken(Arc<AtomicBool>);

impl MountToken {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn dispose(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for MountToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared read-through accessor for the client collection.
///
/// The client view stores each successful fetch here; the car view reads
/// through it instead of fetching clients on its own.
#[derive(Clone, Debug, Default)]
pub struct ClientRoster {
    cache: Arc<Mutex<Option<Vec<Client>>>>,
}

impl ClientRoster {
    pub fn cached(&self) -> Option<Vec<Client>> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn store(&self, clients: Vec<Client>) {
        *self.cache.lock().unwrap_or_else(PoisonError::into_inner) = Some(clients);
    }

    /// Cached clients, or one GET to the client service on a miss
    pub async fn load<G: ResourceGateway + ?Sized>(
        &self,
        gateway: &G,
    ) -> Result<Vec<Client>, ApiError> {
        if let Some(clients) = self.cached() {
            tracing::debug!("Client roster hit ({} clients)", clients.len());
            return Ok(clients);
        }

        let clients = gateway.list_clients().await?;
        self.store(clients.clone());
        Ok(clients)
    }
}
