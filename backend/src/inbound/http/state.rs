//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see the driving ports,
//! so they can be exercised against any store.

use std::sync::Arc;

use crate::domain::ItemService;
use crate::domain::ports::{ItemRepository, ItemsCommand, ItemsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub items: Arc<dyn ItemsQuery>,
    pub items_command: Arc<dyn ItemsCommand>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(items: Arc<dyn ItemsQuery>, items_command: Arc<dyn ItemsCommand>) -> Self {
        Self {
            items,
            items_command,
        }
    }

    /// Wire both ports to one [`ItemService`] over `repo`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use shopping_list::inbound::http::state::HttpState;
    /// use shopping_list::outbound::memory::InMemoryItemRepository;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryItemRepository::new()));
    /// let _query = state.items.clone();
    /// ```
    pub fn from_repository<R>(repo: Arc<R>) -> Self
    where
        R: ItemRepository + ?Sized + 'static,
    {
        let service = Arc::new(ItemService::new(repo));
        Self::new(service.clone(), service)
    }
}
