//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use shopping_list::domain::ports::ItemRepository;
use shopping_list::outbound::memory::InMemoryItemRepository;
use shopping_list::settings::{AppSettings, SettingsError};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) repository: Arc<dyn ItemRepository>,
}

impl ServerConfig {
    /// Construct a configuration bound to `bind_addr` with an empty store.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            repository: Arc::new(InMemoryItemRepository::new()),
        }
    }

    /// Resolve the bind address and seed the store from loaded settings.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host or mode is invalid.
    pub fn from_settings(settings: &AppSettings) -> Result<Self, SettingsError> {
        let bind_addr = settings.bind_addr()?;
        let mode = settings.run_mode()?;
        let repository = Arc::new(InMemoryItemRepository::with_items(mode.initial_items()));
        Ok(Self::new(bind_addr).with_repository(repository))
    }

    /// Replace the item store shared by every worker.
    #[must_use]
    pub fn with_repository(mut self, repository: Arc<dyn ItemRepository>) -> Self {
        self.repository = repository;
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
