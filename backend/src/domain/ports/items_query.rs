//! Driving port for read-only item use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Item};

/// Read side of the shopping list.
#[async_trait]
pub trait ItemsQuery: Send + Sync {
    /// Return the full list in insertion order.
    async fn list_items(&self) -> Result<Vec<Item>, Error>;

    /// Return the first item named `name`, or a not-found error.
    async fn get_item(&self, name: &str) -> Result<Item, Error>;
}
