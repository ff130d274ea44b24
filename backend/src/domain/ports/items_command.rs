//! Driving port for item mutations.

use async_trait::async_trait;

use crate::domain::{Error, Item, ItemFields};

/// Write side of the shopping list.
#[async_trait]
pub trait ItemsCommand: Send + Sync {
    /// Append a new item, rejecting field sets where both values are blank.
    async fn create_item(&self, fields: ItemFields) -> Result<Item, Error>;

    /// Overwrite the first item named `name` with `fields`.
    async fn update_item(&self, name: &str, fields: ItemFields) -> Result<Item, Error>;

    /// Remove the first item named `name`.
    async fn delete_item(&self, name: &str) -> Result<(), Error>;
}
