//! Shopping-list domain service.
//!
//! Implements the item driving ports on top of any [`ItemRepository`]. Each
//! operation validates or looks up first and only then mutates, so a failed
//! request never changes the store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{ItemPersistenceError, ItemRepository, ItemsCommand, ItemsQuery};
use crate::domain::{Error, Item, ItemFields};

/// Message returned when create receives neither a name nor a price.
pub const ITEM_REQUIRED_MESSAGE: &str = "Item is required";
/// Message returned when no item matches the requested name.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";

/// Item service implementing [`ItemsQuery`] and [`ItemsCommand`].
pub struct ItemService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> ItemService<R> {
    /// Create a new service over the given store.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R> ItemService<R>
where
    R: ItemRepository + ?Sized,
{
    fn map_persistence_error(err: ItemPersistenceError) -> Error {
        error!(error = %err, "item store failure");
        Error::internal(format!("item store error: {err}"))
    }

    fn not_found(name: &str) -> Error {
        debug!(name, "no item matched");
        Error::not_found(ITEM_NOT_FOUND_MESSAGE)
    }
}

#[async_trait]
impl<R> ItemsQuery for ItemService<R>
where
    R: ItemRepository + ?Sized,
{
    async fn list_items(&self) -> Result<Vec<Item>, Error> {
        self.repo.list().await.map_err(Self::map_persistence_error)
    }

    async fn get_item(&self, name: &str) -> Result<Item, Error> {
        self.repo
            .find_first(name)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::not_found(name))
    }
}

#[async_trait]
impl<R> ItemsCommand for ItemService<R>
where
    R: ItemRepository + ?Sized,
{
    async fn create_item(&self, fields: ItemFields) -> Result<Item, Error> {
        if fields.is_blank() {
            return Err(Error::invalid_request(ITEM_REQUIRED_MESSAGE));
        }
        let item = self
            .repo
            .append(Item::from(fields))
            .await
            .map_err(Self::map_persistence_error)?;
        info!(name = item.name(), price = item.price(), "item created");
        Ok(item)
    }

    async fn update_item(&self, name: &str, fields: ItemFields) -> Result<Item, Error> {
        let item = self
            .repo
            .replace_first(name, fields)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::not_found(name))?;
        info!(from = name, to = item.name(), price = item.price(), "item updated");
        Ok(item)
    }

    async fn delete_item(&self, name: &str) -> Result<(), Error> {
        self.repo
            .remove_first(name)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Self::not_found(name))?;
        info!(name, "item deleted");
        Ok(())
    }
}
