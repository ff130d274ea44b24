//! Driven port for the ordered item store and its errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Item, ItemFields};

/// Errors raised by item store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ItemPersistenceError {
    /// A writer panicked while holding the store lock.
    #[error("item store lock poisoned: {message}")]
    Poisoned { message: String },
}

impl ItemPersistenceError {
    /// Build a [`ItemPersistenceError::Poisoned`] from any displayable cause.
    pub fn poisoned(message: impl Into<String>) -> Self {
        Self::Poisoned {
            message: message.into(),
        }
    }
}

/// Ordered, mutable sequence of items.
///
/// Every method must behave atomically with respect to the others: lookups
/// and the mutation they guard happen under one critical section. Name
/// matching is exact and case-sensitive, and always picks the first match in
/// insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Every stored item in insertion order.
    async fn list(&self) -> Result<Vec<Item>, ItemPersistenceError>;

    /// First item whose name equals `name`.
    async fn find_first(&self, name: &str) -> Result<Option<Item>, ItemPersistenceError>;

    /// Push `item` to the end of the sequence and return the stored copy.
    async fn append(&self, item: Item) -> Result<Item, ItemPersistenceError>;

    /// Overwrite the first item named `name` and return its new state.
    async fn replace_first(
        &self,
        name: &str,
        fields: ItemFields,
    ) -> Result<Option<Item>, ItemPersistenceError>;

    /// Remove the first item named `name`, keeping the others in order.
    async fn remove_first(&self, name: &str) -> Result<Option<Item>, ItemPersistenceError>;

    /// Replace the whole sequence. Used for seeding and by test harnesses.
    async fn reset(&self, items: Vec<Item>) -> Result<(), ItemPersistenceError>;
}
