//! Domain ports for the hexagonal boundary.
//!
//! [`ItemRepository`] is the driven port the outbound store implements.
//! [`ItemsQuery`] and [`ItemsCommand`] are the driving ports HTTP handlers
//! call; [`crate::domain::ItemService`] implements both.

mod item_repository;
mod items_command;
mod items_query;

#[cfg(test)]
pub use item_repository::MockItemRepository;
pub use item_repository::{ItemPersistenceError, ItemRepository};
pub use items_command::ItemsCommand;
pub use items_query::ItemsQuery;
