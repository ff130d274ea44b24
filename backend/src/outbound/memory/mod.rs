//! In-memory adapters. Contents are lost when the process exits.

mod item_repository;

pub use item_repository::InMemoryItemRepository;
