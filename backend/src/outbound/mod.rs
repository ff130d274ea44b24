//! Outbound adapters implementing domain ports.
//!
//! - **memory**: the process-local item store behind [`ItemRepository`].
//!
//! Adapters translate between domain types and their backing structures and
//! carry no business rules.
//!
//! [`ItemRepository`]: crate::domain::ports::ItemRepository

pub mod memory;
