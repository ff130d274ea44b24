//! Domain entities, errors, ports and the item service.
//!
//! Nothing under this module depends on actix or on a concrete store; the
//! inbound and outbound adapters depend on it instead.

pub mod error;
pub mod item;
pub mod item_service;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::item::{Item, ItemFields};
pub use self::item_service::{ITEM_NOT_FOUND_MESSAGE, ITEM_REQUIRED_MESSAGE, ItemService};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
