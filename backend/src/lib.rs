//! Shopping-list service library.
//!
//! An actix-web CRUD interface over an in-memory, ordered list of items,
//! laid out as a small hexagon: [`domain`] holds the entity, errors, ports and
//! service; [`outbound`] provides the store; [`inbound`] exposes HTTP.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use middleware::Trace;
