//! HTTP inbound adapter exposing the shopping-list REST endpoints.

pub mod error;
pub mod items;
pub mod schemas;
pub mod state;

pub use error::{ApiResult, json_error_handler, route_not_found};
