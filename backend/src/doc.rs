//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the item endpoints and the schema wrappers from
//! [`crate::inbound::http::schemas`]. Debug builds serve it through Swagger
//! UI; `cargo run --bin openapi-dump` prints it for external tooling.

use crate::inbound::http::items::{ItemPayload, ItemResponse, ItemsResponse, MessageResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, ItemSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping list API",
        description = "CRUD interface over an in-memory shopping list keyed by item name."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::items::list_items,
        crate::inbound::http::items::create_item,
        crate::inbound::http::items::get_item,
        crate::inbound::http::items::update_item,
        crate::inbound::http::items::delete_item,
    ),
    components(schemas(
        ItemSchema,
        ErrorSchema,
        ErrorCodeSchema,
        ItemPayload,
        ItemResponse,
        ItemsResponse,
        MessageResponse
    )),
    tags(
        (name = "items", description = "Shopping-list items")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/items", "get")]
    #[case("/items", "post")]
    #[case("/items/{name}", "get")]
    #[case("/items/{name}", "patch")]
    #[case("/items/{name}", "delete")]
    fn documents_every_item_operation(#[case] path: &str, #[case] method: &str) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let operation = match method {
            "get" => item.get.as_ref(),
            "post" => item.post.as_ref(),
            "patch" => item.patch.as_ref(),
            "delete" => item.delete.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "{method} {path} missing");
    }

    #[test]
    fn registers_schema_wrappers() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        for name in ["Item", "Error", "ErrorCode", "ItemPayload"] {
            assert!(schemas.contains_key(name), "schema {name} missing");
        }
    }
}
