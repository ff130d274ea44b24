//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their JSON
//! shape so the documentation lives in the adapter layer.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Item`].
///
/// Absent fields are omitted from the JSON object.
#[derive(ToSchema)]
#[schema(as = Item)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ItemSchema {
    /// Lookup key; not unique.
    #[schema(example = "popsicle")]
    name: Option<String>,
    /// Item price.
    #[schema(example = 1.45)]
    price: Option<f64>,
}

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails the presence check.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// No stored item matched the requested name.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for the JSON error envelope.
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    code: ErrorCodeSchema,
    /// Human-readable message.
    #[schema(example = "Item not found")]
    message: String,
    /// HTTP status code of the response.
    #[schema(example = 404)]
    status: u16,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details.
    details: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn item_schema_is_named_item() {
        assert_eq!(ItemSchema::name(), "Item");
        let schema_json = schema_to_json::<ItemSchema>();
        assert!(schema_json.contains("price"), "schema should contain price");
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in ["invalid_request", "not_found", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_includes_status() {
        assert_eq!(ErrorSchema::name(), "Error");
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("status"), "schema should contain status");
    }
}
