//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`; the
//! wrappers here mirror their serialised shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Employee`].
#[derive(ToSchema)]
#[schema(as = Employee)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct EmployeeSchema {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Employee name; never empty.
    #[schema(example = "Ann")]
    name: String,
    /// Age in years; always positive.
    #[schema(example = 30, minimum = 1)]
    age: i32,
}
