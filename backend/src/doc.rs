//! OpenAPI documentation for the employee API.
//!
//! Registers every handler under `inbound::http` plus the schema wrappers
//! from `inbound::http::schemas`. Served by Swagger UI in debug builds and
//! printed by the `openapi-dump` binary.

use utoipa::{Modify, OpenApi};

use crate::inbound::http::employees::EmployeeRequest;
use crate::inbound::http::schemas::EmployeeSchema;

const ERROR_CODES: &[(u16, &str)] = &[
    (601, "No employees stored, or listing failed"),
    (602, "Lookup without an identifier"),
    (603, "No employee with that identifier, or delete without an identifier"),
    (604, "Lookup failed in the store"),
    (605, "Blank name on save"),
    (606, "Blank or non-positive age, or blank name on update"),
    (607, "Save or update failed in the store"),
    (608, "Delete failed in the store"),
    (609, "Employee to delete does not exist"),
];

/// Append the error code table to the document description.
struct ErrorCodesAddon;

impl Modify for ErrorCodesAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let table = ERROR_CODES
            .iter()
            .map(|(code, meaning)| format!("| {code} | {meaning} |"))
            .collect::<Vec<_>>()
            .join("\n");
        let intro = openapi.info.description.take().unwrap_or_default();
        openapi.info.description = Some(format!(
            "{intro}\n\nFailures are reported as plain text with the error code as the HTTP \
             status.\n\n| Status | Meaning |\n|---|---|\n{table}"
        ));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ErrorCodesAddon),
    info(
        title = "Employee directory API",
        description = "CRUD endpoints for employee records and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::get_employees,
        crate::inbound::http::employees::get_employee_by_id,
        crate::inbound::http::employees::save_employee,
        crate::inbound::http::employees::update_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeSchema, EmployeeRequest)),
    tags(
        (name = "employees", description = "Employee records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
