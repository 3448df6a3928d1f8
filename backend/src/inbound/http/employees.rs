//! Employee API handlers.
//!
//! ```text
//! GET    /employee/get
//! GET    /employee/get/{id}
//! POST   /employee/save      {"name":"Ann","age":30}
//! PUT    /employee/update    {"id":1,"name":"Ann","age":31}
//! DELETE /employee/delete?id=1
//! ```
//!
//! Handlers do no validation of their own. Every field of the request body
//! is optional so the service can report absent values with its own codes.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Resource, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Employee, EmployeeDraft, EmployeeId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{reject_extraction, reject_wrong_method};
use crate::inbound::http::schemas::EmployeeSchema;
use crate::inbound::http::state::HttpState;

/// Body accepted by the save and update endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct EmployeeRequest {
    /// Generated when absent; a supplied id replaces that record on save and update alike.
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "Ann")]
    pub name: Option<String>,
    #[schema(example = 30)]
    pub age: Option<i32>,
}

impl From<EmployeeRequest> for EmployeeDraft {
    fn from(value: EmployeeRequest) -> Self {
        Self {
            id: value.id.map(EmployeeId::new),
            name: value.name,
            age: value.age,
        }
    }
}

/// Query string of `DELETE /employee/delete`.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteQuery {
    /// Identifier of the employee to delete.
    pub id: Option<i64>,
}

/// List every stored employee.
#[utoipa::path(
    get,
    path = "/employee/get",
    responses(
        (status = 200, description = "Employees ordered by id", body = [EmployeeSchema]),
        (status = "default", description = "Coded failure (601) as plain text", body = String)
    ),
    tags = ["employees"],
    operation_id = "getEmployees"
)]
pub async fn get_employees(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Employee>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(web::Json(employees))
}

/// Fetch one employee by identifier.
#[utoipa::path(
    get,
    path = "/employee/get/{id}",
    params(("id" = i64, Path, description = "Employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeSchema),
        (status = 400, description = "Identifier is not a number", body = String),
        (status = "default", description = "Coded failure (602, 603, 604) as plain text", body = String)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
pub async fn get_employee_by_id(
    state: web::Data<HttpState>,
    id: web::Path<i64>,
) -> ApiResult<web::Json<Employee>> {
    let id = EmployeeId::new(id.into_inner());
    let employee = state.employees.get_employee_by_id(Some(id)).await?;
    Ok(web::Json(employee))
}

/// Create an employee.
#[utoipa::path(
    post,
    path = "/employee/save",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Stored employee with its new id", body = EmployeeSchema),
        (status = 400, description = "Malformed JSON body", body = String),
        (status = "default", description = "Coded failure (605, 606, 607) as plain text", body = String)
    ),
    tags = ["employees"],
    operation_id = "saveEmployee"
)]
pub async fn save_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let employee = state
        .employees
        .save_employee(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Replace an employee, creating it when the id is unknown.
#[utoipa::path(
    put,
    path = "/employee/update",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Stored employee", body = EmployeeSchema),
        (status = 400, description = "Malformed JSON body", body = String),
        (status = "default", description = "Coded failure (606, 607) as plain text", body = String)
    ),
    tags = ["employees"],
    operation_id = "updateEmployee"
)]
pub async fn update_employee(
    state: web::Data<HttpState>,
    payload: web::Json<EmployeeRequest>,
) -> ApiResult<HttpResponse> {
    let employee = state
        .employees
        .update_employee(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(employee))
}

/// Delete an employee.
#[utoipa::path(
    delete,
    path = "/employee/delete",
    params(DeleteQuery),
    responses(
        (status = 202, description = "Employee deleted", body = String),
        (status = 400, description = "Identifier is not a number", body = String),
        (status = "default", description = "Coded failure (603, 608, 609) as plain text", body = String)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployee"
)]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    query: web::Query<DeleteQuery>,
) -> ApiResult<HttpResponse> {
    let id = query.into_inner().id.map(EmployeeId::new);
    state.employees.delete_employee(id).await?;
    Ok(HttpResponse::Accepted()
        .content_type(ContentType::plaintext())
        .body("Employee deleted"))
}

fn endpoint(path: &str) -> Resource {
    web::resource(path).default_service(web::to(reject_wrong_method))
}

/// Register the `/employee` scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use employee_backend::inbound::http::employees;
///
/// let _app = App::new().configure(employees::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employee")
            .app_data(web::PathConfig::default().error_handler(reject_extraction::<PathError>))
            .app_data(
                web::QueryConfig::default().error_handler(reject_extraction::<QueryPayloadError>),
            )
            .app_data(
                web::JsonConfig::default().error_handler(reject_extraction::<JsonPayloadError>),
            )
            .service(endpoint("/get").route(web::get().to(get_employees)))
            .service(endpoint("/get/{id}").route(web::get().to(get_employee_by_id)))
            .service(endpoint("/save").route(web::post().to(save_employee)))
            .service(endpoint("/update").route(web::put().to(update_employee)))
            .service(endpoint("/delete").route(web::delete().to(delete_employee))),
    );
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
