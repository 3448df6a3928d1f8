//! Employee domain service.
//!
//! Implements the [`EmployeeDirectory`] driving port. Every operation checks
//! the shape of its input before touching the repository, then converts
//! repository outcomes into domain values or coded [`Error`]s. Repository
//! failures are never passed through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{EmployeeDirectory, EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeDraft, EmployeeId, EmployeeRecord, Error, ErrorCode};

const MISSING_ID_MESSAGE: &str = "Employee ID is null. Please provide a valid ID.";
const BLANK_NAME_MESSAGE: &str = "Employee name is blank. Please provide a valid name.";
const INVALID_AGE_MESSAGE: &str = "Employee age is blank or negative. Please provide a valid age.";
const NO_EMPLOYEES_MESSAGE: &str = "No data found in the database while fetching employees.";

/// Codes reported when a draft fails validation.
#[derive(Debug, Clone, Copy)]
struct DraftCodes {
    blank_name: ErrorCode,
    invalid_age: ErrorCode,
}

const SAVE_CODES: DraftCodes = DraftCodes {
    blank_name: ErrorCode::BLANK_NAME,
    invalid_age: ErrorCode::INVALID_AGE,
};

const UPDATE_CODES: DraftCodes = DraftCodes {
    blank_name: ErrorCode::UPDATE_BLANK_NAME,
    invalid_age: ErrorCode::INVALID_AGE,
};

/// Check the draft's name and age, in that order.
fn validate_draft(draft: EmployeeDraft, codes: DraftCodes) -> Result<EmployeeRecord, Error> {
    let EmployeeDraft { id, name, age } = draft;
    let name = name
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::invalid_input(codes.blank_name, BLANK_NAME_MESSAGE))?;
    let age = age
        .filter(|age| *age > 0)
        .ok_or_else(|| Error::invalid_input(codes.invalid_age, INVALID_AGE_MESSAGE))?;
    Ok(EmployeeRecord::new(id, name, age))
}

fn require_id(id: Option<EmployeeId>, code: ErrorCode) -> Result<EmployeeId, Error> {
    id.ok_or_else(|| Error::invalid_input(code, MISSING_ID_MESSAGE))
}

fn store_failure(code: ErrorCode, context: &str, err: &EmployeeRepositoryError) -> Error {
    error!(error = %err, code = %code, "employee store failed while {context}");
    Error::empty_output(code, format!("Something went wrong while {context}: {err}"))
}

fn log_rejection(operation: &'static str, err: &Error) {
    debug!(operation, code = %err.code(), message = err.message(), "employee request rejected");
}

/// Employee service backed by an [`EmployeeRepository`].
///
/// Stateless apart from the repository handle, so one instance can serve
/// every request.
#[derive(Clone)]
pub struct EmployeeService<R> {
    repository: Arc<R>,
}

impl<R> EmployeeService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn store(
        &self,
        draft: EmployeeDraft,
        codes: DraftCodes,
        operation: &'static str,
        context: &str,
    ) -> Result<Employee, Error> {
        let record = validate_draft(draft, codes).inspect_err(|err| log_rejection(operation, err))?;
        self.repository
            .save(&record)
            .await
            .map_err(|err| store_failure(ErrorCode::SAVE_FAILED, context, &err))
    }
}

#[async_trait]
impl<R> EmployeeDirectory for EmployeeService<R>
where
    R: EmployeeRepository,
{
    async fn get_all_employees(&self) -> Result<Vec<Employee>, Error> {
        let employees = self.repository.find_all().await.map_err(|err| {
            store_failure(ErrorCode::NO_EMPLOYEES, "fetching employees", &err)
        })?;
        if employees.is_empty() {
            return Err(Error::empty_output(
                ErrorCode::NO_EMPLOYEES,
                NO_EMPLOYEES_MESSAGE,
            ));
        }
        Ok(employees)
    }

    async fn get_employee_by_id(&self, id: Option<EmployeeId>) -> Result<Employee, Error> {
        let id = require_id(id, ErrorCode::MISSING_ID)
            .inspect_err(|err| log_rejection("get_employee_by_id", err))?;
        self.repository
            .find_by_id(id)
            .await
            .map_err(|err| {
                store_failure(ErrorCode::FETCH_FAILED, "fetching employee by ID", &err)
            })?
            .ok_or_else(|| {
                Error::empty_output(
                    ErrorCode::EMPLOYEE_NOT_FOUND,
                    format!("No employee found with ID: {id}. Unable to fetch employee details."),
                )
            })
    }

    async fn save_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.store(draft, SAVE_CODES, "save_employee", "saving employee")
            .await
    }

    async fn update_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error> {
        self.store(draft, UPDATE_CODES, "update_employee", "updating employee")
            .await
    }

    async fn delete_employee(&self, id: Option<EmployeeId>) -> Result<(), Error> {
        let id = require_id(id, ErrorCode::DELETE_MISSING_ID)
            .inspect_err(|err| log_rejection("delete_employee", err))?;
        let exists = self.repository.exists_by_id(id).await.map_err(|err| {
            store_failure(ErrorCode::DELETE_FAILED, "deleting employee", &err)
        })?;
        if !exists {
            return Err(Error::empty_output(
                ErrorCode::DELETE_TARGET_MISSING,
                format!("No employee found with ID: {id}. Unable to delete employee."),
            ));
        }
        self.repository
            .delete_by_id(id)
            .await
            .map_err(|err| store_failure(ErrorCode::DELETE_FAILED, "deleting employee", &err))
    }
}

#[cfg(test)]
#[path = "employee_service_tests.rs"]
mod tests;
