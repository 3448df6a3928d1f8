//! Driving port for employee use-cases.
//!
//! Inbound adapters (HTTP handlers) call this port without importing
//! persistence concerns. Production wires it to
//! [`crate::domain::EmployeeService`]; handler tests use the generated mock.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeDraft, EmployeeId, Error};

/// Employee use-cases exposed to inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// List every employee. An empty store is reported as an error.
    async fn get_all_employees(&self) -> Result<Vec<Employee>, Error>;

    /// Fetch a single employee.
    async fn get_employee_by_id(&self, id: Option<EmployeeId>) -> Result<Employee, Error>;

    /// Validate and store a new employee.
    async fn save_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Validate and replace an employee.
    async fn update_employee(&self, draft: EmployeeDraft) -> Result<Employee, Error>;

    /// Delete an existing employee.
    async fn delete_employee(&self, id: Option<EmployeeId>) -> Result<(), Error>;
}
