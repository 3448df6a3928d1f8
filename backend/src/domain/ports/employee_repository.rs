//! Port abstraction for employee persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Employee, EmployeeId, EmployeeRecord};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by employee repository adapters.
    pub enum EmployeeRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "employee repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "employee repository query failed: {message}",
    }
}

/// CRUD access to persisted employees.
///
/// Adapters perform no validation; callers hand over records that already
/// satisfy the [`Employee`] invariants.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Return every stored employee ordered by identifier.
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError>;

    /// Fetch an employee by identifier.
    async fn find_by_id(&self, id: EmployeeId)
    -> Result<Option<Employee>, EmployeeRepositoryError>;

    /// Insert a new employee, or replace the one carrying `record.id()`.
    ///
    /// Returns the stored employee including its assigned identifier.
    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError>;

    /// Report whether an employee with the identifier exists.
    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError>;

    /// Remove the employee with the identifier. Missing rows are not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError>;
}
