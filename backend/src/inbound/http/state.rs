//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! the driving port and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::EmployeeDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub employees: Arc<dyn EmployeeDirectory>,
}

impl HttpState {
    /// Construct state around an employee directory implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use employee_backend::domain::EmployeeService;
    /// use employee_backend::inbound::http::state::HttpState;
    /// use employee_backend::outbound::memory::InMemoryEmployeeRepository;
    ///
    /// let repository = Arc::new(InMemoryEmployeeRepository::default());
    /// let state = HttpState::new(Arc::new(EmployeeService::new(repository)));
    /// let _employees = state.employees.clone();
    /// ```
    pub fn new(employees: Arc<dyn EmployeeDirectory>) -> Self {
        Self { employees }
    }
}
