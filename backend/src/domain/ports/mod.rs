//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employee_repository;

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
pub use employee_directory::EmployeeDirectory;
#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
pub use employee_repository::{EmployeeRepository, EmployeeRepositoryError};
