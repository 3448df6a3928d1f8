//! Domain primitives and services.
//!
//! Purpose: define the employee entity, the coded domain error and the
//! service that validates requests before they reach persistence. Nothing in
//! this module knows about HTTP or SQL.
//!
//! Public surface:
//! - Employee, EmployeeId, EmployeeDraft, EmployeeRecord — employee values.
//! - Error, ErrorCode, ErrorKind — transport-agnostic failures.
//! - EmployeeService — implementation of the `EmployeeDirectory` port.

pub mod employee;
pub mod employee_service;
pub mod error;
pub mod ports;

pub use self::employee::{Employee, EmployeeDraft, EmployeeId, EmployeeRecord};
pub use self::employee_service::EmployeeService;
pub use self::error::{Error, ErrorCode, ErrorKind};
