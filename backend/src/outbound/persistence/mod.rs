//! PostgreSQL persistence adapter using Diesel with `diesel-async` and `bb8`.
//!
//! Row structs (`models`) and table definitions (`schema`) stay private to
//! this module; the repository translates them to domain values and maps
//! every failure to `EmployeeRepositoryError`.
//!
//! ```no_run
//! use employee_backend::outbound::persistence::{DbPool, DieselEmployeeRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), employee_backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/employees")).await?;
//! let _repository = DieselEmployeeRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_employee_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_employee_repository::DieselEmployeeRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
