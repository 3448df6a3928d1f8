//! Outbound adapters implementing the employee repository port.
//!
//! - **persistence**: PostgreSQL via Diesel, `diesel-async` and `bb8`.
//! - **memory**: process-local map used when no database is configured.
//!
//! Adapters translate between domain values and storage representations and
//! hold no business rules.

pub mod memory;
pub mod persistence;
