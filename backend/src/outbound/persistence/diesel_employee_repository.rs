//! PostgreSQL-backed `EmployeeRepository` using Diesel.
//!
//! Writes are a single `INSERT ... ON CONFLICT (id) DO UPDATE`, so saving a
//! record with a known id replaces it and saving one without an id lets the
//! `BIGSERIAL` default assign it. An explicit id past the sequence moves the
//! sequence forward so later generated ids do not collide with it.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use super::models::{EmployeeChanges, EmployeeRow, NewEmployeeRow};
use super::pool::{DbPool, PoolError};
use super::schema::employees;
use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId, EmployeeRecord};

/// Diesel implementation of the [`EmployeeRepository`] port.
#[derive(Clone)]
pub struct DieselEmployeeRepository {
    pool: DbPool,
}

impl DieselEmployeeRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Raises `employees_id_seq` to at least `$1` without ever lowering it.
const ADVANCE_ID_SEQUENCE: &str = "SELECT setval('employees_id_seq', \
     GREATEST(last_value, $1), is_called OR $1 >= last_value) \
     FROM employees_id_seq";

fn map_pool_error(error: PoolError) -> EmployeeRepositoryError {
    EmployeeRepositoryError::connection(error.into_message())
}

fn map_diesel_error(error: diesel::result::Error) -> EmployeeRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "employee query lost its connection");
            EmployeeRepositoryError::connection("database connection closed")
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "employee query rejected");
            EmployeeRepositoryError::query(format!("database error: {}", info.message()))
        }
        other => {
            debug!(error = %other, "employee query failed");
            EmployeeRepositoryError::query(other.to_string())
        }
    }
}

#[async_trait]
impl EmployeeRepository for DieselEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EmployeeRow> = employees::table
            .order(employees::id.asc())
            .select(EmployeeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<EmployeeRow> = employees::table
            .find(id.get())
            .select(EmployeeRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Employee::from))
    }

    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: EmployeeRow = diesel::insert_into(employees::table)
            .values(NewEmployeeRow::from(record))
            .on_conflict(employees::id)
            .do_update()
            .set(EmployeeChanges::from(record))
            .returning(EmployeeRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if let Some(id) = record.id() {
            diesel::sql_query(ADVANCE_ID_SEQUENCE)
                .bind::<diesel::sql_types::BigInt, _>(id.get())
                .execute(&mut conn)
                .await
                .map_err(map_diesel_error)?;
        }
        Ok(row.into())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(employees::table.find(id.get())))
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(employees::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        debug!(employee_id = %id, deleted, "employee delete executed");
        Ok(())
    }
}
