//! Diesel row types for the `employees` table.
//!
//! Internal to the persistence adapter; the domain never sees them.

use diesel::prelude::*;

use super::schema::employees;
use crate::domain::{Employee, EmployeeId, EmployeeRecord};

/// Projection of the columns exposed to the domain.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct EmployeeRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Employee::new(EmployeeId::new(row.id), row.name, row.age)
    }
}

/// Insert payload. A `None` id falls back to the column default.
#[derive(Debug, Insertable)]
#[diesel(table_name = employees)]
pub(crate) struct NewEmployeeRow<'a> {
    pub id: Option<i64>,
    pub name: &'a str,
    pub age: i32,
}

/// Columns replaced when an insert hits an existing id.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = employees)]
pub(crate) struct EmployeeChanges<'a> {
    pub name: &'a str,
    pub age: i32,
}

impl<'a> From<&'a EmployeeRecord> for NewEmployeeRow<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            id: record.id().map(EmployeeId::get),
            name: record.name(),
            age: record.age(),
        }
    }
}

impl<'a> From<&'a EmployeeRecord> for EmployeeChanges<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            name: record.name(),
            age: record.age(),
        }
    }
}
