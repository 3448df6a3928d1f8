//! Employee data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw identifier.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for EmployeeId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted employee.
///
/// ## Invariants
/// - `name` is non-empty and `age` is positive. Repositories only ever hold
///   records that went through the employee service's validation.
///
/// Serialises as `{"id": 1, "name": "Ann", "age": 30}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    id: EmployeeId,
    name: String,
    age: i32,
}

impl Employee {
    /// Build an employee from stored values.
    pub fn new(id: EmployeeId, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Employee age in years.
    pub fn age(&self) -> i32 {
        self.age
    }
}

/// Caller-supplied employee data before validation.
///
/// Every field is optional; absent values are rejected by the service with
/// the matching error code rather than by deserialisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub id: Option<EmployeeId>,
    pub name: Option<String>,
    pub age: Option<i32>,
}

/// Validated employee data ready to be written.
///
/// `id` is `None` for new employees; when present the repository replaces
/// (or creates) the record with that identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRecord {
    id: Option<EmployeeId>,
    name: String,
    age: i32,
}

impl EmployeeRecord {
    /// Assemble a record from already validated parts.
    pub fn new(id: Option<EmployeeId>, name: impl Into<String>, age: i32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Identifier to write to, if any.
    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    /// Employee name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Employee age in years.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Materialise the stored employee once the store has assigned `id`.
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        Employee::new(id, self.name, self.age)
    }
}
