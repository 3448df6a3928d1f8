//! Process-local employee storage.
//!
//! Backs the server when no database URL is configured and keeps
//! integration tests free of external services. Contents vanish with the
//! process.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{EmployeeRepository, EmployeeRepositoryError};
use crate::domain::{Employee, EmployeeId, EmployeeRecord};

#[derive(Debug, Default)]
struct Store {
    employees: BTreeMap<EmployeeId, Employee>,
    last_id: i64,
}

impl Store {
    fn next_id(&mut self) -> Result<EmployeeId, EmployeeRepositoryError> {
        let next = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| EmployeeRepositoryError::query("employee id space exhausted"))?;
        self.last_id = next;
        Ok(EmployeeId::new(next))
    }
}

/// [`EmployeeRepository`] held in a mutex-guarded ordered map.
///
/// Identifiers are issued from a counter that never goes backwards, and an
/// explicit id above the counter moves it forward so later inserts do not
/// collide.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: Mutex<Store>,
}

impl InMemoryEmployeeRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, EmployeeRepositoryError> {
        self.store
            .lock()
            .map_err(|_| EmployeeRepositoryError::connection("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, EmployeeRepositoryError> {
        Ok(self.lock()?.employees.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeRepositoryError> {
        Ok(self.lock()?.employees.get(&id).cloned())
    }

    async fn save(&self, record: &EmployeeRecord) -> Result<Employee, EmployeeRepositoryError> {
        let mut store = self.lock()?;
        let id = match record.id() {
            Some(id) => {
                store.last_id = store.last_id.max(id.get());
                id
            }
            None => store.next_id()?,
        };
        let employee = record.clone().into_employee(id);
        store.employees.insert(id, employee.clone());
        Ok(employee)
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, EmployeeRepositoryError> {
        Ok(self.lock()?.employees.contains_key(&id))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), EmployeeRepositoryError> {
        self.lock()?.employees.remove(&id);
        Ok(())
    }
}
