//! In-memory backend used by tests

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use futures::lock::Mutex;
use mongodb::bson::oid::ObjectId;

use super::{AbstractEmployees, DbError};
use crate::models::{Employee, EmployeeDocument, EmployeeId};

/// Reference implementation keyed by ObjectId, which keeps insertion order
#[derive(Clone, Debug, Default)]
pub struct ReferenceDb {
    pub employees: Arc<Mutex<BTreeMap<ObjectId, EmployeeDocument>>>,
}

impl ReferenceDb {
    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.employees.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.employees.lock().await.is_empty()
    }
}

#[async_trait]
impl AbstractEmployees for ReferenceDb {
    async fn list_employees(&self) -> Result<Vec<Employee>, DbError> {
        let employees = self.employees.lock().await;
        Ok(employees.values().cloned().map(Employee::from).collect())
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, DbError> {
        let mut employees = self.employees.lock().await;
        let id = ObjectId::new();
        let mut doc = EmployeeDocument::for_insert(employee);
        doc.id = Some(id);
        employees.insert(id, doc.clone());
        Ok(Employee::from(doc))
    }

    async fn update_employee(&self, id: EmployeeId, employee: &Employee) -> Result<(), DbError> {
        let mut employees = self.employees.lock().await;
        let doc = employees
            .get_mut(&id.as_object_id())
            .ok_or(DbError::NoDocuments)?;
        doc.name = employee.name.clone();
        doc.age = employee.age;
        doc.salary = employee.salary;
        Ok(())
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<u64, DbError> {
        let mut employees = self.employees.lock().await;
        Ok(employees.remove(&id.as_object_id()).map_or(0, |_| 1))
    }
}
