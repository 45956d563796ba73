//! Database layer - employee storage
//!
//! Handlers talk to [`AbstractEmployees`]; `MongoDb` backs it in production
//! and `ReferenceDb` keeps records in memory for tests.

mod mongo;
mod reference;

pub use mongo::MongoDb;
pub use reference::ReferenceDb;

use async_trait::async_trait;

use crate::models::{Employee, EmployeeId};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// A single-document lookup or update matched nothing
    #[error("no documents in result")]
    NoDocuments,

    #[error("database did not respond within {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("inserted document could not be read back: {0}")]
    InsertedNotFound(String),
}

#[async_trait]
pub trait AbstractEmployees: Sync + Send {
    /// Fetch every employee in the collection
    async fn list_employees(&self) -> Result<Vec<Employee>, DbError>;

    /// Insert a new employee and return it as stored, with its assigned id.
    /// Any id on `employee` is ignored.
    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, DbError>;

    /// Overwrite name, age and salary of the matching employee.
    ///
    /// Returns `DbError::NoDocuments` when nothing matches.
    async fn update_employee(&self, id: EmployeeId, employee: &Employee) -> Result<(), DbError>;

    /// Delete the matching employee, returning how many records were removed
    async fn delete_employee(&self, id: EmployeeId) -> Result<u64, DbError>;
}
