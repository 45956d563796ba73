//! MongoDB backend

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ReadPreference, SelectionCriteria};
use mongodb::{Client, Collection, Database};

use super::{AbstractEmployees, DbError};
use crate::config::DatabaseConfig;
use crate::models::{Employee, EmployeeDocument, EmployeeId};

/// Connected MongoDB handle. Cloning shares the underlying client.
#[derive(Clone, Debug)]
pub struct MongoDb {
    db: Database,
    collection_name: String,
}

impl MongoDb {
    /// Connect, ping the primary and select the configured database.
    ///
    /// The whole sequence is bounded by `config.startup_timeout`. There is no
    /// retry; the caller is expected to abort on error.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbError> {
        let seconds = config.startup_timeout.as_secs();
        tokio::time::timeout(config.startup_timeout, Self::establish(config))
            .await
            .map_err(|_| DbError::Timeout { seconds })?
    }

    async fn establish(config: &DatabaseConfig) -> Result<Self, DbError> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.direct_connection = Some(true);
        // Timeouts given in the URI take precedence.
        options.connect_timeout.get_or_insert(config.startup_timeout);
        options
            .server_selection_timeout
            .get_or_insert(config.startup_timeout);

        let client = Client::with_options(options)?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await?;
        tracing::info!(database = %config.database_name, "Connected to MongoDB");

        Ok(Self::from_client(
            client,
            &config.database_name,
            &config.collection_name,
        ))
    }

    /// Wrap an existing client without pinging it
    pub fn from_client(client: Client, database_name: &str, collection_name: &str) -> Self {
        Self {
            db: client.database(database_name),
            collection_name: collection_name.to_string(),
        }
    }

    fn employees(&self) -> Collection<EmployeeDocument> {
        self.db.collection(&self.collection_name)
    }
}

#[async_trait]
impl AbstractEmployees for MongoDb {
    async fn list_employees(&self) -> Result<Vec<Employee>, DbError> {
        let docs: Vec<EmployeeDocument> = self
            .employees()
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(Employee::from).collect())
    }

    async fn insert_employee(&self, employee: &Employee) -> Result<Employee, DbError> {
        let result = self
            .employees()
            .insert_one(EmployeeDocument::for_insert(employee))
            .await?;
        let inserted_id = result.inserted_id;

        self.employees()
            .find_one(doc! { "_id": inserted_id.clone() })
            .await?
            .map(Employee::from)
            .ok_or_else(|| DbError::InsertedNotFound(inserted_id.to_string()))
    }

    async fn update_employee(&self, id: EmployeeId, employee: &Employee) -> Result<(), DbError> {
        // The pre-update document is not used; only whether one matched.
        self.employees()
            .find_one_and_update(
                doc! { "_id": id.as_object_id() },
                doc! {
                    "$set": {
                        "name": employee.name.as_str(),
                        "age": employee.age,
                        "salary": employee.salary,
                    }
                },
            )
            .await?
            .map(|_| ())
            .ok_or(DbError::NoDocuments)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<u64, DbError> {
        let result = self
            .employees()
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(result.deleted_count)
    }
}
