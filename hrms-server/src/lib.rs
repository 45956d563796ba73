//! hrms-server: employee records over HTTP
//!
//! A thin REST layer over a single MongoDB collection. Each request maps to
//! one database operation; the connection is opened once at startup and
//! shared by every handler through [`AppState`].

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod tracing_setup;

pub use config::{DatabaseConfig, ServerArgs, ServerConfig};
pub use db::{AbstractEmployees, DbError, MongoDb, ReferenceDb};
pub use http::{build_router, run_server, ApiError};
pub use models::{Employee, EmployeeDocument, EmployeeId};
pub use state::AppState;
