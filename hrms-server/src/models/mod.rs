//! Employee models
//!
//! `Employee` is what clients send and receive, `EmployeeDocument` is what
//! the collection stores, `EmployeeId` is a parsed path identifier.

pub mod employee;
pub mod id;

pub use employee::{Employee, EmployeeDocument};
pub use id::{EmployeeId, InvalidId};
