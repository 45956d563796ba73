//! Application state shared across handlers

use std::sync::Arc;

use crate::db::AbstractEmployees;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    employees: Arc<dyn AbstractEmployees>,
}

impl AppState {
    pub fn new(employees: Arc<dyn AbstractEmployees>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { employees }),
        }
    }

    pub fn employees(&self) -> &dyn AbstractEmployees {
        self.inner.employees.as_ref()
    }
}
