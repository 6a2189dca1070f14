//! Core domain logic for Staffbook.
//! This crate is the single source of truth for employee store invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{
    default_log_level, init_logging, logging_status, LoggingConfig, LoggingError,
};
pub use model::employee::{Employee, EmployeeField, UnknownFieldError};
pub use repo::employee_repo::{
    EmployeeRepository, EmployeeSlot, EmployeeSource, InMemoryEmployeeRepository,
};
pub use service::employee_service::{EmployeeService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
