//! Employee use-case service.
//!
//! # Responsibility
//! - Provide `&self` entry points that are safe to share across threads.
//! - Offer strict update/delete variants that report unmatched names.
//! - Emit metadata-only diagnostic events for every mutation.
//!
//! # Invariants
//! - All repository access goes through one `RwLock`; writes are exclusive.
//! - Reads hand out owned snapshots, never references into the store.
//! - Log lines carry counts and indexes only, never record contents.

use crate::model::employee::Employee;
use crate::repo::employee_repo::{EmployeeRepository, EmployeeSlot, EmployeeSource};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for employee use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No live employee carries the requested name.
    NotFound(String),
    /// A writer panicked while holding the store lock.
    LockPoisoned,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(name) => write!(f, "employee not found: `{name}`"),
            Self::LockPoisoned => write!(f, "employee store lock poisoned by a panicked writer"),
        }
    }
}

impl Error for ServiceError {}

/// Thread-safe service facade over a repository implementation.
pub struct EmployeeService<R: EmployeeRepository> {
    repo: RwLock<R>,
}

impl<R: EmployeeRepository> EmployeeService<R> {
    /// Creates a service that takes ownership of `repo`.
    pub fn new(repo: R) -> Self {
        Self {
            repo: RwLock::new(repo),
        }
    }

    /// Consumes the service and returns the wrapped repository.
    pub fn into_inner(self) -> ServiceResult<R> {
        self.repo.into_inner().map_err(|_| ServiceError::LockPoisoned)
    }

    /// Appends one employee.
    pub fn create_employee(
        &self,
        name: &str,
        position: &str,
        department: &str,
    ) -> ServiceResult<()> {
        let mut repo = self.write()?;
        repo.create(name, position, department);
        debug!(
            "event=employee_create module=service status=ok slots={}",
            repo.read().len()
        );
        Ok(())
    }

    /// Returns an owned copy of every slot, tombstones included.
    pub fn list_slots(&self) -> ServiceResult<Vec<EmployeeSlot>> {
        Ok(self.read()?.read().to_vec())
    }

    /// Returns an owned copy of the live employees in store order.
    pub fn list_employees(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.read()?.read().iter().flatten().cloned().collect())
    }

    /// Returns the first live employee named `name`.
    pub fn get_employee(&self, name: &str) -> ServiceResult<Option<Employee>> {
        Ok(self
            .read()?
            .read()
            .iter()
            .flatten()
            .find(|employee| employee.name == name)
            .cloned())
    }

    /// Updates every employee named `name`.
    ///
    /// # Errors
    /// - `NotFound` when no live employee carries `name`.
    pub fn update_employee(
        &self,
        name: &str,
        position: Option<&str>,
        department: Option<&str>,
    ) -> ServiceResult<usize> {
        let matched = self.write()?.update(name, position, department);
        if matched == 0 {
            debug!("event=employee_update module=service status=not_found");
            return Err(ServiceError::NotFound(name.to_string()));
        }
        debug!(
            "event=employee_update module=service status=ok matched={} position={} department={}",
            matched,
            position.is_some(),
            department.is_some()
        );
        Ok(matched)
    }

    /// Tombstones the first employee named `name` and returns it.
    ///
    /// # Errors
    /// - `NotFound` when no live employee carries `name`.
    pub fn delete_employee(&self, name: &str) -> ServiceResult<Employee> {
        match self.write()?.delete(name) {
            Some(removed) => {
                debug!("event=employee_delete module=service status=ok");
                Ok(removed)
            }
            None => {
                debug!("event=employee_delete module=service status=not_found");
                Err(ServiceError::NotFound(name.to_string()))
            }
        }
    }

    /// Applies display casing to every live employee.
    pub fn format_all(&self) -> ServiceResult<()> {
        self.write()?.formatted();
        debug!("event=employee_format module=service status=ok");
        Ok(())
    }

    /// Merges `other` into the store with left-side precedence.
    pub fn merge_from(&self, other: &dyn EmployeeSource) -> ServiceResult<usize> {
        let appended = self.write()?.merge(other);
        info!(
            "event=employee_merge module=service status=ok appended={}",
            appended
        );
        Ok(appended)
    }

    /// Distinct departments in first-seen order.
    pub fn unique_departments(&self) -> ServiceResult<Vec<String>> {
        Ok(self.read()?.unique_departments())
    }

    fn read(&self) -> ServiceResult<RwLockReadGuard<'_, R>> {
        self.repo.read().map_err(|_| ServiceError::LockPoisoned)
    }

    fn write(&self) -> ServiceResult<RwLockWriteGuard<'_, R>> {
        self.repo.write().map_err(|_| ServiceError::LockPoisoned)
    }
}

impl<R: EmployeeRepository + Clone> EmployeeService<R> {
    /// Returns an independent copy of the wrapped repository.
    pub fn snapshot(&self) -> ServiceResult<R> {
        let repo = self.read()?;
        Ok(R::clone(&repo))
    }
}
