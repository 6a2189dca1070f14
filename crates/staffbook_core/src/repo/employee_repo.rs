//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide create/read/update/delete over an ordered employee sequence.
//! - Provide derived helpers: formatting, merge, department listing and
//!   partial equality.
//!
//! # Invariants
//! - `delete` leaves a `None` tombstone in place; slot count never shrinks.
//! - `update` touches every live record with the given name; `delete` and
//!   `merge` look at the first live match only.
//! - Tombstones are skipped by every name lookup and carried through every
//!   full-sequence rewrite.

use crate::model::employee::{Employee, EmployeeField};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One store position: a live record or the tombstone of a deleted one.
pub type EmployeeSlot = Option<Employee>;

/// Read capability required from a merge partner.
///
/// Anything that can list live employees in order can be merged into a store.
pub trait EmployeeSource {
    fn live_employees(&self) -> Box<dyn Iterator<Item = &Employee> + '_>;
}

impl EmployeeSource for Vec<Employee> {
    fn live_employees(&self) -> Box<dyn Iterator<Item = &Employee> + '_> {
        Box::new(self.iter())
    }
}

/// Repository interface for employee store operations.
pub trait EmployeeRepository {
    /// Appends a record. Duplicate names are accepted.
    fn create(&mut self, name: &str, position: &str, department: &str);
    /// Returns every slot, tombstones included, in store order.
    fn read(&self) -> &[EmployeeSlot];
    /// Overwrites `position`/`department` on every live record named `name`
    /// for each argument that is `Some`. Returns the number of matches.
    fn update(&mut self, name: &str, position: Option<&str>, department: Option<&str>) -> usize;
    /// Tombstones the first live record named `name` and returns it.
    fn delete(&mut self, name: &str) -> Option<Employee>;
    /// Uppercases names and lowercases departments of all live records.
    fn formatted(&mut self);
    /// Appends records from `other` whose names are not yet live here.
    /// Returns the number appended.
    fn merge(&mut self, other: &dyn EmployeeSource) -> usize;
    /// Distinct departments in first-seen order.
    fn unique_departments(&self) -> Vec<String>;
}

/// Vector-backed employee store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InMemoryEmployeeRepository {
    slots: Vec<EmployeeSlot>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates live records, skipping tombstones.
    pub fn employees(&self) -> impl Iterator<Item = &Employee> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of slots, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of live records.
    pub fn live_count(&self) -> usize {
        self.employees().count()
    }

    /// Drops every slot, tombstones included.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// True iff `a` and `b` agree on every key in `keys`.
    ///
    /// Keys are wire names (`name`, `position`, `department`). A key that
    /// names no field resolves to nothing on both sides and therefore agrees.
    /// An empty key list is vacuously true.
    pub fn is_equal(a: &Employee, b: &Employee, keys: &[&str]) -> bool {
        keys.iter().all(|key| a.field(key) == b.field(key))
    }

    /// Typed form of [`Self::is_equal`].
    pub fn is_equal_by(a: &Employee, b: &Employee, fields: &[EmployeeField]) -> bool {
        fields.iter().all(|field| a.get(*field) == b.get(*field))
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(employee) if employee.name == name))
    }

    fn contains_name(&self, name: &str) -> bool {
        self.position_of(name).is_some()
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn create(&mut self, name: &str, position: &str, department: &str) {
        self.slots
            .push(Some(Employee::new(name, position, department)));
    }

    fn read(&self) -> &[EmployeeSlot] {
        &self.slots
    }

    fn update(&mut self, name: &str, position: Option<&str>, department: Option<&str>) -> usize {
        let mut matched = 0;
        for employee in self.slots.iter_mut().flatten() {
            if employee.name != name {
                continue;
            }
            matched += 1;
            if let Some(position) = position {
                employee.position = position.to_string();
            }
            if let Some(department) = department {
                employee.department = department.to_string();
            }
        }
        matched
    }

    fn delete(&mut self, name: &str) -> Option<Employee> {
        let index = self.position_of(name)?;
        self.slots[index].take()
    }

    fn formatted(&mut self) {
        for employee in self.slots.iter_mut().flatten() {
            *employee = employee.to_formatted();
        }
    }

    fn merge(&mut self, other: &dyn EmployeeSource) -> usize {
        let mut appended = 0;
        for employee in other.live_employees() {
            if self.contains_name(&employee.name) {
                continue;
            }
            self.slots.push(Some(employee.clone()));
            appended += 1;
        }
        appended
    }

    fn unique_departments(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.employees()
            .filter(|employee| seen.insert(employee.department.as_str()))
            .map(|employee| employee.department.clone())
            .collect()
    }
}

impl EmployeeSource for InMemoryEmployeeRepository {
    fn live_employees(&self) -> Box<dyn Iterator<Item = &Employee> + '_> {
        Box::new(self.employees())
    }
}

impl FromIterator<Employee> for InMemoryEmployeeRepository {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}
