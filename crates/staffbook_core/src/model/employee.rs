//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical `(name, position, department)` record.
//! - Provide keyed field access for partial equality checks.
//!
//! # Invariants
//! - `name` acts as a lookup key but is not required to be unique.
//! - No field is validated; empty strings are legal values.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Wire key for [`EmployeeField::Name`].
pub const FIELD_NAME: &str = "name";
/// Wire key for [`EmployeeField::Position`].
pub const FIELD_POSITION: &str = "position";
/// Wire key for [`EmployeeField::Department`].
pub const FIELD_DEPARTMENT: &str = "department";

/// One staff directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Lookup key for update/delete/merge.
    pub name: String,
    pub position: String,
    pub department: String,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        department: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            department: department.into(),
        }
    }

    /// Returns the value stored under `field`.
    pub fn get(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::Name => self.name.as_str(),
            EmployeeField::Position => self.position.as_str(),
            EmployeeField::Department => self.department.as_str(),
        }
    }

    /// Looks up a field by its wire key.
    ///
    /// Unknown keys resolve to `None` rather than an error, so two records
    /// always agree on a key neither of them has.
    pub fn field(&self, key: &str) -> Option<&str> {
        key.parse::<EmployeeField>()
            .ok()
            .map(|field| self.get(field))
    }

    /// Returns a copy with `name` uppercased and `department` lowercased.
    pub fn to_formatted(&self) -> Self {
        Self {
            name: self.name.to_uppercase(),
            position: self.position.clone(),
            department: self.department.to_lowercase(),
        }
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.position, self.department)
    }
}

/// Comparable keys of an [`Employee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    Name,
    Position,
    Department,
}

impl EmployeeField {
    /// Every field in declaration order.
    pub const ALL: [EmployeeField; 3] = [Self::Name, Self::Position, Self::Department];

    /// Stable wire key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => FIELD_NAME,
            Self::Position => FIELD_POSITION,
            Self::Department => FIELD_DEPARTMENT,
        }
    }
}

impl FromStr for EmployeeField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            FIELD_NAME => Ok(Self::Name),
            FIELD_POSITION => Ok(Self::Position),
            FIELD_DEPARTMENT => Ok(Self::Department),
            other => Err(UnknownFieldError(other.to_string())),
        }
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key did not name any employee field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFieldError(pub String);

impl Display for UnknownFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown employee field `{}`; expected name|position|department",
            self.0
        )
    }
}

impl Error for UnknownFieldError {}
