//! Domain model for the staff directory.
//!
//! # Responsibility
//! - Define the employee record shared by repository and service layers.
//! - Name the record keys that partial equality can compare on.
//!
//! # Invariants
//! - Records are replaced wholesale; no layer edits a shared record in place.
//! - Deletion is represented by store-level tombstones, not by a record flag.

pub mod employee;
