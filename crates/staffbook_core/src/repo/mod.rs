//! Repository layer abstractions and the in-memory store.
//!
//! # Responsibility
//! - Define the record-store contract used by service orchestration.
//! - Own tombstone bookkeeping for deleted slots.
//!
//! # Invariants
//! - Store operations never fail; unmatched names are silent no-ops.
//! - Slot order is insertion order and deletes never shift later slots.

pub mod employee_repo;
