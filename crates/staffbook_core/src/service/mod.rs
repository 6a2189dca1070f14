//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Serialize concurrent callers around one repository instance.

pub mod employee_service;
