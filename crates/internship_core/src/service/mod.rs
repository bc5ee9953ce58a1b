//! Page controllers.
//!
//! # Responsibility
//! - Turn form submissions and row actions into store writes.
//! - Produce the views each page renders.
//!
//! # Invariants
//! - Controllers stay storage-agnostic; they only see `KeyValueStore`.
//! - Validation failures are silent no-ops, never errors.

pub mod company_service;
pub mod dashboard_service;
pub mod list_controller;
pub mod session_service;
