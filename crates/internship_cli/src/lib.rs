//! Terminal front-end for the internship evaluation tracker.
//!
//! The binary in `main.rs` only parses arguments; everything it runs lives
//! here so it can be driven against an in-memory store in tests.

pub mod commands;
pub mod render;
