//! Flutter-facing bindings for the internship evaluation tracker core.

pub mod api;
