//! Shared UI crate for Pulseboard. The filter-and-aggregate engine and all
//! cross-platform views live here; `web` and `desktop` are thin launchers.

pub mod analytics;
pub mod core;
pub mod dashboard;
pub mod views;
