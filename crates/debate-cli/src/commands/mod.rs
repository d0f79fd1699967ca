//! CLI command implementations

pub mod categories;
pub mod classify;
pub mod play;
