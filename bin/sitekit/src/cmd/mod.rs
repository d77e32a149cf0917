//! CLI command implementations.

pub mod check;
pub mod new;
pub mod types;
