//! CLI library components for the FARS explorer.

pub mod logging;
pub mod summary;
