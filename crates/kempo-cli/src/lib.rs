//! CLI library components for the premium table converter.

pub mod convert;
pub mod logging;
pub mod types;
