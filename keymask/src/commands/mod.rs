//! Command implementations.

pub mod input;
pub mod mask;
pub mod scan;
