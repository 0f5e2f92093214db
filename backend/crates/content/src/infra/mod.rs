//! Infrastructure Layer

pub mod fs;
pub mod memory;
