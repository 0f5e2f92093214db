//! Infrastructure Layer

pub mod anthropic;
