//! Domain Layer

pub mod llm;
pub mod services;
