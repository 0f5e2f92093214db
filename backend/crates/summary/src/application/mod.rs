//! Application Layer - Use Cases

pub mod config;
pub mod generate_summary;

pub use config::SummaryConfig;
pub use generate_summary::{
    Admission, GenerateSummaryInput, GenerateSummaryOutput, GenerateSummaryUseCase,
};
