//! Error types for the scenario engine

use thiserror::Error;

/// Errors surfaced by scenario projections and dashboard analytics
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// A simulation parameter was outside its valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A dispatch request named a scenario the engine does not know
    #[error("Unknown scenario type: {0}")]
    UnknownScenario(String),

    /// Error from the data layer
    #[error("Data error: {0}")]
    Data(#[from] insight_data::DataError),

    /// Error from the numeric building blocks
    #[error("Math error: {0}")]
    Math(#[from] insight_math::MathError),

    /// Malformed request or parameter payload
    #[error("Request error: {0}")]
    Request(#[from] serde_json::Error),
}

/// Result type for scenario operations
pub type Result<T> = std::result::Result<T, ScenarioError>;
