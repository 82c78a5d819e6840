//! # Insight Data
//!
//! Typed historical records for the InsightsGrid dashboard: logistics
//! shipments, sales orders and finance entries, plus CSV ingestion,
//! observation-series extraction and deterministic synthetic fixtures
//! for demos and tests.
//!
//! The managed query service that materializes these records from
//! object storage lives outside this workspace; callers hand over
//! plain in-memory collections.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use insight_data::{series, synthetic};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let shipments = synthetic::logistics_fixture(7, start, 30);
//!
//! let costs = series::fuel_costs(&shipments);
//! assert_eq!(costs.len(), 30);
//! assert!(costs.iter().all(|c| c.is_finite() && *c > 0.0));
//! ```

use thiserror::Error;

pub mod loader;
pub mod records;
pub mod series;
pub mod synthetic;

pub use loader::DatasetLoader;
pub use records::{FinanceRecord, LogisticsRecord, SalesRecord};

/// Errors that can occur while loading dashboard records
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error opening a dataset file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV content or a row that does not match the record
    /// shape
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for data-layer operations
pub type Result<T> = std::result::Result<T, DataError>;
