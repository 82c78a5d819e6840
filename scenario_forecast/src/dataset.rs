//! Bundled dashboard datasets

use std::path::Path;

use chrono::NaiveDate;

use insight_data::{synthetic, DatasetLoader, FinanceRecord, LogisticsRecord, SalesRecord};

use crate::error::Result;

/// The three record collections behind the dashboard.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub logistics: Vec<LogisticsRecord>,
    pub sales: Vec<SalesRecord>,
    pub finance: Vec<FinanceRecord>,
}

impl Datasets {
    /// Load `logistics.csv`, `sales.csv` and `finance.csv` from one
    /// directory, the layout of a dashboard data export.
    pub fn from_csv_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        Ok(Datasets {
            logistics: DatasetLoader::logistics_from_csv(dir.join("logistics.csv"))?,
            sales: DatasetLoader::sales_from_csv(dir.join("sales.csv"))?,
            finance: DatasetLoader::finance_from_csv(dir.join("finance.csv"))?,
        })
    }

    /// Deterministic synthetic datasets, `days` records each, for
    /// demos and tests.
    pub fn synthetic(seed: u64, start: NaiveDate, days: usize) -> Self {
        Datasets {
            logistics: synthetic::logistics_fixture(seed, start, days),
            sales: synthetic::sales_fixture(seed.wrapping_add(1), start, days),
            finance: synthetic::finance_fixture(seed.wrapping_add(2), start, days),
        }
    }
}
