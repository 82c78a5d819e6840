//! CSV ingestion for the dashboard datasets
//!
//! Each dataset ships as a headered CSV, the same files the managed
//! query service reads from object storage. Loading goes through
//! serde, so column names must match the record fields; extra columns
//! are ignored.

use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::records::{FinanceRecord, LogisticsRecord, SalesRecord};
use crate::Result;

/// Reads dashboard dataset exports from disk.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load logistics shipments from a CSV file.
    pub fn logistics_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<LogisticsRecord>> {
        Self::records_from_csv(path)
    }

    /// Load sales orders from a CSV file.
    pub fn sales_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<SalesRecord>> {
        Self::records_from_csv(path)
    }

    /// Load finance entries from a CSV file.
    pub fn finance_from_csv<P: AsRef<Path>>(path: P) -> Result<Vec<FinanceRecord>> {
        Self::records_from_csv(path)
    }

    fn records_from_csv<P: AsRef<Path>, R: DeserializeOwned>(path: P) -> Result<Vec<R>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_logistics_csv() {
        let file = write_csv(
            "date,region,route_id,fuel_used_l,fuel_price_per_l,delay_hr,shipment_volume_tons\n\
             2024-01-01,Toronto,R-001,400.0,1.5,2.0,18.0\n\
             2024-01-02,Vancouver,R-002,350.0,1.6,0.5,12.5\n",
        );
        let records = DatasetLoader::logistics_from_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region, "Toronto");
        assert_eq!(records[0].fuel_cost(), 600.0);
        assert_eq!(records[1].route_id, "R-002");
    }

    #[test]
    fn test_load_sales_csv() {
        let file = write_csv(
            "date,order_id,product_id,region,units_sold,unit_price,revenue\n\
             2024-01-01,ORD-00001,P-01,Toronto,2,50.0,100.0\n",
        );
        let records = DatasetLoader::sales_from_csv(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "ORD-00001");
        assert_eq!(records[0].revenue, 100.0);
    }

    #[test]
    fn test_load_finance_csv_without_category_column() {
        let file = write_csv(
            "date,amount\n\
             2024-01-01,5200.0\n\
             2024-01-02,4100.0\n",
        );
        let records = DatasetLoader::finance_from_csv(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, None);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = DatasetLoader::sales_from_csv("/nonexistent/sales.csv");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let file = write_csv(
            "date,amount\n\
             2024-01-01,not-a-number\n",
        );
        let result = DatasetLoader::finance_from_csv(file.path());
        assert!(matches!(result, Err(DataError::Csv(_))));
    }
}
