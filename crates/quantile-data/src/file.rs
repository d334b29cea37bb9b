//! CSV-backed price provider for EOD loads and tests.

use crate::error::{DataError, DataResult};
use crate::provider::PriceProvider;
use chrono::NaiveDate;
use quantile_core::types::PricePoint;
use quantile_core::PriceHistory;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Reads prices from a wide CSV file: a leading date column (ISO 8601)
/// followed by one column per ticker. Empty cells are missing
/// observations.
///
/// ```csv
/// date,AAPL,MSFT
/// 2025-01-02,243.85,424.56
/// 2025-01-03,,421.50
/// ```
///
/// The provider reports unconfigured when the file does not exist, so a
/// chain skips it without error.
pub struct CsvPriceProvider {
    path: PathBuf,
}

impl CsvPriceProvider {
    /// Creates a provider reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceProvider for CsvPriceProvider {
    fn name(&self) -> &str {
        "csv"
    }

    fn is_configured(&self) -> bool {
        self.path.exists()
    }

    fn fetch_history(&self, tickers: &[String], days: usize) -> DataResult<PriceHistory> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)?;

        // Header: date column first, ticker columns after; keep only the
        // requested tickers, in file column order.
        let header = reader.headers()?.clone();
        let columns: Vec<(usize, String)> = header
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, name)| tickers.iter().any(|t| t == name))
            .map(|(index, name)| (index, name.to_string()))
            .collect();
        if columns.is_empty() {
            return Err(DataError::no_data(self.name()));
        }

        let mut observations = Vec::new();
        for (row, record) in reader.records().enumerate() {
            let record = record?;
            let date_cell = record.get(0).unwrap_or_default();
            let date = NaiveDate::parse_from_str(date_cell, "%Y-%m-%d")
                .map_err(|_| DataError::invalid_date(row, date_cell))?;

            let mut prices = HashMap::with_capacity(columns.len());
            for (index, ticker) in &columns {
                match record.get(*index) {
                    Some("") | None => {}
                    Some(cell) => {
                        let value: f64 = cell
                            .parse()
                            .map_err(|_| DataError::invalid_price(row, ticker.clone(), cell))?;
                        prices.insert(ticker.clone(), value);
                    }
                }
            }
            observations.push(PricePoint::new(date, prices));
        }

        if observations.len() > days {
            observations.drain(..observations.len() - days);
        }

        let tickers: Vec<String> = columns.into_iter().map(|(_, name)| name).collect();
        Ok(PriceHistory::new(tickers, observations)?)
    }
}
