use serde::Serialize;
use std::collections::BTreeMap;

use super::record::{DatasetColumn, ProductRecord};
use super::DatasetError;

/// Threshold applied when the caller does not supply one.
pub const DEFAULT_MISSING_THRESHOLD_PCT: f64 = 50.0;

/// Missing-value share for one column of the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissingRateEntry {
    pub column: DatasetColumn,
    pub header: &'static str,
    pub missing: usize,
    pub total: usize,
    pub rate_pct: f64,
    pub formatted: String,
}

/// Per-column missing-value rates, in dataset column order.
pub fn missing_rate_per_column(
    records: &[ProductRecord],
) -> Result<Vec<MissingRateEntry>, DatasetError> {
    if records.is_empty() {
        return Err(DatasetError::EmptyDataset);
    }

    let total = records.len();
    let entries = DatasetColumn::ordered()
        .into_iter()
        .map(|column| {
            let missing = records
                .iter()
                .filter(|record| column.is_missing(record))
                .count();
            let rate_pct = missing as f64 / total as f64 * 100.0;

            MissingRateEntry {
                column,
                header: column.header(),
                missing,
                total,
                rate_pct,
                formatted: format_rate(rate_pct),
            }
        })
        .collect();

    Ok(entries)
}

/// Number of columns whose missing rate strictly exceeds the threshold.
///
/// A column sitting exactly on the threshold is not counted.
pub fn count_columns_above_missing_threshold(
    records: &[ProductRecord],
    threshold_pct: f64,
) -> Result<usize, DatasetError> {
    let entries = missing_rate_per_column(records)?;
    Ok(entries
        .iter()
        .filter(|entry| entry.rate_pct > threshold_pct)
        .count())
}

fn format_rate(rate_pct: f64) -> String {
    format!("{rate_pct:.2} %")
}

/// Whole-table data-quality report bundling the entries with the flag count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityReport {
    pub threshold_pct: f64,
    pub entries: Vec<MissingRateEntry>,
    pub flagged_columns: usize,
}

impl QualityReport {
    pub fn compute(records: &[ProductRecord], threshold_pct: f64) -> Result<Self, DatasetError> {
        let entries = missing_rate_per_column(records)?;
        let flagged_columns = entries
            .iter()
            .filter(|entry| entry.rate_pct > threshold_pct)
            .count();

        Ok(Self {
            threshold_pct,
            entries,
            flagged_columns,
        })
    }

    /// Column-header to formatted-rate mapping, the shape the tabular
    /// reporting surface expects.
    pub fn formatted_rates(&self) -> BTreeMap<&'static str, String> {
        self.entries
            .iter()
            .map(|entry| (entry.header, entry.formatted.clone()))
            .collect()
    }
}
