//! Product-table ingestion, missing-value repair, and data-quality audits.

mod fill;
mod parser;
mod quality;
mod record;

pub use fill::{fill_dataset, fill_missing, FillOutcome, FillSummary};
pub use quality::{
    count_columns_above_missing_threshold, missing_rate_per_column, MissingRateEntry,
    QualityReport, DEFAULT_MISSING_THRESHOLD_PCT,
};
pub use record::{DatasetColumn, ProductRecord};

use std::io::{Read, Write};
use std::path::Path;

use crate::scoring::ParseGradeError;

/// Errors raised while reading, repairing, or auditing a product table.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read product table: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid product CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    InvalidGrade(#[from] ParseGradeError),
    #[error("unparseable nutrition score '{value}'")]
    InvalidScore { value: String },
    #[error("record is missing required nutrient column '{column}'")]
    MissingNutrient { column: &'static str },
    #[error("cannot report on an empty product table")]
    EmptyDataset,
}

/// Loads product tables from CSV exports.
pub struct ProductTableImporter;

impl ProductTableImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRecord>, DatasetError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ProductRecord>, DatasetError> {
        parser::parse_records(reader)
    }
}

/// Write a product table with the canonical column order, absent values as
/// empty cells.
pub fn write_records<W: Write>(records: &[ProductRecord], writer: W) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(DatasetColumn::ordered().map(DatasetColumn::header))?;
    for record in records {
        csv_writer.write_record([
            record.product_name.clone().unwrap_or_default(),
            format_number(record.energy_100g),
            format_number(record.saturated_fat_100g),
            format_number(record.sugars_100g),
            format_number(record.fiber_100g),
            format_number(record.proteins_100g),
            format_number(record.sodium_100g),
            record
                .nutrition_score_fr_100g
                .map(|score| score.to_string())
                .unwrap_or_default(),
            record
                .nutrition_grade_fr
                .map(|grade| grade.to_string())
                .unwrap_or_default(),
        ])?;
    }
    csv_writer.flush()?;

    Ok(())
}

fn format_number(value: Option<f64>) -> String {
    value.map(|number| number.to_string()).unwrap_or_default()
}
