use serde::Serialize;

use super::record::ProductRecord;
use super::DatasetError;
use crate::scoring;

/// What `fill_missing` did to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillOutcome {
    Unchanged,
    FilledScore,
    FilledGrade,
    FilledBoth,
}

/// Fill absent score/grade columns from the record's nutrient inputs.
///
/// Present values pass through untouched, even when score and grade disagree
/// with each other. Both columns are derived from a single engine invocation,
/// so a pair written here can never disagree.
pub fn fill_missing(record: &mut ProductRecord) -> Result<FillOutcome, DatasetError> {
    let outcome = match (
        record.nutrition_score_fr_100g.is_none(),
        record.nutrition_grade_fr.is_none(),
    ) {
        (false, false) => return Ok(FillOutcome::Unchanged),
        (true, false) => FillOutcome::FilledScore,
        (false, true) => FillOutcome::FilledGrade,
        (true, true) => FillOutcome::FilledBoth,
    };

    let computed = scoring::evaluate(&record.profile()?);
    if record.nutrition_score_fr_100g.is_none() {
        record.nutrition_score_fr_100g = Some(computed.score);
    }
    if record.nutrition_grade_fr.is_none() {
        record.nutrition_grade_fr = Some(computed.grade);
    }

    Ok(outcome)
}

/// Aggregate counts from a whole-table fill pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FillSummary {
    pub records: usize,
    pub scores_filled: usize,
    pub grades_filled: usize,
    pub untouched: usize,
}

/// Run `fill_missing` over every record in the table.
///
/// Records are independent; the first record whose required nutrients are
/// absent aborts the pass with that record's error.
pub fn fill_dataset(records: &mut [ProductRecord]) -> Result<FillSummary, DatasetError> {
    let mut summary = FillSummary {
        records: records.len(),
        ..FillSummary::default()
    };

    for record in records.iter_mut() {
        match fill_missing(record)? {
            FillOutcome::Unchanged => summary.untouched += 1,
            FillOutcome::FilledScore => summary.scores_filled += 1,
            FillOutcome::FilledGrade => summary.grades_filled += 1,
            FillOutcome::FilledBoth => {
                summary.scores_filled += 1;
                summary.grades_filled += 1;
            }
        }
    }

    Ok(summary)
}
