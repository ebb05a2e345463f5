//! Nutri-Score classification: breakpoint tables, point tallies, and grades.

mod grade;
mod points;
mod tables;

#[cfg(test)]
mod tests;

pub use grade::{NutriGrade, ParseGradeError};
pub use points::ScoreComponent;
pub use tables::{tier_lookup, NutrientKind, PointsCategory, TierBoundary};

use serde::{Deserialize, Serialize};

/// Per-100g nutrient values supplied for one product. Transient input; the
/// engine trusts the caller to hand it numeric data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub energy_kj: f64,
    pub saturated_fat_g: f64,
    pub sugars_g: f64,
    pub fiber_g: f64,
    pub proteins_g: f64,
    pub sodium_mg: f64,
}

impl NutrientProfile {
    pub(crate) fn value(&self, kind: NutrientKind) -> f64 {
        match kind {
            NutrientKind::Energy => self.energy_kj,
            NutrientKind::SaturatedFat => self.saturated_fat_g,
            NutrientKind::Sugars => self.sugars_g,
            NutrientKind::Fiber => self.fiber_g,
            NutrientKind::Proteins => self.proteins_g,
            NutrientKind::Sodium => self.sodium_mg,
        }
    }
}

/// Score, grade, point totals, and per-nutrient audit trail for one profile.
///
/// The grade is always derived from the score computed in the same call, so
/// the pair cannot be returned inconsistently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutcome {
    pub score: i16,
    pub grade: NutriGrade,
    pub points_to_limit: u8,
    pub points_to_favor: u8,
    pub components: Vec<ScoreComponent>,
}

/// Score a nutrient profile. Pure and deterministic; total over all real
/// inputs.
pub fn evaluate(profile: &NutrientProfile) -> ScoreOutcome {
    let (components, points_to_limit, points_to_favor) = points::tally_points(profile);
    let score = i16::from(points_to_limit) - i16::from(points_to_favor);
    let grade = NutriGrade::from_score(score);

    ScoreOutcome {
        score,
        grade,
        points_to_limit,
        points_to_favor,
        components,
    }
}

/// Convenience wrapper returning only the (score, grade) pair.
pub fn compute_score_and_grade(
    energy_kj: f64,
    saturated_fat_g: f64,
    sugars_g: f64,
    fiber_g: f64,
    proteins_g: f64,
    sodium_mg: f64,
) -> (i16, NutriGrade) {
    let outcome = evaluate(&NutrientProfile {
        energy_kj,
        saturated_fat_g,
        sugars_g,
        fiber_g,
        proteins_g,
        sodium_mg,
    });

    (outcome.score, outcome.grade)
}
