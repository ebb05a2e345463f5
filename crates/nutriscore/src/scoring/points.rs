use serde::{Deserialize, Serialize};

use super::tables::{tier_lookup, NutrientKind, PointsCategory};
use super::NutrientProfile;

/// Discrete contribution of one nutrient, kept so callers can audit a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub nutrient: NutrientKind,
    pub category: PointsCategory,
    pub tier: u8,
    pub notes: String,
}

pub(crate) fn tally_points(profile: &NutrientProfile) -> (Vec<ScoreComponent>, u8, u8) {
    let mut components = Vec::with_capacity(NutrientKind::ordered().len());
    let mut points_to_limit: u8 = 0;
    let mut points_to_favor: u8 = 0;

    for kind in NutrientKind::ordered() {
        let value = profile.value(kind);
        let tier = tier_lookup(value, kind);
        let category = kind.category();

        match category {
            PointsCategory::Limit => points_to_limit += tier,
            PointsCategory::Favor => points_to_favor += tier,
        }

        components.push(ScoreComponent {
            nutrient: kind,
            category,
            tier,
            notes: format!(
                "{value} {unit} of {label} places tier {tier} of {max}",
                unit = kind.unit(),
                label = kind.label(),
                max = kind.max_tier()
            ),
        });
    }

    (components, points_to_limit, points_to_favor)
}
