use serde::{Deserialize, Serialize};

/// Nutrients participating in the Nutri-Score computation, per 100g of product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientKind {
    Energy,
    SaturatedFat,
    Sugars,
    Fiber,
    Proteins,
    Sodium,
}

/// Whether a nutrient's tier counts toward or against the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsCategory {
    Limit,
    Favor,
}

/// Interval convention used when matching a value against a breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierBoundary {
    /// `(lower, upper]` intervals: a value sitting exactly on a breakpoint
    /// belongs to the lower tier.
    OpenLowClosedHigh,
    /// `[lower, upper]` intervals scanned in ascending order, first match
    /// wins. The overlap at each breakpoint therefore also resolves to the
    /// lower tier.
    ClosedFirstMatch,
}

const ENERGY_KJ: &[f64] = &[
    335.0, 670.0, 1005.0, 1340.0, 1675.0, 2010.0, 2345.0, 2680.0, 3015.0, 3350.0,
];
const SUGARS_G: &[f64] = &[4.5, 9.0, 13.5, 18.0, 22.5, 27.0, 31.0, 36.0, 40.0, 45.0];
const SATURATED_FAT_G: &[f64] = &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
const SODIUM_MG: &[f64] = &[90.0, 180.0, 270.0, 360.0, 450.0, 540.0, 630.0, 720.0, 810.0, 900.0];
const FIBER_G: &[f64] = &[0.7, 1.4, 2.1, 2.8, 3.5];
const PROTEINS_G: &[f64] = &[1.6, 3.2, 4.8, 6.4, 8.0];

impl NutrientKind {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Energy,
            Self::SaturatedFat,
            Self::Sugars,
            Self::Fiber,
            Self::Proteins,
            Self::Sodium,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Energy => "energy",
            Self::SaturatedFat => "saturated fat",
            Self::Sugars => "sugars",
            Self::Fiber => "fiber",
            Self::Proteins => "proteins",
            Self::Sodium => "sodium",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Energy => "kJ",
            Self::Sodium => "mg",
            Self::SaturatedFat | Self::Sugars | Self::Fiber | Self::Proteins => "g",
        }
    }

    pub const fn category(self) -> PointsCategory {
        match self {
            Self::Energy | Self::SaturatedFat | Self::Sugars | Self::Sodium => {
                PointsCategory::Limit
            }
            Self::Fiber | Self::Proteins => PointsCategory::Favor,
        }
    }

    pub const fn breakpoints(self) -> &'static [f64] {
        match self {
            Self::Energy => ENERGY_KJ,
            Self::SaturatedFat => SATURATED_FAT_G,
            Self::Sugars => SUGARS_G,
            Self::Sodium => SODIUM_MG,
            Self::Fiber => FIBER_G,
            Self::Proteins => PROTEINS_G,
        }
    }

    pub const fn boundary(self) -> TierBoundary {
        match self.category() {
            PointsCategory::Limit => TierBoundary::OpenLowClosedHigh,
            PointsCategory::Favor => TierBoundary::ClosedFirstMatch,
        }
    }

    /// Highest tier the table can produce: 10 for limit nutrients, 5 for
    /// favor nutrients.
    pub const fn max_tier(self) -> u8 {
        self.breakpoints().len() as u8
    }
}

pub(crate) fn tier(value: f64, breakpoints: &[f64], boundary: TierBoundary) -> u8 {
    match boundary {
        TierBoundary::OpenLowClosedHigh => breakpoints
            .iter()
            .position(|bound| value <= *bound)
            .unwrap_or(breakpoints.len()) as u8,
        TierBoundary::ClosedFirstMatch => {
            let mut lower = f64::NEG_INFINITY;
            for (index, bound) in breakpoints.iter().enumerate() {
                if lower <= value && value <= *bound {
                    return index as u8;
                }
                lower = *bound;
            }
            breakpoints.len() as u8
        }
    }
}

/// Tier index a nutrient value falls into, in `0..=max_tier` for its table.
///
/// Total over all reals; negative inputs land in tier 0.
pub fn tier_lookup(value: f64, kind: NutrientKind) -> u8 {
    tier(value, kind.breakpoints(), kind.boundary())
}
