use serde::{Deserialize, Serialize};

use super::DatasetError;
use crate::scoring::{NutriGrade, NutrientKind, NutrientProfile};

/// One row of a product table. Every column may be absent; missingness is a
/// first-class state rather than a sentinel value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub product_name: Option<String>,
    pub energy_100g: Option<f64>,
    pub saturated_fat_100g: Option<f64>,
    pub sugars_100g: Option<f64>,
    pub fiber_100g: Option<f64>,
    pub proteins_100g: Option<f64>,
    pub sodium_100g: Option<f64>,
    pub nutrition_score_fr_100g: Option<i16>,
    pub nutrition_grade_fr: Option<NutriGrade>,
}

impl ProductRecord {
    /// Extract the six nutrient inputs the engine needs, failing on the
    /// first absent column.
    pub fn profile(&self) -> Result<NutrientProfile, DatasetError> {
        Ok(NutrientProfile {
            energy_kj: self.nutrient(NutrientKind::Energy)?,
            saturated_fat_g: self.nutrient(NutrientKind::SaturatedFat)?,
            sugars_g: self.nutrient(NutrientKind::Sugars)?,
            fiber_g: self.nutrient(NutrientKind::Fiber)?,
            proteins_g: self.nutrient(NutrientKind::Proteins)?,
            sodium_mg: self.nutrient(NutrientKind::Sodium)?,
        })
    }

    fn nutrient(&self, kind: NutrientKind) -> Result<f64, DatasetError> {
        let column = DatasetColumn::for_nutrient(kind);
        let value = match kind {
            NutrientKind::Energy => self.energy_100g,
            NutrientKind::SaturatedFat => self.saturated_fat_100g,
            NutrientKind::Sugars => self.sugars_100g,
            NutrientKind::Fiber => self.fiber_100g,
            NutrientKind::Proteins => self.proteins_100g,
            NutrientKind::Sodium => self.sodium_100g,
        };

        value.ok_or(DatasetError::MissingNutrient {
            column: column.header(),
        })
    }
}

/// Columns of the product table, in dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetColumn {
    ProductName,
    Energy,
    SaturatedFat,
    Sugars,
    Fiber,
    Proteins,
    Sodium,
    NutritionScore,
    NutritionGrade,
}

impl DatasetColumn {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::ProductName,
            Self::Energy,
            Self::SaturatedFat,
            Self::Sugars,
            Self::Fiber,
            Self::Proteins,
            Self::Sodium,
            Self::NutritionScore,
            Self::NutritionGrade,
        ]
    }

    /// Header name used by the CSV exports this table is read from.
    pub const fn header(self) -> &'static str {
        match self {
            Self::ProductName => "product_name",
            Self::Energy => "energy_100g",
            Self::SaturatedFat => "saturated_fat_100g",
            Self::Sugars => "sugars_100g",
            Self::Fiber => "fiber_100g",
            Self::Proteins => "proteins_100g",
            Self::Sodium => "sodium_100g",
            Self::NutritionScore => "nutrition_score_fr_100g",
            Self::NutritionGrade => "nutrition_grade_fr",
        }
    }

    pub const fn for_nutrient(kind: NutrientKind) -> Self {
        match kind {
            NutrientKind::Energy => Self::Energy,
            NutrientKind::SaturatedFat => Self::SaturatedFat,
            NutrientKind::Sugars => Self::Sugars,
            NutrientKind::Fiber => Self::Fiber,
            NutrientKind::Proteins => Self::Proteins,
            NutrientKind::Sodium => Self::Sodium,
        }
    }

    pub fn is_missing(self, record: &ProductRecord) -> bool {
        match self {
            Self::ProductName => record.product_name.is_none(),
            Self::Energy => record.energy_100g.is_none(),
            Self::SaturatedFat => record.saturated_fat_100g.is_none(),
            Self::Sugars => record.sugars_100g.is_none(),
            Self::Fiber => record.fiber_100g.is_none(),
            Self::Proteins => record.proteins_100g.is_none(),
            Self::Sodium => record.sodium_100g.is_none(),
            Self::NutritionScore => record.nutrition_score_fr_100g.is_none(),
            Self::NutritionGrade => record.nutrition_grade_fr.is_none(),
        }
    }
}
