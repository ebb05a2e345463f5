use crate::scoring::NutrientProfile;

pub(super) fn profile(
    energy_kj: f64,
    saturated_fat_g: f64,
    sugars_g: f64,
    fiber_g: f64,
    proteins_g: f64,
    sodium_mg: f64,
) -> NutrientProfile {
    NutrientProfile {
        energy_kj,
        saturated_fat_g,
        sugars_g,
        fiber_g,
        proteins_g,
        sodium_mg,
    }
}

/// Mid-range profile used by several engine tests: limit points 4, favor
/// points 7, score -3.
pub(super) fn cereal_profile() -> NutrientProfile {
    profile(500.0, 2.0, 5.0, 3.0, 5.0, 100.0)
}
