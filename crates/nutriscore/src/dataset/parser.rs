use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::record::ProductRecord;
use super::DatasetError;
use crate::scoring::NutriGrade;

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ProductRecord>, DatasetError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ProductRow>() {
        records.push(row?.into_record()?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ProductRow {
    #[serde(
        rename = "product_name",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    product_name: Option<String>,
    #[serde(rename = "energy_100g", default)]
    energy_100g: Option<f64>,
    #[serde(rename = "saturated_fat_100g", default)]
    saturated_fat_100g: Option<f64>,
    #[serde(rename = "sugars_100g", default)]
    sugars_100g: Option<f64>,
    #[serde(rename = "fiber_100g", default)]
    fiber_100g: Option<f64>,
    #[serde(rename = "proteins_100g", default)]
    proteins_100g: Option<f64>,
    #[serde(rename = "sodium_100g", default)]
    sodium_100g: Option<f64>,
    #[serde(
        rename = "nutrition_score_fr_100g",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    nutrition_score_fr_100g: Option<String>,
    #[serde(
        rename = "nutrition_grade_fr",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    nutrition_grade_fr: Option<String>,
}

impl ProductRow {
    fn into_record(self) -> Result<ProductRecord, DatasetError> {
        let nutrition_score_fr_100g = self
            .nutrition_score_fr_100g
            .as_deref()
            .map(parse_score)
            .transpose()?;
        let nutrition_grade_fr = self
            .nutrition_grade_fr
            .as_deref()
            .map(|raw| raw.parse::<NutriGrade>())
            .transpose()?;

        Ok(ProductRecord {
            product_name: self.product_name,
            energy_100g: self.energy_100g,
            saturated_fat_100g: self.saturated_fat_100g,
            sugars_100g: self.sugars_100g,
            fiber_100g: self.fiber_100g,
            proteins_100g: self.proteins_100g,
            sodium_100g: self.sodium_100g,
            nutrition_score_fr_100g,
            nutrition_grade_fr,
        })
    }
}

/// Score columns in the wild carry integral values with a float spelling
/// ("14.0"); accept those, reject anything fractional or out of range.
fn parse_score(raw: &str) -> Result<i16, DatasetError> {
    let invalid = || DatasetError::InvalidScore {
        value: raw.to_string(),
    };

    let value: f64 = raw.parse().map_err(|_| invalid())?;
    if !value.is_finite()
        || value.fract() != 0.0
        || value < f64::from(i16::MIN)
        || value > f64::from(i16::MAX)
    {
        return Err(invalid());
    }

    Ok(value as i16)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
pub(crate) fn parse_score_for_tests(raw: &str) -> Result<i16, DatasetError> {
    parse_score(raw)
}
