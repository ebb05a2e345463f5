use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json};
use nutriscore::dataset::{
    fill_dataset, write_records, FillSummary, MissingRateEntry, ProductTableImporter,
    QualityReport, DEFAULT_MISSING_THRESHOLD_PCT,
};
use nutriscore::error::AppError;
use nutriscore::scoring::{self, NutriGrade, NutrientProfile, ScoreComponent};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/nutrition/score", post(score_endpoint))
        .route("/api/v1/nutrition/dataset/fill", post(dataset_fill_endpoint))
        .route(
            "/api/v1/nutrition/dataset/quality",
            post(dataset_quality_endpoint),
        )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScoreRequest {
    pub(crate) energy_100g: f64,
    pub(crate) saturated_fat_100g: f64,
    pub(crate) sugars_100g: f64,
    pub(crate) fiber_100g: f64,
    pub(crate) proteins_100g: f64,
    pub(crate) sodium_100g: f64,
}

impl ScoreRequest {
    fn profile(&self) -> NutrientProfile {
        NutrientProfile {
            energy_kj: self.energy_100g,
            saturated_fat_g: self.saturated_fat_100g,
            sugars_g: self.sugars_100g,
            fiber_g: self.fiber_100g,
            proteins_g: self.proteins_100g,
            sodium_mg: self.sodium_100g,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ScoreResponse {
    pub(crate) score: i16,
    pub(crate) grade: NutriGrade,
    pub(crate) points_to_limit: u8,
    pub(crate) points_to_favor: u8,
    pub(crate) components: Vec<ScoreComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DatasetFillRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatasetFillResponse {
    pub(crate) summary: FillSummary,
    pub(crate) csv: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DatasetQualityRequest {
    pub(crate) csv: String,
    #[serde(default = "default_threshold")]
    pub(crate) threshold_pct: f64,
}

fn default_threshold() -> f64 {
    DEFAULT_MISSING_THRESHOLD_PCT
}

#[derive(Debug, Serialize)]
pub(crate) struct DatasetQualityResponse {
    pub(crate) threshold_pct: f64,
    pub(crate) columns: Vec<MissingRateEntry>,
    pub(crate) flagged_columns: usize,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn score_endpoint(Json(payload): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let outcome = scoring::evaluate(&payload.profile());

    Json(ScoreResponse {
        score: outcome.score,
        grade: outcome.grade,
        points_to_limit: outcome.points_to_limit,
        points_to_favor: outcome.points_to_favor,
        components: outcome.components,
    })
}

pub(crate) async fn dataset_fill_endpoint(
    Json(payload): Json<DatasetFillRequest>,
) -> Result<Json<DatasetFillResponse>, AppError> {
    let mut records = ProductTableImporter::from_reader(Cursor::new(payload.csv.into_bytes()))?;
    let summary = fill_dataset(&mut records)?;

    let mut buffer = Vec::new();
    write_records(&records, &mut buffer)?;
    let csv = String::from_utf8_lossy(&buffer).into_owned();

    Ok(Json(DatasetFillResponse { summary, csv }))
}

pub(crate) async fn dataset_quality_endpoint(
    Json(payload): Json<DatasetQualityRequest>,
) -> Result<Json<DatasetQualityResponse>, AppError> {
    let records = ProductTableImporter::from_reader(Cursor::new(payload.csv.into_bytes()))?;
    let report = QualityReport::compute(&records, payload.threshold_pct)?;

    Ok(Json(DatasetQualityResponse {
        threshold_pct: report.threshold_pct,
        columns: report.entries,
        flagged_columns: report.flagged_columns,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;

    const SAMPLE_CSV: &str = "\
product_name,energy_100g,saturated_fat_100g,sugars_100g,fiber_100g,proteins_100g,sodium_100g,nutrition_score_fr_100g,nutrition_grade_fr
Breakfast muesli,500,2,5,3,5,100,,
Orange soda,1800,0,40,0,0,30,14,d
";

    #[tokio::test]
    async fn score_endpoint_returns_the_joint_pair() {
        let request = ScoreRequest {
            energy_100g: 500.0,
            saturated_fat_100g: 2.0,
            sugars_100g: 5.0,
            fiber_100g: 3.0,
            proteins_100g: 5.0,
            sodium_100g: 100.0,
        };

        let Json(body) = score_endpoint(Json(request)).await;

        assert_eq!(body.score, -3);
        assert_eq!(body.grade, NutriGrade::A);
        assert_eq!(body.points_to_limit, 4);
        assert_eq!(body.points_to_favor, 7);
        assert_eq!(body.components.len(), 6);
    }

    #[tokio::test]
    async fn fill_endpoint_repairs_and_returns_the_table() {
        let request = DatasetFillRequest {
            csv: SAMPLE_CSV.to_string(),
        };

        let Json(body) = dataset_fill_endpoint(Json(request))
            .await
            .expect("fill succeeds");

        assert_eq!(body.summary.records, 2);
        assert_eq!(body.summary.scores_filled, 1);
        assert_eq!(body.summary.grades_filled, 1);
        assert!(body.csv.contains("Breakfast muesli,500,2,5,3,5,100,-3,a"));
    }

    #[tokio::test]
    async fn quality_endpoint_applies_the_strict_threshold() {
        let request = DatasetQualityRequest {
            csv: SAMPLE_CSV.to_string(),
            threshold_pct: 50.0,
        };

        let Json(body) = dataset_quality_endpoint(Json(request))
            .await
            .expect("report builds");

        assert_eq!(body.threshold_pct, 50.0);
        let score_entry = body
            .columns
            .iter()
            .find(|entry| entry.header == "nutrition_score_fr_100g")
            .expect("score column present");
        assert_eq!(score_entry.formatted, "50.00 %");
        // both partially-missing columns sit exactly on the threshold
        assert_eq!(body.flagged_columns, 0);
    }

    #[tokio::test]
    async fn quality_endpoint_rejects_an_empty_table() {
        let request = DatasetQualityRequest {
            csv: "product_name,energy_100g\n".to_string(),
            threshold_pct: 50.0,
        };

        let error = dataset_quality_endpoint(Json(request))
            .await
            .expect_err("empty table rejected");

        assert!(matches!(
            error,
            AppError::Dataset(nutriscore::dataset::DatasetError::EmptyDataset)
        ));
    }
}
