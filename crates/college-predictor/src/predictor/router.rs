use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::domain::{Category, Submission};
use super::report::PredictionReport;
use super::views::{category_catalog, CategoryView};
use super::EligibilityEvaluator;
use crate::error::AppError;

/// Body accepted by the prediction endpoint. `auxiliary` carries years of
/// work experience for MBA and GPA for MS; other categories ignore it.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    pub category: Category,
    pub score: f64,
    #[serde(default)]
    pub auxiliary: Option<f64>,
}

impl PredictionRequest {
    pub fn into_submission(self) -> Submission {
        Submission::new(self.category, self.score, self.auxiliary)
    }
}

/// Router builder exposing prediction and category catalog endpoints.
pub fn prediction_router() -> Router {
    Router::new()
        .route("/api/v1/predictions", post(predict_handler))
        .route("/api/v1/categories", get(categories_handler))
}

pub(crate) async fn predict_handler(
    Json(request): Json<PredictionRequest>,
) -> Result<Json<PredictionReport>, AppError> {
    let submission = request.into_submission();
    submission.validate()?;

    let report = EligibilityEvaluator::default().evaluate_submission(&submission);
    Ok(Json(report))
}

pub(crate) async fn categories_handler() -> Json<Vec<CategoryView>> {
    let evaluator = EligibilityEvaluator::default();
    Json(category_catalog(evaluator.table()))
}
