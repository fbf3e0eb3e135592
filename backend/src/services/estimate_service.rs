use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use tracing::debug;

use shared::constants::INVALID_WEIGHT_ERROR;
use shared::promille::{self, EstimationInput, EstimationResult, Sex};
use shared::validation::validate_weight_kg;

use crate::error::Error;
use crate::services::drink_service;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", post(estimate_from_log))
        .route("/single", post(estimate_single_product))
}

#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    pub weight_kg: f64,
    pub sex: Sex,
}

/// Estimates from the persisted drink log. An empty log is fine and
/// reports 0.00 ‰.
async fn estimate_from_log(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimationResult>, Error> {
    validate_weight_kg(request.weight_kg)
        .map_err(|_| Error::InvalidInput(INVALID_WEIGHT_ERROR.to_string()))?;

    let drinks = drink_service::load_snapshot(&state.pool).await?;
    debug!("Estimating over {} logged drinks", drinks.len());

    let result = promille::estimate(&EstimationInput {
        weight_kg: request.weight_kg,
        sex: request.sex,
        drinks,
    })?;

    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct SingleEstimateRequest {
    pub weight_kg: f64,
    pub sex: Sex,
    pub amount_ml: f64,
    pub alcohol_percent: f64,
}

/// Scanner-flow variant: one ad hoc product entry, nothing persisted.
async fn estimate_single_product(
    Json(request): Json<SingleEstimateRequest>,
) -> Result<Json<EstimationResult>, Error> {
    let result = promille::estimate_single(
        request.weight_kg,
        request.sex,
        request.amount_ml,
        request.alcohol_percent,
    )?;

    Ok(Json(result))
}
