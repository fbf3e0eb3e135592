use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use shared::constants::INVALID_VOLUME_ERROR;
use shared::promille::DrinkRecord;
use shared::validation::{validate_alcohol_percent, validate_volume_ml};

use crate::error::Error;
use crate::models::Drink;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drinks).post(log_drink).delete(end_party))
        .route("/:id", delete(delete_drink))
}

#[derive(Debug, Deserialize)]
pub struct NewDrink {
    pub volume_ml: f64,
    pub alcohol_percent: f64,
}

async fn log_drink(
    State(state): State<AppState>,
    Json(new_drink): Json<NewDrink>,
) -> Result<Json<Drink>, Error> {
    validate_volume_ml(new_drink.volume_ml)
        .map_err(|_| Error::InvalidInput(INVALID_VOLUME_ERROR.to_string()))?;
    validate_alcohol_percent(new_drink.alcohol_percent)
        .map_err(|_| Error::InvalidInput("Alcohol percentage must be between 0 and 100".to_string()))?;

    let drink = sqlx::query_as::<_, Drink>(
        "INSERT INTO drinks (id, volume_ml, alcohol_percent) VALUES ($1, $2, $3) \
         RETURNING id, volume_ml, alcohol_percent, created_at",
    )
    .bind(Uuid::new_v4())
    .bind(new_drink.volume_ml)
    .bind(new_drink.alcohol_percent)
    .fetch_one(&state.pool)
    .await?;

    info!(
        "Logged drink {}: {} ml at {}%",
        drink.id, drink.volume_ml, drink.alcohol_percent
    );
    Ok(Json(drink))
}

async fn list_drinks(State(state): State<AppState>) -> Result<Json<Vec<Drink>>, Error> {
    let drinks = sqlx::query_as::<_, Drink>(
        "SELECT id, volume_ml, alcohol_percent, created_at FROM drinks ORDER BY created_at DESC",
    )
    .fetch_all(&state.pool)
    .await?;

    Ok(Json(drinks))
}

async fn delete_drink(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, Error> {
    let result = sqlx::query("DELETE FROM drinks WHERE id = $1")
        .bind(id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound("drink"));
    }
    Ok(Json(json!({ "deleted": id })))
}

/// "End the party": wipes the whole drink log in one go.
async fn end_party(State(state): State<AppState>) -> Result<Json<serde_json::Value>, Error> {
    let result = sqlx::query("DELETE FROM drinks").execute(&state.pool).await?;

    info!("Party ended, {} drinks cleared", result.rows_affected());
    Ok(Json(json!({ "deleted": result.rows_affected() })))
}

/// Snapshot of the drink log for the estimator.
pub async fn load_snapshot(pool: &PgPool) -> Result<Vec<DrinkRecord>, sqlx::Error> {
    let drinks = sqlx::query_as::<_, Drink>(
        "SELECT id, volume_ml, alcohol_percent, created_at FROM drinks ORDER BY created_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(drinks.iter().map(Drink::record).collect())
}
