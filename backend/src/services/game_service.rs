use axum::{
    extract::Query,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use shared::drinking_games::{self, DrinkingGame};
use shared::wheel::{compute_slices, Slice, WheelEngine};

use crate::error::Error;
use crate::AppState;

/// Default wheel diameter when the client does not render its own wheel.
const DEFAULT_WHEEL_DIAMETER: f64 = 360.0;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_games))
        .route("/random", get(random_game))
        .route("/wheel/slices", get(wheel_slices))
        .route("/wheel/spin", post(spin_wheel))
}

async fn list_games() -> Json<Vec<DrinkingGame>> {
    Json(drinking_games::catalog().to_vec())
}

#[derive(Debug, Deserialize)]
pub struct RandomGameQuery {
    pub players: u32,
}

/// A random game the given group size can actually play.
async fn random_game(Query(query): Query<RandomGameQuery>) -> Result<Json<DrinkingGame>, Error> {
    let mut rng = rand::thread_rng();
    match drinking_games::random_game_for_players(query.players, &mut rng) {
        Some(game) => Ok(Json(game.clone())),
        None => Err(Error::NotFound("game for this group size")),
    }
}

#[derive(Debug, Deserialize)]
pub struct SlicesQuery {
    #[serde(default = "default_diameter")]
    pub diameter: f64,
}

fn default_diameter() -> f64 {
    DEFAULT_WHEEL_DIAMETER
}

/// Slice geometry for clients rendering the wheel themselves.
async fn wheel_slices(Query(query): Query<SlicesQuery>) -> Result<Json<Vec<Slice>>, Error> {
    if !query.diameter.is_finite() || query.diameter <= 0.0 {
        return Err(Error::InvalidInput("Wheel diameter must be positive".to_string()));
    }
    Ok(Json(compute_slices(&drinking_games::wheel_labels(), query.diameter)))
}

#[derive(Debug, Serialize)]
pub struct WheelSpinResponse {
    pub rotation_deg: f64,
    pub selected_index: usize,
    pub game: DrinkingGame,
}

/// Runs one spin over the game catalog. The response arrives once the
/// animation duration has elapsed, so client and server settle together.
async fn spin_wheel() -> Result<Json<WheelSpinResponse>, Error> {
    let catalog = drinking_games::catalog();
    let mut wheel = WheelEngine::new(catalog.len())?;

    // Each request spins its own wheel, so a fresh engine can never
    // refuse the trigger.
    let plan = {
        let mut rng = rand::thread_rng();
        match wheel.start_spin(&mut rng) {
            Some(plan) => plan,
            None => return Err(Error::InvalidInput("Spin already in progress".to_string())),
        }
    };

    tokio::time::sleep(std::time::Duration::from_millis(plan.duration_ms)).await;

    let selected_index = match wheel.complete_spin() {
        Some(index) => index,
        None => return Err(Error::InvalidInput("No spin in progress".to_string())),
    };
    let game = catalog[selected_index].clone();
    info!("Wheel settled on \"{}\" at {}°", game.name, plan.target_deg);

    Ok(Json(WheelSpinResponse {
        rotation_deg: plan.target_deg,
        selected_index,
        game,
    }))
}
