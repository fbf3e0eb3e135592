use std::net::SocketAddr;

use axum::body::Body;
use axum::http::{header::HeaderName, HeaderValue, Method, Response};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

mod error;
mod logging;
mod models;
mod services;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub http: reqwest::Client,
}

pub async fn health_check() -> impl IntoResponse {
    Response::builder().status(200).body(Body::from("OK")).unwrap()
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::setup();
    dotenvy::from_path(".env").ok();

    let pool = PgPool::connect_with(
        std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set")
            .parse::<sqlx::postgres::PgConnectOptions>()?
            .to_owned(),
    )
    .await
    .expect("Failed to create pool");

    sqlx::migrate!().run(&pool).await?;

    let state = AppState {
        pool,
        http: reqwest::Client::new(),
    };

    let cors = CorsLayer::new()
        .allow_origin(vec![
            "http://127.0.0.1:8080".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods(vec![Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(vec![HeaderName::from_static("content-type")]);

    let app = Router::new()
        .route("/api/health_check", get(health_check))
        .nest("/api/drinks", services::drink_service::create_router())
        .nest("/api/estimate", services::estimate_service::create_router())
        .nest("/api/products", services::product_service::create_router())
        .nest("/api/games", services::game_service::create_router())
        .with_state(state)
        .layer(cors);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
