use axum::body::Body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::json;

use shared::promille::EstimateError;
use shared::wheel::WheelError;

#[derive(Debug)]
pub enum Error {
    Database,
    NotFound(&'static str),
    InvalidInput(String),
    Upstream,
}

impl From<sqlx::Error> for Error {
    fn from(_: sqlx::Error) -> Self {
        Error::Database
    }
}

impl From<reqwest::Error> for Error {
    fn from(_: reqwest::Error) -> Self {
        Error::Upstream
    }
}

impl From<EstimateError> for Error {
    fn from(err: EstimateError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl From<WheelError> for Error {
    fn from(err: WheelError) -> Self {
        Error::InvalidInput(err.to_string())
    }
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Error::Database => (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string()),
            Error::NotFound(what) => (StatusCode::NOT_FOUND, format!("No such {}", what)),
            Error::InvalidInput(message) => (StatusCode::BAD_REQUEST, message),
            Error::Upstream => (
                StatusCode::BAD_GATEWAY,
                shared::constants::NETWORK_ERROR.to_string(),
            ),
        };

        Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&json!({
                "error": message
            })).unwrap()))
            .unwrap()
    }
}
