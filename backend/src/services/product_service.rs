use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::{debug, info};

use shared::constants::{INVALID_BARCODE_ERROR, PRODUCT_API_BASE_URL};
use shared::validation::validate_barcode;

use crate::error::Error;
use crate::models::Product;
use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new().route("/:barcode", get(lookup_product))
}

/// Looks a scanned barcode up on Open Food Facts and returns the product
/// with its alcohol percentage, when the record carries one.
async fn lookup_product(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Result<Json<Product>, Error> {
    validate_barcode(&barcode)
        .map_err(|_| Error::InvalidInput(INVALID_BARCODE_ERROR.to_string()))?;

    let url = format!("{}/{}.json", PRODUCT_API_BASE_URL, barcode);
    debug!("Fetching product data from {}", url);

    let payload: Value = state
        .http
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if payload.get("status").and_then(Value::as_i64) != Some(1) {
        return Err(Error::NotFound("product"));
    }
    let product = payload
        .get("product")
        .map(product_from_payload)
        .ok_or(Error::NotFound("product"))?;

    info!(
        "Scanned {}: {} ({}%)",
        barcode,
        product.name,
        product
            .alcohol_percent
            .map_or_else(|| "N/A".to_string(), |p| p.to_string())
    );
    Ok(Json(product))
}

fn product_from_payload(value: &Value) -> Product {
    Product {
        name: value
            .get("product_name")
            .and_then(Value::as_str)
            .unwrap_or("Unknown product")
            .to_string(),
        brands: value.get("brands").and_then(Value::as_str).map(str::to_string),
        image_url: value.get("image_url").and_then(Value::as_str).map(str::to_string),
        alcohol_percent: extract_alcohol_percent(value),
    }
}

/// Alcohol percentage with the fallback chain some records need: the
/// explicit `alc_percent` field first, then `nutriments.alcohol`, then
/// `nutriments.alcohol_100g`, otherwise absent.
pub fn extract_alcohol_percent(product: &Value) -> Option<f64> {
    if let Some(direct) = product.get("alc_percent") {
        // Records store this one either as a bare number or as a string
        // like "5.0" / "5%".
        if let Some(number) = direct.as_f64() {
            return Some(number);
        }
        if let Some(text) = direct.as_str() {
            if let Ok(number) = text.trim().trim_end_matches('%').parse() {
                return Some(number);
            }
        }
    }

    let nutriments = product.get("nutriments")?;
    if let Some(number) = nutriments.get("alcohol").and_then(Value::as_f64) {
        return Some(number);
    }
    nutriments.get("alcohol_100g").and_then(Value::as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_explicit_percent_wins() {
        let product = json!({
            "product_name": "Pils",
            "alc_percent": "4.9",
            "nutriments": { "alcohol": 4.8, "alcohol_100g": 4.7 }
        });
        assert_eq!(extract_alcohol_percent(&product), Some(4.9));
    }

    #[test]
    fn test_nutriment_fallback_order() {
        let both = json!({ "nutriments": { "alcohol": 5.0, "alcohol_100g": 4.5 } });
        assert_eq!(extract_alcohol_percent(&both), Some(5.0));

        let only_100g = json!({ "nutriments": { "alcohol_100g": 4.5 } });
        assert_eq!(extract_alcohol_percent(&only_100g), Some(4.5));
    }

    #[test]
    fn test_absent_alcohol_is_none() {
        assert_eq!(extract_alcohol_percent(&json!({ "product_name": "Wasser" })), None);
        assert_eq!(extract_alcohol_percent(&json!({ "nutriments": {} })), None);
    }

    #[test]
    fn test_numeric_and_suffixed_forms() {
        assert_eq!(extract_alcohol_percent(&json!({ "alc_percent": 12.5 })), Some(12.5));
        assert_eq!(extract_alcohol_percent(&json!({ "alc_percent": "5%" })), Some(5.0));
        // Garbage in the direct field falls through to the nutriments.
        let messy = json!({ "alc_percent": "n/a", "nutriments": { "alcohol": 4.2 } });
        assert_eq!(extract_alcohol_percent(&messy), Some(4.2));
    }

    #[test]
    fn test_payload_mapping() {
        let payload = json!({
            "product_name": "Radler",
            "brands": "Brauerei X",
            "image_url": "https://example.org/radler.jpg",
            "nutriments": { "alcohol": 2.5 }
        });
        let product = product_from_payload(&payload);
        assert_eq!(product.name, "Radler");
        assert_eq!(product.brands.as_deref(), Some("Brauerei X"));
        assert_eq!(product.alcohol_percent, Some(2.5));
    }

    #[test]
    fn test_nameless_product_gets_placeholder() {
        let product = product_from_payload(&json!({}));
        assert_eq!(product.name, "Unknown product");
        assert_eq!(product.alcohol_percent, None);
    }
}
