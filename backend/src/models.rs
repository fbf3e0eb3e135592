use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::promille::DrinkRecord;

/// One logged drink as stored in the drinks table.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Drink {
    pub id: Uuid,
    pub volume_ml: f64,
    pub alcohol_percent: f64,
    pub created_at: DateTime<Utc>,
}

impl Drink {
    /// The estimator only needs volume and percentage.
    pub fn record(&self) -> DrinkRecord {
        DrinkRecord {
            volume_ml: self.volume_ml,
            alcohol_percent: self.alcohol_percent,
        }
    }
}

/// Product metadata returned by the barcode lookup.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub brands: Option<String>,
    pub image_url: Option<String>,
    /// Absent when the upstream record carries no alcohol information.
    pub alcohol_percent: Option<f64>,
}
