use validator::ValidationError;

use crate::constants::{MAX_BARCODE_LENGTH, MIN_BARCODE_LENGTH};

pub fn validate_barcode(barcode: &str) -> Result<(), ValidationError> {
    if barcode.len() < MIN_BARCODE_LENGTH
        || barcode.len() > MAX_BARCODE_LENGTH
        || !barcode.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::new("invalid_barcode"));
    }
    Ok(())
}

pub fn validate_weight_kg(weight_kg: f64) -> Result<(), ValidationError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(ValidationError::new("invalid_weight"));
    }
    Ok(())
}

pub fn validate_volume_ml(volume_ml: f64) -> Result<(), ValidationError> {
    if !volume_ml.is_finite() || volume_ml <= 0.0 {
        return Err(ValidationError::new("invalid_volume"));
    }
    Ok(())
}

pub fn validate_alcohol_percent(percent: f64) -> Result<(), ValidationError> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ValidationError::new("invalid_alcohol_percent"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_barcode_shapes() {
        assert!(validate_barcode("4029764001807").is_ok());
        assert!(validate_barcode("12345678").is_ok());
        assert!(validate_barcode("1234567").is_err());
        assert!(validate_barcode("402976400180712").is_err());
        assert!(validate_barcode("4029-7640018").is_err());
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(validate_weight_kg(80.0).is_ok());
        assert!(validate_weight_kg(0.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
        assert!(validate_volume_ml(500.0).is_ok());
        assert!(validate_volume_ml(-1.0).is_err());
        assert!(validate_alcohol_percent(0.0).is_ok());
        assert!(validate_alcohol_percent(100.0).is_ok());
        assert!(validate_alcohol_percent(100.1).is_err());
    }
}
