use serde::{Serialize, Deserialize};
use std::fmt;

/// Density of ethanol in g/mL, used to convert drink volume to alcohol mass.
pub const ETHANOL_DENSITY: f64 = 0.8;

/// Threshold (in ‰) up to which driving is still considered okay.
pub const DRIVE_LIMIT_PROMILLE: f64 = 0.5;
/// Above this value (in ‰) waiting is no longer a reasonable suggestion.
pub const NO_DRIVE_PROMILLE: f64 = 1.2;
/// Assumed constant elimination rate of 0.1 ‰ per hour, expressed in
/// hundredths of a promille so the wait-time math stays exact.
const ELIMINATION_CENTI_PROMILLE_PER_HOUR: i64 = 10;

/// Biological sex used to pick the Widmark distribution ratio.
///
/// The two-category model with fixed constants is a known simplification
/// of the physiological distribution ratio. It is kept as-is for
/// compatibility with the established estimate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn distribution_ratio(self) -> f64 {
        match self {
            Sex::Male => 0.68,
            Sex::Female => 0.55,
        }
    }
}

/// One consumed drink, as supplied by the persistence layer.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct DrinkRecord {
    pub volume_ml: f64,
    pub alcohol_percent: f64,
}

impl DrinkRecord {
    /// Grams of pure alcohol in this drink.
    pub fn alcohol_grams(&self) -> f64 {
        self.volume_ml * (self.alcohol_percent / 100.0) * ETHANOL_DENSITY
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EstimationInput {
    pub weight_kg: f64,
    pub sex: Sex,
    pub drinks: Vec<DrinkRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "kind", content = "hours", rename_all = "snake_case")]
pub enum DrivingAdvice {
    CanDrive,
    WaitHours(u32),
    DoNotDrive,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct EstimationResult {
    /// Estimated blood alcohol concentration in ‰, rounded to 2 decimals.
    pub promille: f64,
    pub advice: DrivingAdvice,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// Weight was non-positive or not a finite number.
    InvalidWeight(f64),
    /// A drink volume was non-positive or not a finite number.
    InvalidVolume(f64),
    /// An alcohol percentage was outside [0, 100] or not finite.
    InvalidPercent(f64),
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::InvalidWeight(w) => write!(f, "invalid body weight: {} kg", w),
            EstimateError::InvalidVolume(v) => write!(f, "invalid drink volume: {} ml", v),
            EstimateError::InvalidPercent(p) => write!(f, "invalid alcohol percentage: {}", p),
        }
    }
}

impl std::error::Error for EstimateError {}

fn check_weight(weight_kg: f64) -> Result<(), EstimateError> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(EstimateError::InvalidWeight(weight_kg));
    }
    Ok(())
}

fn check_drink(drink: &DrinkRecord) -> Result<(), EstimateError> {
    if !drink.volume_ml.is_finite() || drink.volume_ml <= 0.0 {
        return Err(EstimateError::InvalidVolume(drink.volume_ml));
    }
    if !drink.alcohol_percent.is_finite()
        || drink.alcohol_percent < 0.0
        || drink.alcohol_percent > 100.0
    {
        return Err(EstimateError::InvalidPercent(drink.alcohol_percent));
    }
    Ok(())
}

/// Widmark-style estimate over all logged drinks.
///
/// An empty drink list is valid and yields 0.00 ‰ / `CanDrive`; the party
/// may simply not have started yet.
pub fn estimate(input: &EstimationInput) -> Result<EstimationResult, EstimateError> {
    check_weight(input.weight_kg)?;

    let mut total_grams = 0.0;
    for drink in &input.drinks {
        check_drink(drink)?;
        total_grams += drink.alcohol_grams();
    }

    Ok(result_from_grams(total_grams, input.weight_kg, input.sex))
}

/// Single-product variant used by the scanner flow: one ad hoc entry
/// instead of the persisted drink list, same gram/ratio math.
pub fn estimate_single(
    weight_kg: f64,
    sex: Sex,
    amount_ml: f64,
    alcohol_percent: f64,
) -> Result<EstimationResult, EstimateError> {
    check_weight(weight_kg)?;
    let drink = DrinkRecord { volume_ml: amount_ml, alcohol_percent };
    check_drink(&drink)?;

    Ok(result_from_grams(drink.alcohol_grams(), weight_kg, sex))
}

fn result_from_grams(total_grams: f64, weight_kg: f64, sex: Sex) -> EstimationResult {
    let raw = total_grams / (weight_kg * sex.distribution_ratio());
    // Round first, then derive the advice from the rounded value. The
    // displayed number and the recommendation must never disagree.
    let promille = (raw * 100.0).round() / 100.0;
    EstimationResult { promille, advice: advice_for(promille) }
}

/// Driving advice for an already-rounded promille value.
///
/// Between the two thresholds the wait time extrapolates linearly from
/// the 0.5 ‰ limit at 0.1 ‰ per hour. This is a deliberately simple
/// heuristic, not a medical calculation.
pub fn advice_for(promille: f64) -> DrivingAdvice {
    if promille <= DRIVE_LIMIT_PROMILLE {
        return DrivingAdvice::CanDrive;
    }
    if promille > NO_DRIVE_PROMILLE {
        return DrivingAdvice::DoNotDrive;
    }
    // Work in hundredths of a promille so ceil((p - 0.5) / 0.1) cannot
    // pick up float noise at the segment boundaries.
    let centi = (promille * 100.0).round() as i64;
    let over = centi - (DRIVE_LIMIT_PROMILLE * 100.0) as i64;
    let hours = (over + ELIMINATION_CENTI_PROMILLE_PER_HOUR - 1) / ELIMINATION_CENTI_PROMILLE_PER_HOUR;
    DrivingAdvice::WaitHours(hours as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_beer_80kg_male() {
        let input = EstimationInput {
            weight_kg: 80.0,
            sex: Sex::Male,
            drinks: vec![DrinkRecord { volume_ml: 500.0, alcohol_percent: 5.0 }],
        };
        let result = estimate(&input).unwrap();
        assert_eq!(result.promille, 0.37);
        assert_eq!(result.advice, DrivingAdvice::CanDrive);
    }

    #[test]
    fn test_two_drinks_60kg_female() {
        let input = EstimationInput {
            weight_kg: 60.0,
            sex: Sex::Female,
            drinks: vec![
                DrinkRecord { volume_ml: 500.0, alcohol_percent: 5.0 },
                DrinkRecord { volume_ml: 330.0, alcohol_percent: 4.5 },
            ],
        };
        let result = estimate(&input).unwrap();
        assert_eq!(result.promille, 0.97);
        assert_eq!(result.advice, DrivingAdvice::WaitHours(5));
    }

    #[test]
    fn test_advice_thresholds() {
        assert_eq!(advice_for(0.50), DrivingAdvice::CanDrive);
        assert_eq!(advice_for(0.51), DrivingAdvice::WaitHours(1));
        assert_eq!(advice_for(0.60), DrivingAdvice::WaitHours(1));
        assert_eq!(advice_for(0.61), DrivingAdvice::WaitHours(2));
        assert_eq!(advice_for(0.80), DrivingAdvice::WaitHours(3));
        assert_eq!(advice_for(1.20), DrivingAdvice::WaitHours(7));
        assert_eq!(advice_for(1.21), DrivingAdvice::DoNotDrive);
    }

    #[test]
    fn test_empty_drinks_is_sober() {
        let input = EstimationInput { weight_kg: 75.0, sex: Sex::Male, drinks: vec![] };
        let result = estimate(&input).unwrap();
        assert_eq!(result.promille, 0.0);
        assert_eq!(result.advice, DrivingAdvice::CanDrive);
    }

    #[test]
    fn test_alcohol_mass_is_additive() {
        let a = DrinkRecord { volume_ml: 500.0, alcohol_percent: 5.0 };
        let b = DrinkRecord { volume_ml: 330.0, alcohol_percent: 4.5 };
        let total_grams = a.alcohol_grams() + b.alcohol_grams();
        // One drink at 5% carrying the same total mass.
        let merged = DrinkRecord {
            volume_ml: total_grams / (0.05 * ETHANOL_DENSITY),
            alcohol_percent: 5.0,
        };
        assert!((merged.alcohol_grams() - total_grams).abs() < 1e-9);

        let two = estimate(&EstimationInput { weight_kg: 70.0, sex: Sex::Male, drinks: vec![a, b] });
        let one = estimate(&EstimationInput { weight_kg: 70.0, sex: Sex::Male, drinks: vec![merged] });
        assert_eq!(two.unwrap(), one.unwrap());
    }

    #[test]
    fn test_invalid_weight_rejected() {
        let input = EstimationInput { weight_kg: 0.0, sex: Sex::Male, drinks: vec![] };
        assert_eq!(estimate(&input), Err(EstimateError::InvalidWeight(0.0)));
        assert!(matches!(
            estimate_single(f64::NAN, Sex::Female, 500.0, 5.0),
            Err(EstimateError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_invalid_drink_rejected() {
        let input = EstimationInput {
            weight_kg: 80.0,
            sex: Sex::Male,
            drinks: vec![DrinkRecord { volume_ml: -10.0, alcohol_percent: 5.0 }],
        };
        assert_eq!(estimate(&input), Err(EstimateError::InvalidVolume(-10.0)));
        assert_eq!(
            estimate_single(80.0, Sex::Male, 500.0, 101.0),
            Err(EstimateError::InvalidPercent(101.0))
        );
    }

    #[test]
    fn test_zero_volume_drink_rejected() {
        // An empty drink list is fine, a logged drink of 0 ml is not.
        let input = EstimationInput {
            weight_kg: 80.0,
            sex: Sex::Male,
            drinks: vec![DrinkRecord { volume_ml: 0.0, alcohol_percent: 5.0 }],
        };
        assert_eq!(estimate(&input), Err(EstimateError::InvalidVolume(0.0)));
        assert_eq!(
            estimate_single(80.0, Sex::Male, 0.0, 5.0),
            Err(EstimateError::InvalidVolume(0.0))
        );
    }

    #[test]
    fn test_single_matches_list_variant() {
        let via_list = estimate(&EstimationInput {
            weight_kg: 68.0,
            sex: Sex::Female,
            drinks: vec![DrinkRecord { volume_ml: 200.0, alcohol_percent: 12.5 }],
        })
        .unwrap();
        let via_single = estimate_single(68.0, Sex::Female, 200.0, 12.5).unwrap();
        assert_eq!(via_list, via_single);
    }
}
