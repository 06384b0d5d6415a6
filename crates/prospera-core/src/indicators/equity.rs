//! Actual-metric computation for the equity and social-inclusion dimension.

use super::percentage;
use crate::inputs::{RawInputs, ValidationError};

pub fn youth_unemployment(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "unemployed_youth", "youth_labour_force")
}

/// Girls-to-boys secondary enrollment ratio; parity (1.0) is the benchmark.
pub fn equitable_enrollment_ratio(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let girls = inputs.non_negative("girls_enrollment_rate")?;
    let boys = inputs.positive("boys_enrollment_rate")?;
    Ok(girls / boys)
}

pub fn women_in_local_government(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "women_seats", "total_seats")
}

pub fn women_in_local_workforce(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "women_employed", "total_employed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmarks::formula;
    use crate::catalog::Indicator;
    use serde_json::json;

    fn raw(v: serde_json::Value) -> RawInputs {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_enrollment_parity_scores_100() {
        let f = formula(Indicator::EquitableSecondarySchoolEnrollment);
        let r = equitable_enrollment_ratio(&raw(json!({
            "girls_enrollment_rate": 88.0,
            "boys_enrollment_rate": 88.0
        })))
        .unwrap();
        assert_eq!(f.standardize(r), 100.0);

        // No girls enrolled at all -> 0, and double parity also -> 0.
        assert_eq!(f.standardize(0.0), 0.0);
        assert_eq!(f.standardize(2.0), 0.0);
    }

    #[test]
    fn test_women_in_government_deviation_is_symmetric() {
        let f = formula(Indicator::WomenInLocalGovernment);
        let under = women_in_local_government(&raw(json!({
            "women_seats": 20.0,
            "total_seats": 50.0
        })))
        .unwrap();
        let over = women_in_local_government(&raw(json!({
            "women_seats": 30.0,
            "total_seats": 50.0
        })))
        .unwrap();
        assert!((f.standardize(under) - f.standardize(over)).abs() < 1e-9);
    }
}
