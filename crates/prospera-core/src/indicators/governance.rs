//! Actual-metric computation for the urban-governance dimension.

use super::percentage;
use crate::inputs::{RawInputs, ValidationError};

pub fn voter_turnout(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "votes_cast", "eligible_voters")
}

/// Ratio of land-consumption rate to population-growth rate; 1.0 (land
/// consumed no faster than the city grows) is the benchmark.
pub fn land_use_efficiency(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let consumption = inputs.non_negative("land_consumption_rate")?;
    let growth = inputs.positive("population_growth_rate")?;
    Ok(consumption / growth)
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
    fn test_turnout_percentage() {
        let r = voter_turnout(&raw(json!({
            "votes_cast": 467_000.0,
            "eligible_voters": 1_000_000.0
        })))
        .unwrap();
        assert!((r - 46.7).abs() < 1e-9);
    }

    #[test]
    fn test_land_use_efficiency_balanced_growth() {
        let f = formula(Indicator::LandUseEfficiency);
        let r = land_use_efficiency(&raw(json!({
            "land_consumption_rate": 1.8,
            "population_growth_rate": 1.8
        })))
        .unwrap();
        assert_eq!(f.standardize(r), 100.0);

        // Sprawl at twice the growth rate bottoms out.
        let r = land_use_efficiency(&raw(json!({
            "land_consumption_rate": 3.6,
            "population_growth_rate": 1.8
        })))
        .unwrap();
        assert_eq!(f.standardize(r), 0.0);
    }
}
