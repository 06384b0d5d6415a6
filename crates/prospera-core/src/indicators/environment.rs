//! Actual-metric computation for the environmental-sustainability dimension.

use super::percentage;
use crate::inputs::{RawInputs, ValidationError};

/// Air-quality monitoring stations per million inhabitants.
pub fn monitoring_stations_per_million(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let stations = inputs.non_negative("stations")?;
    let population = inputs.positive("population")?;
    Ok(stations / population * 1_000_000.0)
}

/// Share of generated solid waste that is collected. Collected waste cannot
/// exceed generated waste.
pub fn solid_waste_collection(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "collected", "generated")
}

/// Share of produced wastewater that gets treated.
pub fn wastewater_treatment(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "treated", "produced")
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
    fn test_stations_per_million() {
        let r = monitoring_stations_per_million(&raw(json!({
            "stations": 6.0,
            "population": 3_000_000.0
        })))
        .unwrap();
        assert!((r - 2.0).abs() < 1e-9);
        assert!((formula(Indicator::NumberOfMonitoringStations).standardize(r) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_waste_collected_cannot_exceed_generated() {
        let err = solid_waste_collection(&raw(json!({
            "collected": 1600.0,
            "generated": 1500.0
        })))
        .unwrap_err();
        assert!(matches!(err, ValidationError::PartExceedsWhole { .. }));
    }

    #[test]
    fn test_wastewater_below_threshold_scales() {
        let r = wastewater_treatment(&raw(json!({ "treated": 300.0, "produced": 1000.0 })))
            .unwrap();
        // 30% of the 50% threshold -> 60.
        assert!((formula(Indicator::WastewaterTreatment).standardize(r) - 60.0).abs() < 1e-9);
    }
}
