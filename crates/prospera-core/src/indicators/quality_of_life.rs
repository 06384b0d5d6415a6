//! Actual-metric computation for the quality-of-life dimension.

use super::{percentage, rate_per};
use crate::inputs::{RawInputs, ValidationError};

pub fn literacy_rate(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "literate_population", "total_population")
}

/// Homicides per 100 000 inhabitants.
pub fn homicide_rate(inputs: &RawInputs) -> Result<f64, ValidationError> {
    rate_per(inputs, "homicides", "population", 100_000.0)
}

/// Thefts per 100 000 inhabitants.
pub fn theft_rate(inputs: &RawInputs) -> Result<f64, ValidationError> {
    rate_per(inputs, "thefts", "population", 100_000.0)
}

/// Green area in m² per inhabitant.
pub fn green_area_per_capita(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let area = inputs.non_negative("green_area")?;
    let population = inputs.positive("population")?;
    Ok(area / population)
}
