//! Actual-metric computation for the productivity dimension.

use super::percentage;
use crate::inputs::{RawInputs, ValidationError};

/// City product per unit of built-up area (USD millions per km²).
pub fn economic_density(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let product = inputs.non_negative("city_product")?;
    let area = inputs.positive("urban_area")?;
    Ok(product / area)
}

/// Herfindahl concentration H = Σ sᵢ² over sector employment shares.
/// Perfect diversification across n sectors gives 1/n; a single-sector
/// economy gives 1.
pub fn economic_specialization(inputs: &RawInputs) -> Result<f64, ValidationError> {
    let shares = inputs.share_vector("sector_shares")?;
    Ok(shares.iter().map(|s| s * s).sum())
}

pub fn unemployment_rate(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "unemployed", "labour_force")
}

pub fn employment_to_population_ratio(inputs: &RawInputs) -> Result<f64, ValidationError> {
    percentage(inputs, "employed", "working_age_population")
}
