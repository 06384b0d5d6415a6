//! Actual-metric computation for the infrastructure-development dimension.
//!
//! Most indicators here are direct percentage measurements handled by the
//! dispatcher; only the fatality rate needs its own derivation.

use super::rate_per;
use crate::inputs::{RawInputs, ValidationError};

/// Traffic deaths per 100 000 inhabitants.
pub fn traffic_fatalities(inputs: &RawInputs) -> Result<f64, ValidationError> {
    rate_per(inputs, "fatalities", "population", 100_000.0)
}
