//! Validated access to raw submission inputs.
//!
//! Calculators never see unvalidated data: every getter here enforces the
//! caller-side preconditions (present, finite, sign and part/whole
//! constraints), and a failed precondition means the formula is never run and
//! nothing is persisted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Tolerance for proportion vectors that must sum to 1.
pub const SHARE_SUM_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("missing required input: {field}")]
    MissingField { field: String },

    #[error("input {field} is not a finite number")]
    NotANumber { field: String },

    #[error("input {field} must not be negative")]
    Negative { field: String },

    #[error("input {field} must be strictly positive")]
    NonPositive { field: String },

    #[error("{part} cannot exceed {whole}")]
    PartExceedsWhole { part: String, whole: String },

    #[error("proportion in {field} must lie in [0, 1]")]
    ShareOutOfRange { field: String },

    #[error("proportions in {field} must sum to 1 (got {sum:.4})")]
    SharesDoNotSumToOne { field: String, sum: f64 },

    #[error("input {field} must contain at least one cell")]
    Empty { field: String },
}

/// Raw inputs of one indicator submission, as posted by a form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInputs(BTreeMap<String, Value>);

impl RawInputs {
    pub fn new(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }

    /// A required finite number.
    pub fn number(&self, field: &str) -> Result<f64, ValidationError> {
        let value = self.0.get(field).ok_or_else(|| ValidationError::MissingField {
            field: field.to_string(),
        })?;
        match value.as_f64() {
            Some(n) if n.is_finite() => Ok(n),
            _ => Err(ValidationError::NotANumber { field: field.to_string() }),
        }
    }

    /// A required number that must be >= 0.
    pub fn non_negative(&self, field: &str) -> Result<f64, ValidationError> {
        let n = self.number(field)?;
        if n < 0.0 {
            return Err(ValidationError::Negative { field: field.to_string() });
        }
        Ok(n)
    }

    /// A required number that must be > 0 (rate denominators).
    pub fn positive(&self, field: &str) -> Result<f64, ValidationError> {
        let n = self.number(field)?;
        if n <= 0.0 {
            return Err(ValidationError::NonPositive { field: field.to_string() });
        }
        Ok(n)
    }

    /// A (part, whole) pair where part >= 0, whole > 0 and part <= whole.
    pub fn part_whole(&self, part: &str, whole: &str) -> Result<(f64, f64), ValidationError> {
        let p = self.non_negative(part)?;
        let w = self.positive(whole)?;
        if p > w {
            return Err(ValidationError::PartExceedsWhole {
                part: part.to_string(),
                whole: whole.to_string(),
            });
        }
        Ok((p, w))
    }

    /// A vector of proportions in [0, 1] summing to 1 within tolerance.
    pub fn share_vector(&self, field: &str) -> Result<Vec<f64>, ValidationError> {
        let value = self.0.get(field).ok_or_else(|| ValidationError::MissingField {
            field: field.to_string(),
        })?;
        let arr = value
            .as_array()
            .ok_or_else(|| ValidationError::NotANumber { field: field.to_string() })?;
        if arr.is_empty() {
            return Err(ValidationError::Empty { field: field.to_string() });
        }
        let mut shares = Vec::with_capacity(arr.len());
        for v in arr {
            let n = match v.as_f64() {
                Some(n) if n.is_finite() => n,
                _ => return Err(ValidationError::NotANumber { field: field.to_string() }),
            };
            if !(0.0..=1.0).contains(&n) {
                return Err(ValidationError::ShareOutOfRange { field: field.to_string() });
            }
            shares.push(n);
        }
        let sum: f64 = shares.iter().sum();
        if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ValidationError::SharesDoNotSumToOne {
                field: field.to_string(),
                sum,
            });
        }
        Ok(shares)
    }

    /// A list of proportion vectors (land-use analysis cells); every cell
    /// must independently pass the share-vector rules.
    pub fn cells(&self, field: &str) -> Result<Vec<Vec<f64>>, ValidationError> {
        let value = self.0.get(field).ok_or_else(|| ValidationError::MissingField {
            field: field.to_string(),
        })?;
        let arr = value
            .as_array()
            .ok_or_else(|| ValidationError::NotANumber { field: field.to_string() })?;
        if arr.is_empty() {
            return Err(ValidationError::Empty { field: field.to_string() });
        }
        let mut cells = Vec::with_capacity(arr.len());
        for (i, cell) in arr.iter().enumerate() {
            let label = format!("{field}[{i}]");
            let cell_arr = cell
                .as_array()
                .ok_or_else(|| ValidationError::NotANumber { field: label.clone() })?;
            let mut shares = Vec::with_capacity(cell_arr.len());
            for v in cell_arr {
                let n = match v.as_f64() {
                    Some(n) if n.is_finite() => n,
                    _ => return Err(ValidationError::NotANumber { field: label.clone() }),
                };
                if !(0.0..=1.0).contains(&n) {
                    return Err(ValidationError::ShareOutOfRange { field: label.clone() });
                }
                shares.push(n);
            }
            let sum: f64 = shares.iter().sum();
            if (sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
                return Err(ValidationError::SharesDoNotSumToOne { field: label, sum });
            }
            cells.push(shares);
        }
        Ok(cells)
    }
}

impl From<serde_json::Map<String, Value>> for RawInputs {
    fn from(map: serde_json::Map<String, Value>) -> Self {
        Self(map.into_iter().collect())
    }
}
