//! The hierarchical averaging pipeline.
//!
//! Leaf standardized scores roll up into sub-dimension means, sub-dimensions
//! into the six dimension means, and dimensions into the composite City
//! Prosperity Index. Every level averages only the children that are present;
//! a level with no present children has no value, never zero. Aggregation is
//! a pure read-time derivation — it never writes and never overrides a leaf.

use crate::catalog::{Dimension, SubDimension};
use crate::comment::classify;
use crate::record::IndicatorFields;
use crate::shapes::round2;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// One computed rollup level: score, comment, and display string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollup {
    pub score: f64,
    pub comment: String,
    pub display: String,
}

impl Rollup {
    fn from_score(score: f64) -> Self {
        let score = round2(score);
        Rollup {
            score,
            comment: classify(score).label().to_string(),
            display: format!("{score:.2}%"),
        }
    }
}

/// All rollups derived from one record's leaf fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rollups {
    pub sub_dimensions: BTreeMap<SubDimension, Rollup>,
    pub dimensions: BTreeMap<Dimension, Rollup>,
    pub cpi: Option<Rollup>,
}

impl Rollups {
    pub fn sub_dimension(&self, sub: SubDimension) -> Option<&Rollup> {
        self.sub_dimensions.get(&sub)
    }

    pub fn dimension(&self, dim: Dimension) -> Option<&Rollup> {
        self.dimensions.get(&dim)
    }

    /// Flatten to the legacy field spelling used by the wire format:
    /// `<key>`, `<key>_comment`, `<key>_display` per level, plus
    /// `cpi`/`cpi_comment`/`cpi_display`.
    pub fn to_flat(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let mut put = |key: &str, rollup: &Rollup| {
            if let Some(n) = Number::from_f64(rollup.score) {
                map.insert(key.to_string(), Value::Number(n));
            }
            map.insert(format!("{key}_comment"), Value::String(rollup.comment.clone()));
            map.insert(format!("{key}_display"), Value::String(rollup.display.clone()));
        };
        for (sub, rollup) in &self.sub_dimensions {
            put(sub.key(), rollup);
        }
        for (dim, rollup) in &self.dimensions {
            put(dim.key(), rollup);
        }
        if let Some(cpi) = &self.cpi {
            put("cpi", cpi);
        }
        map
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

/// Derive every rollup level from the leaf standardized fields present on
/// the record. Idempotent and order-independent.
pub fn aggregate(fields: &IndicatorFields) -> Rollups {
    let mut rollups = Rollups::default();

    for sub in SubDimension::ALL {
        let present: Vec<f64> = sub
            .children()
            .into_iter()
            .filter_map(|child| fields.standardized(child))
            .filter(|s| s.is_finite())
            .collect();
        if let Some(score) = mean(&present) {
            rollups.sub_dimensions.insert(sub, Rollup::from_score(score));
        }
    }

    for dim in Dimension::ALL {
        let present: Vec<f64> = dim
            .sub_dimensions()
            .into_iter()
            .filter_map(|sub| rollups.sub_dimensions.get(&sub).map(|r| r.score))
            .collect();
        if let Some(score) = mean(&present) {
            rollups.dimensions.insert(dim, Rollup::from_score(score));
        }
    }

    let dimension_scores: Vec<f64> = rollups.dimensions.values().map(|r| r.score).collect();
    rollups.cpi = mean(&dimension_scores).map(Rollup::from_score);

    rollups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Indicator;
    use crate::record::IndicatorEntry;

    fn with_standardized(pairs: &[(Indicator, f64)]) -> IndicatorFields {
        let mut fields = IndicatorFields::new();
        for &(indicator, standardized) in pairs {
            fields.set(
                indicator,
                IndicatorEntry { standardized: Some(standardized), ..Default::default() },
            );
        }
        fields
    }

    #[test]
    fn test_empty_record_has_no_rollups() {
        let rollups = aggregate(&IndicatorFields::new());
        assert!(rollups.sub_dimensions.is_empty());
        assert!(rollups.dimensions.is_empty());
        assert!(rollups.cpi.is_none());
    }

    #[test]
    fn test_partial_children_average_only_present() {
        // Health has four children; only two are present.
        let fields = with_standardized(&[
            (Indicator::LifeExpectancyAtBirth, 90.0),
            (Indicator::UnderFiveMortality, 70.0),
        ]);
        let rollups = aggregate(&fields);
        let health = rollups.sub_dimension(SubDimension::Health).unwrap();
        assert_eq!(health.score, 80.0);
        assert_eq!(health.comment, "VERY SOLID");
        assert_eq!(health.display, "80.00%");
        // Education has no present children: no value, not zero.
        assert!(rollups.sub_dimension(SubDimension::Education).is_none());
    }

    #[test]
    fn test_dimension_and_cpi_cascade() {
        let fields = with_standardized(&[
            (Indicator::LifeExpectancyAtBirth, 80.0),
            (Indicator::LiteracyRate, 60.0),
            (Indicator::GiniCoefficient, 40.0),
        ]);
        let rollups = aggregate(&fields);

        // quality_of_life = mean(health 80, education 60) = 70.
        let qol = rollups.dimension(Dimension::QualityOfLife).unwrap();
        assert_eq!(qol.score, 70.0);
        assert_eq!(qol.comment, "SOLID");

        // equity = economic_equity = 40.
        let equity = rollups.dimension(Dimension::EquitySocialInclusion).unwrap();
        assert_eq!(equity.score, 40.0);

        // CPI averages only the two present dimensions.
        let cpi = rollups.cpi.unwrap();
        assert_eq!(cpi.score, 55.0);
        assert_eq!(cpi.comment, "MODERATELY WEAK");
        assert_eq!(cpi.display, "55.00%");
    }

    #[test]
    fn test_idempotent() {
        let fields = with_standardized(&[
            (Indicator::LiteracyRate, 76.56),
            (Indicator::TrafficFatalities, 67.54),
            (Indicator::WomenInLocalWorkforce, 80.0),
        ]);
        let first = aggregate(&fields);
        let second = aggregate(&fields);
        assert_eq!(first, second);
    }

    #[test]
    fn test_flat_keys() {
        let fields = with_standardized(&[(Indicator::LiteracyRate, 76.56)]);
        let flat = aggregate(&fields).to_flat();
        assert_eq!(flat["education"], serde_json::json!(76.56));
        assert_eq!(flat["education_comment"], serde_json::json!("SOLID"));
        assert_eq!(flat["education_display"], serde_json::json!("76.56%"));
        assert_eq!(flat["quality_of_life"], serde_json::json!(76.56));
        assert_eq!(flat["cpi_display"], serde_json::json!("76.56%"));
    }
}
