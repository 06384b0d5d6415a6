//! prospera-core — City Prosperity Index normalization and aggregation engine.
//!
//! Pure domain logic: per-indicator standardization formulas, the ordinal
//! comment classifier, the sub-dimension/dimension/CPI rollup pipeline, and
//! the `CalculationRecord` data model. No I/O lives here.

pub mod aggregate;
pub mod benchmarks;
pub mod catalog;
pub mod comment;
pub mod indicators;
pub mod inputs;
pub mod record;
pub mod shapes;

pub use aggregate::{aggregate, Rollup, Rollups};
pub use catalog::{Dimension, Indicator, SubDimension};
pub use comment::{classify, Comment, NO_VALUE};
pub use indicators::{compute, Scored};
pub use inputs::{RawInputs, ValidationError};
pub use record::{CalculationRecord, IndicatorEntry, IndicatorFields, RecordPatch};
