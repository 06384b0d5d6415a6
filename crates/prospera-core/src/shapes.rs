//! The recurring standardization shapes shared by all indicator formulas.
//!
//! Every shape maps a raw (or pre-computed "actual") value onto [0, 100],
//! clamping out-of-range inputs to the nearest bound. Benchmark constants are
//! supplied by the caller from the benchmark table, never embedded here.

/// Direction of an indicator: does a larger raw value mean a better city?
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    MoreIsBetter,
    LessIsBetter,
}

/// Monotonic transform applied before linear interpolation for heavy-tailed
/// raw distributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Ln,
    Sqrt,
    FourthRoot,
}

impl Transform {
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Transform::Ln => v.ln(),
            Transform::Sqrt => v.sqrt(),
            Transform::FourthRoot => v.powf(0.25),
        }
    }
}

/// Linear benchmark interpolation between MIN and MAX.
///
/// More-is-better: v <= min -> 0, v >= max -> 100.
/// Less-is-better: v <= min -> 100, v >= max -> 0.
pub fn linear(v: f64, min: f64, max: f64, polarity: Polarity) -> f64 {
    let score = 100.0 * (v - min) / (max - min);
    let score = match polarity {
        Polarity::MoreIsBetter => score,
        Polarity::LessIsBetter => 100.0 - score,
    };
    score.clamp(0.0, 100.0)
}

/// Linear interpolation on a transformed scale. The raw value is clamped into
/// [min, max] before the transform so the transform never leaves its domain.
pub fn transformed_linear(v: f64, transform: Transform, min: f64, max: f64, polarity: Polarity) -> f64 {
    let clamped = v.clamp(min, max);
    linear(
        transform.apply(clamped),
        transform.apply(min),
        transform.apply(max),
        polarity,
    )
}

/// Closeness to a single ideal benchmark X*: deviation in either direction is
/// penalized. Exactly X* scores 100; zero or >= 2·X* scores 0.
pub fn target_deviation(v: f64, target: f64) -> f64 {
    if v <= 0.0 || v >= 2.0 * target {
        return 0.0;
    }
    if v == target {
        return 100.0;
    }
    (100.0 * (1.0 - (v - target).abs() / target)).clamp(0.0, 100.0)
}

/// One-sided benchmark rule for ratio-based actuals: at or above the
/// threshold the score is 100, below it the score scales with the distance
/// from the threshold.
pub fn one_sided(actual: f64, threshold: f64) -> f64 {
    if actual >= threshold {
        100.0
    } else {
        (100.0 * actual / threshold).clamp(0.0, 100.0)
    }
}

/// Shannon–Wiener entropy H = -Σ pᵢ·ln pᵢ of one cell's category
/// proportions. Zero proportions contribute nothing (0·ln 0 = 0).
pub fn shannon_entropy(cell: &[f64]) -> f64 {
    -cell.iter().filter(|&&p| p > 0.0).map(|&p| p * p.ln()).sum::<f64>()
}

/// Mean entropy across analysis cells.
pub fn mean_entropy(cells: &[Vec<f64>]) -> f64 {
    if cells.is_empty() {
        return 0.0;
    }
    cells.iter().map(|c| shannon_entropy(c)).sum::<f64>() / cells.len() as f64
}

/// Shannon–Wiener diversity over per-cell category proportions, averaged
/// across cells and standardized against the maximum entropy ln(categories),
/// capped at 100.
pub fn shannon_mix(cells: &[Vec<f64>], categories: usize) -> f64 {
    if cells.is_empty() || categories < 2 {
        return 0.0;
    }
    (100.0 * mean_entropy(cells) / (categories as f64).ln()).min(100.0)
}

/// Round to two decimal places for display and persistence.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
