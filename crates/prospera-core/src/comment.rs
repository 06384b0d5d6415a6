//! Qualitative comment classification.
//!
//! A standardized score maps to one of six ordinal labels via fixed half-open
//! bins. The land-use-mix indicator family uses a distinct seven-bin label
//! set; that is a domain variant, not an alternative spelling of the same
//! scale, so it gets its own type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown wherever a score is absent. Never a label.
pub const NO_VALUE: &str = "-";

/// The six ordinal labels attached to standardized scores and rollups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Comment {
    #[serde(rename = "VERY WEAK")]
    VeryWeak,
    #[serde(rename = "WEAK")]
    Weak,
    #[serde(rename = "MODERATELY WEAK")]
    ModeratelyWeak,
    #[serde(rename = "MODERATELY SOLID")]
    ModeratelySolid,
    #[serde(rename = "SOLID")]
    Solid,
    #[serde(rename = "VERY SOLID")]
    VerySolid,
}

impl Comment {
    pub fn label(&self) -> &'static str {
        match self {
            Comment::VerySolid => "VERY SOLID",
            Comment::Solid => "SOLID",
            Comment::ModeratelySolid => "MODERATELY SOLID",
            Comment::ModeratelyWeak => "MODERATELY WEAK",
            Comment::Weak => "WEAK",
            Comment::VeryWeak => "VERY WEAK",
        }
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a standardized score into the six-bin scale.
/// Bins: [80,100] VERY SOLID, [70,80) SOLID, [60,70) MODERATELY SOLID,
/// [50,60) MODERATELY WEAK, [40,50) WEAK, [0,40) VERY WEAK.
pub fn classify(score: f64) -> Comment {
    if score >= 80.0 {
        Comment::VerySolid
    } else if score >= 70.0 {
        Comment::Solid
    } else if score >= 60.0 {
        Comment::ModeratelySolid
    } else if score >= 50.0 {
        Comment::ModeratelyWeak
    } else if score >= 40.0 {
        Comment::Weak
    } else {
        Comment::VeryWeak
    }
}

/// Comment label for an optional score; absent or non-finite scores yield the
/// "-" sentinel rather than a label.
pub fn label_for(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => classify(s).label().to_string(),
        _ => NO_VALUE.to_string(),
    }
}

/// The seven-bin label set used only by the land-use diversity family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MixComment {
    #[serde(rename = "VERY POOR MIX")]
    VeryPoor,
    #[serde(rename = "POOR MIX")]
    Poor,
    #[serde(rename = "FAIR MIX")]
    Fair,
    #[serde(rename = "MODERATE MIX")]
    Moderate,
    #[serde(rename = "GOOD MIX")]
    Good,
    #[serde(rename = "VERY GOOD MIX")]
    VeryGood,
    #[serde(rename = "EXCELLENT MIX")]
    Excellent,
}

impl MixComment {
    pub fn label(&self) -> &'static str {
        match self {
            MixComment::Excellent => "EXCELLENT MIX",
            MixComment::VeryGood => "VERY GOOD MIX",
            MixComment::Good => "GOOD MIX",
            MixComment::Moderate => "MODERATE MIX",
            MixComment::Fair => "FAIR MIX",
            MixComment::Poor => "POOR MIX",
            MixComment::VeryPoor => "VERY POOR MIX",
        }
    }
}

impl fmt::Display for MixComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a land-use diversity score into the seven-bin scale.
pub fn classify_mix(score: f64) -> MixComment {
    if score >= 90.0 {
        MixComment::Excellent
    } else if score >= 80.0 {
        MixComment::VeryGood
    } else if score >= 70.0 {
        MixComment::Good
    } else if score >= 60.0 {
        MixComment::Moderate
    } else if score >= 50.0 {
        MixComment::Fair
    } else if score >= 40.0 {
        MixComment::Poor
    } else {
        MixComment::VeryPoor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_edges() {
        assert_eq!(classify(100.0), Comment::VerySolid);
        assert_eq!(classify(80.0), Comment::VerySolid);
        assert_eq!(classify(79.99), Comment::Solid);
        assert_eq!(classify(70.0), Comment::Solid);
        assert_eq!(classify(69.99), Comment::ModeratelySolid);
        assert_eq!(classify(60.0), Comment::ModeratelySolid);
        assert_eq!(classify(50.0), Comment::ModeratelyWeak);
        assert_eq!(classify(40.0), Comment::Weak);
        assert_eq!(classify(39.99), Comment::VeryWeak);
        assert_eq!(classify(0.0), Comment::VeryWeak);
    }

    #[test]
    fn test_monotonic_in_solidity() {
        let labels: Vec<Comment> = [0.0, 45.0, 55.0, 65.0, 75.0, 85.0]
            .iter()
            .map(|&s| classify(s))
            .collect();
        for pair in labels.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_absent_score_is_sentinel() {
        assert_eq!(label_for(None), NO_VALUE);
        assert_eq!(label_for(Some(f64::NAN)), NO_VALUE);
        assert_eq!(label_for(Some(76.56)), "SOLID");
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&Comment::VerySolid).unwrap();
        assert_eq!(json, "\"VERY SOLID\"");
        let back: Comment = serde_json::from_str("\"MODERATELY WEAK\"").unwrap();
        assert_eq!(back, Comment::ModeratelyWeak);
    }

    #[test]
    fn test_mix_bins() {
        assert_eq!(classify_mix(95.0), MixComment::Excellent);
        assert_eq!(classify_mix(88.14), MixComment::VeryGood);
        assert_eq!(classify_mix(10.0), MixComment::VeryPoor);
    }
}
