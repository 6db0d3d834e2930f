//! Risk-band tables — the numeric thresholds and the color mapping.
//!
//! Two independent display mappings share the same three-tier boundary:
//! a score of 7.0 or more is High, 4.0 up to (but not including) 7.0 is
//! Medium, anything below 4.0 is Low. Process-level risk maps directly to the
//! same color table: High → Red, Medium → Amber, Low → Green.

use serde::{Deserialize, Serialize};

use crate::model::RiskLevel;

/// Band boundary: scores at or above this are High.
pub const HIGH_THRESHOLD: f64 = 7.0;
/// Band boundary: scores at or above this (and below [`HIGH_THRESHOLD`]) are Medium.
pub const MEDIUM_THRESHOLD: f64 = 4.0;

/// Severity tier derived from a numeric risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

/// Display color token for a risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandColor {
    Red,
    Amber,
    Green,
}

impl ScoreBand {
    /// Classify a score into its band. Total over all finite scores.
    pub fn of(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            ScoreBand::High
        } else if score >= MEDIUM_THRESHOLD {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }

    pub fn color(self) -> BandColor {
        match self {
            ScoreBand::High => BandColor::Red,
            ScoreBand::Medium => BandColor::Amber,
            ScoreBand::Low => BandColor::Green,
        }
    }
}

impl RiskLevel {
    /// Badge color for a process-level risk tier.
    pub fn color(self) -> BandColor {
        match self {
            RiskLevel::High => BandColor::Red,
            RiskLevel::Medium => BandColor::Amber,
            RiskLevel::Low => BandColor::Green,
        }
    }
}
