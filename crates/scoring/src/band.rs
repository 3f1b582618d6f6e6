//! Qualitative performance bands for numeric scores.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A qualitative label for a score range.
///
/// Ranges are closed below and open above, except [`ScoreBand::Expert`]
/// which is closed at 5.0. Together they cover [1, 5] without overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScoreBand {
    Low,
    Developing,
    Competent,
    Strong,
    Expert,
}

impl ScoreBand {
    /// All bands from lowest to highest.
    pub const ALL: [ScoreBand; 5] = [
        ScoreBand::Low,
        ScoreBand::Developing,
        ScoreBand::Competent,
        ScoreBand::Strong,
        ScoreBand::Expert,
    ];

    /// Classify a score. Thresholds are evaluated highest first.
    pub fn for_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::Expert
        } else if score >= 4.0 {
            Self::Strong
        } else if score >= 3.0 {
            Self::Competent
        } else if score >= 2.0 {
            Self::Developing
        } else {
            Self::Low
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Developing => "Developing",
            Self::Competent => "Competent",
            Self::Strong => "Strong",
            Self::Expert => "Expert",
        }
    }

    /// Lower (inclusive) and upper bound of the band.
    pub fn range(&self) -> (f64, f64) {
        match self {
            Self::Low => (1.0, 2.0),
            Self::Developing => (2.0, 3.0),
            Self::Competent => (3.0, 4.0),
            Self::Strong => (4.0, 4.5),
            Self::Expert => (4.5, 5.0),
        }
    }

    /// Whether `score` falls inside this band's range.
    pub fn contains(&self, score: f64) -> bool {
        let (min, max) = self.range();
        match self {
            Self::Expert => score >= min && score <= max,
            _ => score >= min && score < max,
        }
    }

    /// Foreground color used by reports.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low => "#ef4444",
            Self::Developing => "#f59e0b",
            Self::Competent => "#eab308",
            Self::Strong => "#22c55e",
            Self::Expert => "#fbbf24",
        }
    }

    /// Background color used by reports.
    pub fn bg_color(&self) -> &'static str {
        match self {
            Self::Low => "#fef2f2",
            Self::Developing => "#fffbeb",
            Self::Competent => "#fefce8",
            Self::Strong => "#f0fdf4",
            Self::Expert => "#fffbeb",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
