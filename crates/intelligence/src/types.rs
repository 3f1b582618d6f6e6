//! Common types shared across recommendation modules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How much development a competency needs.
///
/// Selects which intervention set of the library applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentLevel {
    Priority,
    Developing,
    Sustain,
}

impl DevelopmentLevel {
    pub const ALL: [DevelopmentLevel; 3] = [
        DevelopmentLevel::Priority,
        DevelopmentLevel::Developing,
        DevelopmentLevel::Sustain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Priority => "priority",
            Self::Developing => "developing",
            Self::Sustain => "sustain",
        }
    }

    /// Coarse timeframe implied by the level.
    pub fn timeframe(&self) -> Timeframe {
        match self {
            Self::Priority => Timeframe::Immediate,
            Self::Developing => Timeframe::ShortTerm,
            Self::Sustain => Timeframe::Ongoing,
        }
    }
}

impl fmt::Display for DevelopmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency of a competency recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

impl PriorityTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timeframe tag attached to a competency recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeframe {
    Immediate,
    ShortTerm,
    Ongoing,
}

impl Timeframe {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Immediate => "immediate",
            Self::ShortTerm => "short-term",
            Self::Ongoing => "ongoing",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Phase of the intervention plan an item is scheduled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceWindow {
    #[serde(rename = "0-2 weeks")]
    Weeks0To2,
    #[serde(rename = "2-6 weeks")]
    Weeks2To6,
}

impl SequenceWindow {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weeks0To2 => "0-2 weeks",
            Self::Weeks2To6 => "2-6 weeks",
        }
    }
}

impl fmt::Display for SequenceWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
