//! Report types — risk levels, aggregate analysis, result shapes.

use serde::{Deserialize, Serialize};

/// Categorical risk classification for a set of candidate paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Classify from the aggregate probability/impact of returned paths.
    ///
    /// Fixed thresholds: critical when average probability > 0.5 and max
    /// impact > 0.7; high when average probability > 0.3 or max impact
    /// > 0.6; medium when average probability > 0.1 or max impact > 0.4.
    pub fn classify(avg_probability: f64, max_impact: f64) -> Self {
        use foray_core::constants::*;

        if avg_probability > CRITICAL_PROBABILITY_THRESHOLD && max_impact > CRITICAL_IMPACT_THRESHOLD
        {
            Self::Critical
        } else if avg_probability > HIGH_PROBABILITY_THRESHOLD || max_impact > HIGH_IMPACT_THRESHOLD
        {
            Self::High
        } else if avg_probability > MEDIUM_PROBABILITY_THRESHOLD
            || max_impact > MEDIUM_IMPACT_THRESHOLD
        {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Numeric severity for ordering (higher = more severe).
    pub fn severity(&self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Critical => 4,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Aggregate risk over the returned top paths.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAnalysis {
    pub overall_risk: RiskLevel,
    pub avg_probability: f64,
    pub max_impact: f64,
    pub avg_detectability: f64,
    pub total_paths: usize,
    /// Present only when there is nothing to aggregate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl Default for RiskAnalysis {
    fn default() -> Self {
        Self {
            overall_risk: RiskLevel::Low,
            avg_probability: 0.0,
            max_impact: 0.0,
            avg_detectability: 0.0,
            total_paths: 0,
            analysis: None,
        }
    }
}

/// A ranked path as presented to the caller. Scalars are rounded to
/// 4 decimal places at this boundary; full precision lives in
/// [`crate::graph::ScoredPath`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictedPath {
    pub nodes: Vec<String>,
    pub path_length: usize,
    pub probability: f64,
    pub impact: f64,
    pub detectability: f64,
    pub complexity: f64,
    pub risk_score: f64,
    pub description: String,
}

/// Complete result of a prediction query.
///
/// The query surface never fails with an `Err`: an unknown source is
/// reported through `success = false` and a descriptive `error`, with
/// every other field at its empty shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub success: bool,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    pub paths_found: usize,
    pub top_paths: Vec<PredictedPath>,
    pub risk_analysis: RiskAnalysis,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
