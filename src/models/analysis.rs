use super::parameter::{Parameter, SampleKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Water quality status tier, ordered from best to worst.
/// `Danger` is the most severe; aggregation relies on this ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StatusTier {
    Excellent,
    Good,
    Warning,
    Danger,
}

impl StatusTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTier::Excellent => "Excellent",
            StatusTier::Good => "Good",
            StatusTier::Warning => "Warning",
            StatusTier::Danger => "Danger",
        }
    }

    /// Point value used by the aggregation score.
    pub fn points(&self) -> f64 {
        match self {
            StatusTier::Excellent => 5.0,
            StatusTier::Good => 4.0,
            StatusTier::Warning => 2.0,
            StatusTier::Danger => 0.0,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StatusTier::Excellent => "✓",
            StatusTier::Good => "•",
            StatusTier::Warning => "⚠",
            StatusTier::Danger => "!",
        }
    }
}

impl std::fmt::Display for StatusTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Routine,
    Moderate,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Routine => "Routine",
            Priority::Moderate => "Moderate",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived sub-value computed from a reading plus context.
/// Absent when the required context (pH/temperature) was not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DerivedValue {
    /// Un-ionized (toxic) ammonia, from the Henderson-Hasselbalch split.
    FreeAmmonia {
        mg_per_l: f64,
        fraction_percent: f64,
    },
    /// Measured oxygen relative to the temperature-dependent solubility limit.
    OxygenSaturation {
        percent: f64,
        saturation_mg_per_l: f64,
    },
}

/// Classification of a single parameter reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub parameter: Parameter,
    pub value: f64,
    pub tier: StatusTier,
    /// Human-readable band label, e.g. "critically alkaline".
    pub level: String,
    /// Most important first. Empty for bands that need no action.
    pub recommendations: Vec<String>,
    /// Scientific basis for the classification. Deterministic for
    /// identical inputs.
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub derived: Option<DerivedValue>,
}

/// Roll-up of all analyzed parameters in one sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallAssessment {
    /// Mean of per-tier point values over the analyzed parameters.
    pub score: f64,
    pub tier: StatusTier,
    pub priority: Priority,
    pub danger_parameters: Vec<Parameter>,
    pub warning_parameters: Vec<Parameter>,
    /// Consolidated, deduplicated, ordered. Ends with a retest suggestion.
    pub recommendations: Vec<String>,
}

/// Full analysis of one test sample: per-parameter results in analysis
/// order plus the overall assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterReport {
    pub taken_at: DateTime<Utc>,
    pub kind: SampleKind,
    pub results: Vec<AnalysisResult>,
    pub overall: OverallAssessment,
}
