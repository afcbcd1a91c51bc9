//! The classifier's structured output describing weather-driven driving risk.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Overall driving-risk level derived from a weather reading.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No weather-driven risk.
    #[default]
    None,
    /// Minor impact, normal driving with attention.
    Low,
    /// Noticeable impact, speed and distance adjustments advised.
    Moderate,
    /// Serious impact from a single hazard.
    High,
    /// Compounding hazards, travel discouraged.
    Severe,
}

impl RiskLevel {
    /// Returns the level as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Severe => "severe",
        }
    }

    /// Maps a per-dimension score (0..=3) to the corresponding level.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            0 => Self::None,
            1 => Self::Low,
            2 => Self::Moderate,
            _ => Self::High,
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A weather dimension that can affect driving.
///
/// Declaration order is the fixed advisory priority order: recommendations
/// are emitted for visibility first and temperature last.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum WeatherFactor {
    /// Horizontal visibility.
    Visibility,
    /// Rain or other precipitation intensity.
    Precipitation,
    /// Sustained wind.
    Wind,
    /// Road surface state.
    RoadSurface,
    /// Temperature extremity (heat or frost).
    Temperature,
}

impl WeatherFactor {
    /// Returns the factor as a string, matching the wire format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visibility => "visibility",
            Self::Precipitation => "precipitation",
            Self::Wind => "wind",
            Self::RoadSurface => "roadSurface",
            Self::Temperature => "temperature",
        }
    }
}

impl std::fmt::Display for WeatherFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured driving-impact assessment produced by the classifier.
///
/// Immutable once produced; one instance per classification call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAssessment {
    /// Overall risk level.
    pub risk_level: RiskLevel,
    /// Dimensions contributing any risk (score >= 1).
    pub affected_factors: BTreeSet<WeatherFactor>,
    /// Per-dimension risk scores (0..=3) for every known dimension.
    pub factor_scores: BTreeMap<WeatherFactor, u8>,
    /// Human-readable advisories in fixed factor priority order.
    pub recommendations: Vec<String>,
}

impl ImpactAssessment {
    /// Returns a 0-100 driving-safety score derived from the per-dimension
    /// scores (100 = no weather impact). Informational only; rule
    /// conditions may reference it via the signal context.
    #[must_use]
    pub fn safety_score(&self) -> f64 {
        if self.factor_scores.is_empty() {
            return 100.0;
        }

        let total: f64 = self
            .factor_scores
            .values()
            .map(|score| match score {
                0 => 100.0,
                1 => 75.0,
                2 => 50.0,
                _ => 20.0,
            })
            .sum();

        total / self.factor_scores.len() as f64
    }

    /// Returns true if the given factor contributes any risk.
    #[must_use]
    pub fn affects(&self, factor: WeatherFactor) -> bool {
        self.affected_factors.contains(&factor)
    }

    /// One-line summary of the assessment, naming the contributing
    /// factors in advisory priority order. Suitable for banners and log
    /// lines where the full recommendation list is too long.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.affected_factors.is_empty() {
            return "Driving conditions are safe".to_string();
        }

        let factors = self
            .affected_factors
            .iter()
            .map(WeatherFactor::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match self.risk_level {
            RiskLevel::Severe => {
                format!("Dangerous driving conditions ({factors}); avoid travel if possible")
            }
            RiskLevel::High => {
                format!("Difficult driving conditions ({factors}); caution advised")
            }
            RiskLevel::Moderate => {
                format!("Degraded driving conditions ({factors}); stay alert")
            }
            RiskLevel::Low | RiskLevel::None => {
                format!("Minor weather impact ({factors})")
            }
        }
    }
}
