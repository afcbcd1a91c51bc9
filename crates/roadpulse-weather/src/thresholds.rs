//! Threshold tables mapping raw measurements to per-dimension risk scores.
//!
//! Thresholds are deployment configuration, not classifier logic: they are
//! deserializable and carry documented defaults, and the classifier only
//! ever consults them through [`ImpactThresholds`].

use serde::{Deserialize, Serialize};

use crate::reading::SurfaceCondition;

/// Three cut points splitting a measurement into scores 0 through 3.
///
/// Whether a measurement must exceed or fall below a cut point depends on
/// the dimension; see [`RiskBands::score_above`] and
/// [`RiskBands::score_below`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskBands {
    /// Boundary between score 0 and score 1.
    pub caution: f64,
    /// Boundary between score 1 and score 2.
    pub warning: f64,
    /// Boundary between score 2 and score 3.
    pub danger: f64,
}

impl RiskBands {
    /// Creates a band set.
    #[must_use]
    pub const fn new(caution: f64, warning: f64, danger: f64) -> Self {
        Self {
            caution,
            warning,
            danger,
        }
    }

    /// Scores a measurement where larger values are worse (wind, rain).
    #[must_use]
    pub fn score_above(&self, value: f64) -> u8 {
        if value > self.danger {
            3
        } else if value > self.warning {
            2
        } else if value > self.caution {
            1
        } else {
            0
        }
    }

    /// Scores a measurement where smaller values are worse (visibility).
    #[must_use]
    pub fn score_below(&self, value: f64) -> u8 {
        if value < self.danger {
            3
        } else if value < self.warning {
            2
        } else if value < self.caution {
            1
        } else {
            0
        }
    }
}

/// Categorical risk scores (0..=3) per road surface state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", default)]
pub struct SurfaceScores {
    /// Score for dry pavement.
    pub dry: u8,
    /// Score for damp pavement.
    pub damp: u8,
    /// Score for wet pavement.
    pub wet: u8,
    /// Score for snow-covered pavement.
    pub snow: u8,
    /// Score for icy pavement.
    pub ice: u8,
    /// Score for standing water.
    pub flooded: u8,
}

impl Default for SurfaceScores {
    fn default() -> Self {
        Self {
            dry: 0,
            damp: 1,
            wet: 2,
            snow: 2,
            ice: 3,
            flooded: 3,
        }
    }
}

impl SurfaceScores {
    /// Returns the configured score for a surface state.
    #[must_use]
    pub const fn score(&self, surface: SurfaceCondition) -> u8 {
        match surface {
            SurfaceCondition::Dry => self.dry,
            SurfaceCondition::Damp => self.damp,
            SurfaceCondition::Wet => self.wet,
            SurfaceCondition::Snow => self.snow,
            SurfaceCondition::Ice => self.ice,
            SurfaceCondition::Flooded => self.flooded,
        }
    }
}

/// Per-dimension threshold tables for the impact classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImpactThresholds {
    /// Visibility bands in kilometres; smaller is worse.
    pub visibility_km: RiskBands,
    /// Precipitation bands in mm/hr; larger is worse.
    pub precipitation_mm_per_hr: RiskBands,
    /// Wind bands in km/h; larger is worse.
    pub wind_speed_kph: RiskBands,
    /// Heat bands in °C; larger is worse.
    pub hot_temperature_c: RiskBands,
    /// Frost bands in °C; smaller is worse.
    pub cold_temperature_c: RiskBands,
    /// Categorical scores per road surface state.
    pub surface_condition: SurfaceScores,
}

impl Default for ImpactThresholds {
    /// Deployment defaults for the monitored road network.
    fn default() -> Self {
        Self {
            visibility_km: RiskBands::new(1.0, 0.5, 0.1),
            precipitation_mm_per_hr: RiskBands::new(5.0, 10.0, 20.0),
            wind_speed_kph: RiskBands::new(30.0, 40.0, 50.0),
            hot_temperature_c: RiskBands::new(35.0, 40.0, 45.0),
            cold_temperature_c: RiskBands::new(10.0, 5.0, 0.0),
            surface_condition: SurfaceScores::default(),
        }
    }
}

impl ImpactThresholds {
    /// Scores a temperature, taking the worse of the heat and frost bands.
    #[must_use]
    pub fn score_temperature(&self, celsius: f64) -> u8 {
        self.hot_temperature_c
            .score_above(celsius)
            .max(self.cold_temperature_c.score_below(celsius))
    }
}
