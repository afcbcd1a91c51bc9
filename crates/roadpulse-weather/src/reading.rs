//! Raw weather telemetry as delivered by the upstream weather source.

use serde::{Deserialize, Serialize};

/// Categorical description of the road surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceCondition {
    /// Dry pavement, normal grip.
    Dry,
    /// Damp pavement, slightly reduced grip.
    Damp,
    /// Wet pavement, reduced grip.
    Wet,
    /// Snow-covered pavement.
    Snow,
    /// Icy pavement.
    Ice,
    /// Standing water on the pavement.
    Flooded,
}

impl SurfaceCondition {
    /// Returns the condition as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dry => "dry",
            Self::Damp => "damp",
            Self::Wet => "wet",
            Self::Snow => "snow",
            Self::Ice => "ice",
            Self::Flooded => "flooded",
        }
    }
}

impl std::fmt::Display for SurfaceCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single current-weather reading.
///
/// Every measurement is optional: upstream sources routinely omit fields,
/// and the classifier treats a missing value as unknown rather than
/// failing. Field names follow the upstream wire format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherReading {
    /// Horizontal visibility in kilometres.
    pub visibility_km: Option<f64>,
    /// Precipitation intensity in millimetres per hour.
    pub precipitation_mm_per_hr: Option<f64>,
    /// Sustained wind speed in kilometres per hour.
    pub wind_speed_kph: Option<f64>,
    /// Air temperature in degrees Celsius.
    pub temperature_c: Option<f64>,
    /// Observed road surface state.
    pub surface_condition: Option<SurfaceCondition>,
}

impl WeatherReading {
    /// Creates an empty reading with every field unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the visibility in kilometres.
    #[must_use]
    pub const fn with_visibility_km(mut self, km: f64) -> Self {
        self.visibility_km = Some(km);
        self
    }

    /// Sets the precipitation intensity in mm/hr.
    #[must_use]
    pub const fn with_precipitation_mm_per_hr(mut self, mm: f64) -> Self {
        self.precipitation_mm_per_hr = Some(mm);
        self
    }

    /// Sets the wind speed in km/h.
    #[must_use]
    pub const fn with_wind_speed_kph(mut self, kph: f64) -> Self {
        self.wind_speed_kph = Some(kph);
        self
    }

    /// Sets the air temperature in °C.
    #[must_use]
    pub const fn with_temperature_c(mut self, celsius: f64) -> Self {
        self.temperature_c = Some(celsius);
        self
    }

    /// Sets the road surface condition.
    #[must_use]
    pub const fn with_surface_condition(mut self, condition: SurfaceCondition) -> Self {
        self.surface_condition = Some(condition);
        self
    }
}
