//! The read-only signal snapshot evaluated against rules.

use serde::{Deserialize, Serialize};

use roadpulse_weather::{
    classify, ImpactAssessment, ImpactThresholds, WeatherReading,
};

use crate::value::FieldValue;

/// A geographic coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Current traffic metrics for the evaluated location.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrafficSnapshot {
    /// Congestion index on a 0-100 scale (0 = free flow).
    pub congestion_level: f64,
    /// Average observed speed in km/h.
    pub average_speed_kph: f64,
    /// Vehicle density (vehicles per km per lane).
    pub vehicle_density: f64,
    /// Number of active incidents on the segment.
    pub incident_count: u32,
}

/// Weather signals: the raw reading plus its impact assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSignal {
    /// The raw reading the assessment was derived from.
    pub reading: WeatherReading,
    /// The structured driving-impact assessment.
    pub impact: ImpactAssessment,
}

/// Read-only snapshot assembled per evaluation cycle: location, weather
/// impact, and traffic metrics. Never mutated after construction; one
/// instance per evaluation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalContext {
    /// The evaluated location.
    pub location: GeoPoint,
    /// Weather reading and assessment.
    pub weather: WeatherSignal,
    /// Current traffic metrics.
    pub traffic: TrafficSnapshot,
}

impl SignalContext {
    /// Assembles a context from already-classified weather.
    #[must_use]
    pub const fn new(
        location: GeoPoint,
        weather: WeatherSignal,
        traffic: TrafficSnapshot,
    ) -> Self {
        Self {
            location,
            weather,
            traffic,
        }
    }

    /// Assembles a context directly from telemetry, running the impact
    /// classifier on the reading.
    #[must_use]
    pub fn from_telemetry(
        location: GeoPoint,
        reading: WeatherReading,
        traffic: TrafficSnapshot,
        thresholds: &ImpactThresholds,
    ) -> Self {
        let impact = classify(&reading, thresholds);
        Self {
            location,
            weather: WeatherSignal { reading, impact },
            traffic,
        }
    }

    /// Resolves a dotted field path to its current value.
    ///
    /// Paths use the wire-format field names (`weather.visibilityKm`,
    /// `traffic.congestionLevel`, ...). An unknown path, or a known path
    /// whose measurement is missing from the reading, resolves to `None`;
    /// the evaluator treats both as a failed condition rather than an
    /// error so that schema drift degrades gracefully.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<FieldValue> {
        match path {
            "location.lat" => Some(self.location.lat.into()),
            "location.lng" => Some(self.location.lng.into()),
            "weather.visibilityKm" => self.weather.reading.visibility_km.map(FieldValue::from),
            "weather.precipitationMmPerHr" => {
                self.weather.reading.precipitation_mm_per_hr.map(FieldValue::from)
            }
            "weather.windSpeedKph" => self.weather.reading.wind_speed_kph.map(FieldValue::from),
            "weather.temperatureC" => self.weather.reading.temperature_c.map(FieldValue::from),
            "weather.surfaceCondition" => self
                .weather
                .reading
                .surface_condition
                .map(|surface| surface.as_str().into()),
            "weather.riskLevel" => Some(self.weather.impact.risk_level.as_str().into()),
            "weather.safetyScore" => Some(self.weather.impact.safety_score().into()),
            "weather.affectedFactors" => Some(FieldValue::List(
                self.weather
                    .impact
                    .affected_factors
                    .iter()
                    .map(|factor| factor.as_str().into())
                    .collect(),
            )),
            "traffic.congestionLevel" => Some(self.traffic.congestion_level.into()),
            "traffic.averageSpeedKph" => Some(self.traffic.average_speed_kph.into()),
            "traffic.vehicleDensity" => Some(self.traffic.vehicle_density.into()),
            "traffic.incidentCount" => Some(f64::from(self.traffic.incident_count).into()),
            _ => None,
        }
    }

    /// The field paths [`SignalContext::resolve`] understands, for
    /// administrative surfaces that validate conditions at creation time.
    #[must_use]
    pub const fn known_fields() -> &'static [&'static str] {
        &[
            "location.lat",
            "location.lng",
            "weather.visibilityKm",
            "weather.precipitationMmPerHr",
            "weather.windSpeedKph",
            "weather.temperatureC",
            "weather.surfaceCondition",
            "weather.riskLevel",
            "weather.safetyScore",
            "weather.affectedFactors",
            "traffic.congestionLevel",
            "traffic.averageSpeedKph",
            "traffic.vehicleDensity",
            "traffic.incidentCount",
        ]
    }
}
