//! Weather driving-impact classification for RoadPulse.
//!
//! `roadpulse-weather` turns a raw current-weather reading into a
//! structured [`ImpactAssessment`]: an overall risk level, the set of
//! affected weather dimensions, and human-readable driving advisories.
//!
//! Classification is a pure function with no state or I/O. Each weather
//! dimension maps independently to a risk score of 0..=3 through
//! configurable [`ImpactThresholds`]; the overall level is the maximum
//! score, escalated to [`RiskLevel::Severe`] when two or more dimensions
//! score at warning level or above simultaneously (compounding hazards
//! such as fog plus high wind).
//!
//! # Example
//!
//! ```rust
//! use roadpulse_weather::{classify, ImpactThresholds, RiskLevel, WeatherReading};
//!
//! let reading = WeatherReading::new()
//!     .with_visibility_km(0.3)
//!     .with_wind_speed_kph(70.0);
//!
//! let assessment = classify(&reading, &ImpactThresholds::default());
//!
//! assert_eq!(assessment.risk_level, RiskLevel::Severe);
//! for advisory in &assessment.recommendations {
//!     println!("{advisory}");
//! }
//! ```
//!
//! Missing or out-of-range measurements are treated as unknown and
//! excluded from scoring; a partial reading still produces a usable
//! assessment.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assessment;
pub mod classifier;
pub mod reading;
pub mod thresholds;

// Re-export main types at crate root
pub use assessment::{ImpactAssessment, RiskLevel, WeatherFactor};
pub use classifier::classify;
pub use reading::{SurfaceCondition, WeatherReading};
pub use thresholds::{ImpactThresholds, RiskBands, SurfaceScores};
