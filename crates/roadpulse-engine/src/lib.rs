//! Advisory rule engine for RoadPulse.
//!
//! `roadpulse-engine` ties the pieces together: it pulls alert rules from
//! a [`RuleStore`](roadpulse_rules::RuleStore), evaluates each live rule
//! against a per-pass [`SignalContext`](roadpulse_rules::SignalContext),
//! and emits an ordered list of [`TriggeredAction`] values for a
//! downstream [`ActionDispatcher`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use roadpulse_engine::{ActionDispatcher, LogDispatcher, RuleEngine};
//! use roadpulse_rules::{
//!     Condition, ConditionOperator, GeoPoint, MemoryRuleStore, RuleDraft, RuleStore,
//!     SignalContext, TrafficSnapshot,
//! };
//! use roadpulse_weather::{ImpactThresholds, WeatherReading};
//!
//! // Persist a rule: advise drivers when visibility drops below 1 km.
//! let store = MemoryRuleStore::new();
//! store
//!     .create(
//!         RuleDraft::new("FogAdvisory")
//!             .condition(Condition::new("weather.visibilityKm", ConditionOperator::Lt, 1.0).unwrap())
//!             .priority("high"),
//!     )
//!     .unwrap();
//!
//! let engine = RuleEngine::new(Arc::new(store));
//!
//! // One evaluation pass: telemetry in, ordered actions out.
//! let ctx = SignalContext::from_telemetry(
//!     GeoPoint::new(24.7136, 46.6753),
//!     WeatherReading::new().with_visibility_km(0.5),
//!     TrafficSnapshot::default(),
//!     &ImpactThresholds::default(),
//! );
//!
//! let triggered = engine.evaluate_all(&ctx).unwrap();
//! assert_eq!(triggered.len(), 1);
//!
//! // Hand the batch to a dispatcher; delivery is its concern, not ours.
//! LogDispatcher::default().dispatch(&triggered).unwrap();
//! ```
//!
//! Each pass is independent and side-effect-free apart from the store
//! read: there are no retries, no caches, and no state carried between
//! invocations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod dispatch;
pub mod engine;

// Re-export main types at crate root
pub use dispatch::{ActionDispatcher, DispatchOutcome, LogDispatcher};
pub use engine::{RuleEngine, TriggeredAction};
