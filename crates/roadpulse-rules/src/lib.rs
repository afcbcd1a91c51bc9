//! Alert rule model, condition evaluation, and rule storage for RoadPulse.
//!
//! This crate provides the building blocks of the advisory rule engine:
//!
//! - [`AlertRule`]: a named, prioritized set of conditions plus opaque
//!   action payloads, persisted through a [`RuleStore`]
//! - [`Condition`]: a single predicate (field path, operator, operand)
//!   over the [`SignalContext`]
//! - [`SignalContext`]: the read-only per-pass snapshot of location,
//!   weather impact, and traffic signals
//! - [`evaluate`]: matches one rule against one context, returning a
//!   per-condition trace for explainability
//!
//! # Example
//!
//! ```rust
//! use roadpulse_rules::{
//!     evaluate, AlertRule, Condition, ConditionOperator, GeoPoint, RulePriority,
//!     SignalContext, TrafficSnapshot,
//! };
//! use roadpulse_weather::{ImpactThresholds, WeatherReading};
//!
//! let rule = AlertRule::builder("FogAdvisory")
//!     .condition(Condition::new("weather.visibilityKm", ConditionOperator::Lt, 1.0).unwrap())
//!     .priority(RulePriority::High)
//!     .build()
//!     .unwrap();
//!
//! let ctx = SignalContext::from_telemetry(
//!     GeoPoint::new(24.7136, 46.6753),
//!     WeatherReading::new().with_visibility_km(0.5),
//!     TrafficSnapshot::default(),
//!     &ImpactThresholds::default(),
//! );
//!
//! assert!(evaluate(&rule, &ctx).matched);
//! ```
//!
//! Conditions within a rule are AND-only; OR semantics are expressed by
//! creating multiple rules. Condition evaluation fails closed: type
//! mismatches and unresolvable field paths are non-matches, never errors.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod condition;
pub mod context;
pub mod error;
pub mod evaluator;
pub mod rule;
pub mod store;
pub mod value;

// Re-export main types at crate root
pub use condition::{Condition, ConditionOperator};
pub use context::{GeoPoint, SignalContext, TrafficSnapshot, WeatherSignal};
pub use error::{Result, RuleError};
pub use evaluator::{evaluate, ConditionOutcome, MatchResult};
pub use rule::{ActionMap, AlertRule, AlertRuleBuilder, RuleDraft, RulePriority};
pub use store::{MemoryRuleStore, RuleStore};
