//! Condition evaluation: matching a single rule against a signal context.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::condition::Condition;
use crate::context::SignalContext;
use crate::rule::AlertRule;

/// The outcome of evaluating one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionOutcome {
    /// The evaluated condition.
    pub condition: Condition,
    /// Whether it matched.
    pub matched: bool,
}

/// The outcome of evaluating a rule's full condition set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// True if every condition matched.
    pub matched: bool,
    /// Per-condition trace in evaluation order. On a failed match the
    /// trace ends at the first failing condition (evaluation
    /// short-circuits) but still names it, so the failure is explainable.
    pub trace: Vec<ConditionOutcome>,
}

impl MatchResult {
    /// A no-match result with an empty trace.
    #[must_use]
    pub const fn no_match() -> Self {
        Self {
            matched: false,
            trace: Vec::new(),
        }
    }
}

/// Evaluates a single rule's conditions against a signal context.
///
/// Conditions combine with logical AND and evaluate left to right,
/// short-circuiting on the first failure. An empty condition set never
/// matches (deny by default), and a condition whose field path does not
/// resolve is a failed condition, never an error.
#[must_use]
pub fn evaluate(rule: &AlertRule, ctx: &SignalContext) -> MatchResult {
    if rule.conditions.is_empty() {
        return MatchResult::no_match();
    }

    let mut trace = Vec::with_capacity(rule.conditions.len());

    for condition in &rule.conditions {
        let matched = ctx
            .resolve(&condition.field)
            .is_some_and(|resolved| condition.operator.apply(&resolved, &condition.value));

        trace.push(ConditionOutcome {
            condition: condition.clone(),
            matched,
        });

        if !matched {
            debug!(
                rule_id = %rule.id,
                condition = %condition,
                "condition failed, rule does not match"
            );
            return MatchResult {
                matched: false,
                trace,
            };
        }
    }

    MatchResult {
        matched: true,
        trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionOperator;
    use crate::context::{GeoPoint, TrafficSnapshot};
    use crate::value::FieldValue;
    use roadpulse_weather::{ImpactThresholds, WeatherReading};

    fn foggy_congested_context() -> SignalContext {
        SignalContext::from_telemetry(
            GeoPoint::new(24.7136, 46.6753),
            WeatherReading::new().with_visibility_km(0.5),
            TrafficSnapshot {
                congestion_level: 82.0,
                average_speed_kph: 18.0,
                vehicle_density: 45.0,
                incident_count: 0,
            },
            &ImpactThresholds::default(),
        )
    }

    fn condition(field: &str, op: ConditionOperator, value: impl Into<FieldValue>) -> Condition {
        Condition::new(field, op, value).unwrap()
    }

    #[test]
    fn empty_conditions_never_match() {
        let rule = AlertRule::builder("NoOp").build().unwrap();
        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);
        assert!(result.trace.is_empty());
    }

    #[test]
    fn single_condition_match() {
        let rule = AlertRule::builder("LowVisibility")
            .condition(condition("weather.visibilityKm", ConditionOperator::Lt, 1.0))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(result.matched);
        assert_eq!(result.trace.len(), 1);
        assert!(result.trace[0].matched);
    }

    #[test]
    fn single_condition_no_match() {
        let rule = AlertRule::builder("ClearVisibility")
            .condition(condition("weather.visibilityKm", ConditionOperator::Gt, 5.0))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);
        assert_eq!(result.trace.len(), 1);
        assert!(!result.trace[0].matched);
    }

    #[test]
    fn conditions_are_anded() {
        let rule = AlertRule::builder("CongestionInFog")
            .condition(condition("weather.visibilityKm", ConditionOperator::Lt, 1.0))
            .condition(condition(
                "traffic.congestionLevel",
                ConditionOperator::Gte,
                70.0,
            ))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(result.matched);
        assert_eq!(result.trace.len(), 2);
        assert!(result.trace.iter().all(|outcome| outcome.matched));
    }

    #[test]
    fn short_circuits_on_first_failure() {
        let rule = AlertRule::builder("NeverReached")
            .condition(condition(
                "traffic.congestionLevel",
                ConditionOperator::Gte,
                95.0,
            ))
            .condition(condition("weather.visibilityKm", ConditionOperator::Lt, 1.0))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);
        // The second condition was never evaluated, but the trace names
        // the failing one.
        assert_eq!(result.trace.len(), 1);
        assert_eq!(result.trace[0].condition.field, "traffic.congestionLevel");
        assert!(!result.trace[0].matched);
    }

    #[test]
    fn unresolvable_field_is_a_non_match() {
        let rule = AlertRule::builder("SchemaDrift")
            .condition(condition("weather.humidity", ConditionOperator::Gt, 50.0))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);
        assert_eq!(result.trace.len(), 1);
    }

    #[test]
    fn missing_measurement_is_a_non_match() {
        // The context reading has no temperature; any operator on it fails.
        let rule = AlertRule::builder("FrostCheck")
            .condition(condition("weather.temperatureC", ConditionOperator::Lt, 0.0))
            .build()
            .unwrap();

        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);
    }

    #[test]
    fn categorical_and_membership_conditions() {
        let rule = AlertRule::builder("FactorWatch")
            .condition(condition(
                "weather.riskLevel",
                ConditionOperator::In,
                FieldValue::List(vec![FieldValue::from("moderate"), FieldValue::from("high")]),
            ))
            .condition(condition(
                "weather.affectedFactors",
                ConditionOperator::Contains,
                "visibility",
            ))
            .build()
            .unwrap();

        // Visibility 0.5 km scores 1 -> low risk; the `in` list misses it.
        let result = evaluate(&rule, &foggy_congested_context());
        assert!(!result.matched);

        let dense_fog = SignalContext::from_telemetry(
            GeoPoint::new(24.7136, 46.6753),
            WeatherReading::new().with_visibility_km(0.3),
            TrafficSnapshot::default(),
            &ImpactThresholds::default(),
        );
        let result = evaluate(&rule, &dense_fog);
        assert!(result.matched);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let rule = AlertRule::builder("Stable")
            .condition(condition("weather.visibilityKm", ConditionOperator::Lt, 1.0))
            .build()
            .unwrap();
        let ctx = foggy_congested_context();

        assert_eq!(evaluate(&rule, &ctx), evaluate(&rule, &ctx));
    }
}
