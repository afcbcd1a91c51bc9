//! The weather impact classifier.
//!
//! [`classify`] is a pure, total function: any well-formed reading produces
//! an assessment. Missing or physically invalid measurements are treated as
//! unknown and excluded from scoring rather than raised as errors, so a
//! partial reading still yields a usable assessment.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::assessment::{ImpactAssessment, RiskLevel, WeatherFactor};
use crate::reading::WeatherReading;
use crate::thresholds::ImpactThresholds;

/// Dimensions scoring at least this are counted toward escalation.
const ESCALATION_SCORE: u8 = 2;
/// This many escalation-level dimensions at once force [`RiskLevel::Severe`].
const ESCALATION_COUNT: usize = 2;

/// Classifies a weather reading into a structured driving-impact assessment.
#[must_use]
pub fn classify(reading: &WeatherReading, thresholds: &ImpactThresholds) -> ImpactAssessment {
    let mut factor_scores = BTreeMap::new();

    if let Some(km) = valid_magnitude(reading.visibility_km) {
        factor_scores.insert(
            WeatherFactor::Visibility,
            thresholds.visibility_km.score_below(km),
        );
    }
    if let Some(mm) = valid_magnitude(reading.precipitation_mm_per_hr) {
        factor_scores.insert(
            WeatherFactor::Precipitation,
            thresholds.precipitation_mm_per_hr.score_above(mm),
        );
    }
    if let Some(kph) = valid_magnitude(reading.wind_speed_kph) {
        factor_scores.insert(
            WeatherFactor::Wind,
            thresholds.wind_speed_kph.score_above(kph),
        );
    }
    if let Some(celsius) = reading.temperature_c.filter(|c| c.is_finite()) {
        factor_scores.insert(
            WeatherFactor::Temperature,
            thresholds.score_temperature(celsius),
        );
    }
    if let Some(surface) = reading.surface_condition {
        factor_scores.insert(
            WeatherFactor::RoadSurface,
            thresholds.surface_condition.score(surface),
        );
    }

    let max_score = factor_scores.values().copied().max().unwrap_or(0);
    let escalated = factor_scores
        .values()
        .filter(|&&score| score >= ESCALATION_SCORE)
        .count();

    // Compounding hazards outrank any single dimension.
    let risk_level = if escalated >= ESCALATION_COUNT {
        RiskLevel::Severe
    } else {
        RiskLevel::from_score(max_score)
    };

    let affected_factors: BTreeSet<WeatherFactor> = factor_scores
        .iter()
        .filter(|&(_, &score)| score >= 1)
        .map(|(&factor, _)| factor)
        .collect();

    let recommendations = affected_factors
        .iter()
        .filter_map(|&factor| advisory(factor, factor_scores[&factor]))
        .map(str::to_owned)
        .collect();

    debug!(
        risk_level = %risk_level,
        scored_dimensions = factor_scores.len(),
        escalated_dimensions = escalated,
        "classified weather reading"
    );

    ImpactAssessment {
        risk_level,
        affected_factors,
        factor_scores,
        recommendations,
    }
}

/// Filters out NaN, infinite, and negative magnitudes (unknown values).
fn valid_magnitude(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v >= 0.0)
}

/// Fixed per-(factor, score) advisory templates.
const fn advisory(factor: WeatherFactor, score: u8) -> Option<&'static str> {
    match (factor, score) {
        (WeatherFactor::Visibility, 1) => {
            Some("Visibility is reduced; keep extra distance from the vehicle ahead")
        }
        (WeatherFactor::Visibility, 2) => {
            Some("Low visibility; reduce speed and switch on headlights and fog lamps")
        }
        (WeatherFactor::Visibility, _) => {
            Some("Visibility is critically low; slow below 30 km/h or stop until conditions improve")
        }
        (WeatherFactor::Precipitation, 1) => {
            Some("Moderate rain; allow longer braking distances")
        }
        (WeatherFactor::Precipitation, 2) => {
            Some("Heavy rain; slow down to avoid hydroplaning")
        }
        (WeatherFactor::Precipitation, _) => {
            Some("Very heavy rain; high hydroplaning risk, reduce speed significantly")
        }
        (WeatherFactor::Wind, 1) => Some("Moderate winds; expect slight steering corrections"),
        (WeatherFactor::Wind, 2) => {
            Some("Strong winds; grip the wheel firmly and reduce speed")
        }
        (WeatherFactor::Wind, _) => {
            Some("Very strong winds; severe effect on vehicle control, high-sided vehicles at risk")
        }
        (WeatherFactor::RoadSurface, 1) => Some("Damp road surface; watch for reduced grip"),
        (WeatherFactor::RoadSurface, 2) => {
            Some("Slippery road surface; brake gently and early")
        }
        (WeatherFactor::RoadSurface, _) => {
            Some("Hazardous road surface; avoid travel unless necessary")
        }
        (WeatherFactor::Temperature, 1) => {
            Some("Temperature is outside the comfortable range; stay alert")
        }
        (WeatherFactor::Temperature, 2) => {
            Some("Temperature affects vehicle performance; check tyres and brakes")
        }
        (WeatherFactor::Temperature, _) => {
            Some("Extreme temperature; risk of tyre blowout or road ice, check the vehicle first")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading::SurfaceCondition;
    use proptest::prelude::*;

    fn defaults() -> ImpactThresholds {
        ImpactThresholds::default()
    }

    mod scoring_tests {
        use super::*;
        use test_case::test_case;

        #[test]
        fn empty_reading_is_no_risk() {
            let assessment = classify(&WeatherReading::new(), &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::None);
            assert!(assessment.affected_factors.is_empty());
            assert!(assessment.recommendations.is_empty());
            assert!(assessment.factor_scores.is_empty());
        }

        #[test]
        fn benign_reading_is_no_risk() {
            let reading = WeatherReading::new()
                .with_visibility_km(10.0)
                .with_precipitation_mm_per_hr(0.0)
                .with_wind_speed_kph(12.0)
                .with_temperature_c(24.0)
                .with_surface_condition(SurfaceCondition::Dry);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::None);
            assert!(assessment.affected_factors.is_empty());
            // All five dimensions were known and scored.
            assert_eq!(assessment.factor_scores.len(), 5);
        }

        #[test_case(0.8, RiskLevel::Low; "hazy")]
        #[test_case(0.3, RiskLevel::Moderate; "foggy")]
        #[test_case(0.05, RiskLevel::High; "dense fog")]
        fn single_dimension_maps_score_to_level(visibility_km: f64, expected: RiskLevel) {
            let reading = WeatherReading::new().with_visibility_km(visibility_km);
            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, expected);
            assert!(assessment.affects(WeatherFactor::Visibility));
        }

        #[test]
        fn invalid_magnitudes_are_unknown() {
            let reading = WeatherReading::new()
                .with_visibility_km(-1.0)
                .with_wind_speed_kph(f64::NAN)
                .with_precipitation_mm_per_hr(f64::INFINITY);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::None);
            assert!(assessment.factor_scores.is_empty());
        }

        #[test]
        fn negative_temperature_is_valid() {
            let reading = WeatherReading::new().with_temperature_c(-5.0);
            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::High);
            assert!(assessment.affects(WeatherFactor::Temperature));
        }

        #[test_case(SurfaceCondition::Dry, RiskLevel::None)]
        #[test_case(SurfaceCondition::Damp, RiskLevel::Low)]
        #[test_case(SurfaceCondition::Wet, RiskLevel::Moderate)]
        #[test_case(SurfaceCondition::Snow, RiskLevel::Moderate)]
        #[test_case(SurfaceCondition::Ice, RiskLevel::High)]
        #[test_case(SurfaceCondition::Flooded, RiskLevel::High)]
        fn surface_condition_scores(surface: SurfaceCondition, expected: RiskLevel) {
            let reading = WeatherReading::new().with_surface_condition(surface);
            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, expected);
        }

        #[test]
        fn surface_scores_come_from_thresholds() {
            // A network that treats damp pavement as benign.
            let thresholds: ImpactThresholds =
                serde_json::from_str(r#"{"surfaceCondition": {"damp": 0}}"#).unwrap();
            let reading = WeatherReading::new().with_surface_condition(SurfaceCondition::Damp);

            let assessment = classify(&reading, &thresholds);
            assert_eq!(assessment.risk_level, RiskLevel::None);
            assert!(!assessment.affects(WeatherFactor::RoadSurface));

            let default_assessment = classify(&reading, &defaults());
            assert_eq!(default_assessment.risk_level, RiskLevel::Low);
        }
    }

    mod escalation_tests {
        use super::*;

        #[test]
        fn compounding_hazards_escalate_to_severe() {
            // Both dimensions score 2; neither alone reaches severe.
            let reading = WeatherReading::new()
                .with_visibility_km(0.3)
                .with_wind_speed_kph(45.0);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::Severe);
        }

        #[test]
        fn fog_and_gale_reading() {
            let reading = WeatherReading::new()
                .with_visibility_km(0.3)
                .with_wind_speed_kph(70.0);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::Severe);
            assert!(assessment.affects(WeatherFactor::Visibility));
            assert!(assessment.affects(WeatherFactor::Wind));
        }

        #[test]
        fn single_danger_dimension_stays_high() {
            let reading = WeatherReading::new().with_wind_speed_kph(90.0);
            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::High);
        }

        #[test]
        fn low_scores_do_not_escalate() {
            // Five dimensions at score 1 stay low.
            let reading = WeatherReading::new()
                .with_visibility_km(0.8)
                .with_precipitation_mm_per_hr(7.0)
                .with_wind_speed_kph(35.0)
                .with_temperature_c(38.0)
                .with_surface_condition(SurfaceCondition::Damp);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.risk_level, RiskLevel::Low);
        }

        proptest! {
            #[test]
            fn two_warning_dimensions_always_severe(
                visibility_km in 0.11_f64..0.49,
                wind_kph in 41.0_f64..200.0,
            ) {
                let reading = WeatherReading::new()
                    .with_visibility_km(visibility_km)
                    .with_wind_speed_kph(wind_kph);

                let assessment = classify(&reading, &defaults());
                prop_assert_eq!(assessment.risk_level, RiskLevel::Severe);
            }

            #[test]
            fn risk_never_exceeds_high_with_one_known_dimension(
                wind_kph in 0.0_f64..500.0,
            ) {
                let reading = WeatherReading::new().with_wind_speed_kph(wind_kph);
                let assessment = classify(&reading, &defaults());
                prop_assert!(assessment.risk_level <= RiskLevel::High);
            }
        }
    }

    mod recommendation_tests {
        use super::*;

        #[test]
        fn recommendations_follow_factor_priority_order() {
            let reading = WeatherReading::new()
                .with_temperature_c(46.0)
                .with_wind_speed_kph(55.0)
                .with_visibility_km(0.3);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.recommendations.len(), 3);
            assert!(assessment.recommendations[0].contains("visibility"));
            assert!(assessment.recommendations[1].contains("winds"));
            assert!(assessment.recommendations[2].contains("temperature"));
        }

        #[test]
        fn zero_score_factors_get_no_recommendation() {
            let reading = WeatherReading::new()
                .with_visibility_km(10.0)
                .with_wind_speed_kph(70.0);

            let assessment = classify(&reading, &defaults());
            assert_eq!(assessment.recommendations.len(), 1);
            assert!(assessment.recommendations[0].contains("winds"));
        }

        #[test]
        fn severity_changes_the_advisory_text() {
            let light = classify(
                &WeatherReading::new().with_precipitation_mm_per_hr(7.0),
                &defaults(),
            );
            let heavy = classify(
                &WeatherReading::new().with_precipitation_mm_per_hr(25.0),
                &defaults(),
            );
            assert_ne!(light.recommendations, heavy.recommendations);
        }
    }

    mod safety_score_tests {
        use super::*;

        #[test]
        fn safety_score_degrades_with_risk() {
            let clear = classify(
                &WeatherReading::new()
                    .with_visibility_km(10.0)
                    .with_wind_speed_kph(10.0),
                &defaults(),
            );
            let storm = classify(
                &WeatherReading::new()
                    .with_visibility_km(0.05)
                    .with_wind_speed_kph(90.0),
                &defaults(),
            );

            assert!(clear.safety_score() > storm.safety_score());
            assert!((clear.safety_score() - 100.0).abs() < f64::EPSILON);
            assert!((storm.safety_score() - 20.0).abs() < f64::EPSILON);
        }
    }
}
