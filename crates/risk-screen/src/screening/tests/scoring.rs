use super::common::*;
use crate::screening::climate::{
    score, ClimateScreeningConfig, ClimateScreeningEngine, DimensionBlend, DimensionWeight,
    FactorWeight, MissingFactorPolicy, RiskDimension, ScoreResult, SubFactorScores, WeightTable,
};
use crate::screening::ScreeningError;

fn standard_score(policy: MissingFactorPolicy) -> Result<ScoreResult, ScreeningError> {
    score(
        &sub_factors(),
        WeightTable::standard(),
        DimensionBlend::standard(),
        policy,
    )
}

#[test]
fn weighted_score_combines_dimensions_with_blend() {
    let result = standard_score(MissingFactorPolicy::Reject).expect("all factors present");

    let physical = result.dimension("physical_risk").expect("physical dimension");
    let transition = result
        .dimension("transition_risk")
        .expect("transition dimension");

    assert_close(physical.score, EXPECTED_PHYSICAL);
    assert_close(transition.score, EXPECTED_TRANSITION);
    assert_close(physical.blend_weight, 0.6);
    assert_close(transition.blend_weight, 0.4);
    assert_close(result.composite, EXPECTED_COMPOSITE);
    assert!(result.defaulted_factors.is_empty());
}

#[test]
fn dimensions_are_reported_in_table_order() {
    let result = standard_score(MissingFactorPolicy::Reject).expect("all factors present");

    let names: Vec<&str> = result
        .dimensions
        .iter()
        .map(|dimension| dimension.dimension.as_str())
        .collect();
    assert_eq!(names, vec!["physical_risk", "transition_risk"]);
}

#[test]
fn scaling_one_dimension_scales_only_its_contribution() {
    let base = standard_score(MissingFactorPolicy::Reject).expect("base score");
    let doubled_factors = scaled(&sub_factors(), &PHYSICAL_FACTORS, 2.0);
    let doubled = score(
        &doubled_factors,
        WeightTable::standard(),
        DimensionBlend::standard(),
        MissingFactorPolicy::Reject,
    )
    .expect("scaled score");

    let base_physical = base.dimension("physical_risk").expect("physical");
    let doubled_physical = doubled.dimension("physical_risk").expect("physical");
    assert_close(doubled_physical.score, base_physical.score * 2.0);
    assert_close(
        doubled.dimension("transition_risk").expect("transition").score,
        base.dimension("transition_risk").expect("transition").score,
    );
    assert_close(
        doubled.composite,
        base.composite + base_physical.contribution(),
    );
}

#[test]
fn scaling_every_dimension_scales_the_composite() {
    let base = standard_score(MissingFactorPolicy::Reject).expect("base score");
    let mut all_factors: Vec<&str> = PHYSICAL_FACTORS.to_vec();
    all_factors.extend(TRANSITION_FACTORS);
    let tripled = score(
        &scaled(&sub_factors(), &all_factors, 3.0),
        WeightTable::standard(),
        DimensionBlend::standard(),
        MissingFactorPolicy::Reject,
    )
    .expect("scaled score");

    assert_close(tripled.composite, base.composite * 3.0);
}

#[test]
fn missing_factor_is_a_typed_error_by_default() {
    let mut profile = profile();
    profile.sub_factors = profile
        .sub_factors
        .iter()
        .filter(|(name, _)| *name != "wildfire_risk")
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    let err = score(
        &profile.sub_factors,
        WeightTable::standard(),
        DimensionBlend::standard(),
        MissingFactorPolicy::Reject,
    )
    .expect_err("missing factor is rejected");

    assert_eq!(
        err,
        ScreeningError::MissingFactor {
            dimension: "physical_risk".to_string(),
            factor: "wildfire_risk".to_string(),
        }
    );
}

#[test]
fn zero_policy_records_defaulted_factors() {
    let partial: SubFactorScores = sub_factors()
        .iter()
        .filter(|(name, _)| *name != "wildfire_risk")
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    let result = score(
        &partial,
        WeightTable::standard(),
        DimensionBlend::standard(),
        MissingFactorPolicy::TreatAsZero,
    )
    .expect("zero policy scores partial input");

    assert_eq!(result.defaulted_factors, vec!["wildfire_risk".to_string()]);
    assert_close(result.composite, EXPECTED_COMPOSITE - 0.6 * 5.0 * 0.15);
}

#[test]
fn out_of_range_scores_propagate_without_clamping() {
    let mut factors = sub_factors();
    factors.insert("flood_risk", 20.0);

    let result = score(
        &factors,
        WeightTable::standard(),
        DimensionBlend::standard(),
        MissingFactorPolicy::Reject,
    )
    .expect("score computes");

    assert_close(
        result.composite,
        EXPECTED_COMPOSITE + 0.6 * (20.0 - 5.0) * 0.25,
    );
}

#[test]
fn standard_tables_validate_but_are_not_normalized() {
    WeightTable::standard()
        .validate()
        .expect("standard weights validate");
    DimensionBlend::standard()
        .validate(WeightTable::standard())
        .expect("standard blend validates");

    let unnormalized = WeightTable::standard().unnormalized_dimensions();
    assert_eq!(unnormalized.len(), 2);
    assert_eq!(unnormalized[0].0, "physical_risk");
    assert_close(unnormalized[0].1, 0.75);
    assert_eq!(unnormalized[1].0, "transition_risk");
    assert_close(unnormalized[1].1, 0.60);
}

#[test]
fn weight_table_rejects_negative_weights() {
    let err = WeightTable::new(vec![RiskDimension {
        name: "physical_risk".to_string(),
        factors: vec![FactorWeight {
            factor: "flood_risk".to_string(),
            weight: -0.1,
        }],
    }])
    .expect_err("negative weight is rejected");

    assert!(matches!(err, ScreeningError::InvalidConfiguration(_)));
}

#[test]
fn weight_table_rejects_dimension_sums_above_one() {
    let err = WeightTable::new(vec![RiskDimension {
        name: "physical_risk".to_string(),
        factors: vec![
            FactorWeight {
                factor: "flood_risk".to_string(),
                weight: 0.7,
            },
            FactorWeight {
                factor: "heat_stress".to_string(),
                weight: 0.5,
            },
        ],
    }])
    .expect_err("overweight dimension is rejected");

    assert!(err.to_string().contains("physical_risk"));
}

#[test]
fn blend_must_cover_every_dimension_and_sum_to_one() {
    let table = WeightTable::standard();

    let missing = DimensionBlend::new(vec![DimensionWeight {
        dimension: "physical_risk".to_string(),
        weight: 1.0,
    }]);
    let err = missing.validate(table).expect_err("transition weight missing");
    assert!(err.to_string().contains("transition_risk"));

    let lopsided = DimensionBlend::new(vec![
        DimensionWeight {
            dimension: "physical_risk".to_string(),
            weight: 0.6,
        },
        DimensionWeight {
            dimension: "transition_risk".to_string(),
            weight: 0.6,
        },
    ]);
    assert!(matches!(
        lopsided.validate(table),
        Err(ScreeningError::InvalidConfiguration(_))
    ));
}

#[test]
fn engine_refuses_invalid_configuration_up_front() {
    let mut config = ClimateScreeningConfig::standard();
    config.blend = std::borrow::Cow::Owned(DimensionBlend::new(Vec::new()));

    let err = ClimateScreeningEngine::new(config).expect_err("empty blend is rejected");
    assert!(matches!(err, ScreeningError::InvalidConfiguration(_)));
}
