use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::domain::SubFactorScores;
use crate::screening::ScreeningError;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Weight applied to one sub-factor inside a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorWeight {
    pub factor: String,
    pub weight: f64,
}

/// Named group of related sub-factors (e.g. physical or transition risk).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskDimension {
    pub name: String,
    pub factors: Vec<FactorWeight>,
}

impl RiskDimension {
    pub fn total_weight(&self) -> f64 {
        self.factors.iter().map(|factor| factor.weight).sum()
    }
}

/// Two-level weight table: dimension -> ordered sub-factor weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    dimensions: Vec<RiskDimension>,
}

const STANDARD_WEIGHTS: &[(&str, &[(&str, f64)])] = &[
    (
        "physical_risk",
        &[
            ("flood_risk", 0.25),
            ("heat_stress", 0.20),
            ("sea_level_rise", 0.15),
            ("wildfire_risk", 0.15),
        ],
    ),
    (
        "transition_risk",
        &[
            ("carbon_price_exposure", 0.25),
            ("regulatory_compliance", 0.20),
            ("technology_disruption", 0.15),
        ],
    ),
];

const STANDARD_BLEND: &[(&str, f64)] = &[("physical_risk", 0.6), ("transition_risk", 0.4)];

impl WeightTable {
    pub fn new(dimensions: Vec<RiskDimension>) -> Result<Self, ScreeningError> {
        let table = Self { dimensions };
        table.validate()?;
        Ok(table)
    }

    /// Process-wide climate risk weights.
    pub fn standard() -> &'static WeightTable {
        static TABLE: OnceLock<WeightTable> = OnceLock::new();
        TABLE.get_or_init(|| WeightTable {
            dimensions: STANDARD_WEIGHTS
                .iter()
                .map(|(name, factors)| RiskDimension {
                    name: (*name).to_string(),
                    factors: factors
                        .iter()
                        .map(|(factor, weight)| FactorWeight {
                            factor: (*factor).to_string(),
                            weight: *weight,
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    pub fn dimensions(&self) -> &[RiskDimension] {
        &self.dimensions
    }

    pub fn dimension(&self, name: &str) -> Option<&RiskDimension> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.name == name)
    }

    /// Reject tables that cannot produce a meaningful weighted score.
    pub fn validate(&self) -> Result<(), ScreeningError> {
        if self.dimensions.is_empty() {
            return Err(ScreeningError::InvalidConfiguration(
                "weight table has no dimensions".to_string(),
            ));
        }

        for (index, dimension) in self.dimensions.iter().enumerate() {
            if self.dimensions[..index]
                .iter()
                .any(|earlier| earlier.name == dimension.name)
            {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "dimension `{}` is defined twice",
                    dimension.name
                )));
            }
            if dimension.factors.is_empty() {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "dimension `{}` has no sub-factors",
                    dimension.name
                )));
            }
            for factor in &dimension.factors {
                if !factor.weight.is_finite() || factor.weight < 0.0 {
                    return Err(ScreeningError::InvalidConfiguration(format!(
                        "weight for `{}.{}` must be a non-negative number, found {}",
                        dimension.name, factor.factor, factor.weight
                    )));
                }
            }
            let total = dimension.total_weight();
            if total > 1.0 + WEIGHT_TOLERANCE {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "weights for dimension `{}` sum to {total:.4}, above 1.0",
                    dimension.name
                )));
            }
        }

        Ok(())
    }

    /// Dimensions whose weights do not sum to 1.0, with their actual totals.
    pub fn unnormalized_dimensions(&self) -> Vec<(&str, f64)> {
        self.dimensions
            .iter()
            .map(|dimension| (dimension.name.as_str(), dimension.total_weight()))
            .filter(|(_, total)| (total - 1.0).abs() > WEIGHT_TOLERANCE)
            .collect()
    }
}

/// Blend weight applied to one dimension score in the composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeight {
    pub dimension: String,
    pub weight: f64,
}

/// Mapping from dimension to its share of the composite score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionBlend {
    weights: Vec<DimensionWeight>,
}

impl DimensionBlend {
    pub fn new(weights: Vec<DimensionWeight>) -> Self {
        Self { weights }
    }

    /// 60% physical, 40% transition.
    pub fn standard() -> &'static DimensionBlend {
        static BLEND: OnceLock<DimensionBlend> = OnceLock::new();
        BLEND.get_or_init(|| DimensionBlend {
            weights: STANDARD_BLEND
                .iter()
                .map(|(dimension, weight)| DimensionWeight {
                    dimension: (*dimension).to_string(),
                    weight: *weight,
                })
                .collect(),
        })
    }

    pub fn weight_for(&self, dimension: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|entry| entry.dimension == dimension)
            .map(|entry| entry.weight)
    }

    /// The blend must cover every table dimension with non-negative weights summing to 1.0.
    pub fn validate(&self, table: &WeightTable) -> Result<(), ScreeningError> {
        for entry in &self.weights {
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "blend weight for `{}` must be a non-negative number, found {}",
                    entry.dimension, entry.weight
                )));
            }
            if table.dimension(&entry.dimension).is_none() {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "blend references unknown dimension `{}`",
                    entry.dimension
                )));
            }
        }

        for dimension in table.dimensions() {
            if self.weight_for(&dimension.name).is_none() {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "blend has no weight for dimension `{}`",
                    dimension.name
                )));
            }
        }

        let total: f64 = self.weights.iter().map(|entry| entry.weight).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ScreeningError::InvalidConfiguration(format!(
                "blend weights sum to {total:.4}, expected 1.0"
            )));
        }

        Ok(())
    }
}

/// What to do when the weight table names a sub-factor the input lacks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFactorPolicy {
    /// Fail with `ScreeningError::MissingFactor`.
    #[default]
    Reject,
    /// Score the factor as 0.0 and record it in `ScoreResult::defaulted_factors`.
    TreatAsZero,
}

/// Weighted score of a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: String,
    pub score: f64,
    pub blend_weight: f64,
}

impl DimensionScore {
    pub fn contribution(&self) -> f64 {
        self.score * self.blend_weight
    }
}

/// Composite climate risk score and the dimension scores behind it. Unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub composite: f64,
    pub dimensions: Vec<DimensionScore>,
    pub defaulted_factors: Vec<String>,
}

impl ScoreResult {
    pub fn dimension(&self, name: &str) -> Option<&DimensionScore> {
        self.dimensions
            .iter()
            .find(|dimension| dimension.dimension == name)
    }
}

/// Weighted linear combination of sub-factor scores, evaluated in table order.
pub fn score(
    sub_factors: &SubFactorScores,
    table: &WeightTable,
    blend: &DimensionBlend,
    policy: MissingFactorPolicy,
) -> Result<ScoreResult, ScreeningError> {
    let mut dimensions = Vec::with_capacity(table.dimensions().len());
    let mut defaulted_factors = Vec::new();
    let mut composite = 0.0;

    for dimension in table.dimensions() {
        let blend_weight = blend.weight_for(&dimension.name).ok_or_else(|| {
            ScreeningError::InvalidConfiguration(format!(
                "blend has no weight for dimension `{}`",
                dimension.name
            ))
        })?;

        let mut dimension_score = 0.0;
        for FactorWeight { factor, weight } in &dimension.factors {
            let value = match (sub_factors.get(factor), policy) {
                (Some(value), _) => value,
                (None, MissingFactorPolicy::TreatAsZero) => {
                    defaulted_factors.push(factor.clone());
                    0.0
                }
                (None, MissingFactorPolicy::Reject) => {
                    return Err(ScreeningError::MissingFactor {
                        dimension: dimension.name.clone(),
                        factor: factor.clone(),
                    });
                }
            };
            dimension_score += value * weight;
        }

        composite += blend_weight * dimension_score;
        dimensions.push(DimensionScore {
            dimension: dimension.name.clone(),
            score: dimension_score,
            blend_weight,
        });
    }

    Ok(ScoreResult {
        composite,
        dimensions,
        defaulted_factors,
    })
}
