use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

pub(super) const SCORE_SUFFIX: &str = "_score";

/// Raw company details as collected by a form, CSV row, or API payload.
///
/// Every field is optional so intake can report exactly which one is absent. Sub-factor scores
/// arrive as flattened `<factor>_score` fields (e.g. `flood_risk_score`); other extra fields
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanySubmission {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub carbon_footprint: Option<f64>,
    #[serde(default)]
    pub physical_risk_score: Option<f64>,
    #[serde(default)]
    pub transition_risk_score: Option<f64>,
    #[serde(flatten, deserialize_with = "score_fields")]
    pub factor_scores: BTreeMap<String, f64>,
}

fn score_fields<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let extra = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
    let mut scores = BTreeMap::new();
    for (key, value) in extra {
        if !key.ends_with(SCORE_SUFFIX) || value.is_null() {
            continue;
        }
        let score = value
            .as_f64()
            .ok_or_else(|| D::Error::custom(format!("`{key}` must be a number, found {value}")))?;
        scores.insert(key, score);
    }
    Ok(scores)
}

/// Validated, immutable assessment input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub company_name: String,
    pub industry: String,
    pub location: String,
    pub revenue: f64,
    pub carbon_footprint: f64,
    pub physical_risk_score: f64,
    pub transition_risk_score: f64,
    pub sub_factors: SubFactorScores,
}

/// Sub-factor scores keyed by factor name (no `_score` suffix).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubFactorScores(BTreeMap<String, f64>);

impl SubFactorScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, factor: impl Into<String>, score: f64) -> Option<f64> {
        self.0.insert(factor.into(), score)
    }

    pub fn get(&self, factor: &str) -> Option<f64> {
        self.0.get(factor).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SubFactorScores {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, score)| (name.into(), score))
                .collect(),
        )
    }
}

impl CompanyProfile {
    /// Case-insensitive substring test against the industry text.
    pub fn industry_mentions(&self, needle: &str) -> bool {
        self.industry
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }
}
