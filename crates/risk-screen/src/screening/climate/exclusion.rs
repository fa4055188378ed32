use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::screening::ScreeningError;

/// A disallowed-activity category and the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionCategory {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Ordered denylist of business activities. Definition order drives violation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionTaxonomy {
    categories: Vec<ExclusionCategory>,
}

const STANDARD_EXCLUSIONS: &[(&str, &[&str])] = &[
    (
        "fossil_fuels",
        &["coal_mining", "oil_gas_extraction", "fossil_power_generation"],
    ),
    (
        "controversial_weapons",
        &["cluster_munitions", "landmines", "nuclear_weapons"],
    ),
    (
        "ethical_concerns",
        &["tobacco", "gambling", "adult_entertainment"],
    ),
    (
        "environmental_violations",
        &["deforestation", "high_emission_operations"],
    ),
];

impl ExclusionTaxonomy {
    /// Build a taxonomy, lower-casing keywords and rejecting duplicate labels.
    pub fn new(categories: Vec<ExclusionCategory>) -> Result<Self, ScreeningError> {
        let mut normalized: Vec<ExclusionCategory> = Vec::with_capacity(categories.len());
        for category in categories {
            if category.label.trim().is_empty() {
                return Err(ScreeningError::InvalidConfiguration(
                    "exclusion category label must not be blank".to_string(),
                ));
            }
            if normalized.iter().any(|known| known.label == category.label) {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "exclusion category `{}` is defined twice",
                    category.label
                )));
            }
            if category.keywords.iter().any(|keyword| keyword.is_empty()) {
                return Err(ScreeningError::InvalidConfiguration(format!(
                    "exclusion category `{}` contains an empty keyword",
                    category.label
                )));
            }
            normalized.push(ExclusionCategory {
                label: category.label,
                keywords: category
                    .keywords
                    .into_iter()
                    .map(|keyword| keyword.to_lowercase())
                    .collect(),
            });
        }
        Ok(Self {
            categories: normalized,
        })
    }

    /// Process-wide ESG exclusion list.
    pub fn standard() -> &'static ExclusionTaxonomy {
        static TAXONOMY: OnceLock<ExclusionTaxonomy> = OnceLock::new();
        TAXONOMY.get_or_init(|| ExclusionTaxonomy {
            categories: STANDARD_EXCLUSIONS
                .iter()
                .map(|(label, keywords)| ExclusionCategory {
                    label: (*label).to_string(),
                    keywords: keywords.iter().map(|keyword| (*keyword).to_string()).collect(),
                })
                .collect(),
        })
    }

    pub fn categories(&self) -> &[ExclusionCategory] {
        &self.categories
    }
}

/// Result of checking an industry description against the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionOutcome {
    pub compliant: bool,
    pub violations: Vec<String>,
}

/// Literal, case-insensitive substring screen of `category_text`.
pub fn screen(category_text: &str, taxonomy: &ExclusionTaxonomy) -> ExclusionOutcome {
    let haystack = category_text.to_lowercase();
    let violations: Vec<String> = taxonomy
        .categories
        .iter()
        .filter(|category| {
            category
                .keywords
                .iter()
                .any(|keyword| haystack.contains(keyword.as_str()))
        })
        .map(|category| category.label.clone())
        .collect();

    ExclusionOutcome {
        compliant: violations.is_empty(),
        violations,
    }
}
