//! Climate risk and ESG exclusion screening for companies.

pub mod batch;
mod domain;
mod exclusion;
mod intake;
mod recommendation;
mod report;
pub mod rules;
mod weights;

use std::borrow::Cow;

pub use domain::{CompanyProfile, CompanySubmission, SubFactorScores};
pub use exclusion::{screen, ExclusionCategory, ExclusionOutcome, ExclusionTaxonomy};
pub use intake::profile_from_submission;
pub use recommendation::{classify, Recommendation};
pub use report::{assemble, ClimateRiskReport};
pub use rules::{carbon_intensity, identify_opportunities, identify_risks};
pub use weights::{
    score, DimensionBlend, DimensionScore, DimensionWeight, FactorWeight, MissingFactorPolicy,
    RiskDimension, ScoreResult, WeightTable,
};

use super::{ScreeningEngine, ScreeningError};

/// Static tables and policy the climate engine runs with.
#[derive(Debug, Clone)]
pub struct ClimateScreeningConfig {
    pub taxonomy: Cow<'static, ExclusionTaxonomy>,
    pub weights: Cow<'static, WeightTable>,
    pub blend: Cow<'static, DimensionBlend>,
    pub missing_factors: MissingFactorPolicy,
}

impl ClimateScreeningConfig {
    pub fn standard() -> Self {
        Self {
            taxonomy: Cow::Borrowed(ExclusionTaxonomy::standard()),
            weights: Cow::Borrowed(WeightTable::standard()),
            blend: Cow::Borrowed(DimensionBlend::standard()),
            missing_factors: MissingFactorPolicy::Reject,
        }
    }

    pub fn with_missing_factor_policy(mut self, policy: MissingFactorPolicy) -> Self {
        self.missing_factors = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ScreeningError> {
        self.weights.validate()?;
        self.blend.validate(&self.weights)
    }
}

impl Default for ClimateScreeningConfig {
    fn default() -> Self {
        Self::standard()
    }
}

/// Report plus the unrounded score breakdown that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateAssessment {
    pub report: ClimateRiskReport,
    pub score: ScoreResult,
    pub carbon_intensity: f64,
}

/// Stateless engine running exclusion screening, weighted scoring, and classification.
#[derive(Debug, Clone)]
pub struct ClimateScreeningEngine {
    config: ClimateScreeningConfig,
}

impl ClimateScreeningEngine {
    /// Validate the configuration once, up front.
    pub fn new(config: ClimateScreeningConfig) -> Result<Self, ScreeningError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn standard() -> Result<Self, ScreeningError> {
        Self::new(ClimateScreeningConfig::standard())
    }

    pub fn config(&self) -> &ClimateScreeningConfig {
        &self.config
    }

    pub fn evaluate(&self, profile: &CompanyProfile) -> Result<ClimateAssessment, ScreeningError> {
        let exclusion = screen(&profile.industry, &self.config.taxonomy);
        let score = score(
            &profile.sub_factors,
            &self.config.weights,
            &self.config.blend,
            self.config.missing_factors,
        )?;
        let carbon_intensity = carbon_intensity(profile)?;
        let risks = identify_risks(profile)?;
        let opportunities = identify_opportunities(profile)?;
        let recommendation = classify(exclusion.compliant, score.composite);

        let report = assemble(
            profile,
            exclusion,
            &score,
            risks,
            opportunities,
            recommendation,
        );

        Ok(ClimateAssessment {
            report,
            score,
            carbon_intensity,
        })
    }

    /// Validate a raw submission and assess it in one step.
    pub fn assess_submission(
        &self,
        submission: CompanySubmission,
    ) -> Result<ClimateRiskReport, ScreeningError> {
        let profile = profile_from_submission(submission)?;
        self.assess(&profile)
    }
}

impl ScreeningEngine for ClimateScreeningEngine {
    type Input = CompanyProfile;
    type Report = ClimateRiskReport;

    fn assess(&self, input: &CompanyProfile) -> Result<ClimateRiskReport, ScreeningError> {
        self.evaluate(input).map(|assessment| assessment.report)
    }
}
