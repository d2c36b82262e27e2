use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::{aggregate, CategoryWeights};
use super::categories::{score_profile, CategoryScores};
use super::domain::{Category, LifestyleQuestionnaire, UserProfile};
use super::error::ImpactError;
use super::estimates::estimate_profile;
use super::factors::EnvironmentalFactors;
use super::guard::ProfileGuard;
use super::selector::areas_for_improvement;

/// Stateless evaluator that applies a regional factor table to a profile.
///
/// The engine only holds read-only data, so one instance can be shared behind
/// an `Arc` and evaluated from any number of threads.
#[derive(Debug, Clone)]
pub struct ImpactEngine {
    factors: EnvironmentalFactors,
    weights: CategoryWeights,
    guard: ProfileGuard,
}

impl ImpactEngine {
    pub fn new(factors: EnvironmentalFactors) -> Self {
        Self::with_weights(factors, CategoryWeights::default())
    }

    pub fn with_weights(factors: EnvironmentalFactors, weights: CategoryWeights) -> Self {
        Self {
            factors,
            weights,
            guard: ProfileGuard,
        }
    }

    pub fn factors(&self) -> &EnvironmentalFactors {
        &self.factors
    }

    pub fn weights(&self) -> &CategoryWeights {
        &self.weights
    }

    /// Score a profile. Out-of-range or non-finite answers are rejected
    /// before any calculator runs.
    pub fn evaluate(&self, profile: &UserProfile) -> Result<ImpactResult, ImpactError> {
        self.guard.validate(profile)?;
        let category_scores = score_profile(profile, &self.factors)?;
        let estimates = estimate_profile(profile, &self.factors)?;
        let totals = aggregate(&category_scores, &self.weights);
        let areas = areas_for_improvement(&category_scores);

        debug!(
            region = self.factors.region(),
            overall = totals.overall_score,
            carbon = estimates.carbon_footprint,
            focus = ?areas,
            "impact evaluated"
        );

        Ok(ImpactResult {
            category_scores,
            overall_score: totals.overall_score,
            carbon_footprint: estimates.carbon_footprint,
            water_usage: estimates.water_usage,
            waste_generation: estimates.waste_generation,
            impact_breakdown: totals.impact_breakdown,
            areas_for_improvement: areas,
        })
    }

    /// Validate a raw questionnaire and score it.
    pub fn assess(
        &self,
        questionnaire: LifestyleQuestionnaire,
    ) -> Result<Assessment, ImpactError> {
        let profile = self.guard.profile_from_questionnaire(questionnaire)?;
        let result = self.evaluate(&profile)?;
        Ok(Assessment { profile, result })
    }
}

impl Default for ImpactEngine {
    fn default() -> Self {
        Self::new(EnvironmentalFactors::oahu())
    }
}

/// Everything the engine derives from one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactResult {
    pub category_scores: CategoryScores,
    pub overall_score: u8,
    /// Tons CO2e per year.
    pub carbon_footprint: f64,
    /// Gallons per day.
    pub water_usage: i64,
    /// Pounds per week.
    pub waste_generation: i64,
    pub impact_breakdown: BTreeMap<Category, f64>,
    pub areas_for_improvement: Vec<Category>,
}

impl ImpactResult {
    pub fn score(&self, category: Category) -> u8 {
        self.category_scores.get(category)
    }
}

/// A validated profile together with its result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub profile: UserProfile,
    pub result: ImpactResult,
}
