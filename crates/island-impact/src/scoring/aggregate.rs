use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::categories::CategoryScores;
use super::domain::Category;
use super::error::ImpactError;

const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Relative weight of each category in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    transport: f64,
    energy: f64,
    water: f64,
    waste: f64,
    food: f64,
}

impl CategoryWeights {
    /// Build a custom weighting. Weights must be finite, non-negative and
    /// sum to 1.0 so the overall score stays a convex combination.
    pub fn new(
        transport: f64,
        energy: f64,
        water: f64,
        waste: f64,
        food: f64,
    ) -> Result<Self, ImpactError> {
        let weights = Self {
            transport,
            energy,
            water,
            waste,
            food,
        };

        let sum: f64 = Category::ALL.iter().map(|c| weights.weight(*c)).sum();
        let well_formed = Category::ALL
            .iter()
            .all(|c| weights.weight(*c).is_finite() && weights.weight(*c) >= 0.0);
        if !well_formed || (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ImpactError::InvalidWeights { sum });
        }

        Ok(weights)
    }

    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::Transport => self.transport,
            Category::Energy => self.energy,
            Category::Water => self.water,
            Category::Waste => self.waste,
            Category::Food => self.food,
        }
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            transport: 0.25,
            energy: 0.25,
            water: 0.20,
            waste: 0.15,
            food: 0.15,
        }
    }
}

/// Overall score plus each category's share of it.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Aggregate {
    pub(crate) overall_score: u8,
    pub(crate) impact_breakdown: BTreeMap<Category, f64>,
}

pub(crate) fn aggregate(scores: &CategoryScores, weights: &CategoryWeights) -> Aggregate {
    let weighted: f64 = scores
        .iter()
        .map(|(category, score)| weights.weight(category) * f64::from(score))
        .sum();
    let overall_score = weighted.round_ties_even().clamp(0.0, 100.0) as u8;

    // Shares are taken against the unrounded total so they sum to one; a
    // zero overall score has no meaningful split and reports zeros.
    let impact_breakdown = scores
        .iter()
        .map(|(category, score)| {
            let share = if overall_score == 0 {
                0.0
            } else {
                weights.weight(category) * f64::from(score) / weighted
            };
            (category, share)
        })
        .collect();

    Aggregate {
        overall_score,
        impact_breakdown,
    }
}
