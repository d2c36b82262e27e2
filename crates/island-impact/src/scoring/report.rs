//! Read-only views derived from an [`Assessment`] for presentation layers
//! and recommendation generators. Nothing here feeds back into scoring.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::categories::CategoryScores;
use super::domain::{Category, UserProfile};
use super::engine::{Assessment, ImpactResult};
use super::error::ImpactError;
use super::factors::{names, EnvironmentalFactors, FactorDomain};

/// Qualitative band for a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
    Critical,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        match score {
            80.. => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Fair,
            20..=39 => ScoreBand::Poor,
            _ => ScoreBand::Critical,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "excellent",
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
            ScoreBand::Critical => "critical",
        }
    }

    /// Hex colour used when charting the band.
    pub const fn color(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#4CAF50",
            ScoreBand::Good => "#8BC34A",
            ScoreBand::Fair => "#FFC107",
            ScoreBand::Poor => "#FF9800",
            ScoreBand::Critical => "#F44336",
        }
    }
}

/// User estimates expressed against the regional per-capita averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionalComparison {
    pub regional_carbon_tons: f64,
    pub regional_water_gallons: f64,
    pub regional_waste_pounds: f64,
    pub carbon_pct_of_average: f64,
    pub water_pct_of_average: f64,
    pub waste_pct_of_average: f64,
}

impl RegionalComparison {
    pub fn from_result(
        result: &ImpactResult,
        factors: &EnvironmentalFactors,
    ) -> Result<Self, ImpactError> {
        let carbon = factors.require(FactorDomain::Carbon, names::BASELINE_EMISSIONS)?;
        let water = factors.require(FactorDomain::Water, names::AVG_WATER_CONSUMPTION)?;
        let waste = factors.require(FactorDomain::Waste, names::AVG_WASTE_GENERATION)?;

        Ok(Self {
            regional_carbon_tons: carbon,
            regional_water_gallons: water,
            regional_waste_pounds: waste,
            carbon_pct_of_average: pct_of(result.carbon_footprint, carbon),
            water_pct_of_average: pct_of(result.water_usage as f64, water),
            waste_pct_of_average: pct_of(result.waste_generation as f64, waste),
        })
    }
}

/// Approximate split of the carbon footprint by source, in tons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonSplit {
    pub transport: f64,
    pub energy: f64,
    pub food: f64,
    pub waste: f64,
    pub other: f64,
}

impl CarbonSplit {
    pub fn estimate(profile: &UserProfile, carbon_footprint: f64) -> Self {
        let mut transport = 0.30;
        let mut energy = 0.25;
        let mut food = 0.25;
        let mut waste = 0.15;
        let mut other = 0.05;

        if profile.car_type.is_electrified() {
            transport -= 0.10;
            energy += 0.05;
            other += 0.05;
        }
        if profile.flight_hours > 10.0 {
            transport += 0.10;
            other -= 0.05;
            waste -= 0.05;
        }
        if profile.diet_type.is_plant_based() {
            food -= 0.10;
            transport += 0.05;
            energy += 0.05;
        }

        Self {
            transport: transport * carbon_footprint,
            energy: energy * carbon_footprint,
            food: food * carbon_footprint,
            waste: waste * carbon_footprint,
            other: other * carbon_footprint,
        }
    }

    pub fn total(&self) -> f64 {
        self.transport + self.energy + self.food + self.waste + self.other
    }
}

/// What a recommendation prompt builder needs to serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationBrief {
    pub region: String,
    pub focus_areas: Vec<Category>,
    pub category_scores: CategoryScores,
    pub overall_score: u8,
    pub profile: UserProfile,
}

impl RecommendationBrief {
    /// Focus areas as a comma separated list of display names.
    pub fn focus_summary(&self) -> String {
        self.focus_areas
            .iter()
            .map(|category| category.display_name().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Assessment plus every derived view, as served over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub region: String,
    pub result: ImpactResult,
    pub overall_band: ScoreBand,
    pub category_bands: BTreeMap<Category, ScoreBand>,
    pub comparison: RegionalComparison,
    pub carbon_split: CarbonSplit,
    pub brief: RecommendationBrief,
}

impl ImpactReport {
    pub fn build(
        assessment: Assessment,
        factors: &EnvironmentalFactors,
    ) -> Result<Self, ImpactError> {
        let Assessment { profile, result } = assessment;

        let comparison = RegionalComparison::from_result(&result, factors)?;
        let carbon_split = CarbonSplit::estimate(&profile, result.carbon_footprint);
        let category_bands = result
            .category_scores
            .iter()
            .map(|(category, score)| (category, ScoreBand::for_score(score)))
            .collect();
        let brief = RecommendationBrief {
            region: factors.region().to_string(),
            focus_areas: result.areas_for_improvement.clone(),
            category_scores: result.category_scores,
            overall_score: result.overall_score,
            profile,
        };

        Ok(Self {
            region: factors.region().to_string(),
            overall_band: ScoreBand::for_score(result.overall_score),
            category_bands,
            comparison,
            carbon_split,
            brief,
            result,
        })
    }
}

pub fn format_carbon(tons: f64) -> String {
    if tons < 1.0 {
        format!("{:.0} kg CO2e", tons * 1000.0)
    } else {
        format!("{tons:.1} tons CO2e")
    }
}

pub fn format_water(gallons: i64) -> String {
    format!("{} gallons", group_thousands(gallons))
}

/// Truncates toward zero, so 0.999 renders as "99%".
pub fn format_percentage(share: f64) -> String {
    format!("{}%", (share * 100.0).trunc() as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

fn pct_of(value: f64, average: f64) -> f64 {
    if average == 0.0 {
        0.0
    } else {
        value / average * 100.0
    }
}
