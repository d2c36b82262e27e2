//! The five category calculators.
//!
//! Each one starts from a fixed baseline, applies additive adjustments and
//! clamps the rounded result into 0..=100. None of them reads another's
//! output, so they can run in any order.

use serde::{Deserialize, Serialize};

use super::domain::{Category, Diet, Frequency, RenewableEnergy, UserProfile, VehicleClass};
use super::error::ImpactError;
use super::factors::{names, EnvironmentalFactors, FactorDomain};

/// Fixed one-time penalty scale applied to each regional factor.
const REGIONAL_PENALTY_SCALE: f64 = 5.0;

const VEHICLE_MULTIPLIERS: [(VehicleClass, f64); 5] = [
    (VehicleClass::Electric, 0.3),
    (VehicleClass::Hybrid, 0.6),
    (VehicleClass::SmallGas, 1.0),
    (VehicleClass::MediumGas, 1.5),
    (VehicleClass::LargeGas, 2.0),
];

const RENEWABLE_CREDIT: [(RenewableEnergy, f64); 3] = [
    (RenewableEnergy::Solar, 20.0),
    (RenewableEnergy::Other, 15.0),
    (RenewableEnergy::None, 0.0),
];

const RECYCLING_CREDIT: [(Frequency, f64); 5] = [
    (Frequency::Never, 0.0),
    (Frequency::Rarely, 5.0),
    (Frequency::Sometimes, 10.0),
    (Frequency::Often, 15.0),
    (Frequency::Always, 20.0),
];

const PLASTICS_CREDIT: [(Frequency, f64); 5] = [
    (Frequency::Never, 20.0),
    (Frequency::Rarely, 15.0),
    (Frequency::Sometimes, 5.0),
    (Frequency::Often, -5.0),
    (Frequency::Always, -15.0),
];

const DIET_CREDIT: [(Diet, f64); 5] = [
    (Diet::Vegan, 40.0),
    (Diet::Vegetarian, 30.0),
    (Diet::Pescatarian, 20.0),
    (Diet::Flexitarian, 15.0),
    (Diet::Omnivore, 0.0),
];

/// Threshold test for one row of a banded adjustment table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Threshold {
    Below(f64),
    Above(f64),
}

impl Threshold {
    fn matches(self, value: f64) -> bool {
        match self {
            Threshold::Below(limit) => value < limit,
            Threshold::Above(limit) => value > limit,
        }
    }
}

/// Per-person monthly electricity spend bands. Rows are evaluated top to
/// bottom and only the first match applies.
pub(crate) const ELECTRICITY_BANDS: [(Threshold, f64); 5] = [
    (Threshold::Below(50.0), 15.0),
    (Threshold::Below(75.0), 10.0),
    (Threshold::Below(100.0), 5.0),
    (Threshold::Above(150.0), -10.0),
    (Threshold::Above(125.0), -5.0),
];

/// Integer scores for every category, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub transport: u8,
    pub energy: u8,
    pub water: u8,
    pub waste: u8,
    pub food: u8,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u8 {
        match category {
            Category::Transport => self.transport,
            Category::Energy => self.energy,
            Category::Water => self.water,
            Category::Waste => self.waste,
            Category::Food => self.food,
        }
    }

    /// Scores paired with their category, in the fixed category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u8)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }
}

pub(crate) fn score_profile(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<CategoryScores, ImpactError> {
    Ok(CategoryScores {
        transport: transport_score(profile, factors)?,
        energy: energy_score(profile, factors)?,
        water: water_score(profile, factors)?,
        waste: waste_score(profile, factors)?,
        food: food_score(profile, factors)?,
    })
}

pub(crate) fn transport_score(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<u8, ImpactError> {
    let mut score = 100.0;

    let multiplier = lookup(&VEHICLE_MULTIPLIERS, profile.car_type, "vehicle_multiplier")?;
    score -= profile.car_usage * multiplier * 0.1;
    score += (profile.public_transport_usage * 1.5).min(25.0);
    score -= profile.flight_hours * 0.5;

    if profile.car_usage > 0.0 && !profile.car_type.is_electrified() {
        let congestion = factors.require(FactorDomain::Transport, names::TRAFFIC_CONGESTION)?;
        score -= congestion * REGIONAL_PENALTY_SCALE;
    }

    Ok(clamp_score(score))
}

pub(crate) fn energy_score(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<u8, ImpactError> {
    let mut score = 80.0;

    let per_person = per_person_electricity(profile)?;
    score += banded(&ELECTRICITY_BANDS, per_person);
    score += lookup(&RENEWABLE_CREDIT, profile.renewable_energy, "renewable_credit")?;
    score -= profile.air_conditioning * 1.2;

    let fossil = factors.require(FactorDomain::Energy, names::FOSSIL_FUEL_DEPENDENCY)?;
    score -= fossil * REGIONAL_PENALTY_SCALE;

    Ok(clamp_score(score))
}

pub(crate) fn water_score(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<u8, ImpactError> {
    let mut score = 75.0;

    score -= profile.shower_length * profile.shower_frequency * 0.2;

    let conservation = &profile.water_conservation;
    if !conservation.opted_out {
        score += conservation.selected_count() as f64 * 6.0;
    }

    let scarcity = factors.require(FactorDomain::Water, names::FRESHWATER_SCARCITY)?;
    score -= scarcity * REGIONAL_PENALTY_SCALE;

    Ok(clamp_score(score))
}

pub(crate) fn waste_score(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<u8, ImpactError> {
    let mut score = 60.0;

    score += lookup(&RECYCLING_CREDIT, profile.recycling_habit, "recycling_credit")?;
    if profile.composting {
        score += 15.0;
    }
    score += lookup(&PLASTICS_CREDIT, profile.single_use_plastics, "plastics_credit")?;
    score += profile.local_food * 0.1;

    let landfill = factors.require(FactorDomain::Waste, names::LIMITED_LANDFILL_SPACE)?;
    score -= landfill * REGIONAL_PENALTY_SCALE;

    Ok(clamp_score(score))
}

pub(crate) fn food_score(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<u8, ImpactError> {
    let mut score = 50.0;

    score += lookup(&DIET_CREDIT, profile.diet_type, "diet_credit")?;
    score += profile.local_food * 0.15;
    score -= profile.meals_out * 0.5;

    let imports = factors.require(FactorDomain::Food, names::IMPORT_DEPENDENCY)?;
    score -= imports * REGIONAL_PENALTY_SCALE;

    Ok(clamp_score(score))
}

fn per_person_electricity(profile: &UserProfile) -> Result<f64, ImpactError> {
    if profile.household_size == 0 {
        return Err(ImpactError::invalid(
            "household_size",
            "household must have at least one person (got 0)",
        ));
    }
    Ok(profile.electricity_bill / f64::from(profile.household_size))
}

/// First matching band wins; no match means no adjustment.
pub(crate) fn banded(bands: &[(Threshold, f64)], value: f64) -> f64 {
    bands
        .iter()
        .find(|(threshold, _)| threshold.matches(value))
        .map(|(_, adjustment)| *adjustment)
        .unwrap_or(0.0)
}

/// Ordered key lookup; a missing key is a table defect, never a default.
pub(crate) fn lookup<K>(
    table: &[(K, f64)],
    key: K,
    table_name: &'static str,
) -> Result<f64, ImpactError>
where
    K: Copy + PartialEq + std::fmt::Debug,
{
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
        .ok_or_else(|| ImpactError::UnmappedKey {
            table: table_name,
            key: format!("{key:?}"),
        })
}

fn clamp_score(raw: f64) -> u8 {
    raw.round_ties_even().clamp(0.0, 100.0) as u8
}
