//! Physical-quantity estimators: carbon, water and waste.
//!
//! Unlike the category scores these are not clamped. Heavy renewable and
//! diet credits can push the carbon sum below zero before the flat living
//! term is added, and the landscaping credit is subtracted from water usage
//! without a floor.

use serde::{Deserialize, Serialize};

use super::categories::lookup;
use super::domain::{
    ConservationMeasure, Diet, Frequency, RenewableEnergy, UserProfile, VehicleClass,
};
use super::error::ImpactError;
use super::factors::{names, EnvironmentalFactors, FactorDomain};

const WEEKS_PER_YEAR: f64 = 52.0;
const KG_PER_TON: f64 = 1000.0;
const FLIGHT_TONS_PER_HOUR: f64 = 0.2;
const ELECTRICITY_TONS_PER_HUNDRED: f64 = 0.8;
const LOCAL_FOOD_MAX_CREDIT: f64 = 0.5;
const COMPOSTING_CARBON_CREDIT: f64 = 0.3;
/// Tons per year for basic living, added after the regional multiplier.
const BASE_LIVING_TONS: f64 = 5.0;

const SHOWER_GALLONS_PER_MINUTE: f64 = 2.5;
const BASE_GALLONS_PER_PERSON: f64 = 30.0;
const LOW_FLOW_FACTOR: f64 = 0.8;
const DUAL_FLUSH_FACTOR: f64 = 0.9;
const LANDSCAPING_GALLONS_SAVED: f64 = 10.0;

const WASTE_LBS_PER_PERSON_DAY: f64 = 4.5;
const COMPOSTING_WASTE_FACTOR: f64 = 0.7;

/// Tailpipe plus grid kg CO2e per mile.
const EMISSIONS_PER_MILE: [(VehicleClass, f64); 5] = [
    (VehicleClass::Electric, 0.1),
    (VehicleClass::Hybrid, 0.2),
    (VehicleClass::SmallGas, 0.3),
    (VehicleClass::MediumGas, 0.4),
    (VehicleClass::LargeGas, 0.6),
];

const RENEWABLE_SAVINGS: [(RenewableEnergy, f64); 3] = [
    (RenewableEnergy::Solar, 2.0),
    (RenewableEnergy::Other, 1.0),
    (RenewableEnergy::None, 0.0),
];

const DIET_TONS: [(Diet, f64); 5] = [
    (Diet::Vegan, 1.5),
    (Diet::Vegetarian, 2.0),
    (Diet::Pescatarian, 2.5),
    (Diet::Flexitarian, 3.0),
    (Diet::Omnivore, 4.0),
];

const RECYCLING_CARBON_CREDIT: [(Frequency, f64); 5] = [
    (Frequency::Always, 0.5),
    (Frequency::Often, 0.3),
    (Frequency::Sometimes, 0.0),
    (Frequency::Rarely, 0.0),
    (Frequency::Never, 0.0),
];

const RECYCLING_WASTE_FACTOR: [(Frequency, f64); 5] = [
    (Frequency::Always, 0.6),
    (Frequency::Often, 0.7),
    (Frequency::Sometimes, 0.85),
    (Frequency::Rarely, 1.0),
    (Frequency::Never, 1.0),
];

const PLASTICS_WASTE_FACTOR: [(Frequency, f64); 5] = [
    (Frequency::Always, 1.2),
    (Frequency::Often, 1.0),
    (Frequency::Sometimes, 1.0),
    (Frequency::Rarely, 1.0),
    (Frequency::Never, 0.8),
];

/// Real-valued physical estimates for one profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalEstimates {
    /// Tons CO2e per year, one decimal place.
    pub carbon_footprint: f64,
    /// Gallons per day.
    pub water_usage: i64,
    /// Pounds per week.
    pub waste_generation: i64,
}

pub(crate) fn estimate_profile(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<PhysicalEstimates, ImpactError> {
    Ok(PhysicalEstimates {
        carbon_footprint: carbon_footprint(profile, factors)?,
        water_usage: water_usage(profile),
        waste_generation: waste_generation(profile)?,
    })
}

pub(crate) fn carbon_footprint(
    profile: &UserProfile,
    factors: &EnvironmentalFactors,
) -> Result<f64, ImpactError> {
    let per_mile = lookup(&EMISSIONS_PER_MILE, profile.car_type, "emissions_per_mile")?;
    let mut tons = profile.car_usage * WEEKS_PER_YEAR * per_mile / KG_PER_TON;

    tons += profile.flight_hours * FLIGHT_TONS_PER_HOUR;

    tons += (profile.electricity_bill / 100.0) * ELECTRICITY_TONS_PER_HUNDRED;
    tons -= lookup(&RENEWABLE_SAVINGS, profile.renewable_energy, "renewable_savings")?;

    tons += lookup(&DIET_TONS, profile.diet_type, "diet_emissions")?;
    tons -= (profile.local_food / 100.0) * LOCAL_FOOD_MAX_CREDIT;

    tons -= lookup(
        &RECYCLING_CARBON_CREDIT,
        profile.recycling_habit,
        "recycling_carbon_credit",
    )?;
    if profile.composting {
        tons -= COMPOSTING_CARBON_CREDIT;
    }

    // the multiplier scales every term above, credits included
    tons *= factors.require(FactorDomain::Carbon, names::ISLAND_MULTIPLIER)?;
    tons += BASE_LIVING_TONS;

    Ok(round_to_tenth(tons))
}

pub(crate) fn water_usage(profile: &UserProfile) -> i64 {
    let shower_daily =
        profile.shower_length * SHOWER_GALLONS_PER_MINUTE * profile.shower_frequency / 7.0;
    let mut gallons = shower_daily + BASE_GALLONS_PER_PERSON * f64::from(profile.household_size);

    let measures = &profile.water_conservation;
    if measures.contains(ConservationMeasure::LowFlowFixtures) {
        gallons *= LOW_FLOW_FACTOR;
    }
    if measures.contains(ConservationMeasure::DualFlushToilets) {
        gallons *= DUAL_FLUSH_FACTOR;
    }
    if measures.contains(ConservationMeasure::DroughtResistantLandscaping) {
        gallons -= LANDSCAPING_GALLONS_SAVED;
    }

    gallons.round_ties_even() as i64
}

pub(crate) fn waste_generation(profile: &UserProfile) -> Result<i64, ImpactError> {
    let mut pounds = WASTE_LBS_PER_PERSON_DAY * 7.0 * f64::from(profile.household_size);

    pounds *= lookup(
        &RECYCLING_WASTE_FACTOR,
        profile.recycling_habit,
        "recycling_waste_factor",
    )?;
    if profile.composting {
        pounds *= COMPOSTING_WASTE_FACTOR;
    }
    pounds *= lookup(
        &PLASTICS_WASTE_FACTOR,
        profile.single_use_plastics,
        "plastics_waste_factor",
    )?;

    Ok(pounds.round_ties_even() as i64)
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
