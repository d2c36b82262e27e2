use std::collections::BTreeSet;

use super::domain::{
    ConservationMeasure, ConservationMeasures, Diet, Frequency, LifestyleQuestionnaire,
    RenewableEnergy, UserProfile, VehicleClass,
};
use super::error::ImpactError;

const MAX_AIR_CONDITIONING_HOURS: f64 = 24.0;
const MAX_LOCAL_FOOD_PCT: f64 = 100.0;

/// Guard responsible for producing validated `UserProfile` instances.
///
/// Every range and label check happens here so the calculators can assume
/// well-formed input. Nothing is defaulted: an unknown option label is a
/// schema mismatch and is reported as such.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileGuard;

impl ProfileGuard {
    pub fn profile_from_questionnaire(
        &self,
        questionnaire: LifestyleQuestionnaire,
    ) -> Result<UserProfile, ImpactError> {
        let LifestyleQuestionnaire {
            car_usage,
            car_type,
            public_transport_usage,
            flight_hours,
            household_size,
            electricity_bill,
            renewable_energy,
            air_conditioning,
            shower_length,
            shower_frequency,
            water_conservation,
            recycling_habit,
            composting,
            single_use_plastics,
            local_food,
            diet_type,
            meals_out,
        } = questionnaire;

        let household_size = u32::try_from(household_size).map_err(|_| {
            ImpactError::invalid(
                "household_size",
                format!("household must have at least one person (got {household_size})"),
            )
        })?;

        let profile = UserProfile {
            car_usage,
            car_type: VehicleClass::from_label(&car_type)
                .ok_or_else(|| unknown("car_type", &car_type))?,
            public_transport_usage,
            flight_hours,
            household_size,
            electricity_bill,
            renewable_energy: RenewableEnergy::from_label(&renewable_energy)
                .ok_or_else(|| unknown("renewable_energy", &renewable_energy))?,
            air_conditioning,
            shower_length,
            shower_frequency,
            water_conservation: conservation_measures(&water_conservation)?,
            recycling_habit: Frequency::from_label(&recycling_habit)
                .ok_or_else(|| unknown("recycling_habit", &recycling_habit))?,
            composting,
            single_use_plastics: Frequency::from_label(&single_use_plastics)
                .ok_or_else(|| unknown("single_use_plastics", &single_use_plastics))?,
            local_food,
            diet_type: Diet::from_label(&diet_type)
                .ok_or_else(|| unknown("diet_type", &diet_type))?,
            meals_out,
        };

        self.validate(&profile)?;
        Ok(profile)
    }

    /// Range checks shared by questionnaire conversion and direct evaluation.
    pub fn validate(&self, profile: &UserProfile) -> Result<(), ImpactError> {
        if profile.household_size == 0 {
            return Err(ImpactError::invalid(
                "household_size",
                "household must have at least one person (got 0)",
            ));
        }

        let electricity_bill = finite("electricity_bill", profile.electricity_bill)?;
        if electricity_bill <= 0.0 {
            return Err(ImpactError::invalid(
                "electricity_bill",
                format!("monthly bill must be positive (got {electricity_bill})"),
            ));
        }

        non_negative("car_usage", profile.car_usage)?;
        non_negative("public_transport_usage", profile.public_transport_usage)?;
        non_negative("flight_hours", profile.flight_hours)?;
        within(
            "air_conditioning",
            profile.air_conditioning,
            MAX_AIR_CONDITIONING_HOURS,
        )?;
        non_negative("shower_length", profile.shower_length)?;
        non_negative("shower_frequency", profile.shower_frequency)?;
        within("local_food", profile.local_food, MAX_LOCAL_FOOD_PCT)?;
        non_negative("meals_out", profile.meals_out)?;

        Ok(())
    }
}

fn conservation_measures(labels: &[String]) -> Result<ConservationMeasures, ImpactError> {
    let mut measures = BTreeSet::new();
    let mut opted_out = false;

    for label in labels {
        if label.trim() == ConservationMeasure::NONE_LABEL {
            opted_out = true;
            continue;
        }
        let measure = ConservationMeasure::from_label(label)
            .ok_or_else(|| unknown("water_conservation", label))?;
        measures.insert(measure);
    }

    Ok(ConservationMeasures {
        measures,
        opted_out,
    })
}

fn finite(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ImpactError::invalid(field, "must be a finite number"))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64, ImpactError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ImpactError::invalid(
            field,
            format!("must not be negative (got {value})"),
        ));
    }
    Ok(value)
}

fn within(field: &'static str, value: f64, max: f64) -> Result<f64, ImpactError> {
    let value = non_negative(field, value)?;
    if value > max {
        return Err(ImpactError::invalid(
            field,
            format!("must be between 0 and {max} (got {value})"),
        ));
    }
    Ok(value)
}

fn unknown(field: &'static str, value: &str) -> ImpactError {
    ImpactError::UnknownKey {
        field,
        value: value.to_string(),
    }
}
