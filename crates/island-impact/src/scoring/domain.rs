use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Lifestyle domains scored by the engine, in their fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Energy,
    Water,
    Waste,
    Food,
}

impl Category {
    /// Iteration order used by the aggregator and the improvement selector.
    pub const ALL: [Category; 5] = [
        Category::Transport,
        Category::Energy,
        Category::Water,
        Category::Waste,
        Category::Food,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Category::Transport => "transport",
            Category::Energy => "energy",
            Category::Water => "water",
            Category::Waste => "waste",
            Category::Food => "food",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Category::Transport => "Transportation",
            Category::Energy => "Energy",
            Category::Water => "Water",
            Category::Waste => "Waste",
            Category::Food => "Food",
        }
    }
}

/// Vehicle classes offered by the questionnaire, cleanest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Electric,
    Hybrid,
    SmallGas,
    MediumGas,
    LargeGas,
}

impl VehicleClass {
    const LABELS: [(&'static str, VehicleClass); 5] = [
        ("Electric vehicle", VehicleClass::Electric),
        ("Hybrid vehicle", VehicleClass::Hybrid),
        ("Small gas car (30+ mpg)", VehicleClass::SmallGas),
        ("Medium gas car (20-30 mpg)", VehicleClass::MediumGas),
        ("Large gas car/SUV/truck (under 20 mpg)", VehicleClass::LargeGas),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        lookup_label(&Self::LABELS, label)
    }

    pub fn label(self) -> &'static str {
        label_of(&Self::LABELS, self)
    }

    /// Electric and hybrid vehicles are exempt from the congestion penalty.
    pub const fn is_electrified(self) -> bool {
        matches!(self, VehicleClass::Electric | VehicleClass::Hybrid)
    }
}

/// Household renewable energy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewableEnergy {
    None,
    Solar,
    Other,
}

impl RenewableEnergy {
    const LABELS: [(&'static str, RenewableEnergy); 3] = [
        ("No", RenewableEnergy::None),
        ("Yes - solar panels", RenewableEnergy::Solar),
        ("Yes - other", RenewableEnergy::Other),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        lookup_label(&Self::LABELS, label)
    }

    pub fn label(self) -> &'static str {
        label_of(&Self::LABELS, self)
    }
}

/// Five-step ordinal answer used for recycling and single-use plastics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Never,
    Rarely,
    Sometimes,
    Often,
    Always,
}

impl Frequency {
    const LABELS: [(&'static str, Frequency); 5] = [
        ("Never", Frequency::Never),
        ("Rarely", Frequency::Rarely),
        ("Sometimes", Frequency::Sometimes),
        ("Often", Frequency::Often),
        ("Always", Frequency::Always),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        lookup_label(&Self::LABELS, label)
    }

    pub fn label(self) -> &'static str {
        label_of(&Self::LABELS, self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegan,
    Vegetarian,
    Pescatarian,
    Flexitarian,
    Omnivore,
}

impl Diet {
    const LABELS: [(&'static str, Diet); 5] = [
        ("Vegan", Diet::Vegan),
        ("Vegetarian", Diet::Vegetarian),
        ("Pescatarian", Diet::Pescatarian),
        (
            "Flexitarian (mostly plant-based with occasional meat)",
            Diet::Flexitarian,
        ),
        ("Omnivore (regular meat consumption)", Diet::Omnivore),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        lookup_label(&Self::LABELS, label)
    }

    pub fn label(self) -> &'static str {
        label_of(&Self::LABELS, self)
    }

    pub const fn is_plant_based(self) -> bool {
        matches!(self, Diet::Vegan | Diet::Vegetarian)
    }
}

/// Household water conservation measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConservationMeasure {
    LowFlowFixtures,
    DualFlushToilets,
    RainwaterCollection,
    DroughtResistantLandscaping,
}

impl ConservationMeasure {
    /// Questionnaire option that opts out of every measure.
    pub const NONE_LABEL: &'static str = "None of the above";

    const LABELS: [(&'static str, ConservationMeasure); 4] = [
        (
            "Low-flow showerheads/faucets",
            ConservationMeasure::LowFlowFixtures,
        ),
        ("Dual-flush toilets", ConservationMeasure::DualFlushToilets),
        (
            "Rainwater collection",
            ConservationMeasure::RainwaterCollection,
        ),
        (
            "Drought-resistant landscaping",
            ConservationMeasure::DroughtResistantLandscaping,
        ),
    ];

    pub fn from_label(label: &str) -> Option<Self> {
        lookup_label(&Self::LABELS, label)
    }

    pub fn label(self) -> &'static str {
        label_of(&Self::LABELS, self)
    }
}

/// Selected conservation measures plus whether the opt-out sentinel was ticked.
///
/// The sentinel can be selected alongside real measures. When it is, the water
/// score grants no conservation credit, while the usage estimate still applies
/// whichever fixtures were named.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConservationMeasures {
    pub measures: BTreeSet<ConservationMeasure>,
    pub opted_out: bool,
}

impl ConservationMeasures {
    pub fn none() -> Self {
        Self {
            measures: BTreeSet::new(),
            opted_out: true,
        }
    }

    pub fn of<I>(measures: I) -> Self
    where
        I: IntoIterator<Item = ConservationMeasure>,
    {
        Self {
            measures: measures.into_iter().collect(),
            opted_out: false,
        }
    }

    pub fn contains(&self, measure: ConservationMeasure) -> bool {
        self.measures.contains(&measure)
    }

    /// Number of selected entries, counting the sentinel the way the form does.
    pub fn selected_count(&self) -> usize {
        self.measures.len() + usize::from(self.opted_out)
    }
}

/// Validated questionnaire answers for a single evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub car_usage: f64,
    pub car_type: VehicleClass,
    pub public_transport_usage: f64,
    pub flight_hours: f64,
    pub household_size: u32,
    pub electricity_bill: f64,
    pub renewable_energy: RenewableEnergy,
    pub air_conditioning: f64,
    pub shower_length: f64,
    pub shower_frequency: f64,
    pub water_conservation: ConservationMeasures,
    pub recycling_habit: Frequency,
    pub composting: bool,
    pub single_use_plastics: Frequency,
    /// Share of food sourced locally, 0-100. Read by the waste and food
    /// calculators and the carbon estimator alike.
    pub local_food: f64,
    pub diet_type: Diet,
    pub meals_out: f64,
}

/// Raw form payload as submitted, enums still carried as option labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifestyleQuestionnaire {
    pub car_usage: f64,
    pub car_type: String,
    pub public_transport_usage: f64,
    pub flight_hours: f64,
    pub household_size: i64,
    pub electricity_bill: f64,
    pub renewable_energy: String,
    pub air_conditioning: f64,
    pub shower_length: f64,
    pub shower_frequency: f64,
    #[serde(default)]
    pub water_conservation: Vec<String>,
    pub recycling_habit: String,
    #[serde(default)]
    pub composting: bool,
    pub single_use_plastics: String,
    pub local_food: f64,
    pub diet_type: String,
    pub meals_out: f64,
}

fn lookup_label<T: Copy>(table: &[(&'static str, T)], label: &str) -> Option<T> {
    let needle = label.trim();
    table
        .iter()
        .find(|(candidate, _)| *candidate == needle)
        .map(|(_, value)| *value)
}

fn label_of<T: Copy + PartialEq>(table: &[(&'static str, T)], value: T) -> &'static str {
    table
        .iter()
        .find(|(_, candidate)| *candidate == value)
        .map(|(label, _)| *label)
        .unwrap_or_default()
}
