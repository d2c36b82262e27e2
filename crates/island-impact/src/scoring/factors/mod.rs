mod loader;

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::ImpactError;

/// Factor names read by the calculators and estimators.
pub mod names {
    pub const TRAFFIC_CONGESTION: &str = "traffic_congestion_factor";
    pub const FOSSIL_FUEL_DEPENDENCY: &str = "fossil_fuel_dependency";
    pub const FRESHWATER_SCARCITY: &str = "freshwater_scarcity";
    pub const LIMITED_LANDFILL_SPACE: &str = "limited_landfill_space";
    pub const IMPORT_DEPENDENCY: &str = "import_dependency";
    pub const ISLAND_MULTIPLIER: &str = "island_multiplier";
    pub const BASELINE_EMISSIONS: &str = "baseline_emissions";
    pub const AVG_WATER_CONSUMPTION: &str = "avg_consumption";
    pub const AVG_WASTE_GENERATION: &str = "avg_generation";
}

/// Grouping used by the factor table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorDomain {
    Transport,
    Energy,
    Water,
    Waste,
    Food,
    Carbon,
}

impl FactorDomain {
    pub const ALL: [FactorDomain; 6] = [
        FactorDomain::Transport,
        FactorDomain::Energy,
        FactorDomain::Water,
        FactorDomain::Waste,
        FactorDomain::Food,
        FactorDomain::Carbon,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            FactorDomain::Transport => "transport",
            FactorDomain::Energy => "energy",
            FactorDomain::Water => "water",
            FactorDomain::Waste => "waste",
            FactorDomain::Food => "food",
            FactorDomain::Carbon => "carbon",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|domain| domain.key() == needle)
    }
}

impl fmt::Display for FactorDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read-only table of regional multipliers, grouped by domain.
///
/// Built once and handed to the engine; evaluation never mutates it, so a
/// single table can back any number of concurrent evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalFactors {
    region: String,
    table: BTreeMap<FactorDomain, BTreeMap<String, f64>>,
}

impl EnvironmentalFactors {
    pub fn empty(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            table: BTreeMap::new(),
        }
    }

    /// Structural conditions for Oahu, Hawaii.
    pub fn oahu() -> Self {
        use FactorDomain::*;

        Self::empty("Oahu")
            .with_factor(Transport, names::TRAFFIC_CONGESTION, 0.8)
            .with_factor(Transport, "public_transport_quality", 0.6)
            .with_factor(Transport, "ev_grid_impact", 0.7)
            .with_factor(Transport, "avg_commute_distance", 11.1)
            .with_factor(Energy, "electricity_cost", 0.34)
            .with_factor(Energy, "renewable_percentage", 0.35)
            .with_factor(Energy, names::FOSSIL_FUEL_DEPENDENCY, 0.65)
            .with_factor(Energy, "solar_potential", 0.9)
            .with_factor(Water, names::FRESHWATER_SCARCITY, 0.7)
            .with_factor(Water, "rainfall_variation", 0.7)
            .with_factor(Water, "groundwater_stress", 0.6)
            .with_factor(Water, names::AVG_WATER_CONSUMPTION, 115.0)
            .with_factor(Waste, names::LIMITED_LANDFILL_SPACE, 0.8)
            .with_factor(Waste, "recycling_infrastructure", 0.5)
            .with_factor(Waste, "marine_debris_impact", 0.9)
            .with_factor(Waste, "waste_to_energy", 0.7)
            .with_factor(Waste, names::AVG_WASTE_GENERATION, 31.0)
            .with_factor(Food, names::IMPORT_DEPENDENCY, 0.85)
            .with_factor(Food, "local_agriculture_capacity", 0.3)
            .with_factor(Food, "fishing_sustainability", 0.6)
            .with_factor(Food, "food_price_factor", 1.4)
            .with_factor(Carbon, names::ISLAND_MULTIPLIER, 1.2)
            .with_factor(Carbon, "tourism_impact", 0.3)
            .with_factor(Carbon, names::BASELINE_EMISSIONS, 16.9)
    }

    /// Parse a `domain,factor,value` CSV into a standalone table.
    pub fn from_csv_reader<R: Read>(
        region: impl Into<String>,
        reader: R,
    ) -> Result<Self, ImpactError> {
        let mut factors = Self::empty(region);
        for entry in loader::parse_entries(reader)? {
            factors.insert(entry.domain, entry.factor, entry.value);
        }
        Ok(factors)
    }

    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, ImpactError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|err| ImpactError::FactorTable(format!("{}: {err}", path.display())))?;
        let region = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("custom")
            .to_string();
        Self::from_csv_reader(region, file)
    }

    pub fn with_factor(mut self, domain: FactorDomain, name: &str, value: f64) -> Self {
        self.insert(domain, name.to_string(), value);
        self
    }

    /// Overlay every entry of `overrides` onto this table, keeping the region.
    pub fn with_overrides(mut self, overrides: &EnvironmentalFactors) -> Self {
        for (domain, entries) in &overrides.table {
            for (name, value) in entries {
                self.insert(*domain, name.clone(), *value);
            }
        }
        self
    }

    fn insert(&mut self, domain: FactorDomain, name: String, value: f64) {
        self.table.entry(domain).or_default().insert(name, value);
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn get(&self, domain: FactorDomain, name: &str) -> Option<f64> {
        self.table
            .get(&domain)
            .and_then(|entries| entries.get(name))
            .copied()
    }

    /// Look up a factor the scoring rules depend on.
    pub fn require(&self, domain: FactorDomain, name: &str) -> Result<f64, ImpactError> {
        self.get(domain, name)
            .ok_or_else(|| ImpactError::MissingFactor {
                domain,
                factor: name.to_string(),
            })
    }

    pub fn domain(&self, domain: FactorDomain) -> Option<&BTreeMap<String, f64>> {
        self.table.get(&domain)
    }

    pub fn len(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for EnvironmentalFactors {
    fn default() -> Self {
        Self::oahu()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oahu_table_carries_every_domain() {
        let factors = EnvironmentalFactors::oahu();
        for domain in FactorDomain::ALL {
            assert!(
                factors.domain(domain).is_some_and(|entries| !entries.is_empty()),
                "{domain} has no factors"
            );
        }
        assert_eq!(factors.region(), "Oahu");
        assert_eq!(factors.len(), 24);
    }

    #[test]
    fn require_names_the_missing_factor() {
        let factors = EnvironmentalFactors::empty("Nowhere");
        let err = factors
            .require(FactorDomain::Carbon, names::ISLAND_MULTIPLIER)
            .expect_err("empty table");
        assert_eq!(
            err,
            ImpactError::MissingFactor {
                domain: FactorDomain::Carbon,
                factor: "island_multiplier".to_string(),
            }
        );
        assert_eq!(
            err.to_string(),
            "environmental factor carbon.island_multiplier is not configured"
        );
    }

    #[test]
    fn overrides_replace_only_named_entries() {
        let overrides = EnvironmentalFactors::empty("patch").with_factor(
            FactorDomain::Carbon,
            names::ISLAND_MULTIPLIER,
            1.0,
        );
        let factors = EnvironmentalFactors::oahu().with_overrides(&overrides);

        assert_eq!(factors.region(), "Oahu");
        assert_eq!(
            factors.get(FactorDomain::Carbon, names::ISLAND_MULTIPLIER),
            Some(1.0)
        );
        assert_eq!(
            factors.get(FactorDomain::Water, names::FRESHWATER_SCARCITY),
            Some(0.7)
        );
    }

    #[test]
    fn csv_rows_build_a_table() {
        let csv = "domain,factor,value\n\
                   carbon,island_multiplier,1.5\n\
                   Water, freshwater_scarcity ,0.2\n";
        let factors = EnvironmentalFactors::from_csv_reader("Maui", csv.as_bytes())
            .expect("csv parses");

        assert_eq!(factors.region(), "Maui");
        assert_eq!(factors.get(FactorDomain::Carbon, "island_multiplier"), Some(1.5));
        assert_eq!(factors.get(FactorDomain::Water, "freshwater_scarcity"), Some(0.2));
    }

    #[test]
    fn csv_rejects_unknown_domains_and_bad_values() {
        let unknown = "domain,factor,value\nocean,acidity,0.4\n";
        let err = EnvironmentalFactors::from_csv_reader("x", unknown.as_bytes())
            .expect_err("unknown domain");
        assert!(err.to_string().contains("ocean"));

        let not_finite = "domain,factor,value\ncarbon,island_multiplier,NaN\n";
        assert!(EnvironmentalFactors::from_csv_reader("x", not_finite.as_bytes()).is_err());

        let garbage = "domain,factor,value\ncarbon,island_multiplier,lots\n";
        assert!(EnvironmentalFactors::from_csv_reader("x", garbage.as_bytes()).is_err());
    }
}
