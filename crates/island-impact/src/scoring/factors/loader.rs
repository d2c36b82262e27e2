use super::FactorDomain;
use crate::scoring::error::ImpactError;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug)]
pub(super) struct FactorEntry {
    pub(super) domain: FactorDomain,
    pub(super) factor: String,
    pub(super) value: f64,
}

#[derive(Debug, Deserialize)]
struct FactorRow {
    domain: String,
    factor: String,
    value: f64,
}

pub(super) fn parse_entries<R: Read>(reader: R) -> Result<Vec<FactorEntry>, ImpactError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut entries = Vec::new();

    for (index, record) in csv_reader.deserialize::<FactorRow>().enumerate() {
        let row = record.map_err(|err| ImpactError::FactorTable(err.to_string()))?;
        // header occupies line 1
        let line = index + 2;

        let domain = FactorDomain::parse(&row.domain).ok_or_else(|| {
            ImpactError::FactorTable(format!("line {line}: unknown domain '{}'", row.domain))
        })?;
        if row.factor.is_empty() {
            return Err(ImpactError::FactorTable(format!(
                "line {line}: factor name is empty"
            )));
        }
        if !row.value.is_finite() {
            return Err(ImpactError::FactorTable(format!(
                "line {line}: {}.{} must be a finite number",
                domain, row.factor
            )));
        }

        entries.push(FactorEntry {
            domain,
            factor: row.factor,
            value: row.value,
        });
    }

    Ok(entries)
}
