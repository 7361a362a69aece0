use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record – one row of the salary survey
// ---------------------------------------------------------------------------

/// A single salary record (one row of the source table).
/// Immutable once loaded; the loader guarantees every field is populated.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    /// Survey year.
    pub year: i64,
    /// Seniority level (e.g. "junior", "senior").
    pub seniority: String,
    /// Contract type (e.g. "full-time", "contract").
    pub contract: String,
    /// Company-size category (e.g. "small", "medium", "large").
    pub company_size: String,
    /// Job title.
    pub title: String,
    /// Annual salary, normalized to USD.
    pub usd: f64,
    /// Work arrangement: "on-site", "hybrid" or "remote".
    pub remote: String,
    /// Residence country, ISO alpha-3.
    pub residence_iso3: String,
}

// ---------------------------------------------------------------------------
// FilterColumn – the four columns the user can filter on
// ---------------------------------------------------------------------------

/// The filterable columns, in the order they appear in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    Year,
    Seniority,
    Contract,
    CompanySize,
}

impl FilterColumn {
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Year,
        FilterColumn::Seniority,
        FilterColumn::Contract,
        FilterColumn::CompanySize,
    ];

    /// Human-readable label for filter widgets.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Year => "Year",
            FilterColumn::Seniority => "Seniority",
            FilterColumn::Contract => "Contract type",
            FilterColumn::CompanySize => "Company size",
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnValue – a single cell of a filterable column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value for the filterable columns.
/// Using `BTreeMap` / `BTreeSet` downstream so `ColumnValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Integer(i64),
    Text(String),
}

// -- Manual Eq/Ord so we can put ColumnValue in BTreeSet --

impl Eq for ColumnValue {}

impl PartialOrd for ColumnValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ColumnValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use ColumnValue::*;
        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Integer(_), Text(_)) => std::cmp::Ordering::Less,
            (Text(_), Integer(_)) => std::cmp::Ordering::Greater,
        }
    }
}

impl std::hash::Hash for ColumnValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            ColumnValue::Integer(i) => i.hash(state),
            ColumnValue::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for ColumnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnValue::Integer(i) => write!(f, "{i}"),
            ColumnValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Record {
    /// The record's value in the given filterable column.
    pub fn filter_value(&self, column: FilterColumn) -> ColumnValue {
        match column {
            FilterColumn::Year => ColumnValue::Integer(self.year),
            FilterColumn::Seniority => ColumnValue::Text(self.seniority.clone()),
            FilterColumn::Contract => ColumnValue::Text(self.contract.clone()),
            FilterColumn::CompanySize => ColumnValue::Text(self.company_size.clone()),
        }
    }
}

// ---------------------------------------------------------------------------
// SalaryDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with the per-column distinct-value registry.
#[derive(Debug, Clone)]
pub struct SalaryDataset {
    /// All records (rows), in source order.
    pub records: Vec<Record>,
    /// For each filterable column the sorted set of distinct values.
    /// Populates the filter widgets and is the universe a selection is
    /// validated against.
    pub distinct_values: BTreeMap<FilterColumn, BTreeSet<ColumnValue>>,
}

impl SalaryDataset {
    /// Build the distinct-value registry from the loaded records (one pass).
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut distinct_values: BTreeMap<FilterColumn, BTreeSet<ColumnValue>> = FilterColumn::ALL
            .iter()
            .map(|&col| (col, BTreeSet::new()))
            .collect();

        for rec in &records {
            for &col in &FilterColumn::ALL {
                distinct_values
                    .entry(col)
                    .or_default()
                    .insert(rec.filter_value(col));
            }
        }
        SalaryDataset {
            records,
            distinct_values,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(year: i64, seniority: &str, title: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.into(),
            contract: "full-time".into(),
            company_size: "medium".into(),
            title: title.into(),
            usd,
            remote: "remote".into(),
            residence_iso3: "USA".into(),
        }
    }

    #[test]
    fn registry_collects_sorted_distinct_values() {
        let ds = SalaryDataset::from_records(vec![
            rec(2024, "senior", "A", 1.0),
            rec(2023, "junior", "B", 2.0),
            rec(2023, "senior", "C", 3.0),
        ]);

        let years: Vec<ColumnValue> = ds.distinct_values[&FilterColumn::Year]
            .iter()
            .cloned()
            .collect();
        assert_eq!(
            years,
            vec![ColumnValue::Integer(2023), ColumnValue::Integer(2024)]
        );

        let seniorities: Vec<String> = ds.distinct_values[&FilterColumn::Seniority]
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(seniorities, vec!["junior", "senior"]);
    }

    #[test]
    fn empty_dataset_has_empty_registry_sets() {
        let ds = SalaryDataset::from_records(Vec::new());
        assert!(ds.is_empty());
        for col in FilterColumn::ALL {
            assert!(ds.distinct_values[&col].is_empty());
        }
    }
}
