use std::collections::{BTreeMap, BTreeSet};

use super::model::{ColumnValue, FilterColumn, SalaryDataset};

// ---------------------------------------------------------------------------
// Filter selection: which distinct values are selected per column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column → set of selected values.
/// A column absent from the map imposes no constraint; an empty set means
/// "nothing selected" and matches no record at all.
pub type FilterState = BTreeMap<FilterColumn, BTreeSet<ColumnValue>>;

/// Initialise a [`FilterState`] with all values selected (i.e., show everything).
pub fn init_filter_state(dataset: &SalaryDataset) -> FilterState {
    dataset
        .distinct_values
        .iter()
        .map(|(&col, vals)| (col, vals.clone()))
        .collect()
}

/// Return indices of records that pass all active filters, in source order.
///
/// A record passes a column filter when:
/// * The column is not present in `filters` → passes (no constraint)
/// * The selection covers the column's whole distinct set → passes
/// * The selection is empty → nothing selected → fails
/// * The record's value for that column is in the selected set → passes
///
/// Selected values unknown to the dataset (stale after a reload) are not an
/// error; they just never match anything.
pub fn filtered_indices(dataset: &SalaryDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            for (&col, selected) in filters {
                if selected.is_empty() {
                    // Nothing selected for this column → hide everything
                    return false;
                }
                // Selection covers the whole universe → no effective filter
                if let Some(all_vals) = dataset.distinct_values.get(&col) {
                    if all_vals.is_subset(selected) {
                        continue;
                    }
                }
                if !selected.contains(&rec.filter_value(col)) {
                    return false;
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(year: i64, seniority: &str, usd: f64) -> Record {
        Record {
            year,
            seniority: seniority.into(),
            contract: "full-time".into(),
            company_size: "medium".into(),
            title: "Data Analyst".into(),
            usd,
            remote: "remote".into(),
            residence_iso3: "USA".into(),
        }
    }

    fn sample_dataset() -> SalaryDataset {
        SalaryDataset::from_records(vec![
            rec(2023, "junior", 100_000.0),
            rec(2023, "senior", 200_000.0),
            rec(2024, "senior", 150_000.0),
            rec(2024, "junior", 90_000.0),
        ])
    }

    fn select(col: FilterColumn, vals: &[ColumnValue]) -> FilterState {
        let mut filters = FilterState::new();
        filters.insert(col, vals.iter().cloned().collect());
        filters
    }

    #[test]
    fn default_state_passes_every_record() {
        let ds = sample_dataset();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1, 2, 3]);
    }

    #[test]
    fn filter_preserves_source_order() {
        let ds = sample_dataset();
        let filters = select(
            FilterColumn::Seniority,
            &[ColumnValue::Text("senior".into())],
        );
        assert_eq!(filtered_indices(&ds, &filters), vec![1, 2]);
    }

    #[test]
    fn conjunction_across_columns() {
        let ds = sample_dataset();
        let mut filters = select(FilterColumn::Year, &[ColumnValue::Integer(2024)]);
        filters.insert(
            FilterColumn::Seniority,
            [ColumnValue::Text("junior".into())].into_iter().collect(),
        );
        assert_eq!(filtered_indices(&ds, &filters), vec![3]);
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let ds = sample_dataset();
        let mut filters = init_filter_state(&ds);
        filters.insert(FilterColumn::Year, BTreeSet::new());
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn stale_value_never_matches() {
        let ds = sample_dataset();
        let filters = select(FilterColumn::Year, &[ColumnValue::Integer(1999)]);
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn stale_values_do_not_disable_the_filter() {
        // A stale value plus a real one: same cardinality as the year
        // universe, but only the real value may match.
        let ds = sample_dataset();
        let filters = select(
            FilterColumn::Year,
            &[
                ColumnValue::Integer(1999),
                ColumnValue::Integer(2023),
            ],
        );
        assert_eq!(filtered_indices(&ds, &filters), vec![0, 1]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let filters = select(FilterColumn::Year, &[ColumnValue::Integer(2023)]);
        let once = filtered_indices(&ds, &filters);
        let twice = filtered_indices(&ds, &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn shrinking_a_selection_never_grows_the_view() {
        let ds = sample_dataset();
        let wide = select(
            FilterColumn::Year,
            &[ColumnValue::Integer(2023), ColumnValue::Integer(2024)],
        );
        let narrow = select(FilterColumn::Year, &[ColumnValue::Integer(2023)]);
        assert!(filtered_indices(&ds, &narrow).len() <= filtered_indices(&ds, &wide).len());
    }

    #[test]
    fn empty_dataset_filters_to_empty() {
        let ds = SalaryDataset::from_records(Vec::new());
        let filters = init_filter_state(&ds);
        assert!(filtered_indices(&ds, &filters).is_empty());
    }
}
