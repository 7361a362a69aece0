use std::collections::BTreeMap;

use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Summary metrics (KPI strip)
// ---------------------------------------------------------------------------

/// Scalar summary statistics over the filtered view.
///
/// The empty view is a valid "no data" state: numeric fields are zero and
/// `top_title` is the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryMetrics {
    /// Arithmetic mean of the salary column.
    pub mean_salary: f64,
    /// Maximum salary.
    pub max_salary: f64,
    /// Number of records in the view.
    pub record_count: usize,
    /// Most frequent job title. Ties break to the lexicographically
    /// smallest title so the output is deterministic.
    pub top_title: String,
}

/// Compute summary metrics over the records selected by `indices`.
pub fn summary_metrics(dataset: &SalaryDataset, indices: &[usize]) -> SummaryMetrics {
    if indices.is_empty() {
        return SummaryMetrics::default();
    }

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut title_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for &idx in indices {
        let rec = &dataset.records[idx];
        sum += rec.usd;
        max = max.max(rec.usd);
        *title_counts.entry(rec.title.as_str()).or_default() += 1;
    }

    // BTreeMap iterates titles in ascending order, so keeping only strictly
    // larger counts leaves the smallest title among the most frequent ones.
    let mut top_title = "";
    let mut top_count = 0;
    for (&title, &count) in &title_counts {
        if count > top_count {
            top_title = title;
            top_count = count;
        }
    }

    SummaryMetrics {
        mean_salary: sum / indices.len() as f64,
        max_salary: max,
        record_count: indices.len(),
        top_title: top_title.to_string(),
    }
}
