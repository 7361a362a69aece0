use std::collections::BTreeMap;

use super::model::SalaryDataset;

// ---------------------------------------------------------------------------
// Chart aggregators
//
// Four independent transforms over the filtered view, one per chart. All of
// them are pure functions of `(dataset, indices)` and yield an explicitly
// empty result for the empty view.
// ---------------------------------------------------------------------------

/// How many roles the ranking chart shows.
pub const TOP_ROLE_COUNT: usize = 10;

/// Number of equal-width bins in the salary histogram.
pub const HISTOGRAM_BINS: usize = 30;

/// Job title the per-country chart is restricted to.
pub const SPECIALIST_TITLE: &str = "Data Scientist";

// -- grouping helper --

/// Mean salary per group, keys in ascending order.
fn mean_by_group<'a, F>(dataset: &'a SalaryDataset, indices: &[usize], key: F) -> Vec<(String, f64)>
where
    F: Fn(usize) -> &'a str,
{
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &idx in indices {
        let entry = sums.entry(key(idx)).or_insert((0.0, 0));
        entry.0 += dataset.records[idx].usd;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, n))| (k.to_string(), sum / n as f64))
        .collect()
}

// ---------------------------------------------------------------------------
// a) Top-N role ranking
// ---------------------------------------------------------------------------

/// One bar of the role-ranking chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRole {
    pub title: String,
    pub mean_salary: f64,
}

/// The [`TOP_ROLE_COUNT`] job titles with the highest mean salary, ordered
/// ascending by mean so a horizontal bar chart renders the best-paid role on
/// top when drawn bottom-up.
///
/// Ties at the cut-off keep ascending title order: the grouping is
/// title-sorted and the descending sort is stable.
pub fn top_roles(dataset: &SalaryDataset, indices: &[usize]) -> Vec<RankedRole> {
    let mut means = mean_by_group(dataset, indices, |idx| dataset.records[idx].title.as_str());

    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(TOP_ROLE_COUNT);
    means.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));

    means
        .into_iter()
        .map(|(title, mean_salary)| RankedRole { title, mean_salary })
        .collect()
}

// ---------------------------------------------------------------------------
// b) Salary distribution histogram
// ---------------------------------------------------------------------------

/// Equal-width histogram over the observed salary range of the view.
/// Bin edges are recomputed for every filter change, so they track the
/// filtered data rather than the full dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalaryHistogram {
    /// Lower edge of the first bin (observed minimum).
    pub min: f64,
    /// Upper edge of the last bin (observed maximum).
    pub max: f64,
    /// Width of each bin; zero when all salaries are equal.
    pub bin_width: f64,
    /// Record count per bin; empty for the empty view.
    pub counts: Vec<usize>,
}

impl SalaryHistogram {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(lower, upper)` edges of bin `i`.
    pub fn bin_range(&self, i: usize) -> (f64, f64) {
        let lower = self.min + self.bin_width * i as f64;
        (lower, lower + self.bin_width)
    }
}

/// Bucket the view's salaries into [`HISTOGRAM_BINS`] equal-width bins.
pub fn salary_histogram(dataset: &SalaryDataset, indices: &[usize]) -> SalaryHistogram {
    if indices.is_empty() {
        return SalaryHistogram::default();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &idx in indices {
        let usd = dataset.records[idx].usd;
        min = min.min(usd);
        max = max.max(usd);
    }

    let bin_width = (max - min) / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];

    for &idx in indices {
        let usd = dataset.records[idx].usd;
        // Degenerate range (all salaries equal) collapses into bin 0;
        // the maximum itself lands in the last bin, not one past it.
        let bin = if bin_width > 0.0 {
            (((usd - min) / bin_width) as usize).min(HISTOGRAM_BINS - 1)
        } else {
            0
        };
        counts[bin] += 1;
    }

    SalaryHistogram {
        min,
        max,
        bin_width,
        counts,
    }
}

// ---------------------------------------------------------------------------
// c) Work-arrangement proportions
// ---------------------------------------------------------------------------

/// Record count per work-arrangement mode, sorted by mode label.
/// The consumer renders these as proportions of the total.
pub fn work_mode_counts(dataset: &SalaryDataset, indices: &[usize]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &idx in indices {
        *counts.entry(dataset.records[idx].remote.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(mode, n)| (mode.to_string(), n))
        .collect()
}

// ---------------------------------------------------------------------------
// d) Per-country specialist salary
// ---------------------------------------------------------------------------

/// One country's mean salary for the specialist title.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySalary {
    pub iso3: String,
    pub mean_salary: f64,
}

/// Mean salary of [`SPECIALIST_TITLE`] records per residence country,
/// sorted by country code. Empty when the view contains no such records.
pub fn specialist_salary_by_country(
    dataset: &SalaryDataset,
    indices: &[usize],
) -> Vec<CountrySalary> {
    let specialist: Vec<usize> = indices
        .iter()
        .copied()
        .filter(|&idx| dataset.records[idx].title == SPECIALIST_TITLE)
        .collect();

    mean_by_group(dataset, &specialist, |idx| {
        dataset.records[idx].residence_iso3.as_str()
    })
    .into_iter()
    .map(|(iso3, mean_salary)| CountrySalary { iso3, mean_salary })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn rec(title: &str, usd: f64, remote: &str, iso3: &str) -> Record {
        Record {
            year: 2024,
            seniority: "senior".into(),
            contract: "full-time".into(),
            company_size: "medium".into(),
            title: title.into(),
            usd,
            remote: remote.into(),
            residence_iso3: iso3.into(),
        }
    }

    fn all_indices(ds: &SalaryDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn top_roles_keeps_ten_highest_means_ascending() {
        // Twelve titles with distinct means 1000, 2000, ..., 12000.
        let records: Vec<Record> = (1..=12)
            .map(|i| rec(&format!("Role {i:02}"), i as f64 * 1000.0, "remote", "USA"))
            .collect();
        let ds = SalaryDataset::from_records(records);
        let ranked = top_roles(&ds, &all_indices(&ds));

        assert_eq!(ranked.len(), TOP_ROLE_COUNT);
        // The two lowest means are cut; the rest come back ascending.
        let means: Vec<f64> = ranked.iter().map(|r| r.mean_salary).collect();
        let expected: Vec<f64> = (3..=12).map(|i| i as f64 * 1000.0).collect();
        assert_eq!(means, expected);
        assert_eq!(ranked[0].title, "Role 03");
        assert_eq!(ranked[9].title, "Role 12");
    }

    #[test]
    fn top_roles_averages_within_title() {
        let ds = SalaryDataset::from_records(vec![
            rec("A", 100.0, "remote", "USA"),
            rec("A", 300.0, "remote", "USA"),
            rec("B", 150.0, "remote", "USA"),
        ]);
        let ranked = top_roles(&ds, &all_indices(&ds));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], RankedRole { title: "B".into(), mean_salary: 150.0 });
        assert_eq!(ranked[1], RankedRole { title: "A".into(), mean_salary: 200.0 });
    }

    #[test]
    fn top_roles_empty_view() {
        let ds = SalaryDataset::from_records(Vec::new());
        assert!(top_roles(&ds, &[]).is_empty());
    }

    #[test]
    fn histogram_has_thirty_bins_and_full_mass() {
        let records: Vec<Record> = (0..100)
            .map(|i| rec("A", 50_000.0 + i as f64 * 1_000.0, "remote", "USA"))
            .collect();
        let ds = SalaryDataset::from_records(records);
        let hist = salary_histogram(&ds, &all_indices(&ds));

        assert_eq!(hist.counts.len(), HISTOGRAM_BINS);
        assert_eq!(hist.counts.iter().sum::<usize>(), 100);
        assert_eq!(hist.min, 50_000.0);
        assert_eq!(hist.max, 149_000.0);
        // The maximum lands in the last bin, not past it.
        assert!(hist.counts[HISTOGRAM_BINS - 1] > 0);
    }

    #[test]
    fn histogram_degenerate_range_collapses_to_first_bin() {
        let ds = SalaryDataset::from_records(vec![
            rec("A", 80_000.0, "remote", "USA"),
            rec("B", 80_000.0, "remote", "USA"),
        ]);
        let hist = salary_histogram(&ds, &all_indices(&ds));
        assert_eq!(hist.bin_width, 0.0);
        assert_eq!(hist.counts[0], 2);
        assert_eq!(hist.counts.iter().sum::<usize>(), 2);
    }

    #[test]
    fn histogram_empty_view() {
        let ds = SalaryDataset::from_records(Vec::new());
        let hist = salary_histogram(&ds, &[]);
        assert!(hist.is_empty());
    }

    #[test]
    fn work_mode_counts_split() {
        // 5 remote / 3 hybrid / 2 on-site.
        let mut records = Vec::new();
        for _ in 0..5 {
            records.push(rec("A", 1.0, "remote", "USA"));
        }
        for _ in 0..3 {
            records.push(rec("A", 1.0, "hybrid", "USA"));
        }
        for _ in 0..2 {
            records.push(rec("A", 1.0, "on-site", "USA"));
        }
        let ds = SalaryDataset::from_records(records);
        let counts = work_mode_counts(&ds, &all_indices(&ds));

        assert_eq!(counts.len(), 3);
        assert!(counts.contains(&("remote".into(), 5)));
        assert!(counts.contains(&("hybrid".into(), 3)));
        assert!(counts.contains(&("on-site".into(), 2)));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 10);
    }

    #[test]
    fn specialist_chart_groups_by_country() {
        let ds = SalaryDataset::from_records(vec![
            rec("Data Scientist", 100.0, "remote", "USA"),
            rec("Data Scientist", 300.0, "remote", "USA"),
            rec("Data Scientist", 80.0, "remote", "DEU"),
            rec("Data Engineer", 999.0, "remote", "DEU"),
        ]);
        let by_country = specialist_salary_by_country(&ds, &all_indices(&ds));

        assert_eq!(
            by_country,
            vec![
                CountrySalary { iso3: "DEU".into(), mean_salary: 80.0 },
                CountrySalary { iso3: "USA".into(), mean_salary: 200.0 },
            ]
        );
    }

    #[test]
    fn specialist_chart_empty_when_title_absent() {
        let ds = SalaryDataset::from_records(vec![
            rec("Data Engineer", 100.0, "remote", "USA"),
            rec("ML Engineer", 200.0, "remote", "DEU"),
        ]);
        assert!(specialist_salary_by_country(&ds, &all_indices(&ds)).is_empty());
    }
}
