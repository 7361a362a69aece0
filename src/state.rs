use std::collections::BTreeSet;

use crate::color::ColorMap;
use crate::data::aggregate::{
    salary_histogram, specialist_salary_by_country, top_roles, work_mode_counts, CountrySalary,
    RankedRole, SalaryHistogram,
};
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::metrics::{summary_metrics, SummaryMetrics};
use crate::data::model::{ColumnValue, FilterColumn, SalaryDataset};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// The dataset is an immutable snapshot owned here; the filter selection is
/// the only mutable input, and every derived output below it is recomputed
/// synchronously whenever the selection changes, so the UI only ever reads
/// a consistent set of views.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<SalaryDataset>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Summary statistics over the filtered view.
    pub metrics: SummaryMetrics,

    /// Top-10 roles by mean salary, ascending.
    pub top_roles: Vec<RankedRole>,

    /// Salary distribution of the filtered view.
    pub histogram: SalaryHistogram,

    /// Record count per work-arrangement mode.
    pub work_modes: Vec<(String, usize)>,

    /// Mean specialist salary per residence country.
    pub country_salaries: Vec<CountrySalary>,

    /// Colours for the work-arrangement chart series.
    pub mode_colors: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState::default(),
            visible_indices: Vec::new(),
            metrics: SummaryMetrics::default(),
            top_roles: Vec::new(),
            histogram: SalaryHistogram::default(),
            work_modes: Vec::new(),
            country_salaries: Vec::new(),
            mode_colors: ColorMap::default(),
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, reset filters to all-selected and
    /// recompute every derived view.
    pub fn set_dataset(&mut self, dataset: SalaryDataset) {
        self.filters = init_filter_state(&dataset);
        self.visible_indices = (0..dataset.len()).collect();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;

        self.recompute_aggregates();
        self.mode_colors = ColorMap::new(self.work_modes.iter().map(|(mode, _)| mode.clone()));
    }

    /// Recompute `visible_indices` and all derived views after a filter change.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.filters);
        }
        self.recompute_aggregates();
    }

    /// Recompute the metric scalars and the four chart tables from the
    /// current filtered view. Each is an independent pure function.
    fn recompute_aggregates(&mut self) {
        let Some(ds) = &self.dataset else {
            self.metrics = SummaryMetrics::default();
            self.top_roles = Vec::new();
            self.histogram = SalaryHistogram::default();
            self.work_modes = Vec::new();
            self.country_salaries = Vec::new();
            return;
        };

        self.metrics = summary_metrics(ds, &self.visible_indices);
        self.top_roles = top_roles(ds, &self.visible_indices);
        self.histogram = salary_histogram(ds, &self.visible_indices);
        self.work_modes = work_mode_counts(ds, &self.visible_indices);
        self.country_salaries = specialist_salary_by_country(ds, &self.visible_indices);
    }

    /// Replace a column's selection wholesale and recompute.
    pub fn set_selection(&mut self, column: FilterColumn, values: BTreeSet<ColumnValue>) {
        self.filters.insert(column, values);
        self.refilter();
    }

    /// Toggle a single value in a column's filter.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &ColumnValue) {
        let selected = self.filters.entry(column).or_default();
        if selected.contains(value) {
            selected.remove(value);
        } else {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        if let Some(ds) = &self.dataset {
            if let Some(all_vals) = ds.distinct_values.get(&column) {
                let all_vals = all_vals.clone();
                self.filters.insert(column, all_vals);
                self.refilter();
            }
        }
    }

    /// Deselect all values in a column (matches nothing).
    pub fn select_none(&mut self, column: FilterColumn) {
        self.filters.insert(column, BTreeSet::new());
        self.refilter();
    }
}
