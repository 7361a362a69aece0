use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart grid (central panel)
//
// Each chart renders one cached aggregation result. The pipeline guarantees
// the results are empty (never missing) for the empty view, so every chart
// degrades to an explicit "no data" label.
// ---------------------------------------------------------------------------

const CHART_HEIGHT: f32 = 260.0;

/// Render the four charts in a 2×2 grid.
pub fn charts_grid(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols: &mut [Ui]| {
        top_roles_chart(&mut cols[0], state);
        histogram_chart(&mut cols[1], state);
    });
    ui.add_space(8.0);
    ui.columns(2, |cols: &mut [Ui]| {
        work_modes_chart(&mut cols[0], state);
        country_chart(&mut cols[1], state);
    });
}

fn no_data(ui: &mut Ui, what: &str) {
    ui.label(format!("No data to display for {what}."));
}

// ---------------------------------------------------------------------------
// a) Top-10 roles by mean salary (horizontal bars)
// ---------------------------------------------------------------------------

fn top_roles_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top 10 roles by mean salary");
    if state.top_roles.is_empty() {
        no_data(ui, "the role ranking");
        return;
    }

    // Ascending order from the aggregator: drawn bottom-up, the best-paid
    // role ends up at the top of the chart.
    let bars: Vec<Bar> = state
        .top_roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            Bar::new(i as f64, role.mean_salary)
                .name(&role.title)
                .width(0.7)
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    Plot::new("top_roles")
        .height(CHART_HEIGHT)
        .x_axis_label("Mean annual salary (USD)")
        .show_axes([true, false])
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

// ---------------------------------------------------------------------------
// b) Salary distribution histogram
// ---------------------------------------------------------------------------

fn histogram_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Annual salary distribution");
    let hist = &state.histogram;
    if hist.is_empty() {
        no_data(ui, "the salary distribution");
        return;
    }

    // Degenerate range: all salaries equal, draw one visible bar.
    let bar_width = if hist.bin_width > 0.0 {
        hist.bin_width
    } else {
        1.0
    };

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(i, &count)| {
            let (lower, upper) = hist.bin_range(i);
            let center = (lower + upper) / 2.0;
            Bar::new(center, count as f64)
                .name(format!("${lower:.0} – ${upper:.0}"))
                .width(bar_width)
                .fill(Color32::LIGHT_GREEN)
        })
        .collect();

    Plot::new("salary_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Salary range (USD)")
        .y_axis_label("Records")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// c) Work-arrangement proportions
// ---------------------------------------------------------------------------

fn work_modes_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Work arrangement");
    if state.work_modes.is_empty() {
        no_data(ui, "work arrangements");
        return;
    }

    let total: usize = state.work_modes.iter().map(|(_, n)| n).sum();

    let charts: Vec<BarChart> = state
        .work_modes
        .iter()
        .enumerate()
        .map(|(i, (mode, count))| {
            let pct = 100.0 * *count as f64 / total as f64;
            let bar = Bar::new(i as f64, *count as f64)
                .width(0.7)
                .fill(state.mode_colors.color_for(mode));
            BarChart::new(vec![bar]).name(format!("{mode} ({pct:.1}%)"))
        })
        .collect();

    Plot::new("work_modes")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Records")
        .show_axes([false, true])
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// d) Mean Data Scientist salary per country
// ---------------------------------------------------------------------------

fn country_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Mean Data Scientist salary by country");
    if state.country_salaries.is_empty() {
        no_data(ui, "Data Scientist salaries");
        return;
    }

    let bars: Vec<Bar> = state
        .country_salaries
        .iter()
        .enumerate()
        .map(|(i, cs)| {
            Bar::new(i as f64, cs.mean_salary)
                .name(&cs.iso3)
                .width(0.7)
                .fill(Color32::GOLD)
        })
        .collect();

    Plot::new("country_salaries")
        .height(CHART_HEIGHT)
        .y_axis_label("Mean annual salary (USD)")
        .show_axes([false, true])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
