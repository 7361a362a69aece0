use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel: one collapsible multi-select per
/// filterable column.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the registry so we can mutate state inside the loop.
    let distinct = dataset.distinct_values.clone();
    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (&col, all_values) in &distinct {
                let selected = state.filters.entry(col).or_default();

                // Show count of selected / total in the header
                let n_selected = selected.len();
                let n_total = all_values.len();
                let header_text = format!("{}  ({n_selected}/{n_total})", col.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col.label())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        // Select all / none buttons
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.filters.insert(col, all_values.clone());
                                changed = true;
                            }
                            if ui.small_button("None").clicked() {
                                state.filters.insert(col, Default::default());
                                changed = true;
                            }
                        });

                        // Re-borrow after potential mutation from All/None
                        let selected = state.filters.entry(col).or_default();

                        for val in all_values {
                            let mut checked = selected.contains(val);
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                if checked {
                                    selected.insert(val.clone());
                                } else {
                                    selected.remove(val);
                                }
                                changed = true;
                            }
                        }
                    });
            }
        });

    // Recompute the filtered view and every aggregate once per interaction.
    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} records loaded, {} matching",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Metrics strip (KPIs)
// ---------------------------------------------------------------------------

/// Render the four summary metrics over the filtered view.
pub fn metrics_strip(ui: &mut Ui, state: &AppState) {
    ui.heading("Overall metrics (annual salary in USD)");

    if state.visible_indices.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    let m = &state.metrics;
    ui.columns(4, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Mean salary", &format!("${:.0}", m.mean_salary));
        metric(&mut cols[1], "Max salary", &format!("${:.0}", m.max_salary));
        metric(&mut cols[2], "Records", &m.record_count.to_string());
        metric(&mut cols[3], "Most frequent role", &m.top_title);
    });
}

fn metric(ui: &mut Ui, label: &str, value: &str) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small());
        ui.label(RichText::new(value).strong().size(20.0));
    });
}

// ---------------------------------------------------------------------------
// Filtered record table
// ---------------------------------------------------------------------------

const TABLE_HEADERS: [&str; 8] = [
    "Year",
    "Seniority",
    "Contract",
    "Company size",
    "Title",
    "Salary (USD)",
    "Work mode",
    "Country",
];

/// Render the filtered view as a table, one row per matching record.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => return,
    };

    ui.heading("Detailed records");

    if state.visible_indices.is_empty() {
        ui.label("No records match the current filters.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(60.0), TABLE_HEADERS.len())
        .header(20.0, |mut header| {
            for title in TABLE_HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui: &mut Ui| {
                    ui.label(rec.year.to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.seniority);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.contract);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.company_size);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.title);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(format!("{:.0}", rec.usd));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.remote);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.residence_iso3);
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} salary records from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
                state.loading = false;
            }
        }
    }
}
