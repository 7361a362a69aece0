use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SalaryScopeApp {
    pub state: AppState,
}

impl SalaryScopeApp {
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalaryScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: filtered record table ----
        egui::TopBottomPanel::bottom("record_table")
            .default_height(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::records_table(ui, &self.state);
            });

        // ---- Central panel: metrics + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a salary dataset to explore it  (File → Open…)");
                });
                return;
            }
            egui::ScrollArea::vertical().show(ui, |ui| {
                panels::metrics_strip(ui, &self.state);
                ui.separator();
                charts::charts_grid(ui, &self.state);
            });
        });
    }
}
