use std::path::PathBuf;

use eframe::egui;
use salary_scope::app::SalaryScopeApp;
use salary_scope::data;
use salary_scope::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional bootstrap argument: a dataset to load at startup.
    let mut state = AppState::default();
    if let Some(path) = std::env::args().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} salary records from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Scope – Data Salaries Explorer",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryScopeApp::with_state(state)))),
    )
}
