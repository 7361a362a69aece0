//! Interactive explorer for data-industry salary records.
//!
//! The heart of the crate is the pure pipeline in [`data`]: a loaded
//! [`data::model::SalaryDataset`] plus a [`data::filter::FilterState`]
//! produce a filtered view, summary metrics and four chart aggregations.
//! [`state::AppState`] owns one session's worth of that pipeline and the
//! `ui` modules render it with egui.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
