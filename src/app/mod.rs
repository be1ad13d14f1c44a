//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod marker_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand einer Viewer-Sitzung (Datensatz, Filter, Auswahl, View).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use marker_scene::build as build_marker_scene;
pub use state::{AppState, FilterState, SelectionState, UiState, ViewState};
