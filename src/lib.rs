//! House Map Viewer Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod map;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    Dataset, DetailField, FilterAttribute, FilterOption, FilterSelection, GeoBounds, PointRecord,
};
pub use shared::{DatasetSource, MarkerItem, MarkerScene, ViewerOptions};
