//! UI-Layer mit egui: Menü, Filter-Leiste, Detailansicht, Status-Bar und Optionen-Dialog.
//!
//! Alle Komponenten lesen nur den AppState und liefern `AppIntent`s zurück.

pub mod detail_panel;
pub mod filter_panel;
#[cfg(test)]
mod headless;
pub mod menu;
pub mod options_dialog;
pub mod status;

pub use detail_panel::render_detail_panel;
pub use filter_panel::render_filter_panel;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
