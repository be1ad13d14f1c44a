//! Application State: zentrale Datenhaltung einer Viewer-Sitzung.

mod app_state;
mod dialogs;
mod filter;
mod selection;
mod view;

pub use app_state::AppState;
pub use dialogs::UiState;
pub use filter::FilterState;
pub use selection::SelectionState;
pub use view::ViewState;
