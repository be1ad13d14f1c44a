//! Handler für Dialog-State und Anwendungssteuerung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Markiert die Anwendung zum Beenden im nächsten Frame.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Öffnet den Optionen-Dialog.
pub fn open_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = true;
}

/// Schließt den Optionen-Dialog.
pub fn close_options_dialog(state: &mut AppState) {
    state.ui.show_options_dialog = false;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) -> anyhow::Result<()> {
    use_cases::options::apply_options(state, options);
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Karten- und Marker-Optionen auf Standardwerte zurück und persistiert sie.
///
/// Datensatz- und Filter-Konfiguration bleiben erhalten.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    let defaults = ViewerOptions {
        filter_attribute: state.options.filter_attribute,
        detail_panel_enabled: state.options.detail_panel_enabled,
        filter_options: state.options.filter_options.clone(),
        dataset: state.options.dataset.clone(),
        ..ViewerOptions::default()
    };
    use_cases::options::apply_options(state, defaults);
    let path = ViewerOptions::config_path();
    state.options.save_to_file(&path)
}
