//! Use-Case-Funktionen für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::ViewerOptions;

/// Übernimmt neue Optionen.
///
/// Datensatz- und Filter-Konfiguration wirken erst beim nächsten Start;
/// Änderungen an der Tile-Quelle markieren die Tiles zum Neuaufbau.
pub fn apply_options(state: &mut AppState, options: ViewerOptions) {
    let tiles_changed = state.options.tile_url_template != options.tile_url_template
        || state.options.tile_subdomains != options.tile_subdomains
        || state.options.tile_attribution != options.tile_attribution
        || state.options.max_zoom != options.max_zoom;

    if state.options.filter_attribute != options.filter_attribute
        || state.options.filter_options != options.filter_options
        || state.options.dataset != options.dataset
    {
        state.ui.status_message =
            Some("Datensatz-/Filter-Änderungen wirken nach Neustart".to_string());
    }

    let clusters_changed = state.options.cluster_settings() != options.cluster_settings();

    state.view.home_center = options.map_center;
    state.view.home_zoom = options.initial_zoom;
    state.options = options;

    if clusters_changed {
        super::filter::rebuild_cluster_index(state);
    }

    if tiles_changed {
        log::info!("Tile-Quelle geändert: {}", state.options.tile_url_template);
        state.view.tiles_dirty = true;
    }
}
