//! Handler für die Kartenansicht.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Karte auf die Start-Ansicht zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::view::reset_view(state);
}

/// Zentriert die Karte auf einen Eintrag.
pub fn center_on_record(state: &mut AppState, id: u64) {
    use_cases::view::center_on_record(state, id);
}

/// Zoomt auf eine angeklickte Gruppe.
pub fn zoom_to_cluster(state: &mut AppState, lat: f64, lon: f64, zoom: f64) {
    use_cases::view::zoom_to_cluster(state, lat, lon, zoom);
}

/// Übernimmt die aktuelle Zoomstufe des Widgets.
pub fn set_current_zoom(state: &mut AppState, zoom: f64) {
    use_cases::view::set_current_zoom(state, zoom);
}
