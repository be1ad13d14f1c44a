//! Use-Case-Funktionen für die Kartenansicht.

use crate::app::AppState;

/// Fordert die Start-Ansicht (Mittelpunkt + Zoom aus den Optionen) an.
pub fn reset_view(state: &mut AppState) {
    state.view.pending_center = Some(state.view.home_center);
    state.view.pending_zoom = Some(state.view.home_zoom);
}

/// Fordert die Zentrierung auf einen Eintrag an (Zoom bleibt unverändert).
pub fn center_on_record(state: &mut AppState, id: u64) {
    match state.dataset.get(id) {
        Some(record) => state.view.pending_center = Some([record.lat, record.lon]),
        None => log::warn!("Zentrierung auf unbekannte ID {} ignoriert", id),
    }
}

/// Fordert Zentrierung auf eine Gruppe und deren Auflöse-Zoomstufe an.
///
/// Die Zoomstufe wird auf die maximale Zoomstufe begrenzt.
pub fn zoom_to_cluster(state: &mut AppState, lat: f64, lon: f64, zoom: f64) {
    let zoom = zoom.clamp(0.0, f64::from(state.options.max_zoom));
    log::debug!("Zoom auf Gruppe bei {:.5}, {:.5} (Zoom {})", lat, lon, zoom);
    state.view.pending_center = Some([lat, lon]);
    state.view.pending_zoom = Some(zoom);
}

/// Übernimmt die vom Widget gemeldete Zoomstufe, begrenzt auf die maximale Zoomstufe.
pub fn set_current_zoom(state: &mut AppState, zoom: f64) {
    state.view.current_zoom = zoom.clamp(0.0, f64::from(state.options.max_zoom));
}

/// Gibt `true` zurück, wenn die Tile-Quelle jetzt neu aufgebaut werden soll.
///
/// Solange der Options-Dialog offen ist, bleibt die Änderung vorgemerkt;
/// so entsteht pro Dialog-Sitzung höchstens ein neuer Tile-Cache.
pub fn take_tile_rebuild(state: &mut AppState) -> bool {
    if !state.view.tiles_dirty || state.ui.show_options_dialog {
        return false;
    }
    state.view.tiles_dirty = false;
    true
}
