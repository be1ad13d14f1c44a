//! Use-Case-Funktionen für den Straßen-/Kategorie-Filter.

use crate::app::AppState;
use crate::core::{is_visible, ClusterIndex};
use std::sync::Arc;

/// Schaltet eine Filter-Option um (Single-Select mit Abwahl).
///
/// Der sichtbare Bestand wird erst durch [`refresh_visible_records`] neu berechnet.
pub fn toggle_filter(state: &mut AppState, value: &str) {
    state.filter.selection.toggle(value);

    match state.filter.selection.active_value() {
        Some(active) => log::info!("Filter aktiv: {}", active),
        None => log::info!("Filter aufgehoben, alle Einträge sichtbar"),
    }

    if !state.filter.options.iter().any(|o| o.value == value) {
        log::debug!("Filterwert '{}' ist keine angebotene Option", value);
    }
}

/// Berechnet die sichtbaren Einträge für die aktive Filter-Auswahl neu (O(n)).
pub fn refresh_visible_records(state: &mut AppState) {
    let attribute = state.filter.attribute;
    let selection = &state.filter.selection;

    let visible: Vec<usize> = state
        .dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| is_visible(record, attribute, selection))
        .map(|(index, _)| index)
        .collect();

    log::debug!(
        "Sichtbare Einträge: {} von {}",
        visible.len(),
        state.dataset.len()
    );
    state.filter.visible_indices = Arc::from(visible);
    rebuild_cluster_index(state);
}

/// Baut den Cluster-Index über den sichtbaren Einträgen neu auf.
///
/// Bei abgeschaltetem Clustering oder Fehler bleibt der Index inaktiv,
/// dann erscheinen alle Marker einzeln.
pub fn rebuild_cluster_index(state: &mut AppState) {
    let index = match state.options.cluster_settings() {
        Some(settings) => ClusterIndex::build(
            state.dataset.records(),
            &state.filter.visible_indices,
            settings,
        )
        .unwrap_or_else(|e| {
            log::warn!("Clustering deaktiviert: {:#}", e);
            ClusterIndex::default()
        }),
        None => ClusterIndex::default(),
    };
    state.filter.cluster_index = Arc::new(index);
}
