//! Baut die Marker-Szene aus dem aktuellen AppState.

use super::AppState;
use crate::core::{ClusteredView, PointRecord};
use crate::shared::{ClusterItem, MarkerItem, MarkerScene};

/// Erstellt die Marker-Szene für einen Karten-Frame.
///
/// Enthält nur die sichtbaren Einträge (Filter bereits angewendet). Bei
/// aktivem Clustering fallen nahe Einträge für die aktuelle Zoomstufe zu
/// Gruppen zusammen; der aktivierte Eintrag bleibt immer einzeln sichtbar.
pub fn build(state: &AppState) -> MarkerScene {
    let records = state.dataset.records();
    let index = &state.filter.cluster_index;

    let view = if index.is_active() {
        index
            .view_at(state.view.current_zoom)
            .unwrap_or_else(|e| {
                log::warn!("Cluster-Abfrage fehlgeschlagen: {:#}", e);
                unclustered(&state.filter.visible_indices)
            })
    } else {
        unclustered(&state.filter.visible_indices)
    };

    let mut markers: Vec<MarkerItem> = view
        .singles
        .iter()
        .filter_map(|&i| records.get(i))
        .map(|record| marker_item(state, record))
        .collect();

    if let Some(selected) = state.selected_record() {
        let selected_visible = state
            .filter
            .visible_indices
            .iter()
            .any(|&i| records.get(i).is_some_and(|r| r.id == selected.id));
        if selected_visible && !markers.iter().any(|m| m.id == selected.id) {
            markers.push(marker_item(state, selected));
        }
    }

    let clusters = view
        .clusters
        .into_iter()
        .map(|cluster| ClusterItem {
            lat: cluster.lat,
            lon: cluster.lon,
            count: cluster.count,
            expansion_zoom: f64::from(cluster.expansion_zoom),
        })
        .collect();

    MarkerScene {
        markers,
        clusters,
        options: state.options.clone(),
    }
}

fn unclustered(visible_indices: &[usize]) -> ClusteredView {
    ClusteredView {
        singles: visible_indices.to_vec(),
        clusters: Vec::new(),
    }
}

fn marker_item(state: &AppState, record: &PointRecord) -> MarkerItem {
    MarkerItem {
        id: record.id,
        lat: record.lat,
        lon: record.lon,
        title: record.title(),
        selected: state.selection.is_selected(record.id),
    }
}
