use crate::core::{ClusterIndex, FilterAttribute, FilterOption, FilterSelection};
use std::sync::Arc;

/// Filterbezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct FilterState {
    /// Attribut, gegen das gefiltert wird
    pub attribute: FilterAttribute,
    /// Angebotene Checkbox-Optionen (einmalig beim Start bestimmt)
    pub options: Vec<FilterOption>,
    /// Aktive Auswahl (Start: alles anzeigen)
    pub selection: FilterSelection,
    /// Indizes der sichtbaren Einträge im Datensatz (Arc für O(1)-Clone in MarkerScene)
    pub visible_indices: Arc<[usize]>,
    /// Cluster-Hierarchie über den sichtbaren Einträgen (inaktiv = keine Gruppen)
    pub cluster_index: Arc<ClusterIndex>,
}

impl FilterState {
    /// Erstellt einen Filterzustand ohne aktive Auswahl.
    pub fn new(attribute: FilterAttribute, options: Vec<FilterOption>) -> Self {
        Self {
            attribute,
            options,
            selection: FilterSelection::ShowAll,
            visible_indices: Arc::from(Vec::new()),
            cluster_index: Arc::new(ClusterIndex::default()),
        }
    }

    /// Anzahl der aktuell sichtbaren Einträge.
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Anzeigetext der aktiven Auswahl (Label der Option, sonst Rohwert).
    pub fn active_label(&self) -> Option<&str> {
        let value = self.selection.active_value()?;
        Some(
            self.options
                .iter()
                .find(|o| o.value == value)
                .map_or(value, |o| o.label.as_str()),
        )
    }
}
