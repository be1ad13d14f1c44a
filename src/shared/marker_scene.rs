//! Marker-Szene als expliziter Übergabevertrag zwischen App und Karten-Widget.
//!
//! Lebt im shared-Modul, da `app` sie baut und `map` sie konsumiert.

use super::options::ViewerOptions;

/// Ein einzelner darzustellender Marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerItem {
    /// ID des zugehörigen Datensatz-Eintrags
    pub id: u64,
    /// Breitengrad in Grad
    pub lat: f64,
    /// Längengrad in Grad
    pub lon: f64,
    /// Tooltip-Text
    pub title: String,
    /// Aktivierter Marker (Detailansicht)
    pub selected: bool,
}

/// Gruppe nahe beieinander liegender Marker bei der aktuellen Zoomstufe.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterItem {
    /// Mittelpunkt: Breitengrad
    pub lat: f64,
    /// Mittelpunkt: Längengrad
    pub lon: f64,
    /// Anzahl der zusammengefassten Marker
    pub count: usize,
    /// Zoomstufe, auf die ein Klick die Karte bringt
    pub expansion_zoom: f64,
}

/// Read-only Daten für einen Karten-Frame.
#[derive(Debug, Clone)]
pub struct MarkerScene {
    /// Sichtbare Marker in Datensatz-Reihenfolge (Filter bereits angewendet)
    pub markers: Vec<MarkerItem>,
    /// Gruppen für die aktuelle Zoomstufe (leer ohne Clustering)
    pub clusters: Vec<ClusterItem>,
    /// Laufzeit-Optionen für Farben, Größen und Tile-Quelle
    pub options: ViewerOptions,
}

impl MarkerScene {
    /// Anzahl der sichtbaren Marker.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Anzahl der Marker, einzeln oder in Gruppen.
    pub fn total_count(&self) -> usize {
        self.markers.len() + self.clusters.iter().map(|c| c.count).sum::<usize>()
    }

    /// Gibt zurück, ob ein Marker mit dieser ID einzeln sichtbar ist.
    pub fn contains(&self, id: u64) -> bool {
        self.markers.iter().any(|m| m.id == id)
    }
}
