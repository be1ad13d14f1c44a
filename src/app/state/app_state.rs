use crate::app::CommandLog;
use crate::core::{Dataset, PointRecord};
use crate::shared::ViewerOptions;
use std::sync::Arc;

use super::{FilterState, SelectionState, UiState, ViewState};

/// Hauptzustand einer Viewer-Sitzung
pub struct AppState {
    /// Beim Start geladener, unveränderlicher Datensatz
    pub dataset: Arc<Dataset>,
    /// Filter-State (Optionen, aktive Auswahl, sichtbare Einträge)
    pub filter: FilterState,
    /// Selection-State (aktivierter Marker)
    pub selection: SelectionState,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Karte, Marker, Filter-Konfiguration)
    pub options: ViewerOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_dataset(Dataset::default(), ViewerOptions::default())
    }

    /// Erstellt den App-State für einen geladenen Datensatz.
    ///
    /// Filter-Optionen werden einmalig bestimmt, alle Einträge sind sichtbar.
    pub fn with_dataset(dataset: Dataset, options: ViewerOptions) -> Self {
        let filter_options = options.resolve_filter_options(&dataset);
        let mut state = Self {
            dataset: Arc::new(dataset),
            filter: FilterState::new(options.filter_attribute, filter_options),
            selection: SelectionState::new(),
            view: ViewState::new(options.map_center, options.initial_zoom),
            ui: UiState::new(),
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        };
        crate::app::use_cases::filter::refresh_visible_records(&mut state);
        state
    }

    /// Gibt die Anzahl der Einträge zurück (für UI-Anzeige)
    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }

    /// Gibt die Anzahl der sichtbaren Einträge zurück (für UI-Anzeige)
    pub fn visible_count(&self) -> usize {
        self.filter.visible_count()
    }

    /// Der aktuell aktivierte Eintrag, sofern vorhanden.
    pub fn selected_record(&self) -> Option<&PointRecord> {
        self.selection
            .selected_record_id
            .and_then(|id| self.dataset.get(id))
    }

    /// IDs der sichtbaren Einträge in Datensatz-Reihenfolge.
    pub fn visible_ids(&self) -> Vec<u64> {
        let records = self.dataset.records();
        self.filter
            .visible_indices
            .iter()
            .map(|&i| records[i].id)
            .collect()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
