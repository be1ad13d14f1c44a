use crate::shared::ViewerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Filter-Option umschalten (Single-Select mit Abwahl)
    ToggleFilter { value: String },
    /// Sichtbare Einträge aus dem aktuellen Filter neu berechnen
    RefreshVisibleRecords,
    /// Eintrag aktivieren (überschreibt die bisherige Aktivierung)
    SelectRecord { id: u64 },
    /// Karte auf die Start-Ansicht zurücksetzen
    ResetView,
    /// Karte auf einen Eintrag zentrieren
    CenterOnRecord { id: u64 },
    /// Auf eine Gruppe zentrieren und bis zu ihrer Auflösung hineinzoomen
    ZoomToCluster { lat: f64, lon: f64, zoom: f64 },
    /// Vom Widget gemeldete Zoomstufe übernehmen
    SetCurrentZoom { zoom: f64 },
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Neue Optionen übernehmen und speichern
    ApplyOptions { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen und speichern
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
