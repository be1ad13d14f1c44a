use crate::shared::ViewerOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Checkbox einer Filter-Option wurde angeklickt
    FilterOptionToggled { value: String },
    /// Marker wurde im Karten-Widget aktiviert (Klick)
    MarkerActivated { id: u64 },
    /// Cluster-Kreis wurde angeklickt: auf seine Auflöse-Zoomstufe zoomen
    ClusterActivated { lat: f64, lon: f64, zoom: f64 },
    /// Karte auf die Start-Ansicht zurücksetzen
    ResetViewRequested,
    /// Karte auf den aktivierten Eintrag zentrieren
    CenterOnSelectedRequested,
    /// Karten-Widget meldet eine geänderte Zoomstufe
    MapZoomChanged { zoom: f64 },
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen im Dialog geändert (Live-Preview)
    OptionsChanged { options: ViewerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
