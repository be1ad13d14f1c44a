/// View-bezogener Anwendungszustand der Kartenansicht
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Start-Mittelpunkt `[lat, lon]`
    pub home_center: [f64; 2],
    /// Start-Zoomstufe
    pub home_zoom: f64,
    /// Ausstehende Zentrierung, wird vom Karten-Widget im nächsten Frame übernommen
    pub pending_center: Option<[f64; 2]>,
    /// Ausstehende Zoomstufe, wird vom Karten-Widget im nächsten Frame übernommen
    pub pending_zoom: Option<f64>,
    /// Zuletzt vom Widget gemeldete Zoomstufe (Status-Bar)
    pub current_zoom: f64,
    /// Signalisiert, dass die Tile-Quelle neu aufgebaut werden muss
    pub tiles_dirty: bool,
}

impl ViewState {
    /// Erstellt den View-Zustand für die Start-Ansicht.
    pub fn new(home_center: [f64; 2], home_zoom: f64) -> Self {
        Self {
            home_center,
            home_zoom,
            pending_center: None,
            pending_zoom: None,
            current_zoom: home_zoom,
            tiles_dirty: false,
        }
    }
}
