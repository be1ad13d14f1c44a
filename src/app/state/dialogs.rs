/// UI-bezogener Anwendungszustand (Panels, Dialoge, Statusmeldungen)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Statusmeldung für die Status-Bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            show_options_dialog: false,
            status_message: None,
        }
    }
}
