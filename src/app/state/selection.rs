/// Auswahlbezogener Anwendungszustand (aktivierter Marker)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Zuletzt aktivierter Eintrag; bleibt bis zur nächsten Aktivierung bestehen
    pub selected_record_id: Option<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self {
            selected_record_id: None,
        }
    }

    /// Gibt `true` zurück, wenn genau dieser Eintrag aktiviert ist.
    pub fn is_selected(&self, id: u64) -> bool {
        self.selected_record_id == Some(id)
    }
}
