//! Handler für Selektions-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktiviert einen Eintrag für die Detailansicht.
pub fn select_record(state: &mut AppState, id: u64) {
    use_cases::selection::select_record(state, id);
}
