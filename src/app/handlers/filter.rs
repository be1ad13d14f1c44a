//! Handler für Filter-Operationen.

use crate::app::use_cases;
use crate::app::AppState;

/// Schaltet eine Filter-Option um.
pub fn toggle(state: &mut AppState, value: &str) {
    use_cases::filter::toggle_filter(state, value);
}

/// Berechnet die sichtbaren Einträge neu.
pub fn refresh_visible(state: &mut AppState) {
    use_cases::filter::refresh_visible_records(state);
}
