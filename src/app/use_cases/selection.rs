//! Use-Case: Marker-Aktivierung für die Detailansicht.

use crate::app::AppState;

/// Aktiviert einen Eintrag (last-write-wins).
///
/// IDs, die nicht im Datensatz vorkommen, werden ignoriert.
pub fn select_record(state: &mut AppState, id: u64) {
    let Some(record) = state.dataset.get(id) else {
        log::warn!("Marker-Aktivierung für unbekannte ID {} ignoriert", id);
        return;
    };

    log::debug!("Eintrag {} aktiviert: {}", id, record.title());
    state.selection.selected_record_id = Some(id);
}
