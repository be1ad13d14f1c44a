//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FilterOptionToggled { value } => vec![
            AppCommand::ToggleFilter { value },
            AppCommand::RefreshVisibleRecords,
        ],
        AppIntent::MarkerActivated { id } => vec![AppCommand::SelectRecord { id }],
        AppIntent::ClusterActivated { lat, lon, zoom } => {
            vec![AppCommand::ZoomToCluster { lat, lon, zoom }]
        }
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::CenterOnSelectedRequested => state
            .selection
            .selected_record_id
            .map(|id| vec![AppCommand::CenterOnRecord { id }])
            .unwrap_or_default(),
        AppIntent::MapZoomChanged { zoom } => vec![AppCommand::SetCurrentZoom { zoom }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
