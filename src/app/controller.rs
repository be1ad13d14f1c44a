//! Application Controller für zentrale Event-Verarbeitung.

use super::marker_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MarkerScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Alle Commands eines Intents laufen vollständig durch, bevor der Aufrufer
    /// den nächsten Intent übergibt.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Filter ===
            AppCommand::ToggleFilter { value } => handlers::filter::toggle(state, &value),
            AppCommand::RefreshVisibleRecords => handlers::filter::refresh_visible(state),

            // === Selektion ===
            AppCommand::SelectRecord { id } => handlers::selection::select_record(state, id),

            // === Kartenansicht ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::CenterOnRecord { id } => handlers::view::center_on_record(state, id),
            AppCommand::ZoomToCluster { lat, lon, zoom } => {
                handlers::view::zoom_to_cluster(state, lat, lon, zoom)
            }
            AppCommand::SetCurrentZoom { zoom } => handlers::view::set_current_zoom(state, zoom),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Meldet einen fälligen Neuaufbau der Tile-Quelle und quittiert ihn.
    pub fn take_tile_rebuild(&self, state: &mut AppState) -> bool {
        super::use_cases::view::take_tile_rebuild(state)
    }

    /// Baut die Marker-Szene aus dem aktuellen AppState.
    pub fn build_marker_scene(&self, state: &AppState) -> MarkerScene {
        marker_scene::build(state)
    }
}
