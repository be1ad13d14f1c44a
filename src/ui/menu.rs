//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Start-Ansicht").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                let has_selection = state.selection.selected_record_id.is_some();
                if ui
                    .add_enabled(has_selection, egui::Button::new("Auf Auswahl zentrieren"))
                    .clicked()
                {
                    events.push(AppIntent::CenterOnSelectedRequested);
                    ui.close();
                }
            });
        });
    });

    events
}
