//! Filter-Leiste (linke Seitenleiste) mit einer Checkbox je Filter-Option.

use crate::app::{AppIntent, AppState};

/// Rendert die Filter-Leiste und gibt erzeugte Events zurück.
///
/// Es ist höchstens eine Checkbox gesetzt; ein Klick auf die gesetzte
/// Checkbox hebt den Filter wieder auf.
pub fn render_filter_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("filter_panel")
        .default_width(200.0)
        .min_width(150.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading(state.filter.attribute.heading());
            ui.separator();

            if state.filter.options.is_empty() {
                ui.label("Keine Filter-Optionen vorhanden");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for option in &state.filter.options {
                    let mut checked = state.filter.selection.is_selected(&option.value);
                    if ui.checkbox(&mut checked, &option.label).clicked() {
                        events.push(AppIntent::FilterOptionToggled {
                            value: option.value.clone(),
                        });
                    }
                }
            });
        });

    events
}
