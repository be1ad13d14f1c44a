//! Optionen-Dialog für Karte, Tile-Quelle und Marker.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.ui.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Karte ───────────────────────────────────────
                    ui.collapsing("Karte", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Start-Mittelpunkt:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.map_center[0])
                                        .range(-90.0..=90.0)
                                        .speed(0.001)
                                        .prefix("lat "),
                                )
                                .changed();
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.map_center[1])
                                        .range(-180.0..=180.0)
                                        .speed(0.001)
                                        .prefix("lon "),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Start-Zoom:");
                            let max = f64::from(opts.max_zoom);
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.initial_zoom)
                                        .range(0.0..=max)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Max. Zoom:");
                            changed |= ui
                                .add(egui::DragValue::new(&mut opts.max_zoom).range(1..=22))
                                .changed();
                        });
                    });

                    // ── Tile-Quelle ─────────────────────────────────
                    ui.collapsing("Tile-Quelle", |ui| {
                        ui.label("URL-Template ({s}, {x}, {y}, {z}):");
                        changed |= ui
                            .text_edit_singleline(&mut opts.tile_url_template)
                            .changed();

                        ui.label("Subdomains (kommagetrennt):");
                        let mut subdomains = opts.tile_subdomains.join(",");
                        if ui.text_edit_singleline(&mut subdomains).changed() {
                            opts.tile_subdomains =
                                subdomains.split(',').map(str::to_string).collect();
                            changed = true;
                        }

                        ui.label("Attribution:");
                        changed |= ui
                            .text_edit_singleline(&mut opts.tile_attribution)
                            .changed();
                    });

                    // ── Marker ──────────────────────────────────────
                    ui.collapsing("Marker", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Pin-Größe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.marker_size_px)
                                        .range(8.0..=96.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.pick_radius_px)
                                        .range(4.0..=60.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Pin-Farbe:", &mut opts.marker_color);
                        changed |=
                            color_edit(ui, "Aktiviert:", &mut opts.marker_color_selected);
                        changed |= color_edit(ui, "Umriss-Farbe:", &mut opts.marker_outline_color);
                    });

                    // ── Cluster ─────────────────────────────────────
                    ui.collapsing("Cluster", |ui| {
                        changed |= ui
                            .checkbox(&mut opts.cluster_enabled, "Nahe Marker gruppieren")
                            .changed();
                        ui.add_enabled_ui(opts.cluster_enabled, |ui| {
                            ui.horizontal(|ui| {
                                ui.label("Radius (px):");
                                changed |= ui
                                    .add(
                                        egui::DragValue::new(&mut opts.cluster_radius_px)
                                            .range(10.0..=200.0)
                                            .speed(1.0),
                                    )
                                    .changed();
                            });
                            ui.horizontal(|ui| {
                                ui.label("Bis Zoomstufe:");
                                changed |= ui
                                    .add(
                                        egui::DragValue::new(&mut opts.cluster_max_zoom)
                                            .range(0..=22),
                                    )
                                    .changed();
                            });
                            changed |= color_edit(ui, "Kreis-Farbe:", &mut opts.cluster_color);
                        });
                    });

                    // ── Filter & Daten (nur Anzeige) ────────────────
                    ui.collapsing("Filter & Daten", |ui| {
                        ui.label(format!("Datensatz: {:?}", opts.dataset));
                        ui.label(opts.filter_attribute.heading());
                        ui.label(if opts.detail_panel_enabled {
                            "Detailansicht: an"
                        } else {
                            "Detailansicht: aus"
                        });
                        ui.label(
                            egui::RichText::new("Änderungen in der TOML-Datei wirken nach Neustart")
                                .weak(),
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = crate::map::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            *color = [
                c.r() as f32 / 255.0,
                c.g() as f32 / 255.0,
                c.b() as f32 / 255.0,
                c.a() as f32 / 255.0,
            ];
            changed = true;
        }
    });
    changed
}
