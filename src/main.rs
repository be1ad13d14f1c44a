//! House Map Viewer.
//!
//! Interaktive Karte mit einem Pin je Wohnung bzw. Landmarke,
//! Single-Select-Filter und Detailansicht. egui + walkers.

use eframe::egui;
use house_map_viewer::{map, ui, AppController, AppIntent, AppState, ViewerOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("House Map Viewer v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("House Map Viewer"),
            ..Default::default()
        };

        eframe::run_native(
            "House Map Viewer",
            options,
            Box::new(|cc| Ok(Box::new(ViewerApp::new(&cc.egui_ctx)?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct ViewerApp {
    state: AppState,
    controller: AppController,
    map_view: map::MapView,
}

impl ViewerApp {
    fn new(ctx: &egui::Context) -> anyhow::Result<Self> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        let dataset = viewer_options.dataset.load()?;
        log::info!(
            "Datensatz geladen: {} Einträge ({:?})",
            dataset.len(),
            viewer_options.dataset
        );

        let map_view = map::MapView::new(ctx, &viewer_options);
        let state = AppState::with_dataset(dataset, viewer_options);

        Ok(Self {
            state,
            controller: AppController::new(),
            map_view,
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        self.sync_tile_source(ctx);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl ViewerApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_filter_panel(ctx, &self.state));
        events.extend(ui::render_detail_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        self.map_view.apply_pending_view(&mut self.state.view);
        let scene = self.controller.build_marker_scene(&self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                events.extend(self.map_view.show(ui, scene));
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn sync_tile_source(&mut self, ctx: &egui::Context) {
        if self.controller.take_tile_rebuild(&mut self.state) {
            self.map_view.rebuild_tiles(ctx, &self.state.options);
        }
    }
}
