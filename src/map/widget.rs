//! Karten-Widget: walkers-Map mit Tile-Quelle, Marker-Plugin und Attribution.

use super::marker_plugin::{MapClick, MarkerPlugin};
use super::tile_source::SubdomainTileSource;
use crate::app::{AppIntent, ViewState};
use crate::shared::{MarkerScene, ViewerOptions};
use std::sync::{Arc, Mutex};
use walkers::{lat_lon, HttpTiles, Map, MapMemory};

/// Toleranz, ab der eine Zoom-Änderung an den Controller gemeldet wird.
const ZOOM_EPSILON: f64 = 1e-3;

/// Hält Widget-Zustand (Kamera, Tile-Cache) zwischen den Frames.
pub struct MapView {
    map_memory: MapMemory,
    tiles: HttpTiles,
    home: [f64; 2],
    clicked: Arc<Mutex<Option<MapClick>>>,
    last_reported_zoom: f64,
}

impl MapView {
    /// Erstellt das Widget mit Start-Ansicht und Tile-Quelle aus den Optionen.
    pub fn new(ctx: &egui::Context, options: &ViewerOptions) -> Self {
        let mut map_memory = MapMemory::default();
        let [lat, lon] = options.map_center;
        map_memory.center_at(lat_lon(lat, lon));
        if let Err(e) = map_memory.set_zoom(options.initial_zoom) {
            log::warn!("Start-Zoom {} ungültig: {:?}", options.initial_zoom, e);
        }

        Self {
            map_memory,
            tiles: HttpTiles::new(SubdomainTileSource::from_options(options), ctx.clone()),
            home: options.map_center,
            clicked: Arc::new(Mutex::new(None)),
            last_reported_zoom: options.initial_zoom,
        }
    }

    /// Baut die Tile-Quelle neu auf (nach Options-Änderung).
    pub fn rebuild_tiles(&mut self, ctx: &egui::Context, options: &ViewerOptions) {
        self.tiles = HttpTiles::new(SubdomainTileSource::from_options(options), ctx.clone());
        self.home = options.map_center;
        log::info!("Tile-Quelle neu aufgebaut: {}", options.tile_url_template);
    }

    /// Übernimmt ausstehende Zentrierung und Zoomstufe aus dem View-Zustand.
    pub fn apply_pending_view(&mut self, view: &mut ViewState) {
        if let Some([lat, lon]) = view.pending_center.take() {
            self.map_memory.center_at(lat_lon(lat, lon));
        }
        if let Some(zoom) = view.pending_zoom.take() {
            if let Err(e) = self.map_memory.set_zoom(zoom) {
                log::warn!("Zoomstufe {} ungültig: {:?}", zoom, e);
            }
        }
    }

    /// Zeichnet die Karte und gibt die erzeugten Intents zurück.
    pub fn show(&mut self, ui: &mut egui::Ui, scene: MarkerScene) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let map_rect = ui.available_rect_before_wrap();
        let attribution = scene.options.tile_attribution.clone();

        let plugin = MarkerPlugin {
            scene,
            clicked: self.clicked.clone(),
            map_rect,
        };
        let [lat, lon] = self.home;
        let map = Map::new(Some(&mut self.tiles), &mut self.map_memory, lat_lon(lat, lon))
            .with_plugin(plugin);
        ui.add(map);

        match self.clicked.lock() {
            Ok(mut slot) => {
                match slot.take() {
                    Some(MapClick::Marker(id)) => events.push(AppIntent::MarkerActivated { id }),
                    Some(MapClick::Cluster { lat, lon, zoom }) => {
                        events.push(AppIntent::ClusterActivated { lat, lon, zoom })
                    }
                    None => {}
                }
            }
            Err(_) => log::error!("Klick-Status nicht lesbar (Mutex vergiftet)"),
        }

        let zoom = self.map_memory.zoom();
        if (zoom - self.last_reported_zoom).abs() > ZOOM_EPSILON {
            self.last_reported_zoom = zoom;
            events.push(AppIntent::MapZoomChanged { zoom });
        }

        ui.painter().text(
            map_rect.max - egui::vec2(5.0, 5.0),
            egui::Align2::RIGHT_BOTTOM,
            format!("© {}", attribution),
            egui::FontId::proportional(11.0),
            egui::Color32::from_black_alpha(180),
        );

        events
    }
}
