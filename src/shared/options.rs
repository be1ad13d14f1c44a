//! Zentrale Konfiguration für den House-Map-Viewer.
//!
//! `ViewerOptions` enthält alle über die TOML-Datei änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{
    ClusterSettings, Dataset, FilterAttribute, FilterOption, BUNDLED_HOUSES_JSON, BUNDLED_LANDMARKS_JSON,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ── Karte ───────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte `[lat, lon]` (Almelo).
pub const MAP_CENTER: [f64; 2] = [52.35919189453125, 6.63872766494751];
/// Start-Zoomstufe.
pub const MAP_INITIAL_ZOOM: f64 = 13.0;
/// Maximale Zoomstufe der Tile-Quelle.
pub const MAP_MAX_ZOOM: u8 = 20;
/// URL-Template der Tile-Quelle (`{s}` = Subdomain).
pub const TILE_URL_TEMPLATE: &str = "http://{s}.google.com/vt/lyrs=m&x={x}&y={y}&z={z}";
/// Rotierende Subdomains für `{s}`.
pub const TILE_SUBDOMAINS: [&str; 4] = ["mt0", "mt1", "mt2", "mt3"];
/// Attributionstext der Tile-Quelle.
pub const TILE_ATTRIBUTION: &str = "Google Maps";

// ── Marker ──────────────────────────────────────────────────────────

/// Marker-Höhe in Screen-Pixeln.
pub const MARKER_SIZE_PX: f32 = 32.0;
/// Füllfarbe der Marker (RGBA: Rot).
pub const MARKER_COLOR: [f32; 4] = [0.86, 0.16, 0.16, 1.0];
/// Füllfarbe des aktivierten Markers (RGBA: Orange).
pub const MARKER_COLOR_SELECTED: [f32; 4] = [1.0, 0.6, 0.0, 1.0];
/// Outline-Farbe der Marker (RGBA: Weiß).
pub const MARKER_OUTLINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Pick-Radius für Marker-Klicks in Screen-Pixeln.
pub const MARKER_PICK_RADIUS_PX: f32 = 18.0;

// ── Cluster ─────────────────────────────────────────────────────────

/// Radius, innerhalb dessen Marker zu einer Gruppe zusammenfallen (Screen-Pixel).
pub const CLUSTER_RADIUS_PX: f64 = 80.0;
/// Oberhalb dieser Zoomstufe werden alle Marker einzeln gezeigt.
pub const CLUSTER_MAX_ZOOM: u8 = 17;
/// Füllfarbe der Cluster-Kreise (RGBA: Blau).
pub const CLUSTER_COLOR: [f32; 4] = [0.16, 0.38, 0.78, 0.9];

/// Herkunft des beim Start geladenen Datensatzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetSource {
    /// Mitgelieferte Wohnungen (`assets/houses.json`)
    #[default]
    Houses,
    /// Mitgelieferte Landmarken (`assets/landmarks.json`)
    Landmarks,
    /// Externe JSON-Datei
    File { path: PathBuf },
}

impl DatasetSource {
    /// Lädt und validiert den Datensatz dieser Quelle.
    pub fn load(&self) -> anyhow::Result<Dataset> {
        match self {
            DatasetSource::Houses => Dataset::from_json_str(BUNDLED_HOUSES_JSON),
            DatasetSource::Landmarks => Dataset::from_json_str(BUNDLED_LANDMARKS_JSON),
            DatasetSource::File { path } => Dataset::load_from_file(path),
        }
    }
}

/// Alle Viewer-Optionen.
/// Wird als `house_map_viewer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    // ── Karte ───────────────────────────────────────────────────
    /// Start-Mittelpunkt `[lat, lon]`
    pub map_center: [f64; 2],
    /// Start-Zoomstufe
    pub initial_zoom: f64,
    /// Maximale Zoomstufe
    pub max_zoom: u8,
    /// Tile-URL mit `{s}`, `{x}`, `{y}`, `{z}`
    pub tile_url_template: String,
    /// Subdomains für `{s}` (leer = keine Rotation)
    #[serde(default)]
    pub tile_subdomains: Vec<String>,
    /// Attributionstext unten rechts
    pub tile_attribution: String,

    // ── Marker ──────────────────────────────────────────────────
    /// Marker-Höhe in Screen-Pixeln
    pub marker_size_px: f32,
    /// Füllfarbe der Marker
    pub marker_color: [f32; 4],
    /// Füllfarbe des aktivierten Markers
    pub marker_color_selected: [f32; 4],
    /// Outline-Farbe der Marker
    pub marker_outline_color: [f32; 4],
    /// Pick-Radius für Klicks in Screen-Pixeln
    #[serde(default = "default_pick_radius_px")]
    pub pick_radius_px: f32,

    // ── Cluster ─────────────────────────────────────────────────
    /// Nahe Marker zu Gruppen zusammenfassen
    #[serde(default = "default_cluster_enabled")]
    pub cluster_enabled: bool,
    /// Zusammenfassungs-Radius in Screen-Pixeln
    #[serde(default = "default_cluster_radius_px")]
    pub cluster_radius_px: f64,
    /// Höchste Zoomstufe mit Gruppierung
    #[serde(default = "default_cluster_max_zoom")]
    pub cluster_max_zoom: u8,
    /// Füllfarbe der Cluster-Kreise
    #[serde(default = "default_cluster_color")]
    pub cluster_color: [f32; 4],

    // ── Filter & Details (nur beim Start gelesen) ───────────────
    /// Attribut, nach dem gefiltert wird
    #[serde(default)]
    pub filter_attribute: FilterAttribute,
    /// Detailansicht bei Marker-Klick anzeigen
    #[serde(default = "default_detail_panel_enabled")]
    pub detail_panel_enabled: bool,
    /// Feste Filter-Optionen (leer = aus dem Datensatz ableiten)
    #[serde(default)]
    pub filter_options: Vec<FilterOption>,
    /// Datensatz-Quelle
    #[serde(default)]
    pub dataset: DatasetSource,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            map_center: MAP_CENTER,
            initial_zoom: MAP_INITIAL_ZOOM,
            max_zoom: MAP_MAX_ZOOM,
            tile_url_template: TILE_URL_TEMPLATE.to_string(),
            tile_subdomains: TILE_SUBDOMAINS.iter().map(|s| s.to_string()).collect(),
            tile_attribution: TILE_ATTRIBUTION.to_string(),

            marker_size_px: MARKER_SIZE_PX,
            marker_color: MARKER_COLOR,
            marker_color_selected: MARKER_COLOR_SELECTED,
            marker_outline_color: MARKER_OUTLINE_COLOR,
            pick_radius_px: MARKER_PICK_RADIUS_PX,

            cluster_enabled: true,
            cluster_radius_px: CLUSTER_RADIUS_PX,
            cluster_max_zoom: CLUSTER_MAX_ZOOM,
            cluster_color: CLUSTER_COLOR,

            filter_attribute: FilterAttribute::Street,
            detail_panel_enabled: true,
            filter_options: Vec::new(),
            dataset: DatasetSource::Houses,
        }
    }
}

/// Serde-Default für `pick_radius_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_radius_px() -> f32 {
    MARKER_PICK_RADIUS_PX
}

/// Serde-Default für `detail_panel_enabled`.
fn default_detail_panel_enabled() -> bool {
    true
}

fn default_cluster_enabled() -> bool {
    true
}

fn default_cluster_radius_px() -> f64 {
    CLUSTER_RADIUS_PX
}

fn default_cluster_max_zoom() -> u8 {
    CLUSTER_MAX_ZOOM
}

fn default_cluster_color() -> [f32; 4] {
    CLUSTER_COLOR
}

impl ViewerOptions {
    /// Landmarken-Variante: feste Kategorie-Liste, keine Detailansicht.
    pub fn landmarks() -> Self {
        Self {
            filter_attribute: FilterAttribute::Category,
            detail_panel_enabled: false,
            filter_options: vec![
                FilterOption::new("museum", "Musea"),
                FilterOption::new("church", "Kerken"),
                FilterOption::new("monument", "Monumenten"),
                FilterOption::new("park", "Parken"),
                FilterOption::new("culture", "Cultuur"),
                FilterOption::new("transport", "Vervoer"),
            ],
            dataset: DatasetSource::Landmarks,
            ..Self::default()
        }
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("house_map_viewer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("house_map_viewer.toml")
    }

    /// Cluster-Parameter, `None` bei abgeschaltetem Clustering.
    pub fn cluster_settings(&self) -> Option<ClusterSettings> {
        self.cluster_enabled.then_some(ClusterSettings {
            radius_px: self.cluster_radius_px,
            max_zoom: self.cluster_max_zoom,
        })
    }

    /// Filter-Optionen für den geladenen Datensatz.
    ///
    /// Feste Liste aus der Konfiguration, sonst aus den Daten abgeleitet.
    pub fn resolve_filter_options(&self, dataset: &Dataset) -> Vec<FilterOption> {
        if self.filter_options.is_empty() {
            dataset.distinct_values(self.filter_attribute)
        } else {
            self.filter_options.clone()
        }
    }
}
