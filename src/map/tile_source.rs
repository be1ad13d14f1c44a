//! Tile-Quelle mit `{s}`-Subdomain-Rotation für die walkers-Karte.

use crate::shared::ViewerOptions;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};
use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// Bereits geleakte Attributionstexte, einmal pro unterschiedlichem Text.
static ATTRIBUTIONS: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

/// Liefert eine `&'static str`-Kopie des Textes, wie walkers sie verlangt.
///
/// Gleicher Text ergibt immer denselben Slice; geleakt wird nur beim ersten Auftreten.
fn intern_attribution(text: &str) -> &'static str {
    let cache = ATTRIBUTIONS.get_or_init(|| Mutex::new(HashSet::new()));
    let mut cache = match cache.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(&existing) = cache.get(text) {
        return existing;
    }
    let leaked: &'static str = Box::leak(text.to_string().into_boxed_str());
    cache.insert(leaked);
    leaked
}

/// Ersetzt die Platzhalter `{s}`, `{x}`, `{y}` und `{z}` im URL-Template.
///
/// Die Subdomain rotiert über `(x + y) % n`, damit benachbarte Kacheln auf
/// verschiedene Server verteilt werden. Ohne Subdomains bleibt `{s}` leer.
pub fn expand_tile_url(template: &str, subdomains: &[String], x: u32, y: u32, zoom: u8) -> String {
    let subdomain = if subdomains.is_empty() {
        ""
    } else {
        let index = (x as usize + y as usize) % subdomains.len();
        subdomains[index].as_str()
    };

    template
        .replace("{s}", subdomain)
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
        .replace("{z}", &zoom.to_string())
}

/// walkers-Tile-Quelle aus den Viewer-Optionen.
#[derive(Debug, Clone)]
pub struct SubdomainTileSource {
    template: String,
    subdomains: Vec<String>,
    attribution: &'static str,
    max_zoom: u8,
}

impl SubdomainTileSource {
    /// Erstellt die Tile-Quelle aus Template, Subdomains und Attribution der Optionen.
    pub fn from_options(options: &ViewerOptions) -> Self {
        let attribution = intern_attribution(&options.tile_attribution);

        Self {
            template: options.tile_url_template.clone(),
            subdomains: options
                .tile_subdomains
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            attribution,
            max_zoom: options.max_zoom,
        }
    }
}

impl TileSource for SubdomainTileSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        expand_tile_url(
            &self.template,
            &self.subdomains,
            tile_id.x,
            tile_id.y,
            tile_id.zoom,
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}
