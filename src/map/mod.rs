//! Karten-Layer auf Basis von walkers (Tiles, Marker, Cluster, Klick-Erkennung).

pub mod marker_plugin;
pub mod tile_source;
mod widget;

pub use marker_plugin::{pick_cluster, pick_closest, to_color32, MapClick, MarkerPlugin};
pub use tile_source::{expand_tile_url, SubdomainTileSource};
pub use widget::MapView;
