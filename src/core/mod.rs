//! Core-Domänentypen: Kartenpunkte, Datensatz, Filter-Modell und Clustering.

pub mod clustering;
pub mod dataset;
pub mod filter;
pub mod point_record;

pub use clustering::{ClusterIndex, ClusterSettings, ClusteredView, MarkerCluster};
pub use dataset::{Dataset, GeoBounds, BUNDLED_HOUSES_JSON, BUNDLED_LANDMARKS_JSON};
pub use filter::{derive_options, is_visible, FilterAttribute, FilterOption, FilterSelection};
pub use point_record::{DetailField, PointRecord};
