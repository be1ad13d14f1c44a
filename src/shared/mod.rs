//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `map` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod marker_scene;
pub mod options;

pub use marker_scene::{ClusterItem, MarkerItem, MarkerScene};
pub use options::{DatasetSource, ViewerOptions};
