//! Marker-Clustering pro Zoomstufe auf Basis von `supercluster`.
//!
//! Der Index wird aus den sichtbaren Einträgen gebaut und liefert für eine
//! Zoomstufe, welche Einträge einzeln und welche als Gruppe erscheinen.

use super::PointRecord;
use anyhow::{Context, Result};
use geojson::{Feature, Geometry, JsonObject, Value};
use supercluster::{CoordinateSystem, Supercluster};

/// Kachelbreite der Karte in Pixeln; der Cluster-Radius gilt in dieser Einheit.
const TILE_EXTENT_PX: f64 = 256.0;

/// Höchste Zoomstufe, die die Cluster-ID-Kodierung von `supercluster` trägt.
const MAX_CLUSTER_ZOOM: u8 = 24;

/// Property, über die ein Einzelpunkt auf seinen Datensatz-Index zurückführt.
const RECORD_INDEX_KEY: &str = "record_index";

/// Parameter für den Aufbau eines Cluster-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterSettings {
    /// Zusammenfassungs-Radius in Screen-Pixeln
    pub radius_px: f64,
    /// Oberhalb dieser Zoomstufe wird nicht mehr geclustert
    pub max_zoom: u8,
}

/// Eine Gruppe nahe beieinander liegender Einträge.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerCluster {
    /// Gewichteter Mittelpunkt: Breitengrad
    pub lat: f64,
    /// Gewichteter Mittelpunkt: Längengrad
    pub lon: f64,
    /// Anzahl der enthaltenen Einträge (immer >= 2)
    pub count: usize,
    /// Zoomstufe, ab der die Gruppe in Teile zerfällt
    pub expansion_zoom: u8,
}

/// Ergebnis einer Cluster-Abfrage für eine Zoomstufe.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusteredView {
    /// Datensatz-Indizes der einzeln darzustellenden Einträge (aufsteigend)
    pub singles: Vec<usize>,
    /// Zusammengefasste Gruppen
    pub clusters: Vec<MarkerCluster>,
}

/// Zoomstufen-Hierarchie der sichtbaren Einträge.
///
/// Ein leerer Index (Clustering aus oder nichts sichtbar) ist inaktiv.
#[derive(Debug, Clone, Default)]
pub struct ClusterIndex {
    inner: Option<Supercluster>,
    max_zoom: u8,
}

impl ClusterIndex {
    /// Baut den Index für die Einträge `records[i]` aller `i` in `indices`.
    pub fn build(
        records: &[PointRecord],
        indices: &[usize],
        settings: ClusterSettings,
    ) -> Result<Self> {
        let max_zoom = settings.max_zoom.min(MAX_CLUSTER_ZOOM);
        let features: Vec<Feature> = indices
            .iter()
            .filter_map(|&index| records.get(index).map(|record| point_feature(index, record)))
            .collect();

        if features.is_empty() {
            return Ok(Self {
                inner: None,
                max_zoom,
            });
        }

        let options = Supercluster::builder()
            .radius(settings.radius_px)
            .extent(TILE_EXTENT_PX)
            .min_points(2)
            .min_zoom(0)
            .max_zoom(max_zoom)
            .coordinate_system(CoordinateSystem::LatLng)
            .build();

        let mut inner = Supercluster::new(options);
        inner
            .load(features)
            .context("Cluster-Index konnte nicht aufgebaut werden")?;

        Ok(Self {
            inner: Some(inner),
            max_zoom,
        })
    }

    /// Gibt `true` zurück, wenn der Index Einträge enthält.
    pub fn is_active(&self) -> bool {
        self.inner.is_some()
    }

    /// Einzelpunkte und Gruppen für die (abgerundete) Zoomstufe.
    pub fn view_at(&self, zoom: f64) -> Result<ClusteredView> {
        let Some(inner) = &self.inner else {
            return Ok(ClusteredView::default());
        };

        let zoom = zoom.floor().clamp(0.0, f64::from(u8::MAX)) as u8;
        let features = inner
            .get_clusters([-180.0, -90.0, 180.0, 90.0], zoom)
            .with_context(|| format!("Cluster für Zoomstufe {} nicht abrufbar", zoom))?;

        let mut view = ClusteredView::default();
        for feature in &features {
            if let Some(index) = feature.property(RECORD_INDEX_KEY).and_then(|v| v.as_u64()) {
                view.singles.push(index as usize);
                continue;
            }

            let cluster_id = feature.property("cluster_id").and_then(|v| v.as_u64());
            let count = feature.property("point_count").and_then(|v| v.as_u64());
            let (Some(cluster_id), Some(count), Some([lon, lat])) =
                (cluster_id, count, point_coordinates(feature))
            else {
                log::warn!("Cluster-Feature ohne Metadaten übersprungen");
                continue;
            };

            let expansion_zoom = inner
                .get_cluster_expansion_zoom(cluster_id as usize)
                .min(usize::from(self.max_zoom) + 1);
            view.clusters.push(MarkerCluster {
                lat,
                lon,
                count: count as usize,
                expansion_zoom: expansion_zoom as u8,
            });
        }

        view.singles.sort_unstable();
        Ok(view)
    }
}

/// GeoJSON-Punkt `[lon, lat]` mit Rückverweis auf den Datensatz-Index.
fn point_feature(index: usize, record: &PointRecord) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert(RECORD_INDEX_KEY.to_string(), serde_json::json!(index));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![record.lon, record.lat]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn point_coordinates(feature: &Feature) -> Option<[f64; 2]> {
    match &feature.geometry.as_ref()?.value {
        Value::Point(coords) if coords.len() >= 2 => Some([coords[0], coords[1]]),
        _ => None,
    }
}
