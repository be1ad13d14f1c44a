//! walkers-Plugin: zeichnet Pin-Marker und Cluster-Kreise und erkennt Klicks.

use crate::shared::{ClusterItem, MarkerItem, MarkerScene};
use std::sync::{Arc, Mutex};
use walkers::{lat_lon, MapMemory, Plugin, Projector};

/// Anteil der Pin-Höhe, der auf den runden Kopf entfällt.
const PIN_HEAD_RATIO: f32 = 0.35;

/// Getroffenes Kartenobjekt eines Klicks.
#[derive(Debug, Clone, PartialEq)]
pub enum MapClick {
    /// Einzelner Marker mit Datensatz-ID
    Marker(u64),
    /// Gruppe: Mittelpunkt und Auflöse-Zoomstufe
    Cluster { lat: f64, lon: f64, zoom: f64 },
}

/// Zeichnet alle Marker einer Szene und meldet das geklickte Objekt.
pub struct MarkerPlugin {
    /// Marker und Darstellungs-Optionen dieses Frames
    pub scene: MarkerScene,
    /// Ergebnis des Klick-Tests
    pub clicked: Arc<Mutex<Option<MapClick>>>,
    /// Zeichenbereich der Karte für das Clipping
    pub map_rect: egui::Rect,
}

impl Plugin for MarkerPlugin {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(self.map_rect);
        let options = &self.scene.options;
        let size = options.marker_size_px;
        let fill = to_color32(options.marker_color);
        let fill_selected = to_color32(options.marker_color_selected);
        let outline = to_color32(options.marker_outline_color);

        let cluster_fill = to_color32(options.cluster_color);
        let cluster_positions: Vec<(&ClusterItem, egui::Pos2, f32)> = self
            .scene
            .clusters
            .iter()
            .map(|cluster| {
                let v = projector.project(lat_lon(cluster.lat, cluster.lon));
                (cluster, egui::pos2(v.x, v.y), cluster_radius(cluster.count, size))
            })
            .collect();

        let screen_positions: Vec<(&MarkerItem, egui::Pos2)> = self
            .scene
            .markers
            .iter()
            .map(|marker| {
                let v = projector.project(lat_lon(marker.lat, marker.lon));
                (marker, egui::pos2(v.x, v.y))
            })
            .collect();

        let cull_rect = self.map_rect.expand(size);
        for (cluster, center, radius) in &cluster_positions {
            if cull_rect.contains(*center) {
                paint_cluster(
                    &painter,
                    *center,
                    *radius,
                    cluster.count,
                    cluster_fill,
                    outline,
                );
            }
        }

        // Aktivierter Marker zuletzt, damit er oben liegt
        for (_, tip) in screen_positions.iter().filter(|(m, _)| !m.selected) {
            if cull_rect.contains(*tip) {
                paint_pin(&painter, *tip, size, fill, outline);
            }
        }
        for (_, tip) in screen_positions.iter().filter(|(m, _)| m.selected) {
            paint_pin(&painter, *tip, size * 1.15, fill_selected, outline);
        }

        let head_positions = || {
            screen_positions
                .iter()
                .map(|(marker, tip)| (marker.id, pin_head_center(*tip, size)))
        };

        let cluster_circles = || {
            cluster_positions
                .iter()
                .map(|(_, center, radius)| (*center, *radius))
        };

        if let Some(hover_pos) = response.hover_pos() {
            let hovered = pick_closest(hover_pos, head_positions(), options.pick_radius_px)
                .and_then(|id| screen_positions.iter().find(|(m, _)| m.id == id));
            if let Some((marker, tip)) = hovered {
                paint_title(&painter, *tip, size, &marker.title);
            } else if let Some(index) = pick_cluster(hover_pos, cluster_circles()) {
                let (cluster, center, radius) = &cluster_positions[index];
                let label = format!("{} Einträge, Klick zum Vergrößern", cluster.count);
                let anchor = *center + egui::vec2(0.0, *radius);
                paint_title(&painter, anchor, *radius * 2.0, &label);
            }
        }

        if !response.clicked() {
            return;
        }
        let Some(click_pos) = response.interact_pointer_pos() else {
            return;
        };

        let hit = pick_closest(click_pos, head_positions(), options.pick_radius_px)
            .map(MapClick::Marker)
            .or_else(|| {
                pick_cluster(click_pos, cluster_circles()).map(|index| {
                    let (cluster, _, _) = cluster_positions[index];
                    MapClick::Cluster {
                        lat: cluster.lat,
                        lon: cluster.lon,
                        zoom: cluster.expansion_zoom,
                    }
                })
            });

        if let Some(hit) = hit {
            match self.clicked.lock() {
                Ok(mut slot) => *slot = Some(hit),
                Err(_) => log::error!("Karten-Klick verworfen: Mutex vergiftet"),
            }
        }
    }
}

/// Liefert den Index des getroffenen Cluster-Kreises.
///
/// Kandidaten sind `(Mittelpunkt, Radius)`; bei Überlappung gewinnt der
/// nächstgelegene Mittelpunkt.
pub fn pick_cluster(
    click: egui::Pos2,
    circles: impl IntoIterator<Item = (egui::Pos2, f32)>,
) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (index, (center, radius)) in circles.into_iter().enumerate() {
        let dist = center.distance(click);
        if dist > radius {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((index, dist));
        }
    }
    best.map(|(index, _)| index)
}

/// Kreisradius einer Gruppe; wächst logarithmisch mit der Anzahl.
fn cluster_radius(count: usize, marker_size: f32) -> f32 {
    marker_size * 0.45 + 4.0 * (count.max(1) as f32).log10()
}

/// Zeichnet eine Gruppe als Kreis mit zentrierter Anzahl.
fn paint_cluster(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    count: usize,
    fill: egui::Color32,
    outline: egui::Color32,
) {
    painter.circle(center, radius, fill, egui::Stroke::new(2.0, outline));
    painter.text(
        center,
        egui::Align2::CENTER_CENTER,
        count.to_string(),
        egui::FontId::proportional((radius * 0.8).clamp(10.0, 18.0)),
        egui::Color32::WHITE,
    );
}

/// Liefert die ID des Markers, der dem Klickpunkt am nächsten liegt.
///
/// Nur Marker innerhalb von `radius` Pixeln zählen. Bei Gleichstand gewinnt
/// der zuerst gelieferte Kandidat.
pub fn pick_closest(
    click: egui::Pos2,
    candidates: impl IntoIterator<Item = (u64, egui::Pos2)>,
    radius: f32,
) -> Option<u64> {
    let mut best: Option<(u64, f32)> = None;
    for (id, pos) in candidates {
        let dist = pos.distance(click);
        if dist > radius {
            continue;
        }
        if best.is_none_or(|(_, best_dist)| dist < best_dist) {
            best = Some((id, dist));
        }
    }
    best.map(|(id, _)| id)
}

/// Mittelpunkt des Pin-Kopfes; die Spitze sitzt auf der Koordinate.
fn pin_head_center(tip: egui::Pos2, size: f32) -> egui::Pos2 {
    egui::pos2(tip.x, tip.y - size * (1.0 - PIN_HEAD_RATIO))
}

/// Zeichnet einen Pin: runder Kopf mit Spitze nach unten.
fn paint_pin(
    painter: &egui::Painter,
    tip: egui::Pos2,
    size: f32,
    fill: egui::Color32,
    outline: egui::Color32,
) {
    let head = pin_head_center(tip, size);
    let radius = size * PIN_HEAD_RATIO;
    let stroke = egui::Stroke::new(1.5, outline);

    let left = egui::pos2(head.x - radius * 0.8, head.y + radius * 0.6);
    let right = egui::pos2(head.x + radius * 0.8, head.y + radius * 0.6);
    painter.add(egui::Shape::convex_polygon(
        vec![left, right, tip],
        fill,
        stroke,
    ));
    painter.circle(head, radius, fill, stroke);
    painter.circle_filled(head, radius * 0.35, outline);
}

/// Zeichnet den Titel eines Markers über dessen Kopf.
fn paint_title(painter: &egui::Painter, tip: egui::Pos2, size: f32, title: &str) {
    let anchor = egui::pos2(tip.x, tip.y - size - 4.0);
    let galley = painter.layout_no_wrap(
        title.to_string(),
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
    let rect = egui::Align2::CENTER_BOTTOM
        .anchor_size(anchor, galley.size())
        .expand(4.0);
    painter.rect_filled(rect, 3.0, egui::Color32::from_black_alpha(200));
    painter.galley(rect.shrink(4.0).min, galley, egui::Color32::WHITE);
}

/// Konvertiert eine RGBA-Farbe `[0..1]` nach `egui::Color32`.
pub fn to_color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
