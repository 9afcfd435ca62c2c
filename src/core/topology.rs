//! Topologie-Generatoren (Ring, Raster, Kette) und Batch-Verbindungen über Node-Listen.
//!
//! Alle Kandidatenpositionen werden auf den Boden projiziert; verfehlt die
//! Projektion, bleibt die Rohposition erhalten.

use super::ground::{project_or_keep, GroundProjector};
use super::{Team, WaypointGraph};
use glam::Vec3;
use std::f32::consts::TAU;

/// Eigenschaften, mit denen generierte Nodes angelegt werden
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeTemplate {
    /// Erreichbarkeitsradius
    pub reach_radius: f32,
    /// Team-Zugehörigkeit
    pub team: Team,
    /// Spawn-Markierung
    pub spawn: bool,
}

impl NodeTemplate {
    /// Neutrales Template ohne Spawn-Markierung
    pub fn with_radius(reach_radius: f32) -> Self {
        Self {
            reach_radius,
            team: Team::None,
            spawn: false,
        }
    }
}

/// Erzeugt ganze Node-Mengen mit vorgegebenem Kantenmuster um einen Mittelpunkt.
pub struct TopologyBuilder<'a> {
    center: Vec3,
    projector: &'a dyn GroundProjector,
    template: NodeTemplate,
}

impl<'a> TopologyBuilder<'a> {
    /// Erstellt einen Builder für den Mittelpunkt `center`.
    pub fn new(center: Vec3, projector: &'a dyn GroundProjector, template: NodeTemplate) -> Self {
        Self {
            center,
            projector,
            template,
        }
    }

    fn place(&self, graph: &mut WaypointGraph, candidate: Vec3) -> u64 {
        let position = project_or_keep(self.projector, candidate);
        graph.add_node(
            position,
            self.template.reach_radius,
            self.template.team,
            self.template.spawn,
        )
    }

    /// Platziert `count` Nodes gleichmäßig auf einem Kreis und verbindet i mit (i+1) mod count.
    ///
    /// Ab 3 Nodes entsteht ein einzelner Zyklus. 2 Nodes ergeben eine Kante,
    /// 1 Node keine Kante, 0 Nodes nichts.
    pub fn create_ring(&self, graph: &mut WaypointGraph, count: usize, radius: f32) -> Vec<u64> {
        let ids: Vec<u64> = (0..count)
            .map(|i| {
                let angle = TAU * i as f32 / count as f32;
                let offset = Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius);
                self.place(graph, self.center + offset)
            })
            .collect();

        for i in 0..count {
            let (a, b) = (ids[i], ids[(i + 1) % count]);
            if a != b {
                // IDs stammen frisch aus diesem Graphen
                let _ = graph.connect(a, b);
            }
        }

        log::info!(
            "Ring mit {} Nodes (Radius {:.1}) um ({:.1}, {:.1}, {:.1}) erstellt",
            count,
            radius,
            self.center.x,
            self.center.y,
            self.center.z
        );
        ids
    }

    /// Platziert ein zentriertes `width × height`-Raster mit 4er-Nachbarschaft.
    ///
    /// Rückgabe zeilenweise (Zeile = Z-Richtung, Spalte = X-Richtung).
    /// Kantenanzahl: `(width-1)*height + (height-1)*width`.
    pub fn create_grid(
        &self,
        graph: &mut WaypointGraph,
        width: usize,
        height: usize,
        spacing: f32,
    ) -> Vec<u64> {
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let half_w = (width - 1) as f32 * 0.5;
        let half_h = (height - 1) as f32 * 0.5;

        let mut ids = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let offset = Vec3::new(
                    (col as f32 - half_w) * spacing,
                    0.0,
                    (row as f32 - half_h) * spacing,
                );
                ids.push(self.place(graph, self.center + offset));
            }
        }

        // IDs stammen frisch aus diesem Graphen, Nachbarn sind nie der Node selbst
        for row in 0..height {
            for col in 0..width {
                let id = ids[row * width + col];
                if col + 1 < width {
                    let _ = graph.connect(id, ids[row * width + col + 1]);
                }
                if row + 1 < height {
                    let _ = graph.connect(id, ids[(row + 1) * width + col]);
                }
            }
        }

        log::info!(
            "Raster {}×{} (Abstand {:.1}) erstellt",
            width,
            height,
            spacing
        );
        ids
    }

    /// Platziert einen Node bei `position` und verbindet ihn ausschließlich mit `anchor`.
    ///
    /// Ein Anker, der nicht (mehr) im Graphen existiert, wird ignoriert.
    pub fn place_with_anchor(
        &self,
        graph: &mut WaypointGraph,
        position: Vec3,
        anchor: Option<u64>,
    ) -> u64 {
        let id = self.place(graph, position);
        if let Some(anchor_id) = anchor {
            if let Err(e) = graph.connect(anchor_id, id) {
                log::warn!("Ketten-Anker {} nicht verbindbar: {}", anchor_id, e);
            }
        }
        id
    }
}

/// Verbindet jedes Paar der Liste (vollständiger Graph). Gibt neue Kanten zurück.
pub fn connect_all_pairs(graph: &mut WaypointGraph, ids: &[u64]) -> usize {
    let mut added = 0;
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if a != b && matches!(graph.connect(a, b), Ok(true)) {
                added += 1;
            }
        }
    }
    added
}

/// Verbindet die Liste sequenziell (i mit i+1). Gibt neue Kanten zurück.
pub fn chain_in_order(graph: &mut WaypointGraph, ids: &[u64]) -> usize {
    ids.windows(2)
        .filter(|pair| pair[0] != pair[1] && matches!(graph.connect(pair[0], pair[1]), Ok(true)))
        .count()
}

/// Entfernt alle Kanten zwischen Nodes der Liste. Gibt entfernte Kanten zurück.
pub fn disconnect_all_pairs(graph: &mut WaypointGraph, ids: &[u64]) -> usize {
    let mut removed = 0;
    for (i, &a) in ids.iter().enumerate() {
        for &b in &ids[i + 1..] {
            if graph.disconnect(a, b) {
                removed += 1;
            }
        }
    }
    removed
}
