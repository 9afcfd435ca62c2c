//! Proximity-Auto-Connect: verbindet Nodes, die näher als ein Schwellwert liegen.
//!
//! Fügt ausschließlich Kanten hinzu; bestehende Kanten bleiben unangetastet.
//! Da `connect` idempotent und symmetrisch ist, hängt das Ergebnis der
//! Batch-Variante nicht von der Reihenfolge ab.

use super::{SpatialIndex, WaypointGraph};

/// Quelle des Verbindungsradius für die Batch-Variante
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConnectRadius {
    /// Ein Radius für alle Nodes
    Global(f32),
    /// Jeder Node nutzt seinen eigenen Erreichbarkeitsradius multipliziert mit dem Faktor
    PerNodeReach {
        /// Faktor auf den Erreichbarkeitsradius
        factor: f32,
    },
}

impl ConnectRadius {
    fn for_node(self, graph: &WaypointGraph, id: u64) -> f32 {
        match self {
            ConnectRadius::Global(radius) => radius,
            ConnectRadius::PerNodeReach { factor } => graph
                .node(id)
                .map_or(0.0, |node| node.reach_radius * factor),
        }
    }
}

/// Verbindet `node` mit allen anderen Nodes im Abstand `<= threshold`.
///
/// Gibt die Anzahl neu entstandener Kanten zurück.
pub fn auto_connect_nearby(graph: &mut WaypointGraph, node: u64, threshold: f32) -> usize {
    let index = graph.spatial_index();
    auto_connect_with_index(graph, &index, node, threshold)
}

fn auto_connect_with_index(
    graph: &mut WaypointGraph,
    index: &SpatialIndex,
    node: u64,
    threshold: f32,
) -> usize {
    let Some(position) = graph.node(node).map(|n| n.position) else {
        return 0;
    };

    let mut added = 0;
    for hit in index.within_radius(position, threshold) {
        if hit.node_id == node {
            continue;
        }
        // Index und Graph stammen aus demselben Zustand, Fehler sind hier nur Self-Connects
        if let Ok(true) = graph.connect(node, hit.node_id) {
            added += 1;
        }
    }
    added
}

/// Wendet Auto-Connect auf jeden Node in `nodes` an (Index wird einmal gebaut).
pub fn auto_connect_nodes(graph: &mut WaypointGraph, nodes: &[u64], radius: ConnectRadius) -> usize {
    let index = graph.spatial_index();
    nodes
        .iter()
        .map(|&id| {
            let threshold = radius.for_node(graph, id);
            auto_connect_with_index(graph, &index, id, threshold)
        })
        .sum()
}

/// Wendet Auto-Connect auf alle Nodes des Graphen an.
pub fn auto_connect_all(graph: &mut WaypointGraph, radius: ConnectRadius) -> usize {
    let ids = graph.node_ids();
    auto_connect_nodes(graph, &ids, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Team, VehicleKind};
    use glam::Vec3;

    fn graph_on_x_axis(xs: &[f32]) -> (WaypointGraph, Vec<u64>) {
        let mut graph = WaypointGraph::new(VehicleKind::Wheeled);
        let ids = xs
            .iter()
            .map(|&x| graph.add_node(Vec3::new(x, 0.0, 0.0), 2.0, Team::None, false))
            .collect();
        (graph, ids)
    }

    #[test]
    fn connects_near_and_skips_far() {
        let (mut graph, ids) = graph_on_x_axis(&[0.0, 5.0, 15.0]);

        let added = auto_connect_nearby(&mut graph, ids[0], 10.0);

        assert_eq!(added, 1);
        assert!(graph.is_connected(ids[0], ids[1]));
        assert!(!graph.is_connected(ids[0], ids[2]));
    }

    #[test]
    fn keeps_existing_far_edges() {
        let (mut graph, ids) = graph_on_x_axis(&[0.0, 5.0, 100.0]);
        graph.connect(ids[0], ids[2]).expect("connect");

        auto_connect_nearby(&mut graph, ids[0], 10.0);

        assert!(graph.is_connected(ids[0], ids[1]));
        assert!(graph.is_connected(ids[0], ids[2]));
    }

    #[test]
    fn unknown_node_adds_nothing() {
        let (mut graph, _) = graph_on_x_axis(&[0.0, 1.0]);
        assert_eq!(auto_connect_nearby(&mut graph, 99, 10.0), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn batch_result_is_order_independent() {
        let xs = [0.0, 4.0, 8.0, 30.0, 33.0];
        let (mut forward, ids) = graph_on_x_axis(&xs);
        let (mut backward, _) = graph_on_x_axis(&xs);

        auto_connect_nodes(&mut forward, &ids, ConnectRadius::Global(5.0));
        let reversed: Vec<u64> = ids.iter().rev().copied().collect();
        auto_connect_nodes(&mut backward, &reversed, ConnectRadius::Global(5.0));

        let mut a = forward.edges();
        let mut b = backward.edges();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn per_node_reach_uses_larger_of_both_radii() {
        let mut graph = WaypointGraph::new(VehicleKind::Tank);
        let small = graph.add_node(Vec3::ZERO, 1.0, Team::None, false);
        let large = graph.add_node(Vec3::new(6.0, 0.0, 0.0), 8.0, Team::None, false);

        auto_connect_all(&mut graph, ConnectRadius::PerNodeReach { factor: 1.0 });

        assert!(graph.is_connected(small, large));
        graph.verify_invariants().expect("Invarianten verletzt");
    }
}
