//! Spatial-Index (KD-Tree) für Umkreisabfragen über Wegpunkt-Positionen.

use glam::Vec3;
use indexmap::IndexMap;
use kiddo::{ImmutableKdTree, SquaredEuclidean};

use crate::core::WaypointNode;

/// Ergebnis einer Distanzabfrage gegen den Spatial-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpatialMatch {
    /// ID des gefundenen Nodes
    pub node_id: u64,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Spatial-Index über allen Nodes eines Graphen.
///
/// Wird pro Batch-Operation einmal gebaut; Adjazenzänderungen machen ihn
/// nicht ungültig, nur Positionsänderungen und Löschungen. Der immutable
/// Baum verträgt beliebig viele Nodes mit gleicher Koordinate auf einer Achse
/// (ebener Boden, Raster).
pub struct SpatialIndex {
    tree: Option<ImmutableKdTree<f64, 3>>,
    node_ids: Vec<u64>,
}

impl SpatialIndex {
    /// Erstellt einen leeren Spatial-Index.
    pub fn empty() -> Self {
        Self {
            tree: None,
            node_ids: Vec::new(),
        }
    }

    /// Baut einen neuen Index aus den übergebenen Nodes (Erstellungsreihenfolge).
    pub fn from_nodes(nodes: &IndexMap<u64, WaypointNode>) -> Self {
        let node_ids: Vec<u64> = nodes.keys().copied().collect();
        let entries: Vec<[f64; 3]> = nodes
            .values()
            .map(|node| {
                [
                    node.position.x as f64,
                    node.position.y as f64,
                    node.position.z as f64,
                ]
            })
            .collect();

        let tree = (!entries.is_empty()).then(|| ImmutableKdTree::new_from_slice(&entries));

        Self { tree, node_ids }
    }

    /// Gibt die Anzahl indexierter Nodes zurück.
    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    /// Gibt `true` zurück, wenn keine Nodes im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Findet alle Nodes innerhalb eines Radius (Rand inklusive), nach Distanz sortiert.
    pub fn within_radius(&self, query: Vec3, radius: f32) -> Vec<SpatialMatch> {
        let Some(tree) = self.tree.as_ref() else {
            return Vec::new();
        };
        if radius.is_sign_negative() {
            return Vec::new();
        }

        let radius_sq = radius as f64 * radius as f64;
        let mut results = tree
            .within::<SquaredEuclidean>(
                &[query.x as f64, query.y as f64, query.z as f64],
                radius_sq,
            )
            .into_iter()
            // kiddo behandelt den Rand nicht einheitlich inklusiv
            .filter(|entry| entry.distance <= radius_sq)
            .filter_map(|entry| {
                let node_id = *self.node_ids.get(entry.item as usize)?;
                Some(SpatialMatch {
                    node_id,
                    distance: (entry.distance as f32).sqrt(),
                })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results
    }
}
