//! Szene als expliziter Übergabevertrag zwischen Session und Visualisierung.
//!
//! Lebt im shared-Modul, da `app` sie baut und der Host sie zeichnet.

use crate::core::{DisplayTheme, GraphStats, WaypointGraph};
use glam::Vec3;
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Daten für einen Visualisierungs-Frame.
#[derive(Clone)]
pub struct SessionScene {
    /// Der aktuelle Graph (Nodes + Adjazenz)
    pub graph: Arc<WaypointGraph>,
    /// IDs der aktuell selektierten Nodes (Arc für O(1)-Clone pro Frame)
    pub selected_node_ids: Arc<IndexSet<u64>>,
    /// Quell-Node einer laufenden Verbindung (für Hervorhebung)
    pub pending_source: Option<u64>,
    /// Startpunkt der gestrichelten Vorschau-Linie zum Mauszeiger
    pub pending_line_start: Option<Vec3>,
    /// Zuletzt platzierter oder angeklickter Node
    pub chain_anchor: Option<u64>,
    /// Ob der Editier-Modus aktiv ist
    pub edit_active: bool,
    /// Farbthema der Fahrzeugart
    pub theme: DisplayTheme,
    /// Kennzahlen für Debug-Anzeigen
    pub stats: GraphStats,
}

impl SessionScene {
    /// Gibt zurück, ob der Graph Nodes enthält.
    pub fn has_nodes(&self) -> bool {
        !self.graph.is_empty()
    }

    /// Liefert die Anzeigefarbe eines Nodes (Priorität: Pending > Anker > Selektion > Spawn).
    pub fn node_color(&self, node_id: u64) -> [f32; 4] {
        if self.pending_source == Some(node_id) {
            self.theme.pending_color
        } else if self.chain_anchor == Some(node_id) {
            self.theme.anchor_color
        } else if self.selected_node_ids.contains(&node_id) {
            self.theme.selected_color
        } else if self
            .graph
            .node(node_id)
            .is_some_and(|node| node.is_spawn_point)
        {
            self.theme.spawn_color
        } else {
            self.theme.node_color
        }
    }
}
