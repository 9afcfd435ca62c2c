//! Session-State: zentrale Datenhaltung der interaktiven Bearbeitung.

use super::history::{EditHistory, Snapshot};
use super::CommandLog;
use crate::core::{VehicleKind, VehicleProfile, WaypointGraph};
use crate::shared::EditorOptions;
use indexmap::IndexSet;
use std::sync::Arc;

/// Untermodus bei aktivem Editier-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveMode {
    /// Platzieren, Anker wählen, Löschen
    #[default]
    Default,
    /// Quell-Node gemerkt, wartet auf Ziel
    PendingConnect {
        /// Quell-Node der laufenden Verbindung
        source: u64,
    },
}

/// Editier-Modus der Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Editier-Modus aus: keine Eingabe wird verarbeitet
    #[default]
    Idle,
    /// Editier-Modus an
    Active(ActiveMode),
}

/// Auswahlbezogener Session-Zustand
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    /// Selektierte Node-IDs in Klick-Reihenfolge (Arc für O(1)-Clone in der Szene)
    pub selected_node_ids: Arc<IndexSet<u64>>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt eine mutable Referenz auf das Set zurück (CoW: klont nur wenn nötig).
    #[inline]
    pub fn ids_mut(&mut self) -> &mut IndexSet<u64> {
        Arc::make_mut(&mut self.selected_node_ids)
    }

    /// Anzahl selektierter Nodes
    pub fn len(&self) -> usize {
        self.selected_node_ids.len()
    }

    /// Gibt `true` zurück, wenn nichts selektiert ist.
    pub fn is_empty(&self) -> bool {
        self.selected_node_ids.is_empty()
    }

    /// Prüft ob ein Node selektiert ist.
    pub fn contains(&self, node_id: u64) -> bool {
        self.selected_node_ids.contains(&node_id)
    }
}

/// Zustand einer Bearbeitungs-Session für genau einen Fahrzeug-Graphen
pub struct GraphEditorSession {
    /// Der bearbeitete Graph (Arc für O(1)-Snapshots)
    pub graph: Arc<WaypointGraph>,
    /// Editier-Modus inkl. laufender Verbindung
    pub mode: EditMode,
    /// Zuletzt platzierter oder angeklickter Node
    pub chain_anchor: Option<u64>,
    /// Selection-State
    pub selection: SelectionState,
    /// Neue Nodes nur mit dem Ketten-Anker verbinden
    pub chain_mode: bool,
    /// Neue Nodes zusätzlich per Proximity verbinden
    pub auto_connect_on_place: bool,
    /// Standardradien und Farbthema der Fahrzeugart
    pub profile: VehicleProfile,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
}

impl GraphEditorSession {
    /// Erstellt eine Session mit leerem Graphen für `kind`.
    pub fn new(kind: VehicleKind, options: EditorOptions) -> Self {
        Self::with_graph(WaypointGraph::new(kind), options)
    }

    /// Erstellt eine Session für einen bestehenden Graphen.
    pub fn with_graph(graph: WaypointGraph, options: EditorOptions) -> Self {
        let profile = options.profile_for(graph.kind());
        Self {
            graph: Arc::new(graph),
            mode: EditMode::Idle,
            chain_anchor: None,
            selection: SelectionState::new(),
            chain_mode: options.chain_mode_default,
            auto_connect_on_place: options.auto_connect_on_place,
            profile,
            history: EditHistory::new_with_capacity(options.history_depth),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Fahrzeugart des Graphen
    pub fn kind(&self) -> VehicleKind {
        self.graph.kind()
    }

    /// Gibt zurück, ob der Editier-Modus aktiv ist.
    pub fn is_active(&self) -> bool {
        matches!(self.mode, EditMode::Active(_))
    }

    /// Quell-Node einer laufenden Verbindung
    pub fn pending_source(&self) -> Option<u64> {
        match self.mode {
            EditMode::Active(ActiveMode::PendingConnect { source }) => Some(source),
            _ => None,
        }
    }

    /// Setzt den Untermodus zurück auf `Default` (nur wenn aktiv).
    pub fn clear_pending(&mut self) {
        if self.is_active() {
            self.mode = EditMode::Active(ActiveMode::Default);
        }
    }

    /// Gibt die Anzahl der Nodes zurück (für UI-Anzeige)
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Bulk-Aktionen brauchen mindestens zwei selektierte Nodes.
    pub fn batch_actions_enabled(&self) -> bool {
        self.selection.len() >= 2
    }

    /// Selektierte Nodes in Erstellungsreihenfolge (aufsteigende ID).
    pub fn selected_ids_by_creation(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.selection.selected_node_ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Mutable Zugriff auf den Graphen (CoW: klont nur, wenn ein Snapshot ihn teilt).
    pub fn graph_mut(&mut self) -> &mut WaypointGraph {
        Arc::make_mut(&mut self.graph)
    }

    /// Verwirft alle Session-Referenzen auf Nodes, die nicht mehr existieren.
    ///
    /// Betrifft Quell-Node, Ketten-Anker und Selektion.
    pub fn drop_stale_references(&mut self) {
        if let Some(source) = self.pending_source() {
            if !self.graph.contains(source) {
                log::debug!("Quell-Node {} existiert nicht mehr, Verbindung abgebrochen", source);
                self.clear_pending();
            }
        }
        if let Some(anchor) = self.chain_anchor {
            if !self.graph.contains(anchor) {
                self.chain_anchor = None;
            }
        }
        if self
            .selection
            .selected_node_ids
            .iter()
            .any(|id| !self.graph.contains(*id))
        {
            let graph = Arc::clone(&self.graph);
            self.selection.ids_mut().retain(|id| graph.contains(*id));
        }
    }
}
