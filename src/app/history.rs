use super::{GraphEditorSession, SelectionState};
use crate::core::WaypointGraph;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Graph-Klon findet erst beim nächsten `Arc::make_mut()` in einem
/// Use-Case statt. Die laufende Verbindung gehört nicht zum Snapshot.
#[derive(Clone)]
pub struct Snapshot {
    /// Graph (Arc-Klon für O(1)-Snapshot)
    pub graph: Arc<WaypointGraph>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
    /// Ketten-Anker zum Zeitpunkt des Snapshots
    pub chain_anchor: Option<u64>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &GraphEditorSession) -> Self {
        Self {
            graph: Arc::clone(&state.graph),
            selection: state.selection.clone(),
            chain_anchor: state.chain_anchor,
        }
    }

    /// Stellt den Snapshot wieder her und verwirft danach ungültige Referenzen.
    pub fn apply_to(self, state: &mut GraphEditorSession) {
        state.graph = self.graph;
        state.selection = self.selection;
        state.chain_anchor = self.chain_anchor;
        state.drop_stale_references();
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen fertigen Snapshot auf. Leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl verfügbarer Undo-Schritte
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
