use crate::core::GraphError;

/// Ergebnis einer verarbeiteten Eingabe oder eines Commands.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// Eingabe wurde nicht verarbeitet (Durchreichen an den Host)
    Ignored,
    /// Neuer Node platziert, optional mit dem Ketten-Anker verbunden
    NodePlaced {
        node_id: u64,
        anchored_to: Option<u64>,
    },
    /// Node gelöscht
    NodeDeleted { node_id: u64 },
    /// Quell-Node für eine Verbindung gemerkt
    ConnectSourceSet { node_id: u64 },
    /// Verbindung umgeschaltet; `connected` ist der neue Zustand
    ConnectToggled { a: u64, b: u64, connected: bool },
    /// Laufende Verbindung abgebrochen
    PendingCancelled,
    /// Node als Ketten-Anker gewählt
    AnchorSelected { node_id: u64 },
    /// Selektion geändert
    SelectionChanged { count: usize },
    /// Eigenschaft eines Nodes geändert
    NodeUpdated { node_id: u64 },
    /// Topologie erzeugt
    NodesGenerated { node_ids: Vec<u64> },
    /// Bulk-Aktion ausgeführt
    EdgesChanged { added: usize, removed: usize },
    /// Modus-Schalter geändert
    ModeChanged,
    /// Undo ausgeführt
    Undone,
    /// Redo ausgeführt
    Redone,
    /// Operation abgelehnt, Zustand unverändert
    Refused(GraphError),
}
