use crate::core::{ConnectRadius, Team};
use glam::Vec3;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    // === Session-Modi ===
    /// Editier-Modus ein-/ausschalten
    SetEditMode { enabled: bool },
    /// Ketten-Modus ein-/ausschalten
    SetChainMode { enabled: bool },
    /// Proximity-Verbindung beim Platzieren ein-/ausschalten
    SetAutoConnectOnPlace { enabled: bool },

    // === Klick-Aktionen ===
    /// Neuen Node an (noch nicht projiziertem) Kandidatenpunkt platzieren
    PlaceNode { candidate: Vec3 },
    /// Node löschen (inkl. aller Verbindungen)
    DeleteNode { node_id: u64 },
    /// Quell-Node einer Verbindung merken
    SetConnectSource { node_id: u64 },
    /// Verbindung zwischen Quell-Node und Ziel umschalten
    ToggleConnectionFromSource { target_id: u64 },
    /// Laufende Verbindung abbrechen
    CancelPendingConnect,
    /// Node als Ketten-Anker wählen und selektieren
    SelectAnchor { node_id: u64 },

    // === Selektion ===
    /// Nodes selektieren (additiv oder ersetzend)
    SelectNodes { ids: Vec<u64>, additive: bool },
    /// Selektion aufheben
    ClearSelection,

    // === Node-Eigenschaften ===
    /// Position eines Nodes setzen
    SetNodePosition { node_id: u64, position: Vec3 },
    /// Erreichbarkeitsradius eines Nodes setzen
    SetNodeReachRadius { node_id: u64, radius: f32 },
    /// Team eines Nodes setzen
    SetNodeTeam { node_id: u64, team: Team },
    /// Spawn-Markierung eines Nodes setzen
    SetNodeSpawnPoint { node_id: u64, spawn: bool },

    // === Topologie ===
    /// Ring um `center` erzeugen (`None` = Wert aus den Optionen)
    CreateRing {
        center: Vec3,
        count: Option<usize>,
        radius: Option<f32>,
    },
    /// Raster um `center` erzeugen (`None` = Wert aus den Optionen)
    CreateGrid {
        center: Vec3,
        width: Option<usize>,
        height: Option<usize>,
        spacing: Option<f32>,
    },

    // === Bulk-Verbindungen über die Selektion ===
    /// Jedes Paar der Selektion verbinden
    ConnectSelectedPairs,
    /// Selektion in Erstellungsreihenfolge verketten
    ChainSelected,
    /// Alle Kanten innerhalb der Selektion entfernen
    DisconnectSelected,
    /// Proximity-Verbindung für jeden selektierten Node (`None` = Profilradius)
    AutoConnectSelected { radius: Option<ConnectRadius> },
    /// Proximity-Verbindung für den ganzen Graphen (`None` = Profilradius)
    AutoConnectAll { radius: Option<ConnectRadius> },

    // === History ===
    /// Letzten Schritt rückgängig machen
    Undo,
    /// Rückgängig gemachten Schritt wiederholen
    Redo,
}
