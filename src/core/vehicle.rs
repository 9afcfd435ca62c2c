//! Fahrzeugarten und ihre kosmetischen Standardwerte.
//!
//! Panzer- und Radfahrzeug-Graphen sind strukturell identisch; sie
//! unterscheiden sich nur in Standardradien und Farbthema.

use serde::{Deserialize, Serialize};

/// Fahrzeugart, für die ein Wegpunkt-Graph gepflegt wird
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VehicleKind {
    /// Kettenfahrzeug
    #[default]
    Tank,
    /// Radfahrzeug
    Wheeled,
}

impl VehicleKind {
    /// Anzeigename für Logs und Host-Oberflächen
    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Tank => "Panzer",
            VehicleKind::Wheeled => "Radfahrzeug",
        }
    }
}

/// Farbthema der Visualisierung (alle Farben RGBA)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayTheme {
    /// Normale Nodes
    pub node_color: [f32; 4],
    /// Spawn-Nodes
    pub spawn_color: [f32; 4],
    /// Verbindungen
    pub edge_color: [f32; 4],
    /// Selektierte Nodes
    pub selected_color: [f32; 4],
    /// Ketten-Anker
    pub anchor_color: [f32; 4],
    /// Quell-Node einer laufenden Verbindung
    pub pending_color: [f32; 4],
    /// Gestrichelte Linie der laufenden Verbindung
    pub pending_line_color: [f32; 4],
}

/// Standardwerte je Fahrzeugart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Fahrzeugart
    pub kind: VehicleKind,
    /// Erreichbarkeitsradius für neu platzierte Nodes
    pub default_reach_radius: f32,
    /// Radius für Proximity-Auto-Connect
    pub auto_connect_radius: f32,
    /// Farbthema
    pub theme: DisplayTheme,
}

impl VehicleProfile {
    /// Liefert das Standardprofil einer Fahrzeugart.
    pub fn for_kind(kind: VehicleKind) -> Self {
        match kind {
            VehicleKind::Tank => Self {
                kind,
                default_reach_radius: 8.0,
                auto_connect_radius: 35.0,
                theme: DisplayTheme {
                    node_color: [0.45, 0.55, 0.2, 1.0],
                    spawn_color: [0.2, 0.9, 0.3, 1.0],
                    edge_color: [1.0, 0.55, 0.1, 1.0],
                    selected_color: [1.0, 0.0, 1.0, 1.0],
                    anchor_color: [1.0, 1.0, 1.0, 1.0],
                    pending_color: [1.0, 0.2, 0.2, 1.0],
                    pending_line_color: [1.0, 0.2, 0.2, 0.8],
                },
            },
            VehicleKind::Wheeled => Self {
                kind,
                default_reach_radius: 5.0,
                auto_connect_radius: 25.0,
                theme: DisplayTheme {
                    node_color: [0.0, 0.8, 1.0, 1.0],
                    spawn_color: [0.2, 0.9, 0.3, 1.0],
                    edge_color: [1.0, 1.0, 0.0, 1.0],
                    selected_color: [1.0, 0.0, 1.0, 1.0],
                    anchor_color: [1.0, 1.0, 1.0, 1.0],
                    pending_color: [1.0, 0.2, 0.2, 1.0],
                    pending_line_color: [1.0, 0.2, 0.2, 0.8],
                },
            },
        }
    }
}

impl Default for VehicleProfile {
    fn default() -> Self {
        Self::for_kind(VehicleKind::default())
    }
}
