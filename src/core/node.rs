//! Einzelner Wegpunkt des Navigationsgraphen.

use glam::Vec3;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Team-Zugehörigkeit eines Wegpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Team {
    /// Von allen Fraktionen nutzbar
    #[default]
    None,
    /// Nur für Team A
    TeamA,
    /// Nur für Team B
    TeamB,
}

impl Team {
    /// Prüft ob ein Fahrzeug von `team` einen Node mit dieser Zugehörigkeit nutzen darf.
    pub fn usable_by(self, team: Team) -> bool {
        self == Team::None || self == team
    }
}

/// Klemmt einen Erreichbarkeitsradius auf einen endlichen Wert `>= 0`.
///
/// NaN und unendliche Werte werden zu 0.
pub fn sanitize_reach_radius(radius: f32) -> f32 {
    if radius.is_finite() {
        radius.max(0.0)
    } else {
        0.0
    }
}

/// Ein Wegpunkt mit Position, Erreichbarkeitsradius und Nachbarliste.
///
/// Die Nachbarliste hält nur IDs; Besitzer aller Nodes ist der `WaypointGraph`.
/// Mutationen der Nachbarliste laufen ausschließlich über den Graphen, damit
/// Symmetrie und Dangling-Freiheit erhalten bleiben.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaypointNode {
    /// Stabile Node-ID (wird nie wiederverwendet)
    pub id: u64,
    /// Weltposition
    pub position: Vec3,
    /// Radius, innerhalb dessen ein Fahrzeug als "angekommen" gilt (endlich, >= 0)
    pub reach_radius: f32,
    /// Team-Zugehörigkeit
    pub owner_team: Team,
    /// Spawn-Markierung (rein informativ)
    pub is_spawn_point: bool,
    pub(crate) connections: IndexSet<u64>,
}

impl WaypointNode {
    /// Erstellt einen unverbundenen Node. Negative oder nicht endliche Radien werden 0.
    pub fn new(id: u64, position: Vec3, reach_radius: f32, owner_team: Team, is_spawn_point: bool) -> Self {
        Self {
            id,
            position,
            reach_radius: sanitize_reach_radius(reach_radius),
            owner_team,
            is_spawn_point,
            connections: IndexSet::new(),
        }
    }

    /// Nachbar-IDs in Einfügereihenfolge (read-only)
    pub fn connections(&self) -> &IndexSet<u64> {
        &self.connections
    }

    /// Anzahl der Nachbarn
    pub fn degree(&self) -> usize {
        self.connections.len()
    }

    /// Prüft ob `point` innerhalb des Erreichbarkeitsradius liegt (Rand inklusive).
    pub fn is_within_reach(&self, point: Vec3) -> bool {
        self.position.distance_squared(point) <= self.reach_radius * self.reach_radius
    }
}
