//! Der zentrale Wegpunkt-Graph: Nodes, symmetrische Adjazenz, Strahl-Picking.

use super::node::sanitize_reach_radius;
use super::{Ray, SpatialIndex, Team, VehicleKind, WaypointNode};
use anyhow::Context;
use glam::Vec3;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Fehler bei Graph-Operationen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Operation ist in diesem Zustand nicht erlaubt (z.B. Self-Connect)
    #[error("ungültige Operation: {0}")]
    InvalidOperation(String),
    /// Referenzierter Node existiert nicht
    #[error("Node {0} existiert nicht")]
    UnknownNode(u64),
    /// Eine Graph-Invariante ist verletzt
    #[error("Graph-Invariante verletzt: {0}")]
    IntegrityViolation(String),
}

/// Obergrenze für den ID-Zähler eines Graphen.
///
/// Ein geladener Zähler darüber wird abgelehnt; ab dort sind noch mehr als
/// 2^63 Vergaben möglich, der Zähler läuft also nie über.
pub const MAX_NEXT_NODE_ID: u64 = 1 << 53;

/// Kennzahlen für Debug-Anzeigen. Auf leerem Graphen sind alle Werte 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphStats {
    /// Anzahl Nodes
    pub node_count: usize,
    /// Anzahl ungerichteter Kanten
    pub edge_count: usize,
    /// Anzahl Spawn-Nodes
    pub spawn_count: usize,
    /// Nodes ohne Team-Bindung
    pub neutral_count: usize,
    /// Nodes von Team A
    pub team_a_count: usize,
    /// Nodes von Team B
    pub team_b_count: usize,
    /// Nodes ohne Nachbarn
    pub isolated_count: usize,
    /// Anzahl Zusammenhangskomponenten
    pub component_count: usize,
}

/// Container aller Wegpunkte einer Fahrzeugart.
///
/// Nach jeder öffentlichen Operation gilt: keine Self-Loops, symmetrische
/// Adjazenz, keine Referenzen auf entfernte Nodes. Der Graph darf in mehrere
/// Komponenten zerfallen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointGraph {
    kind: VehicleKind,
    /// Alle Nodes in Erstellungsreihenfolge
    nodes: IndexMap<u64, WaypointNode>,
    /// Nächste zu vergebende ID (IDs werden nie wiederverwendet)
    next_id: u64,
}

impl WaypointGraph {
    /// Erstellt einen leeren Graphen für die Fahrzeugart.
    pub fn new(kind: VehicleKind) -> Self {
        Self {
            kind,
            nodes: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Fahrzeugart dieses Graphen
    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// Legt einen neuen, unverbundenen Node an und gibt seine ID zurück.
    pub fn add_node(&mut self, position: Vec3, reach_radius: f32, team: Team, spawn: bool) -> u64 {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        self.nodes
            .insert(id, WaypointNode::new(id, position, reach_radius, team, spawn));
        id
    }

    /// Liefert einen Node (read-only)
    pub fn node(&self, id: u64) -> Option<&WaypointNode> {
        self.nodes.get(&id)
    }

    /// Iterator über alle Nodes in Erstellungsreihenfolge
    pub fn nodes(&self) -> impl Iterator<Item = &WaypointNode> {
        self.nodes.values()
    }

    /// Momentaufnahme aller IDs in Erstellungsreihenfolge.
    ///
    /// Mutationen während der Iteration über die Kopie sind unkritisch.
    pub fn node_ids(&self) -> Vec<u64> {
        self.nodes.keys().copied().collect()
    }

    /// Prüft ob ein Node existiert
    pub fn contains(&self, id: u64) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Anzahl Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `true` wenn keine Nodes vorhanden sind
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Anzahl ungerichteter Kanten
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(WaypointNode::degree).sum::<usize>() / 2
    }

    /// Anzahl Nachbarn eines Nodes (0 für unbekannte IDs)
    pub fn degree(&self, id: u64) -> usize {
        self.nodes.get(&id).map_or(0, WaypointNode::degree)
    }

    /// Prüft ob zwischen `a` und `b` eine Kante existiert
    pub fn is_connected(&self, a: u64, b: u64) -> bool {
        self.nodes
            .get(&a)
            .is_some_and(|node| node.connections.contains(&b))
    }

    /// Alle Kanten genau einmal, der früher erstellte Node zuerst.
    pub fn edges(&self) -> Vec<(u64, u64)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (index, node) in self.nodes.values().enumerate() {
            for &other in &node.connections {
                if self.nodes.get_index_of(&other).is_some_and(|i| i > index) {
                    edges.push((node.id, other));
                }
            }
        }
        edges
    }

    fn ensure_exists(&self, id: u64) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(id))
        }
    }

    /// Verbindet `a` und `b` in beide Richtungen.
    ///
    /// Gibt `Ok(true)` zurück wenn die Kante neu ist, `Ok(false)` wenn sie schon bestand.
    pub fn connect(&mut self, a: u64, b: u64) -> Result<bool, GraphError> {
        if a == b {
            return Err(GraphError::InvalidOperation(format!(
                "Node {a} kann nicht mit sich selbst verbunden werden"
            )));
        }
        self.ensure_exists(a)?;
        self.ensure_exists(b)?;

        let mut added = false;
        if let Some(node) = self.nodes.get_mut(&a) {
            added |= node.connections.insert(b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            added |= node.connections.insert(a);
        }
        Ok(added)
    }

    /// Entfernt die Kante zwischen `a` und `b` in beide Richtungen.
    ///
    /// Gibt `true` zurück wenn eine Kante entfernt wurde.
    pub fn disconnect(&mut self, a: u64, b: u64) -> bool {
        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(&a) {
            removed |= node.connections.shift_remove(&b);
        }
        if let Some(node) = self.nodes.get_mut(&b) {
            removed |= node.connections.shift_remove(&a);
        }
        removed
    }

    /// Verbindet wenn getrennt, trennt wenn verbunden.
    ///
    /// Gibt den neuen Zustand zurück (`true` = verbunden).
    pub fn toggle_connect(&mut self, a: u64, b: u64) -> Result<bool, GraphError> {
        if self.is_connected(a, b) {
            self.disconnect(a, b);
            Ok(false)
        } else {
            self.connect(a, b)?;
            Ok(true)
        }
    }

    /// Entfernt einen Node inklusive aller Referenzen anderer Nodes auf ihn.
    ///
    /// Die Bereinigung läuft über eine Momentaufnahme der ID-Liste und prüft
    /// jeden Node, nicht nur die eingetragenen Nachbarn.
    pub fn remove_node(&mut self, id: u64) -> Option<WaypointNode> {
        if !self.nodes.contains_key(&id) {
            return None;
        }

        for other in self.node_ids() {
            if other == id {
                continue;
            }
            if let Some(node) = self.nodes.get_mut(&other) {
                node.connections.shift_remove(&id);
            }
        }

        let mut removed = self.nodes.shift_remove(&id)?;
        removed.connections.clear();
        Some(removed)
    }

    /// Pickt den Node, dessen Position dem Strahl am nächsten liegt.
    ///
    /// Kandidat ist ein Node nur, wenn sein senkrechter Abstand zur Strahlgeraden
    /// kleiner als sein eigener Erreichbarkeitsradius ist und seine Projektion
    /// auf den Strahl zwischen Ursprung und `max_distance` liegt. Bei Gleichstand
    /// gewinnt der zuerst gefundene (früher erstellte) Node.
    pub fn nearest_node_along_ray(&self, ray: &Ray, max_distance: f32) -> Option<u64> {
        let mut best: Option<(u64, f32)> = None;

        for node in self.nodes.values() {
            let along = (node.position - ray.origin).dot(ray.direction);
            if along < 0.0 || along > max_distance {
                continue;
            }

            let distance = ray.distance_to_point(node.position);
            if distance >= node.reach_radius {
                continue;
            }

            if best.map_or(true, |(_, best_distance)| distance < best_distance) {
                best = Some((node.id, distance));
            }
        }

        best.map(|(id, _)| id)
    }

    /// Setzt die Position eines Nodes
    pub fn set_position(&mut self, id: u64, position: Vec3) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Setzt den Erreichbarkeitsradius (negative oder nicht endliche Werte werden 0)
    pub fn set_reach_radius(&mut self, id: u64, radius: f32) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.reach_radius = sanitize_reach_radius(radius);
        Ok(())
    }

    /// Setzt die Team-Zugehörigkeit
    pub fn set_owner_team(&mut self, id: u64, team: Team) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.owner_team = team;
        Ok(())
    }

    /// Setzt die Spawn-Markierung
    pub fn set_spawn_point(&mut self, id: u64, spawn: bool) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode(id))?;
        node.is_spawn_point = spawn;
        Ok(())
    }

    // ── Read-only Zugriffe für die Navigations-KI ──────────────────

    /// Nachbarn eines Nodes (leer für unbekannte IDs)
    pub fn connections(&self, id: u64) -> impl Iterator<Item = u64> + '_ {
        self.nodes
            .get(&id)
            .into_iter()
            .flat_map(|node| node.connections.iter().copied())
    }

    /// Prüft ob `point` im Erreichbarkeitsradius des Nodes liegt
    pub fn is_within_reach(&self, id: u64, point: Vec3) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|node| node.is_within_reach(point))
    }

    /// Team-Zugehörigkeit eines Nodes
    pub fn owner_team(&self, id: u64) -> Option<Team> {
        self.nodes.get(&id).map(|node| node.owner_team)
    }

    /// IDs aller Nodes, die ein Fahrzeug von `team` nutzen darf
    pub fn nodes_usable_by(&self, team: Team) -> Vec<u64> {
        self.nodes
            .values()
            .filter(|node| node.owner_team.usable_by(team))
            .map(|node| node.id)
            .collect()
    }

    // ── Analyse ────────────────────────────────────────────────────

    /// Baut einen Spatial-Index über die aktuellen Positionen.
    pub fn spatial_index(&self) -> SpatialIndex {
        SpatialIndex::from_nodes(&self.nodes)
    }

    /// Anzahl der Zusammenhangskomponenten (BFS)
    pub fn component_count(&self) -> usize {
        let mut visited: HashSet<u64> = HashSet::with_capacity(self.nodes.len());
        let mut components = 0;
        let mut queue = VecDeque::new();

        for &start in self.nodes.keys() {
            if !visited.insert(start) {
                continue;
            }
            components += 1;
            queue.push_back(start);

            while let Some(current) = queue.pop_front() {
                for neighbor in self.connections(current) {
                    if visited.insert(neighbor) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        components
    }

    /// Sammelt Kennzahlen für Debug-Anzeigen.
    pub fn stats(&self) -> GraphStats {
        let mut stats = GraphStats {
            node_count: self.nodes.len(),
            edge_count: self.edge_count(),
            component_count: self.component_count(),
            ..GraphStats::default()
        };

        for node in self.nodes.values() {
            if node.is_spawn_point {
                stats.spawn_count += 1;
            }
            if node.connections.is_empty() {
                stats.isolated_count += 1;
            }
            match node.owner_team {
                Team::None => stats.neutral_count += 1,
                Team::TeamA => stats.team_a_count += 1,
                Team::TeamB => stats.team_b_count += 1,
            }
        }

        stats
    }

    /// Prüft Self-Loop-Freiheit, Symmetrie, Dangling-Freiheit, gültige Radien
    /// und den ID-Zähler.
    pub fn verify_invariants(&self) -> Result<(), GraphError> {
        if self.next_id > MAX_NEXT_NODE_ID {
            return Err(GraphError::IntegrityViolation(format!(
                "ID-Zähler {} über der Obergrenze {}",
                self.next_id, MAX_NEXT_NODE_ID
            )));
        }
        for node in self.nodes.values() {
            if !(node.reach_radius.is_finite() && node.reach_radius >= 0.0) {
                return Err(GraphError::IntegrityViolation(format!(
                    "Node {} hat ungültigen Erreichbarkeitsradius {}",
                    node.id, node.reach_radius
                )));
            }
            if node.connections.contains(&node.id) {
                return Err(GraphError::IntegrityViolation(format!(
                    "Node {} referenziert sich selbst",
                    node.id
                )));
            }
            for &other in &node.connections {
                let Some(other_node) = self.nodes.get(&other) else {
                    return Err(GraphError::IntegrityViolation(format!(
                        "Node {} referenziert entfernten Node {}",
                        node.id, other
                    )));
                };
                if !other_node.connections.contains(&node.id) {
                    return Err(GraphError::IntegrityViolation(format!(
                        "Kante {}→{} ohne Gegenrichtung",
                        node.id, other
                    )));
                }
            }
            if node.id >= self.next_id {
                return Err(GraphError::IntegrityViolation(format!(
                    "Node-ID {} liegt nicht unter dem ID-Zähler {}",
                    node.id, self.next_id
                )));
            }
        }
        Ok(())
    }

    // ── Persistenz-Hilfen ──────────────────────────────────────────

    /// Serialisiert den Graphen inklusive ID-Zähler als JSON.
    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Wegpunkt-Graph konnte nicht serialisiert werden")
    }

    /// Lädt einen Graphen aus JSON und prüft anschließend alle Invarianten.
    ///
    /// IDs bleiben erhalten, Adjazenz-Referenzen sind danach weiterhin gültig.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let graph: Self =
            serde_json::from_str(json).context("Wegpunkt-Graph konnte nicht gelesen werden")?;
        graph.verify_invariants()?;
        for (&key, node) in &graph.nodes {
            if key != node.id {
                anyhow::bail!("Node-Schlüssel {} passt nicht zur Node-ID {}", key, node.id);
            }
        }
        Ok(graph)
    }
}

impl Default for WaypointGraph {
    fn default() -> Self {
        Self::new(VehicleKind::default())
    }
}
