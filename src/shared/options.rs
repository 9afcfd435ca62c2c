//! Zentrale Konfiguration für den Wegpunkt-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Team, VehicleKind, VehicleProfile};
use serde::{Deserialize, Serialize};

// ── Bodenprojektion ─────────────────────────────────────────────────

/// Startpunkt der Boden-Probe oberhalb des Kandidatenpunkts.
pub const PROBE_HEIGHT: f32 = 100.0;
/// Länge der Boden-Probe nach unten.
pub const PROBE_LENGTH: f32 = 200.0;

// ── Platzierung ─────────────────────────────────────────────────────

/// Höhe der horizontalen Referenzebene für Klicks ins Leere.
pub const PLACEMENT_PLANE_HEIGHT: f32 = 0.0;
/// Maximale Strahl-Distanz für Platzierung und Fallback-Punkt.
pub const PLACEMENT_MAX_DISTANCE: f32 = 1000.0;
/// Maximale Strahl-Distanz für Node-Picking.
pub const PICK_MAX_DISTANCE: f32 = 1000.0;

// ── Session ─────────────────────────────────────────────────────────

/// Maximale Anzahl Undo-Schritte.
pub const HISTORY_DEPTH: usize = 200;

// ── Topologie-Generatoren ───────────────────────────────────────────

/// Standard-Knotenanzahl für Ringe.
pub const RING_COUNT: usize = 8;
/// Standard-Ringradius.
pub const RING_RADIUS: f32 = 80.0;
/// Standard-Rasterbreite (Spalten).
pub const GRID_WIDTH: usize = 3;
/// Standard-Rasterhöhe (Zeilen).
pub const GRID_HEIGHT: usize = 3;
/// Standard-Rasterabstand.
pub const GRID_SPACING: f32 = 20.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `vehicle_waypoint_editor.toml` neben der Binary des Hosts gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Bodenprojektion ─────────────────────────────────────────
    /// Startpunkt der Probe oberhalb des Kandidaten
    pub probe_height: f32,
    /// Probe-Länge nach unten
    pub probe_length: f32,

    // ── Platzierung & Picking ───────────────────────────────────
    /// Höhe der Referenzebene für Klicks ins Leere
    pub placement_plane_height: f32,
    /// Maximale Strahl-Distanz für Platzierung
    pub placement_max_distance: f32,
    /// Maximale Strahl-Distanz für Node-Picking
    pub pick_max_distance: f32,
    /// Team neu platzierter Nodes
    #[serde(default)]
    pub default_team: Team,

    // ── Session ─────────────────────────────────────────────────
    /// Undo-Tiefe
    pub history_depth: usize,
    /// Ketten-Modus beim Start der Session
    pub chain_mode_default: bool,
    /// Neu platzierte Nodes per Proximity verbinden
    #[serde(default)]
    pub auto_connect_on_place: bool,

    // ── Topologie ───────────────────────────────────────────────
    /// Knotenanzahl für Ringe
    pub ring_count: usize,
    /// Ringradius
    pub ring_radius: f32,
    /// Rasterbreite
    pub grid_width: usize,
    /// Rasterhöhe
    pub grid_height: usize,
    /// Rasterabstand
    pub grid_spacing: f32,

    // ── Fahrzeugprofile ─────────────────────────────────────────
    /// Profil für Panzer-Graphen
    #[serde(default = "default_tank_profile")]
    pub tank_profile: VehicleProfile,
    /// Profil für Radfahrzeug-Graphen
    #[serde(default = "default_wheeled_profile")]
    pub wheeled_profile: VehicleProfile,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            probe_height: PROBE_HEIGHT,
            probe_length: PROBE_LENGTH,

            placement_plane_height: PLACEMENT_PLANE_HEIGHT,
            placement_max_distance: PLACEMENT_MAX_DISTANCE,
            pick_max_distance: PICK_MAX_DISTANCE,
            default_team: Team::None,

            history_depth: HISTORY_DEPTH,
            chain_mode_default: true,
            auto_connect_on_place: false,

            ring_count: RING_COUNT,
            ring_radius: RING_RADIUS,
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            grid_spacing: GRID_SPACING,

            tank_profile: default_tank_profile(),
            wheeled_profile: default_wheeled_profile(),
        }
    }
}

/// Serde-Default für `tank_profile` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_tank_profile() -> VehicleProfile {
    VehicleProfile::for_kind(VehicleKind::Tank)
}

/// Serde-Default für `wheeled_profile`.
fn default_wheeled_profile() -> VehicleProfile {
    VehicleProfile::for_kind(VehicleKind::Wheeled)
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("vehicle_waypoint_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("vehicle_waypoint_editor.toml")
    }

    /// Liefert das (ggf. überschriebene) Profil einer Fahrzeugart.
    ///
    /// Die Fahrzeugart im Ergebnis entspricht immer `kind`, auch wenn die
    /// TOML-Datei etwas anderes einträgt.
    pub fn profile_for(&self, kind: VehicleKind) -> VehicleProfile {
        let mut profile = match kind {
            VehicleKind::Tank => self.tank_profile,
            VehicleKind::Wheeled => self.wheeled_profile,
        };
        profile.kind = kind;
        profile.default_reach_radius = profile.default_reach_radius.max(0.0);
        profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_roundtrip_keeps_values() {
        let mut options = EditorOptions::default();
        options.ring_count = 12;
        options.wheeled_profile.auto_connect_radius = 40.0;

        let text = toml::to_string_pretty(&options).expect("serialisieren");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsen");

        assert_eq!(parsed, options);
    }

    #[test]
    fn missing_optional_fields_use_defaults() {
        let text = r#"
            probe_height = 50.0
            probe_length = 120.0
            placement_plane_height = 2.0
            placement_max_distance = 500.0
            pick_max_distance = 500.0
            history_depth = 10
            chain_mode_default = false
            ring_count = 6
            ring_radius = 30.0
            grid_width = 2
            grid_height = 2
            grid_spacing = 5.0
        "#;
        let parsed: EditorOptions = toml::from_str(text).expect("parsen");

        assert_eq!(parsed.probe_height, 50.0);
        assert!(!parsed.auto_connect_on_place);
        assert_eq!(parsed.default_team, Team::None);
        assert_eq!(parsed.tank_profile, VehicleProfile::for_kind(VehicleKind::Tank));
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("vehicle_waypoint_editor_missing_options.toml");
        let _ = std::fs::remove_file(&path);

        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn profile_for_forces_requested_kind() {
        let mut options = EditorOptions::default();
        options.tank_profile.kind = VehicleKind::Wheeled;
        options.tank_profile.default_reach_radius = -3.0;

        let profile = options.profile_for(VehicleKind::Tank);
        assert_eq!(profile.kind, VehicleKind::Tank);
        assert_eq!(profile.default_reach_radius, 0.0);
    }
}
