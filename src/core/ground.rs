//! Bodenprojektion als konsumierte Fähigkeit des Hosts.
//!
//! Die eigentliche Terrain-Abfrage liefert der Host. Hier liegen nur der
//! Vertrag und zwei einfache Implementierungen (leer / ebene Fläche).

use glam::Vec3;

/// Projiziert einen Kandidatenpunkt auf die darunterliegende Oberfläche.
///
/// `None` bedeutet: keine Oberfläche im Probe-Bereich. Aufrufer behalten dann
/// den unprojizierten Punkt.
pub trait GroundProjector {
    /// Liefert den ersten Oberflächentreffer unterhalb von `point`.
    fn project(&self, point: Vec3) -> Option<Vec3>;
}

impl<F> GroundProjector for F
where
    F: Fn(Vec3) -> Option<Vec3>,
{
    fn project(&self, point: Vec3) -> Option<Vec3> {
        self(point)
    }
}

/// Projektor ohne Oberfläche (jede Projektion verfehlt).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundProjector for NoGround {
    fn project(&self, _point: Vec3) -> Option<Vec3> {
        None
    }
}

/// Horizontale Ebene mit begrenzter Abwärts-Probe.
///
/// Die Probe startet `probe_height` über dem Kandidaten und reicht
/// `probe_length` nach unten.
#[derive(Debug, Clone, Copy)]
pub struct FlatGround {
    /// Höhe der Ebene
    pub height: f32,
    /// Startversatz der Probe über dem Kandidaten
    pub probe_height: f32,
    /// Länge der Probe
    pub probe_length: f32,
}

impl FlatGround {
    /// Ebene auf `height` mit den gegebenen Probe-Maßen.
    pub fn new(height: f32, probe_height: f32, probe_length: f32) -> Self {
        Self {
            height,
            probe_height,
            probe_length,
        }
    }
}

impl GroundProjector for FlatGround {
    fn project(&self, point: Vec3) -> Option<Vec3> {
        let start = point.y + self.probe_height;
        let end = start - self.probe_length;
        (self.height <= start && self.height >= end).then(|| Vec3::new(point.x, self.height, point.z))
    }
}

/// Projiziert `point` und fällt bei einem Fehlschlag auf den Ausgangspunkt zurück.
pub fn project_or_keep(projector: &dyn GroundProjector, point: Vec3) -> Vec3 {
    match projector.project(point) {
        Some(hit) => hit,
        None => {
            log::debug!(
                "Bodenprojektion ohne Treffer bei ({:.1}, {:.1}, {:.1}), Ausgangspunkt bleibt",
                point.x,
                point.y,
                point.z
            );
            point
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_ground_hits_inside_probe_window() {
        let ground = FlatGround::new(0.0, 100.0, 200.0);
        let hit = ground.project(Vec3::new(5.0, 40.0, -3.0));
        assert_eq!(hit, Some(Vec3::new(5.0, 0.0, -3.0)));
    }

    #[test]
    fn flat_ground_misses_far_below_probe() {
        let ground = FlatGround::new(-500.0, 100.0, 200.0);
        assert!(ground.project(Vec3::ZERO).is_none());
    }

    #[test]
    fn miss_keeps_candidate_point() {
        let point = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(project_or_keep(&NoGround, point), point);
    }

    #[test]
    fn closures_act_as_projectors() {
        let projector = |p: Vec3| Some(Vec3::new(p.x, 7.0, p.z));
        assert_eq!(project_or_keep(&projector, Vec3::ZERO), Vec3::new(0.0, 7.0, 0.0));
    }
}
