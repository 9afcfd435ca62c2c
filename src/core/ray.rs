//! Zeigerstrahl für Node-Picking und Platzierung.

use glam::Vec3;

/// Strahl mit normierter Richtung.
///
/// Der Host wandelt die 2D-Zeigerposition in einen Strahl um; der Editor-Kern
/// arbeitet nur mit diesem Strahl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ursprung (typisch: Kameraposition)
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl. Gibt `None` zurück, wenn die Richtung nicht normierbar ist.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Punkt im Abstand `t` entlang des Strahls
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Senkrechter Abstand eines Punkts zur unendlichen Geraden durch den Strahl.
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.origin).cross(self.direction).length()
    }

    /// Schnittpunkt mit der horizontalen Ebene `y = height` vor dem Ursprung.
    pub fn intersect_horizontal_plane(&self, height: f32) -> Option<Vec3> {
        if self.direction.y.abs() <= f32::EPSILON {
            return None;
        }
        let t = (height - self.origin.y) / self.direction.y;
        (t >= 0.0).then(|| self.at(t))
    }
}
