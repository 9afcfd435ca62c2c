use crate::core::Ray;

/// Maustaste eines Pointer-Events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Maustaste
    Primary,
    /// Rechte Maustaste (Kamera des Hosts)
    Secondary,
    /// Mittlere Maustaste (Kamera des Hosts)
    Middle,
}

/// Vom Host gemeldete Taste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Laufende Verbindung abbrechen
    Escape,
    /// Alle anderen Tasten (werden durchgereicht)
    Other,
}

/// Aktive Modifier beim Klick.
///
/// Auswertung in fester Reihenfolge: `camera` vor `delete` vor `shift`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Verbinden-Modifier (Shift)
    pub shift: bool,
    /// Löschen-Modifier (Ctrl)
    pub delete: bool,
    /// Kamera-Navigation des Hosts (Alt)
    pub camera: bool,
}

impl Modifiers {
    /// Keine Modifier gedrückt
    pub const NONE: Self = Self {
        shift: false,
        delete: false,
        camera: false,
    };
    /// Nur Shift
    pub const SHIFT: Self = Self {
        shift: true,
        delete: false,
        camera: false,
    };
    /// Nur Löschen-Modifier
    pub const DELETE: Self = Self {
        shift: false,
        delete: true,
        camera: false,
    };
    /// Nur Kamera-Modifier
    pub const CAMERA: Self = Self {
        shift: false,
        delete: false,
        camera: true,
    };
}

/// Rohe Bedienereingaben aus dem Host ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Maustaste gedrückt; der Host hat den Zeiger bereits in einen 3D-Strahl umgerechnet
    PointerDown {
        button: PointerButton,
        modifiers: Modifiers,
        ray: Ray,
    },
    /// Mausrad (Kamera des Hosts)
    Scroll { delta: f32 },
    /// Taste gedrückt
    KeyDown { key: Key },
    /// Undo angefordert (Ctrl+Z)
    UndoRequested,
    /// Redo angefordert (Ctrl+Y)
    RedoRequested,
}
