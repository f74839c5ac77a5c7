//! Punkt-Modell einer Kurve: Kontroll- und interpolierte Punkte.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Art eines Kurvenpunkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointKind {
    /// Vom Benutzer gesetzter Anker, den der Spline exakt trifft
    #[serde(rename = "control")]
    Control,
    /// Aus dem Pfad abgeleiteter Punkt an fester Bogenlängen-Position
    #[serde(rename = "inter")]
    Interpolated,
}

impl PointKind {
    /// `true` für Kontrollpunkte.
    pub fn is_control(self) -> bool {
        self == PointKind::Control
    }
}

/// Ein Punkt der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Aktuelle Position in lokalen Koordinaten
    pub position: Vec2,
    pub kind: PointKind,
    /// Normierte Bogenlänge ∈ [0, 1].
    ///
    /// Für interpolierte Punkte die Abtastposition auf dem Pfad; Kontrollpunkte
    /// behalten den Wert, den sie bei ihrer Entstehung hatten (Nachbar-Grenze
    /// beim Unterteilen).
    pub arc_fraction: f32,
}

impl CurvePoint {
    /// Erstellt einen Kontrollpunkt.
    pub fn control(position: Vec2, arc_fraction: f32) -> Self {
        Self {
            position,
            kind: PointKind::Control,
            arc_fraction,
        }
    }

    /// Erstellt einen interpolierten Punkt an `arc_fraction`.
    pub fn interpolated(position: Vec2, arc_fraction: f32) -> Self {
        Self {
            position,
            kind: PointKind::Interpolated,
            arc_fraction,
        }
    }

    /// `true` für Kontrollpunkte.
    pub fn is_control(&self) -> bool {
        self.kind.is_control()
    }
}

/// Opake Kennung einer Kurve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeId(String);

impl ShapeId {
    /// Übernimmt eine vom Aufrufer vergebene Kennung.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Erzeugt eine neue, zufällige Kennung (UUID v4).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Kennung als String.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
