//! Reine Geometrie-Hilfen: Achsen-parallele Boxen und Winkel-Umrechnung.
//!
//! Layer-neutral: wird von `core`, `app` und `io` gleichermaßen genutzt.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Achsen-parallele Box in lokalen Editor-Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Erstellt eine Box aus Ursprung und Ausdehnung.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Erstellt eine Box aus Minimum- und Maximum-Ecke.
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Kleinste Box, die alle Punkte umschließt. `None` bei leerer Eingabe.
    pub fn enclosing(points: impl IntoIterator<Item = Vec2>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| (min.min(p), max.max(p)));
        Some(Self::from_min_max(min, max))
    }

    /// Linke obere Ecke.
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Rechte untere Ecke.
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    /// Breite und Höhe als Vektor.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Prüft, ob `p` innerhalb der Box liegt (Ränder inklusive).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Vergrößert die Box um `margin` auf allen vier Seiten.
    pub fn expanded(&self, margin: f32) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + margin * 2.0,
            self.height + margin * 2.0,
        )
    }

    /// Punkt an relativer Position (`u`, `v` ∈ [0, 1]) innerhalb der Box.
    pub fn point_at(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(self.x + u * self.width, self.y + v * self.height)
    }
}

/// Radiant → Grad.
pub fn to_degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

/// Entfaltet `current` relativ zum (bereits entfalteten) Vorgänger-Winkel (Grad).
///
/// Springt die Differenz über ±180°, werden ganze Umdrehungen abgezogen
/// bzw. addiert, bis sie wieder in [-180°, 180°] liegt.
pub fn unwrap_degrees(previous: f32, current: f32) -> f32 {
    let turns = ((current - previous) / 360.0).round();
    current - turns * 360.0
}

/// Einheits-Normale (Tangente um 90° gedreht). Null-Vektor bei Null-Tangente.
pub fn unit_normal(tangent: Vec2) -> Vec2 {
    tangent.perp().normalize_or_zero()
}
