//! Serialisierbare, unabhängige Kopie einer Kurve.
//!
//! Format: `{ "id": …, "points": [{ "x", "y", "kind", "arc_fraction"? }] }`.
//! `kind` ist `"control"` oder `"inter"`; `arc_fraction` fehlt bei Kontrollpunkten.

use super::point::{CurvePoint, PointKind, ShapeId};
use anyhow::{bail, ensure};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Betragsgrenze importierter Koordinaten. Größere Werte lassen die
/// Bogenlängen-Messung in `f32` überlaufen.
pub const MAX_COORDINATE: f32 = 1.0e9;

/// Ein exportierter Punkt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub x: f32,
    pub y: f32,
    pub kind: PointKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arc_fraction: Option<f32>,
}

impl From<&CurvePoint> for PointSnapshot {
    fn from(point: &CurvePoint) -> Self {
        Self {
            x: point.position.x,
            y: point.position.y,
            kind: point.kind,
            arc_fraction: (!point.is_control()).then_some(point.arc_fraction),
        }
    }
}

impl PointSnapshot {
    /// Position als Vektor.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Exportierte Kurve. Besitzt ihre Daten vollständig (kein Aliasing zur Live-Liste).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub id: ShapeId,
    pub points: Vec<PointSnapshot>,
}

impl ShapeSnapshot {
    /// Prüft die Struktur-Invarianten eines importierten Snapshots.
    ///
    /// Eine leere Punktliste ist gültig (erzeugt den Standard-Bogen).
    pub fn validate(&self) -> anyhow::Result<()> {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return Ok(());
        };
        ensure!(
            first.kind.is_control() && last.kind.is_control(),
            "Erster und letzter Punkt müssen Kontrollpunkte sein (Shape {})",
            self.id
        );
        for (i, p) in self.points.iter().enumerate() {
            ensure!(
                p.x.is_finite() && p.y.is_finite(),
                "Punkt {i} hat keine endliche Position"
            );
            ensure!(
                p.x.abs() <= MAX_COORDINATE && p.y.abs() <= MAX_COORDINATE,
                "Punkt {i} liegt außerhalb von ±{MAX_COORDINATE}"
            );
            match (p.kind, p.arc_fraction) {
                (PointKind::Interpolated, None) => {
                    bail!("Interpolierter Punkt {i} ohne arc_fraction")
                }
                (_, Some(f)) if !(0.0..=1.0).contains(&f) => {
                    bail!("arc_fraction {f} von Punkt {i} liegt nicht in [0, 1]")
                }
                _ => {}
            }
        }
        Ok(())
    }
}
