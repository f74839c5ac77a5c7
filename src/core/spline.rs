//! Catmull-Rom → kubische Bézier-Konvertierung.
//!
//! Aus den Kontrollpunkten wird ein einziger zusammenhängender Pfad aus
//! kubischen Segmenten gebaut, der jeden Kontrollpunkt exakt trifft.
//! Die Handles eines Segments `p2 → p3` ergeben sich aus den Nachbarn
//! `p1`/`p4` (an den Enden auf den ersten/letzten Punkt geklemmt):
//!
//! ```text
//! c1 = p2 + (p3 - p1) / (6·tension)
//! c2 = p3 - (p4 - p2) / (6·tension)
//! ```

use glam::Vec2;
use std::fmt;

/// Ein kubisches Bézier-Segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: Vec2,
    pub c1: Vec2,
    pub c2: Vec2,
    pub to: Vec2,
}

impl CubicSegment {
    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    pub fn eval(&self, t: f32) -> Vec2 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.from + 3.0 * inv2 * t * self.c1 + 3.0 * inv * t2 * self.c2 + t2 * t * self.to
    }
}

/// Glatter Pfad durch alle Kontrollpunkte. Leer bei < 2 Kontrollpunkten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplinePath {
    start: Vec2,
    segments: Vec<CubicSegment>,
}

impl SplinePath {
    /// Degenerierter Pfad ohne Segmente (nichts zu zeichnen).
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true`, wenn der Pfad keine Segmente hat.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Startpunkt (bei leerem Pfad der Ursprung).
    pub fn start(&self) -> Vec2 {
        self.start
    }

    /// Kubische Segmente in Pfad-Reihenfolge.
    pub fn segments(&self) -> &[CubicSegment] {
        &self.segments
    }

    /// SVG-Pfadbeschreibung (`M … C …`). Leerer String bei leerem Pfad.
    pub fn to_svg_d(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SplinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "M {} {}", self.start.x, self.start.y)?;
        for seg in &self.segments {
            write!(
                f,
                " C {} {}, {} {}, {} {}",
                seg.c1.x, seg.c1.y, seg.c2.x, seg.c2.y, seg.to.x, seg.to.y
            )?;
        }
        Ok(())
    }
}

/// Baut den Catmull-Rom-Pfad durch `control_points`.
///
/// Nachbar-Indizes werden an den Rändern geklemmt statt über das Ende
/// hinaus zu lesen. Weniger als 2 Punkte ergeben einen leeren Pfad.
pub fn build_path(control_points: &[Vec2], tension: f32) -> SplinePath {
    if control_points.len() < 2 {
        return SplinePath::empty();
    }

    let f = 6.0 * tension;
    let last = control_points.len() - 1;
    let segments = (0..last)
        .map(|i| {
            let p1 = control_points[i.saturating_sub(1)];
            let p2 = control_points[i];
            let p3 = control_points[i + 1];
            let p4 = control_points[(i + 2).min(last)];
            CubicSegment {
                from: p2,
                c1: p2 + (p3 - p1) / f,
                c2: p3 - (p4 - p2) / f,
                to: p3,
            }
        })
        .collect();

    SplinePath {
        start: control_points[0],
        segments,
    }
}
