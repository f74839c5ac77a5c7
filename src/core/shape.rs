//! Editierbare Kurve: geordnete Punktliste plus abgeleitete Bounding-Box.

use super::geometry::Rect;
use super::path_measure::{ArcLengthTable, PathMeasure};
use super::point::{CurvePoint, PointKind, ShapeId};
use super::snapshot::{PointSnapshot, ShapeSnapshot};
use super::spline::{build_path, SplinePath};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Parameter des Standard-Bogens für Kurven ohne Startpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcTemplate {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Bogenhöhe (Sagitta)
    pub height: f32,
    /// Anzahl der Punkte (wird auf eine ungerade Zahl ≥ 3 angehoben)
    pub count: usize,
}

impl Default for ArcTemplate {
    fn default() -> Self {
        Self {
            x: 100.0,
            y: 100.0,
            width: 400.0,
            height: 100.0,
            count: 5,
        }
    }
}

/// Erzeugt einen Kreisbogen über dem Rechteck `template`.
///
/// Gerade Indizes werden Kontrollpunkte, ungerade interpolierte Punkte;
/// `arc_fraction` ist der gleichmäßige Parameter `i / (count - 1)`.
pub fn arc_through_rect(template: &ArcTemplate) -> Vec<CurvePoint> {
    let count = template.count.max(3) | 1;
    let x1 = template.x;
    let x2 = template.x + template.width;
    let y2 = template.y + template.height;
    let chord = x2 - x1;
    let h = template.height;

    let kind_at = |i: usize| {
        if i % 2 == 0 {
            PointKind::Control
        } else {
            PointKind::Interpolated
        }
    };

    if h <= f32::EPSILON {
        // Flacher Bogen: gerade Linie auf der Unterkante
        return (0..count)
            .map(|i| {
                let t = i as f32 / (count - 1) as f32;
                CurvePoint {
                    position: Vec2::new(x1, y2).lerp(Vec2::new(x2, y2), t),
                    kind: kind_at(i),
                    arc_fraction: t,
                }
            })
            .collect();
    }

    let r = h / 2.0 + (chord * chord) / (8.0 * h);
    let center = Vec2::new((x1 + x2) / 2.0, y2 + r);
    let start_angle = (y2 - center.y).atan2(x1 - center.x);
    let end_angle = (y2 - center.y).atan2(x2 - center.x);

    (0..count)
        .map(|i| {
            let t = i as f32 / (count - 1) as f32;
            let angle = start_angle + t * (end_angle - start_angle);
            CurvePoint {
                position: center + r * Vec2::from_angle(angle),
                kind: kind_at(i),
                arc_fraction: t,
            }
        })
        .collect()
}

/// Eine editierbare Kurve (Membran-Kontur).
///
/// Die Reihenfolge der Punkte definiert den Pfad und ändert sich nur über
/// explizite Edit-Operationen.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveShape {
    id: ShapeId,
    points: Vec<CurvePoint>,
}

impl CurveShape {
    /// Erstellt eine Kurve; eine leere Punktliste erzeugt den Standard-Bogen.
    pub fn new(id: ShapeId, points: Vec<CurvePoint>, fallback: &ArcTemplate) -> Self {
        let points = if points.is_empty() {
            log::debug!("Shape {id}: keine Startpunkte, erzeuge Standard-Bogen");
            arc_through_rect(fallback)
        } else {
            points
        };
        Self { id, points }
    }

    /// Baut eine Kurve aus einem importierten Snapshot.
    ///
    /// Kontrollpunkte ohne `arc_fraction` erhalten ihre tatsächliche
    /// Bogenlängen-Position auf dem neu gebauten Pfad.
    pub fn from_snapshot(
        snapshot: ShapeSnapshot,
        fallback: &ArcTemplate,
        tension: f32,
        samples_per_segment: usize,
    ) -> Self {
        let points: Vec<CurvePoint> = snapshot
            .points
            .iter()
            .map(|p| CurvePoint {
                position: p.position(),
                kind: p.kind,
                arc_fraction: p.arc_fraction.unwrap_or(0.0),
            })
            .collect();
        let mut shape = Self::new(snapshot.id, points, fallback);

        let table = ArcLengthTable::new(&shape.build_path(tension), samples_per_segment);
        let mut vertex = 0;
        for (point, source) in shape.points.iter_mut().zip(&snapshot.points) {
            if !point.is_control() {
                continue;
            }
            if source.arc_fraction.is_none() {
                point.arc_fraction = table.fraction_at_vertex(vertex);
            }
            vertex += 1;
        }
        shape
    }

    /// Kennung der Kurve.
    pub fn id(&self) -> &ShapeId {
        &self.id
    }

    /// Alle Punkte in Pfad-Reihenfolge.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Anzahl aller Punkte (Kontroll- und interpolierte).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true`, wenn die Kurve keine Punkte hat.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Positionen aller Kontrollpunkte in Pfad-Reihenfolge.
    pub fn control_positions(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .filter(|p| p.is_control())
            .map(|p| p.position)
            .collect()
    }

    /// Anzahl der Kontrollpunkte.
    pub fn control_count(&self) -> usize {
        self.points.iter().filter(|p| p.is_control()).count()
    }

    /// Catmull-Rom-Pfad durch die Kontrollpunkte.
    pub fn build_path(&self, tension: f32) -> SplinePath {
        build_path(&self.control_positions(), tension)
    }

    /// Wandelt den interpolierten Punkt `index` in einen Kontrollpunkt um und
    /// fügt links und rechts je einen neuen interpolierten Punkt ein.
    ///
    /// Gibt den neuen Index des umgewandelten Punkts zurück (`index + 1`).
    /// Die Positionen der neuen Punkte sind Platzhalter bis zur nächsten
    /// Reprojektion.
    ///
    /// # Panics
    /// Wenn `index` kein innerer, interpolierter Punkt ist.
    pub fn subdivide(&mut self, index: usize) -> usize {
        assert!(
            index > 0 && index + 1 < self.points.len(),
            "subdivide: Index {index} ist kein innerer Punkt (len = {})",
            self.points.len()
        );
        let point = self.points[index];
        assert!(
            !point.is_control(),
            "subdivide: Punkt {index} ist bereits ein Kontrollpunkt"
        );

        let prev = self.points[index - 1];
        let next = self.points[index + 1];

        let before = CurvePoint::interpolated(
            prev.position.lerp(point.position, 0.5),
            (prev.arc_fraction + point.arc_fraction) / 2.0,
        );
        let promoted = CurvePoint::control(point.position, point.arc_fraction);
        let after = CurvePoint::interpolated(
            point.position.lerp(next.position, 0.5),
            (point.arc_fraction + next.arc_fraction) / 2.0,
        );

        self.points.splice(index..=index, [before, promoted, after]);

        log::debug!(
            "Shape {}: Punkt {index} (d = {:.4}) zu Kontrollpunkt befördert, {} Punkte",
            self.id,
            point.arc_fraction,
            self.points.len()
        );
        index + 1
    }

    /// Achsen-parallele Box über alle Kontrollpunkte (`None` ohne Kontrollpunkte).
    pub fn bounding_box(&self) -> Option<Rect> {
        Rect::enclosing(
            self.points
                .iter()
                .filter(|p| p.is_control())
                .map(|p| p.position),
        )
    }

    /// Bounding-Box um `padding` erweitert (Handle-Rahmen).
    pub fn padded_bounding_box(&self, padding: f32) -> Option<Rect> {
        self.bounding_box().map(|b| b.expanded(padding))
    }

    /// Setzt alle interpolierten Punkte neu auf den Pfad (an ihre `arc_fraction`).
    ///
    /// Die Fractions selbst bleiben unverändert. Ohne Pfad bleiben die
    /// Positionen unangetastet.
    pub fn reproject_interpolated(&mut self, measure: &impl PathMeasure) {
        if measure.is_empty() {
            return;
        }
        for point in self.points.iter_mut().filter(|p| !p.is_control()) {
            point.position = measure.point_at_fraction(point.arc_fraction);
        }
    }

    /// Setzt die Position eines einzelnen Punkts.
    ///
    /// # Panics
    /// Bei ungültigem Index.
    pub fn set_point_position(&mut self, index: usize, position: Vec2) {
        self.points[index].position = position;
    }

    /// Ersetzt alle Punkte durch `original`, deren Positionen mit `f` transformiert werden.
    ///
    /// Transformationen werden immer relativ zu einem festen Snapshot berechnet,
    /// damit sich Fehler über viele Move-Events nicht aufsummieren.
    pub fn transform_from(&mut self, original: &[CurvePoint], f: impl Fn(Vec2) -> Vec2) {
        self.points = original
            .iter()
            .map(|p| CurvePoint {
                position: f(p.position),
                ..*p
            })
            .collect();
    }

    /// Unabhängige, serialisierbare Kopie der Kurve.
    pub fn export_snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            id: self.id.clone(),
            points: self.points.iter().map(PointSnapshot::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::path_measure::DEFAULT_SAMPLES_PER_SEGMENT;
    use approx::assert_relative_eq;

    fn line_shape() -> CurveShape {
        CurveShape::new(
            ShapeId::new("test"),
            vec![
                CurvePoint::control(Vec2::new(0.0, 0.0), 0.0),
                CurvePoint::interpolated(Vec2::new(50.0, 0.0), 0.5),
                CurvePoint::control(Vec2::new(100.0, 0.0), 1.0),
            ],
            &ArcTemplate::default(),
        )
    }

    fn measure(shape: &CurveShape) -> ArcLengthTable {
        ArcLengthTable::new(&shape.build_path(1.0), DEFAULT_SAMPLES_PER_SEGMENT)
    }

    #[test]
    fn test_empty_points_generate_default_arc() {
        let shape = CurveShape::new(ShapeId::new("a"), vec![], &ArcTemplate::default());
        assert_eq!(shape.len(), 5);
        assert!(shape.points()[0].is_control());
        assert!(shape.points()[4].is_control());
        assert!(!shape.points()[1].is_control());
        assert_relative_eq!(shape.points()[1].arc_fraction, 0.25);
        // Scheitel des Bogens liegt mittig auf der Unterkante des Rechtecks
        let apex = shape.points()[2].position;
        assert_relative_eq!(apex.x, 300.0, epsilon = 1e-3);
        assert_relative_eq!(apex.y, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn test_even_arc_count_keeps_control_endpoints() {
        let template = ArcTemplate {
            count: 4,
            ..ArcTemplate::default()
        };
        let points = arc_through_rect(&template);
        assert_eq!(points.len(), 5);
        assert!(points.last().expect("Punkte vorhanden").is_control());
    }

    #[test]
    fn test_subdivide_promotes_and_inserts_neighbours() {
        let mut shape = line_shape();
        let before_pos = shape.points()[1].position;

        let new_index = shape.subdivide(1);

        assert_eq!(new_index, 2);
        assert_eq!(shape.len(), 5);
        let promoted = shape.points()[2];
        assert!(promoted.is_control());
        assert_eq!(promoted.position, before_pos);

        let left = shape.points()[1];
        let right = shape.points()[3];
        assert!(!left.is_control() && !right.is_control());
        assert!(left.arc_fraction > 0.0 && left.arc_fraction < 0.5);
        assert!(right.arc_fraction > 0.5 && right.arc_fraction < 1.0);
        assert_relative_eq!(left.arc_fraction, 0.25);
        assert_relative_eq!(right.arc_fraction, 0.75);
    }

    #[test]
    #[should_panic(expected = "bereits ein Kontrollpunkt")]
    fn test_subdivide_control_point_panics() {
        let mut shape = CurveShape::new(ShapeId::new("a"), vec![], &ArcTemplate::default());
        shape.subdivide(2);
    }

    #[test]
    #[should_panic(expected = "kein innerer Punkt")]
    fn test_subdivide_out_of_range_panics() {
        let mut shape = line_shape();
        shape.subdivide(7);
    }

    #[test]
    fn test_bounding_box_ignores_interpolated_points() {
        let shape = CurveShape::new(
            ShapeId::new("bbox"),
            vec![
                CurvePoint::control(Vec2::new(10.0, 20.0), 0.0),
                CurvePoint::interpolated(Vec2::new(500.0, -300.0), 0.5),
                CurvePoint::control(Vec2::new(30.0, 5.0), 1.0),
            ],
            &ArcTemplate::default(),
        );
        let bbox = shape.bounding_box().expect("Box vorhanden");
        assert_eq!(bbox, Rect::new(10.0, 5.0, 20.0, 15.0));
        assert_eq!(
            shape.padded_bounding_box(10.0),
            Some(Rect::new(0.0, -5.0, 40.0, 35.0))
        );
    }

    #[test]
    fn test_reprojection_is_idempotent() {
        let mut shape = CurveShape::new(ShapeId::new("a"), vec![], &ArcTemplate::default());
        let table = measure(&shape);
        shape.reproject_interpolated(&table);
        let first: Vec<Vec2> = shape.points().iter().map(|p| p.position).collect();
        shape.reproject_interpolated(&table);
        let second: Vec<Vec2> = shape.points().iter().map(|p| p.position).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_reprojection_keeps_fractions() {
        let mut shape = line_shape();
        shape.set_point_position(2, Vec2::new(200.0, 0.0));
        let table = measure(&shape);
        shape.reproject_interpolated(&table);
        let inter = shape.points()[1];
        assert_relative_eq!(inter.arc_fraction, 0.5);
        assert_relative_eq!(inter.position.x, 100.0, epsilon = 0.1);
    }

    #[test]
    fn test_reprojection_without_path_leaves_points() {
        let mut shape = CurveShape::new(
            ShapeId::new("single"),
            vec![
                CurvePoint::control(Vec2::new(1.0, 1.0), 0.0),
                CurvePoint::interpolated(Vec2::new(7.0, 7.0), 0.5),
            ],
            &ArcTemplate::default(),
        );
        let table = measure(&shape);
        shape.reproject_interpolated(&table);
        assert_eq!(shape.points()[1].position, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_export_snapshot_is_independent_copy() {
        let mut shape = line_shape();
        let snapshot = shape.export_snapshot();
        shape.set_point_position(0, Vec2::new(-5.0, -5.0));
        assert_eq!(snapshot.points[0].x, 0.0);
        assert_eq!(snapshot.points[1].arc_fraction, Some(0.5));
        assert_eq!(snapshot.points[0].arc_fraction, None);
    }

    #[test]
    fn test_from_snapshot_derives_control_fractions() {
        let snapshot = line_shape().export_snapshot();
        let shape = CurveShape::from_snapshot(
            snapshot,
            &ArcTemplate::default(),
            1.0,
            DEFAULT_SAMPLES_PER_SEGMENT,
        );
        assert_relative_eq!(shape.points()[0].arc_fraction, 0.0);
        assert_relative_eq!(shape.points()[1].arc_fraction, 0.5);
        assert_relative_eq!(shape.points()[2].arc_fraction, 1.0);
    }
}
