//! Drag-Zustandsautomat als reine Übergangsfunktionen `(Zustand, Ereignis) → Zustand`.
//!
//! Der aktuelle `DragState` wird per Wert übergeben und der Folgezustand
//! zurückgegeben. Mutationen betreffen ausschließlich die übergebene Kurve.

use crate::core::{CurvePoint, CurveShape, HandleDirection, Rect, ShapeTransform};
use glam::Vec2;

/// Ziel eines Pointer-Down-Ereignisses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Punkt-Marker mit Index in der Punktliste
    Point(usize),
    /// Resize-Handle oder Box-Körper (`Move`)
    Handle(HandleDirection),
    /// Kein Ziel getroffen
    None,
}

/// Zustand einer laufenden Form-Transformation.
///
/// Alle Berechnungen beziehen sich auf die beim Drag-Start eingefrorenen
/// Punkte und Box, nie auf die laufend veränderte Punktliste.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformSession {
    pub pointer_start: Vec2,
    pub original_points: Vec<CurvePoint>,
    pub original_box: Rect,
    pub direction: HandleDirection,
}

/// Interaktionszustand zwischen Pointer-Down und Pointer-Up.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingPoint {
        index: usize,
    },
    TransformingShape(TransformSession),
}

impl DragState {
    /// Gibt `true` zurück, solange ein Drag läuft.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Index des gezogenen Punkts (nur bei `DraggingPoint`).
    pub fn dragged_point(&self) -> Option<usize> {
        match self {
            Self::DraggingPoint { index } => Some(*index),
            _ => None,
        }
    }
}

/// Pointer-Down: startet einen Punkt-Drag oder eine Form-Transformation.
///
/// Ein interpolierter Punkt wird zuerst unterteilt; gezogen wird dann der
/// daraus beförderte Kontrollpunkt. Außerhalb von `Idle` bleibt der Zustand
/// unverändert.
pub fn pointer_down(
    current: DragState,
    target: PointerTarget,
    pointer: Vec2,
    shape: &mut CurveShape,
) -> DragState {
    if current.is_active() {
        log::debug!("Pointer-Down während eines laufenden Drags ignoriert");
        return current;
    }

    match target {
        PointerTarget::Point(index) => begin_point_drag(index, shape),
        PointerTarget::Handle(direction) => begin_transform(direction, pointer, shape),
        PointerTarget::None => DragState::Idle,
    }
}

fn begin_point_drag(index: usize, shape: &mut CurveShape) -> DragState {
    let Some(point) = shape.points().get(index).copied() else {
        log::warn!("Punkt-Index {index} außerhalb der Kurve ({} Punkte)", shape.len());
        return DragState::Idle;
    };

    if point.is_control() {
        log::debug!("Punkt-Drag gestartet: Index {index}");
        return DragState::DraggingPoint { index };
    }

    if index == 0 || index + 1 >= shape.len() {
        log::warn!("Interpolierter Randpunkt {index} kann nicht unterteilt werden");
        return DragState::Idle;
    }

    let promoted = shape.subdivide(index);
    log::debug!("Punkt {index} unterteilt, Drag auf Kontrollpunkt {promoted}");
    DragState::DraggingPoint { index: promoted }
}

fn begin_transform(direction: HandleDirection, pointer: Vec2, shape: &CurveShape) -> DragState {
    let Some(original_box) = shape.bounding_box() else {
        log::debug!("Keine Bounding-Box vorhanden, Transformation nicht möglich");
        return DragState::Idle;
    };

    log::debug!("Form-Transformation gestartet: Handle {direction}");
    DragState::TransformingShape(TransformSession {
        pointer_start: pointer,
        original_points: shape.points().to_vec(),
        original_box,
        direction,
    })
}

/// Pointer-Move: verschiebt den gezogenen Punkt bzw. transformiert die Form.
///
/// Kontrollpunkte folgen dem Pointer direkt, ohne Bindung an den Pfad.
pub fn pointer_move(current: DragState, pointer: Vec2, shape: &mut CurveShape) -> DragState {
    match &current {
        DragState::Idle => {}
        DragState::DraggingPoint { index } => {
            if *index < shape.len() {
                shape.set_point_position(*index, pointer);
            }
        }
        DragState::TransformingShape(session) => {
            let transform = ShapeTransform::from_drag(
                session.direction,
                &session.original_box,
                pointer - session.pointer_start,
            );
            shape.transform_from(&session.original_points, |p| transform.apply(p));
        }
    }
    current
}

/// Pointer-Up: beendet jeden Drag bedingungslos.
///
/// Die zuletzt gesetzten Positionen bleiben bestehen.
pub fn pointer_up(current: DragState) -> DragState {
    if current.is_active() {
        log::debug!("Drag beendet");
    }
    DragState::Idle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcTemplate, PointKind, ShapeId};

    fn three_controls() -> CurveShape {
        CurveShape::new(
            ShapeId::new("drag"),
            vec![
                CurvePoint::control(Vec2::new(0.0, 0.0), 0.0),
                CurvePoint::control(Vec2::new(10.0, 0.0), 0.5),
                CurvePoint::control(Vec2::new(20.0, 0.0), 1.0),
            ],
            &ArcTemplate::default(),
        )
    }

    #[test]
    fn test_first_point_is_draggable() {
        let mut shape = three_controls();
        let state = pointer_down(
            DragState::Idle,
            PointerTarget::Point(0),
            Vec2::ZERO,
            &mut shape,
        );
        assert_eq!(state, DragState::DraggingPoint { index: 0 });

        let state = pointer_move(state, Vec2::new(-3.0, 4.0), &mut shape);
        assert_eq!(shape.points()[0].position, Vec2::new(-3.0, 4.0));
        assert_eq!(pointer_up(state), DragState::Idle);
    }

    #[test]
    fn test_interpolated_point_is_subdivided_on_press() {
        let mut shape = CurveShape::new(
            ShapeId::new("drag"),
            vec![],
            &ArcTemplate::default(),
        );
        let before = shape.len();
        let state = pointer_down(
            DragState::Idle,
            PointerTarget::Point(1),
            Vec2::ZERO,
            &mut shape,
        );
        assert_eq!(state, DragState::DraggingPoint { index: 2 });
        assert_eq!(shape.len(), before + 2);
        assert_eq!(shape.points()[2].kind, PointKind::Control);
    }

    #[test]
    fn test_move_handle_translates_relative_to_snapshot() {
        let mut shape = three_controls();
        let start = Vec2::new(10.0, 0.0);
        let mut state = pointer_down(
            DragState::Idle,
            PointerTarget::Handle(HandleDirection::Move),
            start,
            &mut shape,
        );
        // Mehrere Moves dürfen sich nicht aufsummieren
        for step in 1..=5 {
            state = pointer_move(state, start + Vec2::splat(step as f32), &mut shape);
        }
        let positions: Vec<Vec2> = shape.points().iter().map(|p| p.position).collect();
        assert_eq!(
            positions,
            vec![
                Vec2::new(5.0, 5.0),
                Vec2::new(15.0, 5.0),
                Vec2::new(25.0, 5.0)
            ]
        );
        assert!(state.is_active());
    }

    #[test]
    fn test_press_while_dragging_keeps_state() {
        let mut shape = three_controls();
        let dragging = DragState::DraggingPoint { index: 1 };
        let next = pointer_down(
            dragging.clone(),
            PointerTarget::Handle(HandleDirection::E),
            Vec2::ZERO,
            &mut shape,
        );
        assert_eq!(next, dragging);
    }

    #[test]
    fn test_out_of_range_point_stays_idle() {
        let mut shape = three_controls();
        let state = pointer_down(
            DragState::Idle,
            PointerTarget::Point(42),
            Vec2::ZERO,
            &mut shape,
        );
        assert_eq!(state, DragState::Idle);
        assert_eq!(shape.len(), 3);
    }

    #[test]
    fn test_pointer_up_from_transform_resets() {
        let mut shape = three_controls();
        let state = pointer_down(
            DragState::Idle,
            PointerTarget::Handle(HandleDirection::SE),
            Vec2::new(20.0, 0.0),
            &mut shape,
        );
        assert!(matches!(state, DragState::TransformingShape(_)));
        assert_eq!(pointer_up(state), DragState::Idle);
    }
}
