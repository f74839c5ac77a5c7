//! Core-Domänentypen: Kurvenpunkte, Spline-Pfad, Bogenlängen-Messung, Orientierung, Handles.

pub mod camera;
pub mod geometry;
pub mod handle;
pub mod orientation;
pub mod path_measure;
/// Punktmodell der Kurve
///
/// - CurvePoint: Kontroll- oder interpolierter Punkt mit Bogen-Parameter
/// - ShapeId: stabile Identität einer Kurve
pub mod point;
pub mod shape;
pub mod snapshot;
pub mod spline;

pub use camera::Camera2D;
pub use geometry::{to_degrees, unit_normal, unwrap_degrees, Rect};
pub use handle::{handle_layout, hit_test_frame, HandleDirection, HandlePlacement, ShapeTransform};
pub use orientation::{sample_orientations, OrientationParams, OrientationSample, MAX_SAMPLES};
pub use path_measure::{ArcLengthTable, PathMeasure, DEFAULT_SAMPLES_PER_SEGMENT};
pub use point::{CurvePoint, PointKind, ShapeId};
pub use shape::{arc_through_rect, ArcTemplate, CurveShape};
pub use snapshot::{PointSnapshot, ShapeSnapshot, MAX_COORDINATE};
pub use spline::{build_path, CubicSegment, SplinePath};
