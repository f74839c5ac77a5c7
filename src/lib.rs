//! Lipid-Kurven-Editor Library.
//! Kern des interaktiven Membran-Kurven-Editors als Library exportiert für Hosts und Tests.

pub mod app;
pub mod core;
pub mod io;
pub mod shared;

pub use app::{
    build_render_scene, DragState, EditorCommand, EditorController, EditorIntent, EditorState,
    FrameRequest, PointerTarget, RedrawScheduler,
};
pub use core::{
    ArcLengthTable, ArcTemplate, Camera2D, CurvePoint, CurveShape, HandleDirection,
    OrientationSample, PathMeasure, PointKind, Rect, ShapeId, ShapeSnapshot, SplinePath,
};
pub use io::{load_snapshot, save_snapshot, write_svg_document};
pub use shared::{EditorOptions, RenderScene};
