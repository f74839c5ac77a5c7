//! Editor State — zentrale Datenhaltung.

mod drag;

pub use drag::{pointer_down, pointer_move, pointer_up, DragState, PointerTarget, TransformSession};

use super::redraw::RedrawScheduler;
use super::CommandLog;
use crate::core::{
    ArcLengthTable, Camera2D, CurveShape, OrientationSample, Rect, ShapeId, SplinePath,
};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Aus der Kurve abgeleitete, nach jeder Mutation neu berechnete Geometrie.
///
/// Wird ausschließlich als Ganzes ersetzt, Renderer sehen nie einen halb
/// aktualisierten Zustand.
#[derive(Debug, Clone)]
pub struct DerivedGeometry {
    /// Catmull-Rom-Pfad durch die Kontrollpunkte
    pub path: SplinePath,
    /// Bogenlängen-Messung des Pfads
    pub measure: ArcLengthTable,
    /// Bounding-Box der Kontrollpunkte
    pub bounding_box: Option<Rect>,
    /// Orientierungs-Samples für die Glyph-Platzierung
    pub samples: Vec<OrientationSample>,
}

impl Default for DerivedGeometry {
    fn default() -> Self {
        let path = SplinePath::empty();
        let measure = ArcLengthTable::new(&path, 1);
        Self {
            path,
            measure,
            bounding_box: None,
            samples: Vec::new(),
        }
    }
}

/// Hover-Zustand des Pointers im Idle-Betrieb.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HoverState {
    /// Letzte bekannte Pointer-Position (lokale Koordinaten)
    pub pointer: Option<Vec2>,
}

/// Hauptzustand des Editors (eine Kurve pro Editor).
pub struct EditorState {
    /// Die bearbeitete Kurve
    pub shape: CurveShape,
    /// Laufender Drag
    pub drag: DragState,
    /// Abgeleitete Geometrie (Pfad, Messung, Box, Samples)
    pub derived: DerivedGeometry,
    /// Hover-Zustand für die Overlay-Sichtbarkeit
    pub hover: HoverState,
    /// 2D-Kamera des Hosts
    pub camera: Camera2D,
    /// Redraw-Koaleszenz
    pub redraw: RedrawScheduler,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
}

impl EditorState {
    /// Erstellt einen Editor mit dem Standard-Bogen.
    pub fn new(options: EditorOptions) -> Self {
        let options = options.or_default_if_invalid();
        let shape = CurveShape::new(ShapeId::generate(), Vec::new(), &options.default_arc);
        Self::with_shape(shape, options)
    }

    /// Erstellt einen Editor für eine bestehende Kurve.
    ///
    /// Die abgeleitete Geometrie wird sofort berechnet und ein erster Frame angefordert.
    /// Ungültige Optionen werden durch die Standardwerte ersetzt.
    pub fn with_shape(shape: CurveShape, options: EditorOptions) -> Self {
        let options = options.or_default_if_invalid();
        let mut state = Self {
            shape,
            drag: DragState::Idle,
            derived: DerivedGeometry::default(),
            hover: HoverState::default(),
            camera: Camera2D::new(),
            redraw: RedrawScheduler::new(),
            command_log: CommandLog::new(),
            options,
        };
        super::use_cases::geometry::refresh(&mut state);
        state
    }

    /// Gepolsterte Bounding-Box (Handle-Rahmen).
    pub fn padded_box(&self) -> Option<Rect> {
        self.derived
            .bounding_box
            .map(|b| b.expanded(self.options.padding))
    }

    /// Gibt zurück, ob das Overlay bei Pointer-Position `pointer` sichtbar ist.
    ///
    /// Sichtbar während eines Drags oder solange der Pointer im Handle-Rahmen
    /// plus `hover_margin` liegt.
    pub fn overlay_visible_at(&self, pointer: Option<Vec2>) -> bool {
        if self.drag.is_active() {
            return true;
        }
        match (self.derived.bounding_box, pointer) {
            (Some(bbox), Some(pos)) => bbox.expanded(self.options.hover_distance()).contains(pos),
            _ => false,
        }
    }

    /// Overlay-Sichtbarkeit für die letzte bekannte Pointer-Position.
    pub fn overlay_visible(&self) -> bool {
        self.overlay_visible_at(self.hover.pointer)
    }

    /// Gibt die Anzahl der Punkte zurück (für Host-Anzeige)
    pub fn point_count(&self) -> usize {
        self.shape.len()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(EditorOptions::default())
    }
}
