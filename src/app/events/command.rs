use crate::core::{HandleDirection, ShapeSnapshot};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum EditorCommand {
    /// Drag eines Kontrollpunkts starten
    BeginPointDrag { index: usize, local_pos: glam::Vec2 },
    /// Interpolierten Punkt unterteilen und den neuen Kontrollpunkt ziehen
    SubdivideAndDrag { index: usize, local_pos: glam::Vec2 },
    /// Verschieben/Skalieren der Form über ein Handle starten
    BeginShapeTransform {
        direction: HandleDirection,
        local_pos: glam::Vec2,
    },
    /// Gezogenen Punkt nachführen
    DragPointTo { local_pos: glam::Vec2 },
    /// Laufende Form-Transformation nachführen
    TransformShapeTo { local_pos: glam::Vec2 },
    /// Hover-Position aktualisieren (Overlay-Sichtbarkeit)
    UpdateHover { local_pos: glam::Vec2 },
    /// Drag beenden
    EndDrag,
    /// Kurve aus Snapshot ersetzen
    LoadShape { snapshot: ShapeSnapshot },
    /// Laufzeit-Optionen übernehmen
    ApplyOptions { options: EditorOptions },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        factor: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Kamera zurücksetzen
    ResetCamera,
}
