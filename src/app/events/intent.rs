use crate::app::state::PointerTarget;
use crate::core::ShapeSnapshot;
use crate::shared::EditorOptions;

/// Editor-Intents.
/// Intents sind Eingaben des Hosts ohne direkte Mutationslogik;
/// alle Positionen liegen bereits im lokalen Koordinatensystem.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Pointer gedrückt, Ziel wird per Hit-Test ermittelt
    PointerPressed { local_pos: glam::Vec2 },
    /// Pointer auf einem vom Host bereits aufgelösten Ziel gedrückt
    PointerPressedOn {
        target: PointerTarget,
        local_pos: glam::Vec2,
    },
    /// Pointer bewegt
    PointerMoved { local_pos: glam::Vec2 },
    /// Pointer losgelassen
    PointerReleased,
    /// Kurve aus Snapshot laden
    ShapeLoaded { snapshot: ShapeSnapshot },
    /// Optionen wurden geändert
    OptionsChanged { options: EditorOptions },
    /// Kamera um Delta verschieben (lokale Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt in Bildschirm-Koordinaten)
    CameraZoom {
        factor: f32,
        focus_screen: Option<glam::Vec2>,
    },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
}
