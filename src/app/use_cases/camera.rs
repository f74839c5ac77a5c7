//! Use-Case-Funktionen für die Kamera des Hosts.

use crate::app::EditorState;
use glam::Vec2;

/// Verschiebt die Kamera um ein Delta in lokalen Einheiten.
pub fn pan(state: &mut EditorState, delta: Vec2) {
    state.camera.pan(delta);
    state.redraw.request();
}

/// Zoomt um `factor`, optional mit festem Fokuspunkt in Bildschirm-Koordinaten.
pub fn zoom(state: &mut EditorState, factor: f32, focus_screen: Option<Vec2>) {
    match focus_screen {
        Some(focus) => state.camera.zoom_towards(factor, focus),
        None => state.camera.zoom_by(factor),
    }
    state.redraw.request();
}

/// Setzt die Kamera auf Default zurück.
pub fn reset(state: &mut EditorState) {
    state.camera = Default::default();
    state.redraw.request();
}
