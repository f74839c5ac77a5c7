//! Handler für die Kamera.

use crate::app::use_cases;
use crate::app::EditorState;

/// Verschiebt die Kamera um ein lokales Delta.
pub fn pan(state: &mut EditorState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt mit optionalem Fokuspunkt in Bildschirm-Koordinaten.
pub fn zoom(state: &mut EditorState, factor: f32, focus_screen: Option<glam::Vec2>) {
    use_cases::camera::zoom(state, factor, focus_screen);
}

/// Setzt die Kamera auf Default zurück.
pub fn reset_camera(state: &mut EditorState) {
    use_cases::camera::reset(state);
}
