//! Handler für Pointer-Drags, Unterteilung und Hover.

use crate::app::state::PointerTarget;
use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::HandleDirection;
use glam::Vec2;

/// Startet den Drag auf Punkt `index`.
///
/// Interpolierte Punkte werden dabei unterteilt und der neue Kontrollpunkt gezogen.
pub fn press_point(state: &mut EditorState, index: usize, local_pos: Vec2) {
    use_cases::editing::press(state, PointerTarget::Point(index), local_pos);
}

/// Startet Verschieben bzw. Skalieren der ganzen Form.
pub fn begin_shape_transform(state: &mut EditorState, direction: HandleDirection, local_pos: Vec2) {
    use_cases::editing::press(state, PointerTarget::Handle(direction), local_pos);
}

/// Zieht den aktiven Punkt bzw. die aktive Transformation nach.
pub fn drag_to(state: &mut EditorState, local_pos: Vec2) {
    use_cases::editing::drag_to(state, local_pos);
}

/// Aktualisiert die Hover-Position.
pub fn update_hover(state: &mut EditorState, local_pos: Vec2) {
    use_cases::editing::update_hover(state, local_pos);
}

/// Beendet den Drag.
pub fn end_drag(state: &mut EditorState) {
    use_cases::editing::release(state);
}
