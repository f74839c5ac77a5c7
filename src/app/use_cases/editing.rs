//! Use-Cases für die direkte Manipulation der Kurve.

use crate::app::state::{pointer_down, pointer_move, pointer_up, PointerTarget};
use crate::app::EditorState;
use crate::core::{CurveShape, ShapeSnapshot};
use crate::shared::EditorOptions;
use anyhow::Context;
use glam::Vec2;

use super::geometry::refresh;

/// Startet einen Drag auf `target` (Punkt oder Handle).
///
/// Eine Unterteilung beim Drücken auf einen interpolierten Punkt verändert
/// die Kurve sofort, daher wird die Geometrie in diesem Fall neu berechnet.
pub fn press(state: &mut EditorState, target: PointerTarget, local_pos: Vec2) {
    let len_before = state.shape.len();
    let current = std::mem::take(&mut state.drag);
    state.drag = pointer_down(current, target, local_pos, &mut state.shape);

    if state.shape.len() != len_before {
        refresh(state);
    } else if state.drag.is_active() {
        // Overlay-Sichtbarkeit hat sich geändert
        state.redraw.request();
    }
}

/// Führt den laufenden Drag zur Pointer-Position `local_pos` nach.
pub fn drag_to(state: &mut EditorState, local_pos: Vec2) {
    if !state.drag.is_active() {
        return;
    }
    let current = std::mem::take(&mut state.drag);
    state.drag = pointer_move(current, local_pos, &mut state.shape);
    refresh(state);
}

/// Beendet den laufenden Drag.
pub fn release(state: &mut EditorState) {
    let was_active = state.drag.is_active();
    let current = std::mem::take(&mut state.drag);
    state.drag = pointer_up(current);
    if was_active {
        state.redraw.request();
    }
}

/// Aktualisiert die Hover-Position; fordert einen Frame nur bei Sichtbarkeitswechsel an.
pub fn update_hover(state: &mut EditorState, local_pos: Vec2) {
    let was_visible = state.overlay_visible();
    state.hover.pointer = Some(local_pos);
    if state.overlay_visible() != was_visible {
        log::trace!("Overlay-Sichtbarkeit gewechselt: {}", !was_visible);
        state.redraw.request();
    }
}

/// Ersetzt die Kurve durch einen importierten Snapshot.
pub fn load_shape(state: &mut EditorState, snapshot: ShapeSnapshot) -> anyhow::Result<()> {
    snapshot
        .validate()
        .with_context(|| format!("Snapshot {} ist ungültig", snapshot.id))?;

    let shape = CurveShape::from_snapshot(
        snapshot,
        &state.options.default_arc,
        state.options.tension,
        state.options.arc_samples_per_segment,
    );
    log::debug!("Kurve {} geladen: {} Punkte", shape.id(), shape.len());

    state.shape = shape;
    state.drag = pointer_up(std::mem::take(&mut state.drag));
    refresh(state);
    Ok(())
}

/// Übernimmt neue Laufzeit-Optionen und berechnet die Geometrie neu.
///
/// Ungültige Optionen werden abgewiesen, die bisherigen bleiben aktiv.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    options.validate().context("Optionen wurden nicht übernommen")?;
    state.options = options;
    refresh(state);
    Ok(())
}
