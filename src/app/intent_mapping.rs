//! Mapping von Host-Intents auf mutierende Editor-Commands.

use super::state::{DragState, PointerTarget};
use super::{EditorCommand, EditorIntent, EditorState};
use crate::core::hit_test_frame;
use glam::Vec2;

/// Ermittelt das Ziel unter `local_pos`.
///
/// Punkt-Marker haben Vorrang (zuletzt gezeichnet gewinnt), danach Handles
/// und Box-Körper, diese jedoch nur bei sichtbarem Overlay.
pub fn hit_test(state: &EditorState, local_pos: Vec2) -> PointerTarget {
    let radius = state.options.point_hit_radius;
    if let Some(index) = state
        .shape
        .points()
        .iter()
        .rposition(|p| p.position.distance(local_pos) <= radius)
    {
        return PointerTarget::Point(index);
    }

    if !state.overlay_visible_at(Some(local_pos)) {
        return PointerTarget::None;
    }

    state
        .padded_box()
        .and_then(|frame| hit_test_frame(&frame, local_pos, state.options.handle_hit_radius))
        .map_or(PointerTarget::None, PointerTarget::Handle)
}

/// Übersetzt einen `EditorIntent` in eine Sequenz ausführbarer `EditorCommand`s.
pub fn map_intent_to_commands(state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
    match intent {
        EditorIntent::PointerPressed { local_pos } => {
            press_commands(state, hit_test(state, local_pos), local_pos)
        }
        EditorIntent::PointerPressedOn { target, local_pos } => {
            press_commands(state, target, local_pos)
        }
        EditorIntent::PointerMoved { local_pos } => {
            let mut commands = Vec::with_capacity(2);
            match state.drag {
                DragState::Idle => {}
                DragState::DraggingPoint { .. } => {
                    commands.push(EditorCommand::DragPointTo { local_pos })
                }
                DragState::TransformingShape(_) => {
                    commands.push(EditorCommand::TransformShapeTo { local_pos })
                }
            }
            commands.push(EditorCommand::UpdateHover { local_pos });
            commands
        }
        EditorIntent::PointerReleased => vec![EditorCommand::EndDrag],
        EditorIntent::ShapeLoaded { snapshot } => vec![EditorCommand::LoadShape { snapshot }],
        EditorIntent::OptionsChanged { options } => vec![EditorCommand::ApplyOptions { options }],
        EditorIntent::CameraPan { delta } => vec![EditorCommand::PanCamera { delta }],
        EditorIntent::CameraZoom {
            factor,
            focus_screen,
        } => vec![EditorCommand::ZoomCamera {
            factor,
            focus_screen,
        }],
        EditorIntent::ResetCameraRequested => vec![EditorCommand::ResetCamera],
    }
}

fn press_commands(state: &EditorState, target: PointerTarget, local_pos: Vec2) -> Vec<EditorCommand> {
    if state.drag.is_active() {
        log::debug!("Pointer-Down während laufendem Drag ignoriert");
        return Vec::new();
    }

    match target {
        PointerTarget::Point(index) => match state.shape.points().get(index) {
            Some(point) if point.is_control() => {
                vec![EditorCommand::BeginPointDrag { index, local_pos }]
            }
            Some(_) => vec![EditorCommand::SubdivideAndDrag { index, local_pos }],
            None => {
                log::warn!("Pointer-Down auf unbekannten Punkt {index}");
                Vec::new()
            }
        },
        PointerTarget::Handle(direction) => {
            vec![EditorCommand::BeginShapeTransform {
                direction,
                local_pos,
            }]
        }
        PointerTarget::None => Vec::new(),
    }
}
