//! Editor Controller für zentrale Event-Verarbeitung.

use super::redraw::FrameRequest;
use super::render_scene;
use super::{EditorCommand, EditorIntent, EditorState};
use crate::shared::RenderScene;

/// Orchestriert Host-Events und Use-Cases auf den EditorState.
#[derive(Default)]
pub struct EditorController;

impl EditorController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut EditorState,
        intent: EditorIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &EditorState, intent: EditorIntent) -> Vec<EditorCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem EditorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut EditorState,
        command: EditorCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Pointer ===
            EditorCommand::BeginPointDrag { index, local_pos }
            | EditorCommand::SubdivideAndDrag { index, local_pos } => {
                handlers::pointer::press_point(state, index, local_pos)
            }
            EditorCommand::BeginShapeTransform {
                direction,
                local_pos,
            } => handlers::pointer::begin_shape_transform(state, direction, local_pos),
            EditorCommand::DragPointTo { local_pos }
            | EditorCommand::TransformShapeTo { local_pos } => {
                handlers::pointer::drag_to(state, local_pos)
            }
            EditorCommand::UpdateHover { local_pos } => {
                handlers::pointer::update_hover(state, local_pos)
            }
            EditorCommand::EndDrag => handlers::pointer::end_drag(state),

            // === Kurve & Optionen ===
            EditorCommand::LoadShape { snapshot } => handlers::shape::load(state, snapshot)?,
            EditorCommand::ApplyOptions { options } => {
                handlers::shape::apply_options(state, options)?
            }

            // === Kamera ===
            EditorCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            EditorCommand::ZoomCamera {
                factor,
                focus_screen,
            } => handlers::view::zoom(state, factor, focus_screen),
            EditorCommand::ResetCamera => handlers::view::reset_camera(state),
        }

        Ok(())
    }

    /// Schließt den angeforderten Frame ab und liefert die Szene des aktuellen Zustands.
    ///
    /// Gibt `None` zurück, wenn `frame` nicht (mehr) aussteht.
    pub fn handle_frame(
        &mut self,
        state: &mut EditorState,
        frame: FrameRequest,
    ) -> Option<RenderScene> {
        if !state.redraw.complete(frame) {
            log::trace!("Veralteter Frame {} verworfen", frame.id());
            return None;
        }
        Some(self.build_render_scene(state))
    }

    /// Baut die Render-Szene für den aktuellen Frame.
    pub fn build_render_scene(&self, state: &EditorState) -> RenderScene {
        render_scene::build(state)
    }
}
