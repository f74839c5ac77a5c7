//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod redraw;
pub mod render_scene;
/// Editor State und Drag-Zustandsautomat
///
/// Dieses Modul verwaltet die bearbeitete Kurve, den laufenden Drag und die
/// daraus abgeleitete Geometrie.
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use command_log::CommandLog;
pub use controller::EditorController;
pub use events::{EditorCommand, EditorIntent};
pub use intent_mapping::hit_test;
pub use redraw::{FrameRequest, RedrawScheduler};
pub use render_scene::build as build_render_scene;
pub use state::{DragState, EditorState, PointerTarget, TransformSession};
