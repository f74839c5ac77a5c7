//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `io` bzw. dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use options::{BOX_PADDING, HOVER_MARGIN};
pub use render_scene::{GlyphInstance, HandleMarker, OverlayScene, PointMarker, RenderScene};
