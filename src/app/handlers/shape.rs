//! Handler für Laden der Kurve und Optionen.

use crate::app::use_cases;
use crate::app::EditorState;
use crate::core::ShapeSnapshot;
use crate::shared::EditorOptions;

/// Lädt eine Kurve aus einem Snapshot und propagiert Validierungsfehler.
pub fn load(state: &mut EditorState, snapshot: ShapeSnapshot) -> anyhow::Result<()> {
    use_cases::editing::load_shape(state, snapshot)
}

/// Übernimmt geänderte Optionen und propagiert Validierungsfehler.
pub fn apply_options(state: &mut EditorState, options: EditorOptions) -> anyhow::Result<()> {
    use_cases::editing::apply_options(state, options)
}
