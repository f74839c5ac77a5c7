//! Replay-Skripte: aufgezeichnete Pointer-Ereignisse in lokalen Koordinaten.
//!
//! Format (JSON-Liste):
//! `[{"event":"down","x":10,"y":5}, {"event":"move","x":12,"y":9}, {"event":"up"}, {"event":"frame"}]`

use crate::app::EditorIntent;
use anyhow::{Context, Result};
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Ein Ereignis des Replay-Skripts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum ReplayEvent {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    /// Host zeichnet den ausstehenden Frame
    Frame,
}

impl ReplayEvent {
    /// Intent für Pointer-Ereignisse; `Frame` ist kein Intent.
    pub fn to_intent(self) -> Option<EditorIntent> {
        match self {
            Self::Down { x, y } => Some(EditorIntent::PointerPressed {
                local_pos: Vec2::new(x, y),
            }),
            Self::Move { x, y } => Some(EditorIntent::PointerMoved {
                local_pos: Vec2::new(x, y),
            }),
            Self::Up => Some(EditorIntent::PointerReleased),
            Self::Frame => None,
        }
    }
}

/// Parsed ein Replay-Skript aus einem JSON-String.
pub fn parse_replay_script(json: &str) -> Result<Vec<ReplayEvent>> {
    serde_json::from_str(json).context("Replay-Skript konnte nicht gelesen werden")
}

/// Lädt ein Replay-Skript aus einer Datei.
pub fn load_replay_script(path: &Path) -> Result<Vec<ReplayEvent>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Replay-Skript nicht lesbar: {}", path.display()))?;
    let events = parse_replay_script(&content)?;
    log::info!("{} Replay-Ereignisse geladen aus: {}", events.len(), path.display());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_event_kinds() {
        let events = parse_replay_script(
            r#"[{"event":"down","x":1,"y":2},{"event":"move","x":3.5,"y":4},{"event":"up"},{"event":"frame"}]"#,
        )
        .expect("Skript gültig");
        assert_eq!(
            events,
            vec![
                ReplayEvent::Down { x: 1.0, y: 2.0 },
                ReplayEvent::Move { x: 3.5, y: 4.0 },
                ReplayEvent::Up,
                ReplayEvent::Frame,
            ]
        );
        assert!(events[3].to_intent().is_none());
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(parse_replay_script(r#"[{"event":"wheel"}]"#).is_err());
    }
}
