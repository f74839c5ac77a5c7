//! Datei-Ein-/Ausgabe: Snapshot-JSON, SVG-Export und Replay-Skripte.

pub mod replay;
pub mod snapshot;
pub mod svg;

pub use replay::{load_replay_script, parse_replay_script, ReplayEvent};
pub use snapshot::{load_snapshot, parse_snapshot, save_snapshot, write_snapshot};
pub use svg::{save_svg, write_svg_document};
