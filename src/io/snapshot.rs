//! Snapshot-Export und -Import als JSON.

use crate::core::ShapeSnapshot;
use anyhow::{Context, Result};
use std::path::Path;

/// Parsed und validiert einen Snapshot aus einem JSON-String.
pub fn parse_snapshot(json: &str) -> Result<ShapeSnapshot> {
    let snapshot: ShapeSnapshot =
        serde_json::from_str(json).context("Snapshot-JSON konnte nicht gelesen werden")?;
    snapshot.validate()?;
    Ok(snapshot)
}

/// Serialisiert einen Snapshot als formatiertes JSON.
pub fn write_snapshot(snapshot: &ShapeSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Snapshot konnte nicht serialisiert werden")
}

/// Lädt einen Snapshot aus einer Datei.
pub fn load_snapshot(path: &Path) -> Result<ShapeSnapshot> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Snapshot-Datei nicht lesbar: {}", path.display()))?;
    let snapshot =
        parse_snapshot(&content).with_context(|| format!("Ungültiger Snapshot: {}", path.display()))?;
    log::info!(
        "Snapshot {} geladen aus: {} ({} Punkte)",
        snapshot.id,
        path.display(),
        snapshot.points.len()
    );
    Ok(snapshot)
}

/// Speichert einen Snapshot als JSON-Datei.
pub fn save_snapshot(snapshot: &ShapeSnapshot, path: &Path) -> Result<()> {
    let content = write_snapshot(snapshot)?;
    std::fs::write(path, content)
        .with_context(|| format!("Snapshot-Datei nicht schreibbar: {}", path.display()))?;
    log::info!("Snapshot gespeichert nach: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArcTemplate, CurveShape, PointKind, ShapeId};

    #[test]
    fn test_parse_rejects_interpolated_endpoint() {
        let json = r#"{"id":"x","points":[
            {"x":0,"y":0,"kind":"inter","arc_fraction":0.0},
            {"x":10,"y":0,"kind":"control"}
        ]}"#;
        assert!(parse_snapshot(json).is_err());
    }

    #[test]
    fn test_parse_accepts_minimal_snapshot() {
        let json = r#"{"id":"membrane-1","points":[
            {"x":0,"y":0,"kind":"control"},
            {"x":5,"y":0,"kind":"inter","arc_fraction":0.5},
            {"x":10,"y":0,"kind":"control"}
        ]}"#;
        let snapshot = parse_snapshot(json).expect("Snapshot gültig");
        assert_eq!(snapshot.id.as_str(), "membrane-1");
        assert_eq!(snapshot.points[1].kind, PointKind::Interpolated);
        assert_eq!(snapshot.points[1].arc_fraction, Some(0.5));
    }

    #[test]
    fn test_save_and_load_file() {
        let shape = CurveShape::new(ShapeId::new("file"), vec![], &ArcTemplate::default());
        let snapshot = shape.export_snapshot();

        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("shape.json");
        save_snapshot(&snapshot, &path).expect("Speichern erfolgreich");

        let loaded = load_snapshot(&path).expect("Laden erfolgreich");
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let err = load_snapshot(Path::new("/nonexistent/shape.json")).expect_err("Fehler erwartet");
        assert!(format!("{err:#}").contains("/nonexistent/shape.json"));
    }
}
