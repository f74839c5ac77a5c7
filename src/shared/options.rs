//! Zentrale Konfiguration für den Lipid-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::orientation::{
    OrientationParams, DEFAULT_GLYPH_LAYER_GAP, DEFAULT_GLYPH_OFFSET, DEFAULT_STEP,
    DEFAULT_TANGENT_DELTA,
};
use crate::core::path_measure::DEFAULT_SAMPLES_PER_SEGMENT;
use crate::core::shape::ArcTemplate;
use anyhow::ensure;
use serde::{Deserialize, Serialize};

// ── Bounding-Box ───────────────────────────────────────────────────

/// Abstand zwischen Bounding-Box und Handle-Rahmen (lokale Einheiten).
pub const BOX_PADDING: f32 = 10.0;
/// Zusätzlicher Hover-Abstand um den Handle-Rahmen, in dem das Overlay sichtbar wird.
pub const HOVER_MARGIN: f32 = 10.0;

// ── Spline ─────────────────────────────────────────────────────────

/// Catmull-Rom-Spannung (1.0 = klassisches Catmull-Rom).
pub const SPLINE_TENSION: f32 = 1.0;

// ── Hit-Testing ────────────────────────────────────────────────────

/// Radius der Punkt-Marker (Darstellung und Hitbox).
pub const POINT_HIT_RADIUS: f32 = 5.0;
/// Greifradius der Resize-Handles.
pub const HANDLE_HIT_RADIUS: f32 = 6.0;

// ── Grenzen ────────────────────────────────────────────────────────

/// Höchstzahl an Stützstellen pro Segment für die Bogenlängen-Tabelle.
pub const MAX_ARC_SAMPLES_PER_SEGMENT: usize = 4096;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `lipid_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Bounding-Box ────────────────────────────────────────────
    /// Abstand zwischen Bounding-Box und Handle-Rahmen
    pub padding: f32,
    /// Hover-Abstand um den Handle-Rahmen
    pub hover_margin: f32,

    // ── Spline ──────────────────────────────────────────────────
    /// Catmull-Rom-Spannung
    pub tension: f32,
    /// Stützstellen pro kubischem Segment für die Bogenlängen-Tabelle
    pub arc_samples_per_segment: usize,

    // ── Orientierung ────────────────────────────────────────────
    /// Abtastabstand entlang der Kurve
    pub orientation_step: f32,
    /// Bogenlängen-Delta für die Tangenten-Differenz
    pub tangent_delta: f32,
    /// Signierter Normalen-Abstand der inneren Glyph-Lage
    pub glyph_offset: f32,
    /// Zusätzlicher Abstand der äußeren Glyph-Lage
    pub glyph_layer_gap: f32,

    // ── Hit-Testing ─────────────────────────────────────────────
    /// Radius der Punkt-Marker
    pub point_hit_radius: f32,
    /// Greifradius der Resize-Handles
    pub handle_hit_radius: f32,

    // ── Start-Form ──────────────────────────────────────────────
    /// Bogen für Kurven ohne Startpunkte
    pub default_arc: ArcTemplate,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            padding: BOX_PADDING,
            hover_margin: HOVER_MARGIN,

            tension: SPLINE_TENSION,
            arc_samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,

            orientation_step: DEFAULT_STEP,
            tangent_delta: DEFAULT_TANGENT_DELTA,
            glyph_offset: DEFAULT_GLYPH_OFFSET,
            glyph_layer_gap: DEFAULT_GLYPH_LAYER_GAP,

            point_hit_radius: POINT_HIT_RADIUS,
            handle_hit_radius: HANDLE_HIT_RADIUS,

            default_arc: ArcTemplate::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.or_default_if_invalid()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Prüft die Werte, die die Geometrie-Berechnung voraussetzt.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.tension.is_finite() && self.tension > 0.0,
            "tension muss positiv sein (ist {})",
            self.tension
        );
        ensure!(
            self.orientation_step.is_finite() && self.orientation_step > 0.0,
            "orientation_step muss positiv sein (ist {})",
            self.orientation_step
        );
        ensure!(
            self.tangent_delta.is_finite() && self.tangent_delta > 0.0,
            "tangent_delta muss positiv sein (ist {})",
            self.tangent_delta
        );
        ensure!(
            (1..=MAX_ARC_SAMPLES_PER_SEGMENT).contains(&self.arc_samples_per_segment),
            "arc_samples_per_segment muss in 1..={MAX_ARC_SAMPLES_PER_SEGMENT} liegen (ist {})",
            self.arc_samples_per_segment
        );
        for (name, value) in [
            ("padding", self.padding),
            ("hover_margin", self.hover_margin),
            ("point_hit_radius", self.point_hit_radius),
            ("handle_hit_radius", self.handle_hit_radius),
        ] {
            ensure!(
                value.is_finite() && value >= 0.0,
                "{name} muss endlich und nicht negativ sein (ist {value})"
            );
        }
        ensure!(
            self.glyph_offset.is_finite() && self.glyph_layer_gap.is_finite(),
            "Glyph-Abstände müssen endlich sein"
        );
        let arc = &self.default_arc;
        ensure!(
            [arc.x, arc.y, arc.width, arc.height]
                .iter()
                .all(|v| v.is_finite())
                && arc.width > 0.0,
            "default_arc braucht endliche Werte und positive Breite"
        );
        Ok(())
    }

    /// Gibt `self` zurück, bei ungültigen Werten die Standardwerte.
    pub fn or_default_if_invalid(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ungültige Optionen, verwende Standardwerte: {e:#}");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("lipid-curve-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("lipid_curve_editor.toml")
    }

    /// Parameter für den Orientierungs-Sampler.
    pub fn orientation_params(&self) -> OrientationParams {
        OrientationParams {
            step: self.orientation_step,
            tangent_delta: self.tangent_delta,
            glyph_offset: self.glyph_offset,
            glyph_layer_gap: self.glyph_layer_gap,
        }
    }

    /// Abstand um die Bounding-Box, ab dem das Overlay eingeblendet wird.
    ///
    /// `padding + hover_margin`
    pub fn hover_distance(&self) -> f32 {
        self.padding + self.hover_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_use_defaults() {
        let opts: EditorOptions = toml::from_str("padding = 4.0\n").expect("TOML gültig");
        assert_eq!(opts.padding, 4.0);
        assert_eq!(opts.tension, SPLINE_TENSION);
        assert_eq!(opts.default_arc, ArcTemplate::default());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("options.toml");
        let opts = EditorOptions {
            orientation_step: 7.5,
            ..EditorOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern erfolgreich");
        assert_eq!(EditorOptions::load_from_file(&path), opts);
    }

    #[test]
    fn test_broken_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "padding = [").expect("Schreiben erfolgreich");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(EditorOptions::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let invalid = [
            EditorOptions {
                tension: 0.0,
                ..EditorOptions::default()
            },
            EditorOptions {
                orientation_step: -1.0,
                ..EditorOptions::default()
            },
            EditorOptions {
                tangent_delta: f32::NAN,
                ..EditorOptions::default()
            },
            EditorOptions {
                arc_samples_per_segment: 0,
                ..EditorOptions::default()
            },
            EditorOptions {
                point_hit_radius: f32::INFINITY,
                ..EditorOptions::default()
            },
            EditorOptions {
                default_arc: ArcTemplate {
                    width: 0.0,
                    ..ArcTemplate::default()
                },
                ..EditorOptions::default()
            },
        ];
        for opts in invalid {
            assert!(opts.validate().is_err(), "{opts:?} sollte ungültig sein");
            assert_eq!(opts.or_default_if_invalid(), EditorOptions::default());
        }
    }

    #[test]
    fn test_zero_tension_in_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("Temp-Verzeichnis");
        let path = dir.path().join("zero_tension.toml");
        std::fs::write(&path, "tension = 0.0\npadding = 4.0\n").expect("Schreiben erfolgreich");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }

    #[test]
    fn test_orientation_params_follow_options() {
        let opts = EditorOptions {
            glyph_offset: -3.0,
            ..EditorOptions::default()
        };
        let params = opts.orientation_params();
        assert_eq!(params.glyph_offset, -3.0);
        assert_eq!(params.step, DEFAULT_STEP);
    }
}
