//! Orientierungs-Abtastung entlang des Pfads für die Glyph-Platzierung.
//!
//! In festen Abständen werden Position, Tangenten-Winkel und zwei entlang der
//! Normale versetzte Anker berechnet. Die Winkel werden in einem
//! vorwärtslaufenden Durchgang entfaltet, damit aufeinanderfolgende Samples
//! nie um mehr als 180° springen.

use super::geometry::{to_degrees, unit_normal, unwrap_degrees};
use super::path_measure::PathMeasure;
use glam::Vec2;

/// Standard-Abtastabstand entlang des Pfads (lokale Einheiten).
pub const DEFAULT_STEP: f32 = 10.0;
/// Bogenlängen-Delta für die Finite-Differenzen-Tangente.
pub const DEFAULT_TANGENT_DELTA: f32 = 0.01;
/// Versatz der inneren Glyph-Reihe entlang der Normale.
pub const DEFAULT_GLYPH_OFFSET: f32 = -2.0;
/// Zusätzlicher Versatz der äußeren Reihe (Schicht-Optik).
pub const DEFAULT_GLYPH_LAYER_GAP: f32 = 24.0;
/// Obergrenze der Samples pro Pfad.
pub const MAX_SAMPLES: usize = 100_000;

/// Parameter der Abtastung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationParams {
    pub step: f32,
    pub tangent_delta: f32,
    pub glyph_offset: f32,
    pub glyph_layer_gap: f32,
}

impl Default for OrientationParams {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            tangent_delta: DEFAULT_TANGENT_DELTA,
            glyph_offset: DEFAULT_GLYPH_OFFSET,
            glyph_layer_gap: DEFAULT_GLYPH_LAYER_GAP,
        }
    }
}

/// Ein Abtastpunkt mit lokalem Tangenten-/Normalen-Rahmen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSample {
    pub position: Vec2,
    /// Tangenten-Winkel in Grad (entfaltet)
    pub tangent_angle_degrees: f32,
    /// Anker der inneren (gespiegelten) Glyph-Reihe
    pub inner_anchor: Vec2,
    /// Anker der äußeren Glyph-Reihe
    pub outer_anchor: Vec2,
}

/// Tastet den Pfad in Abständen von `params.step` ab.
///
/// `n = floor(total / step)` Samples, gleichmäßig von Pfadanfang bis -ende.
/// Bei `n = 1` liegt das einzige Sample am Pfadanfang. `n` wird auf
/// [`MAX_SAMPLES`] begrenzt; ein nicht endlicher Pfad liefert keine Samples.
pub fn sample_orientations(
    measure: &impl PathMeasure,
    params: &OrientationParams,
) -> Vec<OrientationSample> {
    let total = measure.total_length();
    if measure.is_empty() || params.step <= 0.0 {
        return Vec::new();
    }
    if !total.is_finite() {
        log::warn!("Pfadlänge {total} nicht endlich, keine Orientierungs-Samples");
        return Vec::new();
    }
    let wanted = (total / params.step).floor();
    let n = if wanted > MAX_SAMPLES as f32 {
        log::warn!("{wanted} Orientierungs-Samples angefordert, begrenzt auf {MAX_SAMPLES}");
        MAX_SAMPLES
    } else {
        wanted as usize
    };

    let mut samples: Vec<OrientationSample> = (0..n)
        .map(|i| {
            let at = if n > 1 {
                i as f32 / (n - 1) as f32 * total
            } else {
                0.0
            };
            sample_at(measure, at, total, params)
        })
        .collect();

    for i in 1..samples.len() {
        let prev = samples[i - 1].tangent_angle_degrees;
        let sample = &mut samples[i];
        sample.tangent_angle_degrees = unwrap_degrees(prev, sample.tangent_angle_degrees);
    }

    samples
}

fn sample_at(
    measure: &impl PathMeasure,
    at: f32,
    total: f32,
    params: &OrientationParams,
) -> OrientationSample {
    let position = measure.point_at_length(at);
    let behind = measure.point_at_length((at - params.tangent_delta).max(0.0));
    let ahead = measure.point_at_length((at + params.tangent_delta).min(total));

    let tangent = ahead - behind;
    let normal = unit_normal(tangent);
    let outer_offset = params.glyph_offset - params.glyph_layer_gap;

    OrientationSample {
        position,
        tangent_angle_degrees: to_degrees(tangent.y.atan2(tangent.x)),
        inner_anchor: position - normal * params.glyph_offset,
        outer_anchor: position + normal * outer_offset,
    }
}
