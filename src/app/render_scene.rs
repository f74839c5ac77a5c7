//! Builder für Render-Szenen aus dem EditorState.

use crate::app::EditorState;
use crate::core::handle_layout;
use crate::shared::{GlyphInstance, HandleMarker, OverlayScene, PointMarker, RenderScene};

/// Baut eine RenderScene aus dem aktuellen EditorState.
pub fn build(state: &EditorState) -> RenderScene {
    let samples = &state.derived.samples;

    // Äußere Reihe zuerst, dann die gespiegelte innere
    let mut glyphs = Vec::with_capacity(samples.len() * 2);
    glyphs.extend(samples.iter().map(|s| GlyphInstance {
        anchor: s.outer_anchor,
        angle_degrees: s.tangent_angle_degrees,
        mirrored: false,
    }));
    glyphs.extend(samples.iter().map(|s| GlyphInstance {
        anchor: s.inner_anchor,
        angle_degrees: s.tangent_angle_degrees,
        mirrored: true,
    }));

    let point_markers = state
        .shape
        .points()
        .iter()
        .map(|p| PointMarker {
            position: p.position,
            kind: p.kind,
            radius: state.options.point_hit_radius,
        })
        .collect();

    let overlay = if state.overlay_visible() {
        state.padded_box().map(|frame| OverlayScene {
            frame,
            handles: handle_layout(&frame)
                .into_iter()
                .map(|h| HandleMarker {
                    direction: h.direction,
                    position: h.position,
                })
                .collect(),
        })
    } else {
        None
    };

    RenderScene {
        path_d: state.derived.path.to_svg_d(),
        glyphs,
        point_markers,
        overlay,
        camera: state.camera.clone(),
        options: state.options.clone(),
    }
}
