//! Writer für eigenständige SVG-Dokumente einer Render-Szene.

use crate::shared::{HandleMarker, RenderScene};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

const ACCENT: &str = "cornflowerblue";
const GLYPH_ID: &str = "lipid";
/// Verschiebung der gespiegelten inneren Glyphen (Glyph-Höhe)
const GLYPH_HEIGHT: f32 = 24.0;

/// Schreibt `scene` als SVG-Dokument.
///
/// Reihenfolge der Ebenen: innere Glyphen, äußere Glyphen, Pfad, Overlay, Punkt-Marker.
pub fn write_svg_document(scene: &RenderScene) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n");

    output.push_str("  <defs>\n");
    let _ = writeln!(output, "    <g id=\"{GLYPH_ID}\">");
    output.push_str(
        "      <path d=\"M 6,10 A 6,22 0 0 1 1,22\" stroke=\"lightslategray\" stroke-opacity=\"0.5\" fill=\"none\" stroke-width=\"1.5\" stroke-linecap=\"round\"/>\n",
    );
    output.push_str(
        "      <path d=\"M 8,10 L 8,22\" stroke=\"lightslategray\" stroke-opacity=\"0.5\" fill=\"none\" stroke-width=\"1.5\" stroke-linecap=\"round\"/>\n",
    );
    let _ = writeln!(
        output,
        "      <circle r=\"4\" cx=\"7\" cy=\"5\" fill=\"{ACCENT}\" fill-opacity=\"0.5\"/>"
    );
    output.push_str("    </g>\n");
    output.push_str("  </defs>\n");

    let view = scene.camera.view_matrix();
    let _ = writeln!(
        output,
        "  <g transform=\"matrix({} {} {} {} {} {})\">",
        format_float(view.x_axis.x),
        format_float(view.x_axis.y),
        format_float(view.y_axis.x),
        format_float(view.y_axis.y),
        format_float(view.z_axis.x),
        format_float(view.z_axis.y),
    );

    for mirrored in [true, false] {
        let _ = writeln!(
            output,
            "    <g class=\"{}\">",
            if mirrored { "inner" } else { "outer" }
        );
        for glyph in scene.glyphs.iter().filter(|g| g.mirrored == mirrored) {
            let _ = write!(
                output,
                "      <g transform=\"translate({}, {}) rotate({})\">",
                format_float(glyph.anchor.x),
                format_float(glyph.anchor.y),
                format_float(glyph.angle_degrees),
            );
            if mirrored {
                let _ = write!(
                    output,
                    "<use href=\"#{GLYPH_ID}\" transform=\"scale(1 -1) translate(0 -{})\"/>",
                    format_float(GLYPH_HEIGHT)
                );
            } else {
                let _ = write!(output, "<use href=\"#{GLYPH_ID}\"/>");
            }
            output.push_str("</g>\n");
        }
        output.push_str("    </g>\n");
    }

    if scene.has_path() {
        let _ = writeln!(
            output,
            "    <path d=\"{}\" stroke=\"black\" fill=\"none\" stroke-width=\"2\" vector-effect=\"non-scaling-stroke\"/>",
            scene.path_d
        );
    }

    if let Some(overlay) = &scene.overlay {
        let frame = overlay.frame;
        let _ = writeln!(
            output,
            "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"transparent\" stroke=\"{ACCENT}\"/>",
            format_float(frame.x),
            format_float(frame.y),
            format_float(frame.width),
            format_float(frame.height),
        );
        for handle in &overlay.handles {
            write_handle(&mut output, handle);
        }
    }

    for marker in &scene.point_markers {
        let fill = if marker.kind.is_control() { ACCENT } else { "white" };
        let _ = writeln!(
            output,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{fill}\" stroke=\"{ACCENT}\" stroke-width=\"2\"/>",
            format_float(marker.position.x),
            format_float(marker.position.y),
            format_float(marker.radius),
        );
    }

    output.push_str("  </g>\n");
    output.push_str("</svg>\n");
    output
}

fn write_handle(output: &mut String, handle: &HandleMarker) {
    let p = handle.position;
    if handle.is_corner() {
        let _ = writeln!(
            output,
            "    <circle cx=\"{}\" cy=\"{}\" r=\"3\" fill=\"{ACCENT}\" stroke=\"white\" stroke-width=\"1\" data-handle=\"{}\"/>",
            format_float(p.x),
            format_float(p.y),
            handle.direction,
        );
        return;
    }

    // Kanten-Handles: Balken parallel zur Kante
    let (width, height) = if handle.direction.has_north() || handle.direction.has_south() {
        (12.0, 3.0)
    } else {
        (3.0, 12.0)
    };
    let _ = writeln!(
        output,
        "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"2\" fill=\"white\" stroke=\"{ACCENT}\" stroke-width=\"1\" data-handle=\"{}\"/>",
        format_float(p.x - width / 2.0),
        format_float(p.y - height / 2.0),
        format_float(width),
        format_float(height),
        handle.direction,
    );
}

/// Speichert `scene` als SVG-Datei.
pub fn save_svg(scene: &RenderScene, path: &Path) -> Result<()> {
    std::fs::write(path, write_svg_document(scene))
        .with_context(|| format!("SVG-Datei nicht schreibbar: {}", path.display()))?;
    log::info!("SVG exportiert nach: {}", path.display());
    Ok(())
}

fn format_float(value: f32) -> String {
    format!("{:.3}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, EditorState};
    use crate::shared::EditorOptions;
    use glam::Vec2;
    use quick_xml::events::Event;
    use quick_xml::Reader;

    /// Zählt Start-/Leer-Elemente mit Namen `name`.
    fn count_elements(svg: &str, name: &[u8]) -> usize {
        let mut reader = Reader::from_str(svg);
        let mut count = 0;
        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.name().as_ref() == name => {
                    count += 1
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => panic!("SVG nicht wohlgeformt: {e}"),
            }
        }
        count
    }

    #[test]
    fn test_document_is_well_formed_and_complete() {
        let mut state = EditorState::new(EditorOptions::default());
        state.hover.pointer = Some(Vec2::new(300.0, 220.0));
        let scene = build_render_scene(&state);

        let svg = write_svg_document(&scene);

        assert_eq!(count_elements(&svg, b"use"), scene.glyphs.len());
        // 1 Glyph-Pfad-Paar in <defs> plus der Kurvenpfad
        assert_eq!(count_elements(&svg, b"path"), 3);
        // Glyph-Kopf + 4 Eck-Handles + Punkt-Marker
        assert_eq!(
            count_elements(&svg, b"circle"),
            1 + 4 + scene.point_markers.len()
        );
        // Overlay-Rahmen + 4 Kanten-Handles
        assert_eq!(count_elements(&svg, b"rect"), 5);
    }

    #[test]
    fn test_degenerate_scene_has_no_curve_path() {
        let mut state = EditorState::new(EditorOptions::default());
        state.derived = Default::default();
        let scene = build_render_scene(&state);

        let svg = write_svg_document(&scene);

        assert_eq!(count_elements(&svg, b"path"), 2);
        assert_eq!(count_elements(&svg, b"use"), 0);
    }

    #[test]
    fn test_format_float_precision() {
        assert_eq!(format_float(1.23456), "1.235");
        assert_eq!(format_float(-2.0), "-2.000");
    }
}
