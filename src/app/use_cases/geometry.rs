//! Neuberechnung der abgeleiteten Geometrie nach jeder Kurven-Mutation.

use crate::app::state::DerivedGeometry;
use crate::app::EditorState;
use crate::core::{sample_orientations, ArcLengthTable, PathMeasure};

/// Pfad neu bauen → interpolierte Punkte reprojizieren → Bounding-Box →
/// Orientierungs-Samples → einen zusammengefassten Redraw anfordern.
///
/// Läuft vollständig synchron, bevor ein Frame gezeichnet werden kann.
pub fn refresh(state: &mut EditorState) {
    let tension = state.options.tension;
    let path = state.shape.build_path(tension);
    let measure = ArcLengthTable::new(&path, state.options.arc_samples_per_segment);

    state.shape.reproject_interpolated(&measure);

    let bounding_box = state.shape.bounding_box();
    let samples = sample_orientations(&measure, &state.options.orientation_params());

    log::trace!(
        "Geometrie aktualisiert: {} Segmente, Länge {:.2}, {} Samples",
        path.segments().len(),
        measure.total_length(),
        samples.len()
    );

    state.derived = DerivedGeometry {
        path,
        measure,
        bounding_box,
        samples,
    };
    state.redraw.request();
}
