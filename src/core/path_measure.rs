//! Arc-Length-Parametrisierung eines Spline-Pfads.
//!
//! `PathMeasure` ist die abstrakte Fähigkeit, die Gesamtlänge eines Pfads
//! und den Punkt an einer Bogenlänge abzufragen. `ArcLengthTable` setzt sie
//! über eine Lookup-Tabelle (LUT) pro kubischem Segment um.

use super::spline::{CubicSegment, SplinePath};
use glam::Vec2;

/// Standard-Auflösung der LUT pro Segment.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 64;

/// Längen-Abfragen auf einem Pfad.
pub trait PathMeasure {
    /// `true`, wenn kein Pfad existiert (weniger als 2 Kontrollpunkte).
    fn is_empty(&self) -> bool;

    /// Gesamte Bogenlänge.
    fn total_length(&self) -> f32;

    /// Punkt an Bogenlänge `len` (geklemmt auf `[0, total_length]`).
    fn point_at_length(&self, len: f32) -> Vec2;

    /// Punkt an normierter Bogenlänge (`fraction` ∈ [0, 1]).
    fn point_at_fraction(&self, fraction: f32) -> Vec2 {
        self.point_at_length(fraction * self.total_length())
    }
}

/// Kumulative Längentabelle über alle Segmente eines `SplinePath`.
#[derive(Debug, Clone)]
pub struct ArcLengthTable {
    start: Vec2,
    segments: Vec<CubicSegment>,
    samples_per_segment: usize,
    /// Kumulative Länge je Stützstelle, `samples_per_segment + 1` Werte pro Segment
    cumulative: Vec<Vec<f32>>,
    total: f32,
}

impl ArcLengthTable {
    /// Misst `path` mit `samples_per_segment` Stützstellen pro Segment.
    pub fn new(path: &SplinePath, samples_per_segment: usize) -> Self {
        let samples = samples_per_segment.max(1);
        let mut cumulative = Vec::with_capacity(path.segments().len());
        let mut running = 0.0f32;

        for seg in path.segments() {
            let mut lut = Vec::with_capacity(samples + 1);
            let mut prev = seg.from;
            lut.push(running);
            for i in 1..=samples {
                let t = i as f32 / samples as f32;
                let p = seg.eval(t);
                running += prev.distance(p);
                lut.push(running);
                prev = p;
            }
            cumulative.push(lut);
        }

        Self {
            start: path.start(),
            segments: path.segments().to_vec(),
            samples_per_segment: samples,
            cumulative,
            total: running,
        }
    }

    /// Bogenlänge am Anfang von Kontrollpunkt `vertex` (0 = Pfadstart).
    pub fn length_at_vertex(&self, vertex: usize) -> f32 {
        match vertex {
            0 => 0.0,
            v if v > self.segments.len() => self.total,
            v => self.cumulative[v - 1][self.samples_per_segment],
        }
    }

    /// Normierte Bogenlänge an Kontrollpunkt `vertex`.
    pub fn fraction_at_vertex(&self, vertex: usize) -> f32 {
        if self.total < f32::EPSILON {
            return 0.0;
        }
        self.length_at_vertex(vertex) / self.total
    }
}

impl PathMeasure for ArcLengthTable {
    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    fn total_length(&self) -> f32 {
        self.total
    }

    fn point_at_length(&self, len: f32) -> Vec2 {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return self.start;
        };
        if len <= 0.0 || self.total < f32::EPSILON {
            return first.from;
        }
        if len >= self.total {
            return last.to;
        }

        // Segment, dessen Endlänge als erste >= len ist
        let seg_idx = self
            .cumulative
            .partition_point(|lut| lut[self.samples_per_segment] < len)
            .min(self.segments.len() - 1);
        let lut = &self.cumulative[seg_idx];

        let idx = lut
            .partition_point(|&l| l < len)
            .clamp(1, self.samples_per_segment);
        let len_before = lut[idx - 1];
        let len_after = lut[idx];
        let frac = if (len_after - len_before).abs() > f32::EPSILON {
            (len - len_before) / (len_after - len_before)
        } else {
            0.0
        };

        let t = ((idx - 1) as f32 + frac) / self.samples_per_segment as f32;
        self.segments[seg_idx].eval(t)
    }
}
