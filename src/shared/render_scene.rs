//! Render-Szene als expliziter Übergabevertrag zwischen App und Host-Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `io::svg` bzw. der Host sie konsumiert.

use super::options::EditorOptions;
use crate::core::{Camera2D, HandleDirection, PointKind, Rect};
use glam::Vec2;

/// Eine Glyph-Instanz entlang der Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphInstance {
    /// Verankerung im lokalen Koordinatensystem
    pub anchor: Vec2,
    /// Drehung in Grad (entfalteter Tangenten-Winkel)
    pub angle_degrees: f32,
    /// Innere Reihe: an der Tangente gespiegelt
    pub mirrored: bool,
}

/// Marker eines Kurvenpunkts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMarker {
    pub position: Vec2,
    pub kind: PointKind,
    pub radius: f32,
}

/// Ein Resize-Handle des Overlays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleMarker {
    pub direction: HandleDirection,
    pub position: Vec2,
}

impl HandleMarker {
    /// Eck-Handles werden als Kreis, Kanten-Handles als Balken dargestellt.
    pub fn is_corner(&self) -> bool {
        (self.direction.has_north() || self.direction.has_south())
            && (self.direction.has_east() || self.direction.has_west())
    }
}

/// Bounding-Box-Overlay mit Handle-Rahmen.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayScene {
    /// Gepolsterte Bounding-Box (Handle-Rahmen)
    pub frame: Rect,
    pub handles: Vec<HandleMarker>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// SVG-Pfadbeschreibung der Kurve (leer bei degenerierter Form)
    pub path_d: String,
    /// Glyph-Instanzen: äußere Reihe aufrecht, innere gespiegelt
    pub glyphs: Vec<GlyphInstance>,
    /// Marker aller Kurvenpunkte in Pfad-Reihenfolge
    pub point_markers: Vec<PointMarker>,
    /// Overlay, falls gerade sichtbar
    pub overlay: Option<OverlayScene>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Laufzeit-Optionen für Größen und Abstände
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Pfad gezeichnet werden soll.
    pub fn has_path(&self) -> bool {
        !self.path_d.is_empty()
    }
}
