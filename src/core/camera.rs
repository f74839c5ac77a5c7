//! 2D-Kamera für Pan und Zoom der Zeichenfläche.
//!
//! Liefert die `screen → local`-Umrechnung, mit der der Host rohe
//! Pointer-Positionen in das lokale Koordinatensystem des Editors überführt.

use glam::{Mat3, Vec2};

/// 2D-Kamera mit Pan und Zoom
#[derive(Debug, Clone, PartialEq)]
pub struct Camera2D {
    /// Lokale Koordinate, die in der linken oberen Bildschirmecke liegt
    pub position: Vec2,
    /// Zoom-Level (1.0 = normal, 2.0 = doppelt so groß)
    pub zoom: f32,
}

impl Camera2D {
    /// Minimaler Zoom-Faktor.
    pub const ZOOM_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const ZOOM_MAX: f32 = 20.0;

    /// Erstellt eine neue Kamera
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Verschiebt die Kamera (Pan, lokale Einheiten)
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Ändert den Zoom-Level
    pub fn zoom_by(&mut self, factor: f32) {
        self.zoom = (self.zoom * factor).clamp(Self::ZOOM_MIN, Self::ZOOM_MAX);
    }

    /// Zoomt so, dass `focus_screen` auf derselben lokalen Position bleibt.
    pub fn zoom_towards(&mut self, factor: f32, focus_screen: Vec2) {
        let before = self.screen_to_local(focus_screen);
        self.zoom_by(factor);
        let after = self.screen_to_local(focus_screen);
        self.position += before - after;
    }

    /// View-Matrix (lokal → Screen).
    pub fn view_matrix(&self) -> Mat3 {
        Mat3::from_scale(Vec2::splat(self.zoom)) * Mat3::from_translation(-self.position)
    }

    /// Konvertiert Screen-Koordinaten zu lokalen Editor-Koordinaten.
    pub fn screen_to_local(&self, screen_pos: Vec2) -> Vec2 {
        self.view_matrix().inverse().transform_point2(screen_pos)
    }

    /// Konvertiert lokale Editor-Koordinaten zu Screen-Koordinaten.
    pub fn local_to_screen(&self, local_pos: Vec2) -> Vec2 {
        self.view_matrix().transform_point2(local_pos)
    }

    /// Umrechnungsfaktor Screen-Pixel → lokale Einheiten.
    pub fn local_per_pixel(&self) -> f32 {
        1.0 / self.zoom
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_camera_pan() {
        let mut camera = Camera2D::new();
        camera.pan(Vec2::new(10.0, 5.0));
        assert_relative_eq!(camera.position.x, 10.0);
        assert_relative_eq!(camera.position.y, 5.0);
    }

    #[test]
    fn test_camera_zoom_is_clamped() {
        let mut camera = Camera2D::new();
        camera.zoom_by(2.0);
        assert_relative_eq!(camera.zoom, 2.0);

        camera.zoom_by(1000.0);
        assert_relative_eq!(camera.zoom, Camera2D::ZOOM_MAX);
    }

    #[test]
    fn test_screen_to_local_inverts_view() {
        let mut camera = Camera2D::new();
        camera.position = Vec2::new(100.0, 50.0);
        camera.zoom = 2.0;

        let local = camera.screen_to_local(Vec2::new(20.0, 40.0));
        assert_relative_eq!(local.x, 110.0, epsilon = 1e-4);
        assert_relative_eq!(local.y, 70.0, epsilon = 1e-4);

        let screen = camera.local_to_screen(local);
        assert_relative_eq!(screen.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(screen.y, 40.0, epsilon = 1e-4);
    }

    #[test]
    fn test_zoom_towards_keeps_focus_fixed() {
        let mut camera = Camera2D::new();
        let focus = Vec2::new(300.0, 200.0);
        let before = camera.screen_to_local(focus);
        camera.zoom_towards(1.5, focus);
        let after = camera.screen_to_local(focus);
        assert_relative_eq!(before.x, after.x, epsilon = 1e-3);
        assert_relative_eq!(before.y, after.y, epsilon = 1e-3);
    }

    #[test]
    fn test_local_per_pixel() {
        let mut camera = Camera2D::new();
        let lpp1 = camera.local_per_pixel();
        camera.zoom = 2.0;
        // Doppelter Zoom → halb so viele lokale Einheiten pro Pixel
        assert_relative_eq!(camera.local_per_pixel(), lpp1 / 2.0);
    }
}
