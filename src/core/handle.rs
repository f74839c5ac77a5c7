//! Handle-Geometrie der Bounding-Box und die daraus abgeleitete Transformation.

use super::geometry::Rect;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identität eines Drag-Griffs: Box-Körper (`Move`) oder eine der 8 Kompass-Richtungen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleDirection {
    Move,
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl HandleDirection {
    /// Die 8 Resize-Handles mit ihrer relativen Lage in der Box.
    pub const RESIZE_HANDLES: [(HandleDirection, f32, f32); 8] = [
        (HandleDirection::NW, 0.0, 0.0),
        (HandleDirection::N, 0.5, 0.0),
        (HandleDirection::NE, 1.0, 0.0),
        (HandleDirection::W, 0.0, 0.5),
        (HandleDirection::E, 1.0, 0.5),
        (HandleDirection::SW, 0.0, 1.0),
        (HandleDirection::S, 0.5, 1.0),
        (HandleDirection::SE, 1.0, 1.0),
    ];

    /// Handle greift an der Oberkante.
    pub fn has_north(self) -> bool {
        matches!(self, Self::N | Self::NE | Self::NW)
    }

    /// Handle greift an der Unterkante.
    pub fn has_south(self) -> bool {
        matches!(self, Self::S | Self::SE | Self::SW)
    }

    /// Handle greift an der rechten Kante.
    pub fn has_east(self) -> bool {
        matches!(self, Self::E | Self::NE | Self::SE)
    }

    /// Handle greift an der linken Kante.
    pub fn has_west(self) -> bool {
        matches!(self, Self::W | Self::NW | Self::SW)
    }

    /// String-Form (`"move"`, `"n"`, `"se"`, …).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::NE => "ne",
            Self::NW => "nw",
            Self::SE => "se",
            Self::SW => "sw",
        }
    }
}

impl fmt::Display for HandleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position eines Resize-Handles auf dem (gepolsterten) Rahmen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandlePlacement {
    pub direction: HandleDirection,
    pub position: Vec2,
}

/// Liefert die 8 Resize-Handles auf `frame`.
pub fn handle_layout(frame: &Rect) -> [HandlePlacement; 8] {
    HandleDirection::RESIZE_HANDLES.map(|(direction, u, v)| HandlePlacement {
        direction,
        position: frame.point_at(u, v),
    })
}

/// Ermittelt den Griff unter `pos`: Resize-Handles vor dem Box-Körper.
pub fn hit_test_frame(frame: &Rect, pos: Vec2, handle_radius: f32) -> Option<HandleDirection> {
    let nearest = handle_layout(frame)
        .into_iter()
        .map(|h| (h.direction, h.position.distance(pos)))
        .filter(|(_, dist)| *dist <= handle_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((direction, _)) => Some(direction),
        None if frame.contains(pos) => Some(HandleDirection::Move),
        None => None,
    }
}

/// Verschiebung bzw. Skalierung relativ zur Ausgangs-Box eines Drags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeTransform {
    Translate(Vec2),
    /// Freie (nicht-uniforme) Skalierung um einen festen Anker
    Scale { anchor: Vec2, scale: Vec2 },
}

impl ShapeTransform {
    /// Berechnet die Transformation für einen Pointer-Versatz `delta` am Griff `direction`.
    ///
    /// Der Anker ist die dem Griff gegenüberliegende Kante. Eine Box ohne
    /// Ausdehnung auf einer Achse skaliert auf dieser Achse nicht (Faktor 1).
    pub fn from_drag(direction: HandleDirection, original_box: &Rect, delta: Vec2) -> Self {
        if direction == HandleDirection::Move {
            return Self::Translate(delta);
        }

        let scale_x = if direction.has_east() {
            axis_scale(original_box.width, delta.x)
        } else if direction.has_west() {
            axis_scale(original_box.width, -delta.x)
        } else {
            1.0
        };
        let scale_y = if direction.has_south() {
            axis_scale(original_box.height, delta.y)
        } else if direction.has_north() {
            axis_scale(original_box.height, -delta.y)
        } else {
            1.0
        };

        let anchor_x = if direction.has_west() {
            original_box.x + original_box.width
        } else {
            original_box.x
        };
        let anchor_y = if direction.has_north() {
            original_box.y + original_box.height
        } else {
            original_box.y
        };

        Self::Scale {
            anchor: Vec2::new(anchor_x, anchor_y),
            scale: Vec2::new(scale_x, scale_y),
        }
    }

    /// Wendet die Transformation auf eine Position an.
    pub fn apply(&self, p: Vec2) -> Vec2 {
        match *self {
            Self::Translate(delta) => p + delta,
            Self::Scale { anchor, scale } => anchor + (p - anchor) * scale,
        }
    }
}

fn axis_scale(extent: f32, grow: f32) -> f32 {
    if extent.abs() <= f32::EPSILON {
        1.0
    } else {
        (extent + grow) / extent
    }
}
