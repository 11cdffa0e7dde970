//! Scene geometry in screen space
//!
//! Lines and boxes for the incline, walls, cart and force arrows. Any front
//! end can draw these directly; nothing here touches a graphics API.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::along_incline;
use crate::sim::Snapshot;

/// Screen x of the incline base (left wall)
pub const BASE_X: f32 = 200.0;
/// Screen x of the right wall on flat ground
pub const RIGHT_WALL_X: f32 = 1000.0;
/// Screen y of the incline base
pub const BASE_Y: f32 = 500.0;
/// Wall height in pixels
pub const WALL_HEIGHT: f32 = 200.0;
/// Pixels per distance unit along the incline
pub const PIXELS_PER_UNIT: f32 = 10.0;
/// Cart box edge length
pub const CART_SIZE: f32 = 20.0;
/// Longest force arrow, drawn for forces at or above `MAX_FORCE_DISPLAY`
pub const MAX_ARROW_LENGTH: f32 = 100.0;
pub const MAX_FORCE_DISPLAY: f32 = 100.0;
/// Line thickness for walls, incline and arrows
pub const LINE_WIDTH: f32 = 5.0;

pub const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
pub const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// A thick line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: [f32; 4],
}

impl Segment {
    fn new(from: Vec2, to: Vec2, color: [f32; 4]) -> Self {
        Self {
            from,
            to,
            width: LINE_WIDTH,
            color,
        }
    }

    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

/// Everything needed to draw one frame of the incline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub left_wall: Segment,
    pub incline: Segment,
    pub right_wall: Segment,
    /// Top-left corner of the cart box
    pub cart_origin: Vec2,
    pub cart_size: f32,
    pub left_arrow: Segment,
    pub right_arrow: Segment,
}

/// Arrow length for a force magnitude
pub fn arrow_length(force: f64) -> f32 {
    (force.abs() as f32).min(MAX_FORCE_DISPLAY) / MAX_FORCE_DISPLAY * MAX_ARROW_LENGTH
}

impl Scene {
    /// Lay out the scene for a snapshot
    pub fn layout(snap: &Snapshot) -> Self {
        let angle = snap.angle as f32;
        let base = Vec2::new(BASE_X, BASE_Y);
        let top = along_incline(base, RIGHT_WALL_X - BASE_X, angle);
        let up = Vec2::new(0.0, -WALL_HEIGHT);

        // Cart snaps to whole pixels
        let offset = along_incline(Vec2::ZERO, snap.position as f32 * PIXELS_PER_UNIT, angle);
        let cart_x = base.x + offset.x.trunc();
        let cart_y = base.y + offset.y.trunc() - CART_SIZE / 2.0;
        let arrow_y = cart_y + CART_SIZE / 2.0;
        let anchor = Vec2::new(cart_x, arrow_y);

        Self {
            left_wall: Segment::new(base, base + up, BLACK),
            incline: Segment::new(base, top, BLACK),
            right_wall: Segment::new(top, top + up, BLACK),
            cart_origin: Vec2::new(cart_x - CART_SIZE / 2.0, cart_y),
            cart_size: CART_SIZE,
            left_arrow: Segment::new(anchor, anchor - Vec2::new(arrow_length(snap.left_force), 0.0), BLUE),
            right_arrow: Segment::new(anchor, anchor + Vec2::new(arrow_length(snap.right_force), 0.0), RED),
        }
    }

    /// Centre of the cart box
    pub fn cart_center(&self) -> Vec2 {
        self.cart_origin + Vec2::splat(self.cart_size / 2.0)
    }
}
