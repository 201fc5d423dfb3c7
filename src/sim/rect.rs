//! Axis-aligned rectangles in screen space
//!
//! The crate's one geometry primitive: visual boxes and hitboxes are both
//! `Rect`s, with hitboxes derived by shrinking a visual box about its center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rect of the given size centered on `center`.
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self {
            x: center.x - w / 2.0,
            y: center.y - h / 2.0,
            w,
            h,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    /// Overlap test with strict inequalities: rects that merely touch along
    /// an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Shrink about the center by the given per-axis fractions.
    pub fn scaled_about_center(&self, fx: f32, fy: f32) -> Rect {
        let mut shrunk = Rect::new(0.0, 0.0, self.w * fx, self.h * fy);
        shrunk.set_center(self.center());
        shrunk
    }

    /// True when the rect lies entirely outside a `(0,0)..(w,h)` window.
    pub fn fully_outside(&self, w: f32, h: f32) -> bool {
        self.right() < 0.0 || self.left() > w || self.bottom() < 0.0 || self.top() > h
    }
}
