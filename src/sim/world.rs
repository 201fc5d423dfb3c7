//! Camera scrolling over the wrap-around world
//!
//! The road is one tile of fixed height that repeats vertically. The camera
//! offset `camera_y` always lies in `[0, height)`; moving the player "up"
//! scrolls the world down by decreasing it.

use serde::{Deserialize, Serialize};

use crate::consts::SCREEN_HEIGHT;

/// Camera scroll state and world/screen coordinate conversion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldClock {
    /// Current scroll offset, wrapped into `[0, height)`
    pub camera_y: f32,
    /// Offset at the end of the previous tick, for forward-delta accounting
    pub last_camera_y: f32,
    /// Height of one world tile (wrap period)
    pub height: f32,
}

/// `rem_euclid` can round up to exactly `period` for tiny negative inputs;
/// clamp that back into range.
fn wrap(value: f32, period: f32) -> f32 {
    let r = value.rem_euclid(period);
    if r >= period { 0.0 } else { r }
}

impl WorldClock {
    /// Start with the bottom of the world tile filling the screen.
    pub fn new(height: f32) -> Self {
        let camera_y = height - SCREEN_HEIGHT;
        Self {
            camera_y,
            last_camera_y: camera_y,
            height,
        }
    }

    /// Scroll forward by `delta` world px (negative scrolls backward),
    /// wrapping into `[0, height)`.
    pub fn advance(&mut self, delta: f32) {
        self.camera_y = wrap(self.camera_y - delta, self.height);
    }

    /// Screen-space Y of a world-space Y, in `[0, height)`.
    pub fn to_screen_y(&self, world_y: f32) -> f32 {
        wrap(world_y - self.camera_y, self.height)
    }

    /// Forward travel since the last snapshot, zero when the camera held
    /// still or moved backward. Meaningless across a wrap, which reads as
    /// backward motion; the per-tick scroll is far smaller than the tile.
    pub fn forward_delta(&self) -> f32 {
        (self.last_camera_y - self.camera_y).max(0.0)
    }

    /// Record the current offset for the next tick's forward-delta.
    pub fn snapshot(&mut self) {
        self.last_camera_y = self.camera_y;
    }

    /// Whether an entity of height `entity_h` at the given screen Y is on
    /// screen at all.
    pub fn is_visible(screen_y: f32, entity_h: f32) -> bool {
        -entity_h < screen_y && screen_y < SCREEN_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_wraps_into_range() {
        let mut world = WorldClock::new(1600.0);
        world.advance(5000.0);
        assert!(world.camera_y >= 0.0 && world.camera_y < 1600.0);
        world.advance(-12345.5);
        assert!(world.camera_y >= 0.0 && world.camera_y < 1600.0);
    }

    #[test]
    fn test_to_screen_y_periodic() {
        let world = WorldClock::new(1600.0);
        let y = 321.5;
        assert!((world.to_screen_y(y) - world.to_screen_y(y + 1600.0)).abs() < 1e-3);
        assert!((world.to_screen_y(y) - world.to_screen_y(y - 3200.0)).abs() < 1e-3);
    }

    #[test]
    fn test_forward_delta() {
        let mut world = WorldClock::new(1600.0);
        world.camera_y = 500.0;
        world.snapshot();
        world.advance(20.0); // camera 500 -> 480
        assert!((world.forward_delta() - 20.0).abs() < 1e-4);

        world.snapshot();
        world.advance(-20.0); // backward: 480 -> 500
        assert_eq!(world.forward_delta(), 0.0);
    }

    #[test]
    fn test_visibility_bounds() {
        assert!(WorldClock::is_visible(0.0, 32.0));
        assert!(WorldClock::is_visible(399.0, 32.0));
        assert!(!WorldClock::is_visible(400.0, 32.0));
        assert!(!WorldClock::is_visible(1599.0, 32.0));
    }
}
