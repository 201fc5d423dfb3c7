//! Road entities: traffic, coins, and boss projectiles
//!
//! Entities are plain data (position, motion, box size); hitboxes are derived
//! in screen space by the collision pass. Traffic and coins live in world
//! space on fixed lanes, projectiles fly freely in world space.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::world::WorldClock;
use crate::consts::*;

/// Horizontal travel direction of a traffic lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Traffic archetypes with their speed bands (px/s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrafficKind {
    Compact,
    Sedan,
    Truck,
    Police,
    Taxi,
}

impl TrafficKind {
    pub const ALL: [TrafficKind; 5] = [
        TrafficKind::Compact,
        TrafficKind::Sedan,
        TrafficKind::Truck,
        TrafficKind::Police,
        TrafficKind::Taxi,
    ];

    pub fn speed_range(&self) -> (f32, f32) {
        match self {
            TrafficKind::Compact => (180.0, 240.0),
            TrafficKind::Sedan => (240.0, 300.0),
            TrafficKind::Truck => (120.0, 180.0),
            TrafficKind::Police => (480.0, 720.0),
            TrafficKind::Taxi => (240.0, 360.0),
        }
    }
}

/// A lane-bound vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Traffic {
    pub kind: TrafficKind,
    pub world_x: f32,
    /// Lane Y in world space; traffic never leaves its lane
    pub world_y: f32,
    pub dir: Direction,
    /// Speed magnitude, px/s
    pub speed: f32,
}

impl Traffic {
    pub fn spawn(lane_y: f32, dir: Direction, kind: TrafficKind, rng: &mut Pcg32) -> Self {
        let (lo, hi) = kind.speed_range();
        let world_x = match dir {
            Direction::Right => rng.random_range(-SCREEN_WIDTH..SCREEN_WIDTH),
            Direction::Left => rng.random_range(0.0..SCREEN_WIDTH * 2.0),
        };
        Self {
            kind,
            world_x,
            world_y: lane_y,
            dir,
            speed: rng.random_range(lo..hi),
        }
    }

    /// Move one tick. Outside boss mode a vehicle that leaves the road wraps
    /// to the opposite bound; in boss mode the world has stopped scrolling
    /// and it despawns instead. Returns whether the vehicle is kept.
    pub fn advance(&mut self, dt: f32, boss_mode: bool) -> bool {
        match self.dir {
            Direction::Right => {
                self.world_x += self.speed * dt;
                if self.world_x > SCREEN_WIDTH + TRAFFIC_WIDTH {
                    if boss_mode {
                        return false;
                    }
                    self.world_x = -TRAFFIC_WIDTH;
                }
            }
            Direction::Left => {
                self.world_x -= self.speed * dt;
                if self.world_x < -TRAFFIC_WIDTH {
                    if boss_mode {
                        return false;
                    }
                    self.world_x = SCREEN_WIDTH + TRAFFIC_WIDTH;
                }
            }
        }
        true
    }

    /// Visual box at the given screen-space Y.
    pub fn visual_box(&self, screen_y: f32) -> Rect {
        Rect::new(self.world_x, screen_y, TRAFFIC_WIDTH, TRAFFIC_HEIGHT)
    }
}

/// A stationary collectible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub world_x: f32,
    pub world_y: f32,
}

impl Coin {
    /// Spawn on a fixed coin lane.
    pub fn spawn(lane_y: f32, rng: &mut Pcg32) -> Self {
        Self {
            world_x: rng.random_range(50.0..SCREEN_WIDTH - 50.0),
            world_y: lane_y,
        }
    }

    /// Spawn at a random world position (background respawner).
    pub fn spawn_anywhere(world_height: f32, rng: &mut Pcg32) -> Self {
        let lane_y = rng.random_range(0.0..world_height);
        Self::spawn(lane_y, rng)
    }

    pub fn visual_box(&self, screen_y: f32) -> Rect {
        Rect::new(self.world_x, screen_y, COIN_SIZE, COIN_SIZE)
    }
}

/// A boss projectile: constant velocity, world-space center position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Visual box centered on the current screen-space position.
    pub fn visual_box(&self, world: &WorldClock) -> Rect {
        let screen_y = world.to_screen_y(self.pos.y);
        Rect::from_center(
            Vec2::new(self.pos.x, screen_y),
            PROJECTILE_SIZE,
            PROJECTILE_SIZE,
        )
    }

    /// Despawn once the visual box has fully left the screen on any side.
    pub fn offscreen(&self, world: &WorldClock) -> bool {
        self.visual_box(world)
            .fully_outside(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

/// Seed one vehicle per lane, lanes spaced over the world tile, alternating
/// direction, random kind.
pub fn build_traffic(world_height: f32, rng: &mut Pcg32) -> Vec<Traffic> {
    let lanes = (world_height / LANE_SPACING) as usize;
    (0..lanes)
        .map(|i| {
            let lane_y = world_height - LANE_OFFSET - i as f32 * LANE_SPACING;
            let dir = if i % 2 == 0 {
                Direction::Right
            } else {
                Direction::Left
            };
            let kind = TrafficKind::ALL[rng.random_range(0..TrafficKind::ALL.len())];
            Traffic::spawn(lane_y, dir, kind, rng)
        })
        .collect()
}

/// Seed the sparse starting coin lanes.
pub fn build_coins(world_height: f32, rng: &mut Pcg32) -> Vec<Coin> {
    let lanes = (world_height / COIN_LANE_SPACING) as usize;
    (0..lanes)
        .map(|i| {
            let lane_y = world_height - LANE_OFFSET - i as f32 * COIN_LANE_SPACING;
            Coin::spawn(lane_y, rng)
        })
        .collect()
}
