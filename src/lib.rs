//! Infinite Road - a vertically scrolling arcade road game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (scrolling, entities, boss fight, collisions)
//! - `persistence`: Per-player statistics and skin unlock store
//! - `shop`: Skin catalogue and purchase flow
//! - `tuning`: Data-driven game balance

pub mod persistence;
pub mod shop;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Nominal simulation rate (Hz). All phase lengths are defined in
    /// seconds and converted to tick counts at this rate.
    pub const TICK_RATE: f32 = 60.0;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Visible window dimensions
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// Height of one road tile; the world wraps modulo this
    pub const WORLD_HEIGHT: f32 = 1600.0;

    /// Player sprite box and movement
    pub const PLAYER_SIZE: f32 = 64.0;
    pub const PLAYER_SPEED: f32 = 300.0; // px/s (5 px/tick at 60 Hz)
    /// Player hitbox fraction of the visual box (both axes)
    pub const PLAYER_HITBOX_SCALE: f32 = 0.45;

    /// Traffic sprite box
    pub const TRAFFIC_WIDTH: f32 = 64.0;
    pub const TRAFFIC_HEIGHT: f32 = 32.0;
    /// Traffic/coin/boss hitbox fractions of the visual box
    pub const HITBOX_SCALE_X: f32 = 0.7;
    pub const HITBOX_SCALE_Y: f32 = 0.6;

    /// Traffic lanes are spaced this many world px apart
    pub const LANE_SPACING: f32 = 120.0;
    /// First lane sits this far above the bottom of the world tile
    pub const LANE_OFFSET: f32 = 200.0;

    /// Coin sprite box and lane spacing
    pub const COIN_SIZE: f32 = 32.0;
    pub const COIN_LANE_SPACING: f32 = 800.0;
    /// Soft-minimum coin population and per-tick respawn chance below it
    pub const COIN_POOL_MIN: usize = 10;
    pub const COIN_SPAWN_CHANCE: f64 = 0.02;

    /// Boss sprite box
    pub const BOSS_SIZE: f32 = 96.0;
    /// Boss projectile box, speed, and hitbox fraction
    pub const PROJECTILE_SIZE: f32 = 16.0;
    pub const PROJECTILE_SPEED: f32 = 360.0; // px/s (6 px/tick at 60 Hz)
    pub const PROJECTILE_HITBOX_SCALE: f32 = 0.8;
    /// Boss movement band margin from the screen's top/bottom edges
    pub const BOSS_BAND_MARGIN: f32 = 40.0;
}

/// Convert a duration in seconds to a whole number of simulation ticks
/// at the nominal rate.
#[inline]
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * consts::TICK_RATE) as u32
}
