//! Game session state
//!
//! One `GameState` value owns everything a session mutates: camera, player,
//! entity pools, boss flags, and scores. No ambient globals; the whole state
//! is serializable for capture/replay.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::boss::Boss;
use super::entity::{Coin, Projectile, Traffic, build_coins, build_traffic};
use super::rect::Rect;
use super::world::WorldClock;
use crate::Tuning;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Session ended; ticking is a no-op
    GameOver,
}

/// What killed the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    Traffic,
    Boss,
    Projectile,
}

/// Events produced by a tick, for the driver to log/react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    CoinCollected,
    BossHit { defeated: bool },
    SessionEnded { cause: DeathCause },
}

/// The player sprite. Movement beyond producing a fresh hitbox is up to the
/// tick; the rect lives directly in screen space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            rect: Rect::from_center(
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT * 0.75),
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
        }
    }
}

impl Player {
    /// Collision hitbox, much smaller than the sprite box to forgive
    /// sprite padding.
    pub fn hitbox(&self) -> Rect {
        self.rect
            .scaled_about_center(PLAYER_HITBOX_SCALE, PLAYER_HITBOX_SCALE)
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every random draw goes through here
    pub rng: Pcg32,
    pub world: WorldClock,
    pub player: Player,
    pub traffic: Vec<Traffic>,
    pub coins: Vec<Coin>,
    /// Present only while the encounter is active
    pub boss: Option<Boss>,
    pub projectiles: Vec<Projectile>,
    pub boss_mode: bool,
    /// Latches true on defeat; the encounter never re-triggers
    pub boss_defeated: bool,
    /// Forward travel in world px, accrued outside boss mode only
    pub distance: f32,
    pub bonus_score: u32,
    pub coins_collected: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new session with default tuning.
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let traffic = build_traffic(tuning.world_height, &mut rng);
        let coins = build_coins(tuning.world_height, &mut rng);
        Self {
            seed,
            rng,
            world: WorldClock::new(tuning.world_height),
            player: Player::default(),
            traffic,
            coins,
            boss: None,
            projectiles: Vec::new(),
            boss_mode: false,
            boss_defeated: false,
            distance: 0.0,
            bonus_score: 0,
            coins_collected: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            tuning,
        }
    }

    /// Distance score: one point per `distance_per_point` world px, floored.
    pub fn dist_score(&self) -> u32 {
        (self.distance / self.tuning.distance_per_point).floor() as u32
    }

    pub fn total_score(&self) -> u32 {
        self.dist_score() + self.bonus_score
    }

    /// Repopulate traffic and coin lanes from scratch.
    pub fn rebuild_pools(&mut self) {
        self.traffic = build_traffic(self.tuning.world_height, &mut self.rng);
        self.coins = build_coins(self.tuning.world_height, &mut self.rng);
    }

    /// Tear down the encounter after the killing blow: scrolling resumes,
    /// the trigger is permanently disarmed, and the road refills.
    pub(crate) fn defeat_boss(&mut self) {
        self.boss = None;
        self.projectiles.clear();
        self.boss_mode = false;
        self.boss_defeated = true;
        self.rebuild_pools();
        log::info!(
            "boss defeated at tick {} (score {})",
            self.time_ticks,
            self.total_score()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_pools() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(!state.boss_mode);
        assert!(state.boss.is_none());
        assert_eq!(state.traffic.len(), 13);
        assert_eq!(state.coins.len(), 2);
        assert_eq!(state.world.camera_y, 1200.0);
    }

    #[test]
    fn test_dist_score_floors() {
        let mut state = GameState::new(1);
        state.distance = 249.0;
        assert_eq!(state.dist_score(), 4);
        state.distance = 250.0;
        assert_eq!(state.dist_score(), 5);
        state.distance = 0.0;
        assert_eq!(state.dist_score(), 0);
    }

    #[test]
    fn test_total_score_includes_bonus() {
        let mut state = GameState::new(1);
        state.distance = 100.0;
        state.bonus_score = 7;
        assert_eq!(state.total_score(), 9);
    }

    #[test]
    fn test_defeat_boss_resets_encounter() {
        let mut state = GameState::new(1);
        state.boss_mode = true;
        state.boss = Some(crate::sim::Boss::spawn(state.world.camera_y, &state.tuning));
        state.projectiles.push(crate::sim::Projectile::new(
            glam::Vec2::new(0.0, 0.0),
            glam::Vec2::new(1.0, 0.0),
        ));
        state.traffic.clear();

        state.defeat_boss();
        assert!(!state.boss_mode);
        assert!(state.boss_defeated);
        assert!(state.boss.is_none());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.traffic.len(), 13);
    }
}
