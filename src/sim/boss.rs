//! Boss encounter state machine
//!
//! Once spawned the boss alternates between a long non-vulnerable rest phase
//! and a short vulnerability window. It bounces inside a camera-relative band
//! and periodically fires a volley of four cardinal projectiles. At most one
//! damaging hit registers per vulnerability window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Projectile;
use super::rect::Rect;
use super::world::WorldClock;
use crate::Tuning;
use crate::consts::*;
use crate::secs_to_ticks;

/// Flash toggle cadence while vulnerable and unhit, ticks
const FLASH_INTERVAL_TICKS: u32 = 5;
/// Keep flashing this long after a hit lands, seconds
const AFTER_HIT_FLASH_SECS: f32 = 1.0;

/// Inner phase of an active boss. The outer `NotStarted`/`Defeated` states
/// live on the session as `Option<Boss>` plus the `boss_defeated` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Invulnerable; lethal to touch
    Resting,
    /// Accepts exactly one damaging hit
    Vulnerable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    /// World-space top-left of the visual box
    pub pos: Vec2,
    /// Bounce velocity, px/s
    pub vel: Vec2,
    pub hp: u32,
    pub phase: BossPhase,
    /// Ticks spent resting since the last vulnerability window
    pub phase_timer: u32,
    /// Ticks spent in the current vulnerability window
    pub vuln_timer: u32,
    /// Whether the single allowed hit of this window has landed
    pub took_hit_this_phase: bool,
    shoot_timer: u32,
    /// Flash state for the renderer to read
    pub flash_on: bool,
    flash_timer: u32,
    after_hit_timer: u32,
}

impl Boss {
    /// Spawn centered horizontally, just below the top of the current view.
    pub fn spawn(camera_y: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(SCREEN_WIDTH / 2.0 - BOSS_SIZE / 2.0, camera_y + 50.0),
            vel: Vec2::new(tuning.boss_speed_x, tuning.boss_speed_y),
            hp: tuning.boss_max_hp,
            phase: BossPhase::Resting,
            phase_timer: 0,
            vuln_timer: 0,
            took_hit_this_phase: false,
            shoot_timer: 0,
            flash_on: false,
            flash_timer: 0,
            after_hit_timer: 0,
        }
    }

    pub fn is_vulnerable(&self) -> bool {
        self.phase == BossPhase::Vulnerable
    }

    /// Advance movement, shooting, and the phase machine by one tick.
    /// Returns a projectile volley when the shoot cooldown elapses.
    pub fn update(
        &mut self,
        world: &WorldClock,
        dt: f32,
        tuning: &Tuning,
    ) -> Option<[Projectile; 4]> {
        self.pos += self.vel * dt;

        // Horizontal bounce against the road edges, in world X
        if self.pos.x < 0.0 || self.pos.x + BOSS_SIZE > SCREEN_WIDTH {
            self.vel.x = -self.vel.x;
        }

        // Vertical bounce against a camera-relative band: the boss tracks the
        // view, not the world tile, so the band is tested in screen space
        let screen_y = world.to_screen_y(self.pos.y);
        if screen_y < BOSS_BAND_MARGIN || screen_y > SCREEN_HEIGHT - BOSS_SIZE - BOSS_BAND_MARGIN {
            self.vel.y = -self.vel.y;
        }

        self.shoot_timer += 1;
        let volley = if self.shoot_timer >= tuning.shoot_cooldown_ticks() {
            self.shoot_timer = 0;
            Some(self.shoot())
        } else {
            None
        };

        match self.phase {
            BossPhase::Vulnerable => {
                self.vuln_timer += 1;

                if !self.took_hit_this_phase {
                    self.flash_timer += 1;
                    if self.flash_timer >= FLASH_INTERVAL_TICKS {
                        self.flash_timer = 0;
                        self.flash_on = !self.flash_on;
                    }
                } else {
                    self.after_hit_timer += 1;
                    if self.after_hit_timer >= secs_to_ticks(AFTER_HIT_FLASH_SECS) {
                        self.flash_on = false;
                    }
                }

                // Window closes whether or not a hit landed
                if self.vuln_timer >= tuning.vuln_ticks() {
                    self.phase = BossPhase::Resting;
                    self.vuln_timer = 0;
                    self.phase_timer = 0;
                    self.took_hit_this_phase = false;
                    self.flash_on = false;
                    self.flash_timer = 0;
                    self.after_hit_timer = 0;
                }
            }
            BossPhase::Resting => {
                self.phase_timer += 1;
                if self.phase_timer >= tuning.rest_ticks() {
                    self.phase = BossPhase::Vulnerable;
                    self.vuln_timer = 0;
                    self.phase_timer = 0;
                    self.took_hit_this_phase = false;
                    self.flash_timer = 0;
                    self.flash_on = true;
                    self.after_hit_timer = 0;
                }
            }
        }

        volley
    }

    /// Register a damaging hit. Only the first hit of a vulnerability window
    /// counts; anything else is a no-op. Returns whether the boss died.
    pub fn take_hit(&mut self) -> bool {
        if !self.is_vulnerable() || self.took_hit_this_phase {
            return false;
        }
        self.hp = self.hp.saturating_sub(1);
        self.took_hit_this_phase = true;
        self.after_hit_timer = 0;
        self.hp == 0
    }

    /// Four cardinal projectiles from the boss center.
    fn shoot(&self) -> [Projectile; 4] {
        let center = self.pos + Vec2::splat(BOSS_SIZE / 2.0);
        let s = PROJECTILE_SPEED;
        [
            Projectile::new(center, Vec2::new(0.0, -s)),
            Projectile::new(center, Vec2::new(0.0, s)),
            Projectile::new(center, Vec2::new(-s, 0.0)),
            Projectile::new(center, Vec2::new(s, 0.0)),
        ]
    }

    /// Visual box at the given screen-space Y.
    pub fn visual_box(&self, screen_y: f32) -> Rect {
        Rect::new(self.pos.x, screen_y, BOSS_SIZE, BOSS_SIZE)
    }
}
