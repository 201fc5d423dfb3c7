//! Fixed timestep simulation tick
//!
//! One `tick` call advances the whole session by a single frame in a fixed
//! order: player/camera movement, entity motion, boss machine, score
//! accrual, boss trigger, collision pass, coin respawn.

use rand::Rng;

use super::boss::Boss;
use super::collision::resolve_collisions;
use super::entity::Coin;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input held during a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Advance the session by one fixed timestep. Ticking a finished session is
/// a no-op.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    if state.phase == GamePhase::GameOver {
        return Vec::new();
    }

    state.time_ticks += 1;

    move_player(state, input, dt);

    // Traffic motion; wrap outside boss mode, despawn at the bounds inside
    let boss_mode = state.boss_mode;
    state.traffic.retain_mut(|car| car.advance(dt, boss_mode));

    if state.boss_mode {
        if let Some(boss) = state.boss.as_mut() {
            if let Some(volley) = boss.update(&state.world, dt, &state.tuning) {
                log::debug!("boss volley at tick {}", state.time_ticks);
                state.projectiles.extend(volley);
            }
        }
        for projectile in &mut state.projectiles {
            projectile.advance(dt);
        }
        let world = &state.world;
        state.projectiles.retain(|p| !p.offscreen(world));
    }

    // Distance accrues only on forward motion outside the encounter
    if !state.boss_mode {
        let forward = state.world.forward_delta();
        if forward > 0.0 {
            state.distance += forward;
        }
    }

    // Arm the encounter exactly once
    if !state.boss_mode
        && !state.boss_defeated
        && state.total_score() >= state.tuning.boss_trigger_score
    {
        state.boss_mode = true;
        state.boss = Some(Boss::spawn(state.world.camera_y, &state.tuning));
        log::info!(
            "boss encounter started at tick {} (score {})",
            state.time_ticks,
            state.total_score()
        );
    }

    state.world.snapshot();

    let events = resolve_collisions(state);

    // Soft-maintained coin population: small chance per tick while below
    // the floor, never a guaranteed refill
    if state.phase == GamePhase::Playing
        && state.coins.len() < COIN_POOL_MIN
        && state.rng.random_bool(COIN_SPAWN_CHANCE)
    {
        let coin = Coin::spawn_anywhere(state.tuning.world_height, &mut state.rng);
        state.coins.push(coin);
    }

    events
}

/// Apply held input. Outside boss mode vertical input scrolls the camera;
/// during the encounter the world is frozen and the player moves on screen,
/// clamped to the window. Horizontal input always moves the player rect.
fn move_player(state: &mut GameState, input: &TickInput, dt: f32) {
    let step = PLAYER_SPEED * dt;

    if !state.boss_mode {
        if input.up {
            state.world.advance(step);
        }
        if input.down {
            state.world.advance(-step);
        }
    } else {
        if input.up && state.player.rect.top() > 0.0 {
            state.player.rect.y -= step;
        }
        if input.down && state.player.rect.bottom() < SCREEN_HEIGHT {
            state.player.rect.y += step;
        }
    }

    if input.left && state.player.rect.left() > 0.0 {
        state.player.rect.x -= step;
    }
    if input.right && state.player.rect.right() < SCREEN_WIDTH {
        state.player.rect.x += step;
    }
}
