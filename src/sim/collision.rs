//! Collision resolution between the player and every entity category
//!
//! All tests are screen-space AABB checks on reduced hitboxes, evaluated in
//! a fixed order (traffic, boss, projectiles, coins) so results are
//! deterministic. The first terminal collision ends the session.

use glam::Vec2;

use super::rect::Rect;
use super::state::{DeathCause, GameEvent, GamePhase, GameState};
use super::world::WorldClock;
use crate::consts::*;

/// Reduced collision box for a visual box: shrunk about the center so sprite
/// padding doesn't register as a hit.
pub fn hitbox(visual: &Rect, fx: f32, fy: f32) -> Rect {
    visual.scaled_about_center(fx, fy)
}

/// Displacement that moves `player_hb` flush against `boss_hb` along the
/// axis of greater center-to-center displacement. Applying it leaves zero
/// residual overlap on that axis.
pub fn push_out(player_hb: &Rect, boss_hb: &Rect) -> Vec2 {
    let d = player_hb.center() - boss_hb.center();
    if d.x.abs() > d.y.abs() {
        if d.x > 0.0 {
            Vec2::new(boss_hb.right() - player_hb.left(), 0.0)
        } else {
            Vec2::new(boss_hb.left() - player_hb.right(), 0.0)
        }
    } else if d.y > 0.0 {
        Vec2::new(0.0, boss_hb.bottom() - player_hb.top())
    } else {
        Vec2::new(0.0, boss_hb.top() - player_hb.bottom())
    }
}

enum BossOutcome {
    Lethal,
    Hit { defeated: bool },
    PushOnly,
}

/// Run the per-tick collision pass, mutating the state (player push-back,
/// coin removal, boss damage, session termination) and reporting what
/// happened as events.
pub fn resolve_collisions(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Traffic: always lethal. Off-screen vehicles have no screen-space
    // hitbox and are skipped.
    let player_hb = state.player.hitbox();
    for car in &state.traffic {
        let screen_y = state.world.to_screen_y(car.world_y);
        if !WorldClock::is_visible(screen_y, TRAFFIC_HEIGHT) {
            continue;
        }
        let car_hb = hitbox(&car.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
        if player_hb.intersects(&car_hb) {
            state.phase = GamePhase::GameOver;
            events.push(GameEvent::SessionEnded {
                cause: DeathCause::Traffic,
            });
            return events;
        }
    }

    // Boss: lethal while resting, push-back (plus at most one damaging hit
    // per window) while vulnerable.
    if state.boss_mode {
        let mut outcome = None;
        if let Some(boss) = state.boss.as_mut() {
            let screen_y = state.world.to_screen_y(boss.pos.y);
            let boss_hb = hitbox(&boss.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
            let player_hb = state.player.hitbox();
            if player_hb.intersects(&boss_hb) {
                if boss.is_vulnerable() {
                    let shift = push_out(&player_hb, &boss_hb);
                    state.player.rect.x += shift.x;
                    state.player.rect.y += shift.y;
                    if !boss.took_hit_this_phase {
                        let defeated = boss.take_hit();
                        outcome = Some(BossOutcome::Hit { defeated });
                    } else {
                        outcome = Some(BossOutcome::PushOnly);
                    }
                } else {
                    outcome = Some(BossOutcome::Lethal);
                }
            }
        }
        match outcome {
            Some(BossOutcome::Lethal) => {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::SessionEnded {
                    cause: DeathCause::Boss,
                });
                return events;
            }
            Some(BossOutcome::Hit { defeated }) => {
                events.push(GameEvent::BossHit { defeated });
                if defeated {
                    state.defeat_boss();
                }
            }
            Some(BossOutcome::PushOnly) | None => {}
        }
    }

    // Projectiles: lethal, boss mode only.
    if state.boss_mode {
        let player_hb = state.player.hitbox();
        for projectile in &state.projectiles {
            let proj_hb = hitbox(
                &projectile.visual_box(&state.world),
                PROJECTILE_HITBOX_SCALE,
                PROJECTILE_HITBOX_SCALE,
            );
            if player_hb.intersects(&proj_hb) {
                state.phase = GamePhase::GameOver;
                events.push(GameEvent::SessionEnded {
                    cause: DeathCause::Projectile,
                });
                return events;
            }
        }
    }

    // Coins: consumed outside boss mode only; during the encounter coin
    // overlaps are ignored entirely.
    if !state.boss_mode {
        let world = state.world;
        let player_hb = state.player.hitbox();
        let mut picked = 0u32;
        state.coins.retain(|coin| {
            let screen_y = world.to_screen_y(coin.world_y);
            if !WorldClock::is_visible(screen_y, COIN_SIZE) {
                return true;
            }
            let coin_hb = hitbox(&coin.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
            if player_hb.intersects(&coin_hb) {
                picked += 1;
                false
            } else {
                true
            }
        });
        state.coins_collected += picked;
        for _ in 0..picked {
            events.push(GameEvent::CoinCollected);
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::boss::BossPhase;
    use crate::sim::{Boss, Coin, Projectile, Traffic};

    /// State with empty pools so tests place entities precisely.
    fn bare_state() -> GameState {
        let mut state = GameState::new(42);
        state.traffic.clear();
        state.coins.clear();
        state
    }

    /// A vehicle parked directly on the player.
    fn car_on_player(state: &GameState) -> Traffic {
        let center = state.player.rect.center();
        Traffic {
            kind: crate::sim::TrafficKind::Sedan,
            world_x: center.x - TRAFFIC_WIDTH / 2.0,
            world_y: state.world.camera_y + center.y - TRAFFIC_HEIGHT / 2.0,
            dir: crate::sim::Direction::Right,
            speed: 240.0,
        }
    }

    #[test]
    fn test_traffic_hit_ends_session() {
        let mut state = bare_state();
        let car = car_on_player(&state);
        state.traffic.push(car);

        let events = resolve_collisions(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::SessionEnded {
                cause: DeathCause::Traffic
            }]
        );
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_offscreen_traffic_ignored() {
        let mut state = bare_state();
        let mut car = car_on_player(&state);
        // Same X, but half a world away vertically
        car.world_y += 800.0;
        state.traffic.push(car);

        let events = resolve_collisions(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.phase, GamePhase::Playing);
    }

    fn boss_on_player(state: &GameState) -> Boss {
        let mut boss = Boss::spawn(state.world.camera_y, &state.tuning);
        let center = state.player.rect.center();
        boss.pos.x = center.x - BOSS_SIZE / 2.0;
        boss.pos.y = state.world.camera_y + center.y - BOSS_SIZE / 2.0;
        boss
    }

    #[test]
    fn test_resting_boss_is_lethal() {
        let mut state = bare_state();
        state.boss_mode = true;
        state.boss = Some(boss_on_player(&state));

        let events = resolve_collisions(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::SessionEnded {
                cause: DeathCause::Boss
            }]
        );
    }

    #[test]
    fn test_vulnerable_boss_pushes_and_damages_once() {
        let mut state = bare_state();
        state.boss_mode = true;
        let mut boss = boss_on_player(&state);
        boss.phase = BossPhase::Vulnerable;
        // Offset the player slightly right so the push axis is horizontal
        state.player.rect.x += 10.0;
        state.boss = Some(boss);

        let events = resolve_collisions(&mut state);
        assert_eq!(events, vec![GameEvent::BossHit { defeated: false }]);

        let boss = state.boss.as_ref().unwrap();
        assert_eq!(boss.hp, state.tuning.boss_max_hp - 1);

        // Hitboxes now flush along the push axis: no residual overlap
        let screen_y = state.world.to_screen_y(boss.pos.y);
        let boss_hb = hitbox(&boss.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
        assert!((state.player.hitbox().left() - boss_hb.right()).abs() < 1e-3);

        // Re-overlapping within the same window pushes but does no damage
        state.player.rect.set_center(
            boss_hb.center() + glam::Vec2::new(10.0, 0.0),
        );
        let events = resolve_collisions(&mut state);
        assert!(events.is_empty());
        assert_eq!(
            state.boss.as_ref().unwrap().hp,
            state.tuning.boss_max_hp - 1
        );
    }

    #[test]
    fn test_final_hit_defeats_and_rebuilds() {
        let mut state = bare_state();
        state.boss_mode = true;
        let mut boss = boss_on_player(&state);
        boss.phase = BossPhase::Vulnerable;
        boss.hp = 1;
        state.boss = Some(boss);

        let events = resolve_collisions(&mut state);
        assert_eq!(events, vec![GameEvent::BossHit { defeated: true }]);
        assert!(state.boss.is_none());
        assert!(state.boss_defeated);
        assert!(!state.boss_mode);
        assert_eq!(state.traffic.len(), 13);
        assert!(!state.coins.is_empty());
    }

    #[test]
    fn test_projectile_hit_ends_session() {
        let mut state = bare_state();
        state.boss_mode = true;
        let center = state.player.rect.center();
        state.projectiles.push(Projectile::new(
            glam::Vec2::new(center.x, state.world.camera_y + center.y),
            glam::Vec2::new(0.0, PROJECTILE_SPEED),
        ));

        let events = resolve_collisions(&mut state);
        assert_eq!(
            events,
            vec![GameEvent::SessionEnded {
                cause: DeathCause::Projectile
            }]
        );
    }

    #[test]
    fn test_coin_pickup() {
        let mut state = bare_state();
        let center = state.player.rect.center();
        state.coins.push(Coin {
            world_x: center.x - COIN_SIZE / 2.0,
            world_y: state.world.camera_y + center.y - COIN_SIZE / 2.0,
        });

        let events = resolve_collisions(&mut state);
        assert_eq!(events, vec![GameEvent::CoinCollected]);
        assert!(state.coins.is_empty());
        assert_eq!(state.coins_collected, 1);
    }

    #[test]
    fn test_coin_ignored_in_boss_mode() {
        let mut state = bare_state();
        state.boss_mode = true;
        let center = state.player.rect.center();
        state.coins.push(Coin {
            world_x: center.x - COIN_SIZE / 2.0,
            world_y: state.world.camera_y + center.y - COIN_SIZE / 2.0,
        });

        let events = resolve_collisions(&mut state);
        assert!(events.is_empty());
        assert_eq!(state.coins.len(), 1);
        assert_eq!(state.coins_collected, 0);
    }

    #[test]
    fn test_push_out_axes() {
        let boss_hb = Rect::new(100.0, 100.0, 60.0, 60.0);

        // Player to the right of the boss center
        let player_hb = Rect::new(150.0, 110.0, 30.0, 30.0);
        let shift = push_out(&player_hb, &boss_hb);
        assert_eq!(shift.y, 0.0);
        assert!((player_hb.left() + shift.x - boss_hb.right()).abs() < 1e-4);

        // Player above the boss center
        let player_hb = Rect::new(110.0, 80.0, 30.0, 30.0);
        let shift = push_out(&player_hb, &boss_hb);
        assert_eq!(shift.x, 0.0);
        assert!((player_hb.bottom() + shift.y - boss_hb.top()).abs() < 1e-4);
    }
}
