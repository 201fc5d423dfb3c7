//! Infinite Road entry point
//!
//! Headless demo driver: runs one session under a simple autopilot at the
//! fixed simulation rate, persists the result, and prints the player's
//! aggregate stats. Rendering and input devices hang off the same `tick`
//! API; this binary exercises the full session lifecycle without them.

use std::path::Path;
use std::process::ExitCode;

use infinite_road::Tuning;
use infinite_road::consts::*;
use infinite_road::persistence::StatsStore;
use infinite_road::sim::{
    GameEvent, GamePhase, GameState, TickInput, WorldClock, hitbox, tick,
};

/// Stop a demo session after 30 simulated minutes (at 60 Hz) if nothing
/// has killed it.
const MAX_DEMO_TICKS: u64 = 30 * 60 * 60;

fn main() -> ExitCode {
    env_logger::init();

    let username = std::env::args().nth(1).unwrap_or_else(|| "driver".into());

    let mut store = match StatsStore::open("stats.json") {
        Ok(store) => store,
        Err(e) => {
            log::error!("cannot open stats store: {e}");
            return ExitCode::FAILURE;
        }
    };
    let player_id = match store.get_or_create_player(&username) {
        Ok(id) => id,
        Err(e) => {
            log::error!("cannot create player {username:?}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let tuning = Tuning::load_or_default(Path::new("tuning.json"));
    let seed: u64 = rand::random();
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("session start for {username:?} (seed {seed:#018x})");

    while state.phase == GamePhase::Playing && state.time_ticks < MAX_DEMO_TICKS {
        let input = autopilot(&state);
        for event in tick(&mut state, &input, SIM_DT) {
            match event {
                GameEvent::CoinCollected => log::debug!("coin collected"),
                GameEvent::BossHit { defeated } => {
                    log::info!("boss hit (defeated: {defeated})")
                }
                GameEvent::SessionEnded { cause } => {
                    log::info!("session ended: {cause:?}")
                }
            }
        }
    }

    let score = state.total_score();
    // Persistence failure must not block shutdown
    if let Err(e) = store.save_score(player_id, score, state.distance, state.coins_collected) {
        log::error!("failed to save score: {e}");
    }

    let stats = store.get_player_stats(player_id);
    println!("--- session over ---");
    println!("score:     {score}");
    println!("distance:  {:.0}", state.distance);
    println!("coins:     {}", state.coins_collected);
    println!(
        "boss:      {}",
        if state.boss_defeated {
            "defeated"
        } else {
            "not defeated"
        }
    );
    println!("--- {username} all-time ---");
    println!("games:     {}", stats.games_played);
    println!("high:      {}", stats.high_score);
    println!("average:   {:.1}", stats.avg_score);
    println!("coins:     {}", stats.coins);

    ExitCode::SUCCESS
}

/// Minimal self-play input: drive forward and sidestep converging traffic;
/// during the boss fight, ram the boss while it is vulnerable and keep away
/// otherwise.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    let player_hb = state.player.hitbox();

    if !state.boss_mode {
        input.up = true;
        for car in &state.traffic {
            let screen_y = state.world.to_screen_y(car.world_y);
            if !WorldClock::is_visible(screen_y, TRAFFIC_HEIGHT) {
                continue;
            }
            let car_hb = hitbox(&car.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
            let delta = car_hb.center() - player_hb.center();
            if delta.y.abs() < 90.0 && delta.x.abs() < 120.0 {
                if delta.x > 0.0 {
                    input.left = true;
                } else {
                    input.right = true;
                }
            }
        }
    } else if let Some(boss) = &state.boss {
        let screen_y = state.world.to_screen_y(boss.pos.y);
        let boss_hb = hitbox(&boss.visual_box(screen_y), HITBOX_SCALE_X, HITBOX_SCALE_Y);
        let delta = boss_hb.center() - player_hb.center();
        if boss.is_vulnerable() && !boss.took_hit_this_phase {
            input.left = delta.x < -4.0;
            input.right = delta.x > 4.0;
            input.up = delta.y < -4.0;
            input.down = delta.y > 4.0;
        } else {
            input.left = delta.x > 0.0;
            input.right = delta.x <= 0.0;
            input.up = delta.y > 0.0;
            input.down = delta.y <= 0.0;
        }
    }

    input
}
