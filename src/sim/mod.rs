//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod entity;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use boss::{Boss, BossPhase};
pub use collision::{hitbox, push_out, resolve_collisions};
pub use entity::{Coin, Direction, Projectile, Traffic, TrafficKind, build_coins, build_traffic};
pub use rect::Rect;
pub use state::{DeathCause, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
pub use world::WorldClock;
