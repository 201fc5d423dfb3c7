//! Data-driven game balance
//!
//! Balance numbers that are worth adjusting without recompiling. Geometry
//! constants that the renderer must agree with stay in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::secs_to_ticks;

/// Tunable balance parameters. Defaults match the shipped game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Height of one road tile (world wrap period)
    pub world_height: f32,
    /// Total score at which the boss encounter begins
    pub boss_trigger_score: u32,
    /// Boss hit points
    pub boss_max_hp: u32,
    /// Length of the non-vulnerable rest phase, seconds
    pub boss_rest_secs: f32,
    /// Length of the vulnerability window, seconds
    pub boss_vuln_secs: f32,
    /// Seconds between boss projectile volleys
    pub boss_shoot_cooldown_secs: f32,
    /// Boss bounce velocity, px/s
    pub boss_speed_x: f32,
    pub boss_speed_y: f32,
    /// World px of forward travel per point of distance score
    pub distance_per_point: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_height: crate::consts::WORLD_HEIGHT,
            boss_trigger_score: 200,
            boss_max_hp: 5,
            boss_rest_secs: 10.0,
            boss_vuln_secs: 5.0,
            boss_shoot_cooldown_secs: 1.0,
            boss_speed_x: 180.0,
            boss_speed_y: 120.0,
            distance_per_point: 50.0,
        }
    }
}

impl Tuning {
    /// Rest phase length in ticks at the nominal rate
    pub fn rest_ticks(&self) -> u32 {
        secs_to_ticks(self.boss_rest_secs)
    }

    /// Vulnerability window length in ticks
    pub fn vuln_ticks(&self) -> u32 {
        secs_to_ticks(self.boss_vuln_secs)
    }

    /// Projectile volley cooldown in ticks
    pub fn shoot_cooldown_ticks(&self) -> u32 {
        secs_to_ticks(self.boss_shoot_cooldown_secs)
    }

    /// Load tuning from a JSON file, falling back to defaults if the file
    /// is missing or malformed.
    pub fn load_or_default(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_ticks() {
        let tuning = Tuning::default();
        assert_eq!(tuning.rest_ticks(), 600);
        assert_eq!(tuning.vuln_ticks(), 300);
        assert_eq!(tuning.shoot_cooldown_ticks(), 60);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(std::path::Path::new("no_such_tuning.json"));
        assert_eq!(tuning.boss_max_hp, 5);
    }
}
