//! Per-player statistics and skin unlock store
//!
//! A small JSON file holds every player's session results and unlocked
//! skins. The session driver writes one score record at session end and the
//! menu/shop layers read aggregates from here; the sim core never touches
//! this module.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type PlayerId = u64;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stats store I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stats store is corrupt: {0}")]
    Format(#[from] serde_json::Error),
    #[error("unknown player id {0}")]
    UnknownPlayer(PlayerId),
}

/// One finished session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub score: u32,
    pub distance: f32,
    pub coins: u32,
    /// Unix seconds when the session ended
    pub played_at: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    username: String,
    sessions: Vec<SessionRecord>,
    skins: Vec<String>,
    #[serde(default)]
    coins_spent: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    next_player_id: PlayerId,
    players: Vec<PlayerRecord>,
}

/// Aggregates over all of a player's saved sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub games_played: u32,
    pub high_score: u32,
    pub avg_score: f64,
    /// Collected minus spent; can go negative if the ledger is abused
    pub coins: i64,
}

/// File-backed statistics store. Every mutation is flushed to disk before
/// returning.
#[derive(Debug)]
pub struct StatsStore {
    path: PathBuf,
    data: StoreData,
}

impl StatsStore {
    /// Open the store at `path`. A missing file means an empty store; a
    /// present-but-corrupt file is an error rather than silent data loss.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no stats store at {}, starting fresh", path.display());
                StoreData::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, data })
    }

    fn flush(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn player(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.data.players.iter().find(|p| p.id == id)
    }

    fn player_mut(&mut self, id: PlayerId) -> Result<&mut PlayerRecord, StoreError> {
        self.data
            .players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::UnknownPlayer(id))
    }

    /// Look up a player by name, creating the record on first sight.
    pub fn get_or_create_player(&mut self, username: &str) -> Result<PlayerId, StoreError> {
        if let Some(p) = self.data.players.iter().find(|p| p.username == username) {
            return Ok(p.id);
        }
        let id = self.data.next_player_id;
        self.data.next_player_id += 1;
        self.data.players.push(PlayerRecord {
            id,
            username: username.to_string(),
            sessions: Vec::new(),
            skins: Vec::new(),
            coins_spent: 0,
        });
        self.flush()?;
        log::info!("created player {username:?} (id {id})");
        Ok(id)
    }

    /// Record one finished session.
    pub fn save_score(
        &mut self,
        id: PlayerId,
        score: u32,
        distance: f32,
        coins: u32,
    ) -> Result<(), StoreError> {
        let played_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.player_mut(id)?.sessions.push(SessionRecord {
            score,
            distance,
            coins,
            played_at,
        });
        self.flush()
    }

    /// Aggregate statistics. An unknown player reads as all zeroes.
    pub fn get_player_stats(&self, id: PlayerId) -> PlayerStats {
        let Some(player) = self.player(id) else {
            return PlayerStats {
                games_played: 0,
                high_score: 0,
                avg_score: 0.0,
                coins: 0,
            };
        };
        let games_played = player.sessions.len() as u32;
        let high_score = player.sessions.iter().map(|s| s.score).max().unwrap_or(0);
        let total: u64 = player.sessions.iter().map(|s| s.score as u64).sum();
        let avg_score = if games_played == 0 {
            0.0
        } else {
            total as f64 / games_played as f64
        };
        let collected: i64 = player.sessions.iter().map(|s| s.coins as i64).sum();
        PlayerStats {
            games_played,
            high_score,
            avg_score,
            coins: collected - player.coins_spent as i64,
        }
    }

    pub fn player_owns_skin(&self, id: PlayerId, skin_name: &str) -> bool {
        self.player(id)
            .is_some_and(|p| p.skins.iter().any(|s| s == skin_name))
    }

    /// Mark a skin as owned. Idempotent: unlocking an owned skin is a no-op.
    pub fn unlock_skin(&mut self, id: PlayerId, skin_name: &str) -> Result<(), StoreError> {
        let player = self.player_mut(id)?;
        if !player.skins.iter().any(|s| s == skin_name) {
            player.skins.push(skin_name.to_string());
            self.flush()?;
        }
        Ok(())
    }

    /// Deduct from the player's coin balance.
    pub fn spend_coins(&mut self, id: PlayerId, amount: u32) -> Result<(), StoreError> {
        self.player_mut(id)?.coins_spent += amount;
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, StatsStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::open(dir.path().join("stats.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_get_or_create_is_stable() {
        let (_dir, mut store) = temp_store();
        let a = store.get_or_create_player("alex").unwrap();
        let b = store.get_or_create_player("alex").unwrap();
        let c = store.get_or_create_player("sam").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_stats_aggregate_sessions() {
        let (_dir, mut store) = temp_store();
        let id = store.get_or_create_player("alex").unwrap();

        store.save_score(id, 210, 10500.0, 4).unwrap();
        store.save_score(id, 90, 4500.0, 1).unwrap();

        let stats = store.get_player_stats(id);
        assert_eq!(stats.games_played, 2);
        assert_eq!(stats.high_score, 210);
        assert!((stats.avg_score - 150.0).abs() < 1e-9);
        assert_eq!(stats.coins, 5);
    }

    #[test]
    fn test_unknown_player_reads_zero() {
        let (_dir, store) = temp_store();
        let stats = store.get_player_stats(999);
        assert_eq!(stats.games_played, 0);
        assert_eq!(stats.coins, 0);
    }

    #[test]
    fn test_skin_unlock_idempotent() {
        let (_dir, mut store) = temp_store();
        let id = store.get_or_create_player("alex").unwrap();

        assert!(!store.player_owns_skin(id, "peacock"));
        store.unlock_skin(id, "peacock").unwrap();
        store.unlock_skin(id, "peacock").unwrap();
        assert!(store.player_owns_skin(id, "peacock"));
    }

    #[test]
    fn test_spend_coins_reduces_balance() {
        let (_dir, mut store) = temp_store();
        let id = store.get_or_create_player("alex").unwrap();
        store.save_score(id, 100, 5000.0, 50).unwrap();
        store.spend_coins(id, 40).unwrap();
        assert_eq!(store.get_player_stats(id).coins, 10);
    }

    #[test]
    fn test_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");

        let id = {
            let mut store = StatsStore::open(&path).unwrap();
            let id = store.get_or_create_player("alex").unwrap();
            store.save_score(id, 42, 2100.0, 3).unwrap();
            store.unlock_skin(id, "robot").unwrap();
            id
        };

        let store = StatsStore::open(&path).unwrap();
        assert_eq!(store.get_player_stats(id).high_score, 42);
        assert!(store.player_owns_skin(id, "robot"));
    }

    #[test]
    fn test_corrupt_store_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(
            StatsStore::open(&path),
            Err(StoreError::Format(_))
        ));
    }
}
