//! Skin catalogue and purchase flow
//!
//! The shop screen itself is presentation; this module holds the catalogue
//! and the ownership/affordability rules it runs on. Purchases unlock a skin
//! in the stats store; the default skin is always available.

use crate::persistence::{PlayerId, StatsStore, StoreError};

/// A purchasable player skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    pub name: &'static str,
    /// Coin price; zero means always owned
    pub price: u32,
    pub sprite_sheet: &'static str,
}

/// Everything the shop sells, default skin first.
pub const CATALOGUE: [Skin; 4] = [
    Skin {
        name: "porcupine",
        price: 0,
        sprite_sheet: "Porcupine - sprite sheet.png",
    },
    Skin {
        name: "peacock",
        price: 40,
        sprite_sheet: "Peacock-walk-Sheet.png",
    },
    Skin {
        name: "robot",
        price: 80,
        sprite_sheet: "robotgood.png",
    },
    Skin {
        name: "plane",
        price: 120,
        sprite_sheet: "plane_4x4_single.png",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    /// Already owned (or free); selected without charge
    Selected,
    /// Newly unlocked and selected
    Unlocked,
    /// Not owned and the player can't afford it
    InsufficientCoins,
}

/// Select a skin, unlocking it first if needed and affordable.
pub fn select_or_purchase(
    store: &mut StatsStore,
    player: PlayerId,
    skin: &Skin,
) -> Result<PurchaseOutcome, StoreError> {
    if skin.price == 0 || store.player_owns_skin(player, skin.name) {
        return Ok(PurchaseOutcome::Selected);
    }
    let coins = store.get_player_stats(player).coins;
    if coins < skin.price as i64 {
        return Ok(PurchaseOutcome::InsufficientCoins);
    }
    store.unlock_skin(player, skin.name)?;
    log::info!("player {player} unlocked skin {:?}", skin.name);
    Ok(PurchaseOutcome::Unlocked)
}
