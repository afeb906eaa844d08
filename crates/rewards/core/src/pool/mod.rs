//! Weighted reward pools.
//!
//! A pool maps each drawable tier to an ordered list of weighted entries.
//! Entry order is significant: it fixes the index each entry gets in the
//! compiled threshold table.
mod enemy;
mod player;
mod thresholds;
mod weights;

use std::sync::OnceLock;

use crate::env::PartySnapshot;
use crate::reward::{RewardId, Tier};

pub use thresholds::{
    CompiledThresholds, TierThresholds, compile, effective_weight, tier_from_pool,
};

/// Named pools, each compiled independently.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PoolKind {
    Player,
    Wild,
    Trainer,
    EnemyBuff,
    DailyStarter,
}

impl PoolKind {
    /// Whether party luck drives upgrades when drawing from this pool.
    pub const fn uses_luck(self) -> bool {
        matches!(self, PoolKind::Player)
    }
}

/// Weight evaluated against the party at compile time.
pub type WeightFn = fn(&PartySnapshot, u32) -> u32;

#[derive(Clone, Copy)]
pub enum Weight {
    Fixed(u32),
    /// Pure function of `(party, reroll_count)`.
    Dynamic(WeightFn),
}

impl core::fmt::Debug for Weight {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Weight::Fixed(weight) => write!(f, "Fixed({weight})"),
            Weight::Dynamic(_) => f.write_str("Dynamic"),
        }
    }
}

/// One pool row.
#[derive(Clone, Copy, Debug)]
pub struct WeightedEntry {
    pub id: RewardId,
    pub weight: Weight,
    /// Display-only ceiling for diagnostics. Never read by draws.
    pub max_weight: u32,
}

impl WeightedEntry {
    pub const fn fixed(id: RewardId, weight: u32) -> Self {
        Self {
            id,
            weight: Weight::Fixed(weight),
            max_weight: weight,
        }
    }

    pub const fn dynamic(id: RewardId, weight: WeightFn, max_weight: u32) -> Self {
        Self {
            id,
            weight: Weight::Dynamic(weight),
            max_weight,
        }
    }

    /// Raw weight before stack saturation is considered.
    pub fn weight_for(&self, party: &PartySnapshot, reroll_count: u32) -> u32 {
        match self.weight {
            Weight::Fixed(weight) => weight,
            Weight::Dynamic(weight) => weight(party, reroll_count),
        }
    }
}

/// Tier-indexed weighted entries.
#[derive(Clone, Debug)]
pub struct Pool {
    kind: PoolKind,
    tiers: [Vec<WeightedEntry>; Tier::COUNT],
}

impl Pool {
    pub fn new(kind: PoolKind) -> Self {
        Self {
            kind,
            tiers: Default::default(),
        }
    }

    /// Replace the entries of `tier`. Non-drawable tiers are ignored.
    #[must_use]
    pub fn with_tier(mut self, tier: Tier, entries: Vec<WeightedEntry>) -> Self {
        if let Some(slot) = self.tiers.get_mut(tier.index()) {
            *slot = entries;
        }
        self
    }

    pub const fn kind(&self) -> PoolKind {
        self.kind
    }

    pub fn entries(&self, tier: Tier) -> &[WeightedEntry] {
        self.tiers
            .get(tier.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn entry(&self, tier: Tier, index: usize) -> Option<&WeightedEntry> {
        self.entries(tier).get(index)
    }

    /// Tiers that list at least one entry, weight aside.
    pub fn defined_tiers(&self) -> impl Iterator<Item = Tier> + '_ {
        Tier::DRAWABLE
            .into_iter()
            .filter(|tier| !self.entries(*tier).is_empty())
    }
}

/// Built-in pool of the given kind.
pub fn pool(kind: PoolKind) -> &'static Pool {
    static PLAYER: OnceLock<Pool> = OnceLock::new();
    static WILD: OnceLock<Pool> = OnceLock::new();
    static TRAINER: OnceLock<Pool> = OnceLock::new();
    static ENEMY_BUFF: OnceLock<Pool> = OnceLock::new();
    static DAILY_STARTER: OnceLock<Pool> = OnceLock::new();

    match kind {
        PoolKind::Player => PLAYER.get_or_init(player::player_pool),
        PoolKind::Wild => WILD.get_or_init(enemy::wild_pool),
        PoolKind::Trainer => TRAINER.get_or_init(enemy::trainer_pool),
        PoolKind::EnemyBuff => ENEMY_BUFF.get_or_init(enemy::enemy_buff_pool),
        PoolKind::DailyStarter => DAILY_STARTER.get_or_init(enemy::daily_starter_pool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_builtin_pool_has_a_drawable_tier() {
        for kind in PoolKind::iter() {
            assert!(pool(kind).defined_tiers().next().is_some(), "{kind} is empty");
            assert_eq!(pool(kind).kind(), kind);
        }
    }

    #[test]
    fn enemy_buff_pool_stops_at_ultra() {
        let buffs = pool(PoolKind::EnemyBuff);
        assert!(buffs.entries(Tier::Rogue).is_empty());
        assert!(buffs.entries(Tier::Master).is_empty());
        assert!(!buffs.entries(Tier::Ultra).is_empty());
    }

    #[test]
    fn luxury_tier_is_never_populated() {
        let custom = Pool::new(PoolKind::Player)
            .with_tier(Tier::Luxury, vec![WeightedEntry::fixed(RewardId::Potion, 1)]);
        assert!(custom.entries(Tier::Luxury).is_empty());
        assert!(custom.defined_tiers().next().is_none());
    }
}
