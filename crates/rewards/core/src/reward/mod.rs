//! Reward catalog, tiers and concrete definitions.
pub mod catalog;
mod definition;
mod generator;
mod id;
pub mod items;
mod kind;
mod tier;

pub use catalog::{CatalogEntry, resolve};
pub use definition::{Reward, RewardOption, clamp_cost};
pub use generator::{PregenArg, RewardGenerator};
pub use id::RewardId;
pub use items::{
    BallKind, BattleStat, BerryKind, EnemyBuff, EvolutionItem, FormChangeItem, HeldItem,
    PermanentStat, PersistentItem,
};
pub use kind::{
    ApplyTarget, MAX_BALLS_PER_KIND, MAX_TYPE_BOOSTER_STACK, MAX_VITAMIN_STACK, RewardKind,
};
pub use tier::Tier;
