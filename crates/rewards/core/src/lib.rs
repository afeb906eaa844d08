//! Deterministic reward generation for a roguelike battler.
//!
//! `reward-core` turns a party snapshot, a random stream and a requested
//! quantity into rarity-tiered reward offers. All drawing flows through
//! [`engine::RewardEngine`]; the catalog, pools and threshold compiler it
//! reads are exposed for tooling and tests.
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod env;
pub mod error;
pub mod luck;
pub mod pool;
pub mod reward;
pub mod shop;

pub use config::{EngineConfig, EventConfig};
pub use diagnostics::{EntryReport, PoolReport, TierReport};
pub use engine::{
    BatchRequest, CustomSettings, DrawContext, DrawError, DrawOutcome, EnemyBuffDraw,
    GuaranteedSpec, OverrideEntry, OverrideTable, RewardEngine, TierRequest,
};
pub use env::{
    GameMode, HeldStack, LearnableTm, MemberView, MoveId, MoveSlot, MoveType, PartySnapshot,
    PcgRng, RngOracle, RunStack, SequenceRng, SpeciesId,
};
pub use error::{EngineError, ErrorSeverity};
pub use luck::{luck_grade, luck_tier, party_luck};
pub use pool::{CompiledThresholds, Pool, PoolKind, WeightedEntry, compile, pool};
pub use reward::{PregenArg, Reward, RewardGenerator, RewardId, RewardKind, RewardOption, Tier};
pub use shop::{reroll_cost, shop_options_for_wave};
