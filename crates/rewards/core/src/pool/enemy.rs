//! Fixed-weight pools for the opposing side and daily starters.
//!
//! Explicit zero weights are kept on purpose; they compile into the ignored
//! list and show up in diagnostics.

use super::WeightedEntry as E;
use super::{Pool, PoolKind};
use crate::reward::{RewardId, Tier};

pub(super) fn wild_pool() -> Pool {
    Pool::new(PoolKind::Wild)
        .with_tier(Tier::Common, vec![E::fixed(RewardId::Berry, 1)])
        .with_tier(Tier::Great, vec![E::fixed(RewardId::BaseStatBooster, 1)])
        .with_tier(
            Tier::Ultra,
            vec![
                E::fixed(RewardId::AttackTypeBooster, 10),
                E::fixed(RewardId::WhiteHerb, 0),
            ],
        )
        .with_tier(Tier::Rogue, vec![E::fixed(RewardId::LuckyEgg, 4)])
        .with_tier(Tier::Master, vec![E::fixed(RewardId::GoldenEgg, 1)])
}

pub(super) fn trainer_pool() -> Pool {
    Pool::new(PoolKind::Trainer)
        .with_tier(
            Tier::Common,
            vec![
                E::fixed(RewardId::Berry, 8),
                E::fixed(RewardId::BaseStatBooster, 3),
            ],
        )
        .with_tier(Tier::Great, vec![E::fixed(RewardId::BaseStatBooster, 3)])
        .with_tier(
            Tier::Ultra,
            vec![
                E::fixed(RewardId::AttackTypeBooster, 10),
                E::fixed(RewardId::WhiteHerb, 0),
            ],
        )
        .with_tier(
            Tier::Rogue,
            vec![
                E::fixed(RewardId::FocusBand, 2),
                E::fixed(RewardId::LuckyEgg, 4),
                E::fixed(RewardId::QuickClaw, 1),
                E::fixed(RewardId::GripClaw, 1),
                E::fixed(RewardId::WideLens, 1),
            ],
        )
        .with_tier(
            Tier::Master,
            vec![
                E::fixed(RewardId::KingsRock, 1),
                E::fixed(RewardId::Leftovers, 1),
                E::fixed(RewardId::ShellBell, 1),
                E::fixed(RewardId::ScopeLens, 1),
            ],
        )
}

/// Rogue and Master are left empty.
pub(super) fn enemy_buff_pool() -> Pool {
    Pool::new(PoolKind::EnemyBuff)
        .with_tier(
            Tier::Common,
            vec![
                E::fixed(RewardId::EnemyDamageBooster, 9),
                E::fixed(RewardId::EnemyDamageReduction, 9),
                E::fixed(RewardId::EnemyAttackPoisonChance, 3),
                E::fixed(RewardId::EnemyAttackParalyzeChance, 3),
                E::fixed(RewardId::EnemyAttackBurnChance, 3),
                E::fixed(RewardId::EnemyStatusEffectHealChance, 9),
                E::fixed(RewardId::EnemyEndureChance, 4),
                E::fixed(RewardId::EnemyFusedChance, 1),
            ],
        )
        .with_tier(
            Tier::Great,
            vec![
                E::fixed(RewardId::EnemyDamageBooster, 5),
                E::fixed(RewardId::EnemyDamageReduction, 5),
                E::fixed(RewardId::EnemyStatusEffectHealChance, 5),
                E::fixed(RewardId::EnemyEndureChance, 5),
                E::fixed(RewardId::EnemyFusedChance, 1),
            ],
        )
        .with_tier(
            Tier::Ultra,
            vec![
                E::fixed(RewardId::EnemyDamageBooster, 10),
                E::fixed(RewardId::EnemyDamageReduction, 10),
                E::fixed(RewardId::EnemyHeal, 10),
                E::fixed(RewardId::EnemyStatusEffectHealChance, 10),
                E::fixed(RewardId::EnemyEndureChance, 10),
                E::fixed(RewardId::EnemyFusedChance, 5),
            ],
        )
}

pub(super) fn daily_starter_pool() -> Pool {
    Pool::new(PoolKind::DailyStarter)
        .with_tier(
            Tier::Common,
            vec![
                E::fixed(RewardId::BaseStatBooster, 1),
                E::fixed(RewardId::Berry, 3),
            ],
        )
        .with_tier(Tier::Great, vec![E::fixed(RewardId::AttackTypeBooster, 5)])
        .with_tier(
            Tier::Ultra,
            vec![
                E::fixed(RewardId::ReviverSeed, 4),
                E::fixed(RewardId::SootheBell, 1),
                E::fixed(RewardId::SoulDew, 1),
                E::fixed(RewardId::GoldenPunch, 1),
            ],
        )
        .with_tier(
            Tier::Rogue,
            vec![
                E::fixed(RewardId::GripClaw, 5),
                E::fixed(RewardId::BatonPass, 2),
                E::fixed(RewardId::FocusBand, 5),
                E::fixed(RewardId::QuickClaw, 3),
                E::fixed(RewardId::KingsRock, 3),
            ],
        )
        .with_tier(
            Tier::Master,
            vec![
                E::fixed(RewardId::Leftovers, 1),
                E::fixed(RewardId::ShellBell, 1),
            ],
        )
}
