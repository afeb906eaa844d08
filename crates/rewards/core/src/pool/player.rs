use super::weights;
use super::WeightedEntry as E;
use super::{Pool, PoolKind};
use crate::reward::{RewardId, Tier};

pub(super) fn player_pool() -> Pool {
    Pool::new(PoolKind::Player)
        .with_tier(
            Tier::Common,
            vec![
                E::fixed(RewardId::Pokeball, 6),
                E::fixed(RewardId::RareCandy, 2),
                E::dynamic(RewardId::Potion, weights::potion, 9),
                E::dynamic(RewardId::SuperPotion, weights::super_potion, 3),
                E::dynamic(RewardId::Ether, weights::ether, 9),
                E::dynamic(RewardId::MaxEther, weights::max_ether, 3),
                E::dynamic(RewardId::Lure, weights::lure, 2),
                E::fixed(RewardId::TempStatStageBooster, 4),
                E::fixed(RewardId::Berry, 2),
                E::fixed(RewardId::TmCommon, 2),
            ],
        )
        .with_tier(
            Tier::Great,
            vec![
                E::fixed(RewardId::GreatBall, 6),
                E::fixed(RewardId::PpUp, 2),
                E::dynamic(RewardId::FullHeal, weights::full_heal, 9),
                E::dynamic(RewardId::Revive, weights::revive, 9),
                E::dynamic(RewardId::MaxRevive, weights::max_revive, 3),
                E::dynamic(RewardId::SacredAsh, weights::sacred_ash, 1),
                E::dynamic(RewardId::HyperPotion, weights::hyper_potion, 9),
                E::dynamic(RewardId::Elixir, weights::elixir, 9),
                E::dynamic(RewardId::MaxElixir, weights::max_elixir, 3),
                E::fixed(RewardId::DireHit, 4),
                E::dynamic(RewardId::SuperLure, weights::super_lure, 4),
                E::dynamic(RewardId::Nugget, weights::nugget, 5),
                E::dynamic(RewardId::EvolutionItem, weights::evolution_item, 8),
                E::dynamic(RewardId::Map, weights::map, 2),
                E::fixed(RewardId::TmGreat, 3),
                E::fixed(RewardId::BaseStatBooster, 3),
            ],
        )
        .with_tier(
            Tier::Ultra,
            vec![
                E::fixed(RewardId::UltraBall, 15),
                E::fixed(RewardId::MaxLure, 4),
                E::fixed(RewardId::BigNugget, 12),
                E::fixed(RewardId::PpMax, 3),
                E::dynamic(RewardId::RareEvolutionItem, weights::rare_evolution_item, 32),
                E::dynamic(RewardId::FormChangeItem, weights::form_change_item, 24),
                E::fixed(RewardId::AmuletCoin, 3),
                E::fixed(RewardId::TmUltra, 11),
                E::fixed(RewardId::RarerCandy, 4),
                E::fixed(RewardId::AttackTypeBooster, 9),
                E::fixed(RewardId::ExpShare, 10),
                E::fixed(RewardId::ExpCharm, 8),
                E::fixed(RewardId::ReviverSeed, 4),
                E::fixed(RewardId::WideLens, 5),
            ],
        )
        .with_tier(
            Tier::Rogue,
            vec![
                E::fixed(RewardId::RogueBall, 16),
                E::dynamic(RewardId::RelicGold, weights::relic_gold, 2),
                E::fixed(RewardId::Leftovers, 3),
                E::fixed(RewardId::ShellBell, 3),
                E::fixed(RewardId::BerryPouch, 4),
                E::fixed(RewardId::GripClaw, 5),
                E::fixed(RewardId::ScopeLens, 4),
                E::fixed(RewardId::FocusBand, 5),
                E::fixed(RewardId::KingsRock, 3),
                E::fixed(RewardId::QuickClaw, 3),
                E::fixed(RewardId::SuperExpCharm, 8),
                E::fixed(RewardId::LockCapsule, 3),
            ],
        )
        .with_tier(
            Tier::Master,
            vec![
                E::fixed(RewardId::MasterBall, 24),
                E::fixed(RewardId::ShinyCharm, 14),
                E::fixed(RewardId::HealingCharm, 18),
                E::fixed(RewardId::MultiLens, 18),
            ],
        )
}
