//! Static catalog: what each [`RewardId`] stands for.
//!
//! Fixed entries always resolve to the same kind. Generator entries sample a
//! concrete kind from the party at draw time.

use crate::env::{PartySnapshot, RngOracle};
use crate::reward::generator::{PregenArg, RewardGenerator};
use crate::reward::items::{BallKind, EnemyBuff, HeldItem, PersistentItem};
use crate::reward::{Reward, RewardId, RewardKind, Tier};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEntry {
    Fixed(RewardKind),
    Generator(RewardGenerator),
}

impl CatalogEntry {
    pub const fn is_generator(&self) -> bool {
        matches!(self, CatalogEntry::Generator(_))
    }

    /// The kind this entry resolves to without sampling, if any.
    pub fn fixed_kind(&self) -> Option<&RewardKind> {
        match self {
            CatalogEntry::Fixed(kind) => Some(kind),
            CatalogEntry::Generator(_) => None,
        }
    }
}

const fn balls(ball: BallKind, count: u8) -> CatalogEntry {
    CatalogEntry::Fixed(RewardKind::Pokeball { ball, count })
}

const fn held(item: HeldItem) -> CatalogEntry {
    CatalogEntry::Fixed(RewardKind::Held(item))
}

const fn persistent(item: PersistentItem) -> CatalogEntry {
    CatalogEntry::Fixed(RewardKind::Persistent(item))
}

const fn buff(kind: EnemyBuff) -> CatalogEntry {
    CatalogEntry::Fixed(RewardKind::EnemyBuff(kind))
}

const fn healing(points: u16, percent: u8, heal_status: bool) -> CatalogEntry {
    CatalogEntry::Fixed(RewardKind::Healing {
        points,
        percent,
        heal_status,
    })
}

/// Catalog lookup. Total over [`RewardId`].
pub fn entry(id: RewardId) -> CatalogEntry {
    use CatalogEntry::{Fixed, Generator};

    match id {
        RewardId::Pokeball => balls(BallKind::Poke, 5),
        RewardId::GreatBall => balls(BallKind::Great, 5),
        RewardId::UltraBall => balls(BallKind::Ultra, 5),
        RewardId::RogueBall => balls(BallKind::Rogue, 5),
        RewardId::MasterBall => balls(BallKind::Master, 1),

        RewardId::RareCandy => Fixed(RewardKind::Candy {
            levels: 1,
            party_wide: false,
        }),
        RewardId::RarerCandy => Fixed(RewardKind::Candy {
            levels: 1,
            party_wide: true,
        }),
        RewardId::Potion => healing(20, 10, false),
        RewardId::SuperPotion => healing(50, 25, false),
        RewardId::HyperPotion => healing(200, 50, false),
        RewardId::MaxPotion => healing(0, 100, false),
        RewardId::FullRestore => healing(0, 100, true),
        RewardId::Revive => Fixed(RewardKind::Revive {
            percent: 50,
            party_wide: false,
        }),
        RewardId::MaxRevive => Fixed(RewardKind::Revive {
            percent: 100,
            party_wide: false,
        }),
        RewardId::SacredAsh => Fixed(RewardKind::Revive {
            percent: 100,
            party_wide: true,
        }),
        RewardId::Ether => Fixed(RewardKind::PpRestore {
            points: Some(10),
            all_moves: false,
        }),
        RewardId::MaxEther => Fixed(RewardKind::PpRestore {
            points: None,
            all_moves: false,
        }),
        RewardId::Elixir => Fixed(RewardKind::PpRestore {
            points: Some(10),
            all_moves: true,
        }),
        RewardId::MaxElixir => Fixed(RewardKind::PpRestore {
            points: None,
            all_moves: true,
        }),
        RewardId::PpUp => Fixed(RewardKind::PpUp { full: false }),
        RewardId::PpMax => Fixed(RewardKind::PpUp { full: true }),
        RewardId::FullHeal => Fixed(RewardKind::StatusCure),
        RewardId::Lure => Fixed(RewardKind::Lure { waves: 10 }),
        RewardId::SuperLure => Fixed(RewardKind::Lure { waves: 15 }),
        RewardId::MaxLure => Fixed(RewardKind::Lure { waves: 30 }),
        RewardId::TempStatStageBooster => Generator(RewardGenerator::TempStatBoost),
        RewardId::DireHit => Fixed(RewardKind::CritBoost),

        RewardId::Nugget => Fixed(RewardKind::Money {
            multiplier_tenths: 10,
        }),
        RewardId::BigNugget => Fixed(RewardKind::Money {
            multiplier_tenths: 25,
        }),
        RewardId::RelicGold => Fixed(RewardKind::Money {
            multiplier_tenths: 100,
        }),

        RewardId::Berry => Generator(RewardGenerator::Berry),
        RewardId::BaseStatBooster => Generator(RewardGenerator::Vitamin),
        RewardId::AttackTypeBooster => Generator(RewardGenerator::TypeBooster),
        RewardId::EvolutionItem => Generator(RewardGenerator::Evolution { rare: false }),
        RewardId::RareEvolutionItem => Generator(RewardGenerator::Evolution { rare: true }),
        RewardId::FormChangeItem => Generator(RewardGenerator::FormChange),
        RewardId::TmCommon => Generator(RewardGenerator::Tm(Tier::Common)),
        RewardId::TmGreat => Generator(RewardGenerator::Tm(Tier::Great)),
        RewardId::TmUltra => Generator(RewardGenerator::Tm(Tier::Ultra)),

        RewardId::Leftovers => held(HeldItem::Leftovers),
        RewardId::ShellBell => held(HeldItem::ShellBell),
        RewardId::FocusBand => held(HeldItem::FocusBand),
        RewardId::KingsRock => held(HeldItem::KingsRock),
        RewardId::QuickClaw => held(HeldItem::QuickClaw),
        RewardId::GripClaw => held(HeldItem::GripClaw),
        RewardId::ScopeLens => held(HeldItem::ScopeLens),
        RewardId::WideLens => held(HeldItem::WideLens),
        RewardId::MultiLens => held(HeldItem::MultiLens),
        RewardId::ReviverSeed => held(HeldItem::ReviverSeed),
        RewardId::LuckyEgg => held(HeldItem::LuckyEgg),
        RewardId::GoldenEgg => held(HeldItem::GoldenEgg),
        RewardId::WhiteHerb => held(HeldItem::WhiteHerb),
        RewardId::BatonPass => held(HeldItem::BatonPass),
        RewardId::SoulDew => held(HeldItem::SoulDew),
        RewardId::SootheBell => held(HeldItem::SootheBell),
        RewardId::GoldenPunch => held(HeldItem::GoldenPunch),
        RewardId::MiniBlackHole => held(HeldItem::MiniBlackHole),

        RewardId::ExpShare => persistent(PersistentItem::ExpShare),
        RewardId::ExpCharm => persistent(PersistentItem::ExpCharm),
        RewardId::SuperExpCharm => persistent(PersistentItem::SuperExpCharm),
        RewardId::AmuletCoin => persistent(PersistentItem::AmuletCoin),
        RewardId::ShinyCharm => persistent(PersistentItem::ShinyCharm),
        RewardId::HealingCharm => persistent(PersistentItem::HealingCharm),
        RewardId::BerryPouch => persistent(PersistentItem::BerryPouch),
        RewardId::LockCapsule => persistent(PersistentItem::LockCapsule),
        RewardId::Map => persistent(PersistentItem::Map),

        RewardId::EnemyDamageBooster => buff(EnemyBuff::DamageBooster),
        RewardId::EnemyDamageReduction => buff(EnemyBuff::DamageReduction),
        RewardId::EnemyHeal => buff(EnemyBuff::Heal),
        RewardId::EnemyAttackPoisonChance => buff(EnemyBuff::PoisonChance),
        RewardId::EnemyAttackParalyzeChance => buff(EnemyBuff::ParalyzeChance),
        RewardId::EnemyAttackBurnChance => buff(EnemyBuff::BurnChance),
        RewardId::EnemyStatusEffectHealChance => buff(EnemyBuff::StatusHealChance),
        RewardId::EnemyEndureChance => buff(EnemyBuff::EndureChance),
        RewardId::EnemyFusedChance => buff(EnemyBuff::FusedChance),
    }
}

/// Resolve `id` into a concrete reward.
///
/// Fixed entries ignore `pregen`. Generators use it when present, sample
/// otherwise, and may produce nothing. The result carries no tier yet.
pub fn resolve<R: RngOracle + ?Sized>(
    id: RewardId,
    party: &PartySnapshot,
    rng: &mut R,
    pregen: Option<&PregenArg>,
) -> Option<Reward> {
    match entry(id) {
        CatalogEntry::Fixed(kind) => Some(Reward::new(id, kind)),
        CatalogEntry::Generator(generator) => generator
            .generate(party, rng, pregen)
            .map(|kind| Reward::new(id, kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use strum::IntoEnumIterator;

    #[test]
    fn every_fixed_entry_has_a_distinct_name() {
        let mut names: Vec<String> = RewardId::iter()
            .filter_map(|id| entry(id).fixed_kind().map(RewardKind::name))
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn resolve_keeps_the_catalog_id() {
        let party = PartySnapshot::default();
        let mut rng = SequenceRng::repeat(0);
        let reward = resolve(RewardId::Berry, &party, &mut rng, None).unwrap();
        assert_eq!(reward.id, RewardId::Berry);
        assert_eq!(reward.tier, None);
        assert_eq!(reward.group(), Some("berry"));
    }

    #[test]
    fn empty_generators_resolve_to_nothing() {
        let party = PartySnapshot::default();
        let mut rng = SequenceRng::repeat(0);
        assert!(resolve(RewardId::FormChangeItem, &party, &mut rng, None).is_none());
        assert!(resolve(RewardId::Potion, &party, &mut rng, None).is_some());
    }
}
