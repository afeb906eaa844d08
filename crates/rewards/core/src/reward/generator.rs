//! Generators that produce a concrete reward from the current party.
//!
//! A generator may legitimately produce nothing (no damaging moves, nobody who
//! can evolve). The draw layer treats that as "fall back to a lower tier".

use std::collections::BTreeMap;

use crate::env::{MoveId, MoveType, PartySnapshot, RngOracle};
use crate::reward::items::{BattleStat, BerryKind, EvolutionItem, FormChangeItem, PermanentStat};
use crate::reward::{RewardKind, Tier};

/// Argument that pins a generator's output instead of sampling.
///
/// Used by overrides and guaranteed specs. An argument of the wrong family for
/// the generator produces nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PregenArg {
    Berry(BerryKind),
    Stat(BattleStat),
    Vitamin(PermanentStat),
    MoveType(MoveType),
    Evolution(EvolutionItem),
    FormChange(FormChangeItem),
    Move(MoveId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardGenerator {
    Berry,
    TempStatBoost,
    Vitamin,
    TypeBooster,
    Evolution { rare: bool },
    FormChange,
    Tm(Tier),
}

impl RewardGenerator {
    /// Produce a concrete reward kind, or `None` if nothing fits the party.
    pub fn generate<R: RngOracle + ?Sized>(
        &self,
        party: &PartySnapshot,
        rng: &mut R,
        pregen: Option<&PregenArg>,
    ) -> Option<RewardKind> {
        if let Some(arg) = pregen {
            return self.from_pregen(arg);
        }
        match *self {
            RewardGenerator::Berry => Some(RewardKind::Berry(random_berry(rng))),
            RewardGenerator::TempStatBoost => {
                let stat = BattleStat::ALL[rng.below(BattleStat::ALL.len() as u32) as usize];
                Some(RewardKind::TempStatBoost(stat))
            }
            RewardGenerator::Vitamin => {
                let stat = PermanentStat::ALL[rng.below(PermanentStat::ALL.len() as u32) as usize];
                Some(RewardKind::Vitamin(stat))
            }
            RewardGenerator::TypeBooster => {
                type_booster(party, rng).map(RewardKind::TypeBooster)
            }
            RewardGenerator::Evolution { rare } => {
                let candidates = dedup(
                    party
                        .members
                        .iter()
                        .flat_map(|member| member.evolution_items.iter().copied())
                        .filter(|item| item.is_rare() == rare),
                );
                pick(&candidates, rng).map(RewardKind::Evolution)
            }
            RewardGenerator::FormChange => {
                let candidates = dedup(party.members.iter().flat_map(|member| {
                    member
                        .form_change_items
                        .iter()
                        .copied()
                        .filter(move |item| member.held(&RewardKind::FormChange(*item)).is_none())
                }));
                pick(&candidates, rng).map(RewardKind::FormChange)
            }
            RewardGenerator::Tm(tier) => {
                let candidates = dedup(party.members.iter().flat_map(|member| {
                    member
                        .learnable_tms
                        .iter()
                        .filter(move |tm| tm.tier == tier && !member.knows_move(tm.move_id))
                        .map(|tm| tm.move_id)
                }));
                pick(&candidates, rng).map(|move_id| RewardKind::Tm { move_id, tier })
            }
        }
    }

    fn from_pregen(&self, arg: &PregenArg) -> Option<RewardKind> {
        match (*self, *arg) {
            (RewardGenerator::Berry, PregenArg::Berry(berry)) => Some(RewardKind::Berry(berry)),
            (RewardGenerator::TempStatBoost, PregenArg::Stat(stat)) => {
                Some(RewardKind::TempStatBoost(stat))
            }
            (RewardGenerator::Vitamin, PregenArg::Vitamin(stat)) => Some(RewardKind::Vitamin(stat)),
            (RewardGenerator::TypeBooster, PregenArg::MoveType(move_type)) => {
                Some(RewardKind::TypeBooster(move_type))
            }
            (RewardGenerator::Evolution { rare }, PregenArg::Evolution(item))
                if item.is_rare() == rare =>
            {
                Some(RewardKind::Evolution(item))
            }
            (RewardGenerator::FormChange, PregenArg::FormChange(item)) => {
                Some(RewardKind::FormChange(item))
            }
            (RewardGenerator::Tm(tier), PregenArg::Move(move_id)) => {
                Some(RewardKind::Tm { move_id, tier })
            }
            _ => None,
        }
    }
}

/// Sitrus, Lum and Leppa take a sixth each; the rest share the remainder.
fn random_berry<R: RngOracle + ?Sized>(rng: &mut R) -> BerryKind {
    match rng.below(12) {
        0..=1 => BerryKind::Sitrus,
        2..=3 => BerryKind::Lum,
        4..=5 => BerryKind::Leppa,
        _ => {
            let pool = BerryKind::ALL.len() as u32 - 3;
            BerryKind::ALL[rng.below(pool) as usize + 2]
        }
    }
}

/// Types weighted by how many damaging moves of that type the party knows.
///
/// A member already holding a full stack of a booster stops contributing
/// that booster's type.
fn type_booster<R: RngOracle + ?Sized>(party: &PartySnapshot, rng: &mut R) -> Option<MoveType> {
    let mut weights: BTreeMap<MoveType, u32> = BTreeMap::new();
    for member in &party.members {
        for slot in member.moves.iter().filter(|slot| slot.damaging) {
            let full = member
                .held(&RewardKind::TypeBooster(slot.move_type))
                .is_some_and(|held| held.is_full());
            if !full {
                *weights.entry(slot.move_type).or_default() += 1;
            }
        }
    }

    let total: u32 = weights.values().sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.below(total);
    for (move_type, weight) in weights {
        if roll < weight {
            return Some(move_type);
        }
        roll -= weight;
    }
    None
}

fn dedup<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

fn pick<T: Copy, R: RngOracle + ?Sized>(candidates: &[T], rng: &mut R) -> Option<T> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.below(candidates.len() as u32) as usize])
}
