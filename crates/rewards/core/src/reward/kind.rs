//! Reward categories as a closed sum type.
//!
//! Every place that needs to special-case a category (threshold exemptions,
//! dedup groups, targeting) matches on [`RewardKind`] exhaustively.

use crate::env::{MemberView, MoveId, MoveType};
use crate::reward::Tier;
use crate::reward::items::{
    BallKind, BattleStat, BerryKind, EnemyBuff, EvolutionItem, FormChangeItem, HeldItem,
    PermanentStat, PersistentItem, type_booster_name,
};

/// Max stack for balls of a single kind in the bag.
pub const MAX_BALLS_PER_KIND: u16 = 99;
pub const MAX_VITAMIN_STACK: u16 = 10;
pub const MAX_TYPE_BOOSTER_STACK: u16 = 99;

/// Concrete effect payload of a reward.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RewardKind {
    Pokeball { ball: BallKind, count: u8 },
    /// Money scaled by wave; multiplier in tenths (10 = 1x).
    Money { multiplier_tenths: u16 },
    Healing { points: u16, percent: u8, heal_status: bool },
    Revive { percent: u8, party_wide: bool },
    /// `points: None` restores a move fully.
    PpRestore { points: Option<u8>, all_moves: bool },
    PpUp { full: bool },
    StatusCure,
    Lure { waves: u8 },
    TempStatBoost(BattleStat),
    CritBoost,
    Candy { levels: u8, party_wide: bool },
    Berry(BerryKind),
    Vitamin(PermanentStat),
    TypeBooster(MoveType),
    Evolution(EvolutionItem),
    FormChange(FormChangeItem),
    Tm { move_id: MoveId, tier: Tier },
    Held(HeldItem),
    Persistent(PersistentItem),
    EnemyBuff(EnemyBuff),
}

/// What the apply collaborator must ask the player for before applying.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApplyTarget {
    /// Applies to the run or the whole party; no selection needed.
    Party,
    /// A single party member must be chosen.
    Member,
    /// A member and then one of its moves must be chosen.
    MemberMove,
}

impl RewardKind {
    /// Player-facing name; also the primary dedup key.
    pub fn name(&self) -> String {
        match self {
            RewardKind::Pokeball { ball, count } if *count > 1 => {
                format!("{} x{}", ball.name(), count)
            }
            RewardKind::Pokeball { ball, .. } => ball.name().to_string(),
            RewardKind::Money { multiplier_tenths } => match *multiplier_tenths {
                0..=10 => "Nugget".to_string(),
                11..=25 => "Big Nugget".to_string(),
                _ => "Relic Gold".to_string(),
            },
            RewardKind::Healing {
                heal_status: true, ..
            } => "Full Restore".to_string(),
            RewardKind::Healing { points, percent, .. } => match (*points, *percent) {
                (_, 100) => "Max Potion".to_string(),
                (p, _) if p >= 200 => "Hyper Potion".to_string(),
                (p, _) if p >= 50 => "Super Potion".to_string(),
                _ => "Potion".to_string(),
            },
            RewardKind::Revive {
                party_wide: true, ..
            } => "Sacred Ash".to_string(),
            RewardKind::Revive { percent, .. } if *percent >= 100 => "Max Revive".to_string(),
            RewardKind::Revive { .. } => "Revive".to_string(),
            RewardKind::PpRestore { points, all_moves } => match (points.is_some(), *all_moves) {
                (true, false) => "Ether".to_string(),
                (false, false) => "Max Ether".to_string(),
                (true, true) => "Elixir".to_string(),
                (false, true) => "Max Elixir".to_string(),
            },
            RewardKind::PpUp { full: false } => "PP Up".to_string(),
            RewardKind::PpUp { full: true } => "PP Max".to_string(),
            RewardKind::StatusCure => "Full Heal".to_string(),
            RewardKind::Lure { waves } => match *waves {
                0..=10 => "Lure".to_string(),
                11..=15 => "Super Lure".to_string(),
                _ => "Max Lure".to_string(),
            },
            RewardKind::TempStatBoost(stat) => stat.name().to_string(),
            RewardKind::CritBoost => "Dire Hit".to_string(),
            RewardKind::Candy {
                party_wide: false, ..
            } => "Rare Candy".to_string(),
            RewardKind::Candy { .. } => "Rarer Candy".to_string(),
            RewardKind::Berry(berry) => berry.name().to_string(),
            RewardKind::Vitamin(stat) => stat.name().to_string(),
            RewardKind::TypeBooster(move_type) => type_booster_name(*move_type).to_string(),
            RewardKind::Evolution(item) => item.name().to_string(),
            RewardKind::FormChange(item) => item.name().to_string(),
            RewardKind::Tm { move_id, .. } => format!("TM{:03}", move_id.0),
            RewardKind::Held(item) => item.name().to_string(),
            RewardKind::Persistent(item) => item.name().to_string(),
            RewardKind::EnemyBuff(buff) => buff.name().to_string(),
        }
    }

    /// Secondary dedup key shared by every variant of a family.
    pub const fn group(&self) -> Option<&'static str> {
        match self {
            RewardKind::Lure { .. } => Some("lure"),
            RewardKind::TempStatBoost(_) => Some("temp_stat_booster"),
            RewardKind::Berry(_) => Some("berry"),
            RewardKind::Vitamin(_) => Some("base_stat_booster"),
            RewardKind::TypeBooster(_) => Some("attack_type_booster"),
            RewardKind::Evolution(_) => Some("evolution_item"),
            RewardKind::FormChange(_) => Some("form_change_item"),
            RewardKind::Tm { .. } => Some("tm"),
            RewardKind::Persistent(PersistentItem::ExpCharm | PersistentItem::SuperExpCharm) => {
                Some("exp_charm")
            }
            _ => None,
        }
    }

    /// Sprite key for the offer screen.
    pub fn icon(&self) -> String {
        match self {
            RewardKind::Pokeball { ball, .. } => format!("{}_ball", ball.as_ref()),
            RewardKind::Berry(berry) => format!("{}_berry", berry.as_ref()),
            RewardKind::Vitamin(stat) => format!("vitamin_{}", stat.as_ref()),
            RewardKind::TempStatBoost(stat) => format!("x_{}", stat.as_ref()),
            RewardKind::TypeBooster(move_type) => format!("booster_{}", move_type.as_ref()),
            RewardKind::Evolution(item) => item.as_ref().to_string(),
            RewardKind::FormChange(item) => item.as_ref().to_string(),
            RewardKind::Tm { move_id, .. } => format!("tm_{}", move_id.0),
            RewardKind::Held(item) => item.as_ref().to_string(),
            RewardKind::Persistent(item) => item.as_ref().to_string(),
            RewardKind::EnemyBuff(buff) => format!("enemy_{}", buff.as_ref()),
            other => other.name().to_lowercase().replace([' ', '.'], "_"),
        }
    }

    /// Sound played when the reward is picked up.
    pub const fn sound(&self) -> &'static str {
        match self {
            RewardKind::Pokeball { .. } => "se/pb_bounce_1",
            RewardKind::Money { .. } => "se/buy",
            RewardKind::Tm { .. } | RewardKind::Candy { .. } => "level_up_fanfare",
            RewardKind::Evolution(_) | RewardKind::FormChange(_) => "se/evolution",
            RewardKind::Persistent(_) => "item_fanfare",
            _ => "se/restore",
        }
    }

    pub const fn target(&self) -> ApplyTarget {
        match self {
            RewardKind::PpRestore {
                all_moves: false, ..
            }
            | RewardKind::PpUp { .. } => ApplyTarget::MemberMove,
            RewardKind::Healing { .. }
            | RewardKind::Revive {
                party_wide: false, ..
            }
            | RewardKind::PpRestore { .. }
            | RewardKind::StatusCure
            | RewardKind::Candy {
                party_wide: false, ..
            }
            | RewardKind::Berry(_)
            | RewardKind::Vitamin(_)
            | RewardKind::TypeBooster(_)
            | RewardKind::Evolution(_)
            | RewardKind::FormChange(_)
            | RewardKind::Tm { .. }
            | RewardKind::Held(_) => ApplyTarget::Member,
            _ => ApplyTarget::Party,
        }
    }

    /// Items held by an individual member rather than owned by the run.
    ///
    /// Their stack limits are checked per holder when applied, so pool-wide
    /// stack saturation never zeroes their weight.
    pub const fn is_per_member(&self) -> bool {
        matches!(
            self,
            RewardKind::Berry(_)
                | RewardKind::Vitamin(_)
                | RewardKind::TypeBooster(_)
                | RewardKind::Held(_)
                | RewardKind::FormChange(_)
        )
    }

    pub const fn max_stack(&self) -> Option<u16> {
        match self {
            RewardKind::Pokeball { .. } => Some(MAX_BALLS_PER_KIND),
            RewardKind::Berry(berry) => Some(berry.max_stack()),
            RewardKind::Vitamin(_) => Some(MAX_VITAMIN_STACK),
            RewardKind::TypeBooster(_) => Some(MAX_TYPE_BOOSTER_STACK),
            RewardKind::FormChange(_) => Some(1),
            RewardKind::Held(item) => Some(item.max_stack()),
            RewardKind::Persistent(item) => Some(item.max_stack()),
            RewardKind::EnemyBuff(buff) => Some(buff.max_stack()),
            _ => None,
        }
    }

    /// Whether `member` is a legal target for this reward.
    ///
    /// Party-wide rewards are applicable to everyone.
    pub fn is_applicable(&self, member: &MemberView) -> bool {
        match self {
            RewardKind::Healing { heal_status, .. } => {
                !member.is_fainted()
                    && (member.hp < member.max_hp || (*heal_status && member.has_status))
            }
            RewardKind::Revive {
                party_wide: false, ..
            } => member.is_fainted(),
            RewardKind::PpRestore { .. } => !member.is_fainted() && member.has_used_pp(),
            RewardKind::PpUp { .. } => !member.moves.is_empty(),
            RewardKind::StatusCure => !member.is_fainted() && member.has_status,
            RewardKind::Evolution(item) => member.evolution_items.contains(item),
            RewardKind::FormChange(item) => {
                member.form_change_items.contains(item) && member.held(self).is_none()
            }
            RewardKind::Tm { move_id, .. } => {
                member.learnable_tms.iter().any(|tm| tm.move_id == *move_id)
                    && !member.knows_move(*move_id)
            }
            RewardKind::Berry(_)
            | RewardKind::Vitamin(_)
            | RewardKind::TypeBooster(_)
            | RewardKind::Held(_) => member.held(self).is_none_or(|held| !held.is_full()),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{HeldStack, SpeciesId};

    #[test]
    fn names_follow_parameters() {
        let max_potion = RewardKind::Healing {
            points: 0,
            percent: 100,
            heal_status: false,
        };
        assert_eq!(max_potion.name(), "Max Potion");
        let elixir = RewardKind::PpRestore {
            points: Some(10),
            all_moves: true,
        };
        assert_eq!(elixir.name(), "Elixir");
        assert_eq!(RewardKind::Lure { waves: 30 }.name(), "Max Lure");
    }

    #[test]
    fn generated_families_share_groups() {
        let a = RewardKind::Berry(BerryKind::Sitrus);
        let b = RewardKind::Berry(BerryKind::Lum);
        assert_ne!(a.name(), b.name());
        assert_eq!(a.group(), b.group());
        assert_eq!(RewardKind::StatusCure.group(), None);
    }

    #[test]
    fn held_items_stop_applying_at_max_stack() {
        let mut member = MemberView::new(SpeciesId(1), 10, 10);
        let leftovers = RewardKind::Held(HeldItem::Leftovers);
        assert!(leftovers.is_applicable(&member));
        member.held_items.push(HeldStack {
            kind: leftovers.clone(),
            stack: 4,
            max_stack: 4,
        });
        assert!(!leftovers.is_applicable(&member));
    }

    #[test]
    fn revive_targets_fainted_members_only() {
        let revive = RewardKind::Revive {
            percent: 50,
            party_wide: false,
        };
        assert!(revive.is_applicable(&MemberView::new(SpeciesId(1), 0, 10)));
        assert!(!revive.is_applicable(&MemberView::new(SpeciesId(1), 5, 10)));
        assert_eq!(revive.target(), ApplyTarget::Member);
    }
}
