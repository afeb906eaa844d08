//! Read-only party snapshot consumed by weights, generators and luck.
//!
//! The engine never mutates these views. Whatever owns the live party builds a
//! snapshot per batch and hands it in by reference.

use crate::reward::{RewardId, RewardKind, Tier};

/// Species identifier as used by the national dex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesId(pub u16);

/// Move identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveId(pub u16);

/// Elemental type of a move.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveType {
    #[default]
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Game mode of the current run.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    Classic,
    Endless,
    /// Seeded daily run; luck comes from the seed, not the party.
    Daily,
    Challenge,
}

/// One known move with its PP usage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveSlot {
    pub move_id: MoveId,
    pub move_type: MoveType,
    pub max_pp: u8,
    pub pp_used: u8,
    /// Whether the move deals direct damage (status moves don't).
    pub damaging: bool,
}

impl MoveSlot {
    pub const fn remaining_pp(&self) -> u8 {
        self.max_pp.saturating_sub(self.pp_used)
    }

    /// A move is "running low" once half its PP is spent and at most five remain.
    pub const fn is_running_low(&self) -> bool {
        self.pp_used > 0 && self.remaining_pp() <= 5 && self.pp_used >= self.max_pp / 2
    }
}

/// A TM this member could learn, with the TM's rarity band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LearnableTm {
    pub move_id: MoveId,
    pub tier: Tier,
}

/// Stack of an item held by a single member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeldStack {
    pub kind: RewardKind,
    pub stack: u16,
    pub max_stack: u16,
}

impl HeldStack {
    pub const fn is_full(&self) -> bool {
        self.stack >= self.max_stack
    }
}

/// Stack of a run-wide item (balls, charms, coins).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStack {
    pub id: RewardId,
    pub stack: u16,
    pub max_stack: u16,
}

impl RunStack {
    pub const fn is_full(&self) -> bool {
        self.stack >= self.max_stack
    }
}

/// Read-only view of one party member.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemberView {
    pub species: SpeciesId,
    pub fusion_species: Option<SpeciesId>,
    pub level: u16,
    pub hp: u32,
    pub max_hp: u32,
    pub fainted: bool,
    pub has_status: bool,
    pub luck: u8,
    pub allowed_in_battle: bool,
    pub held_items: Vec<HeldStack>,
    pub moves: Vec<MoveSlot>,
    /// Evolution items this member can use right now.
    pub evolution_items: Vec<crate::reward::EvolutionItem>,
    /// Form-change items this member can make use of.
    pub form_change_items: Vec<crate::reward::FormChangeItem>,
    pub learnable_tms: Vec<LearnableTm>,
}

impl Default for MemberView {
    fn default() -> Self {
        Self {
            species: SpeciesId::default(),
            fusion_species: None,
            level: 1,
            hp: 1,
            max_hp: 1,
            fainted: false,
            has_status: false,
            luck: 0,
            allowed_in_battle: true,
            held_items: Vec::new(),
            moves: Vec::new(),
            evolution_items: Vec::new(),
            form_change_items: Vec::new(),
            learnable_tms: Vec::new(),
        }
    }
}

impl MemberView {
    pub fn new(species: SpeciesId, hp: u32, max_hp: u32) -> Self {
        Self {
            species,
            hp,
            max_hp,
            fainted: hp == 0,
            ..Self::default()
        }
    }

    pub const fn is_fainted(&self) -> bool {
        self.fainted || self.hp == 0
    }

    pub const fn missing_hp(&self) -> u32 {
        self.max_hp.saturating_sub(self.hp)
    }

    /// Current HP as a fraction of max HP.
    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        f64::from(self.hp) / f64::from(self.max_hp)
    }

    /// True when the member has taken at least `missing` damage or dropped to `ratio`.
    pub fn is_hurt(&self, missing: u32, ratio: f64) -> bool {
        !self.is_fainted() && (self.missing_hp() >= missing || self.hp_ratio() <= ratio)
    }

    pub fn has_low_pp(&self) -> bool {
        !self.is_fainted() && self.moves.iter().any(MoveSlot::is_running_low)
    }

    pub fn has_used_pp(&self) -> bool {
        self.moves.iter().any(|slot| slot.pp_used > 0)
    }

    pub fn knows_move(&self, move_id: MoveId) -> bool {
        self.moves.iter().any(|slot| slot.move_id == move_id)
    }

    pub fn held(&self, kind: &RewardKind) -> Option<&HeldStack> {
        self.held_items.iter().find(|held| &held.kind == kind)
    }

    pub fn with_luck(mut self, luck: u8) -> Self {
        self.luck = luck;
        self
    }

    pub fn with_status(mut self) -> Self {
        self.has_status = true;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveSlot>) -> Self {
        self.moves = moves;
        self
    }
}

/// Snapshot of the player's side at the moment a batch is generated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartySnapshot {
    pub members: Vec<MemberView>,
    pub run_items: Vec<RunStack>,
    /// Index of the wave just cleared.
    pub wave: u32,
    pub mode: GameMode,
}

impl PartySnapshot {
    pub fn new(members: Vec<MemberView>, wave: u32) -> Self {
        Self {
            members,
            wave,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_run_item(mut self, id: RewardId, stack: u16, max_stack: u16) -> Self {
        self.run_items.push(RunStack {
            id,
            stack,
            max_stack,
        });
        self
    }

    pub fn run_stack(&self, id: RewardId) -> Option<&RunStack> {
        self.run_items.iter().find(|item| item.id == id)
    }

    pub fn battle_ready(&self) -> impl Iterator<Item = &MemberView> {
        self.members.iter().filter(|member| member.allowed_in_battle)
    }

    pub fn fainted_count(&self) -> usize {
        self.members.iter().filter(|member| member.is_fainted()).count()
    }

    /// Rewards are generated after wave 199 right before the classic finale.
    pub fn is_last_classic_wave(&self) -> bool {
        self.mode == GameMode::Classic
            && self.wave.saturating_add(1) == crate::config::EngineConfig::CLASSIC_FINAL_WAVE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(max_pp: u8, pp_used: u8) -> MoveSlot {
        MoveSlot {
            move_id: MoveId(1),
            move_type: MoveType::Normal,
            max_pp,
            pp_used,
            damaging: true,
        }
    }

    #[test]
    fn running_low_requires_half_spent_and_five_left() {
        assert!(slot(10, 5).is_running_low());
        assert!(!slot(35, 20).is_running_low());
        assert!(!slot(10, 0).is_running_low());
    }

    #[test]
    fn fainted_members_are_never_hurt() {
        let member = MemberView::new(SpeciesId(25), 0, 100);
        assert!(member.is_fainted());
        assert!(!member.is_hurt(10, 0.875));
    }

    #[test]
    fn last_classic_wave_only_in_classic() {
        let party = PartySnapshot::new(Vec::new(), 199);
        assert!(party.is_last_classic_wave());
        assert!(!party.clone().with_mode(GameMode::Endless).is_last_classic_wave());
    }

    #[test]
    fn last_classic_wave_at_wave_ceiling() {
        let party = PartySnapshot::new(Vec::new(), u32::MAX);
        assert!(!party.is_last_classic_wave());
        assert!(!PartySnapshot::new(Vec::new(), 200).is_last_classic_wave());

        let compiled = crate::pool::compile(crate::pool::pool(crate::pool::PoolKind::Player), &party, 0);
        assert!(compiled.has_entries(Tier::Common));
    }
}
