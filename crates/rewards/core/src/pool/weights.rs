//! Party-dependent weight functions for the player pool.
//!
//! Every function is pure over `(party, reroll_count)`.

use crate::env::PartySnapshot;

/// Members that are either missing `missing` HP or sit at or below `ratio`.
fn hurt_count(party: &PartySnapshot, missing: u32, ratio: f64) -> u32 {
    party
        .members
        .iter()
        .filter(|member| member.is_hurt(missing, ratio))
        .count() as u32
}

fn low_pp_count(party: &PartySnapshot) -> u32 {
    party.members.iter().filter(|m| m.has_low_pp()).count() as u32
}

fn status_count(party: &PartySnapshot) -> u32 {
    party
        .members
        .iter()
        .filter(|member| !member.is_fainted() && member.has_status)
        .count() as u32
}

fn fainted_count(party: &PartySnapshot) -> u32 {
    party.fainted_count() as u32
}

/// `ceil(wave / step)` on the cleared wave.
fn wave_steps(party: &PartySnapshot, step: u32) -> u32 {
    party.wave.div_ceil(step)
}

pub(super) fn potion(party: &PartySnapshot, _reroll: u32) -> u32 {
    hurt_count(party, 10, 0.875).min(3) * 3
}

pub(super) fn super_potion(party: &PartySnapshot, _reroll: u32) -> u32 {
    hurt_count(party, 25, 0.75).min(3)
}

pub(super) fn hyper_potion(party: &PartySnapshot, _reroll: u32) -> u32 {
    hurt_count(party, 100, 0.625).min(3) * 3
}

pub(super) fn ether(party: &PartySnapshot, _reroll: u32) -> u32 {
    low_pp_count(party).min(3) * 3
}

pub(super) fn max_ether(party: &PartySnapshot, _reroll: u32) -> u32 {
    low_pp_count(party).min(3)
}

pub(super) fn elixir(party: &PartySnapshot, _reroll: u32) -> u32 {
    low_pp_count(party).min(3) * 3
}

pub(super) fn max_elixir(party: &PartySnapshot, _reroll: u32) -> u32 {
    low_pp_count(party).min(3)
}

pub(super) fn full_heal(party: &PartySnapshot, _reroll: u32) -> u32 {
    status_count(party).min(3) * 3
}

pub(super) fn revive(party: &PartySnapshot, _reroll: u32) -> u32 {
    fainted_count(party).min(3) * 3
}

pub(super) fn max_revive(party: &PartySnapshot, _reroll: u32) -> u32 {
    fainted_count(party).min(3)
}

/// Offered only once at least half the party is down.
pub(super) fn sacred_ash(party: &PartySnapshot, _reroll: u32) -> u32 {
    let fainted = fainted_count(party);
    let half = (party.members.len() as u32).div_ceil(2);
    u32::from(fainted > 0 && fainted >= half)
}

pub(super) fn lure(party: &PartySnapshot, _reroll: u32) -> u32 {
    unless_last_wave(party, 2)
}

pub(super) fn super_lure(party: &PartySnapshot, _reroll: u32) -> u32 {
    unless_last_wave(party, 4)
}

pub(super) fn nugget(party: &PartySnapshot, _reroll: u32) -> u32 {
    unless_last_wave(party, 5)
}

pub(super) fn relic_gold(party: &PartySnapshot, _reroll: u32) -> u32 {
    unless_last_wave(party, 2)
}

pub(super) fn evolution_item(party: &PartySnapshot, _reroll: u32) -> u32 {
    wave_steps(party, 15).min(8)
}

pub(super) fn rare_evolution_item(party: &PartySnapshot, _reroll: u32) -> u32 {
    (wave_steps(party, 15) * 4).min(32)
}

pub(super) fn form_change_item(party: &PartySnapshot, _reroll: u32) -> u32 {
    wave_steps(party, 50).min(4) * 6
}

pub(super) fn map(party: &PartySnapshot, _reroll: u32) -> u32 {
    if party.wave < 180 { 2 } else { 0 }
}

fn unless_last_wave(party: &PartySnapshot, weight: u32) -> u32 {
    if party.is_last_classic_wave() { 0 } else { weight }
}
