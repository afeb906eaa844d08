//! Party luck aggregation and presentation.

use crate::config::EngineConfig;
use crate::env::{GameMode, PartySnapshot, PcgRng, RngOracle};
use crate::reward::Tier;

const LUCK_GRADES: [&str; 15] = [
    "D", "C", "C+", "B-", "B", "B+", "A-", "A", "A+", "A++", "S", "S+", "SS", "SS+", "SSS",
];

/// Aggregate party luck in `[0, MAX_LUCK]`.
///
/// Daily runs ignore the party: luck is the event's fixed value if one is
/// configured, otherwise a roll on a reserved sub-sequence of `run_seed`.
/// Other modes sum each battle-eligible member's luck plus one for event
/// boosted species, clamp, add the event bonus and clamp again.
pub fn party_luck(party: &PartySnapshot, config: &EngineConfig, run_seed: u64) -> u8 {
    let max = u32::from(EngineConfig::MAX_LUCK);

    if party.mode == GameMode::Daily {
        if let Some(fixed) = config.events.daily_fixed_luck {
            return fixed.min(EngineConfig::MAX_LUCK);
        }
        let mut rng = PcgRng::with_offset(run_seed, config.daily_luck_offset);
        return rng.below(config.daily_luck_range).min(max) as u8;
    }

    let sum: u32 = party
        .battle_ready()
        .map(|member| {
            let boosted = config.events.is_boosted(member.species)
                || member
                    .fusion_species
                    .is_some_and(|fusion| config.events.is_boosted(fusion));
            u32::from(member.luck) + u32::from(boosted)
        })
        .sum();

    let luck = sum.min(max) + u32::from(config.events.luck_boost);
    luck.min(max) as u8
}

/// Letter grade shown next to the luck value.
pub fn luck_grade(luck: u8) -> &'static str {
    LUCK_GRADES[usize::from(luck.min(EngineConfig::MAX_LUCK))]
}

/// Tier whose tint colours the luck value.
pub const fn luck_tier(luck: u8) -> Tier {
    match luck {
        12.. => Tier::Luxury,
        10..=11 => Tier::Master,
        6..=9 => Tier::Rogue,
        3..=5 => Tier::Ultra,
        1..=2 => Tier::Great,
        0 => Tier::Common,
    }
}
