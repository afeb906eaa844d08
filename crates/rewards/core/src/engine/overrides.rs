//! Override layer.
//!
//! Forces specific rewards into the leading slots of a batch after the
//! probabilistic draw. Used by deterministic harnesses and scripted modes.

use crate::env::{PartySnapshot, PcgRng};
use crate::pool::{Pool, tier_from_pool};
use crate::reward::{self, PregenArg, RewardId, RewardOption};

/// One forced slot. `id` is parsed case-insensitively when applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverrideEntry {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pregen: Option<PregenArg>,
}

impl OverrideEntry {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pregen: None,
        }
    }

    #[must_use]
    pub fn with_pregen(mut self, pregen: PregenArg) -> Self {
        self.pregen = Some(pregen);
        self
    }
}

/// Ordered override entries; entry `i` replaces slot `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
}

impl OverrideTable {
    pub fn new(entries: Vec<OverrideEntry>) -> Self {
        Self { entries }
    }

    pub fn push(&mut self, entry: OverrideEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[OverrideEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace the leading options of `options` with the table's rewards.
///
/// Cost and upgrade count of each slot are kept. Unknown ids, generators that
/// produce nothing and ids missing from `pool` leave the slot untouched.
/// Generators draw from a per-slot stream derived from `seed`, so applying
/// the same table twice gives the same batch. Returns the number of slots
/// replaced.
pub fn apply_overrides(
    options: &mut [RewardOption],
    table: &OverrideTable,
    pool: &Pool,
    party: &PartySnapshot,
    reroll_count: u32,
    seed: u64,
) -> usize {
    let mut applied = 0;

    for (slot, (option, entry)) in options.iter_mut().zip(table.entries()).enumerate() {
        let Ok(id) = entry.id.parse::<RewardId>() else {
            tracing::warn!("override {} for slot {} is not a known reward", entry.id, slot);
            continue;
        };

        let mut rng = PcgRng::with_offset(seed, slot as u64);
        let Some(resolved) = reward::resolve(id, party, &mut rng, entry.pregen.as_ref()) else {
            tracing::warn!("override {} for slot {} produced nothing", id, slot);
            continue;
        };

        let Some(tier) = tier_from_pool(pool, id, party, reroll_count) else {
            tracing::warn!("override {} for slot {} is not in the {} pool", id, slot, pool.kind());
            continue;
        };

        tracing::debug!("override slot {}: {} -> {}", slot, option.reward.name(), resolved.name());
        option.reward = resolved.with_tier(tier);
        applied += 1;
    }

    applied
}
