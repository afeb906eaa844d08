//! Threshold compiler.
//!
//! Turns a pool plus a party snapshot into per-tier cumulative weight maps.
//! Tables are rebuilt from scratch for every batch and threaded through the
//! draw calls explicitly.

use std::collections::BTreeMap;
use std::ops::Bound;

use super::{Pool, PoolKind, WeightedEntry};
use crate::env::PartySnapshot;
use crate::reward::catalog::{self, CatalogEntry};
use crate::reward::{RewardId, Tier};

/// Compiled table for one tier.
///
/// Keys are cumulative upper bounds: entry `i` owns the sample range
/// `[previous_key, key_i)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TierThresholds {
    cumulative: BTreeMap<u32, usize>,
    ignored: Vec<usize>,
    total: u32,
}

impl TierThresholds {
    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Indexes whose weight resolved to zero.
    pub fn ignored(&self) -> &[usize] {
        &self.ignored
    }

    /// Original index owning `sample`: the first key strictly greater.
    pub fn pick(&self, sample: u32) -> Option<usize> {
        self.cumulative
            .range((Bound::Excluded(sample), Bound::Unbounded))
            .next()
            .map(|(_, index)| *index)
    }

    /// `(cumulative_key, index)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.cumulative.iter().map(|(key, index)| (*key, *index))
    }
}

/// Per-tier thresholds for one pool, valid for one batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledThresholds {
    pool: PoolKind,
    tiers: [TierThresholds; Tier::COUNT],
}

impl CompiledThresholds {
    pub const fn pool(&self) -> PoolKind {
        self.pool
    }

    pub fn tier(&self, tier: Tier) -> Option<&TierThresholds> {
        self.tiers.get(tier.index())
    }

    /// Whether `tier` can be drawn from. Luxury never can.
    pub fn has_entries(&self, tier: Tier) -> bool {
        self.tier(tier).is_some_and(|table| !table.is_empty())
    }

    pub fn any_entries(&self) -> bool {
        Tier::DRAWABLE.iter().any(|tier| self.has_entries(*tier))
    }

    /// Nearest non-empty tier strictly below `tier`, not going under `floor`.
    pub fn lower_non_empty(&self, tier: Tier, floor: Tier) -> Option<Tier> {
        let mut current = tier.down()?;
        loop {
            if current < floor {
                return None;
            }
            if self.has_entries(current) {
                return Some(current);
            }
            current = current.down()?;
        }
    }
}

/// Stack-saturated run items contribute no weight.
///
/// Per-member items are exempt: their limits apply per holder.
fn is_saturated(id: RewardId, party: &PartySnapshot) -> bool {
    match catalog::entry(id) {
        CatalogEntry::Fixed(kind) if !kind.is_per_member() => party
            .run_stack(id)
            .is_some_and(|stack| stack.is_full()),
        _ => false,
    }
}

/// Weight an entry contributes for this party.
pub fn effective_weight(entry: &WeightedEntry, party: &PartySnapshot, reroll_count: u32) -> u32 {
    if is_saturated(entry.id, party) {
        return 0;
    }
    entry.weight_for(party, reroll_count)
}

/// Compile `pool` against `party`.
pub fn compile(pool: &Pool, party: &PartySnapshot, reroll_count: u32) -> CompiledThresholds {
    let mut tiers: [TierThresholds; Tier::COUNT] = Default::default();

    for (slot, tier) in tiers.iter_mut().zip(Tier::DRAWABLE) {
        let mut running_total = 0u32;
        for (index, entry) in pool.entries(tier).iter().enumerate() {
            let weight = effective_weight(entry, party, reroll_count);
            if weight == 0 {
                slot.ignored.push(index);
                continue;
            }
            running_total = running_total.saturating_add(weight);
            slot.cumulative.insert(running_total, index);
        }
        slot.total = running_total;

        tracing::trace!(
            "compiled {} {} tier: total={} entries={} ignored={:?}",
            pool.kind(),
            tier,
            slot.total,
            slot.cumulative.len(),
            slot.ignored
        );
    }

    CompiledThresholds {
        pool: pool.kind(),
        tiers,
    }
}

/// Reverse lookup of the tier an id belongs to.
///
/// Prefers the first tier where the id currently has positive weight, then the
/// first tier that lists it at all.
pub fn tier_from_pool(
    pool: &Pool,
    id: RewardId,
    party: &PartySnapshot,
    reroll_count: u32,
) -> Option<Tier> {
    let listed = |tier: &Tier| pool.entries(*tier).iter().filter(move |entry| entry.id == id);

    Tier::DRAWABLE
        .into_iter()
        .find(|tier| {
            listed(tier).any(|entry| effective_weight(entry, party, reroll_count) > 0)
        })
        .or_else(|| {
            Tier::DRAWABLE
                .into_iter()
                .find(|tier| listed(tier).next().is_some())
        })
}
