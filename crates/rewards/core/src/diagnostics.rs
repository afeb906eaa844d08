//! Per-tier weight tables for balance tooling.
//!
//! Reports are informational only; nothing here feeds back into drawing.

use core::fmt;

use crate::env::PartySnapshot;
use crate::pool::{Pool, PoolKind, compile, effective_weight};
use crate::reward::{RewardId, Tier};

/// One weighted entry as resolved for a party.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryReport {
    pub id: RewardId,
    pub weight: u32,
    pub max_weight: u32,
    /// Share of the tier total, in percent.
    pub percent: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierReport {
    pub tier: Tier,
    pub total: u32,
    pub entries: Vec<EntryReport>,
    /// Entries whose weight resolved to zero.
    pub ignored: Vec<RewardId>,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoolReport {
    pub pool: PoolKind,
    pub wave: u32,
    pub reroll_count: u32,
    pub tiers: Vec<TierReport>,
}

impl PoolReport {
    /// Resolve every weight of `pool` for `party` at `reroll_count`.
    pub fn build(pool: &Pool, party: &PartySnapshot, reroll_count: u32) -> Self {
        let thresholds = compile(pool, party, reroll_count);

        let tiers = Tier::DRAWABLE
            .into_iter()
            .filter(|tier| !pool.entries(*tier).is_empty())
            .map(|tier| {
                let compiled = thresholds.tier(tier);
                let total = compiled.map_or(0, |table| table.total());
                let ignored_indexes = compiled.map_or(&[][..], |table| table.ignored());

                let mut entries = Vec::new();
                let mut ignored = Vec::new();
                for (index, entry) in pool.entries(tier).iter().enumerate() {
                    if ignored_indexes.contains(&index) {
                        ignored.push(entry.id);
                        continue;
                    }
                    let weight = effective_weight(entry, party, reroll_count);
                    let percent = if total == 0 {
                        0.0
                    } else {
                        f64::from(weight) * 100.0 / f64::from(total)
                    };
                    entries.push(EntryReport {
                        id: entry.id,
                        weight,
                        max_weight: entry.max_weight,
                        percent,
                    });
                }

                TierReport {
                    tier,
                    total,
                    entries,
                    ignored,
                }
            })
            .collect();

        Self {
            pool: pool.kind(),
            wave: party.wave,
            reroll_count,
            tiers,
        }
    }

    pub fn tier(&self, tier: Tier) -> Option<&TierReport> {
        self.tiers.iter().find(|report| report.tier == tier)
    }
}

impl fmt::Display for PoolReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} pool, wave {}, rerolls {}",
            self.pool, self.wave, self.reroll_count
        )?;
        for tier in &self.tiers {
            writeln!(f)?;
            writeln!(f, "{} (total {})", tier.tier.display_name(), tier.total)?;
            for entry in &tier.entries {
                writeln!(
                    f,
                    "  {:<32} {:>5} / {:<5} {:>6.2}%",
                    entry.id.as_ref(),
                    entry.weight,
                    entry.max_weight,
                    entry.percent
                )?;
            }
            if !tier.ignored.is_empty() {
                let ids: Vec<&str> = tier.ignored.iter().map(AsRef::as_ref).collect();
                writeln!(f, "  ignored: {}", ids.join(", "))?;
            }
        }
        Ok(())
    }
}
