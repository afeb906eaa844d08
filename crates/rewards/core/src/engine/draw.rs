//! Entry selector.

use super::{DrawError, DrawOutcome};
use crate::config::EngineConfig;
use crate::env::{PartySnapshot, RngOracle};
use crate::pool::{CompiledThresholds, Pool};
use crate::reward::{self, RewardOption, Tier};

/// Everything a single draw reads. Built once per batch.
#[derive(Clone, Copy, Debug)]
pub struct DrawContext<'a> {
    pub config: &'a EngineConfig,
    pub pool: &'a Pool,
    pub thresholds: &'a CompiledThresholds,
    pub party: &'a PartySnapshot,
    pub luck: u8,
    /// Whether rolled tiers may be upgraded by the luck cascade.
    pub cascade: bool,
}

impl<'a> DrawContext<'a> {
    pub fn new(
        config: &'a EngineConfig,
        pool: &'a Pool,
        thresholds: &'a CompiledThresholds,
        party: &'a PartySnapshot,
    ) -> Self {
        Self {
            config,
            pool,
            thresholds,
            party,
            luck: 0,
            cascade: true,
        }
    }

    #[must_use]
    pub fn with_luck(mut self, luck: u8) -> Self {
        self.luck = luck;
        self
    }

    #[must_use]
    pub fn with_cascade(mut self, cascade: bool) -> Self {
        self.cascade = cascade;
        self
    }
}

/// Draw one entry from `tier` and resolve it.
///
/// A generator that produces nothing sends the draw to the nearest lower
/// non-empty tier, keeping `upgrade_count`. The walk never goes under `floor`;
/// at the floor the same tier is resampled up to `generator_retry_limit`
/// times before giving up with [`DrawOutcome::Exhausted`].
pub fn draw_entry<R: RngOracle + ?Sized>(
    ctx: &DrawContext<'_>,
    tier: Tier,
    upgrade_count: u8,
    floor: Tier,
    rng: &mut R,
) -> Result<DrawOutcome, DrawError> {
    let pool = ctx.thresholds.pool();
    let mut tier = tier;
    let mut fallbacks = 0u32;
    let mut resamples = 0u32;

    loop {
        let table = ctx
            .thresholds
            .tier(tier)
            .filter(|table| !table.is_empty())
            .ok_or(DrawError::EmptyTier { pool, tier })?;

        let sample = rng.below(table.total());
        let index = table
            .pick(sample)
            .ok_or(DrawError::EmptyTier { pool, tier })?;
        let entry = ctx
            .pool
            .entry(tier, index)
            .ok_or(DrawError::EmptyTier { pool, tier })?;

        if let Some(resolved) = reward::resolve(entry.id, ctx.party, rng, None) {
            tracing::debug!(
                "drew {} ({}) from {} tier of {} pool, upgrades={}, fallbacks={}",
                resolved.name(),
                entry.id,
                tier,
                pool,
                upgrade_count,
                fallbacks
            );
            return Ok(DrawOutcome::Drawn {
                option: RewardOption::free(resolved.with_tier(tier), upgrade_count),
                fallbacks,
            });
        }

        match ctx.thresholds.lower_non_empty(tier, floor) {
            Some(lower) => {
                tracing::debug!(
                    "{} produced nothing at {} tier, falling back to {}",
                    entry.id,
                    tier,
                    lower
                );
                tier = lower;
                fallbacks += 1;
            }
            None if resamples < ctx.config.generator_retry_limit => {
                tracing::debug!("{} produced nothing at floor tier {}, resampling", entry.id, tier);
                resamples += 1;
            }
            None => {
                tracing::debug!("generators exhausted at {} tier of {} pool", tier, pool);
                return Ok(DrawOutcome::Exhausted { tier });
            }
        }
    }
}
