//! Batch orchestrator.

use super::DrawError;
use super::draw::DrawContext;
use super::tier::TierRequest;
use super::unique::draw_unique;
use crate::env::RngOracle;
use crate::pool::tier_from_pool;
use crate::reward::{self, PregenArg, RewardId, RewardOption, Tier};

/// A reward to build on demand, optionally pinned to a generator output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuaranteedSpec {
    pub id: RewardId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub pregen: Option<PregenArg>,
}

impl GuaranteedSpec {
    pub const fn new(id: RewardId) -> Self {
        Self { id, pregen: None }
    }

    #[must_use]
    pub fn with_pregen(mut self, pregen: PregenArg) -> Self {
        self.pregen = Some(pregen);
        self
    }
}

/// Per-call customisation supplied by shop and encounter logic.
///
/// Categories are appended in field order regardless of the requested
/// count, so the result may be longer or shorter than asked unless
/// `fill_remaining` is set.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CustomSettings {
    pub guaranteed_options: Vec<RewardOption>,
    pub guaranteed_specs: Vec<GuaranteedSpec>,
    pub guaranteed_tiers: Vec<Tier>,
    pub fill_remaining: bool,
    /// Scales reroll cost; negative disables rerolling.
    pub reroll_multiplier: Option<f64>,
    /// Defaults to true.
    pub allow_luck_upgrades: Option<bool>,
}

impl CustomSettings {
    pub fn allow_luck_upgrades(&self) -> bool {
        self.allow_luck_upgrades.unwrap_or(true)
    }
}

/// Assemble a batch of `count` options.
///
/// Without settings every slot is a unique draw, pinned to `pinned_tiers[i]`
/// when given. With settings the guaranteed categories come first.
pub fn assemble<R: RngOracle + ?Sized>(
    ctx: &DrawContext<'_>,
    count: usize,
    pinned_tiers: &[Tier],
    settings: Option<&CustomSettings>,
    reroll_count: u32,
    rng: &mut R,
) -> Result<Vec<RewardOption>, DrawError> {
    let budget = ctx.config.retry_budget(count);
    let mut options: Vec<RewardOption> = Vec::with_capacity(count);

    let Some(settings) = settings else {
        for slot in 0..count {
            let request = TierRequest::from_pin(pinned_tiers.get(slot).copied());
            let option = draw_unique(ctx, &options, budget, request, rng)?;
            options.push(option);
        }
        return Ok(options);
    };

    options.extend(settings.guaranteed_options.iter().cloned());

    for spec in &settings.guaranteed_specs {
        let Some(resolved) = reward::resolve(spec.id, ctx.party, rng, spec.pregen.as_ref()) else {
            tracing::debug!("guaranteed {} produced nothing, slot dropped", spec.id);
            continue;
        };
        let resolved = match tier_from_pool(ctx.pool, spec.id, ctx.party, reroll_count) {
            Some(tier) => resolved.with_tier(tier),
            None => resolved,
        };
        options.push(RewardOption::free(resolved, 0));
    }

    for tier in &settings.guaranteed_tiers {
        let request = TierRequest::pinned(*tier).with_upgrades(settings.allow_luck_upgrades());
        let option = draw_unique(ctx, &options, budget, request, rng)?;
        options.push(option);
    }

    if settings.fill_remaining {
        while options.len() < count {
            let option = draw_unique(ctx, &options, budget, TierRequest::rolled(), rng)?;
            options.push(option);
        }
    }

    Ok(options)
}
