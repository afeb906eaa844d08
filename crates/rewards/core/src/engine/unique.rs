//! Duplicate-avoidance controller.

use super::draw::{DrawContext, draw_entry};
use super::tier::{TierRequest, select_tier};
use super::{DrawError, DrawOutcome};
use crate::env::RngOracle;
use crate::reward::{RewardOption, Tier};

/// Whether `candidate` shares a name or group with anything in `batch`.
pub fn collides(batch: &[RewardOption], candidate: &RewardOption) -> bool {
    batch
        .iter()
        .any(|existing| existing.reward.collides_with(&candidate.reward))
}

/// Draw from an already chosen tier, mapping exhaustion to an error.
pub(crate) fn draw_at<R: RngOracle + ?Sized>(
    ctx: &DrawContext<'_>,
    tier: Tier,
    upgrade_count: u8,
    floor: Tier,
    rng: &mut R,
) -> Result<RewardOption, DrawError> {
    match draw_entry(ctx, tier, upgrade_count, floor, rng)? {
        DrawOutcome::Drawn { option, .. } => Ok(option),
        DrawOutcome::Exhausted { tier } => Err(DrawError::GeneratorExhausted {
            pool: ctx.thresholds.pool(),
            tier,
        }),
    }
}

/// Draw one option that avoids collisions with `batch`.
///
/// At most `budget` draws are made. Redraws keep the rejected candidate's
/// tier and upgrade count and only resample the entry. When the budget runs
/// out the last candidate is accepted even if it collides.
pub fn draw_unique<R: RngOracle + ?Sized>(
    ctx: &DrawContext<'_>,
    batch: &[RewardOption],
    budget: u32,
    request: TierRequest,
    rng: &mut R,
) -> Result<RewardOption, DrawError> {
    let request = if ctx.cascade {
        request
    } else {
        request.with_upgrades(false)
    };
    let (tier, upgrades) = select_tier(ctx.config, ctx.thresholds, ctx.luck, request, rng)?;
    let floor = request
        .pinned
        .map_or(ctx.config.generator_floor, |pinned| {
            pinned.max(ctx.config.generator_floor)
        });

    let mut candidate = draw_at(ctx, tier, upgrades, floor, rng)?;
    let mut draws = 1u32;

    while !batch.is_empty() && collides(batch, &candidate) {
        if draws >= budget {
            tracing::warn!(
                "accepting duplicate {} after {} draws in {} pool",
                candidate.reward.name(),
                draws,
                ctx.thresholds.pool()
            );
            break;
        }
        let pinned = candidate.tier().unwrap_or(tier);
        let (retry_tier, retry_upgrades) = select_tier(
            ctx.config,
            ctx.thresholds,
            ctx.luck,
            TierRequest::exact(pinned, candidate.upgrade_count),
            rng,
        )?;
        candidate = draw_at(ctx, retry_tier, retry_upgrades, floor, rng)?;
        draws += 1;
    }

    Ok(candidate)
}
