//! Draws for the opposing side and daily starters.
//!
//! These pools never use party luck or duplicate avoidance.

use super::draw::DrawContext;
use super::tier::{TierRequest, select_tier};
use super::unique::draw_at;
use super::{DrawError, RewardEngine};
use crate::env::{PartySnapshot, RngOracle, RunStack};
use crate::pool::{PoolKind, compile, pool};
use crate::reward::{self, Reward, RewardId, Tier};

/// Attempts before an enemy buff that would overflow is accepted anyway.
const ENEMY_BUFF_RETRIES: u32 = 50;

/// Attempts that must fit the full tier stack before a single stack is enough.
const ENEMY_BUFF_FULL_STACK_ATTEMPTS: u32 = 10;

/// Enemy buff together with the stack it grants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyBuffDraw {
    pub reward: Reward,
    pub stack: u16,
}

/// Stack granted per enemy buff of a tier.
const fn buff_stack(tier: Tier) -> u16 {
    match tier {
        Tier::Ultra => 5,
        Tier::Great => 3,
        _ => 1,
    }
}

/// Daily starter ladder over `[0, 64)`.
fn daily_starter_tier<R: RngOracle + ?Sized>(rng: &mut R) -> Tier {
    match rng.below(64) {
        26.. => Tier::Common,
        13..=25 => Tier::Great,
        5..=12 => Tier::Ultra,
        1..=4 => Tier::Rogue,
        0 => Tier::Master,
    }
}

impl RewardEngine {
    /// Held items for a wild or trainer party.
    ///
    /// Each item gets a flat one-tier upgrade when `below(upgrade_chance)`
    /// hits 0; a chance of 0 disables upgrades. Every 1000th wave adds a Mini
    /// Black Hole.
    pub fn enemy_held_items<R: RngOracle + ?Sized>(
        &self,
        kind: PoolKind,
        party: &PartySnapshot,
        count: usize,
        upgrade_chance: u32,
        rng: &mut R,
    ) -> Result<Vec<Reward>, DrawError> {
        let source = pool(kind);
        let thresholds = compile(source, party, 0);
        let ctx = DrawContext::new(self.config(), source, &thresholds, party).with_cascade(false);

        let mut items = Vec::with_capacity(count.saturating_add(1));
        for _ in 0..count {
            let upgrades = u8::from(upgrade_chance > 0 && rng.below(upgrade_chance) == 0);
            let (tier, upgrades) = select_tier(
                ctx.config,
                ctx.thresholds,
                0,
                TierRequest::flat(upgrades),
                rng,
            )?;
            let option = draw_at(&ctx, tier, upgrades, ctx.config.generator_floor, rng)?;
            items.push(option.reward);
        }

        if party.wave > 0 && party.wave % 1000 == 0 {
            if let Some(hole) = reward::resolve(RewardId::MiniBlackHole, party, rng, None) {
                items.push(hole);
            }
        }

        tracing::debug!("{} held items for {} pool at wave {}", items.len(), kind, party.wave);
        Ok(items)
    }

    /// One enemy buff of `tier`.
    ///
    /// Redraws while the candidate would push an existing buff past its max
    /// stack. The first attempts check the full tier stack, later ones a
    /// single stack. After the retry limit the last candidate is taken.
    pub fn enemy_buff<R: RngOracle + ?Sized>(
        &self,
        tier: Tier,
        existing: &[RunStack],
        rng: &mut R,
    ) -> Result<EnemyBuffDraw, DrawError> {
        let source = pool(PoolKind::EnemyBuff);
        let party = PartySnapshot::default();
        let thresholds = compile(source, &party, 0);
        let ctx = DrawContext::new(self.config(), source, &thresholds, &party).with_cascade(false);
        let stack = buff_stack(tier);

        let request = TierRequest::pinned(tier).with_upgrades(false);
        let draw = |rng: &mut R| -> Result<Reward, DrawError> {
            let (tier, upgrades) = select_tier(ctx.config, ctx.thresholds, 0, request, rng)?;
            Ok(draw_at(&ctx, tier, upgrades, tier, rng)?.reward)
        };

        let mut candidate = draw(&mut *rng)?;
        let mut attempt = 1;
        while attempt < ENEMY_BUFF_RETRIES {
            let added = if attempt < ENEMY_BUFF_FULL_STACK_ATTEMPTS { stack } else { 1 };
            let overflows = existing.iter().any(|held| {
                held.id == candidate.id && held.stack.saturating_add(added) > held.max_stack
            });
            if !overflows {
                break;
            }
            candidate = draw(&mut *rng)?;
            attempt += 1;
        }

        Ok(EnemyBuffDraw {
            reward: candidate,
            stack,
        })
    }

    /// Three starting items per party member for daily runs.
    pub fn daily_starter_items<R: RngOracle + ?Sized>(
        &self,
        party: &PartySnapshot,
        rng: &mut R,
    ) -> Result<Vec<Vec<Reward>>, DrawError> {
        let source = pool(PoolKind::DailyStarter);
        let thresholds = compile(source, party, 0);
        let ctx = DrawContext::new(self.config(), source, &thresholds, party).with_cascade(false);

        party
            .members
            .iter()
            .map(|_| {
                (0..3)
                    .map(|_| {
                        let pinned = daily_starter_tier(rng);
                        let request = TierRequest::pinned(pinned).with_upgrades(false);
                        let (tier, upgrades) =
                            select_tier(ctx.config, ctx.thresholds, 0, request, rng)?;
                        Ok(draw_at(&ctx, tier, upgrades, ctx.config.generator_floor, rng)?.reward)
                    })
                    .collect()
            })
            .collect()
    }
}
