//! Tier selection: base roll, luck cascade and settling onto a non-empty tier.

use super::DrawError;
use crate::config::EngineConfig;
use crate::env::RngOracle;
use crate::pool::CompiledThresholds;
use crate::reward::Tier;

/// How the tier of one draw is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierRequest {
    /// Base tier set by the caller instead of rolling.
    pub pinned: Option<Tier>,
    /// Upgrade count set by the caller instead of rolling the cascade.
    ///
    /// With a pinned tier this reproduces an earlier candidate exactly; without
    /// one it is a flat upgrade on top of the base roll.
    pub upgrade_count: Option<u8>,
    pub allow_upgrades: bool,
}

impl TierRequest {
    pub const fn rolled() -> Self {
        Self {
            pinned: None,
            upgrade_count: None,
            allow_upgrades: true,
        }
    }

    pub const fn pinned(tier: Tier) -> Self {
        Self {
            pinned: Some(tier),
            upgrade_count: None,
            allow_upgrades: true,
        }
    }

    /// Reuse a rejected candidate's tier and upgrades verbatim.
    pub const fn exact(tier: Tier, upgrade_count: u8) -> Self {
        Self {
            pinned: Some(tier),
            upgrade_count: Some(upgrade_count),
            allow_upgrades: false,
        }
    }

    /// Base roll plus `upgrades` steps, no luck cascade.
    pub const fn flat(upgrades: u8) -> Self {
        Self {
            pinned: None,
            upgrade_count: Some(upgrades),
            allow_upgrades: false,
        }
    }

    pub const fn from_pin(pinned: Option<Tier>) -> Self {
        Self {
            pinned,
            upgrade_count: None,
            allow_upgrades: true,
        }
    }

    #[must_use]
    pub const fn with_upgrades(mut self, allow: bool) -> Self {
        self.allow_upgrades = allow;
        self
    }
}

/// Roll a base tier from `[0, 1024)`.
///
/// 768 Common, 195 Great, 48 Ultra, 12 Rogue and a single Master slot at 0.
pub fn random_base_tier<R: RngOracle + ?Sized>(rng: &mut R) -> Tier {
    match rng.below(EngineConfig::BASE_ROLL_RANGE) {
        256.. => Tier::Common,
        61..=255 => Tier::Great,
        13..=60 => Tier::Ultra,
        1..=12 => Tier::Rogue,
        0 => Tier::Master,
    }
}

/// Luck cascade on top of `base`.
///
/// Each success moves one tier up. A success that would land in an empty tier
/// is undone and ends the cascade, as does reaching Master.
pub fn roll_upgrades<R: RngOracle + ?Sized>(
    config: &EngineConfig,
    thresholds: &CompiledThresholds,
    luck: u8,
    base: Tier,
    rng: &mut R,
) -> (Tier, u8) {
    let odds = config.upgrade_odds(luck);
    let mut tier = base;
    let mut upgrades = 0u8;

    while let Some(next) = tier.up() {
        if rng.below(odds) >= config.upgrade_success_below {
            break;
        }
        if !thresholds.has_entries(next) {
            break;
        }
        tier = next;
        upgrades = upgrades.saturating_add(1);
    }

    (tier, upgrades)
}

/// Walk down to the nearest non-empty tier, giving back upgrades on the way.
fn settle(
    thresholds: &CompiledThresholds,
    tier: Tier,
    upgrades: u8,
) -> Result<(Tier, u8), DrawError> {
    let mut tier = tier;
    let mut upgrades = upgrades;
    while !thresholds.has_entries(tier) {
        match tier.down() {
            Some(lower) => {
                tier = lower;
                upgrades = upgrades.saturating_sub(1);
            }
            None => break,
        }
    }
    if thresholds.has_entries(tier) {
        return Ok((tier, upgrades));
    }

    // Nothing at or below the roll; take the closest tier above.
    Tier::DRAWABLE
        .into_iter()
        .find(|candidate| *candidate > tier && thresholds.has_entries(*candidate))
        .map(|candidate| (candidate, upgrades))
        .ok_or(DrawError::EmptyPool {
            pool: thresholds.pool(),
        })
}

/// Choose `(tier, upgrade_count)` for one draw.
pub fn select_tier<R: RngOracle + ?Sized>(
    config: &EngineConfig,
    thresholds: &CompiledThresholds,
    luck: u8,
    request: TierRequest,
    rng: &mut R,
) -> Result<(Tier, u8), DrawError> {
    let pool = thresholds.pool();
    if !thresholds.any_entries() {
        tracing::error!("{} pool compiled to no drawable tier", pool);
        return Err(DrawError::EmptyPool { pool });
    }

    if let Some(tier) = request.pinned {
        if !thresholds.has_entries(tier) {
            tracing::error!("{} pool: pinned {} tier has no entries", pool, tier);
            return Err(DrawError::EmptyTier { pool, tier });
        }
        return Ok(match request.upgrade_count {
            Some(upgrades) => (tier, upgrades),
            None if request.allow_upgrades => roll_upgrades(config, thresholds, luck, tier, rng),
            None => (tier, 0),
        });
    }

    let base = random_base_tier(rng);
    let (tier, upgrades) = match request.upgrade_count {
        Some(flat) => {
            let mut tier = base;
            let mut applied = 0u8;
            while applied < flat {
                let Some(next) = tier.up() else { break };
                tier = next;
                applied += 1;
            }
            (tier, applied)
        }
        None if request.allow_upgrades => roll_upgrades(config, thresholds, luck, base, rng),
        None => (base, 0),
    };

    settle(thresholds, tier, upgrades)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PartySnapshot, SequenceRng};
    use crate::pool::{Pool, PoolKind, WeightedEntry, compile, pool};
    use crate::reward::RewardId;

    fn player() -> CompiledThresholds {
        compile(pool(PoolKind::Player), &PartySnapshot::new(Vec::new(), 20), 0)
    }

    #[test]
    fn base_roll_cut_points() {
        let cases = [
            (1023, Tier::Common),
            (256, Tier::Common),
            (255, Tier::Great),
            (61, Tier::Great),
            (60, Tier::Ultra),
            (13, Tier::Ultra),
            (12, Tier::Rogue),
            (1, Tier::Rogue),
            (0, Tier::Master),
        ];
        for (value, expected) in cases {
            let mut rng = SequenceRng::repeat(value);
            assert_eq!(random_base_tier(&mut rng), expected, "roll {value}");
        }
    }

    #[test]
    fn cascade_counts_successes_until_failure() {
        let config = EngineConfig::default();
        let thresholds = player();
        // Two successes (< 4), then a failure.
        let mut rng = SequenceRng::new(vec![1, 3, 4]);
        let (tier, upgrades) = roll_upgrades(&config, &thresholds, 0, Tier::Common, &mut rng);
        assert_eq!((tier, upgrades), (Tier::Ultra, 2));
        assert_eq!(rng.consumed(), 3);
    }

    #[test]
    fn cascade_stops_at_master() {
        let config = EngineConfig::default();
        let thresholds = player();
        let mut rng = SequenceRng::repeat(0);
        let (tier, upgrades) = roll_upgrades(&config, &thresholds, 14, Tier::Common, &mut rng);
        assert_eq!((tier, upgrades), (Tier::Master, 4));
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn cascade_never_lands_in_an_empty_tier() {
        let config = EngineConfig::default();
        let buffs = compile(pool(PoolKind::EnemyBuff), &PartySnapshot::default(), 0);
        let mut rng = SequenceRng::repeat(0);
        let (tier, upgrades) = roll_upgrades(&config, &buffs, 0, Tier::Great, &mut rng);
        assert_eq!((tier, upgrades), (Tier::Ultra, 1));
    }

    #[test]
    fn pinned_empty_tier_is_an_error() {
        let config = EngineConfig::default();
        let buffs = compile(pool(PoolKind::EnemyBuff), &PartySnapshot::default(), 0);
        let mut rng = SequenceRng::repeat(0);
        let err = select_tier(&config, &buffs, 0, TierRequest::pinned(Tier::Rogue), &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            DrawError::EmptyTier {
                pool: PoolKind::EnemyBuff,
                tier: Tier::Rogue
            }
        );
    }

    #[test]
    fn rolled_master_settles_into_highest_populated_tier() {
        let config = EngineConfig::default();
        let buffs = compile(pool(PoolKind::EnemyBuff), &PartySnapshot::default(), 0);
        // Base roll 0 is Master; Rogue and Master are empty.
        let mut rng = SequenceRng::repeat(0);
        let (tier, upgrades) =
            select_tier(&config, &buffs, 0, TierRequest::flat(0), &mut rng).unwrap();
        assert_eq!((tier, upgrades), (Tier::Ultra, 0));
    }

    #[test]
    fn flat_upgrades_are_given_back_when_settling() {
        let config = EngineConfig::default();
        let buffs = compile(pool(PoolKind::EnemyBuff), &PartySnapshot::default(), 0);
        // Base roll 40 is Ultra; one flat step lands in empty Rogue.
        let mut rng = SequenceRng::repeat(40);
        let (tier, upgrades) =
            select_tier(&config, &buffs, 0, TierRequest::flat(1), &mut rng).unwrap();
        assert_eq!((tier, upgrades), (Tier::Ultra, 0));
    }

    #[test]
    fn exact_requests_consume_no_randomness() {
        let config = EngineConfig::default();
        let thresholds = player();
        let mut rng = SequenceRng::repeat(0);
        let picked =
            select_tier(&config, &thresholds, 14, TierRequest::exact(Tier::Great, 2), &mut rng);
        assert_eq!(picked, Ok((Tier::Great, 2)));
        assert_eq!(rng.consumed(), 0);
    }

    #[test]
    fn empty_pool_fails_loudly() {
        let config = EngineConfig::default();
        let empty = compile(&Pool::new(PoolKind::Wild), &PartySnapshot::default(), 0);
        let mut rng = SequenceRng::repeat(0);
        assert_eq!(
            select_tier(&config, &empty, 0, TierRequest::rolled(), &mut rng),
            Err(DrawError::EmptyPool {
                pool: PoolKind::Wild
            })
        );

        let only_rogue = Pool::new(PoolKind::Wild)
            .with_tier(Tier::Rogue, vec![WeightedEntry::fixed(RewardId::LuckyEgg, 1)]);
        let compiled = compile(&only_rogue, &PartySnapshot::default(), 0);
        let mut rng = SequenceRng::repeat(900);
        assert_eq!(
            select_tier(&config, &compiled, 0, TierRequest::rolled(), &mut rng),
            Ok((Tier::Rogue, 0))
        );
    }
}
