//! Shop rows and reroll pricing.

use crate::engine::CustomSettings;
use crate::env::PartySnapshot;
use crate::pool::{PoolKind, pool, tier_from_pool};
use crate::reward::{Reward, RewardId, RewardOption, Tier, catalog, clamp_cost};

/// Waves per unlocked shop row.
pub const WAVES_PER_SHOP_ROW: u32 = 30;

/// Reroll base when rarities are not locked.
pub const REROLL_BASE_COST: u64 = 250;

/// Per-tier reroll contribution when rarities are locked, Common first.
pub const LOCKED_TIER_REROLL_COST: [u64; 5] = [50, 125, 300, 750, 2000];

/// Shop rows in unlock order with their price multiplier on `base_cost`.
const SHOP_ROWS: &[&[(RewardId, f64)]] = &[
    &[
        (RewardId::Potion, 0.2),
        (RewardId::Ether, 0.4),
        (RewardId::Revive, 2.0),
    ],
    &[(RewardId::SuperPotion, 0.45), (RewardId::FullHeal, 1.0)],
    &[(RewardId::Elixir, 1.0), (RewardId::MaxEther, 1.0)],
    &[(RewardId::HyperPotion, 0.8), (RewardId::MaxRevive, 2.75)],
    &[(RewardId::MaxPotion, 1.5), (RewardId::MaxElixir, 2.5)],
    &[(RewardId::FullRestore, 2.25)],
    &[(RewardId::SacredAsh, 10.0)],
];

/// Number of shop rows open at `wave`.
pub fn unlocked_rows(wave: u32) -> usize {
    let rows = (wave.saturating_add(10)).div_ceil(WAVES_PER_SHOP_ROW) as usize;
    rows.min(SHOP_ROWS.len())
}

/// Priced shop options for `wave`. Multiples of ten have no shop.
pub fn shop_options_for_wave(wave: u32, base_cost: u64) -> Vec<RewardOption> {
    if wave % 10 == 0 {
        return Vec::new();
    }

    let player = pool(PoolKind::Player);
    let party = PartySnapshot::default();

    SHOP_ROWS[..unlocked_rows(wave)]
        .iter()
        .flat_map(|row| row.iter())
        .filter_map(|&(id, multiplier)| {
            let kind = catalog::entry(id).fixed_kind()?.clone();
            let mut reward = Reward::new(id, kind);
            if let Some(tier) = tier_from_pool(player, id, &party, 0) {
                reward = reward.with_tier(tier);
            }
            Some(RewardOption::priced(reward, base_cost, multiplier))
        })
        .collect()
}

/// Cost of rerolling `options`, or `None` when rerolling is disabled.
///
/// The base is [`REROLL_BASE_COST`], or the sum of each option's tier value
/// when rarities are locked (options without a tier count as Common). It is
/// scaled by `ceil(wave / 10)`, by `2^reroll_count` and by the settings'
/// reroll multiplier. A negative multiplier disables rerolling.
pub fn reroll_cost(
    options: &[RewardOption],
    wave: u32,
    reroll_count: u32,
    lock_rarities: bool,
    settings: Option<&CustomSettings>,
) -> Option<u64> {
    let multiplier = settings
        .and_then(|settings| settings.reroll_multiplier)
        .unwrap_or(1.0);
    if multiplier < 0.0 {
        return None;
    }

    let base = if lock_rarities {
        options
            .iter()
            .map(|option| {
                let index = option.tier().map_or(0, Tier::index);
                LOCKED_TIER_REROLL_COST
                    .get(index)
                    .copied()
                    .unwrap_or(LOCKED_TIER_REROLL_COST[0])
            })
            .sum()
    } else {
        REROLL_BASE_COST
    };

    let wave_factor = f64::from(wave.div_ceil(10));
    let doubling = 2f64.powi(reroll_count.min(i32::MAX as u32) as i32);
    Some(clamp_cost(base as f64 * wave_factor * doubling * multiplier))
}
