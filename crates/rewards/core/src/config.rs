use crate::env::SpeciesId;
use crate::reward::Tier;

/// Engine constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Numerator of the upgrade odds: `odds = base / ((luck + 4) / 4)`.
    pub upgrade_odds_base: u32,
    /// An upgrade succeeds when `below(odds) < upgrade_success_below`.
    pub upgrade_success_below: u32,
    /// Duplicate-avoidance draws granted per requested slot.
    pub retries_per_slot: u32,
    /// Hard cap on duplicate-avoidance draws per slot.
    pub max_retries: u32,
    /// Lowest tier a failing generator may fall back to.
    pub generator_floor: Tier,
    /// Same-tier resamples allowed once the floor is reached.
    pub generator_retry_limit: u32,
    /// Daily luck is drawn from `[0, daily_luck_range)`.
    pub daily_luck_range: u32,
    /// Sub-sequence of the run seed reserved for daily luck.
    pub daily_luck_offset: u64,
    /// Seed for generators resolved by the override layer.
    pub override_seed: u64,
    pub events: EventConfig,
}

impl EngineConfig {
    // ===== compile-time constants =====
    pub const MAX_LUCK: u8 = 14;
    pub const BASE_ROLL_RANGE: u32 = 1024;
    /// 2^53 - 1, the largest integer a float price holds exactly.
    pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;
    pub const CLASSIC_FINAL_WAVE: u32 = 200;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_UPGRADE_ODDS_BASE: u32 = 128;
    pub const DEFAULT_UPGRADE_SUCCESS_BELOW: u32 = 4;
    pub const DEFAULT_RETRIES_PER_SLOT: u32 = 5;
    pub const DEFAULT_MAX_RETRIES: u32 = 50;
    pub const DEFAULT_GENERATOR_RETRY_LIMIT: u32 = 10;
    pub const DEFAULT_DAILY_LUCK_RANGE: u32 = 14;
    pub const DEFAULT_OVERRIDE_SEED: u64 = 0x6f76_6572_7269_6465;

    pub fn new() -> Self {
        Self {
            upgrade_odds_base: Self::DEFAULT_UPGRADE_ODDS_BASE,
            upgrade_success_below: Self::DEFAULT_UPGRADE_SUCCESS_BELOW,
            retries_per_slot: Self::DEFAULT_RETRIES_PER_SLOT,
            max_retries: Self::DEFAULT_MAX_RETRIES,
            generator_floor: Tier::Common,
            generator_retry_limit: Self::DEFAULT_GENERATOR_RETRY_LIMIT,
            daily_luck_range: Self::DEFAULT_DAILY_LUCK_RANGE,
            daily_luck_offset: 0,
            override_seed: Self::DEFAULT_OVERRIDE_SEED,
            events: EventConfig::default(),
        }
    }

    pub fn with_events(mut self, events: EventConfig) -> Self {
        self.events = events;
        self
    }

    pub fn with_generator_floor(mut self, floor: Tier) -> Self {
        self.generator_floor = floor;
        self
    }

    /// Upgrade odds for a luck score. Never below 1.
    ///
    /// `floor(base / ((luck + 4) / 4))` with the inner division exact, i.e.
    /// `floor(4 * base / (luck + 4))`.
    pub fn upgrade_odds(&self, luck: u8) -> u32 {
        let odds = self.upgrade_odds_base.saturating_mul(4) / (u32::from(luck) + 4);
        odds.max(1)
    }

    /// Duplicate-avoidance draws allowed per slot of a `count`-sized batch.
    pub fn retry_budget(&self, count: usize) -> u32 {
        let requested = u32::try_from(count).unwrap_or(u32::MAX);
        self.retries_per_slot
            .saturating_mul(requested)
            .min(self.max_retries)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Timed-event knobs feeding the luck aggregator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventConfig {
    /// Species granting +1 luck while the event runs.
    pub boosted_species: Vec<SpeciesId>,
    /// Flat bonus added after the party sum is clamped.
    pub luck_boost: u8,
    /// Fixed luck for daily runs; replaces the seeded roll.
    pub daily_fixed_luck: Option<u8>,
}

impl EventConfig {
    pub fn is_boosted(&self, species: SpeciesId) -> bool {
        self.boosted_species.contains(&species)
    }
}
