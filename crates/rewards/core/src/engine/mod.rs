//! Draw pipeline: tier selection, entry draw, duplicate avoidance, batch
//! assembly and overrides.
//!
//! [`RewardEngine`] ties the stages together for one run. Every stage is also
//! exposed on its own so harnesses can drive a single step with a scripted
//! random stream.
//!
//! # Determinism
//!
//! A batch consumes the caller's stream in a fixed order: for each slot the
//! base tier roll, the cascade samples, the entry sample and any generator
//! samples, then redraws. The override layer never touches that stream.
mod batch;
mod draw;
mod enemy;
mod errors;
mod overrides;
mod tier;
mod unique;

pub use batch::{CustomSettings, GuaranteedSpec, assemble};
pub use draw::{DrawContext, draw_entry};
pub use enemy::EnemyBuffDraw;
pub use errors::{DrawError, DrawOutcome};
pub use overrides::{OverrideEntry, OverrideTable, apply_overrides};
pub use tier::{TierRequest, random_base_tier, roll_upgrades, select_tier};
pub use unique::{collides, draw_unique};

use crate::config::EngineConfig;
use crate::env::{PartySnapshot, RngOracle};
use crate::luck;
use crate::pool::{Pool, PoolKind, compile, pool};
use crate::reward::{RewardOption, Tier};

/// Parameters of one batch.
///
/// The engine's override table applies to every pool kind. Each override's
/// tier is looked up in the requested pool, so ids the pool does not list
/// leave their slot as drawn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BatchRequest {
    pub count: usize,
    pub pool: PoolKind,
    /// Base tier per slot; slots past the end roll freely.
    pub pinned_tiers: Vec<Tier>,
    pub settings: Option<CustomSettings>,
    /// Rerolls already taken on this offer screen.
    pub reroll_count: u32,
}

impl Default for BatchRequest {
    fn default() -> Self {
        Self::new(3)
    }
}

impl BatchRequest {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            pool: PoolKind::Player,
            pinned_tiers: Vec::new(),
            settings: None,
            reroll_count: 0,
        }
    }

    #[must_use]
    pub fn with_pool(mut self, pool: PoolKind) -> Self {
        self.pool = pool;
        self
    }

    #[must_use]
    pub fn with_pinned_tiers(mut self, tiers: Vec<Tier>) -> Self {
        self.pinned_tiers = tiers;
        self
    }

    #[must_use]
    pub fn with_settings(mut self, settings: CustomSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    #[must_use]
    pub fn with_reroll_count(mut self, reroll_count: u32) -> Self {
        self.reroll_count = reroll_count;
        self
    }
}

/// Reward engine for one run.
#[derive(Clone, Debug, Default)]
pub struct RewardEngine {
    config: EngineConfig,
    run_seed: u64,
    overrides: OverrideTable,
}

impl RewardEngine {
    pub fn new(config: EngineConfig, run_seed: u64) -> Self {
        Self {
            config,
            run_seed,
            overrides: OverrideTable::default(),
        }
    }

    /// Force the leading slots of every batch, whatever pool it is drawn from.
    #[must_use]
    pub fn with_overrides(mut self, overrides: OverrideTable) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Party luck as seen by this run.
    pub fn luck(&self, party: &PartySnapshot) -> u8 {
        luck::party_luck(party, &self.config, self.run_seed)
    }

    /// Generate a batch from the built-in pool named by the request.
    pub fn generate<R: RngOracle + ?Sized>(
        &self,
        request: &BatchRequest,
        party: &PartySnapshot,
        rng: &mut R,
    ) -> Result<Vec<RewardOption>, DrawError> {
        self.generate_from(pool(request.pool), request, party, rng)
    }

    /// Generate a batch from an explicit pool.
    ///
    /// Luck is computed and thresholds compiled once for the whole batch.
    pub fn generate_from<R: RngOracle + ?Sized>(
        &self,
        pool: &Pool,
        request: &BatchRequest,
        party: &PartySnapshot,
        rng: &mut R,
    ) -> Result<Vec<RewardOption>, DrawError> {
        let luck = if pool.kind().uses_luck() {
            self.luck(party)
        } else {
            0
        };
        let thresholds = compile(pool, party, request.reroll_count);
        let ctx = DrawContext::new(&self.config, pool, &thresholds, party)
            .with_luck(luck)
            .with_cascade(pool.kind().uses_luck());

        tracing::debug!(
            "generating {} options from {} pool at wave {} (luck {})",
            request.count,
            pool.kind(),
            party.wave,
            luck
        );

        let mut options = assemble(
            &ctx,
            request.count,
            &request.pinned_tiers,
            request.settings.as_ref(),
            request.reroll_count,
            rng,
        )?;

        if !self.overrides.is_empty() {
            apply_overrides(
                &mut options,
                &self.overrides,
                pool,
                party,
                request.reroll_count,
                self.config.override_seed,
            );
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{MemberView, PcgRng, SpeciesId};
    use crate::reward::RewardId;

    fn party() -> PartySnapshot {
        PartySnapshot::new(
            vec![
                MemberView::new(SpeciesId(1), 40, 100).with_luck(2),
                MemberView::new(SpeciesId(4), 0, 80),
            ],
            27,
        )
    }

    #[test]
    fn same_seed_same_batch() {
        let engine = RewardEngine::new(EngineConfig::default(), 11);
        let request = BatchRequest::new(4);
        let a = engine.generate(&request, &party(), &mut PcgRng::new(5)).unwrap();
        let b = engine.generate(&request, &party(), &mut PcgRng::new(5)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn engine_overrides_apply_after_drawing() {
        let engine = RewardEngine::new(EngineConfig::default(), 11).with_overrides(
            OverrideTable::new(vec![OverrideEntry::new("SACRED_ASH")]),
        );
        let options = engine
            .generate(&BatchRequest::new(3), &party(), &mut PcgRng::new(5))
            .unwrap();
        assert_eq!(options[0].reward.id, RewardId::SacredAsh);
        assert_eq!(options[0].tier(), Some(Tier::Great));
    }

    #[test]
    fn overrides_follow_the_requested_pool() {
        let request = BatchRequest::new(2).with_pool(PoolKind::Trainer);
        let plain = RewardEngine::new(EngineConfig::default(), 11)
            .generate(&request, &party(), &mut PcgRng::new(8))
            .unwrap();
        let engine = RewardEngine::new(EngineConfig::default(), 11).with_overrides(
            OverrideTable::new(vec![
                OverrideEntry::new("LEFTOVERS"),
                OverrideEntry::new("SACRED_ASH"),
            ]),
        );
        let options = engine.generate(&request, &party(), &mut PcgRng::new(8)).unwrap();

        assert_eq!(options[0].reward.id, RewardId::Leftovers);
        assert_eq!(options[0].tier(), Some(Tier::Master));
        assert_eq!(options[0].upgrade_count, plain[0].upgrade_count);
        // Not in the trainer pool, so the drawn option stays.
        assert_eq!(options[1], plain[1]);
    }

    #[test]
    fn enemy_pools_ignore_luck() {
        let engine = RewardEngine::new(EngineConfig::default(), 11);
        let request = BatchRequest::new(2).with_pool(PoolKind::Trainer);
        let options = engine.generate(&request, &party(), &mut PcgRng::new(8)).unwrap();
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|option| option.upgrade_count == 0));
    }
}
