//! Reward definitions and the options offered to the player.

use crate::config::EngineConfig;
use crate::reward::{ApplyTarget, RewardId, RewardKind, Tier};

/// A concrete reward ready to be offered.
///
/// `tier` stays `None` until the reward is placed by a draw or a reverse
/// pool lookup. Generators stamp their own id and tier onto what they produce.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reward {
    pub id: RewardId,
    pub tier: Option<Tier>,
    pub kind: RewardKind,
}

impl Reward {
    pub fn new(id: RewardId, kind: RewardKind) -> Self {
        Self {
            id,
            tier: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = Some(tier);
        self
    }

    pub fn name(&self) -> String {
        self.kind.name()
    }

    /// Localisation key for the name.
    pub fn name_key(&self) -> String {
        format!("reward.{}.name", self.id.as_ref().to_lowercase())
    }

    pub fn icon(&self) -> String {
        self.kind.icon()
    }

    pub fn sound(&self) -> &'static str {
        self.kind.sound()
    }

    pub fn group(&self) -> Option<&'static str> {
        self.kind.group()
    }

    pub fn target(&self) -> ApplyTarget {
        self.kind.target()
    }

    /// Duplicate check used within a single batch.
    ///
    /// Two rewards collide when their names match, or when both belong to
    /// the same group.
    pub fn collides_with(&self, other: &Reward) -> bool {
        if self.name() == other.name() {
            return true;
        }
        matches!((self.group(), other.group()), (Some(a), Some(b)) if a == b)
    }
}

/// A draw result: the reward plus how it was reached and what it costs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardOption {
    pub reward: Reward,
    /// Luck upgrades applied on top of the base tier.
    pub upgrade_count: u8,
    /// 0 for post-battle offers.
    pub cost: u64,
}

impl RewardOption {
    pub fn free(reward: Reward, upgrade_count: u8) -> Self {
        Self {
            reward,
            upgrade_count,
            cost: 0,
        }
    }

    /// Shop option priced at `base_cost * multiplier`.
    pub fn priced(reward: Reward, base_cost: u64, multiplier: f64) -> Self {
        Self {
            reward,
            upgrade_count: 0,
            cost: clamp_cost(base_cost as f64 * multiplier),
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        self.reward.tier
    }
}

/// Round a computed price into `[0, MAX_SAFE_INTEGER]`.
///
/// NaN and negative inputs price at 0; infinities and overflow clamp to the
/// ceiling.
pub fn clamp_cost(raw: f64) -> u64 {
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    let ceiling = EngineConfig::MAX_SAFE_INTEGER;
    if raw >= ceiling as f64 {
        return ceiling;
    }
    (raw.round() as u64).min(ceiling)
}
