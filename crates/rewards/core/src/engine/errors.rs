//! Draw failures and outcomes.

use crate::error::{EngineError, ErrorSeverity};
use crate::pool::PoolKind;
use crate::reward::{RewardOption, Tier};

/// Failures that stop a draw.
///
/// Everything routine (generator fell back a tier, duplicate accepted,
/// override skipped) is reported through [`DrawOutcome`] or logs instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawError {
    /// No tier of the pool has a positive total weight.
    #[error("{pool} pool has no drawable tier")]
    EmptyPool { pool: PoolKind },

    /// A tier was pinned or reached that compiles to no entries.
    #[error("{pool} pool has no entries in the {tier} tier")]
    EmptyTier { pool: PoolKind, tier: Tier },

    /// Every generator down to the fallback floor produced nothing.
    #[error("generators in the {pool} pool produced nothing down to the {tier} tier")]
    GeneratorExhausted { pool: PoolKind, tier: Tier },
}

impl EngineError for DrawError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DrawError::EmptyPool { .. } => ErrorSeverity::Fatal,
            DrawError::EmptyTier { .. } => ErrorSeverity::Internal,
            DrawError::GeneratorExhausted { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DrawError::EmptyPool { .. } => "DRAW_EMPTY_POOL",
            DrawError::EmptyTier { .. } => "DRAW_EMPTY_TIER",
            DrawError::GeneratorExhausted { .. } => "DRAW_GENERATOR_EXHAUSTED",
        }
    }
}

/// Result of a single entry draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn {
        option: RewardOption,
        /// Tier-decrement retries taken after generators produced nothing.
        fallbacks: u32,
    },
    /// Generators kept producing nothing at the floor tier.
    Exhausted { tier: Tier },
}

impl DrawOutcome {
    pub fn into_option(self) -> Option<RewardOption> {
        match self {
            DrawOutcome::Drawn { option, .. } => Some(option),
            DrawOutcome::Exhausted { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_follow_recoverability() {
        let exhausted = DrawError::GeneratorExhausted {
            pool: PoolKind::Player,
            tier: Tier::Common,
        };
        assert!(exhausted.severity().is_recoverable());
        assert_eq!(exhausted.error_code(), "DRAW_GENERATOR_EXHAUSTED");

        let empty = DrawError::EmptyPool {
            pool: PoolKind::Wild,
        };
        assert!(empty.severity().is_internal());
        assert_eq!(empty.to_string(), "wild pool has no drawable tier");
    }
}
