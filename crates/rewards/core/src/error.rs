//! Common error infrastructure for reward-core.
//!
//! Domain errors (e.g. `DrawError`) live next to the code that raises them and
//! implement [`EngineError`] for uniform classification.
//!
//! Expected outcomes such as a generator producing nothing, an accepted
//! duplicate or a skipped override are not errors. They are modelled with
//! `Option` and explicit outcome enums so tests can inspect them.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same request may succeed with different input or after a reroll
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: pool configuration inconsistency that needs investigation
/// - **Fatal**: the engine cannot produce anything for this request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Examples: every generator down to the floor came up empty.
    Recoverable,

    /// Examples: malformed identifiers in external data.
    Validation,

    /// Examples: a pinned tier that compiles to no entries.
    Internal,

    /// Examples: a pool with no drawable tier at all.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates a configuration bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all reward-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a stable SCREAMING_SNAKE_CASE code from `error_code`
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for this error variant, for logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
