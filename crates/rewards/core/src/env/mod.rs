//! Inputs the engine reads but never owns.
//!
//! The random stream is an oracle trait so callers can plug in the run's own
//! generator; the party snapshot is a plain read-only value built per batch.
mod party;
mod rng;

pub use party::{
    GameMode, HeldStack, LearnableTm, MemberView, MoveId, MoveSlot, MoveType, PartySnapshot,
    RunStack, SpeciesId,
};
pub use rng::{PcgRng, RngOracle, SequenceRng, derive_seed};
