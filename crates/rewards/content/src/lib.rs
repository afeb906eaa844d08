//! Data-driven content for the reward engine.
//!
//! This crate provides loaders for RON/TOML data files:
//! - Engine configuration (TOML)
//! - Override tables (RON)
//! - Custom settings presets (RON)
//! - Party snapshots for tooling and fixtures (RON)
//!
//! All loaders deserialize `reward-core` types directly through its `serde`
//! feature; nothing here changes how draws are made.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, OverrideFile, OverrideLoader, PartyLoader,
    SettingsLoader,
};
