//! Content loaders for reading reward data from files.

pub mod config;
pub mod factory;
pub mod overrides;
pub mod party;
pub mod settings;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use overrides::{OverrideFile, OverrideLoader};
pub use party::PartyLoader;
pub use settings::SettingsLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
