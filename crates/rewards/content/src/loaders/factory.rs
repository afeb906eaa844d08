//! Content factory for building engines from data files.

use std::path::{Path, PathBuf};

use reward_core::{CustomSettings, EngineConfig, OverrideTable, PartySnapshot, RewardEngine};

use crate::loaders::{ConfigLoader, LoadResult, OverrideLoader, PartyLoader, SettingsLoader};

/// Content factory that loads all reward content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── overrides.ron
/// ├── settings/
/// │   ├── tier_lock.ron
/// │   └── trainer_reward.ron
/// └── parties/
///     ├── early.ron
///     └── late.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load engine configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<EngineConfig> {
        let path = self.data_dir.join("config.toml");
        ConfigLoader::load(&path)
    }

    /// Load the override table from `overrides.ron`.
    ///
    /// A missing file means no overrides.
    pub fn load_overrides(&self) -> LoadResult<OverrideTable> {
        let path = self.data_dir.join("overrides.ron");
        if !path.exists() {
            tracing::debug!("no override file at {}", path.display());
            return Ok(OverrideTable::default());
        }
        OverrideLoader::load(&path)
    }

    /// Load a custom settings preset from `settings/{name}.ron`.
    pub fn load_settings(&self, name: &str) -> LoadResult<CustomSettings> {
        let path = self.data_dir.join("settings").join(format!("{}.ron", name));
        SettingsLoader::load(&path)
    }

    /// Load a party snapshot from `parties/{name}.ron`.
    pub fn load_party(&self, name: &str) -> LoadResult<PartySnapshot> {
        let path = self.data_dir.join("parties").join(format!("{}.ron", name));
        PartyLoader::load(&path)
    }

    /// Build an engine for `run_seed` from the config and override files.
    pub fn build_engine(&self, run_seed: u64) -> LoadResult<RewardEngine> {
        let config = self.load_config()?;
        let overrides = self.load_overrides()?;
        if !overrides.is_empty() {
            tracing::info!("{} reward overrides active", overrides.len());
        }
        Ok(RewardEngine::new(config, run_seed).with_overrides(overrides))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, ContentFactory) {
        let temp_dir = TempDir::new().unwrap();
        let factory = ContentFactory::new(temp_dir.path());
        (temp_dir, factory)
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_missing_overrides_are_empty() {
        let (_temp, factory) = setup();
        assert!(factory.load_overrides().unwrap().is_empty());
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let (_temp, factory) = setup();
        let err = factory.load_config().unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_build_engine_from_files() {
        let (temp, factory) = setup();
        fs::write(temp.path().join("config.toml"), "max_retries = 7\n").unwrap();
        fs::write(
            temp.path().join("overrides.ron"),
            r#"(overrides: [(id: "LEFTOVERS")])"#,
        )
        .unwrap();

        let engine = factory.build_engine(31).unwrap();
        assert_eq!(engine.config().max_retries, 7);
        assert_eq!(engine.overrides().len(), 1);
        assert_eq!(engine.run_seed(), 31);
    }

    #[test]
    fn test_named_presets_resolve_under_subdirectories() {
        let (temp, factory) = setup();
        fs::create_dir_all(temp.path().join("settings")).unwrap();
        fs::create_dir_all(temp.path().join("parties")).unwrap();
        fs::write(
            temp.path().join("settings").join("locked.ron"),
            "(guaranteed_tiers: [Rogue])",
        )
        .unwrap();
        fs::write(
            temp.path().join("parties").join("solo.ron"),
            "(members: [(species: SpeciesId(25), hp: 20, max_hp: 35)], wave: 9)",
        )
        .unwrap();

        let settings = factory.load_settings("locked").unwrap();
        assert_eq!(settings.guaranteed_tiers.len(), 1);
        let party = factory.load_party("solo").unwrap();
        assert_eq!(party.wave, 9);
        assert!(factory.load_party("missing").is_err());
    }
}
