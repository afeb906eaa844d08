//! Engine configuration loader.

use std::path::Path;

use reward_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Every field is optional; anything missing keeps its default.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate TOML config text.
    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn validate(config: &EngineConfig) -> LoadResult<()> {
        anyhow::ensure!(
            config.upgrade_odds_base > 0,
            "upgrade_odds_base must be positive"
        );
        anyhow::ensure!(
            config.daily_luck_range > 0,
            "daily_luck_range must be positive"
        );
        anyhow::ensure!(
            config.generator_floor.is_drawable(),
            "generator_floor must be a drawable tier, got {}",
            config.generator_floor
        );
        if config.retries_per_slot == 0 || config.max_retries == 0 {
            tracing::warn!("duplicate avoidance disabled: every first draw is accepted");
        }
        if let Some(luck) = config.events.daily_fixed_luck {
            if luck > EngineConfig::MAX_LUCK {
                tracing::warn!(
                    "daily_fixed_luck {} is above {} and will be clamped",
                    luck,
                    EngineConfig::MAX_LUCK
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reward_core::{SpeciesId, Tier};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_config_overrides_fields() {
        let config = ConfigLoader::parse(
            r#"
            upgrade_odds_base = 64
            generator_floor = "Great"

            [events]
            boosted_species = [25, 133]
            luck_boost = 1
            "#,
        )
        .unwrap();
        assert_eq!(config.upgrade_odds_base, 64);
        assert_eq!(config.generator_floor, Tier::Great);
        assert_eq!(config.max_retries, EngineConfig::DEFAULT_MAX_RETRIES);
        assert!(config.events.is_boosted(SpeciesId(133)));
        assert_eq!(config.events.luck_boost, 1);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(ConfigLoader::parse("upgrade_odds_base = 0").is_err());
        assert!(ConfigLoader::parse(r#"generator_floor = "Luxury""#).is_err());
        assert!(ConfigLoader::parse("max_retries = -1").is_err());
    }

    #[test]
    fn test_shipped_config_parses() {
        let config = ConfigLoader::parse(include_str!("../../data/config.toml")).unwrap();
        assert_eq!(config.upgrade_odds_base, EngineConfig::DEFAULT_UPGRADE_ODDS_BASE);
    }
}
