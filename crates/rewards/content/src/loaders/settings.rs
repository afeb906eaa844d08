//! Custom settings preset loader.

use std::path::Path;

use reward_core::CustomSettings;

use crate::loaders::{LoadResult, read_file};

/// Loader for custom settings presets from RON files.
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load a custom settings preset from a RON file.
    pub fn load(path: &Path) -> LoadResult<CustomSettings> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CustomSettings> {
        let settings: CustomSettings = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse settings RON: {}", e))?;

        if let Some(multiplier) = settings.reroll_multiplier {
            anyhow::ensure!(
                multiplier.is_finite(),
                "reroll_multiplier must be finite, got {}",
                multiplier
            );
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reward_core::{RewardId, Tier};

    #[test]
    fn test_parse_settings() {
        let settings = SettingsLoader::parse(
            r#"(
                guaranteed_specs: [(id: MAX_REVIVE)],
                guaranteed_tiers: [Great, Ultra],
                fill_remaining: true,
                reroll_multiplier: Some(0.5),
            )"#,
        )
        .unwrap();
        assert_eq!(settings.guaranteed_specs[0].id, RewardId::MaxRevive);
        assert_eq!(settings.guaranteed_tiers, vec![Tier::Great, Tier::Ultra]);
        assert!(settings.fill_remaining);
        assert!(settings.allow_luck_upgrades());
    }

    #[test]
    fn test_empty_settings_are_default() {
        assert_eq!(SettingsLoader::parse("()").unwrap(), CustomSettings::default());
    }

    #[test]
    fn test_shipped_presets_parse() {
        for preset in [
            include_str!("../../data/settings/tier_lock.ron"),
            include_str!("../../data/settings/trainer_reward.ron"),
            include_str!("../../data/settings/no_reroll.ron"),
        ] {
            SettingsLoader::parse(preset).unwrap();
        }
    }
}
