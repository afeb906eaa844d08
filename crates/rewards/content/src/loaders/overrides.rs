//! Override table loader.

use std::path::Path;

use reward_core::{OverrideEntry, OverrideTable, RewardId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Override file structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverrideFile {
    #[serde(default)]
    pub overrides: Vec<OverrideEntry>,
}

/// Loader for override tables from RON files.
pub struct OverrideLoader;

impl OverrideLoader {
    /// Load an override table from a RON file.
    pub fn load(path: &Path) -> LoadResult<OverrideTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse override RON text.
    ///
    /// Unknown ids are kept: the engine skips them slot by slot, so a typo
    /// only disables its own slot. They are reported here once.
    pub fn parse(content: &str) -> LoadResult<OverrideTable> {
        let file: OverrideFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse override RON: {}", e))?;

        for (slot, entry) in file.overrides.iter().enumerate() {
            if entry.id.parse::<RewardId>().is_err() {
                tracing::warn!("override slot {} names unknown reward {}", slot, entry.id);
            }
        }

        Ok(OverrideTable::new(file.overrides))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reward_core::PregenArg;
    use reward_core::reward::BerryKind;

    #[test]
    fn test_parse_overrides_with_pregen() {
        let table = OverrideLoader::parse(
            r#"(
                overrides: [
                    (id: "MASTER_BALL"),
                    (id: "BERRY", pregen: Some(Berry(Starf))),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].id, "MASTER_BALL");
        assert_eq!(
            table.entries()[1].pregen,
            Some(PregenArg::Berry(BerryKind::Starf))
        );
    }

    #[test]
    fn test_unknown_ids_are_kept() {
        let table = OverrideLoader::parse(r#"(overrides: [(id: "NOT_A_REWARD")])"#).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_shipped_overrides_parse() {
        let table = OverrideLoader::parse(include_str!("../../data/overrides.ron")).unwrap();
        assert!(table.is_empty());
    }
}
