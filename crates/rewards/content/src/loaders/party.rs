//! Party snapshot loader.

use std::path::Path;

use reward_core::PartySnapshot;

use crate::loaders::{LoadResult, read_file};

/// Loader for party snapshots from RON files.
///
/// Snapshots on disk feed tooling and fixtures; a live game builds them in
/// memory instead.
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<PartySnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PartySnapshot> {
        let party: PartySnapshot = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;

        for (slot, member) in party.members.iter().enumerate() {
            anyhow::ensure!(
                member.hp <= member.max_hp,
                "member {} has {} hp above its max of {}",
                slot,
                member.hp,
                member.max_hp
            );
        }
        if party.members.len() > 6 {
            tracing::warn!("party has {} members, more than a full team", party.members.len());
        }

        Ok(party)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reward_core::{GameMode, MoveType, SpeciesId};

    #[test]
    fn test_parse_party() {
        let party = PartyLoader::parse(
            r#"(
                members: [
                    (
                        species: SpeciesId(6),
                        hp: 40,
                        max_hp: 120,
                        luck: 2,
                        moves: [
                            (move_id: MoveId(53), move_type: Fire, max_pp: 15, pp_used: 10, damaging: true),
                        ],
                    ),
                ],
                wave: 37,
                mode: Endless,
            )"#,
        )
        .unwrap();
        assert_eq!(party.wave, 37);
        assert_eq!(party.mode, GameMode::Endless);
        let member = &party.members[0];
        assert_eq!(member.species, SpeciesId(6));
        assert!(member.allowed_in_battle);
        assert_eq!(member.moves[0].move_type, MoveType::Fire);
    }

    #[test]
    fn test_overfull_hp_is_rejected() {
        let result = PartyLoader::parse("(members: [(hp: 50, max_hp: 10)])");
        assert!(result.is_err());
    }

    #[test]
    fn test_shipped_parties_parse() {
        for party in [
            include_str!("../../data/parties/early.ron"),
            include_str!("../../data/parties/late.ron"),
            include_str!("../../data/parties/daily.ron"),
        ] {
            PartyLoader::parse(party).unwrap();
        }
    }
}
