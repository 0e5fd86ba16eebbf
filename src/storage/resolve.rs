//! Resolution of a player's school to the generated identity of a team row.
//!
//! Two tiers:
//! 1. exact, case-sensitive match against the teams of the phase being synced;
//! 2. for playoff and championship phases, a case-insensitive match against the
//!    regular-season teams, then the same franchise in the current phase.
//!
//! Non-regular phases also record the regular-season team id when one matches.

use std::collections::HashMap;

/// Team references for one player row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTeam {
    /// Team row in the same league and phase.
    pub team_id: i64,
    /// Regular-season team row of the same franchise, for playoff phases.
    pub regular_team_id: Option<i64>,
}

/// Name to identity maps scoped to a single sync call.
#[derive(Debug, Default)]
pub struct TeamResolver {
    current: HashMap<String, i64>,
    current_folded: HashMap<String, i64>,
    regular_folded: Option<HashMap<String, i64>>,
}

fn fold(name: &str) -> String {
    name.trim().to_lowercase()
}

fn folded(map: &HashMap<String, i64>) -> HashMap<String, i64> {
    map.iter().map(|(name, id)| (fold(name), *id)).collect()
}

impl TeamResolver {
    /// `current` maps team names of the synced phase to ids. Pass `regular` only when
    /// syncing a non-regular phase.
    pub fn new(current: HashMap<String, i64>, regular: Option<HashMap<String, i64>>) -> Self {
        Self {
            current_folded: folded(&current),
            regular_folded: regular.as_ref().map(folded),
            current,
        }
    }

    pub fn resolve(&self, school: &str) -> Option<ResolvedTeam> {
        let key = fold(school);
        let regular_team_id = self
            .regular_folded
            .as_ref()
            .and_then(|regular| regular.get(&key).copied());

        let team_id = match self.current.get(school) {
            Some(id) => *id,
            // Only fall back for franchises known to the regular season.
            None if regular_team_id.is_some() => *self.current_folded.get(&key)?,
            None => return None,
        };

        Some(ResolvedTeam {
            team_id,
            regular_team_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, i64)]) -> HashMap<String, i64> {
        entries.iter().map(|(n, id)| (n.to_string(), *id)).collect()
    }

    #[test]
    fn test_exact_match_in_current_phase() {
        let resolver = TeamResolver::new(map(&[("Alpha U", 1), ("Beta College", 2)]), None);
        assert_eq!(
            resolver.resolve("Alpha U"),
            Some(ResolvedTeam {
                team_id: 1,
                regular_team_id: None
            })
        );
    }

    #[test]
    fn test_regular_phase_is_case_sensitive() {
        let resolver = TeamResolver::new(map(&[("Alpha U", 1)]), None);
        assert_eq!(resolver.resolve("alpha u"), None);
    }

    #[test]
    fn test_unknown_school_unresolved() {
        let resolver = TeamResolver::new(map(&[("Alpha U", 1)]), Some(map(&[("Alpha U", 10)])));
        assert_eq!(resolver.resolve("Unknown School"), None);
    }

    #[test]
    fn test_playoff_player_gets_regular_team_id() {
        let resolver = TeamResolver::new(
            map(&[("Alpha U", 5)]),
            Some(map(&[("Alpha U", 1), ("Beta College", 2)])),
        );
        assert_eq!(
            resolver.resolve("Alpha U"),
            Some(ResolvedTeam {
                team_id: 5,
                regular_team_id: Some(1)
            })
        );
    }

    #[test]
    fn test_case_insensitive_fallback_through_regular_season() {
        let resolver = TeamResolver::new(map(&[("Alpha U", 5)]), Some(map(&[("ALPHA U", 1)])));
        assert_eq!(
            resolver.resolve("alpha u"),
            Some(ResolvedTeam {
                team_id: 5,
                regular_team_id: Some(1)
            })
        );
    }

    #[test]
    fn test_regular_only_team_is_not_enough() {
        // Beta College made no playoffs: no team row in the current phase to own the player.
        let resolver = TeamResolver::new(
            map(&[("Alpha U", 5)]),
            Some(map(&[("Alpha U", 1), ("Beta College", 2)])),
        );
        assert_eq!(resolver.resolve("Beta College"), None);
    }

    #[test]
    fn test_exact_match_without_regular_counterpart() {
        let resolver = TeamResolver::new(map(&[("Gamma Tech", 7)]), Some(HashMap::new()));
        assert_eq!(
            resolver.resolve("Gamma Tech"),
            Some(ResolvedTeam {
                team_id: 7,
                regular_team_id: None
            })
        );
    }
}
