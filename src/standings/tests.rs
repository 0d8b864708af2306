//! Unit tests for the standings engine

use super::*;
use crate::{error::StandingsError, MatchStatus, TeamId};
use std::cell::Cell;

const SEASON: SeasonId = SeasonId(1);

fn t(id: u32, name: &'static str) -> (TeamId, &'static str) {
    (TeamId::new(id), name)
}

/// Store that counts calls and can be told to fail.
struct ProbeStore {
    inner: InMemoryMatchStore,
    calls: Cell<usize>,
    fail: bool,
}

impl ProbeStore {
    fn new(matches: Vec<MatchResult>) -> Self {
        Self {
            inner: InMemoryMatchStore::new(matches),
            calls: Cell::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(vec![])
        }
    }
}

impl MatchStore for ProbeStore {
    fn get_completed_matches(&self, season_id: SeasonId) -> crate::Result<Vec<MatchResult>> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            return Err(StandingsError::Repository {
                message: "match store unavailable".to_string(),
            });
        }
        self.inner.get_completed_matches(season_id)
    }
}

fn scenario_matches() -> Vec<MatchResult> {
    vec![
        MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 3, 1),
        MatchResult::finished(SEASON, t(3, "Charlie"), t(4, "Delta"), 2, 2),
    ]
}

#[cfg(test)]
mod intake_tests {
    use super::*;

    #[test]
    fn test_resolved_scored_match_is_eligible() {
        let result = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 1, 0);
        let scored = intake::to_scored_match(&result).unwrap();
        assert_eq!(scored.home.name, "Alpha");
        assert_eq!(scored.away.id, TeamId::new(2));
        assert_eq!((scored.home_score, scored.away_score), (1, 0));
    }

    #[test]
    fn test_unresolved_team_names_are_skipped() {
        let mut result = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 1, 0);
        result.away_team_name = None;
        assert_eq!(
            intake::to_scored_match(&result),
            Err(SkipReason::UnresolvedAwayTeam)
        );

        result.home_team_name = None;
        assert_eq!(
            intake::to_scored_match(&result),
            Err(SkipReason::UnresolvedHomeTeam)
        );
    }

    #[test]
    fn test_zero_team_id_is_unresolved() {
        let result = MatchResult::finished(SEASON, t(0, "Ghost"), t(2, "Beta"), 1, 0);
        assert_eq!(
            intake::to_scored_match(&result),
            Err(SkipReason::UnresolvedHomeTeam)
        );
    }

    #[test]
    fn test_missing_either_score_is_skipped() {
        let mut result = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 1, 0);
        result.home_score = None;
        assert_eq!(intake::to_scored_match(&result), Err(SkipReason::MissingScore));

        let mut result = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 1, 0);
        result.away_score = None;
        assert_eq!(intake::to_scored_match(&result), Err(SkipReason::MissingScore));
    }

    #[test]
    fn test_filter_keeps_store_order() {
        let mut broken = MatchResult::finished(SEASON, t(5, "Echo"), t(6, "Foxtrot"), 1, 1);
        broken.home_score = None;

        let matches = vec![
            MatchResult::finished(SEASON, t(3, "Charlie"), t(4, "Delta"), 0, 0),
            broken,
            MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 2, 1),
        ];

        let eligible = filter_eligible(&matches);
        let homes: Vec<_> = eligible.iter().map(|m| m.home.name.as_str()).collect();
        assert_eq!(homes, vec!["Charlie", "Alpha"]);
    }

    #[test]
    fn test_skipped_matches_are_counted_per_season() {
        let mut orphan = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 1, 0);
        orphan.away_team_name = None;
        let mut unscored = MatchResult::finished(SeasonId(3), t(3, "Charlie"), t(4, "Delta"), 0, 0);
        unscored.home_score = None;

        let matches = vec![
            orphan,
            unscored.clone(),
            unscored,
            MatchResult::finished(SeasonId(3), t(1, "Alpha"), t(4, "Delta"), 2, 2),
        ];

        let (eligible, skipped) = intake::partition_eligible(&matches);
        assert_eq!(eligible.len(), 1);
        assert_eq!(
            skipped.into_iter().collect::<Vec<_>>(),
            vec![(SEASON, 1), (SeasonId(3), 2)]
        );

        let (_, nothing_skipped) = intake::partition_eligible(&matches[3..]);
        assert!(nothing_skipped.is_empty());
    }

    #[test]
    fn test_in_memory_store_filters_season_and_status() {
        let other_season = MatchResult::finished(SeasonId(2), t(1, "Alpha"), t(2, "Beta"), 1, 0);
        let mut scheduled = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 0, 0);
        scheduled.status = MatchStatus::Scheduled;

        let store = InMemoryMatchStore::new(vec![
            other_season,
            scheduled,
            MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 4, 0),
        ]);

        let matches = store.get_completed_matches(SEASON).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].home_score, Some(4));
    }

    #[test]
    fn test_validate_season_id() {
        assert!(validate_season_id(SeasonId(3)).is_ok());
        assert!(matches!(
            validate_season_id(SeasonId(0)),
            Err(StandingsError::InvalidSeasonId { .. })
        ));
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn test_alpha_beta_charlie_delta_scenario() {
        let store = InMemoryMatchStore::new(scenario_matches());
        let table = generate_leaderboard(&store, SEASON).unwrap();

        let names: Vec<_> = table.iter().map(|e| e.team_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Charlie", "Delta", "Beta"]);

        let alpha = &table[0];
        assert_eq!((alpha.played, alpha.won, alpha.points, alpha.goal_difference), (1, 1, 3, 2));

        for drawn in &table[1..3] {
            assert_eq!((drawn.played, drawn.drawn, drawn.points), (1, 1, 1));
            assert_eq!((drawn.goal_difference, drawn.goals_for), (0, 2));
        }

        let beta = &table[3];
        assert_eq!((beta.played, beta.lost, beta.points, beta.goal_difference), (1, 1, 0, -2));
    }

    #[test]
    fn test_match_without_away_team_contributes_nothing() {
        let mut orphan = MatchResult::finished(SEASON, t(5, "Echo"), t(6, "Foxtrot"), 4, 0);
        orphan.away_team_name = None;

        let mut matches = scenario_matches();
        matches.push(orphan);

        let table = generate_leaderboard(&InMemoryMatchStore::new(matches), SEASON).unwrap();
        assert_eq!(table.len(), 4);
        assert!(table.iter().all(|e| e.team_name != "Echo" && e.team_name != "Foxtrot"));
    }

    #[test]
    fn test_empty_season_is_empty_leaderboard() {
        let store = InMemoryMatchStore::new(scenario_matches());
        let table = generate_leaderboard(&store, SeasonId(99)).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_only_unscored_matches_is_empty_leaderboard() {
        let mut unscored = MatchResult::finished(SEASON, t(1, "Alpha"), t(2, "Beta"), 0, 0);
        unscored.home_score = None;
        unscored.away_score = None;

        let table = compute_leaderboard(&[unscored]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_zero_season_fails_before_store_access() {
        let store = ProbeStore::new(scenario_matches());
        let err = generate_leaderboard(&store, SeasonId(0)).unwrap_err();

        assert!(matches!(err, StandingsError::InvalidSeasonId { .. }));
        assert!(err.is_client_error());
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn test_store_error_propagates_unchanged() {
        let store = ProbeStore::failing();
        match generate_leaderboard(&store, SEASON) {
            Err(StandingsError::Repository { message }) => {
                assert_eq!(message, "match store unavailable")
            }
            other => panic!("Expected Repository error, got {other:?}"),
        }
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_store_is_called_once_per_season() {
        let store = ProbeStore::new(scenario_matches());
        generate_leaderboard(&store, SEASON).unwrap();
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_generate_leaderboards_keeps_seasons_apart() {
        let mut matches = scenario_matches();
        matches.push(MatchResult::finished(SeasonId(2), t(2, "Beta"), t(1, "Alpha"), 5, 0));

        let store = InMemoryMatchStore::new(matches);
        let tables = generate_leaderboards(&store, &[SeasonId(2), SEASON]).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].season_id, SeasonId(2));
        assert_eq!(tables[0].leaderboard.len(), 2);
        assert_eq!(tables[0].leaderboard[0].team_name, "Beta");
        assert_eq!(tables[0].leaderboard[0].played, 1);

        assert_eq!(tables[1].season_id, SEASON);
        assert_eq!(tables[1].leaderboard[0].team_name, "Alpha");
        assert_eq!(tables[1].leaderboard.len(), 4);
    }

    #[test]
    fn test_generate_leaderboards_validates_all_ids_first() {
        let store = ProbeStore::new(scenario_matches());
        let result = generate_leaderboards(&store, &[SEASON, SeasonId(0)]);

        assert!(matches!(result, Err(StandingsError::InvalidSeasonId { .. })));
        assert_eq!(store.calls.get(), 0);
    }

    #[test]
    fn test_generate_leaderboards_has_no_partial_result_on_store_failure() {
        let store = ProbeStore::failing();
        assert!(generate_leaderboards(&store, &[SEASON, SeasonId(2)]).is_err());
        assert_eq!(store.calls.get(), 1);
    }

    #[test]
    fn test_leaderboard_json_field_names() {
        let table = compute_leaderboard(&scenario_matches());
        let json = serde_json::to_value(&table[0]).unwrap();

        let mut keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "drawn",
                "goalDifference",
                "goalsAgainst",
                "goalsFor",
                "lost",
                "played",
                "points",
                "teamId",
                "teamName",
                "won"
            ]
        );
        assert_eq!(json["teamId"], 1);
        assert_eq!(json["goalDifference"], 2);
    }

    #[test]
    fn test_match_outcome_points() {
        assert_eq!(MatchOutcome::from_scores(2, 1), MatchOutcome::HomeWin);
        assert_eq!(MatchOutcome::from_scores(0, 1), MatchOutcome::AwayWin);
        assert_eq!(MatchOutcome::from_scores(3, 3), MatchOutcome::Draw);

        assert_eq!(MatchOutcome::HomeWin.points(), (3, 0));
        assert_eq!(MatchOutcome::AwayWin.points(), (0, 3));
        assert_eq!(MatchOutcome::Draw.points(), (1, 1));
    }
}
