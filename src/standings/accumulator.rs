//! Fold scored matches into one standings record per team

use super::models::{LeaderboardEntry, MatchOutcome, ScoredMatch, TeamRef};
use crate::TeamId;
use std::collections::BTreeMap;

/// Per-team standings keyed by team id.
pub type StandingsMap = BTreeMap<TeamId, LeaderboardEntry>;

fn entry_for<'a>(standings: &'a mut StandingsMap, team: &TeamRef) -> &'a mut LeaderboardEntry {
    standings
        .entry(team.id)
        .or_insert_with(|| LeaderboardEntry::new(team.id, team.name.as_str()))
}

/// One side's share of a match outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SideResult {
    Win,
    Draw,
    Loss,
}

fn side_results(outcome: MatchOutcome) -> (SideResult, SideResult) {
    match outcome {
        MatchOutcome::HomeWin => (SideResult::Win, SideResult::Loss),
        MatchOutcome::AwayWin => (SideResult::Loss, SideResult::Win),
        MatchOutcome::Draw => (SideResult::Draw, SideResult::Draw),
    }
}

impl LeaderboardEntry {
    /// Record one match from this team's point of view.
    fn record(&mut self, scored: u32, conceded: u32, result: SideResult, points: u32) {
        self.played += 1;
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        self.points += points;

        match result {
            SideResult::Win => self.won += 1,
            SideResult::Draw => self.drawn += 1,
            SideResult::Loss => self.lost += 1,
        }
    }
}

/// Add one match to the running standings.
///
/// Counters and points both come from the match's single outcome.
pub fn apply_match(standings: &mut StandingsMap, scored: &ScoredMatch) {
    let outcome = scored.outcome();
    let (home_points, away_points) = outcome.points();
    let (home_result, away_result) = side_results(outcome);

    entry_for(standings, &scored.home).record(
        scored.home_score,
        scored.away_score,
        home_result,
        home_points,
    );
    entry_for(standings, &scored.away).record(
        scored.away_score,
        scored.home_score,
        away_result,
        away_points,
    );
}

/// Build the standings for a set of scored matches.
///
/// Totals do not depend on match order. A team's display name is taken from
/// the first match it appears in.
pub fn accumulate(matches: &[ScoredMatch]) -> StandingsMap {
    let mut standings = StandingsMap::new();
    for scored in matches {
        apply_match(&mut standings, scored);
    }

    for entry in standings.values_mut() {
        // Goal totals are sums of u32 scores; they stay far below i64::MAX.
        entry.goal_difference = entry.goals_for as i64 - entry.goals_against as i64;
    }

    standings
}
