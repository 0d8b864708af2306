//! Order standings records into the final table

use super::models::{Leaderboard, LeaderboardEntry};
use std::cmp::Ordering;

/// Total order over entries, best team first.
///
/// Points, goal difference and goals scored are compared descending, then
/// team name ascending (byte-wise, case-sensitive). Team id ascending settles
/// the remaining case of two teams sharing a name.
pub fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team_name.cmp(&b.team_name))
        .then_with(|| a.team_id.cmp(&b.team_id))
}

/// Sort entries into a leaderboard.
pub fn rank<I>(entries: I) -> Leaderboard
where
    I: IntoIterator<Item = LeaderboardEntry>,
{
    let mut leaderboard: Leaderboard = entries.into_iter().collect();
    leaderboard.sort_unstable_by(compare_entries);
    leaderboard
}
