//! Type-safe wrappers and enums for league reference data.

pub mod ids;
pub mod status;

pub use ids::{MatchId, SeasonId, TeamId};
pub use status::MatchStatus;
