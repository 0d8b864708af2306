//! Client for the remote league API
//!
//! Only the completed-matches read endpoint is used; it feeds the local
//! match store.

pub mod http;
pub mod types;

pub use http::LeagueApiClient;
pub use types::{to_storage_rows, ApiMatch, ApiTeam};
