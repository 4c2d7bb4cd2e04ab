//! Remote fetchers for search results and movie details.
//!
//! Each fetcher owns one `LatestSlot`: a new query or selection supersedes
//! the request before it, and superseded requests report `None` instead of
//! touching state.

mod detail;
mod latest;
mod search;

pub use detail::{DetailFetcher, DetailState, DETAIL_ERROR};
pub use search::{SearchFetcher, SearchState, FETCH_ERROR, NOT_FOUND_ERROR};
