use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::latest::LatestSlot;
use crate::omdb::{MovieSource, MovieSummary, OmdbError};

pub const NOT_FOUND_ERROR: &str = "Movie not found";
pub const FETCH_ERROR: &str = "Something went wrong with fetching movies";

/// What the result list should show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub movies: Vec<MovieSummary>,
}

pub struct SearchFetcher {
    source: Arc<dyn MovieSource>,
    slot: LatestSlot<SearchState>,
    min_query_len: usize,
}

impl SearchFetcher {
    pub fn new(source: Arc<dyn MovieSource>, min_query_len: usize) -> Self {
        Self {
            source,
            slot: LatestSlot::default(),
            min_query_len,
        }
    }

    pub fn state(&self) -> SearchState {
        self.slot.snapshot()
    }

    /// Search for `query`, superseding any search still in flight.
    ///
    /// Queries shorter than the minimum length clear the results without a
    /// request. Otherwise `on_start` runs before the request is dispatched.
    /// Returns `None` if a later search overtook this one.
    pub async fn search(&self, query: &str, on_start: impl FnOnce()) -> Option<SearchState> {
        let query = query.trim().to_string();

        if query.chars().count() < self.min_query_len {
            self.slot.supersede(|state| {
                *state = SearchState {
                    query: query.clone(),
                    ..SearchState::default()
                }
            });
            return Some(self.slot.snapshot());
        }

        on_start();
        let ticket = self.slot.supersede(|state| {
            state.query = query.clone();
            state.is_loading = true;
            state.error = None;
        });

        let source = Arc::clone(&self.source);
        let request_query = query.clone();
        let result = self
            .slot
            .run(ticket, async move { source.search(&request_query).await })
            .await?;

        self.slot.complete(ticket, |state| {
            state.is_loading = false;
            match result {
                Ok(movies) => {
                    state.error = None;
                    state.movies = movies;
                }
                Err(OmdbError::NotFound(message)) => {
                    info!("No results for '{}': {}", query, message);
                    state.error = Some(NOT_FOUND_ERROR.to_string());
                    state.movies.clear();
                }
                Err(e) => {
                    warn!("Search for '{}' failed: {}", query, e);
                    state.error = Some(FETCH_ERROR.to_string());
                    state.movies.clear();
                }
            }
        })
    }
}
