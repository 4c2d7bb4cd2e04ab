use std::sync::Arc;

use serde::Serialize;
use tracing::warn;

use super::latest::LatestSlot;
use crate::omdb::{MovieDetail, MovieSource};

pub const DETAIL_ERROR: &str = "Could not load movie details";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailState {
    pub selected_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub movie: Option<MovieDetail>,
}

pub struct DetailFetcher {
    source: Arc<dyn MovieSource>,
    slot: LatestSlot<DetailState>,
}

impl DetailFetcher {
    pub fn new(source: Arc<dyn MovieSource>) -> Self {
        Self {
            source,
            slot: LatestSlot::default(),
        }
    }

    pub fn state(&self) -> DetailState {
        self.slot.snapshot()
    }

    /// Load details for `imdb_id`, replacing whatever was shown before.
    /// Returns `None` if another selection (or a close) overtook this one.
    pub async fn select(&self, imdb_id: &str) -> Option<DetailState> {
        let id = imdb_id.to_string();
        let ticket = self.slot.supersede(|state| {
            *state = DetailState {
                selected_id: Some(id.clone()),
                is_loading: true,
                ..DetailState::default()
            }
        });

        let source = Arc::clone(&self.source);
        let result = self
            .slot
            .run(ticket, async move { source.details(&id).await })
            .await?;

        self.slot.complete(ticket, |state| {
            state.is_loading = false;
            match result {
                Ok(movie) => state.movie = Some(movie),
                Err(e) => {
                    warn!("Failed to load details for {}: {}", imdb_id, e);
                    state.error = Some(DETAIL_ERROR.to_string());
                }
            }
        })
    }

    /// Close the detail view, cancelling any load in flight.
    pub fn close(&self) -> DetailState {
        self.slot.supersede(|state| *state = DetailState::default());
        self.slot.snapshot()
    }
}
