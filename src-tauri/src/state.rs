use std::sync::{Arc, Mutex, RwLock};

use tracing::info;

use crate::config::AppConfig;
use crate::error::PopcornError;
use crate::fetch::{DetailFetcher, DetailState, SearchFetcher, SearchState};
use crate::omdb::{MovieSource, OmdbClient, SharedConfig};
use crate::watched::{TextStorage, WatchedEntry, WatchedList, WatchedSummary, MAX_USER_RATING};

/// Everything the commands operate on, managed by Tauri for the lifetime of
/// the app.
pub struct AppState {
    pub config: SharedConfig,
    pub search: SearchFetcher,
    pub detail: DetailFetcher,
    pub watched: Mutex<WatchedList>,
}

impl AppState {
    pub fn new(
        config: SharedConfig,
        source: Arc<dyn MovieSource>,
        storage: Box<dyn TextStorage>,
    ) -> Result<Self, PopcornError> {
        let min_query_len = config.read().unwrap().min_query_len;
        Ok(Self {
            config,
            search: SearchFetcher::new(Arc::clone(&source), min_query_len),
            detail: DetailFetcher::new(source),
            watched: Mutex::new(WatchedList::load(storage)?),
        })
    }

    /// State wired to the real OMDb client.
    pub fn with_omdb(config: AppConfig, storage: Box<dyn TextStorage>) -> Result<Self, PopcornError> {
        let config: SharedConfig = Arc::new(RwLock::new(config));
        let client = OmdbClient::new(Arc::clone(&config))?;
        Self::new(config, Arc::new(client), storage)
    }

    /// Run a search. Starting a request closes the detail view so it is never
    /// shown against a different result list.
    pub async fn search_movies(&self, query: &str) -> Option<SearchState> {
        self.search
            .search(query, || {
                self.detail.close();
            })
            .await
    }

    pub async fn select_movie(&self, imdb_id: &str) -> Option<DetailState> {
        self.detail.select(imdb_id).await
    }

    pub fn watched_entries(&self) -> Vec<WatchedEntry> {
        self.watched.lock().unwrap().entries().to_vec()
    }

    pub fn watched_summary(&self) -> WatchedSummary {
        self.watched.lock().unwrap().summary()
    }

    /// Add the movie currently shown in the detail view with the user's
    /// rating, then close the detail view.
    pub fn add_watched(
        &self,
        imdb_id: &str,
        user_rating: u8,
        count_rating_decisions: u32,
    ) -> Result<Vec<WatchedEntry>, PopcornError> {
        if !(1..=MAX_USER_RATING).contains(&user_rating) {
            return Err(PopcornError::InvalidRating(user_rating));
        }

        let detail = self
            .detail
            .state()
            .movie
            .filter(|m| m.imdb_id == imdb_id)
            .ok_or_else(|| PopcornError::DetailsNotLoaded(imdb_id.to_string()))?;

        let entry = WatchedEntry::from_detail(&detail, user_rating, count_rating_decisions);
        let entries = {
            let mut watched = self.watched.lock().unwrap();
            watched.add(entry)?;
            watched.entries().to_vec()
        };

        self.detail.close();
        Ok(entries)
    }

    pub fn delete_watched(&self, imdb_id: &str) -> Result<Vec<WatchedEntry>, PopcornError> {
        let mut watched = self.watched.lock().unwrap();
        watched.delete(imdb_id)?;
        Ok(watched.entries().to_vec())
    }

    pub fn set_api_key(&self, key: Option<String>) {
        let mut config = self.config.write().unwrap();
        config.api_key = key.filter(|k| !k.trim().is_empty());
        info!("OMDb API key {}", if config.has_api_key() { "updated" } else { "cleared" });
    }
}
