#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_trait::async_trait;
use tokio::sync::Notify;

use usepopcorn_tauri::config::{AppConfig, DEFAULT_BASE_URL};
use usepopcorn_tauri::omdb::{MovieDetail, MovieSource, MovieSummary, OmdbError};
use usepopcorn_tauri::watched::TextStorage;
use usepopcorn_tauri::AppState;

/// In-memory movie source. Queries listed in `blocked` wait on the shared
/// `Notify` before answering.
#[derive(Default)]
pub struct FakeSource {
    pub results: HashMap<String, Vec<MovieSummary>>,
    pub details: HashMap<String, MovieDetail>,
    pub blocked: Vec<String>,
    pub gate: Arc<Notify>,
    pub fail_transport: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MovieSource for FakeSource {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        self.calls.lock().unwrap().push(format!("s={}", query));
        if self.blocked.iter().any(|q| q == query) {
            self.gate.notified().await;
        }
        if self.fail_transport {
            return Err(OmdbError::Status {
                status_code: 503,
                message: "unavailable".to_string(),
            });
        }
        self.results
            .get(query)
            .cloned()
            .ok_or_else(|| OmdbError::NotFound("Movie not found!".to_string()))
    }

    async fn details(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        self.calls.lock().unwrap().push(format!("i={}", imdb_id));
        if self.blocked.iter().any(|id| id == imdb_id) {
            self.gate.notified().await;
        }
        self.details
            .get(imdb_id)
            .cloned()
            .ok_or_else(|| OmdbError::NotFound("Incorrect IMDb ID.".to_string()))
    }
}

pub fn summary(id: &str, title: &str, year: &str) -> MovieSummary {
    MovieSummary {
        imdb_id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        poster: format!("https://img.example.com/{}.jpg", id),
    }
}

pub fn interstellar() -> MovieDetail {
    MovieDetail {
        imdb_id: "tt0816692".to_string(),
        title: "Interstellar".to_string(),
        year: "2014".to_string(),
        poster: "https://img.example.com/tt0816692.jpg".to_string(),
        runtime: "169 min".to_string(),
        imdb_rating: "8.7".to_string(),
        plot: "A team of explorers travel through a wormhole in space.".to_string(),
        released: "07 Nov 2014".to_string(),
        actors: "Matthew McConaughey, Anne Hathaway".to_string(),
        director: "Christopher Nolan".to_string(),
        genre: "Adventure, Drama, Sci-Fi".to_string(),
    }
}

pub fn interstellar_source() -> FakeSource {
    let mut source = FakeSource::default();
    source.results.insert(
        "interstellar".to_string(),
        vec![
            summary("tt0816692", "Interstellar", "2014"),
            summary("tt4415360", "Interstellar Wars", "2016"),
        ],
    );
    source.details.insert("tt0816692".to_string(), interstellar());
    source
}

pub fn app_state(source: Arc<FakeSource>, storage: Box<dyn TextStorage>) -> AppState {
    let config = AppConfig::new(Some("test-key".to_string()), DEFAULT_BASE_URL).unwrap();
    AppState::new(Arc::new(RwLock::new(config)), source, storage).unwrap()
}
