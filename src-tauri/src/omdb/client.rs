use std::sync::{Arc, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use super::types::{MovieDetail, MovieSummary, RawEnvelope, RawSearchResults};
use super::{MovieSource, OmdbError};
use crate::config::AppConfig;

/// Configuration shared between the client and the commands that update it
/// (e.g. saving a new API key from the settings page).
pub type SharedConfig = Arc<RwLock<AppConfig>>;

const USER_AGENT: &str = "usePopcorn/1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OmdbClient {
    client: Client,
    config: SharedConfig,
}

impl OmdbClient {
    /// Build a client with a 30 second request timeout.
    pub fn new(config: SharedConfig) -> Result<Self, OmdbError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    async fn get(&self, param: (&str, &str)) -> Result<String, OmdbError> {
        let (base_url, api_key) = {
            let config = self.config.read().unwrap();
            (config.base_url.clone(), config.api_key.clone())
        };
        let api_key = api_key.ok_or(OmdbError::MissingApiKey)?;

        debug!("OMDb request {}={}", param.0, param.1);
        let response = self
            .client
            .get(base_url)
            .query(&[("apikey", api_key.as_str()), param])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!("OMDb returned {} for {}={}", status, param.0, param.1);
            return Err(OmdbError::Status {
                status_code: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl MovieSource for OmdbClient {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError> {
        let body = self.get(("s", query)).await?;
        let movies = parse_search_body(&body)?;
        info!("Search '{}' returned {} movies", query, movies.len());
        Ok(movies)
    }

    async fn details(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError> {
        let body = self.get(("i", imdb_id)).await?;
        let movie = parse_detail_body(&body)?;
        info!("Loaded details for {} ({})", movie.title, imdb_id);
        Ok(movie)
    }
}

fn check_envelope(body: &str) -> Result<(), OmdbError> {
    let envelope: RawEnvelope = serde_json::from_str(body)?;
    if envelope.is_success() {
        Ok(())
    } else {
        Err(OmdbError::NotFound(
            envelope
                .error
                .unwrap_or_else(|| "Movie not found!".to_string()),
        ))
    }
}

/// Decode a search response body.
///
/// `"Response": "False"` becomes [`OmdbError::NotFound`] carrying OMDb's message.
pub fn parse_search_body(body: &str) -> Result<Vec<MovieSummary>, OmdbError> {
    check_envelope(body)?;
    let results: RawSearchResults = serde_json::from_str(body)?;
    Ok(results.search)
}

/// Decode a detail response body.
pub fn parse_detail_body(body: &str) -> Result<MovieDetail, OmdbError> {
    check_envelope(body)?;
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_BODY: &str = r#"{
        "Search": [
            {"Title": "Interstellar", "Year": "2014", "imdbID": "tt0816692", "Type": "movie", "Poster": "https://m.media-amazon.com/images/interstellar.jpg"},
            {"Title": "Interstellar Wars", "Year": "2016", "imdbID": "tt5083736", "Type": "movie", "Poster": "N/A"}
        ],
        "totalResults": "2",
        "Response": "True"
    }"#;

    const DETAIL_BODY: &str = r#"{
        "Title": "Interstellar", "Year": "2014", "Rated": "PG-13", "Released": "07 Nov 2014",
        "Runtime": "169 min", "Genre": "Adventure, Drama, Sci-Fi", "Director": "Christopher Nolan",
        "Actors": "Matthew McConaughey, Anne Hathaway, Jessica Chastain",
        "Plot": "A team of explorers travel through a wormhole in space.",
        "Poster": "https://m.media-amazon.com/images/interstellar.jpg",
        "imdbRating": "8.7", "imdbID": "tt0816692", "Type": "movie", "Response": "True"
    }"#;

    #[test]
    fn test_parse_search_body() {
        let movies = parse_search_body(SEARCH_BODY).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].imdb_id, "tt0816692");
        assert_eq!(movies[0].title, "Interstellar");
        assert_eq!(movies[0].year, "2014");
        assert_eq!(movies[1].poster, "N/A");
    }

    #[test]
    fn test_parse_search_body_not_found() {
        let body = r#"{"Response":"False","Error":"Movie not found!"}"#;
        match parse_search_body(body) {
            Err(OmdbError::NotFound(msg)) => assert_eq!(msg, "Movie not found!"),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search_body_rejects_garbage() {
        assert!(matches!(
            parse_search_body("<html>502</html>"),
            Err(OmdbError::Json(_))
        ));
    }

    #[test]
    fn test_parse_detail_body() {
        let movie = parse_detail_body(DETAIL_BODY).unwrap();
        assert_eq!(movie.imdb_id, "tt0816692");
        assert_eq!(movie.runtime, "169 min");
        assert_eq!(movie.imdb_rating, "8.7");
        assert_eq!(movie.director, "Christopher Nolan");
        assert_eq!(movie.released, "07 Nov 2014");
    }

    #[test]
    fn test_parse_detail_body_incorrect_id() {
        let body = r#"{"Response":"False","Error":"Incorrect IMDb ID."}"#;
        assert!(matches!(
            parse_detail_body(body),
            Err(OmdbError::NotFound(msg)) if msg == "Incorrect IMDb ID."
        ));
    }

    #[test]
    fn test_summary_serializes_snake_case() {
        let movies = parse_search_body(SEARCH_BODY).unwrap();
        let json = serde_json::to_value(&movies[0]).unwrap();
        assert_eq!(json["imdb_id"], "tt0816692");
        assert_eq!(json["title"], "Interstellar");
        assert!(json.get("imdbID").is_none());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_request() {
        let config = AppConfig::new(None, crate::config::DEFAULT_BASE_URL).unwrap();
        let client = OmdbClient::new(Arc::new(RwLock::new(config))).unwrap();
        assert!(matches!(
            client.search("interstellar").await,
            Err(OmdbError::MissingApiKey)
        ));
    }
}
