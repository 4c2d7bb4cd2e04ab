//! Client for the OMDb movie database.
//!
//! Two endpoints are used, both a GET against the same base URL:
//! `s=<query>` for title search and `i=<imdb id>` for full details.

mod client;
mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use client::{parse_detail_body, parse_search_body, OmdbClient, SharedConfig};
pub use types::{MovieDetail, MovieSummary};

#[derive(Debug, Error)]
pub enum OmdbError {
    #[error("No OMDb API key configured")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("OMDb returned HTTP {status_code}: {message}")]
    Status { status_code: u16, message: String },

    #[error("Failed to decode OMDb response: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed response with `"Response": "False"`.
    #[error("{0}")]
    NotFound(String),
}

/// Anything that can answer search and detail lookups.
///
/// The fetch controllers depend on this rather than on [`OmdbClient`] so they
/// can be driven by in-memory sources.
#[async_trait]
pub trait MovieSource: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, OmdbError>;

    async fn details(&self, imdb_id: &str) -> Result<MovieDetail, OmdbError>;
}
