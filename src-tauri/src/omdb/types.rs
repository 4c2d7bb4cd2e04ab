use serde::{Deserialize, Serialize};

/// One row of a title search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(rename(deserialize = "imdbID"))]
    pub imdb_id: String,
    #[serde(rename(deserialize = "Title"))]
    pub title: String,
    #[serde(rename(deserialize = "Year"))]
    pub year: String,
    #[serde(rename(deserialize = "Poster"), default)]
    pub poster: String,
}

/// Full record for a single title.
///
/// OMDb reports every field as text, including `runtime` ("148 min") and
/// `imdb_rating` ("8.8"). They are kept verbatim here and only converted to
/// numbers when a watched entry is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    #[serde(rename(deserialize = "imdbID"))]
    pub imdb_id: String,
    #[serde(rename(deserialize = "Title"))]
    pub title: String,
    #[serde(rename(deserialize = "Year"), default)]
    pub year: String,
    #[serde(rename(deserialize = "Poster"), default)]
    pub poster: String,
    #[serde(rename(deserialize = "Runtime"), default)]
    pub runtime: String,
    #[serde(rename(deserialize = "imdbRating"), default)]
    pub imdb_rating: String,
    #[serde(rename(deserialize = "Plot"), default)]
    pub plot: String,
    #[serde(rename(deserialize = "Released"), default)]
    pub released: String,
    #[serde(rename(deserialize = "Actors"), default)]
    pub actors: String,
    #[serde(rename(deserialize = "Director"), default)]
    pub director: String,
    #[serde(rename(deserialize = "Genre"), default)]
    pub genre: String,
}

/// Envelope shared by both endpoints. `Response` is the string "True" or "False".
#[derive(Debug, Deserialize)]
pub(crate) struct RawEnvelope {
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl RawEnvelope {
    pub fn is_success(&self) -> bool {
        self.response.eq_ignore_ascii_case("true")
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResults {
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieSummary>,
}
