use serde::{Deserialize, Serialize};

use crate::omdb::MovieDetail;

pub const MAX_USER_RATING: u8 = 10;

/// A movie the user has rated and added to their list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub imdb_rating: f64,
    /// Minutes.
    pub runtime: u32,
    pub user_rating: u8,
    /// How many times the rating was changed before the entry was added.
    pub count_rating_decisions: u32,
}

impl WatchedEntry {
    /// Build an entry from a loaded detail record, converting OMDb's text
    /// fields to numbers. Fields OMDb reports as "N/A" become 0.
    pub fn from_detail(detail: &MovieDetail, user_rating: u8, count_rating_decisions: u32) -> Self {
        Self {
            imdb_id: detail.imdb_id.clone(),
            title: detail.title.clone(),
            year: detail.year.clone(),
            poster: detail.poster.clone(),
            imdb_rating: parse_rating(&detail.imdb_rating),
            runtime: parse_runtime_minutes(&detail.runtime),
            user_rating,
            count_rating_decisions,
        }
    }
}

/// "148 min" -> 148. Only the leading token is considered.
pub fn parse_runtime_minutes(runtime: &str) -> u32 {
    runtime
        .split_whitespace()
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(0)
}

pub fn parse_rating(rating: &str) -> f64 {
    rating
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite())
        .unwrap_or(0.0)
}

/// Aggregates shown above the watched list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

/// Arithmetic mean; an empty input averages to zero.
pub fn average(values: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runtime_minutes() {
        assert_eq!(parse_runtime_minutes("148 min"), 148);
        assert_eq!(parse_runtime_minutes("90"), 90);
        assert_eq!(parse_runtime_minutes("N/A"), 0);
        assert_eq!(parse_runtime_minutes(""), 0);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("8.7"), 8.7);
        assert_eq!(parse_rating(" 7 "), 7.0);
        assert_eq!(parse_rating("N/A"), 0.0);
        assert_eq!(parse_rating("NaN"), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(Vec::<f64>::new()), 0.0);
        assert_eq!(average([8.0]), 8.0);
        assert_eq!(average([7.0, 8.0, 9.0]), 8.0);
    }

    #[test]
    fn test_from_detail_converts_numbers() {
        let detail = MovieDetail {
            imdb_id: "tt1375666".to_string(),
            title: "Inception".to_string(),
            year: "2010".to_string(),
            poster: "https://example.com/inception.jpg".to_string(),
            runtime: "148 min".to_string(),
            imdb_rating: "8.8".to_string(),
            plot: String::new(),
            released: "16 Jul 2010".to_string(),
            actors: String::new(),
            director: "Christopher Nolan".to_string(),
            genre: "Action, Sci-Fi".to_string(),
        };
        let entry = WatchedEntry::from_detail(&detail, 9, 2);
        assert_eq!(entry.imdb_id, "tt1375666");
        assert_eq!(entry.runtime, 148);
        assert_eq!(entry.imdb_rating, 8.8);
        assert_eq!(entry.user_rating, 9);
        assert_eq!(entry.count_rating_decisions, 2);
    }
}
