use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"], catch)]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a backend command and decode its result.
async fn call<A: Serialize, T: DeserializeOwned>(cmd: &str, args: &A) -> Result<T, String> {
    let args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;

    let result = invoke(cmd, args)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Unknown error".to_string()))?;

    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

// -- Types matching backend structs --

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieSummary {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MovieDetail {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub runtime: String,
    pub imdb_rating: String,
    pub plot: String,
    pub released: String,
    pub actors: String,
    pub director: String,
    pub genre: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchState {
    pub query: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DetailState {
    pub selected_id: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub movie: Option<MovieDetail>,
}

/// A movie on the watched list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WatchedEntry {
    pub imdb_id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub imdb_rating: f64,
    pub runtime: u32,
    pub user_rating: u8,
    pub count_rating_decisions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct WatchedSummary {
    pub count: usize,
    pub avg_imdb_rating: f64,
    pub avg_user_rating: f64,
    pub avg_runtime: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConfigStatus {
    pub api_key_set: bool,
    pub base_url: String,
    pub min_query_len: usize,
}

// -- Arg structs for serialization --

#[derive(Serialize)]
struct SearchMoviesArgs<'a> {
    query: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MovieIdArgs<'a> {
    imdb_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddWatchedArgs<'a> {
    imdb_id: &'a str,
    user_rating: u8,
    count_rating_decisions: u32,
}

#[derive(Serialize)]
struct SetApiKeyArgs<'a> {
    key: &'a str,
}

// -- Movie lookups --

/// Search by title. `Ok(None)` means a newer search replaced this one.
pub async fn search_movies(query: &str) -> Result<Option<SearchState>, String> {
    call("search_movies", &SearchMoviesArgs { query }).await
}

/// Load full details. `Ok(None)` means the selection changed meanwhile.
pub async fn get_movie_details(imdb_id: &str) -> Result<Option<DetailState>, String> {
    call("get_movie_details", &MovieIdArgs { imdb_id }).await
}

pub async fn close_movie_details() -> Result<DetailState, String> {
    call("close_movie_details", &json!({})).await
}

// -- Watched list --

pub async fn list_watched() -> Result<Vec<WatchedEntry>, String> {
    call("list_watched", &json!({})).await
}

pub async fn add_watched(
    imdb_id: &str,
    user_rating: u8,
    count_rating_decisions: u32,
) -> Result<Vec<WatchedEntry>, String> {
    call(
        "add_watched",
        &AddWatchedArgs {
            imdb_id,
            user_rating,
            count_rating_decisions,
        },
    )
    .await
}

pub async fn delete_watched(imdb_id: &str) -> Result<Vec<WatchedEntry>, String> {
    call("delete_watched", &MovieIdArgs { imdb_id }).await
}

pub async fn get_watched_summary() -> Result<WatchedSummary, String> {
    call("get_watched_summary", &json!({})).await
}

// -- Settings --

pub async fn set_api_key(key: &str) -> Result<(), String> {
    call("set_api_key", &SetApiKeyArgs { key }).await
}

/// Whether an API key is stored in the keychain.
pub async fn get_api_key() -> Result<bool, String> {
    call("get_api_key", &json!({})).await
}

pub async fn delete_api_key() -> Result<(), String> {
    call("delete_api_key", &json!({})).await
}

pub async fn get_config_status() -> Result<ConfigStatus, String> {
    call("get_config_status", &json!({})).await
}
