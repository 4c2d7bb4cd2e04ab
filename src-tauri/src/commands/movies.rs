//! Tauri commands for searching OMDb and loading movie details.
//!
//! Both fetches return `None` when the request was overtaken by a newer one;
//! the frontend drops those responses.

use tauri::State;
use tracing::info;

use crate::fetch::{DetailState, SearchState};
use crate::state::AppState;

#[tauri::command]
pub async fn search_movies(
    state: State<'_, AppState>,
    query: String,
) -> Result<Option<SearchState>, String> {
    let result = state.search_movies(&query).await;
    if result.is_none() {
        info!("Search '{}' superseded", query);
    }
    Ok(result)
}

#[tauri::command]
pub async fn get_movie_details(
    state: State<'_, AppState>,
    imdb_id: String,
) -> Result<Option<DetailState>, String> {
    Ok(state.select_movie(&imdb_id).await)
}

#[tauri::command]
pub fn close_movie_details(state: State<'_, AppState>) -> DetailState {
    state.detail.close()
}
