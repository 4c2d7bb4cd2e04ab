use tauri::State;

use crate::state::AppState;
use crate::watched::{WatchedEntry, WatchedSummary};

#[tauri::command]
pub fn list_watched(state: State<'_, AppState>) -> Vec<WatchedEntry> {
    state.watched_entries()
}

/// Add the movie open in the detail view. Returns the updated list.
#[tauri::command]
pub fn add_watched(
    state: State<'_, AppState>,
    imdb_id: String,
    user_rating: u8,
    count_rating_decisions: u32,
) -> Result<Vec<WatchedEntry>, String> {
    Ok(state.add_watched(&imdb_id, user_rating, count_rating_decisions)?)
}

#[tauri::command]
pub fn delete_watched(
    state: State<'_, AppState>,
    imdb_id: String,
) -> Result<Vec<WatchedEntry>, String> {
    Ok(state.delete_watched(&imdb_id)?)
}

#[tauri::command]
pub fn get_watched_summary(state: State<'_, AppState>) -> WatchedSummary {
    state.watched_summary()
}
