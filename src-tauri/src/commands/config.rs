use tauri::State;

use crate::config::ConfigStatus;
use crate::state::AppState;

/// What the settings page and search box need to know about the running
/// configuration.
#[tauri::command]
pub fn get_config_status(state: State<'_, AppState>) -> ConfigStatus {
    state.config.read().unwrap().status()
}
