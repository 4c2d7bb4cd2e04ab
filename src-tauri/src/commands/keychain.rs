use tauri::State;
use tracing::{info, warn};

use crate::config::keychain_entry;
use crate::state::AppState;

/// Save the OMDb API key to the keychain and start using it immediately.
#[tauri::command]
pub fn set_api_key(state: State<'_, AppState>, key: &str) -> Result<(), String> {
    info!("Setting OMDb API key");
    let entry = keychain_entry()?;
    entry.set_password(key).map_err(|e| {
        warn!("Failed to store OMDb API key: {}", e);
        e.to_string()
    })?;
    state.set_api_key(Some(key.to_string()));
    Ok(())
}

/// Whether a key is stored in the keychain.
#[tauri::command]
pub fn get_api_key() -> Result<bool, String> {
    let entry = keychain_entry()?;
    match entry.get_password() {
        Ok(_) => Ok(true),
        Err(keyring::Error::NoEntry) => {
            info!("No OMDb API key in keychain");
            Ok(false)
        }
        Err(e) => {
            warn!("Failed to read OMDb API key: {}", e);
            Err(e.to_string())
        }
    }
}

#[tauri::command]
pub fn delete_api_key(state: State<'_, AppState>) -> Result<(), String> {
    info!("Deleting OMDb API key");
    let entry = keychain_entry()?;
    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => {}
        Err(e) => {
            warn!("Failed to delete OMDb API key: {}", e);
            return Err(e.to_string());
        }
    }
    state.set_api_key(None);
    Ok(())
}
