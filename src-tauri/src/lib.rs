mod commands;
pub mod config;
mod error;
pub mod fetch;
pub mod omdb;
pub mod state;
pub mod watched;

pub use config::AppConfig;
pub use error::PopcornError;
pub use state::AppState;

use tracing::warn;

/// Store file holding the persisted watched list.
const WATCHED_STORE: &str = "watched.json";

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .plugin(tauri_plugin_store::Builder::new().build())
        .invoke_handler(tauri::generate_handler![
            commands::keychain::set_api_key,
            commands::keychain::get_api_key,
            commands::keychain::delete_api_key,
            commands::config::get_config_status,
            commands::movies::search_movies,
            commands::movies::get_movie_details,
            commands::movies::close_movie_details,
            commands::watched::list_watched,
            commands::watched::add_watched,
            commands::watched::delete_watched,
            commands::watched::get_watched_summary,
        ])
        .setup(|app| {
            use tauri::Manager;
            use tauri_plugin_store::StoreExt;

            let config = AppConfig::load()?;

            let storage: Box<dyn watched::TextStorage> = match app.store(WATCHED_STORE) {
                Ok(store) => Box::new(watched::PluginStorage::new(store)),
                Err(e) => {
                    warn!(
                        "Failed to open {}, watched list will not be saved: {}",
                        WATCHED_STORE, e
                    );
                    Box::new(watched::MemoryStorage::new())
                }
            };

            app.manage(AppState::with_omdb(config, storage)?);
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
