use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, ConfigStatus};
use crate::components::api_key_form::ApiKeyForm;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let (status, set_status) = signal::<Option<ConfigStatus>>(None);
    let (load_error, set_load_error) = signal::<Option<String>>(None);

    let refresh = Callback::new(move |_: ()| {
        spawn_local(async move {
            match commands::get_config_status().await {
                Ok(s) => {
                    set_status.set(Some(s));
                    set_load_error.set(None);
                }
                Err(e) => set_load_error.set(Some(format!("Failed to load settings: {}", e))),
            }
        });
    });

    // Load current configuration on mount
    Effect::new(move |_| refresh.run(()));

    view! {
        <div class="page settings-page">
            <a href="/" class="btn-back">"\u{2190} Back"</a>
            <h2>"Settings"</h2>

            <section class="settings-section">
                <h3>"Movie database"</h3>
                <p class="section-description">
                    "usePopcorn searches the OMDb API. The key is stored in your OS keychain; "
                    "setting OMDB_API_KEY in the environment overrides it at startup."
                </p>

                <ApiKeyForm on_change=refresh />

                {move || status.get().map(|s| view! {
                    <p class="status-text">
                        {format!(
                            "Endpoint: {} \u{2022} key {}",
                            s.base_url,
                            if s.api_key_set { "active" } else { "missing" },
                        )}
                    </p>
                })}
                {move || load_error.get().map(|e| view! {
                    <span class="status-text status-error">{e}</span>
                })}
            </section>
        </div>
    }
}
