use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::home::HomePage;
use crate::pages::settings::SettingsPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-layout">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/settings") view=SettingsPage />
                </Routes>
            </div>
        </Router>
    }
}
