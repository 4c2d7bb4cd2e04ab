use leptos::prelude::*;

use crate::commands::WatchedSummary;

#[component]
pub fn WatchedSummaryPanel(#[prop(into)] summary: Signal<WatchedSummary>) -> impl IntoView {
    view! {
        <div class="summary">
            <h2>"Movies you watched"</h2>
            <div>
                <p>
                    <span>"#\u{FE0F}\u{20E3}"</span>
                    <span>{move || format!("{} movies", summary.get().count)}</span>
                </p>
                <p>
                    <span>"\u{2B50}\u{FE0F}"</span>
                    <span>{move || format!("{:.2}", summary.get().avg_imdb_rating)}</span>
                </p>
                <p>
                    <span>"\u{1F31F}"</span>
                    <span>{move || format!("{:.2}", summary.get().avg_user_rating)}</span>
                </p>
                <p>
                    <span>"\u{23F3}"</span>
                    <span>{move || format!("{:.0} min", summary.get().avg_runtime)}</span>
                </p>
            </div>
        </div>
    }
}
