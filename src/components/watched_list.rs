use leptos::prelude::*;

use crate::commands::WatchedEntry;

#[component]
pub fn WatchedList(
    watched: Vec<WatchedEntry>,
    /// Invoked with the IMDb id of the entry to remove.
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="list">
            {watched
                .into_iter()
                .map(|movie| {
                    let id = movie.imdb_id.clone();
                    let alt = format!("{} poster", movie.title);
                    view! {
                        <li>
                            <img src=movie.poster alt=alt />
                            <h3>{movie.title}</h3>
                            <div>
                                <p>
                                    <span>"\u{2B50}\u{FE0F}"</span>
                                    <span>{movie.imdb_rating.to_string()}</span>
                                </p>
                                <p>
                                    <span>"\u{1F31F}"</span>
                                    <span>{movie.user_rating.to_string()}</span>
                                </p>
                                <p>
                                    <span>"\u{23F3}"</span>
                                    <span>{format!("{} min", movie.runtime)}</span>
                                </p>
                                <button class="btn-delete" on:click=move |_| on_delete.run(id.clone())>
                                    "X"
                                </button>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
