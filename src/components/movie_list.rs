use leptos::prelude::*;

use crate::commands::MovieSummary;

#[component]
pub fn MovieList(
    movies: Vec<MovieSummary>,
    /// Invoked with the IMDb id of the clicked movie.
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <ul class="list list-movies">
            {movies
                .into_iter()
                .map(|movie| {
                    let id = movie.imdb_id.clone();
                    let alt = format!("{} poster", movie.title);
                    view! {
                        <li on:click=move |_| on_select.run(id.clone())>
                            <img src=movie.poster alt=alt />
                            <h3>{movie.title}</h3>
                            <div>
                                <p>
                                    <span>"\u{1F5D3}"</span>
                                    <span>{movie.year}</span>
                                </p>
                            </div>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
}
