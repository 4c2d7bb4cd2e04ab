//! Detail panel for the selected movie.
//!
//! Loads the full record on mount, lets the user rate the movie and add it
//! to the watched list, and keeps the document title in step with what is
//! shown. Escape closes the panel.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, DetailState, WatchedEntry};
use crate::components::star_rating::{count_decision, StarRating};
use crate::components::status::{ErrorMessage, Loader};
use crate::document::{set_document_title, title_for};
use crate::keys::use_key;

const DETAIL_ERROR: &str = "Could not load movie details";

/// Loads superseded while this panel still shows the same movie are re-issued
/// up to this many times in total.
const MAX_DETAIL_ATTEMPTS: u32 = 3;

#[derive(Debug, PartialEq)]
enum AfterSuperseded {
    Retry,
    GiveUp,
    Drop,
}

/// The backend answered `None` for a detail load: another select or a close
/// reached it after this one. Only a panel still showing the movie cares.
fn after_superseded(still_shown: bool, attempt: u32) -> AfterSuperseded {
    if !still_shown {
        AfterSuperseded::Drop
    } else if attempt < MAX_DETAIL_ATTEMPTS {
        AfterSuperseded::Retry
    } else {
        AfterSuperseded::GiveUp
    }
}

#[component]
pub fn MovieDetails(
    imdb_id: String,
    watched: ReadSignal<Vec<WatchedEntry>>,
    on_close: Callback<()>,
    /// Receives the updated watched list after a successful add.
    on_added: Callback<Vec<WatchedEntry>>,
) -> impl IntoView {
    let (detail, set_detail) = signal(DetailState {
        selected_id: Some(imdb_id.clone()),
        is_loading: true,
        ..DetailState::default()
    });
    let (user_rating, set_user_rating) = signal(0u8);
    let rating_decisions = StoredValue::new(0u32);
    let (add_error, set_add_error) = signal::<Option<String>>(None);

    {
        let id = imdb_id.clone();
        spawn_local(async move {
            let mut attempt = 1;
            loop {
                match commands::get_movie_details(&id).await {
                    Ok(Some(state)) => set_detail.set(state),
                    Ok(None) => {
                        let still_shown = detail
                            .try_with_untracked(|s| s.selected_id.as_deref() == Some(id.as_str()))
                            .unwrap_or(false);
                        match after_superseded(still_shown, attempt) {
                            AfterSuperseded::Retry => {
                                attempt += 1;
                                continue;
                            }
                            AfterSuperseded::GiveUp => set_detail.set(DetailState {
                                selected_id: Some(id.clone()),
                                error: Some(DETAIL_ERROR.to_string()),
                                ..DetailState::default()
                            }),
                            AfterSuperseded::Drop => {}
                        }
                    }
                    Err(e) => set_detail.set(DetailState {
                        selected_id: Some(id.clone()),
                        error: Some(e),
                        ..DetailState::default()
                    }),
                }
                break;
            }
        });
    }

    use_key("Escape", move || on_close.run(()));

    Effect::new(move |_| {
        if let Some(movie) = detail.get().movie {
            set_document_title(&title_for(Some(&movie.title)));
        }
    });
    on_cleanup(|| set_document_title(&title_for(None)));

    let id_for_lookup = imdb_id.clone();
    let watched_rating = Memo::new(move |_| {
        watched.with(|list| {
            list.iter()
                .find(|m| m.imdb_id == id_for_lookup)
                .map(|m| m.user_rating)
        })
    });

    let on_set_rating = Callback::new(move |rating: u8| {
        let previous = user_rating.get_untracked();
        rating_decisions.update_value(|n| *n = count_decision(previous, rating, *n));
        set_user_rating.set(rating);
    });

    let id_for_add = imdb_id.clone();
    let handle_add = Callback::new(move |_: ()| {
        let id = id_for_add.clone();
        let rating = user_rating.get();
        let decisions = rating_decisions.get_value();
        spawn_local(async move {
            match commands::add_watched(&id, rating, decisions).await {
                Ok(list) => {
                    on_added.run(list);
                    on_close.run(());
                }
                Err(e) => set_add_error.set(Some(e)),
            }
        });
    });

    view! {
        <div class="details">
            {move || {
                let state = detail.get();
                if state.is_loading {
                    return view! { <Loader /> }.into_any();
                }
                if let Some(err) = state.error {
                    return view! {
                        <button class="btn-back" on:click=move |_| on_close.run(())>"\u{2190}"</button>
                        <ErrorMessage message=err />
                    }
                    .into_any();
                }
                let Some(movie) = state.movie else {
                    return view! { <Loader /> }.into_any();
                };
                let alt = format!("Poster of {} movie", movie.title);

                view! {
                    <header>
                        <button class="btn-back" on:click=move |_| on_close.run(())>"\u{2190}"</button>
                        <img src=movie.poster alt=alt />
                        <div class="details-overview">
                            <h2>{movie.title}</h2>
                            <p>{format!("{} \u{2022} {}", movie.released, movie.runtime)}</p>
                            <p>{movie.genre}</p>
                            <p>
                                <span>"\u{2B50}"</span>
                                {format!("{} IMDb rating", movie.imdb_rating)}
                            </p>
                        </div>
                    </header>

                    <section>
                        <div class="rating">
                            {move || match watched_rating.get() {
                                Some(rating) => view! {
                                    <p>{format!("You rated this movie {} ", rating)} <span>"\u{2B50}"</span></p>
                                }
                                .into_any(),
                                None => view! {
                                    <StarRating max_rating=10 size=24 on_set_rating=on_set_rating />
                                    <Show when=move || { user_rating.get() > 0 }>
                                        <button class="btn-add" on:click=move |_| handle_add.run(())>
                                            "+ Add to list"
                                        </button>
                                    </Show>
                                    {move || add_error.get().map(|e| view! { <ErrorMessage message=e /> })}
                                }
                                .into_any(),
                            }}
                        </div>
                        <p><em>{movie.plot}</em></p>
                        <p>{format!("Starring {}", movie.actors)}</p>
                        <p>{format!("Directed by {}", movie.director)}</p>
                    </section>
                }
                .into_any()
            }}
        </div>
    }
}
