use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::commands::{self, SearchState, WatchedEntry, WatchedSummary};
use crate::components::movie_details::MovieDetails;
use crate::components::movie_list::MovieList;
use crate::components::nav_bar::{NavBar, NumResults, SearchInput};
use crate::components::status::{ErrorMessage, Loader};
use crate::components::toggle_box::ToggleBox;
use crate::components::watched_list::WatchedList;
use crate::components::watched_summary::WatchedSummaryPanel;

/// Whether `query` is long enough for the backend to dispatch a request.
/// Until the threshold is known nothing is assumed.
fn starts_request(query: &str, min_query_len: Option<usize>) -> bool {
    min_query_len.is_some_and(|min| query.trim().chars().count() >= min)
}

/// A search response belongs on screen only if it answers what is typed now.
fn answers_current_query(response_query: &str, current_query: &str) -> bool {
    response_query == current_query.trim()
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (search, set_search) = signal(SearchState::default());
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);
    let (watched, set_watched) = signal::<Vec<WatchedEntry>>(vec![]);
    let (summary, set_summary) = signal(WatchedSummary::default());
    let (watched_error, set_watched_error) = signal::<Option<String>>(None);
    let (min_query_len, set_min_query_len) = signal::<Option<usize>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(status) = commands::get_config_status().await {
                set_min_query_len.set(Some(status.min_query_len));
            }
        });
    });

    let close_movie = Callback::new(move |_: ()| {
        set_selected_id.set(None);
        spawn_local(async move {
            let _ = commands::close_movie_details().await;
        });
    });

    let select_movie = Callback::new(move |id: String| {
        if selected_id.get_untracked().as_deref() == Some(id.as_str()) {
            close_movie.run(());
        } else {
            set_selected_id.set(Some(id));
        }
    });

    // Load the persisted watched list on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_watched().await {
                Ok(list) => set_watched.set(list),
                Err(e) => set_watched_error.set(Some(format!("Failed to load watched list: {}", e))),
            }
        });
    });

    // Refresh aggregates whenever the list changes
    Effect::new(move |_| {
        watched.track();
        spawn_local(async move {
            if let Ok(s) = commands::get_watched_summary().await {
                set_summary.set(s);
            }
        });
    });

    // Search on every query change. Superseded responses come back as None,
    // and anything answering an older query is dropped.
    Effect::new(move |_| {
        let q = query.get();
        if starts_request(&q, min_query_len.get_untracked()) {
            set_selected_id.set(None);
            set_search.update(|s| {
                s.is_loading = true;
                s.error = None;
            });
        }
        spawn_local(async move {
            let result = commands::search_movies(&q).await;
            if !answers_current_query(q.trim(), &query.get_untracked()) {
                return;
            }
            match result {
                Ok(Some(state)) if answers_current_query(&state.query, &q) => set_search.set(state),
                Ok(_) => {}
                Err(e) => set_search.set(SearchState {
                    query: q,
                    error: Some(e),
                    ..SearchState::default()
                }),
            }
        });
    });

    let on_added = Callback::new(move |list: Vec<WatchedEntry>| set_watched.set(list));

    let on_delete = Callback::new(move |id: String| {
        spawn_local(async move {
            match commands::delete_watched(&id).await {
                Ok(list) => {
                    set_watched.set(list);
                    set_watched_error.set(None);
                }
                Err(e) => set_watched_error.set(Some(e)),
            }
        });
    });

    let result_count = Signal::derive(move || search.with(|s| s.movies.len()));

    view! {
        <NavBar>
            <SearchInput query=query set_query=set_query />
            <NumResults count=result_count />
        </NavBar>

        <main class="main">
            <ToggleBox>
                {move || {
                    let state = search.get();
                    if state.is_loading {
                        view! { <Loader /> }.into_any()
                    } else if let Some(err) = state.error {
                        view! { <ErrorMessage message=err /> }.into_any()
                    } else {
                        view! { <MovieList movies=state.movies on_select=select_movie /> }.into_any()
                    }
                }}
            </ToggleBox>

            <ToggleBox>
                {move || match selected_id.get() {
                    Some(id) => view! {
                        <MovieDetails
                            imdb_id=id
                            watched=watched
                            on_close=close_movie
                            on_added=on_added
                        />
                    }
                    .into_any(),
                    None => view! {
                        <WatchedSummaryPanel summary=summary />
                        {move || watched_error.get().map(|e| view! { <ErrorMessage message=e /> })}
                        {move || view! { <WatchedList watched=watched.get() on_delete=on_delete /> }}
                    }
                    .into_any(),
                }}
            </ToggleBox>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_request_uses_backend_threshold() {
        assert!(!starts_request("in", Some(3)));
        assert!(!starts_request("  in  ", Some(3)));
        assert!(starts_request("int", Some(3)));
        assert!(starts_request("in", Some(2)));
    }

    #[test]
    fn test_starts_request_waits_for_threshold() {
        assert!(!starts_request("interstellar", None));
    }

    #[test]
    fn test_stale_response_is_not_current() {
        assert!(answers_current_query("interstellar", "  interstellar "));
        assert!(!answers_current_query("inter", "interstellar"));
        assert!(!answers_current_query("interstellar", "inter"));
    }
}
