use leptos::prelude::*;

use crate::keys::use_key;

#[component]
pub fn NavBar(children: Children) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <Logo />
            {children()}
            <a href="/settings" class="nav-settings" title="Settings">"\u{2699}"</a>
        </nav>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="logo">
            <span role="img">"\u{1F37F}"</span>
            <h1>"usePopcorn"</h1>
        </div>
    }
}

/// Search box. Pressing Enter anywhere else on the page focuses it and
/// clears the query.
#[component]
pub fn SearchInput(query: ReadSignal<String>, set_query: WriteSignal<String>) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    use_key("Enter", move || {
        let Some(input) = input_ref.get() else {
            return;
        };
        let input_el: &web_sys::Element = input.as_ref();
        if document().active_element().as_ref() == Some(input_el) {
            return;
        }
        let _ = input.focus();
        set_query.set(String::new());
    });

    view! {
        <input
            class="search"
            type="text"
            placeholder="Search movies..."
            node_ref=input_ref
            prop:value=move || query.get()
            on:input=move |ev| set_query.set(event_target_value(&ev))
        />
    }
}

#[component]
pub fn NumResults(#[prop(into)] count: Signal<usize>) -> impl IntoView {
    view! {
        <p class="num-results">
            "Found " <strong>{move || count.get()}</strong> " results"
        </p>
    }
}
