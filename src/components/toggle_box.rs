use leptos::prelude::*;

/// A panel whose contents can be collapsed with the corner button.
#[component]
pub fn ToggleBox(children: ChildrenFn) -> impl IntoView {
    let (is_open, set_is_open) = signal(true);

    view! {
        <div class="box">
            <button class="btn-toggle" on:click=move |_| set_is_open.update(|open| *open = !*open)>
                {move || if is_open.get() { "\u{2013}" } else { "+" }}
            </button>
            {move || is_open.get().then(|| children())}
        </div>
    }
}
