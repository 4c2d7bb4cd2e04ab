use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <p class="loader">"Loading..."</p> }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="error">
            <span>"\u{26D4}\u{FE0F}"</span> " " {message}
        </p>
    }
}
