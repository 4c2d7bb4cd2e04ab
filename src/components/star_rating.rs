use leptos::prelude::*;

/// Decision count after the user picks `next` while `previous` is selected.
/// Clicking the star that is already selected is not a revision.
pub fn count_decision(previous: u8, next: u8, count: u32) -> u32 {
    if next != previous && next > 0 {
        count + 1
    } else {
        count
    }
}

/// Row of clickable stars. Hovering previews a rating; clicking commits it
/// and reports it through `on_set_rating`.
#[component]
pub fn StarRating(
    #[prop(default = 10)] max_rating: u8,
    #[prop(default = 24)] size: u32,
    #[prop(default = "#fcc419")] color: &'static str,
    on_set_rating: Callback<u8>,
) -> impl IntoView {
    let (rating, set_rating) = signal(0u8);
    let (temp_rating, set_temp_rating) = signal(0u8);

    let shown = move || {
        let temp = temp_rating.get();
        if temp > 0 {
            temp
        } else {
            rating.get()
        }
    };

    let star_style = format!(
        "width: {size}px; height: {size}px; display: block; cursor: pointer; color: {color}; font-size: {size}px; line-height: 1;"
    );
    let text_style = format!("line-height: 1; margin: 0; color: {}; font-size: {}px;", color, size / 3 * 2);

    view! {
        <div class="star-rating" style="display: flex; align-items: center; gap: 16px;">
            <div style="display: flex;">
                {(1..=max_rating)
                    .map(|n| {
                        let style = star_style.clone();
                        view! {
                            <span
                                role="button"
                                style=style
                                on:click=move |_| {
                                    set_rating.set(n);
                                    on_set_rating.run(n);
                                }
                                on:mouseenter=move |_| set_temp_rating.set(n)
                                on:mouseleave=move |_| set_temp_rating.set(0)
                            >
                                {move || if shown() >= n { "\u{2605}" } else { "\u{2606}" }}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p style=text_style>
                {move || match shown() {
                    0 => String::new(),
                    n => n.to_string(),
                }}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_changes_are_counted() {
        let mut count = 0;
        let mut rating = 0;
        for next in [8, 8, 6, 6, 9] {
            count = count_decision(rating, next, count);
            rating = next;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_first_pick_counts_once() {
        assert_eq!(count_decision(0, 8, 0), 1);
        assert_eq!(count_decision(8, 8, 1), 1);
    }
}
