use leptos::*;

/// Five-star display / selector. When `on_change` is given the stars become
/// buttons, so the control can only ever emit a rating in 1..=5.
#[component]
pub fn StarRating(
    #[prop(into)] rating: MaybeSignal<u8>,
    #[prop(optional, into)] on_change: Option<Callback<u8>>,
) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1u8..=5)
                .map(|star| {
                    let filled = move || star <= rating.get();
                    let glyph = move || if filled() { "★" } else { "☆" };
                    match on_change {
                        Some(on_change) => view! {
                            <button
                                type="button"
                                class="star interactive"
                                class:filled=filled
                                on:click=move |_| on_change.call(star)
                            >
                                {glyph}
                            </button>
                        }
                        .into_view(),
                        None => view! {
                            <span class="star" class:filled=filled>{glyph}</span>
                        }
                        .into_view(),
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
