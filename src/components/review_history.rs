use leptos::*;
use leptos::logging::error;

use super::star_rating::StarRating;
use crate::api;
use crate::models::fetch::FetchState;
use crate::models::review::{RatingSummary, Review};
use crate::models::tool::Tool;

/// Review history for one tool: average, per-star histogram and the review
/// list. Fetches once when opened; everything else is pure derivation.
#[component]
pub fn ReviewHistoryModal(tool: Tool, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let tool_name = tool.name.clone();
    let use_case = tool.use_case.clone();
    let (state, set_state) = create_signal(FetchState::<Vec<Review>>::Loading);

    let tool_id = tool.id;
    spawn_local(async move {
        match api::reviews::for_tool(&tool_id).await {
            Ok(reviews) => set_state.set(FetchState::Loaded(reviews)),
            Err(err) => {
                error!("[REVIEWS] Fetching history failed: {err}");
                set_state.set(FetchState::Failed(err.to_string()));
            }
        }
    });

    let summary = create_memo(move |_| {
        state.with(|s| RatingSummary::from_reviews(s.data().map(Vec::as_slice).unwrap_or(&[])))
    });

    view! {
        <div class="modal-backdrop">
            <div class="modal review-history">
                <div class="history-head">
                    <div>
                        <h2>{tool_name}</h2>
                        <p class="use-case">{use_case}</p>
                    </div>
                    <button class="close" on:click=move |_| on_close.call(())>"×"</button>
                </div>

                <div class="rating-overview">
                    <div class="rating-average">
                        <span class="average-number">
                            {move || format!("{:.1}", summary.get().average())}
                        </span>
                        <StarRating rating=Signal::derive(move || {
                            summary.get().average().round().clamp(0.0, 5.0) as u8
                        })/>
                        <span class="review-count">
                            {move || format!("{} reviews", summary.get().total())}
                        </span>
                    </div>
                    <div class="rating-histogram">
                        {[5u8, 4, 3, 2, 1]
                            .into_iter()
                            .map(|star| view! {
                                <div class="histogram-row">
                                    <span class="star-label">{star} "★"</span>
                                    <div class="bar-track">
                                        <div
                                            class="bar-fill"
                                            style:width=move || {
                                                format!("{}%", summary.get().bar_percent(star))
                                            }
                                        ></div>
                                    </div>
                                    <span class="bucket-count">
                                        {move || summary.get().count_for(star)}
                                    </span>
                                </div>
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="history-body">
                    {move || state.with(|s| match s {
                        FetchState::Loading => {
                            view! { <p class="loading">"Loading reviews…"</p> }.into_view()
                        }
                        FetchState::Failed(message) => {
                            view! { <p class="error-banner">{message.clone()}</p> }.into_view()
                        }
                        FetchState::Loaded(reviews) if reviews.is_empty() => view! {
                            <p class="empty">"No reviews yet. Be the first to review this tool!"</p>
                        }
                        .into_view(),
                        FetchState::Loaded(reviews) => reviews
                            .iter()
                            .cloned()
                            .map(|review| view! {
                                <div class="history-entry">
                                    <div class="entry-head">
                                        <span class="entry-date">{review.date}</span>
                                        <StarRating rating=review.rating/>
                                    </div>
                                    {review.comment.filter(|c| !c.is_empty()).map(|comment| {
                                        view! { <p class="entry-comment">{comment}</p> }
                                    })}
                                </div>
                            })
                            .collect_view(),
                        FetchState::Idle => ().into_view(),
                    })}
                </div>

                <button class="close-footer" on:click=move |_| on_close.call(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
