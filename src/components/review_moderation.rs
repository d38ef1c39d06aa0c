use leptos::*;

use super::star_rating::StarRating;
use crate::models::fetch::FetchState;
use crate::models::review::{Review, ReviewStatus};

/// Admin moderation queue. Approve/reject are delegated to the app shell,
/// which performs the call and the follow-up refetches (queue + catalog).
#[component]
pub fn ReviewModeration(
    #[prop(into)] queue: Signal<FetchState<Vec<Review>>>,
    #[prop(into)] on_action: Callback<(String, ReviewStatus)>,
) -> impl IntoView {
    view! {
        <section class="moderation">
            <h2>"Review Moderation"</h2>
            <p class="subtitle">"Approve or reject user reviews"</p>
            {move || queue.with(|state| match state {
                FetchState::Loading => {
                    view! { <p class="loading">"Loading pending reviews…"</p> }.into_view()
                }
                FetchState::Failed(message) => {
                    view! { <p class="error-banner">{message.clone()}</p> }.into_view()
                }
                FetchState::Loaded(reviews) if reviews.is_empty() => {
                    view! { <p class="empty">"No pending reviews"</p> }.into_view()
                }
                FetchState::Loaded(reviews) => reviews
                    .iter()
                    .cloned()
                    .map(|review| {
                        let approve_id = review.id.clone();
                        let reject_id = review.id.clone();
                        view! {
                            <div class="moderation-entry">
                                <div class="entry-head">
                                    <div>
                                        <h3>{review.tool_name}</h3>
                                        <span class="entry-date">{review.date}</span>
                                    </div>
                                    <StarRating rating=review.rating/>
                                </div>
                                {review.comment.filter(|c| !c.is_empty()).map(|comment| {
                                    view! { <p class="entry-comment">{comment}</p> }
                                })}
                                <div class="entry-actions">
                                    <button
                                        class="approve"
                                        on:click=move |_| on_action.call((
                                            approve_id.clone(),
                                            ReviewStatus::Approved,
                                        ))
                                    >
                                        "Approve"
                                    </button>
                                    <button
                                        class="reject"
                                        on:click=move |_| on_action.call((
                                            reject_id.clone(),
                                            ReviewStatus::Rejected,
                                        ))
                                    >
                                        "Reject"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view(),
                FetchState::Idle => ().into_view(),
            })}
        </section>
    }
}
