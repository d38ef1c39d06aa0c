use leptos::ev::SubmitEvent;
use leptos::*;
use leptos::logging::error;

use super::star_rating::StarRating;
use crate::api;
use crate::models::review::ReviewPayload;
use crate::models::tool::Tool;

/// Review composer for one tool. The star selector is the only way to set
/// the rating, so it is always in 1..=5; the comment is optional. On failure
/// the form keeps its contents so the user can retry.
#[component]
pub fn ReviewModal(
    tool: Tool,
    #[prop(into)] on_submitted: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let tool_name = tool.name.clone();
    let tool_id = store_value(tool.id);
    let (rating, set_rating) = create_signal(5u8);
    let (comment, set_comment) = create_signal(String::new());
    let (error_text, set_error_text) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error_text.set(None);
        set_submitting.set(true);
        let payload = ReviewPayload {
            tool_id: tool_id.get_value(),
            rating: rating.get_untracked(),
            comment: comment.get_untracked(),
        };
        spawn_local(async move {
            let result = api::reviews::submit(&payload).await;
            set_submitting.set(false);
            match result {
                Ok(_) => on_submitted.call(()),
                Err(err) => {
                    error!("[REVIEWS] Submitting review failed: {err}");
                    set_error_text.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>"Review " {tool_name}</h2>
                <form on:submit=handle_submit>
                    <label>
                        "Rating"
                        <StarRating
                            rating=rating
                            on_change=Callback::new(move |star| set_rating.set(star))
                        />
                    </label>
                    <label>
                        "Comment (optional)"
                        <textarea
                            placeholder="What did you think of this tool?"
                            prop:value=move || comment.get()
                            on:input=move |ev| set_comment.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error_text.get().map(|message| view! {
                        <p class="form-error">{message}</p>
                    })}
                    <div class="modal-actions">
                        <button type="submit" disabled=submitting>
                            {move || if submitting.get() { "Submitting…" } else { "Submit Review" }}
                        </button>
                        <button type="button" on:click=move |_| on_cancel.call(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
