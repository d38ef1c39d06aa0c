use leptos::*;

use super::star_rating::StarRating;
use crate::models::tool::Tool;

#[component]
pub fn ToolCard(
    tool: Tool,
    #[prop(into)] admin_view: Signal<bool>,
    #[prop(into)] on_edit: Callback<Tool>,
    #[prop(into)] on_delete: Callback<String>,
    #[prop(into)] on_review: Callback<Tool>,
    #[prop(into)] on_view_reviews: Callback<Tool>,
) -> impl IntoView {
    // rounded only for the star display; the exact average stays server-side
    let stars = tool.average_rating.round().clamp(0.0, 5.0) as u8;
    let tool = store_value(tool);

    view! {
        <article class="tool-card">
            <div class="tool-card-head">
                <div>
                    <h3>{move || tool.with_value(|t| t.name.clone())}</h3>
                    <span class="category-tag">
                        {move || tool.with_value(|t| t.category.label())}
                    </span>
                </div>
                <Show when=move || admin_view.get()>
                    <div class="admin-actions">
                        <button
                            title="Edit"
                            on:click=move |_| on_edit.call(tool.get_value())
                        >
                            "Edit"
                        </button>
                        <button
                            title="Delete"
                            on:click=move |_| on_delete.call(tool.with_value(|t| t.id.clone()))
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
            <p class="use-case">{move || tool.with_value(|t| t.use_case.clone())}</p>
            <div class="tool-card-meta">
                <span class="pricing-tag">
                    {move || tool.with_value(|t| t.pricing_model.label())}
                </span>
                <button
                    class="rating-summary"
                    title="View reviews"
                    on:click=move |_| on_view_reviews.call(tool.get_value())
                >
                    <StarRating rating=stars/>
                    <span>{move || tool.with_value(|t| format!("({})", t.review_count))}</span>
                </button>
            </div>
            <Show when=move || !admin_view.get()>
                <button
                    class="write-review"
                    on:click=move |_| on_review.call(tool.get_value())
                >
                    "Write Review"
                </button>
            </Show>
        </article>
    }
}
