use leptos::*;

/// Which main panel an admin is looking at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MainView {
    Catalog,
    Moderation,
}

#[component]
pub fn AdminNav(
    #[prop(into)] active: Signal<MainView>,
    #[prop(into)] on_select: Callback<MainView>,
    #[prop(into)] pending_count: Signal<usize>,
) -> impl IntoView {
    view! {
        <nav class="admin-nav">
            <button
                class:active=move || active.get() == MainView::Catalog
                on:click=move |_| on_select.call(MainView::Catalog)
            >
                "Tool Catalog"
            </button>
            <button
                class:active=move || active.get() == MainView::Moderation
                on:click=move |_| on_select.call(MainView::Moderation)
            >
                "Review Moderation"
                {move || {
                    let count = pending_count.get();
                    (count > 0).then(|| view! {
                        <span class="badge">{count}</span>
                    })
                }}
            </button>
        </nav>
    }
}
