use leptos::ev::SubmitEvent;
use leptos::*;
use leptos::logging::error;

use crate::api;
use crate::models::tool::{Category, PricingModel, Tool, ToolDraft};

/// Add/edit dialog for a catalog entry. Required fields are checked here,
/// before any request is built; a draft that fails validation never reaches
/// the network.
#[component]
pub fn ToolModal(
    editing: Option<Tool>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = editing.is_some();
    let tool_id = store_value(editing.as_ref().map(|t| t.id.clone()));
    let draft = create_rw_signal(
        editing
            .as_ref()
            .map(ToolDraft::from_tool)
            .unwrap_or_default(),
    );
    let (error_text, set_error_text) = create_signal(None::<String>);
    let (saving, set_saving) = create_signal(false);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get().validate() {
            Ok(payload) => payload,
            Err(err) => {
                set_error_text.set(Some(err.to_string()));
                return;
            }
        };
        set_error_text.set(None);
        set_saving.set(true);
        spawn_local(async move {
            let result = match tool_id.get_value() {
                Some(id) => api::tools::update(&id, &payload).await,
                None => api::tools::create(&payload).await,
            };
            set_saving.set(false);
            match result {
                Ok(_) => on_saved.call(()),
                Err(err) => {
                    error!("[CATALOG] Saving tool failed: {err}");
                    set_error_text.set(Some(err.to_string()));
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2>{if is_edit { "Edit Tool" } else { "Add New Tool" }}</h2>
                <form on:submit=handle_submit>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || draft.with(|d| d.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.name = value);
                            }
                        />
                    </label>
                    <label>
                        "Use case"
                        <textarea
                            prop:value=move || draft.with(|d| d.use_case.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.use_case = value);
                            }
                        />
                    </label>
                    <label>
                        "Category"
                        <select
                            prop:value=move || draft.with(|d| d.category.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.category = value);
                            }
                        >
                            <option value="">"Select a category"</option>
                            {Category::ALL
                                .into_iter()
                                .map(|category| view! {
                                    <option value=category.label()>{category.label()}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        "Pricing model"
                        <select
                            prop:value=move || draft.with(|d| d.pricing_model.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.pricing_model = value);
                            }
                        >
                            <option value="">"Select a pricing model"</option>
                            {PricingModel::ALL
                                .into_iter()
                                .map(|pricing| view! {
                                    <option value=pricing.label()>{pricing.label()}</option>
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {move || error_text.get().map(|message| view! {
                        <p class="form-error">{message}</p>
                    })}
                    <div class="modal-actions">
                        <button type="submit" disabled=saving>
                            {move || if saving.get() { "Saving…" } else { "Save" }}
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
