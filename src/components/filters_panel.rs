use std::str::FromStr;

use leptos::*;

use crate::models::filters::{Filters, RATING_OPTIONS};
use crate::models::tool::{Category, PricingModel};

/// Category / pricing / minimum-rating selectors. Every change writes the
/// filter signal; the catalog effect in the app shell does the refetching.
#[component]
pub fn FiltersPanel(filters: RwSignal<Filters>) -> impl IntoView {
    let category_value =
        move || filters.with(|f| f.category.map(|c| c.label().to_owned()).unwrap_or_default());
    let pricing_value =
        move || filters.with(|f| f.pricing.map(|p| p.label().to_owned()).unwrap_or_default());
    let rating_value = move || filters.with(|f| f.min_rating.to_string());

    view! {
        <section class="filters-panel">
            <h2>"Filters"</h2>
            <label>
                "Category"
                <select
                    prop:value=category_value
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        filters.update(|f| f.category = Category::from_str(&raw).ok());
                    }
                >
                    <option value="">"All Categories"</option>
                    {Category::ALL
                        .into_iter()
                        .map(|category| view! {
                            <option value=category.label()>{category.label()}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label>
                "Pricing Model"
                <select
                    prop:value=pricing_value
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        filters.update(|f| f.pricing = PricingModel::from_str(&raw).ok());
                    }
                >
                    <option value="">"All Pricing"</option>
                    {PricingModel::ALL
                        .into_iter()
                        .map(|pricing| view! {
                            <option value=pricing.label()>{pricing.label()}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label>
                "Minimum Rating"
                <select
                    prop:value=rating_value
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        filters.update(|f| f.min_rating = raw.parse().unwrap_or(0.0));
                    }
                >
                    {RATING_OPTIONS
                        .into_iter()
                        .map(|(value, label)| view! {
                            <option value=value.to_string()>{label}</option>
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            {move || filters.with(Filters::is_active).then(|| view! {
                <button class="link" on:click=move |_| filters.set(Filters::default())>
                    "Clear all filters"
                </button>
            })}
        </section>
    }
}
