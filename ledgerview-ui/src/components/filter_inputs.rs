//! Filter Inputs
//!
//! Customer-name and amount filters. Input is not validated; an empty field
//! clears its filter.

use leptos::*;

use crate::state::use_table_state;

const INPUT_CLASS: &str = "filter-input bg-gray-700 rounded-lg px-4 py-3 \
                           border border-gray-600 focus:border-primary-500 focus:outline-none";

#[component]
pub fn FilterInputs() -> impl IntoView {
    let state = use_table_state();

    view! {
        <div class="flex flex-wrap gap-4">
            <input
                type="text"
                placeholder="Filter by customer name"
                prop:value=move || state.name_filter.get()
                on:input=move |ev| state.name_filter.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
            <input
                type="number"
                placeholder="Filter by transaction amount"
                prop:value=move || state.amount_filter.get()
                on:input=move |ev| state.amount_filter.set(event_target_value(&ev))
                class=INPUT_CLASS
            />
        </div>
    }
}
