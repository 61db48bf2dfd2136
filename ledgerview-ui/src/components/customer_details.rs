//! Customer Details
//!
//! Heading and chart for the selected customer; hidden until a row is clicked.

use leptos::*;

use crate::components::TransactionChart;
use crate::state::use_table_state;

#[component]
pub fn CustomerDetails() -> impl IntoView {
    let state = use_table_state();

    move || {
        state.details_heading().map(|heading| {
            view! {
                <div class="customer-details bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">{heading}</h2>
                    <TransactionChart />
                </div>
            }
        })
    }
}
