//! App Root Component
//!
//! Provides the table state and lays out filters, table and details.

use leptos::*;

use crate::components::{CustomerDetails, CustomerTable, FilterInputs};
use crate::state::provide_table_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_table_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <main class="container mx-auto px-4 py-8 space-y-6">
                <div>
                    <h1 class="text-3xl font-bold">"Customer Transactions"</h1>
                    <p class="text-gray-400 mt-1">"Click a row to chart that customer's daily totals"</p>
                </div>

                <FilterInputs />
                <CustomerTable />
                <CustomerDetails />
            </main>
        </div>
    }
}
