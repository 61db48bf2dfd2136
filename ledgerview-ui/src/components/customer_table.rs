//! Customer Table
//!
//! Joined transactions, filtered by the inputs above. Clicking a row selects
//! its customer.

use leptos::*;
use ledgerview::view::{cell_text, Column, EnrichedTransaction};

use crate::state::use_table_state;

#[component]
pub fn CustomerTable() -> impl IntoView {
    let state = use_table_state();

    view! {
        <table class="customer-table w-full bg-gray-800 rounded-xl overflow-hidden">
            <thead class="bg-gray-700 text-left text-sm text-gray-300">
                <tr>
                    {Column::all()
                        .iter()
                        .map(|column| view! { <th class="px-4 py-3">{column.header()}</th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    let rows = state.visible_rows.get();
                    if rows.is_empty() {
                        view! {
                            <tr>
                                <td colspan="3" class="px-4 py-6 text-center text-gray-400">
                                    "No transactions match the filters"
                                </td>
                            </tr>
                        }
                        .into_view()
                    } else {
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, row)| view! { <TableRow index=index row=row /> })
                            .collect_view()
                    }
                }}
            </tbody>
        </table>
    }
}

/// Single clickable row
#[component]
fn TableRow(index: usize, row: EnrichedTransaction) -> impl IntoView {
    let state = use_table_state();

    let customer_id = row.customer_id.clone();
    let is_selected = move || {
        state.selection.with(|s| {
            s.as_ref()
                .map(|s| s.customer_id == customer_id)
                .unwrap_or(false)
        })
    };

    let cells = Column::all()
        .iter()
        .map(|column| view! { <td class="px-4 py-2">{cell_text(&row, *column)}</td> })
        .collect_view();

    view! {
        <tr
            on:click=move |_| state.select_visible_row(index)
            class=move || {
                let base = "border-t border-gray-700 cursor-pointer transition-colors";
                if is_selected() {
                    format!("{} bg-gray-600", base)
                } else {
                    format!("{} hover:bg-gray-700", base)
                }
            }
        >
            {cells}
        </tr>
    }
}
