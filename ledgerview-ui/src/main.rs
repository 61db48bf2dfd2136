//! Ledgerview Dashboard
//!
//! Customer transaction table with a per-day chart, built with Leptos (WASM).
//!
//! # Features
//!
//! - Transactions joined with customer names
//! - Case-insensitive name filter and amount filter
//! - Click a row to chart that customer's daily totals
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. The dataset is bundled into the binary; there is no server.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
