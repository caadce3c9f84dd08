//! Beacon Insights
//!
//! Marketing analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Revenue, traffic, and channel-mix charts over mock campaign data
//! - Campaign table with search, column sorting, and pagination
//! - Dark/light theme, persisted across reloads
//! - Export stubs for the filtered campaign set
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. There is no backend: a mock feed generates all data in
//! memory after a simulated load delay.

use leptos::*;

mod app;
mod components;
mod export;
mod feed;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
