//! csvdash Dashboard
//!
//! Session-gated dashboard for the CSV analytics backend, built with Leptos
//! (WASM).
//!
//! # Features
//!
//! - Login and signup behind public/protected route guards
//! - Overview cards and a rows-per-column bar chart
//! - Paginated record table
//! - CSV upload from the side menu
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. View-state lives in the `csvdash` core crate; this crate
//! wires it to signals, the DOM and `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
