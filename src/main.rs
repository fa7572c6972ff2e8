//! AI Agent Console
//!
//! Single-page frontend for an AI agent backend, built with Leptos (WASM).
//!
//! # Features
//!
//! - Chat with the agent over plain HTTP
//! - Spreadsheet/CSV upload with server-side analysis
//! - Rendered insights and chart descriptors
//! - Login-gated routing with light/dark theme
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the agent API via HTTP POST only; all
//! analysis and response generation happens server-side.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
