// =============================================================================
// XYVOX Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

use leptos::prelude::*;
use xyvox_web::{App, SiteState};

fn main() {
    // Panic hook, logger and embedded site.toml
    let state = SiteState::bootstrap();

    log::info!("Starting XYVOX site...");

    leptos::mount::mount_to_body(move || view! { <App state=state /> });
}
