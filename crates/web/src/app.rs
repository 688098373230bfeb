// =============================================================================
// XYVOX Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. App Component
// 3. Router Configuration
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use xyvox_common::content::{PAGE_DESCRIPTION, PAGE_TITLE, THEME_COLOR};

use crate::pages::{HomePage, NotFoundPage};
use crate::state::SiteState;

// -----------------------------------------------------------------------------
// 2. App Component
// -----------------------------------------------------------------------------

/// Root application component.
#[component]
pub fn App(state: SiteState) -> impl IntoView {
    provide_meta_context();
    provide_context(state);

    view! {
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="theme-color" content=THEME_COLOR />

        // -------------------------------------------------------------------
        // 3. Router Configuration
        // -------------------------------------------------------------------
        // One page; sections are reached through in-page anchors.
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
