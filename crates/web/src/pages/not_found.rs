// =============================================================================
// XYVOX Web - 404 Not Found Page
// =============================================================================

use leptos::prelude::*;
use xyvox_common::content::BRAND;

use crate::components::BrandMark;

/// 404 Not Found page.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page page-not-found">
            <div class="not-found-content">
                <BrandMark />
                <span class="not-found-code">"404"</span>
                <h1>"Page Not Found"</h1>
                <p>"This page is not part of the " {BRAND} " site."</p>
                <a href="/" class="btn-launch">
                    "Go Home"
                </a>
            </div>
        </div>
    }
}
