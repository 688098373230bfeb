// =============================================================================
// XYVOX Web - Home Page
// =============================================================================

use leptos::prelude::*;

use crate::components::{Ecosystem, Footer, Hero, Navbar, TechStack};

/// The landing page. Sections own their own state and reveal independently.
#[component]
pub fn HomePage() -> impl IntoView {
    log::debug!("rendering home page");

    view! {
        <main class="page page-home">
            <Navbar />
            <Hero />
            <Ecosystem />
            <TechStack />
            <Footer />
        </main>
    }
}
