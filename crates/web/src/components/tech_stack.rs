// =============================================================================
// XYVOX Web - Technology Section
// =============================================================================
// Table of Contents:
// 1. TechStack Section
// 2. Tech Icon
// 3. Marquee
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use xyvox_common::content::{ContentItem, TECHNOLOGIES, TECH_HEADING};
use xyvox_common::sequence::{ICON_DURATION, ICON_STAGGER};
use xyvox_common::style::{tech_glyph_style, tech_ring_style};
use xyvox_common::{Easing, Palette};

use super::common::SectionHeader;
use super::crystal::Crystal;
use super::reveal::use_reveal;
use crate::state::SiteState;

// -----------------------------------------------------------------------------
// 1. TechStack Section
// -----------------------------------------------------------------------------

#[component]
pub fn TechStack() -> impl IntoView {
    let site = expect_context::<SiteState>();

    let icons = TECHNOLOGIES
        .into_iter()
        .enumerate()
        .map(|(index, item)| view! { <TechIcon item=item index=index /> })
        .collect_view();

    view! {
        <section id="technology" class="section section-technology">
            <div class="section-divider"></div>
            <div class="section-inner narrow">
                <SectionHeader heading=TECH_HEADING margin=site.config.reveal.heading_margin />
                <div class="tech-grid">{icons}</div>
                <Marquee />
            </div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 2. Tech Icon
// -----------------------------------------------------------------------------

/// Monogram tile; hover recolors the glyph in the technology's brand color.
#[component]
fn TechIcon(item: ContentItem, index: usize) -> impl IntoView {
    let site = expect_context::<SiteState>();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, site.config.reveal.icon_margin);
    let hovered = RwSignal::new(false);

    let color = item.accent.primary();
    let step = ICON_STAGGER.item(index, ICON_DURATION, Easing::EaseOut);

    view! {
        <div
            node_ref=node
            class="tech-icon reveal reveal-pop"
            class:is-revealed=move || revealed.get()
            class:is-hovered=move || hovered.get()
            style=step.transition_style()
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <div class="tech-tile">
                <Crystal
                    width=40.0
                    height=56.0
                    revealed=revealed
                    palette=Palette::new(color, color)
                    delay=step.delay
                    class="tech-crystal"
                />
                <span class="tech-glyph" style=move || tech_glyph_style(color, hovered.get())>
                    {item.monogram()}
                </span>
                <div class="tech-ring" style=tech_ring_style(color)></div>
            </div>
            <span class="tech-name">{item.title}</span>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Marquee
// -----------------------------------------------------------------------------

/// Scrolling strip. The list is rendered twice so the -50% keyframe loops
/// without a seam.
#[component]
fn Marquee() -> impl IntoView {
    let pills = TECHNOLOGIES
        .into_iter()
        .chain(TECHNOLOGIES)
        .map(|item| view! { <span class="marquee-pill">{item.title}</span> })
        .collect_view();

    view! {
        <div class="marquee" aria-hidden="true">
            <div class="marquee-fade marquee-fade-left"></div>
            <div class="marquee-fade marquee-fade-right"></div>
            <div class="marquee-track">{pills}</div>
        </div>
    }
}
