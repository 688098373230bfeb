// =============================================================================
// XYVOX Web - Ecosystem Section
// =============================================================================
// Product cards, each revealing on first view with a fixed stagger.
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use xyvox_common::content::{ContentItem, ECOSYSTEM_HEADING, PRODUCTS};
use xyvox_common::sequence::{CARD_DURATION, CARD_STAGGER};
use xyvox_common::Easing;

use super::common::{PreviewImage, SectionHeader};
use super::icons::IconSvg;
use super::reveal::use_reveal;
use crate::state::SiteState;

#[component]
pub fn Ecosystem() -> impl IntoView {
    let site = expect_context::<SiteState>();

    let cards = PRODUCTS
        .into_iter()
        .enumerate()
        .map(|(index, item)| view! { <ProductCard item=item index=index /> })
        .collect_view();

    view! {
        <section id="ecosystem" class="section section-ecosystem">
            <div class="section-divider"></div>
            <div class="section-inner">
                <SectionHeader heading=ECOSYSTEM_HEADING margin=site.config.reveal.heading_margin />
                <div class="product-grid">{cards}</div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(item: ContentItem, index: usize) -> impl IntoView {
    let site = expect_context::<SiteState>();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, site.config.reveal.card_margin);
    let step = CARD_STAGGER.item(index, CARD_DURATION, Easing::Emerge);

    view! {
        <div
            node_ref=node
            class="product-card reveal reveal-card"
            class:is-revealed=move || revealed.get()
            style=step.transition_style()
        >
            <div class="product-card-glow"></div>
            <div class="product-card-body crystal-border">
                <div class="product-card-top">
                    <div class="product-icon" style=item.accent.background_style()>
                        <IconSvg icon=item.icon size=22 />
                    </div>
                    {item.tag.map(|tag| view! { <span class="product-tag">{tag}</span> })}
                </div>

                <h3 class="product-title">{item.title}</h3>
                {item.subtitle.map(|s| view! { <p class="product-subtitle">{s}</p> })}
                <p class="product-description">{item.description}</p>

                <PreviewImage item=item />
            </div>
        </div>
    }
}
