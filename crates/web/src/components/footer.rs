// =============================================================================
// XYVOX Web - Footer Component
// =============================================================================
// Brand, copyright and external profile links. Target of the "Contact" link.
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use xyvox_common::content::{BRAND, COPYRIGHT, SOCIAL_LINKS};
use xyvox_common::sequence::StepTarget;
use xyvox_common::{AnimationStep, Easing};

use super::common::BrandMark;
use super::icons::IconSvg;
use super::reveal::use_reveal;
use crate::state::SiteState;

const FADE_DURATION: f64 = 0.8;

#[component]
pub fn Footer() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, site.config.reveal.footer_margin);
    let fade = AnimationStep::new(StepTarget::Item(0), 0.0, FADE_DURATION, Easing::EaseOut);

    let socials = SOCIAL_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    class="social-link"
                    aria-label=link.label
                >
                    <IconSvg icon=link.icon size=18 />
                </a>
            }
        })
        .collect_view();

    view! {
        <footer id="footer" class="footer">
            <div class="section-divider"></div>
            <div
                node_ref=node
                class="footer-inner reveal reveal-fade"
                class:is-revealed=move || revealed.get()
                style=fade.transition_style()
            >
                <div class="footer-row">
                    <div class="footer-brand">
                        <BrandMark small=true />
                        <span class="footer-brand-name">{BRAND}</span>
                        <span class="footer-copyright">{COPYRIGHT}</span>
                    </div>
                    <div class="footer-social">{socials}</div>
                </div>
                <div class="footer-glow-line"></div>
            </div>
        </footer>
    }
}
