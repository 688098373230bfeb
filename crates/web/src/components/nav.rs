// =============================================================================
// XYVOX Web - Navigation Bar
// =============================================================================
// Fixed top bar: transparent at the top of the page, blurred and opaque once
// scrolled. Mobile-responsive with a toggle button and dropdown menu.
// =============================================================================

use leptos::ev;
use leptos::prelude::*;
use xyvox_common::content::{Icon, BRAND, LAUNCH_APP};
use xyvox_common::sequence::StepTarget;
use xyvox_common::{AnimationStep, Easing, NavState, NAV_LINKS};

use super::common::BrandMark;
use super::icons::IconSvg;
use crate::state::SiteState;
use crate::utils::scroll_y;

const ENTRANCE_DURATION: f64 = 0.8;

/// Site navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let nav = RwSignal::new(NavState::new(site.config.nav.scroll_threshold));

    // Page may already be scrolled on mount (reload mid-page)
    nav.update(|n| {
        n.on_scroll(scroll_y());
    });

    let listener = window_event_listener(ev::scroll, move |_| {
        let y = scroll_y();
        nav.maybe_update(|n| n.on_scroll(y));
    });
    on_cleanup(move || listener.remove());

    let entrance = AnimationStep::new(StepTarget::Item(0), 0.0, ENTRANCE_DURATION, Easing::Emerge);

    let desktop_links = NAV_LINKS
        .into_iter()
        .map(|link| {
            view! {
                <a href=link.href class="nav-link">
                    {link.label}
                    <span class="nav-link-underline"></span>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class=move || nav.with(|n| n.bar_class()) style=entrance.animation_style()>
            <div class="navbar-inner">
                <a href="#" class="nav-logo" on:click=move |_| nav.update(NavState::close_menu)>
                    <BrandMark small=true />
                    <span class="nav-logo-text">{BRAND}</span>
                </a>

                <div class="nav-links desktop-only">
                    {desktop_links}
                    <button class="btn-launch">{LAUNCH_APP}</button>
                </div>

                <button
                    class="menu-toggle mobile-only"
                    aria-label=move || nav.with(|n| n.toggle_label())
                    aria-expanded=move || nav.with(|n| n.menu_open()).to_string()
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    {move || {
                        let icon = if nav.with(|n| n.menu_open()) { Icon::Close } else { Icon::Menu };
                        view! { <IconSvg icon=icon /> }
                    }}
                </button>
            </div>

            <Show when=move || nav.with(|n| n.menu_open())>
                <div class="mobile-menu mobile-only">
                    {NAV_LINKS
                        .into_iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="mobile-nav-link"
                                    on:click=move |_| {
                                        let target = nav.try_update(|n| n.activate(&link));
                                        log::debug!("mobile nav -> {:?}", target);
                                    }
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <button class="btn-launch full-width">{LAUNCH_APP}</button>
                </div>
            </Show>
        </nav>
    }
}
