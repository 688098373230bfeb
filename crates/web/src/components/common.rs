// =============================================================================
// XYVOX Web - Common UI Components
// =============================================================================
// Table of Contents:
// 1. Brand Mark
// 2. Section Header
// 3. Preview Image
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use xyvox_common::content::{ContentItem, SectionHeading, BRAND, BRAND_MARK};
use xyvox_common::media::PREVIEW_UNAVAILABLE;
use xyvox_common::sequence::{StepTarget, HEADING_DURATION};
use xyvox_common::{AnimationStep, Easing, ImageStatus, RevealMargin};

use super::icons::IconSvg;
use super::reveal::use_reveal;

// -----------------------------------------------------------------------------
// 1. Brand Mark
// -----------------------------------------------------------------------------

/// Brand logo image. Falls back to the CSS diamond if the asset is missing.
#[component]
pub fn BrandMark(#[prop(optional)] small: bool) -> impl IntoView {
    let status = RwSignal::new(ImageStatus::default());
    let size_class = if small { "brand-mark small" } else { "brand-mark" };

    view! {
        <span class=size_class>
            <img
                src=BRAND_MARK
                alt=BRAND
                class="brand-mark-img"
                class:hidden=move || !status.get().shows_image()
                on:load=move |_| status.update(ImageStatus::on_load)
                on:error=move |_| status.update(|s| {
                    s.on_error();
                })
            />
            <span class="brand-diamond" class:hidden=move || !status.get().shows_placeholder()>
                <span class="brand-diamond-sheen"></span>
            </span>
        </span>
    }
}

// -----------------------------------------------------------------------------
// 2. Section Header
// -----------------------------------------------------------------------------

/// Eyebrow, gradient title and rule, rising in on first view.
#[component]
pub fn SectionHeader(heading: SectionHeading, margin: RevealMargin) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let revealed = use_reveal(node, margin);
    let step = AnimationStep::new(StepTarget::Item(0), 0.0, HEADING_DURATION, Easing::Emerge);

    view! {
        <div
            node_ref=node
            class="section-header reveal reveal-rise"
            class:is-revealed=move || revealed.get()
            style=step.transition_style()
        >
            <p class="section-eyebrow">{heading.eyebrow}</p>
            <h2 class="section-title">
                <span class="title-gradient">{heading.title}</span>
            </h2>
            <div class="section-rule"></div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Preview Image
// -----------------------------------------------------------------------------

/// Product preview with a placeholder block shown when the image fails.
#[component]
pub fn PreviewImage(item: ContentItem) -> impl IntoView {
    let status = RwSignal::new(match item.preview {
        Some(_) => ImageStatus::Pending,
        None => ImageStatus::Failed,
    });
    let title = item.title;

    view! {
        <div class="preview-frame">
            <div class="preview-aspect">
                {item.preview.map(|src| view! {
                    <img
                        src=src
                        alt=format!("{} interface preview", title)
                        class="preview-image"
                        loading="lazy"
                        class:hidden=move || !status.get().shows_image()
                        on:load=move |_| status.update(ImageStatus::on_load)
                        on:error=move |_| status.update(|s| {
                            if s.on_error() {
                                log::info!("preview for {} unavailable, showing placeholder", title);
                            }
                        })
                    />
                })}
                <div
                    class="preview-placeholder"
                    class:hidden=move || !status.get().shows_placeholder()
                >
                    <div class="preview-placeholder-icon" style=item.accent.background_style()>
                        <IconSvg icon=item.icon size=20 />
                    </div>
                    <p class="preview-placeholder-text">{PREVIEW_UNAVAILABLE}</p>
                </div>
            </div>
            <div class="preview-scanline"></div>
        </div>
    }
}
