// =============================================================================
// XYVOX Web - Hero Section
// =============================================================================
// Table of Contents:
// 1. Shard Placement
// 2. Crystal Shard
// 3. Energy Bolts & Particles
// 4. Hero Section
// =============================================================================

use leptos::html::Div;
use leptos::prelude::*;
use xyvox_common::content::{
    Icon, HERO_CTA, HERO_CTA_HREF, HERO_EYEBROW, HERO_HEADLINE, HERO_LEDE,
};
use xyvox_common::geometry::clip_path_polygon;
use xyvox_common::particles::particle_field;
use xyvox_common::sequence::{
    bolt_flicker, shard_drift, StepTarget, HERO_COPY_DURATION, HERO_COPY_STAGGER,
    SHARD_ENTRANCE_DURATION,
};
use xyvox_common::{AnimationStep, Easing, RevealMargin, ShardSize};

use super::crystal::Crystal;
use super::icons::IconSvg;
use super::reveal::use_reveal;
use crate::state::SiteState;

// -----------------------------------------------------------------------------
// 1. Shard Placement
// -----------------------------------------------------------------------------

/// Where a shard sits in the hero cluster and when it enters.
#[derive(Debug, Clone, Copy)]
struct ShardPlacement {
    size: ShardSize,
    /// Positioning class (see `.shard-at-*` in the stylesheet).
    position: &'static str,
    delay: f64,
}

const SHARDS: [ShardPlacement; 5] = [
    ShardPlacement { size: ShardSize::Large, position: "shard-at-center", delay: 0.2 },
    ShardPlacement { size: ShardSize::Medium, position: "shard-at-left", delay: 0.5 },
    ShardPlacement { size: ShardSize::Medium, position: "shard-at-right", delay: 0.7 },
    ShardPlacement { size: ShardSize::Small, position: "shard-at-top", delay: 0.9 },
    ShardPlacement { size: ShardSize::Small, position: "shard-at-bottom", delay: 1.1 },
];

/// (position class, delay) per bolt.
const BOLTS: [(&str, f64); 3] = [
    ("bolt-at-left", 1.0),
    ("bolt-at-right", 2.0),
    ("bolt-at-center", 1.5),
];

// -----------------------------------------------------------------------------
// 2. Crystal Shard
// -----------------------------------------------------------------------------

#[component]
fn CrystalShard(placement: ShardPlacement, #[prop(into)] revealed: Signal<bool>) -> impl IntoView {
    let (width, height) = placement.size.dimensions();
    let entrance = AnimationStep::new(
        StepTarget::Item(0),
        placement.delay,
        SHARD_ENTRANCE_DURATION,
        Easing::Emerge,
    );
    let drift = shard_drift(placement.delay);

    view! {
        <div
            class=format!("shard reveal reveal-shard {} {}", placement.size.class(), placement.position)
            class:is-revealed=move || revealed.get()
            style=entrance.transition_style()
        >
            <div class="shard-drift" style=drift.animation_style()>
                <div class="shard-body" style=format!("clip-path:{}", clip_path_polygon())>
                    <div class="shard-fill"></div>
                    <div class="shard-sheen"></div>
                </div>
                <Crystal
                    width=width
                    height=height
                    revealed=revealed
                    delay=placement.delay
                    class="shard-lines"
                />
                <div class="shard-glow"></div>
            </div>
        </div>
    }
}

// -----------------------------------------------------------------------------
// 3. Energy Bolts & Particles
// -----------------------------------------------------------------------------

#[component]
fn EnergyBolts() -> impl IntoView {
    BOLTS
        .into_iter()
        .enumerate()
        .map(|(i, (position, delay))| {
            let flicker = bolt_flicker(i, delay);
            view! {
                <div class=format!("energy-bolt {}", position) style=flicker.animation_style()></div>
            }
        })
        .collect_view()
}

#[component]
fn Particles() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let config = &site.config.particles;

    particle_field(config.seed, config.count)
        .into_iter()
        .map(|p| view! { <div class="particle" style=p.style()></div> })
        .collect_view()
}

// -----------------------------------------------------------------------------
// 4. Hero Section
// -----------------------------------------------------------------------------

/// Full-height hero: crystal cluster behind staged copy and CTA.
#[component]
pub fn Hero() -> impl IntoView {
    let stage = NodeRef::<Div>::new();
    let revealed = use_reveal(stage, RevealMargin::EDGE);

    // eyebrow, headline, lede, CTA
    let copy = HERO_COPY_STAGGER.stage([HERO_COPY_DURATION; 4], Easing::Emerge, StepTarget::Item);
    let copy_style = move |i: usize| copy[i].transition_style();

    let shards = SHARDS
        .into_iter()
        .map(|placement| view! { <CrystalShard placement=placement revealed=revealed /> })
        .collect_view();

    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-glow hero-glow-violet"></div>
                <div class="hero-glow hero-glow-cyan"></div>
                <div class="hero-glow hero-glow-lilac"></div>
                <div class="hero-grid"></div>
            </div>

            <div class="hero-cluster" aria-hidden="true">
                <div class="hero-cluster-inner">
                    {shards}
                    <EnergyBolts />
                    <Particles />
                </div>
            </div>

            <div node_ref=stage class="hero-copy" class:is-revealed=move || revealed.get()>
                <p class="hero-eyebrow reveal reveal-rise" style=copy_style(0)>
                    {HERO_EYEBROW}
                </p>
                <h1 class="hero-headline reveal reveal-rise" style=copy_style(1)>
                    <span class="hero-headline-line">{HERO_HEADLINE[0]}</span>
                    <span class="hero-headline-line title-gradient">{HERO_HEADLINE[1]}</span>
                </h1>
                <p class="hero-lede reveal reveal-rise" style=copy_style(2)>
                    {HERO_LEDE}
                </p>
                <div class="hero-actions reveal reveal-rise" style=copy_style(3)>
                    <a href=HERO_CTA_HREF class="btn-cta">
                        <span class="btn-cta-fill"></span>
                        <span class="btn-cta-label">
                            {HERO_CTA}
                            <IconSvg icon=Icon::ArrowRight size=16 class="btn-cta-arrow" />
                        </span>
                    </a>
                </div>
            </div>

            <div class="hero-fade"></div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xyvox_common::sequence::drift_duration;

    #[test]
    fn test_shards_enter_in_order() {
        assert!(SHARDS.windows(2).all(|w| w[0].delay < w[1].delay));
        assert_eq!(SHARDS[0].size, ShardSize::Large);
        assert_eq!(SHARDS.iter().filter(|s| s.size == ShardSize::Small).count(), 2);
    }

    #[test]
    fn test_later_shards_drift_slower() {
        let durations: Vec<f64> = SHARDS.iter().map(|s| shard_drift(s.delay).duration).collect();
        assert!(durations.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(durations[0], drift_duration(SHARDS[0].delay));
    }

    #[test]
    fn test_bolts_loop_forever() {
        for (i, (_, delay)) in BOLTS.into_iter().enumerate() {
            let step = bolt_flicker(i, delay);
            assert_eq!(step.repeat_count(), "indefinite");
            assert_eq!(step.delay, delay);
        }
    }
}
