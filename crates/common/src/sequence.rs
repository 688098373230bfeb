//! # Animation Staging
//!
//! Turns ordered drawable units into timed steps. A crystal always draws in
//! the same order: outline, then facets, then vertices, then the looping
//! core pulse. Card grids and hero copy use the plain [`Stagger`].
//!
//! Times are seconds relative to the moment the owning element is revealed.
//!
//! ## Table of Contents
//! 1. Easing
//! 2. AnimationStep
//! 3. Stagger
//! 4. CorePulse
//! 5. CrystalSequence
//! 6. Ambient loops

use crate::geometry::{svg_number, ShapeSpec};

// ============================================================================
// 1. Easing
// ============================================================================

/// Timing curves used across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Fast start with a long settle, `cubic-bezier(0.16, 1, 0.3, 1)`.
    #[default]
    Emerge,
}

impl Easing {
    /// Control points of the cubic bezier.
    pub fn bezier(self) -> [f64; 4] {
        match self {
            Easing::Linear => [0.0, 0.0, 1.0, 1.0],
            Easing::EaseOut => [0.0, 0.0, 0.58, 1.0],
            Easing::EaseInOut => [0.42, 0.0, 0.58, 1.0],
            Easing::Emerge => [0.16, 1.0, 0.3, 1.0],
        }
    }

    /// CSS `cubic-bezier(..)` timing function.
    pub fn css(self) -> String {
        let [a, b, c, d] = self.bezier().map(svg_number);
        format!("cubic-bezier({}, {}, {}, {})", a, b, c, d)
    }

    /// SMIL `keySplines` value for a single-interval animation.
    pub fn key_splines(self) -> String {
        self.bezier().map(svg_number).join(" ")
    }
}

// ============================================================================
// 2. AnimationStep
// ============================================================================

/// What a step animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepTarget {
    Outline,
    Facet(usize),
    Vertex(usize),
    Core,
    /// Generic staggered block (card, icon, line of copy).
    Item(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    Forever,
}

/// One timed unit of a staged reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub target: StepTarget,
    pub delay: f64,
    pub duration: f64,
    pub easing: Easing,
    pub repeat: Repeat,
}

impl AnimationStep {
    pub fn new(target: StepTarget, delay: f64, duration: f64, easing: Easing) -> Self {
        Self {
            target,
            delay,
            duration,
            easing,
            repeat: Repeat::Once,
        }
    }

    pub fn looping(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Time at which a single pass completes.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// SMIL `begin` attribute.
    pub fn begin_attr(&self) -> String {
        format!("{}s", svg_number(self.delay))
    }

    /// SMIL `dur` attribute.
    pub fn dur_attr(&self) -> String {
        format!("{}s", svg_number(self.duration))
    }

    /// SMIL `repeatCount` attribute.
    pub fn repeat_count(&self) -> &'static str {
        match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "indefinite",
        }
    }

    /// Inline CSS for a class-driven transition (`.reveal` -> `.is-revealed`).
    pub fn transition_style(&self) -> String {
        format!(
            "transition-duration:{}s;transition-delay:{}s;transition-timing-function:{}",
            svg_number(self.duration),
            svg_number(self.delay),
            self.easing.css()
        )
    }

    /// Inline CSS for a keyframe animation started on mount.
    pub fn animation_style(&self) -> String {
        let count = match self.repeat {
            Repeat::Once => "1",
            Repeat::Forever => "infinite",
        };
        format!(
            "animation-duration:{}s;animation-delay:{}s;animation-timing-function:{};animation-iteration-count:{}",
            svg_number(self.duration),
            svg_number(self.delay),
            self.easing.css(),
            count
        )
    }
}

// ============================================================================
// 3. Stagger
// ============================================================================

/// Fixed per-item offset: item `i` starts at `base + i * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub base: f64,
    pub step: f64,
}

impl Stagger {
    pub const fn new(base: f64, step: f64) -> Self {
        Self { base, step }
    }

    pub fn start(&self, index: usize) -> f64 {
        self.base + index as f64 * self.step
    }

    /// Step for the `index`-th generic item.
    pub fn item(&self, index: usize, duration: f64, easing: Easing) -> AnimationStep {
        AnimationStep::new(StepTarget::Item(index), self.start(index), duration, easing)
    }

    /// Stage an ordered run of units, each with its own duration.
    pub fn stage(
        &self,
        durations: impl IntoIterator<Item = f64>,
        easing: Easing,
        target: impl Fn(usize) -> StepTarget,
    ) -> Vec<AnimationStep> {
        durations
            .into_iter()
            .enumerate()
            .map(|(i, duration)| AnimationStep::new(target(i), self.start(i), duration, easing))
            .collect()
    }
}

/// Product cards: 0.8s each, 0.15s apart.
pub const CARD_STAGGER: Stagger = Stagger::new(0.0, 0.15);
pub const CARD_DURATION: f64 = 0.8;

/// Technology icons: 0.5s each, 0.08s apart.
pub const ICON_STAGGER: Stagger = Stagger::new(0.0, 0.08);
pub const ICON_DURATION: f64 = 0.5;

/// Hero copy (eyebrow, headline, lede, call to action).
pub const HERO_COPY_STAGGER: Stagger = Stagger::new(0.5, 0.2);
pub const HERO_COPY_DURATION: f64 = 1.0;

/// Section headings and the footer.
pub const HEADING_DURATION: f64 = 0.8;

// ============================================================================
// 4. CorePulse
// ============================================================================

/// Sinusoidal breathing of the crystal core, sampled into SMIL keyframes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorePulse {
    pub base_radius: f64,
    /// Peak radius change as a fraction of `base_radius`.
    pub amplitude: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
    /// Keyframes per period, first and last included.
    pub samples: usize,
}

impl CorePulse {
    pub fn new(base_radius: f64) -> Self {
        Self {
            base_radius,
            amplitude: 0.35,
            min_opacity: 0.35,
            max_opacity: 0.85,
            samples: 9,
        }
    }

    /// Radius and opacity at phase `t` in `[0, 1]`.
    pub fn sample(&self, t: f64) -> (f64, f64) {
        let wave = (std::f64::consts::TAU * t).sin();
        let radius = self.base_radius * (1.0 + self.amplitude * wave);
        let mid = 0.5 * (self.max_opacity + self.min_opacity);
        let half = 0.5 * (self.max_opacity - self.min_opacity);
        (radius, mid + half * wave)
    }

    fn keyframes(&self, pick: impl Fn((f64, f64)) -> f64) -> String {
        let last = self.samples.max(2) - 1;
        (0..=last)
            .map(|k| svg_number(pick(self.sample(k as f64 / last as f64))))
            .collect::<Vec<_>>()
            .join(";")
    }

    /// SMIL `values` for the `r` attribute.
    pub fn radius_values(&self) -> String {
        self.keyframes(|(r, _)| r)
    }

    /// SMIL `values` for the `opacity` attribute.
    pub fn opacity_values(&self) -> String {
        self.keyframes(|(_, o)| o)
    }
}

// ============================================================================
// 5. CrystalSequence
// ============================================================================

pub const OUTLINE_DURATION: f64 = 2.0;
/// Facets start while the outline is still drawing.
pub const FACET_LEAD: f64 = 0.8;
pub const FACET_STAGGER: f64 = 0.12;
pub const FACET_DURATION: f64 = 0.9;
pub const VERTEX_STAGGER: f64 = 0.08;
pub const VERTEX_DURATION: f64 = 0.4;
pub const PULSE_PERIOD: f64 = 3.0;

/// Fixed outline -> facets -> vertices -> core ordering for one crystal.
#[derive(Debug, Clone, PartialEq)]
pub struct CrystalSequence {
    outline: AnimationStep,
    facets: Vec<AnimationStep>,
    vertices: Vec<AnimationStep>,
    core: AnimationStep,
    pulse: CorePulse,
}

impl CrystalSequence {
    pub fn for_shape(shape: &ShapeSpec, base_delay: f64) -> Self {
        let outline = AnimationStep::new(
            StepTarget::Outline,
            base_delay,
            OUTLINE_DURATION,
            Easing::Emerge,
        );

        let facets = Stagger::new(base_delay + FACET_LEAD, FACET_STAGGER).stage(
            shape.facets().iter().map(|_| FACET_DURATION),
            Easing::EaseOut,
            StepTarget::Facet,
        );

        let facets_done = facets.iter().map(AnimationStep::end).fold(outline.delay, f64::max);
        let vertices = Stagger::new(facets_done, VERTEX_STAGGER).stage(
            shape.vertices().iter().map(|_| VERTEX_DURATION),
            Easing::EaseOut,
            StepTarget::Vertex,
        );

        let drawn = vertices
            .iter()
            .map(AnimationStep::end)
            .fold(outline.end().max(facets_done), f64::max);
        let core = AnimationStep::new(StepTarget::Core, drawn, PULSE_PERIOD, Easing::EaseInOut).looping();

        Self {
            outline,
            facets,
            vertices,
            core,
            pulse: CorePulse::new(shape.core_radius()),
        }
    }

    pub fn outline(&self) -> &AnimationStep {
        &self.outline
    }

    pub fn facets(&self) -> &[AnimationStep] {
        &self.facets
    }

    pub fn vertices(&self) -> &[AnimationStep] {
        &self.vertices
    }

    pub fn core(&self) -> &AnimationStep {
        &self.core
    }

    pub fn pulse(&self) -> &CorePulse {
        &self.pulse
    }

    /// All steps in draw order.
    pub fn steps(&self) -> impl Iterator<Item = &AnimationStep> {
        std::iter::once(&self.outline)
            .chain(self.facets.iter())
            .chain(self.vertices.iter())
            .chain(std::iter::once(&self.core))
    }

    /// Moment the static shape is complete and the pulse takes over.
    pub fn drawn_at(&self) -> f64 {
        self.core.delay
    }
}

// ============================================================================
// 6. Ambient loops
// ============================================================================

pub const SHARD_ENTRANCE_DURATION: f64 = 1.2;
/// Shards that enter later also drift more slowly.
pub fn drift_duration(entrance_delay: f64) -> f64 {
    6.0 + 2.0 * entrance_delay
}

/// Bob-and-tilt loop of a hero shard.
pub fn shard_drift(entrance_delay: f64) -> AnimationStep {
    AnimationStep::new(
        StepTarget::Item(0),
        0.0,
        drift_duration(entrance_delay),
        Easing::EaseInOut,
    )
    .looping()
}

pub const BOLT_FLASH: f64 = 3.0;
pub const BOLT_REST: f64 = 2.0;

/// Energy bolt flicker: a 3s flash followed by a 2s rest, forever.
pub fn bolt_flicker(index: usize, delay: f64) -> AnimationStep {
    AnimationStep::new(StepTarget::Item(index), delay, BOLT_FLASH + BOLT_REST, Easing::Linear).looping()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ShardSize, BRAND_PALETTE};

    #[test]
    fn test_stagger_start_times() {
        let stagger = Stagger::new(0.4, 0.15);
        let steps = stagger.stage([0.8; 6], Easing::Emerge, StepTarget::Item);
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.delay, 0.4 + i as f64 * 0.15);
            assert_eq!(step.target, StepTarget::Item(i));
        }
        assert!(steps.windows(2).all(|w| w[0].delay <= w[1].delay));
    }

    #[test]
    fn test_zero_stagger_is_non_decreasing() {
        let steps = Stagger::new(1.0, 0.0).stage([0.3, 0.1, 0.7], Easing::Linear, StepTarget::Item);
        assert!(steps.iter().all(|s| s.delay == 1.0));
        assert_eq!(steps[2].end(), 1.7);
    }

    #[test]
    fn test_crystal_draw_order() {
        let shape = ShardSize::Large.shape(BRAND_PALETTE);
        let seq = CrystalSequence::for_shape(&shape, 0.2);

        assert_eq!(seq.outline().delay, 0.2);
        assert_eq!(seq.outline().duration, OUTLINE_DURATION);
        assert_eq!(seq.facets().len(), shape.facets().len());
        assert_eq!(seq.vertices().len(), 6);

        let first_facet = seq.facets()[0].delay;
        assert!(seq.outline().delay < first_facet);
        for (i, facet) in seq.facets().iter().enumerate() {
            assert_eq!(facet.delay, (0.2 + FACET_LEAD) + i as f64 * FACET_STAGGER);
        }

        let last_facet_end = seq.facets().last().map(AnimationStep::end).unwrap();
        assert!(seq.vertices().iter().all(|v| v.delay >= last_facet_end));
        assert!(seq.vertices().iter().all(|v| v.end() <= seq.drawn_at()));
        assert!(seq.outline().end() <= seq.drawn_at());

        let delays: Vec<f64> = seq.steps().map(|s| s.delay).collect();
        assert!(delays.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_core_pulse_loops() {
        let shape = ShardSize::Small.shape(BRAND_PALETTE);
        let seq = CrystalSequence::for_shape(&shape, 0.0);
        assert_eq!(seq.core().target, StepTarget::Core);
        assert_eq!(seq.core().repeat_count(), "indefinite");
        assert_eq!(seq.outline().repeat_count(), "1");
        assert_eq!(seq.core().dur_attr(), "3s");
    }

    #[test]
    fn test_pulse_keyframes_close_the_loop() {
        let pulse = CorePulse::new(10.0);
        let radii: Vec<String> = pulse.radius_values().split(';').map(str::to_string).collect();
        assert_eq!(radii.len(), 9);
        assert_eq!(radii.first(), radii.last());
        assert_eq!(radii[0], "10");
        assert_eq!(radii[2], "13.5");
        assert_eq!(radii[6], "6.5");

        let opacity: Vec<String> = pulse.opacity_values().split(';').map(str::to_string).collect();
        assert_eq!(opacity[0], "0.6");
        assert_eq!(opacity[2], "0.85");
        assert_eq!(opacity[6], "0.35");
    }

    #[test]
    fn test_sequence_is_stable_across_mounts() {
        let shape = ShardSize::Medium.shape(BRAND_PALETTE);
        assert_eq!(
            CrystalSequence::for_shape(&shape, 0.5),
            CrystalSequence::for_shape(&ShardSize::Medium.shape(BRAND_PALETTE), 0.5)
        );
    }

    #[test]
    fn test_ambient_loops() {
        assert_eq!(drift_duration(0.0), 6.0);
        assert_eq!(drift_duration(1.5), 9.0);
        let drift = shard_drift(0.5);
        assert_eq!(drift.duration, 7.0);
        assert_eq!(drift.repeat, Repeat::Forever);
        assert!(drift.animation_style().ends_with("animation-iteration-count:infinite"));

        let bolt = bolt_flicker(1, 2.0);
        assert_eq!(bolt.begin_attr(), "2s");
        assert_eq!(bolt.dur_attr(), "5s");
    }

    #[test]
    fn test_css_strings() {
        assert_eq!(Easing::Emerge.css(), "cubic-bezier(0.16, 1, 0.3, 1)");
        assert_eq!(Easing::EaseInOut.key_splines(), "0.42 0 0.58 1");

        let step = CARD_STAGGER.item(2, CARD_DURATION, Easing::Emerge);
        assert_eq!(
            step.transition_style(),
            "transition-duration:0.8s;transition-delay:0.3s;transition-timing-function:cubic-bezier(0.16, 1, 0.3, 1)"
        );
        assert_eq!(step.begin_attr(), "0.3s");
    }
}
