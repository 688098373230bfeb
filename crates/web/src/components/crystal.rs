// =============================================================================
// XYVOX Web - Crystal SVG
// =============================================================================
// Renders a ShapeSpec with its CrystalSequence as SMIL animations.
// The SVG is only inserted once revealed, so every `begin` offset counts
// from the reveal and unmounting the SVG stops the looping core pulse.
// =============================================================================

use leptos::prelude::*;
use xyvox_common::geometry::svg_number;
use xyvox_common::sequence::AnimationStep;
use xyvox_common::{CrystalSequence, Palette, ShapeSpec, BRAND_PALETTE};

/// Line-drawn crystal that materializes when `revealed` turns true.
#[component]
pub fn Crystal(
    width: f64,
    height: f64,
    #[prop(into)] revealed: Signal<bool>,
    #[prop(default = BRAND_PALETTE)] palette: Palette,
    /// Offset of the whole sequence from the reveal, in seconds.
    #[prop(default = 0.0)]
    delay: f64,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    // Computed once per instance
    let shape = ShapeSpec::crystal(width, height, palette);
    let sequence = CrystalSequence::for_shape(&shape, delay);
    let size = format!(
        "width:{}px;height:{}px",
        svg_number(shape.width()),
        svg_number(shape.height())
    );

    view! {
        <div class=format!("crystal {}", class) style=size>
            {move || revealed.get().then(|| crystal_svg(&shape, &sequence))}
        </div>
    }
}

fn crystal_svg(shape: &ShapeSpec, sequence: &CrystalSequence) -> impl IntoView {
    let palette = shape.palette();
    let outline = *sequence.outline();
    let core = *sequence.core();
    let pulse = *sequence.pulse();
    let center = shape.center();

    let facets = shape
        .facets()
        .iter()
        .zip(sequence.facets())
        .map(|(segment, step)| {
            view! {
                <path
                    d=segment.path()
                    class="crystal-facet"
                    stroke=palette.accent
                    pathLength="1"
                    stroke-dasharray="1"
                    stroke-dashoffset="1"
                >
                    {draw_on(step)}
                </path>
            }
        })
        .collect_view();

    let vertices = shape
        .vertices()
        .iter()
        .zip(sequence.vertices())
        .map(|(point, step)| {
            view! {
                <circle
                    cx=svg_number(point.x)
                    cy=svg_number(point.y)
                    r="1.5"
                    fill=palette.accent
                    opacity="0"
                >
                    <animate
                        attributeName="opacity"
                        from="0"
                        to="1"
                        begin=step.begin_attr()
                        dur=step.dur_attr()
                        fill="freeze"
                    />
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg
            class="crystal-svg"
            viewBox=shape.view_box()
            fill="none"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path
                d=shape.outline_path()
                class="crystal-outline"
                stroke=palette.primary
                fill=palette.primary
                fill-opacity="0.06"
                pathLength="1"
                stroke-dasharray="1"
                stroke-dashoffset="1"
            >
                {draw_on(&outline)}
            </path>
            {facets}
            {vertices}
            <circle
                cx=svg_number(center.x)
                cy=svg_number(center.y)
                r=svg_number(pulse.base_radius)
                class="crystal-core"
                fill=palette.primary
                opacity="0"
            >
                <animate
                    attributeName="r"
                    values=pulse.radius_values()
                    begin=core.begin_attr()
                    dur=core.dur_attr()
                    repeatCount=core.repeat_count()
                />
                <animate
                    attributeName="opacity"
                    values=pulse.opacity_values()
                    begin=core.begin_attr()
                    dur=core.dur_attr()
                    repeatCount=core.repeat_count()
                />
            </circle>
        </svg>
    }
}

/// Stroke draw-on: dash offset 1 -> 0 along a unit path length.
fn draw_on(step: &AnimationStep) -> impl IntoView {
    view! {
        <animate
            attributeName="stroke-dashoffset"
            from="1"
            to="0"
            begin=step.begin_attr()
            dur=step.dur_attr()
            calcMode="spline"
            keyTimes="0;1"
            keySplines=step.easing.key_splines()
            repeatCount=step.repeat_count()
            fill="freeze"
        />
    }
}
