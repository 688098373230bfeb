//! # Crystal Geometry
//!
//! Builds the hexagonal "crystal" silhouette used by the hero shards and the
//! technology tiles. Everything is derived from a bounding width/height, so the
//! same shape scales from a 40px tile glyph to a 256px hero shard.
//!
//! ## Layout
//! ```text
//!              v0 (apex)
//!             /  |  \
//!   v5 ------+---a1---+------ v1      upper girdle
//!      \     |   |   |     /
//!       \    |   c   |    /
//!   v4 ------+---a2---+------ v2      lower girdle
//!             \  |  /
//!              v3 (base)
//! ```
//!
//! ## Table of Contents
//! 1. Primitives (Point, Segment, Palette)
//! 2. Outline and facet tables
//! 3. ShapeSpec
//! 4. Shard presets
//! 5. SVG number formatting

use std::fmt::Write as _;

// ============================================================================
// 1. Primitives
// ============================================================================

/// A point in SVG user space (origin top-left, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A straight facet line between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    /// SVG path data (`M x y L x y`) for this segment.
    pub fn path(&self) -> String {
        format!(
            "M{} {} L{} {}",
            svg_number(self.from.x),
            svg_number(self.from.y),
            svg_number(self.to.x),
            svg_number(self.to.y)
        )
    }

    pub fn length(&self) -> f64 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// Stroke colors for one crystal. `primary` draws the outline and core,
/// `accent` draws the facets and vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    pub accent: &'static str,
}

impl Palette {
    pub const fn new(primary: &'static str, accent: &'static str) -> Self {
        Self { primary, accent }
    }
}

/// Brand violet outline with cyan refraction lines.
pub const BRAND_PALETTE: Palette = Palette::new("#8b5cf6", "#00dcff");

// ============================================================================
// 2. Outline and facet tables
// ============================================================================

/// Outline vertices as fractions of (width, height), clockwise from the apex.
pub const OUTLINE_FRACTIONS: [(f64, f64); 6] = [
    (0.5, 0.0),
    (0.95, 0.28),
    (0.82, 0.72),
    (0.5, 1.0),
    (0.18, 0.72),
    (0.05, 0.28),
];

/// Endpoint of a facet: an outline vertex, or a point on the vertical axis
/// given as a fraction of the height.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Vertex(usize),
    Axis(f64),
}

/// Hand-authored refraction lines, in draw order.
const FACETS: [(Anchor, Anchor); 7] = [
    (Anchor::Vertex(5), Anchor::Vertex(1)),
    (Anchor::Vertex(4), Anchor::Vertex(2)),
    (Anchor::Vertex(0), Anchor::Vertex(3)),
    (Anchor::Vertex(5), Anchor::Axis(0.72)),
    (Anchor::Vertex(1), Anchor::Axis(0.72)),
    (Anchor::Vertex(4), Anchor::Axis(0.28)),
    (Anchor::Vertex(2), Anchor::Axis(0.28)),
];

// ============================================================================
// 3. ShapeSpec
// ============================================================================

/// Geometry for one crystal, computed once from its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeSpec {
    width: f64,
    height: f64,
    vertices: [Point; 6],
    facets: Vec<Segment>,
    palette: Palette,
}

impl ShapeSpec {
    /// Compute a crystal inside a `width` x `height` box.
    ///
    /// Non-finite, zero or negative dimensions are clamped to zero, which
    /// collapses the whole shape onto the origin instead of overflowing.
    pub fn crystal(width: f64, height: f64, palette: Palette) -> Self {
        let width = clamp_dimension("width", width);
        let height = clamp_dimension("height", height);

        let vertices = OUTLINE_FRACTIONS.map(|(fx, fy)| Point::new(fx * width, fy * height));

        let resolve = |anchor: Anchor| match anchor {
            Anchor::Vertex(i) => vertices[i],
            Anchor::Axis(fy) => Point::new(0.5 * width, fy * height),
        };

        let facets = FACETS
            .iter()
            .map(|&(from, to)| Segment {
                from: resolve(from),
                to: resolve(to),
            })
            .collect();

        Self {
            width,
            height,
            vertices,
            facets,
            palette,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// The six outline vertices, clockwise from the apex.
    pub fn vertices(&self) -> &[Point; 6] {
        &self.vertices
    }

    /// Internal facet lines in draw order.
    pub fn facets(&self) -> &[Segment] {
        &self.facets
    }

    /// Centre of the crystal, where the pulsing core sits.
    pub fn center(&self) -> Point {
        Point::new(0.5 * self.width, 0.5 * self.height)
    }

    /// Resting radius of the core glow.
    pub fn core_radius(&self) -> f64 {
        0.06 * self.width.min(self.height)
    }

    /// Closed outline as SVG path data.
    pub fn outline_path(&self) -> String {
        let mut d = String::with_capacity(96);
        for (i, p) in self.vertices.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{} {} ", cmd, svg_number(p.x), svg_number(p.y));
        }
        d.push('Z');
        d
    }

    /// `viewBox` attribute matching the bounding box.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", svg_number(self.width), svg_number(self.height))
    }

    /// Whether `p` lies inside the bounding box (edges inclusive).
    pub fn contains(&self, p: &Point) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

fn clamp_dimension(name: &str, value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        log::warn!("crystal {} {} is not positive, collapsing to 0", name, value);
        0.0
    }
}

/// CSS `clip-path` polygon tracing the same silhouette in percentages.
pub fn clip_path_polygon() -> String {
    let points: Vec<String> = OUTLINE_FRACTIONS
        .iter()
        .map(|(fx, fy)| format!("{}% {}%", svg_number(fx * 100.0), svg_number(fy * 100.0)))
        .collect();
    format!("polygon({})", points.join(", "))
}

// ============================================================================
// 4. Shard presets
// ============================================================================

/// Sizes used by the hero arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShardSize {
    Large,
    Medium,
    Small,
}

impl ShardSize {
    /// Bounding box in CSS pixels (desktop breakpoint).
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            ShardSize::Large => (176.0, 256.0),
            ShardSize::Medium => (112.0, 176.0),
            ShardSize::Small => (64.0, 112.0),
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            ShardSize::Large => "shard-large",
            ShardSize::Medium => "shard-medium",
            ShardSize::Small => "shard-small",
        }
    }

    pub fn shape(self, palette: Palette) -> ShapeSpec {
        let (w, h) = self.dimensions();
        ShapeSpec::crystal(w, h, palette)
    }
}

// ============================================================================
// 5. SVG number formatting
// ============================================================================

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn svg_number(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn test_outline_vertices_follow_fractions() {
        let shape = ShapeSpec::crystal(200.0, 100.0, BRAND_PALETTE);
        let v = shape.vertices();
        assert!(close(v[0], Point::new(100.0, 0.0)));
        assert!(close(v[1], Point::new(190.0, 28.0)));
        assert!(close(v[2], Point::new(164.0, 72.0)));
        assert!(close(v[3], Point::new(100.0, 100.0)));
        assert!(close(v[4], Point::new(36.0, 72.0)));
        assert!(close(v[5], Point::new(10.0, 28.0)));
        assert!(close(shape.center(), Point::new(100.0, 50.0)));
    }

    #[test]
    fn test_geometry_stays_inside_bounds() {
        let dims = [0.5, 1.0, 3.0, 17.25, 64.0, 112.0, 333.3, 1920.0, 1.0e6];
        for &w in &dims {
            for &h in &dims {
                let shape = ShapeSpec::crystal(w, h, BRAND_PALETTE);
                for p in shape.vertices() {
                    assert!(shape.contains(p), "vertex {:?} outside {}x{}", p, w, h);
                }
                for s in shape.facets() {
                    assert!(shape.contains(&s.from), "facet start {:?} outside {}x{}", s.from, w, h);
                    assert!(shape.contains(&s.to), "facet end {:?} outside {}x{}", s.to, w, h);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_input_collapses() {
        for (w, h) in [(0.0, 10.0), (-5.0, 10.0), (10.0, f64::NAN), (f64::INFINITY, 4.0)] {
            let shape = ShapeSpec::crystal(w, h, BRAND_PALETTE);
            assert!(shape.width() >= 0.0 && shape.height() >= 0.0);
            for p in shape.vertices() {
                assert!(shape.contains(p));
            }
        }
        let flat = ShapeSpec::crystal(-1.0, -1.0, BRAND_PALETTE);
        assert!(flat.vertices().iter().all(|p| *p == Point::new(0.0, 0.0)));
        assert_eq!(flat.core_radius(), 0.0);
    }

    #[test]
    fn test_outline_path_is_closed() {
        let shape = ShapeSpec::crystal(100.0, 100.0, BRAND_PALETTE);
        assert_eq!(
            shape.outline_path(),
            "M50 0 L95 28 L82 72 L50 100 L18 72 L5 28 Z"
        );
        assert_eq!(shape.view_box(), "0 0 100 100");
    }

    #[test]
    fn test_facets_hit_the_axis() {
        let shape = ShapeSpec::crystal(80.0, 120.0, BRAND_PALETTE);
        assert_eq!(shape.facets().len(), 7);
        let spine = shape.facets()[2];
        assert_eq!(spine.from, Point::new(40.0, 0.0));
        assert_eq!(spine.to, Point::new(40.0, 120.0));
        assert!((spine.length() - 120.0).abs() < 1e-9);
        assert_eq!(shape.facets()[3].path(), "M4 33.6 L40 86.4");
    }

    #[test]
    fn test_same_input_same_shape() {
        let a = ShardSize::Medium.shape(BRAND_PALETTE);
        let b = ShardSize::Medium.shape(BRAND_PALETTE);
        assert_eq!(a, b);
        assert_eq!(a.outline_path(), b.outline_path());
    }

    #[test]
    fn test_clip_path_polygon() {
        assert_eq!(
            clip_path_polygon(),
            "polygon(50% 0%, 95% 28%, 82% 72%, 50% 100%, 18% 72%, 5% 28%)"
        );
    }

    #[test]
    fn test_svg_number_trims() {
        assert_eq!(svg_number(12.0), "12");
        assert_eq!(svg_number(12.5), "12.5");
        assert_eq!(svg_number(1.0 / 3.0), "0.33");
        assert_eq!(svg_number(-0.001), "0");
    }
}
