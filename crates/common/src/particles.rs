//! # Ambient Particle Field
//!
//! Floating dots behind the hero crystals. Offsets come from a seeded
//! [`StdRng`] so a given seed always produces the same field.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Horizontal spread around the centre, in percent of the container.
pub const SPREAD_X: f64 = 30.0;
/// Vertical spread around the centre, in percent of the container.
pub const SPREAD_Y: f64 = 20.0;
/// Maximum sideways drift during one rise, in px.
pub const DRIFT_X: f64 = 20.0;
/// Vertical rise during one loop, in px.
pub const RISE: f64 = 80.0;
pub const PARTICLE_STAGGER: f64 = 0.5;
pub const PARTICLE_DURATION: f64 = 4.0;

/// One looping particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Offset from centre in percent, within `±SPREAD_X`.
    pub x: f64,
    /// Offset from centre in percent, within `±SPREAD_Y`.
    pub y: f64,
    /// Sideways travel in px, within `±DRIFT_X`.
    pub drift: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    /// Inline style positioning the particle and feeding the rise keyframes.
    pub fn style(&self) -> String {
        format!(
            "left:{:.2}%;top:{:.2}%;--drift-x:{:.2}px;--rise:-{}px;animation-delay:{}s;animation-duration:{}s",
            50.0 + self.x,
            50.0 + self.y,
            self.drift,
            RISE,
            self.delay,
            self.duration
        )
    }
}

/// Generate `count` particles from `seed`.
pub fn particle_field(seed: u64, count: usize) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| Particle {
            x: rng.gen_range(-SPREAD_X..SPREAD_X),
            y: rng.gen_range(-SPREAD_Y..SPREAD_Y),
            drift: rng.gen_range(-DRIFT_X..DRIFT_X),
            delay: i as f64 * PARTICLE_STAGGER,
            duration: PARTICLE_DURATION,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(particle_field(7, 12), particle_field(7, 12));
        assert_ne!(particle_field(7, 12), particle_field(8, 12));
    }

    #[test]
    fn test_particles_within_spread() {
        let field = particle_field(0x5859564F58, 200);
        assert_eq!(field.len(), 200);
        for p in &field {
            assert!(p.x.abs() <= SPREAD_X);
            assert!(p.y.abs() <= SPREAD_Y);
            assert!(p.drift.abs() <= DRIFT_X);
            assert_eq!(p.duration, PARTICLE_DURATION);
        }
        assert_eq!(field[3].delay, 1.5);
    }

    #[test]
    fn test_style_positions_from_centre() {
        let p = Particle {
            x: -10.0,
            y: 5.0,
            drift: 3.0,
            delay: 1.0,
            duration: 4.0,
        };
        assert_eq!(
            p.style(),
            "left:40.00%;top:55.00%;--drift-x:3.00px;--rise:-80px;animation-delay:1s;animation-duration:4s"
        );
    }
}
