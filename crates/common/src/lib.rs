//! # XYVOX Common
//!
//! Browser-free core of the XYVOX landing page: crystal geometry, animation
//! staging, reveal and navbar state machines, and the static content tables.
//! The `xyvox-web` crate renders these; everything here runs on the host
//! target so it can be tested without a browser.
//!
//! ## Table of Contents
//! 1. Geometry and staging
//! 2. UI state
//! 3. Content and configuration

// 1. Geometry and staging
pub mod geometry;
pub mod particles;
pub mod sequence;

// 2. UI state
pub mod media;
pub mod nav;
pub mod reveal;
pub mod style;

// 3. Content and configuration
pub mod config;
pub mod content;

pub use config::{ConfigError, SiteConfig};
pub use geometry::{Palette, Point, Segment, ShapeSpec, ShardSize, BRAND_PALETTE};
pub use media::ImageStatus;
pub use nav::{NavLink, NavState, NAV_LINKS};
pub use reveal::{RevealMargin, RevealState};
pub use sequence::{AnimationStep, CrystalSequence, Easing, Stagger};
