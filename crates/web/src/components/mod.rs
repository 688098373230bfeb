// =============================================================================
// XYVOX Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Building Blocks
// 2. Page Sections
// =============================================================================

// 1. Building Blocks
pub mod common;
pub mod crystal;
pub mod icons;
pub mod reveal;

// 2. Page Sections
pub mod ecosystem;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod tech_stack;

pub use common::{BrandMark, PreviewImage, SectionHeader};
pub use crystal::Crystal;
pub use ecosystem::Ecosystem;
pub use footer::Footer;
pub use hero::Hero;
pub use icons::IconSvg;
pub use nav::Navbar;
pub use reveal::{use_reveal, ObserverError, ViewportObserver};
pub use tech_stack::TechStack;
