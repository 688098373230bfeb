// =============================================================================
// XYVOX Web - Page Components
// =============================================================================
// The site is a single page; every other path lands on the not-found view.
// =============================================================================

pub mod home;
pub mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
