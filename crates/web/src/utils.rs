// =============================================================================
// XYVOX Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// =============================================================================

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Current vertical scroll offset of the page, `0.0` outside a browser.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}
