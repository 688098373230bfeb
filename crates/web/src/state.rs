// =============================================================================
// XYVOX Web - Site State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Site State
// 3. Bootstrap
// =============================================================================

use xyvox_common::SiteConfig;

// -----------------------------------------------------------------------------
// 2. Site State
// -----------------------------------------------------------------------------

/// Read-only site state provided via Leptos context.
///
/// Sections keep their own transient UI state; nothing here is mutated
/// after mount.
#[derive(Clone, Debug, Default)]
pub struct SiteState {
    /// Parsed `site.toml`.
    pub config: SiteConfig,
}

// -----------------------------------------------------------------------------
// 3. Bootstrap
// -----------------------------------------------------------------------------

impl SiteState {
    /// Install the panic hook and console logger, then load configuration.
    ///
    /// The log level comes from the configuration itself, so the logger is
    /// installed before any configuration error is reported.
    pub fn bootstrap() -> Self {
        console_error_panic_hook::set_once();

        let parsed = SiteConfig::embedded();
        let level = parsed
            .as_ref()
            .map(SiteConfig::log_level)
            .unwrap_or(log::Level::Info);

        // Ignore if already initialized by an earlier mount
        let _ = console_log::init_with_level(level);

        let config = parsed.unwrap_or_else(|err| {
            log::warn!("{}, using defaults", err);
            SiteConfig::default()
        });

        Self { config }
    }
}
