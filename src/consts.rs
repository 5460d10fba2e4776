//! Shared defaults for the page behaviours.

// ── Viewport ────────────────────────────────────────────────────

/// Distance in pixels above the viewport's bottom edge that an
/// `.animate-on-scroll` element's top must cross before it is revealed.
pub const REVEAL_MARGIN_PX: f64 = 50.0;

/// Height of the fixed site header; anchor scrolling stops this far above
/// the target.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Upper share of the viewport in which cards and the statistics block count
/// as visible.
pub const VISIBLE_FRACTION: f64 = 0.8;

// ── Counter ─────────────────────────────────────────────────────

/// Total time a counter takes to reach its target.
pub const COUNTER_DURATION_MS: u32 = 2000;

/// Lower bound on the counter tick interval.
pub const COUNTER_MIN_TICK_MS: u32 = 10;

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute on `<html>` reflecting the applied theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting the platform colour-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Class names ─────────────────────────────────────────────────

pub const ANIMATE_VISIBLE_CLASS: &str = "animate-visible";
pub const FADE_IN_CLASS: &str = "fade-in";
pub const TIME_HELP_CLASS: &str = "form-text text-muted mt-1";
pub const ICON_SUN_CLASS: &str = "bi-sun";
pub const ICON_MOON_CLASS: &str = "bi-moon";

// ── Selectors ───────────────────────────────────────────────────

pub const DATE_INPUT_ID: &str = "id_date";
pub const TIME_INPUT_ID: &str = "id_time";
pub const TIME_HELP_ID: &str = "time-help";
pub const FORM_SELECTOR: &str = "form";
pub const ANIMATE_SELECTOR: &str = ".animate-on-scroll";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const CARD_SELECTOR: &str = ".card";
pub const STATS_SECTION_SELECTOR: &str = ".stats-section";
pub const COUNTER_SELECTOR: &str = ".counter";
pub const COUNTER_TARGET_ATTRIBUTE: &str = "data-target";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ICON_ID: &str = "theme-icon";
pub const THEME_TEXT_ID: &str = "theme-text";
pub const SITE_CONFIG_ID: &str = "site-config";
