//! Tunables and DOM selectors for the page behaviours.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults match the site's markup. A page may override any field by
//! embedding `<script type="application/json" id="site-config">{...}</script>`;
//! unknown keys are ignored and missing keys keep their defaults. A block
//! that fails to parse or validate is logged and the defaults are used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::ScriptError;

/// DOM contract with the page markup.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub date_input_id: String,
    pub time_input_id: String,
    pub time_help_id: String,
    pub form: String,
    pub animate: String,
    pub anchor: String,
    pub card: String,
    pub stats_section: String,
    pub counter: String,
    pub counter_target_attribute: String,
    pub theme_toggle_id: String,
    pub theme_icon_id: String,
    pub theme_text_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            date_input_id: consts::DATE_INPUT_ID.to_owned(),
            time_input_id: consts::TIME_INPUT_ID.to_owned(),
            time_help_id: consts::TIME_HELP_ID.to_owned(),
            form: consts::FORM_SELECTOR.to_owned(),
            animate: consts::ANIMATE_SELECTOR.to_owned(),
            anchor: consts::ANCHOR_SELECTOR.to_owned(),
            card: consts::CARD_SELECTOR.to_owned(),
            stats_section: consts::STATS_SECTION_SELECTOR.to_owned(),
            counter: consts::COUNTER_SELECTOR.to_owned(),
            counter_target_attribute: consts::COUNTER_TARGET_ATTRIBUTE.to_owned(),
            theme_toggle_id: consts::THEME_TOGGLE_ID.to_owned(),
            theme_icon_id: consts::THEME_ICON_ID.to_owned(),
            theme_text_id: consts::THEME_TEXT_ID.to_owned(),
        }
    }
}

/// Site-wide configuration shared by every unit.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub reveal_margin_px: f64,
    pub header_offset_px: f64,
    pub visible_fraction: f64,
    pub counter_duration_ms: u32,
    pub counter_min_tick_ms: u32,
    pub theme_storage_key: String,
    pub log_level: String,
    pub selectors: Selectors,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            reveal_margin_px: consts::REVEAL_MARGIN_PX,
            header_offset_px: consts::HEADER_OFFSET_PX,
            visible_fraction: consts::VISIBLE_FRACTION,
            counter_duration_ms: consts::COUNTER_DURATION_MS,
            counter_min_tick_ms: consts::COUNTER_MIN_TICK_MS,
            theme_storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            log_level: "info".to_owned(),
            selectors: Selectors::default(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns `ConfigParse` for malformed JSON and `InvalidConfig` when a
    /// value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ScriptError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<(), ScriptError> {
        if !(self.visible_fraction > 0.0 && self.visible_fraction <= 1.0) {
            return Err(ScriptError::InvalidConfig(format!(
                "visibleFraction must be in (0, 1], got {}",
                self.visible_fraction
            )));
        }
        if !self.reveal_margin_px.is_finite() || !self.header_offset_px.is_finite() {
            return Err(ScriptError::InvalidConfig("pixel offsets must be finite".to_owned()));
        }
        if self.counter_min_tick_ms == 0 {
            return Err(ScriptError::InvalidConfig("counterMinTickMs must be positive".to_owned()));
        }
        if self.theme_storage_key.trim().is_empty() {
            return Err(ScriptError::InvalidConfig("themeStorageKey must not be empty".to_owned()));
        }
        Ok(())
    }

    /// Console log level; unknown names fall back to `Info`.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.trim().parse().unwrap_or(log::Level::Info)
    }

    /// Read the override block from the current page. A page without one
    /// gets the defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error of a malformed block; the caller
    /// decides whether to fall back.
    #[cfg(feature = "hydrate")]
    pub fn from_page(document: &web_sys::Document) -> Result<Self, ScriptError> {
        match document.get_element_by_id(consts::SITE_CONFIG_ID).and_then(|el| el.text_content()) {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}
