//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's `config.toml` in the content directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! owner = "Rihan"
//! tagline = "Shaping Ideas into Real Projects that Deliver Results"
//! contact_href = "#contact"
//! year = 2025
//! assets_dir = "assets"
//!
//! [colors]
//! background = "#000000"
//! text = "#ffffff"
//! text_muted = "#d9ecff"
//! card = "#0e0e10"
//! border = "#282732"
//! accent = "#cd7c2e"
//!
//! [animation]
//! section_fade = 1.5        # Seconds for the mount fade of the work section
//! card_duration = 1.0       # Seconds for each card entrance
//! card_offset = 50.0        # Pixels a card rises while entering
//! stagger = 0.3             # Seconds added to each successive card's delay
//! trigger_offset = 100.0    # Pixels above the viewport bottom that trigger a card
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [colors]
//! accent = "#4f7cff"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page metadata and owner details.
    pub site: SiteInfo,
    /// Color palette injected as CSS custom properties.
    pub colors: ColorConfig,
    /// Entrance animation timings.
    pub animation: AnimationConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        for (name, value) in [
            ("section_fade", anim.section_fade),
            ("card_duration", anim.card_duration),
            ("stagger", anim.stagger),
            ("trigger_offset", anim.trigger_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!(
                    "animation.{name} must be a non-negative number"
                )));
            }
        }
        if !anim.card_offset.is_finite() {
            return Err(ConfigError::Validation(
                "animation.card_offset must be a finite number".into(),
            ));
        }
        for (name, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must not be empty"
                )));
            }
        }
        if self.site.assets_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.assets_dir must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Document `<title>`.
    pub title: String,
    /// Name shown in the navbar logo and the footer copyright line.
    pub owner: String,
    /// Hero sub-headline.
    pub tagline: String,
    /// Target of the navbar contact button.
    pub contact_href: String,
    /// Copyright year in the footer.
    pub year: u16,
    /// Directory (relative to the content root) copied verbatim to the output root.
    pub assets_dir: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            owner: "Rihan".to_string(),
            tagline: "Shaping Ideas into Real Projects that Deliver Results".to_string(),
            contact_href: "#contact".to_string(),
            year: 2025,
            assets_dir: "assets".to_string(),
        }
    }
}

/// Site palette.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub text: String,
    /// Secondary text (descriptions, dates, captions).
    pub text_muted: String,
    /// Card and panel background.
    pub card: String,
    pub border: String,
    /// Highlight color (counters, marker dots, buttons).
    pub accent: String,
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 6] {
        [
            ("background", self.background.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("card", self.card.as_str()),
            ("border", self.border.as_str()),
            ("accent", self.accent.as_str()),
        ]
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "#000000".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#d9ecff".to_string(),
            card: "#0e0e10".to_string(),
            border: "#282732".to_string(),
            accent: "#cd7c2e".to_string(),
        }
    }
}

/// Entrance animation timings. Durations and delays are in seconds,
/// distances in CSS pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Mount fade of the whole work section.
    pub section_fade: f32,
    /// Entrance duration of each card.
    pub card_duration: f32,
    /// Vertical distance a card travels while entering.
    pub card_offset: f32,
    /// Delay increment between successive cards; card `i` waits `stagger * (i + 1)`.
    pub stagger: f32,
    /// How far above the viewport bottom a card's top edge must rise to play.
    pub trigger_offset: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            section_fade: 1.5,
            card_duration: 1.0,
            card_offset: 50.0,
            stagger: 0.3,
            trigger_offset: 100.0,
        }
    }
}

// =============================================================================
// Layering
// =============================================================================
//
// A content directory's `config.toml` is sparse. It is laid over the stock
// settings as a TOML table first, and only the combined table is
// deserialized, so `deny_unknown_fields` still sees every user key.

/// Name of the settings file inside the content directory.
pub const CONFIG_FILENAME: &str = "config.toml";

/// The stock settings as a TOML table: the bottom layer of every config.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Lay `overlay` over `base`.
///
/// Where both sides hold a table the two combine key by key, recursively.
/// Anywhere else the overlay value wins as is, tables included.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    let (mut under, over) = match (base, overlay) {
        (toml::Value::Table(under), toml::Value::Table(over)) => (under, over),
        (_, overlay) => return overlay,
    };
    for (key, value) in over {
        match under.get_mut(&key) {
            Some(slot) => {
                let below = std::mem::replace(slot, toml::Value::Boolean(false));
                *slot = merge_toml(below, value);
            }
            None => {
                under.insert(key, value);
            }
        }
    }
    toml::Value::Table(under)
}

/// Read the user's `config.toml` from the content directory, unparsed into
/// settings. `None` when the directory has no such file.
pub fn load_raw_config(root: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let text = match fs::read_to_string(root.join(CONFIG_FILENAME)) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(Some(toml::from_str(&text)?))
}

/// Turn a layered table into checked settings.
///
/// `user` goes over `base` when present. Unknown keys surface as
/// [`ConfigError::Toml`], out-of-range values as [`ConfigError::Validation`].
pub fn resolve_config(
    base: toml::Value,
    user: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let layered = user.into_iter().fold(base, merge_toml);
    let config: SiteConfig = layered.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Settings for the content directory at `root`: its `config.toml` over the
/// stock defaults, checked. A directory without the file gets the defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config = resolve_config(stock_defaults_value(), load_raw_config(root)?)?;
    tracing::debug!(title = %config.site.title, "config resolved");
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Configuration
# ===================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to content.toml in the content directory.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site
# ---------------------------------------------------------------------------
[site]
# Document title.
title = "Portfolio"

# Shown in the navbar logo and the footer copyright line.
owner = "Rihan"

# Hero sub-headline.
tagline = "Shaping Ideas into Real Projects that Deliver Results"

# Where the navbar contact button points.
contact_href = "#contact"

# Copyright year in the footer.
year = 2025

# Directory copied verbatim to the output root (images, models, fonts).
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Colors
# ---------------------------------------------------------------------------
[colors]
background = "#000000"
text = "#ffffff"
text_muted = "#d9ecff"    # Descriptions, dates, captions
card = "#0e0e10"          # Card and panel background
border = "#282732"
accent = "#cd7c2e"        # Counters, timeline dots, buttons

# ---------------------------------------------------------------------------
# Entrance animations (seconds / CSS pixels)
# ---------------------------------------------------------------------------
[animation]
# Mount fade of the work section.
section_fade = 1.5

# Duration of each card entrance.
card_duration = 1.0

# Distance a card rises while entering.
card_offset = 50.0

# Card i starts after stagger * (i + 1) seconds.
stagger = 0.3

# A card plays once its top edge is this far above the viewport bottom.
trigger_offset = 100.0
"##
}

/// Generate CSS custom properties from the palette.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {background};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-card: {card};
    --color-border: {border};
    --color-accent: {accent};
}}"#,
        background = colors.background,
        text = colors.text,
        text_muted = colors.text_muted,
        card = colors.card,
        border = colors.border,
        accent = colors.accent,
    )
}
