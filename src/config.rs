//! Site configuration module.
//!
//! Handles loading, validating, and merging `blog.toml`. The file lives in the
//! site directory; every key is optional and overrides the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My Blog"
//! description = "Notes and essays"
//! author = "Anonymous"
//! path = ""                      # Base path posts are served under
//! lang = "en-US"
//! # since = 2019                 # First year shown in the footer
//! show_about = true              # Include the About entry in the nav bar
//! auto_collapsed_nav_bar = false # Pin the nav bar once the page scrolls
//! show_tags = false              # Render tag chips on post cards
//! tagline = "A minimalist blog."
//!
//! [profiles]
//! # github = "https://github.com/you"
//! # email = "mailto:you@example.com"
//! # chat = "weixin://"
//! # social = "https://twitter.com/you"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the site directory.
pub const CONFIG_FILE: &str = "blog.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `blog.toml`.
///
/// Read-only for the lifetime of a render. All fields have defaults, so a
/// user file only needs the values it wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site title, shown in the header identity block and the footer.
    pub title: String,
    /// Short description shown after the title in the header.
    pub description: String,
    /// Author name, shown large on the landing page.
    pub author: String,
    /// Base path posts are served under (`""` means the site root).
    pub path: String,
    /// Value of the `<html lang>` attribute.
    pub lang: String,
    /// First year of the copyright range in the footer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<i32>,
    /// Whether the About entry appears in the navigation bar.
    pub show_about: bool,
    /// Whether the nav bar pins itself once the sentinel scrolls out of view.
    pub auto_collapsed_nav_bar: bool,
    /// Whether post cards render their tag chips.
    pub show_tags: bool,
    /// Static tagline under the profile links on the landing page.
    pub tagline: String,
    /// External profile links on the landing page.
    pub profiles: ProfileLinks,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            description: "Notes and essays".to_string(),
            author: "Anonymous".to_string(),
            path: String::new(),
            lang: "en-US".to_string(),
            since: None,
            show_about: true,
            auto_collapsed_nav_bar: false,
            show_tags: false,
            tagline: "A minimalist blog.".to_string(),
            profiles: ProfileLinks::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        if let Some(since) = self.since {
            let this_year = chrono::Local::now().year();
            if since > this_year {
                return Err(ConfigError::Validation(format!(
                    "since ({since}) must not be later than the current year ({this_year})"
                )));
            }
        }
        Ok(())
    }

    /// Target of the Index nav entry: the configured base path, or `/`.
    pub fn index_path(&self) -> &str {
        if self.path.is_empty() { "/" } else { &self.path }
    }

    /// URL of a post page under the configured base path.
    pub fn post_href(&self, slug: &str) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), slug)
    }
}

/// External profile links on the landing page.
///
/// Rendered in a fixed order: code hosting, email, chat, social. Absent
/// entries are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileLinks {
    /// Code-hosting profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// `mailto:` link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// App URI scheme for the chat handoff (e.g. `weixin://`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<String>,
    /// Social profile URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `blog.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `blog.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let overlay = load_raw_config(dir)?;
    if overlay.is_none() {
        tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE} found, using defaults");
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `blog.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# blog-chrome configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Site identity, shown in the header and the footer.
title = "My Blog"
description = "Notes and essays"
author = "Anonymous"

# Base path posts are served under. Empty means the site root; the Index
# nav entry then points at "/".
path = ""

# Value of the <html lang> attribute.
lang = "en-US"

# First year of the footer copyright range ("© Title 2019-2026").
# since = 2019

# Include the About entry in the navigation bar.
show_about = true

# Pin the nav bar to the top of the viewport once the page scrolls past
# the header. When false the nav bar scrolls away with the page.
auto_collapsed_nav_bar = false

# Render tag chips on post cards.
show_tags = false

# Static line under the profile links on the landing page.
tagline = "A minimalist blog."

# ---------------------------------------------------------------------------
# Landing-page profile links, rendered in this order when present.
# ---------------------------------------------------------------------------
[profiles]
# github = "https://github.com/you"
# email = "mailto:you@example.com"
# App URI scheme opened by the chat button.
# chat = "weixin://"
# social = "https://twitter.com/you"
"##
}
