//! Favicon selection with load-error fallback.
//!
//! The dark icon is used only while the theme is dark and no load error has
//! been seen. A load error latches the fallback for the rest of the owning
//! component's life: later theme toggles keep the default icon. A fresh
//! [`FaviconState`] (i.e. a remount) starts clean again.

use crate::theme::Theme;

pub const DEFAULT_FAVICON: &str = "/favicon.png";
pub const DARK_FAVICON: &str = "/favicon.dark.png";

/// Pick the icon path for a theme, honoring a prior load error.
pub fn resolve_favicon(dark_mode: bool, had_error: bool) -> &'static str {
    if dark_mode && !had_error {
        DARK_FAVICON
    } else {
        DEFAULT_FAVICON
    }
}

/// Per-component favicon state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaviconState {
    dark_mode: bool,
    had_load_error: bool,
}

impl FaviconState {
    pub fn new(theme: Theme) -> Self {
        Self {
            dark_mode: theme.dark,
            had_load_error: false,
        }
    }

    /// Current icon path.
    pub fn path(&self) -> &'static str {
        resolve_favicon(self.dark_mode, self.had_load_error)
    }

    pub fn using_fallback(&self) -> bool {
        self.had_load_error
    }

    /// Re-evaluate after a theme toggle.
    pub fn set_theme(&mut self, theme: Theme) {
        self.dark_mode = theme.dark;
    }

    /// Record an image load failure. Never surfaces as an error.
    pub fn on_load_error(&mut self) {
        if !self.had_load_error {
            tracing::debug!(
                failed = self.path(),
                fallback = DEFAULT_FAVICON,
                "favicon failed to load, switching to fallback"
            );
        }
        self.had_load_error = true;
    }
}
