//! Sticky navigation state and sentinel observation.
//!
//! A zero-height sentinel sits directly above the nav bar. While it is inside
//! the viewport the nav bar is docked in the page flow; once it scrolls out the
//! nav bar is pinned in its full sticky form. With sticky behavior disabled the
//! bar is never pinned, whatever the intersection reports say.
//!
//! The host environment does the actual observing through the [`Viewport`]
//! trait. Registration is held by a [`SentinelWatch`] guard that deregisters on
//! drop, so mount/unmount cycles cannot leak observers.

use crate::config::SiteConfig;

/// Element id of the sentinel rendered above the nav bar.
pub const SENTINEL_ID: &str = "sticky-sentinel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyMode {
    Enabled,
    Disabled,
}

impl StickyMode {
    pub fn from_config(config: &SiteConfig) -> Self {
        if config.auto_collapsed_nav_bar {
            StickyMode::Enabled
        } else {
            StickyMode::Disabled
        }
    }

    /// Value of the nav bar's `data-sticky` attribute read by the page script.
    pub fn data_attr(self) -> &'static str {
        match self {
            StickyMode::Enabled => "auto",
            StickyMode::Disabled => "off",
        }
    }
}

/// How the render layer should draw the nav bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickyVisual {
    /// Enabled, sentinel still visible.
    Docked,
    /// Enabled, sentinel scrolled out.
    Full,
    /// Sticky behavior turned off.
    Removed,
}

impl StickyVisual {
    /// Extra class on the nav container, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            StickyVisual::Docked => None,
            StickyVisual::Full => Some("sticky-nav-full"),
            StickyVisual::Removed => Some("remove-sticky"),
        }
    }
}

/// One intersection report for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntersectionEntry {
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StickyNav {
    mode: StickyMode,
    is_sticky: bool,
}

impl StickyNav {
    pub fn new(mode: StickyMode) -> Self {
        Self {
            mode,
            is_sticky: false,
        }
    }

    pub fn mode(&self) -> StickyMode {
        self.mode
    }

    pub fn is_sticky(&self) -> bool {
        self.is_sticky
    }

    pub fn visual(&self) -> StickyVisual {
        match (self.mode, self.is_sticky) {
            (StickyMode::Disabled, _) => StickyVisual::Removed,
            (StickyMode::Enabled, true) => StickyVisual::Full,
            (StickyMode::Enabled, false) => StickyVisual::Docked,
        }
    }

    pub fn on_intersection(&mut self, entry: IntersectionEntry) {
        self.is_sticky = match self.mode {
            StickyMode::Enabled => !entry.is_intersecting,
            StickyMode::Disabled => false,
        };
    }
}

/// Handle for one registered intersection watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Host-side intersection observation.
///
/// Methods take `&self`: host handles (DOM observers, test doubles) manage
/// their own interior state.
pub trait Viewport {
    /// Start watching the element with the given id. `None` when the element
    /// does not exist.
    fn observe(&self, element_id: &str) -> Option<WatchId>;

    fn unobserve(&self, id: WatchId);
}

/// Registration of the sentinel watcher, released on drop.
pub struct SentinelWatch<'v, V: Viewport> {
    viewport: &'v V,
    id: WatchId,
}

impl<'v, V: Viewport> SentinelWatch<'v, V> {
    /// Register a watcher on the sentinel. A missing sentinel yields `None`.
    pub fn acquire(viewport: &'v V) -> Option<Self> {
        match viewport.observe(SENTINEL_ID) {
            Some(id) => {
                tracing::debug!(?id, "sentinel watcher registered");
                Some(Self { viewport, id })
            }
            None => {
                tracing::debug!("sentinel element missing, sticky nav not observed");
                None
            }
        }
    }

    pub fn id(&self) -> WatchId {
        self.id
    }
}

impl<V: Viewport> Drop for SentinelWatch<'_, V> {
    fn drop(&mut self) {
        self.viewport.unobserve(self.id);
        tracing::debug!(id = ?self.id, "sentinel watcher released");
    }
}
