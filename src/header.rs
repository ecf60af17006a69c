//! Site header: identity block, navigation bar, sticky behavior, click-to-top.
//!
//! [`Header`] owns the per-instance UI state (favicon and sticky flag) and
//! renders it. Interactive use goes through [`Header::mount`], which registers
//! the sentinel watcher with the host [`Viewport`] and hands back a
//! [`MountedHeader`]. Dropping the mounted header releases the watcher and
//! discards the state.

use crate::config::SiteConfig;
use crate::favicon::{DARK_FAVICON, DEFAULT_FAVICON, FaviconState};
use crate::locale::Locale;
use crate::nav::{build_nav_links, render_nav_bar};
use crate::sticky::{
    IntersectionEntry, SENTINEL_ID, SentinelWatch, StickyMode, StickyNav, StickyVisual, Viewport,
};
use crate::theme::Theme;
use maud::{Markup, PreEscaped, html};

/// Element id of the nav container.
pub const NAV_ID: &str = "sticky-nav";

const CARET_SVG: &str = r#"<svg viewBox="0 0 24 24" class="caret" aria-hidden="true"><path d="M12 10.828l-4.95 4.95-1.414-1.414L12 8l6.364 6.364-1.414 1.414z"/></svg>"#;

/// Where a click on the header landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The nav container element itself.
    NavContainer,
    /// The title paragraph itself.
    Title,
    /// Any descendant, e.g. a nav link or the favicon.
    Descendant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: u32,
    pub behavior: ScrollBehavior,
}

impl ScrollRequest {
    pub const TO_TOP: ScrollRequest = ScrollRequest {
        top: 0,
        behavior: ScrollBehavior::Smooth,
    };
}

/// Host-side window scrolling.
pub trait Scroller {
    fn scroll_to(&self, request: ScrollRequest);
}

/// Inputs of a header render.
#[derive(Debug, Clone, Copy)]
pub struct HeaderProps<'a> {
    pub config: &'a SiteConfig,
    pub locale: &'a Locale,
    /// Title of the post being viewed, shown in place of the site title.
    pub nav_bar_title: Option<&'a str>,
    pub full_width: bool,
}

pub struct Header<'a> {
    props: HeaderProps<'a>,
    favicon: FaviconState,
    sticky: StickyNav,
}

impl<'a> Header<'a> {
    pub fn new(props: HeaderProps<'a>, theme: Theme) -> Self {
        Self {
            favicon: FaviconState::new(theme),
            sticky: StickyNav::new(StickyMode::from_config(props.config)),
            props,
        }
    }

    pub fn favicon(&self) -> &FaviconState {
        &self.favicon
    }

    pub fn sticky(&self) -> &StickyNav {
        &self.sticky
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.favicon.set_theme(theme);
    }

    pub fn on_favicon_error(&mut self) {
        self.favicon.on_load_error();
    }

    pub fn on_intersection(&mut self, entry: IntersectionEntry) {
        self.sticky.on_intersection(entry);
    }

    /// Scroll to the top when the click landed on the container or the title
    /// itself. Returns whether a scroll was requested.
    pub fn handle_click(&self, target: ClickTarget, scroller: &impl Scroller) -> bool {
        match target {
            ClickTarget::NavContainer | ClickTarget::Title => {
                scroller.scroll_to(ScrollRequest::TO_TOP);
                true
            }
            ClickTarget::Descendant => false,
        }
    }

    /// Register the sentinel watcher and start reacting to the host.
    pub fn mount<'v, V: Viewport>(self, viewport: &'v V) -> MountedHeader<'a, 'v, V> {
        MountedHeader {
            watch: SentinelWatch::acquire(viewport),
            header: self,
        }
    }

    pub fn render(&self) -> Markup {
        let config = self.props.config;
        let links = build_nav_links(config, self.props.locale);
        let width_class = if self.props.full_width {
            "full-width"
        } else {
            "narrow"
        };
        let mut classes = vec!["sticky-nav", width_class];
        classes.extend(self.sticky.visual().class());

        html! {
            div.observer-element id=(SENTINEL_ID) {}
            div id=(NAV_ID) class=(classes.join(" ")) data-sticky=(self.sticky.mode().data_attr()) {
                (PreEscaped(CARET_SVG))
                div.identity {
                    a href="/" aria-label=(config.title) {
                        (favicon_img(&self.favicon, &config.title, 24, None))
                    }
                    (header_name(&config.title, &config.description, self.props.nav_bar_title))
                }
                (render_nav_bar(&links, false))
            }
        }
    }
}

/// A header registered with the host.
pub struct MountedHeader<'a, 'v, V: Viewport> {
    header: Header<'a>,
    watch: Option<SentinelWatch<'v, V>>,
}

impl<'a, V: Viewport> MountedHeader<'a, '_, V> {
    pub fn header(&self) -> &Header<'a> {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut Header<'a> {
        &mut self.header
    }

    pub fn is_observing(&self) -> bool {
        self.watch.is_some()
    }

    pub fn on_intersection(&mut self, entry: IntersectionEntry) {
        self.header.on_intersection(entry);
    }

    pub fn sticky_visual(&self) -> StickyVisual {
        self.header.sticky.visual()
    }

    /// Release the watcher and discard the instance state.
    pub fn unmount(self) {}
}

/// The favicon `<img>`, carrying both icon paths for the page script.
pub(crate) fn favicon_img(
    favicon: &FaviconState,
    alt: &str,
    size: u32,
    class: Option<&str>,
) -> Markup {
    let class = match class {
        Some(extra) => format!("favicon {extra}"),
        None => "favicon".to_string(),
    };
    html! {
        img class=(class) src=(favicon.path()) width=(size) height=(size) alt=(alt)
            data-favicon-default=(DEFAULT_FAVICON) data-favicon-dark=(DARK_FAVICON);
    }
}

/// Title paragraph: the post title overlays the site title and description.
fn header_name(site_title: &str, site_description: &str, post_title: Option<&str>) -> Markup {
    html! {
        p.header-name {
            @if let Some(post_title) = post_title {
                span.post-title { (post_title) }
            }
            span {
                span.site-title { (site_title) }
                span.site-description { ", " (site_description) }
            }
        }
    }
}
