//! # Blog Chrome
//!
//! Header, navigation, post card and footer components for a statically
//! generated blog, rendered server-side with Maud.
//!
//! Every component is a view over data supplied from outside: post metadata,
//! site configuration, locale strings and a theme flag. The only component
//! with behavior of its own is the site header, which owns two pieces of
//! per-instance state:
//!
//! - the favicon path, which follows the theme until an icon fails to load
//! - the sticky-nav flag, derived from a sentinel element's visibility
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`header`] | Site header controller: identity block, nav bar, sticky state, click-to-top |
//! | [`home`] | Landing-page header: large identity block, profile links, tagline |
//! | [`favicon`] | Theme-aware favicon selection with sticky load-error fallback |
//! | [`sticky`] | Sticky-nav state machine and the scoped sentinel watcher |
//! | [`nav`] | Fixed navigation link set and its markup |
//! | [`handoff`] | Platform-dependent native app handoff for the chat link |
//! | [`post`] | Post summary card and date formatting |
//! | [`tag`] | Tag chip with URI-component encoded link |
//! | [`footer`] | Copyright line |
//! | [`page`] | Page shell: document, header, content, footer |
//! | [`config`] | `blog.toml` loading, validation, and merging over stock defaults |
//! | [`locale`] | Locale strings (English built in) |
//! | [`theme`] | Theme signal |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## State Per Instance, Host Behind Traits
//!
//! Favicon and sticky state live in the [`header::Header`] value, never in a
//! global. The browser primitives the header needs (intersection observation,
//! scrolling, app launching) are the [`sticky::Viewport`],
//! [`header::Scroller`] and [`handoff::AppLauncher`] traits, so the
//! behavior runs and is tested without a browser.
//!
//! ## Scoped Observation
//!
//! Mounting a header registers one sentinel watcher and returns a
//! [`header::MountedHeader`]. The watcher is held by a guard that
//! deregisters it on drop. A missing sentinel registers nothing.
//!
//! ## Static Output
//!
//! Rendered pages are plain HTML plus one embedded stylesheet and one short
//! script. The script reads the `data-*` attributes the components emit and
//! applies the same rules in the browser.

pub mod config;
pub mod favicon;
pub mod footer;
pub mod handoff;
pub mod header;
pub mod home;
pub mod locale;
pub mod nav;
pub mod output;
pub mod page;
pub mod post;
pub mod sticky;
pub mod tag;
pub mod theme;

#[cfg(test)]
pub(crate) mod test_helpers;
