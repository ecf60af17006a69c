//! Landing-page header.
//!
//! Shares the favicon state and nav bar with [`crate::header`], laid out as a
//! top bar, a large identity block, the author's profile links and a tagline.

use crate::config::{ProfileLinks, SiteConfig};
use crate::favicon::FaviconState;
use crate::header::favicon_img;
use crate::locale::Locale;
use crate::nav::{build_nav_links, render_nav_bar};
use crate::theme::Theme;
use maud::{Markup, PreEscaped, html};

const GITHUB_SVG: &str = r#"<svg viewBox="0 0 16 16" width="15" height="15" aria-hidden="true"><path d="M8 0C3.58 0 0 3.58 0 8c0 3.54 2.29 6.53 5.47 7.59.4.07.55-.17.55-.38v-1.33c-2.23.48-2.7-1.07-2.7-1.07-.36-.92-.89-1.17-.89-1.17-.73-.5.06-.49.06-.49.8.06 1.23.83 1.23.83.72 1.22 1.87.87 2.33.66.07-.52.28-.87.5-1.07-1.78-.2-3.64-.89-3.64-3.95 0-.87.31-1.59.82-2.15-.08-.2-.36-1.02.08-2.12 0 0 .67-.21 2.2.82a7.6 7.6 0 0 1 4 0c1.53-1.04 2.2-.82 2.2-.82.44 1.1.16 1.92.08 2.12.51.56.82 1.27.82 2.15 0 3.07-1.87 3.75-3.65 3.95.29.25.54.73.54 1.48v2.2c0 .21.15.46.55.38A8 8 0 0 0 16 8c0-4.42-3.58-8-8-8z"/></svg>"#;
const EMAIL_SVG: &str = r#"<svg viewBox="0 0 24 24" width="15" height="15" aria-hidden="true"><path d="M2 5h20v14H2z" fill="none" stroke="currentColor" stroke-width="2"/><path d="M2 5l10 8 10-8" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;
const CHAT_SVG: &str = r#"<svg viewBox="0 0 24 24" width="15" height="15" aria-hidden="true"><path d="M4 4h16v11H8l-4 4z" fill="none" stroke="currentColor" stroke-width="2"/></svg>"#;
const SOCIAL_SVG: &str = r#"<svg viewBox="0 0 24 24" width="15" height="15" aria-hidden="true"><path d="M4 4l16 16M20 4L4 20" stroke="currentColor" stroke-width="2"/></svg>"#;

/// Kind of a landing-page profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    CodeHosting,
    Email,
    /// App-scheme handoff instead of a plain link.
    Chat,
    Social,
}

impl ProfileKind {
    pub fn label(self) -> &'static str {
        match self {
            ProfileKind::CodeHosting => "GitHub",
            ProfileKind::Email => "Email",
            ProfileKind::Chat => "Chat",
            ProfileKind::Social => "Social",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ProfileKind::CodeHosting => GITHUB_SVG,
            ProfileKind::Email => EMAIL_SVG,
            ProfileKind::Chat => CHAT_SVG,
            ProfileKind::Social => SOCIAL_SVG,
        }
    }
}

/// Configured profile links in display order.
pub fn profile_links(profiles: &ProfileLinks) -> Vec<(ProfileKind, &str)> {
    [
        (ProfileKind::CodeHosting, &profiles.github),
        (ProfileKind::Email, &profiles.email),
        (ProfileKind::Chat, &profiles.chat),
        (ProfileKind::Social, &profiles.social),
    ]
    .into_iter()
    .filter_map(|(kind, target)| target.as_deref().map(|t| (kind, t)))
    .collect()
}

pub struct HomeHeader<'a> {
    config: &'a SiteConfig,
    locale: &'a Locale,
    favicon: FaviconState,
}

impl<'a> HomeHeader<'a> {
    pub fn new(config: &'a SiteConfig, locale: &'a Locale, theme: Theme) -> Self {
        Self {
            config,
            locale,
            favicon: FaviconState::new(theme),
        }
    }

    pub fn favicon(&self) -> &FaviconState {
        &self.favicon
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.favicon.set_theme(theme);
    }

    pub fn on_favicon_error(&mut self) {
        self.favicon.on_load_error();
    }

    pub fn render(&self) -> Markup {
        let config = self.config;
        let links = build_nav_links(config, self.locale);

        html! {
            div.home-bar {
                a.identity href="/" aria-label=(config.title) {
                    (favicon_img(&self.favicon, &config.title, 24, None))
                }
                (render_nav_bar(&links, true))
            }
            hr.divider;
            div.home-identity {
                (favicon_img(&self.favicon, &config.title, 90, Some("favicon-large")))
                div.slogan { (config.author) }
                div.profile-links {
                    @for (kind, target) in profile_links(&config.profiles) {
                        (render_profile_link(kind, target))
                    }
                }
                div.tagline { (config.tagline) }
            }
        }
    }
}

fn render_profile_link(kind: ProfileKind, target: &str) -> Markup {
    html! {
        @if kind == ProfileKind::Chat {
            a.profile-link href="#" data-chat=(target) aria-label=(kind.label()) {
                (PreEscaped(kind.icon()))
            }
        } @else {
            a.profile-link href=(target) target="_blank" rel="noopener" aria-label=(kind.label()) {
                (PreEscaped(kind.icon()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favicon::{DARK_FAVICON, DEFAULT_FAVICON};
    use crate::test_helpers::sample_config;

    #[test]
    fn profile_links_keep_fixed_order() {
        let profiles = ProfileLinks {
            social: Some("https://social.example/me".to_string()),
            github: Some("https://github.com/me".to_string()),
            chat: Some("weixin://".to_string()),
            email: None,
        };
        let kinds: Vec<_> = profile_links(&profiles).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                ProfileKind::CodeHosting,
                ProfileKind::Chat,
                ProfileKind::Social
            ]
        );
    }

    #[test]
    fn no_profiles_renders_empty_list() {
        let config = SiteConfig::default();
        let locale = Locale::default();
        let html = HomeHeader::new(&config, &locale, Theme::LIGHT)
            .render()
            .into_string();
        assert!(html.contains(r#"<div class="profile-links"></div>"#));
    }

    #[test]
    fn chat_link_carries_app_uri_not_href() {
        let config = sample_config();
        let locale = Locale::default();
        let html = HomeHeader::new(&config, &locale, Theme::LIGHT)
            .render()
            .into_string();
        assert!(html.contains(r##"href="#" data-chat="weixin://""##));
        assert!(!html.contains(r#"href="weixin://""#));
    }

    #[test]
    fn renders_author_tagline_and_compact_nav() {
        let config = sample_config();
        let locale = Locale::default();
        let html = HomeHeader::new(&config, &locale, Theme::LIGHT)
            .render()
            .into_string();
        assert!(html.contains(r#"<div class="slogan">Jane Doe</div>"#));
        assert!(html.contains(&config.tagline));
        assert!(html.contains("nav-bar compact"));
        assert!(html.contains(r#"width="90""#));
    }

    #[test]
    fn both_favicons_follow_shared_state() {
        let config = sample_config();
        let locale = Locale::default();
        let mut home = HomeHeader::new(&config, &locale, Theme::DARK);
        let html = home.render().into_string();
        assert_eq!(html.matches(&format!(r#"src="{DARK_FAVICON}""#)).count(), 2);

        home.on_favicon_error();
        home.set_theme(Theme::DARK);
        let html = home.render().into_string();
        assert_eq!(html.matches(&format!(r#"src="{DEFAULT_FAVICON}""#)).count(), 2);
    }
}
