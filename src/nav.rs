//! Navigation bar: the fixed link set and its markup.

use crate::config::SiteConfig;
use crate::locale::Locale;
use maud::{Markup, html};

/// One navigation entry, built fresh per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: u32,
    pub label: String,
    pub target: String,
    pub external: bool,
    pub visible: bool,
}

/// Build the nav entries in their fixed order: index, about, feed, search.
///
/// About is dropped when the config hides it. The returned list only holds
/// visible entries.
pub fn build_nav_links(config: &SiteConfig, locale: &Locale) -> Vec<NavLink> {
    let links = [
        NavLink {
            id: 0,
            label: locale.nav.index.clone(),
            target: config.index_path().to_string(),
            external: false,
            visible: true,
        },
        NavLink {
            id: 1,
            label: locale.nav.about.clone(),
            target: "/about".to_string(),
            external: false,
            visible: config.show_about,
        },
        NavLink {
            id: 2,
            label: locale.nav.rss.clone(),
            target: "/feed".to_string(),
            external: true,
            visible: true,
        },
        NavLink {
            id: 3,
            label: locale.nav.search.clone(),
            target: "/search".to_string(),
            external: false,
            visible: true,
        },
    ];
    links.into_iter().filter(|link| link.visible).collect()
}

/// Renders the link list. The home variant uses the compact text size.
pub fn render_nav_bar(links: &[NavLink], is_home: bool) -> Markup {
    html! {
        div.nav-bar.compact[is_home] {
            ul {
                @for link in links {
                    li.nav data-nav-id=(link.id) {
                        @if link.external {
                            a href=(link.target) target="_blank" rel="noopener" { (link.label) }
                        } @else {
                            a href=(link.target) { (link.label) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(links: &[NavLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn order_is_fixed_with_about() {
        let links = build_nav_links(&SiteConfig::default(), &Locale::default());
        assert_eq!(labels(&links), vec!["Blog", "About", "RSS", "Search"]);
        assert_eq!(
            links.iter().map(|l| l.id).collect::<Vec<_>>(),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn about_hidden_when_disabled() {
        let config = SiteConfig {
            show_about: false,
            ..SiteConfig::default()
        };
        let links = build_nav_links(&config, &Locale::default());
        assert_eq!(labels(&links), vec!["Blog", "RSS", "Search"]);
    }

    #[test]
    fn only_feed_is_external() {
        let links = build_nav_links(&SiteConfig::default(), &Locale::default());
        let external: Vec<_> = links.iter().filter(|l| l.external).collect();
        assert_eq!(external.len(), 1);
        assert_eq!(external[0].target, "/feed");
    }

    #[test]
    fn index_uses_base_path() {
        let config = SiteConfig {
            path: "/posts".to_string(),
            ..SiteConfig::default()
        };
        let links = build_nav_links(&config, &Locale::default());
        assert_eq!(links[0].target, "/posts");
    }

    #[test]
    fn labels_come_from_locale() {
        let mut locale = Locale::default();
        locale.nav.search = "搜索".to_string();
        let links = build_nav_links(&SiteConfig::default(), &locale);
        assert_eq!(links[3].label, "搜索");
    }

    #[test]
    fn render_marks_external_links() {
        let links = build_nav_links(&SiteConfig::default(), &Locale::default());
        let html = render_nav_bar(&links, false).into_string();
        assert!(html.contains(r#"<a href="/feed" target="_blank" rel="noopener">RSS</a>"#));
        assert!(html.contains(r#"<a href="/search">Search</a>"#));
        assert!(!html.contains("compact"));
    }

    #[test]
    fn render_home_variant_is_compact() {
        let html = render_nav_bar(&[], true).into_string();
        assert!(html.contains(r#"class="nav-bar compact""#));
    }

    #[test]
    fn render_escapes_labels() {
        let mut locale = Locale::default();
        locale.nav.index = "<b>Home</b>".to_string();
        let links = build_nav_links(&SiteConfig::default(), &locale);
        let html = render_nav_bar(&links, false).into_string();
        assert!(!html.contains("<b>Home"));
        assert!(html.contains("&lt;b&gt;Home"));
    }
}
