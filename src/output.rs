//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format functions
//! are pure: no I/O, no side effects.
//!
//! ## Check
//!
//! ```text
//! Site
//!     Title: Field Notes
//!     Author: Jane Doe
//!     Sticky nav: auto
//!     Tags on cards: hidden
//!
//! Navigation
//! 001 Blog → /
//! 002 About → /about
//! 003 RSS → /feed (new tab)
//! 004 Search → /search
//!
//! Profiles
//! 001 GitHub → https://github.com/janedoe
//! ```
//!
//! ## Render
//!
//! ```text
//! Home → dist/index.html (2 posts)
//! ```

use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::nav::build_nav_links;
use crate::sticky::StickyMode;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

pub fn format_check_output(config: &SiteConfig, locale: &Locale) -> Vec<String> {
    let mut lines = vec!["Site".to_string()];
    lines.push(format!("{}Title: {}", indent(1), config.title));
    lines.push(format!("{}Author: {}", indent(1), config.author));
    if let Some(since) = config.since {
        lines.push(format!("{}Since: {since}", indent(1)));
    }
    lines.push(format!(
        "{}Sticky nav: {}",
        indent(1),
        StickyMode::from_config(config).data_attr()
    ));
    lines.push(format!(
        "{}Tags on cards: {}",
        indent(1),
        if config.show_tags { "shown" } else { "hidden" }
    ));

    lines.push(String::new());
    lines.push("Navigation".to_string());
    for (idx, link) in build_nav_links(config, locale).iter().enumerate() {
        let suffix = if link.external { " (new tab)" } else { "" };
        lines.push(format!(
            "{} {} \u{2192} {}{}",
            format_index(idx + 1),
            link.label,
            link.target,
            suffix
        ));
    }

    let profiles = crate::home::profile_links(&config.profiles);
    if !profiles.is_empty() {
        lines.push(String::new());
        lines.push("Profiles".to_string());
        for (idx, (kind, target)) in profiles.iter().enumerate() {
            lines.push(format!(
                "{} {} \u{2192} {}",
                format_index(idx + 1),
                kind.label(),
                target
            ));
        }
    }

    lines
}

pub fn print_check_output(config: &SiteConfig, locale: &Locale) {
    for line in format_check_output(config, locale) {
        println!("{}", line);
    }
}

/// One line per rendered page. `posts` is the number of cards on the page.
pub fn format_render_output(label: &str, destination: Option<&Path>, posts: usize) -> String {
    let target = match destination {
        Some(path) => path.display().to_string(),
        None => "stdout".to_string(),
    };
    let noun = if posts == 1 { "post" } else { "posts" };
    format!("{label} \u{2192} {target} ({posts} {noun})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_config;

    #[test]
    fn check_output_lists_nav_in_order() {
        let lines = format_check_output(&sample_config(), &Locale::default());
        let nav_start = lines.iter().position(|l| l == "Navigation").unwrap();
        assert_eq!(lines[nav_start + 1], "001 Blog \u{2192} /");
        assert_eq!(lines[nav_start + 2], "002 About \u{2192} /about");
        assert_eq!(lines[nav_start + 3], "003 RSS \u{2192} /feed (new tab)");
        assert_eq!(lines[nav_start + 4], "004 Search \u{2192} /search");
    }

    #[test]
    fn check_output_site_block() {
        let lines = format_check_output(&sample_config(), &Locale::default());
        assert_eq!(lines[0], "Site");
        assert!(lines.contains(&"    Title: Field Notes".to_string()));
        assert!(lines.contains(&"    Since: 2019".to_string()));
        assert!(lines.contains(&"    Sticky nav: off".to_string()));
    }

    #[test]
    fn check_output_profiles() {
        let lines = format_check_output(&sample_config(), &Locale::default());
        assert!(lines.contains(&"Profiles".to_string()));
        assert!(lines.contains(&"003 Chat \u{2192} weixin://".to_string()));
    }

    #[test]
    fn check_output_skips_empty_profiles() {
        let lines = format_check_output(&SiteConfig::default(), &Locale::default());
        assert!(!lines.contains(&"Profiles".to_string()));
    }

    #[test]
    fn render_output_line() {
        assert_eq!(
            format_render_output("Home", Some(Path::new("dist/index.html")), 2),
            "Home \u{2192} dist/index.html (2 posts)"
        );
        assert_eq!(
            format_render_output("Post", None, 1),
            "Post \u{2192} stdout (1 post)"
        );
    }
}
