//! Footer with the copyright line.

use crate::config::SiteConfig;
use chrono::Datelike;
use maud::{Markup, html};

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// `© Title 2024`, or `© Title 2019-2024` when `since` predates `year`.
pub fn copyright_line(config: &SiteConfig, year: i32) -> String {
    match config.since {
        Some(since) if since < year => format!("© {} {since}-{year}", config.title),
        _ => format!("© {} {year}", config.title),
    }
}

pub fn render_footer(config: &SiteConfig, year: i32, full_width: bool) -> Markup {
    let width_class = if full_width { "full-width" } else { "narrow" };
    html! {
        footer class={ "site-footer " (width_class) } {
            hr.divider;
            div.copyright {
                p { (copyright_line(config, year)) }
            }
        }
    }
}
