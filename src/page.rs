//! Page shell.
//!
//! Mounts one header (the landing variant or the post variant), the page
//! content and the footer into a complete HTML document.
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: base layout, sticky-nav states and the dark palette
//! - `static/header.js`: sentinel observer, click-to-top, favicon fallback and
//!   the chat handoff, driven by the `data-*` attributes the components emit

use crate::config::SiteConfig;
use crate::footer::render_footer;
use crate::header::{Header, HeaderProps};
use crate::home::HomeHeader;
use crate::locale::Locale;
use crate::post::{Post, render_blog_post};
use crate::theme::Theme;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no post with slug '{0}'")]
    UnknownPost(String),
}

const CSS: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/header.js");

/// Shared inputs of every page render.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub config: &'a SiteConfig,
    pub locale: &'a Locale,
    pub theme: Theme,
    /// Year shown in the footer.
    pub year: i32,
}

/// Renders the base HTML document structure
pub fn base_document(title: &str, lang: &str, theme: Theme, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) class=[theme.html_class()] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(CSS)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Landing page: home header, newest-first post list, footer.
pub fn render_home_page(ctx: PageContext<'_>, posts: &[Post]) -> Markup {
    let header = HomeHeader::new(ctx.config, ctx.locale, ctx.theme);
    let mut posts: Vec<&Post> = posts.iter().collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));

    let content = html! {
        (header.render())
        main.post-list.narrow {
            @for post in posts {
                (render_blog_post(post, ctx.config, ctx.locale))
            }
        }
        (render_footer(ctx.config, ctx.year, false))
    };

    base_document(&ctx.config.title, &ctx.config.lang, ctx.theme, content)
}

/// Post page: header titled with the post, the post card, footer.
pub fn render_post_page(ctx: PageContext<'_>, post: &Post) -> Markup {
    let header = Header::new(
        HeaderProps {
            config: ctx.config,
            locale: ctx.locale,
            nav_bar_title: Some(&post.title),
            full_width: false,
        },
        ctx.theme,
    );

    let content = html! {
        (header.render())
        main.post-page.narrow {
            (render_blog_post(post, ctx.config, ctx.locale))
        }
        (render_footer(ctx.config, ctx.year, false))
    };

    let title = format!("{} - {}", post.title, ctx.config.title);
    base_document(&title, &ctx.config.lang, ctx.theme, content)
}

/// Read a JSON array of posts.
pub fn load_posts(path: &Path) -> Result<Vec<Post>, PageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn find_post<'p>(posts: &'p [Post], slug: &str) -> Result<&'p Post, PageError> {
    posts
        .iter()
        .find(|p| p.slug == slug)
        .ok_or_else(|| PageError::UnknownPost(slug.to_string()))
}
