//! Post summary card and date formatting.

use crate::config::SiteConfig;
use crate::locale::Locale;
use crate::tag::render_tag_item;
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use maud::{Markup, html};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Write;

/// Post metadata as supplied by the content source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Content-source identifier. Numeric ids are accepted and kept as text.
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    /// ISO `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Int(n) => n.to_string(),
        Id::Float(n) => n.to_string(),
    })
}

/// Date as shown on cards, using the locale's strftime pattern.
///
/// A malformed pattern falls back to ISO format rather than failing the render.
pub fn formatted_date(date: NaiveDate, locale: &Locale) -> Markup {
    html! {
        span.formatted-date { (format_date(date, &locale.post.date_format)) }
    }
}

fn format_date(date: NaiveDate, pattern: &str) -> String {
    let iso = || date.format("%Y-%m-%d").to_string();
    let items = StrftimeItems::new(pattern);
    if items.clone().any(|item| matches!(item, Item::Error)) {
        tracing::debug!(pattern, "invalid date format, using ISO date");
        return iso();
    }
    // Time and zone fields parse fine but have nothing to format on a date.
    let mut out = String::new();
    match write!(out, "{}", date.format_with_items(items)) {
        Ok(()) => out,
        Err(_) => {
            tracing::debug!(pattern, "date format needs time fields, using ISO date");
            iso()
        }
    }
}

/// Post card: a link over the title, summary and posted-on date, followed by
/// the tag chips when enabled. Tags sit outside the card link since anchors
/// cannot nest.
pub fn render_blog_post(post: &Post, config: &SiteConfig, locale: &Locale) -> Markup {
    html! {
        article.post-card data-post-id=(post.id) {
            a.post-link href=(config.post_href(&post.slug)) {
                header {
                    h2 { (post.title) }
                }
                main {
                    p.summary { (post.summary) }
                    div.post-meta {
                        time datetime=(post.date.format("%Y-%m-%d").to_string()) {
                            (locale.post.posted_on) " " (formatted_date(post.date, locale))
                        }
                    }
                }
            }
            @if config.show_tags && !post.tags.is_empty() {
                div.article-tags {
                    @for tag in &post.tags {
                        (render_tag_item(tag))
                    }
                }
            }
        }
    }
}
