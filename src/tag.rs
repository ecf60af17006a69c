//! Tag chip linking to the tag-filtered listing.

use maud::{Markup, html};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` escapes: everything but
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn tag_href(tag: &str) -> String {
    format!("/tag/{}", utf8_percent_encode(tag, URI_COMPONENT))
}

pub fn render_tag_item(tag: &str) -> Markup {
    html! {
        a.tag-item href=(tag_href(tag)) {
            p { (tag) }
        }
    }
}
