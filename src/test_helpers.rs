//! Shared test fixtures and host doubles.
//!
//! The doubles record what the components asked the host to do so tests can
//! assert on side effects without a browser:
//!
//! - [`FakeViewport`]: intersection observation with active/released bookkeeping
//! - [`RecordingScroller`]: every `scroll_to` request
//! - [`RecordingLauncher`]: every app handoff

use std::cell::{Cell, RefCell};

use chrono::NaiveDate;

use crate::config::{ProfileLinks, SiteConfig};
use crate::handoff::AppLauncher;
use crate::header::{ScrollRequest, Scroller};
use crate::post::Post;
use crate::sticky::{SENTINEL_ID, Viewport, WatchId};

// =========================================================================
// Fixtures
// =========================================================================

pub fn sample_config() -> SiteConfig {
    SiteConfig {
        title: "Field Notes".to_string(),
        description: "Writing about software".to_string(),
        author: "Jane Doe".to_string(),
        since: Some(2019),
        tagline: "Notes from the workbench.".to_string(),
        profiles: ProfileLinks {
            github: Some("https://github.com/janedoe".to_string()),
            email: Some("mailto:jane@example.com".to_string()),
            chat: Some("weixin://".to_string()),
            social: Some("https://twitter.com/janedoe".to_string()),
        },
        ..SiteConfig::default()
    }
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            id: "a1".to_string(),
            slug: "first-post".to_string(),
            title: "First Post".to_string(),
            summary: "Setting up the blog.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            tags: vec!["rust".to_string(), "web dev".to_string()],
        },
        Post {
            id: "b2".to_string(),
            slug: "second-post".to_string(),
            title: "Second Post".to_string(),
            summary: "Sticky headers, revisited.".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            tags: vec![],
        },
    ]
}

// =========================================================================
// Host doubles
// =========================================================================

pub struct FakeViewport {
    has_sentinel: bool,
    next_id: Cell<u64>,
    active: RefCell<Vec<WatchId>>,
    released: RefCell<Vec<WatchId>>,
}

impl FakeViewport {
    pub fn with_sentinel() -> Self {
        Self::new(true)
    }

    pub fn without_sentinel() -> Self {
        Self::new(false)
    }

    fn new(has_sentinel: bool) -> Self {
        Self {
            has_sentinel,
            next_id: Cell::new(0),
            active: RefCell::new(Vec::new()),
            released: RefCell::new(Vec::new()),
        }
    }

    pub fn active(&self) -> Vec<WatchId> {
        self.active.borrow().clone()
    }

    pub fn released(&self) -> Vec<WatchId> {
        self.released.borrow().clone()
    }
}

impl Viewport for FakeViewport {
    fn observe(&self, element_id: &str) -> Option<WatchId> {
        if !self.has_sentinel || element_id != SENTINEL_ID {
            return None;
        }
        let id = WatchId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.active.borrow_mut().push(id);
        Some(id)
    }

    fn unobserve(&self, id: WatchId) {
        let mut active = self.active.borrow_mut();
        let before = active.len();
        active.retain(|w| *w != id);
        assert_eq!(before, active.len() + 1, "unobserve of unknown watcher {id:?}");
        self.released.borrow_mut().push(id);
    }
}

#[derive(Default)]
pub struct RecordingScroller {
    requests: RefCell<Vec<ScrollRequest>>,
}

impl RecordingScroller {
    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.requests.borrow().clone()
    }
}

impl Scroller for RecordingScroller {
    fn scroll_to(&self, request: ScrollRequest) {
        self.requests.borrow_mut().push(request);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Launch {
    HiddenFrame(String),
    Navigate(String),
}

#[derive(Default)]
pub struct RecordingLauncher {
    launches: RefCell<Vec<Launch>>,
}

impl RecordingLauncher {
    pub fn launches(&self) -> Vec<Launch> {
        self.launches.borrow().clone()
    }
}

impl AppLauncher for RecordingLauncher {
    fn open_hidden_frame(&self, uri: &str) {
        self.launches
            .borrow_mut()
            .push(Launch::HiddenFrame(uri.to_string()));
    }

    fn navigate(&self, uri: &str) {
        self.launches
            .borrow_mut()
            .push(Launch::Navigate(uri.to_string()));
    }
}
