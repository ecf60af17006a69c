//! Native app handoff through a custom URI scheme.
//!
//! Apple browsers only hand a custom scheme to the native app reliably when it
//! is loaded in a frame, so they get an invisible iframe. Everyone else
//! navigates the window to the URI. There is no feedback channel: the launch
//! is fire-and-forget.

/// Browser platform family, as far as the handoff cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Apple,
    Other,
}

impl Platform {
    /// Case-insensitive match on `ipad`, `iphone` or `mac`.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        if ["ipad", "iphone", "mac"].iter().any(|needle| ua.contains(needle)) {
            Platform::Apple
        } else {
            Platform::Other
        }
    }

    pub fn handoff_strategy(self) -> HandoffStrategy {
        match self {
            Platform::Apple => HandoffStrategy::HiddenFrame,
            Platform::Other => HandoffStrategy::Navigate,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandoffStrategy {
    /// Append a `display: none` iframe pointing at the URI.
    HiddenFrame,
    /// Set the window location to the URI.
    Navigate,
}

/// Host-side launcher. Swappable so the handoff can run outside a browser.
pub trait AppLauncher {
    fn open_hidden_frame(&self, uri: &str);
    fn navigate(&self, uri: &str);
}

/// Hand `uri` off to the native app using the strategy for `user_agent`.
pub fn invoke_app(uri: &str, user_agent: &str, launcher: &impl AppLauncher) -> HandoffStrategy {
    let strategy = Platform::from_user_agent(user_agent).handoff_strategy();
    tracing::debug!(uri, ?strategy, "app handoff");
    match strategy {
        HandoffStrategy::HiddenFrame => launcher.open_hidden_frame(uri),
        HandoffStrategy::Navigate => launcher.navigate(uri),
    }
    strategy
}
