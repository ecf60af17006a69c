//! Locale strings consumed by the components.
//!
//! Only the English table ships with the crate. Other languages are loaded from
//! a TOML file with the same shape; missing keys fall back to English.
//!
//! ```toml
//! [nav]
//! index = "Blog"
//! about = "About"
//! rss = "RSS"
//! search = "Search"
//!
//! [post]
//! posted_on = "Posted on"
//! date_format = "%b %-d, %Y"
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocaleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Locale {
    pub nav: NavStrings,
    pub post: PostStrings,
}

/// Labels of the navigation bar entries.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavStrings {
    pub index: String,
    pub about: String,
    pub rss: String,
    pub search: String,
}

impl Default for NavStrings {
    fn default() -> Self {
        Self {
            index: "Blog".to_string(),
            about: "About".to_string(),
            rss: "RSS".to_string(),
            search: "Search".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostStrings {
    /// Label in front of the post date.
    pub posted_on: String,
    /// chrono strftime pattern for post dates.
    pub date_format: String,
}

impl Default for PostStrings {
    fn default() -> Self {
        Self {
            posted_on: "Posted on".to_string(),
            date_format: "%b %-d, %Y".to_string(),
        }
    }
}

impl Locale {
    pub fn from_toml_str(s: &str) -> Result<Self, LocaleError> {
        Ok(toml::from_str(s)?)
    }
}

/// Load a locale table from a TOML file.
pub fn load_locale(path: &Path) -> Result<Locale, LocaleError> {
    let content = fs::read_to_string(path)?;
    Locale::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_is_english() {
        let locale = Locale::default();
        assert_eq!(locale.nav.index, "Blog");
        assert_eq!(locale.nav.rss, "RSS");
        assert_eq!(locale.post.posted_on, "Posted on");
    }

    #[test]
    fn partial_table_falls_back_to_english() {
        let locale = Locale::from_toml_str(
            r#"
[nav]
index = "博客"
about = "关于"
"#,
        )
        .unwrap();
        assert_eq!(locale.nav.index, "博客");
        assert_eq!(locale.nav.about, "关于");
        assert_eq!(locale.nav.search, "Search");
        assert_eq!(locale.post.date_format, "%b %-d, %Y");
    }

    #[test]
    fn unknown_key_rejected() {
        let result = Locale::from_toml_str("[nav]\nhome = \"Home\"\n");
        assert!(matches!(result, Err(LocaleError::Toml(_))));
    }

    #[test]
    fn load_locale_missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_locale(&tmp.path().join("nope.toml"));
        assert!(matches!(result, Err(LocaleError::Io(_))));
    }

    #[test]
    fn load_locale_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("fr.toml");
        fs::write(&path, "[post]\nposted_on = \"Publié le\"\n").unwrap();
        let locale = load_locale(&path).unwrap();
        assert_eq!(locale.post.posted_on, "Publié le");
    }
}
