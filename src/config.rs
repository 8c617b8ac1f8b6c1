//! Configuration to acknowledge author preferences as well as set defaults.
//!
//! Specifically, we try to find a sagenote.toml, and if present we load settings from there.
//! This provides the fallback page title, page links and the math guard toggle.

use facet::Facet;
use std::fs;

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from sagenote.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "Lecture Notes".to_string())]
    /// Page title used when the first cell carries no heading.
    pub default_title: String,
    #[facet(default = "style.css".to_string())]
    /// Stylesheet linked from the page head.
    pub stylesheet: String,
    #[facet(default = "Run".to_string())]
    /// Label on each SageCell evaluate button.
    pub eval_button_text: String,
    #[facet(default = "lecture-notes.html".to_string())]
    /// Target of the navigation link in the page footer.
    pub back_link_href: String,
    #[facet(default = "← Back to Lecture Notes".to_string())]
    /// Text of the navigation link in the page footer.
    pub back_link_text: String,
    #[facet(default = true)]
    /// Keep TeX spans out of reach of the inline markdown passes.
    pub preserve_math: bool,
}

impl Config {
    /// Name of the file looked up in the working directory.
    pub const FILE_NAME: &'static str = "sagenote.toml";

    #[must_use]
    /// Load configuration from sagenote.toml if present.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load() -> Self {
        fs::read_to_string(Self::FILE_NAME)
            .ok()
            .and_then(|contents| Self::parse(&contents))
            .unwrap_or_default()
    }

    #[must_use]
    /// Parse a TOML document, `None` when it does not describe a config.
    pub fn parse(contents: &str) -> Option<Self> {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("ignoring {}: {e}", Self::FILE_NAME);
                None
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
