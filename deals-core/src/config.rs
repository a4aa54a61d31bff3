//! Site configuration shipped next to the page.
use crate::route::DEFAULT_SECTION;
use serde::{Deserialize, Serialize};

/// Optional parts of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Show the discount code row on each card
    pub discount_code: bool,
    /// Duplicate the nav menu into a toggleable sidebar
    pub sidebar: bool,
    /// Show one top-level section at a time, chosen by the URL fragment
    pub hash_pages: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            discount_code: true,
            sidebar: true,
            hash_pages: true,
        }
    }
}

/// An extra page addressable by `#id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    /// Deal list, relative to the site root
    pub data_path: String,
    pub image_dir: String,
    /// Section shown for an empty fragment
    pub default_section: String,
    pub features: Features,
    pub sections: Vec<SectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::from("Bitcoin Black Friday"),
            data_path: String::from("deals.json"),
            image_dir: String::from("images"),
            default_section: String::from(DEFAULT_SECTION),
            features: Features::default(),
            sections: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Parse configuration JSON; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Ids of every top-level section, main page first.
    ///
    /// Without `hash_pages` only the main page exists.
    #[must_use]
    pub fn section_ids(&self) -> Vec<&str> {
        let mut ids = vec![self.default_section.as_str()];
        if self.features.hash_pages {
            ids.extend(self.sections.iter().map(|s| s.id.as_str()));
        }
        ids
    }
}
