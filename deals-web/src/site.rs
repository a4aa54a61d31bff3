//! Site configuration embedded from `static/site.json`.
use crate::paths::asset_path;
use deals_core::SiteConfig;
use once_cell::sync::Lazy;

pub static SITE: Lazy<SiteConfig> =
    Lazy::new(|| parse_site_config(include_str!("../static/site.json")));

fn parse_site_config(json: &str) -> SiteConfig {
    SiteConfig::from_json(json).unwrap_or_else(|err| {
        log::error!("Invalid site config, using defaults: {err}");
        SiteConfig::default()
    })
}

/// URL of the deal list.
#[must_use]
pub fn data_url() -> String {
    asset_path(&SITE.data_path)
}

/// Directory deal images are served from.
#[must_use]
pub fn image_dir() -> String {
    asset_path(&SITE.image_dir)
}
