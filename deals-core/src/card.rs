//! Card view-models: one per deal, built once per page load.
use crate::deal::DealRecord;
use crate::format::format_timestamp;
use chrono::{Local, TimeZone};
use std::fmt::Display;

pub const STARTS_FALLBACK: &str = "today";
pub const ENDS_FALLBACK: &str = "forever";
pub const CODE_FALLBACK: &str = "N/A";

/// Everything a rendered deal card shows or is ordered by.
#[derive(Debug, Clone, PartialEq)]
pub struct DealCard {
    /// Load position; identity and default ordering key
    pub index: usize,
    pub title: String,
    pub description: String,
    pub discount: f64,
    pub featured: bool,
    pub image_src: Option<String>,
    /// `None` renders the product link without a destination
    pub href: Option<String>,
    pub starts_label: String,
    pub ends_label: String,
    pub discount_label: String,
    pub code_label: String,
    /// Original casing and order
    pub categories: Vec<String>,
}

impl DealCard {
    /// Project a record using the viewer's local time zone.
    #[must_use]
    pub fn from_record(record: &DealRecord, image_dir: &str) -> Self {
        Self::from_record_in(record, image_dir, &Local)
    }

    /// Project a record, formatting start and end times in `tz`.
    #[must_use]
    pub fn from_record_in<Tz: TimeZone>(record: &DealRecord, image_dir: &str, tz: &Tz) -> Self
    where
        Tz::Offset: Display,
    {
        let discount = record.discount_or_zero();
        Self {
            index: record.index,
            title: record.title.clone(),
            description: record.description.clone(),
            discount,
            featured: record.featured,
            image_src: record.image().map(|file| image_path(image_dir, file)),
            href: record.url().map(str::to_string),
            starts_label: record
                .starts()
                .map_or_else(|| STARTS_FALLBACK.to_string(), |s| format_timestamp(s, tz)),
            ends_label: record
                .ends()
                .map_or_else(|| ENDS_FALLBACK.to_string(), |s| format_timestamp(s, tz)),
            discount_label: format!("{discount}%"),
            code_label: record.code().unwrap_or(CODE_FALLBACK).to_string(),
            categories: record.categories.clone(),
        }
    }

    /// Case-insensitive category membership.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        let wanted = category.to_lowercase();
        self.categories.iter().any(|c| c.to_lowercase() == wanted)
    }
}

/// Join an image filename onto the images directory.
#[must_use]
pub fn image_path(image_dir: &str, file: &str) -> String {
    let dir = image_dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> DealRecord {
        DealRecord {
            title: String::from("Hardware Wallet"),
            description: String::from("Cold storage"),
            url: Some(String::from("https://example.com/wallet")),
            image: Some(String::from("wallet.png")),
            starts: Some(String::from("2019-11-24T15:00:00Z")),
            ends: Some(String::from("2019-12-02T08:00:00Z")),
            discount: Some(15.0),
            code: Some(String::from("BBF15")),
            categories: vec![String::from("Hardware"), String::from("Wallets")],
            featured: true,
            index: 3,
        }
    }

    #[test]
    fn projects_every_field() {
        let card = DealCard::from_record_in(&record(), "images", &Utc);
        assert_eq!(card.index, 3);
        assert_eq!(card.image_src.as_deref(), Some("images/wallet.png"));
        assert_eq!(card.href.as_deref(), Some("https://example.com/wallet"));
        assert_eq!(card.starts_label, "Nov 24, 3PM");
        assert_eq!(card.ends_label, "Dec 2, 8AM");
        assert_eq!(card.discount_label, "15%");
        assert_eq!(card.code_label, "BBF15");
        assert_eq!(card.categories, vec!["Hardware", "Wallets"]);
        assert!(card.featured);
    }

    #[test]
    fn absent_fields_use_fallback_labels() {
        let bare = DealRecord {
            title: String::from("Bare"),
            ..DealRecord::default()
        };
        let card = DealCard::from_record_in(&bare, "images", &Utc);
        assert!(card.image_src.is_none());
        assert!(card.href.is_none());
        assert_eq!(card.starts_label, "today");
        assert_eq!(card.ends_label, "forever");
        assert_eq!(card.discount_label, "0%");
        assert_eq!(card.code_label, "N/A");
        assert!(card.categories.is_empty());
    }

    #[test]
    fn fractional_discounts_keep_their_digits() {
        let deal = DealRecord {
            discount: Some(12.5),
            ..DealRecord::default()
        };
        let card = DealCard::from_record_in(&deal, "images", &Utc);
        assert_eq!(card.discount_label, "12.5%");
    }

    #[test]
    fn category_membership_ignores_case() {
        let card = DealCard::from_record_in(&record(), "images", &Utc);
        assert!(card.has_category("hardware"));
        assert!(card.has_category("WALLETS"));
        assert!(!card.has_category("mining"));
    }

    #[test]
    fn image_path_handles_slashes() {
        assert_eq!(image_path("./images/", "a.png"), "./images/a.png");
        assert_eq!(image_path("", "a.png"), "a.png");
    }
}
