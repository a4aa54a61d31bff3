//! Deals Core
//!
//! Platform-agnostic model for the Bitcoin Black Friday deals page.
//! Loads deal records, projects them into card view-models and keeps the
//! filter and sort selections as explicit state, without touching the DOM.

pub mod card;
pub mod category;
pub mod collate;
pub mod config;
pub mod deal;
pub mod error;
pub mod filter;
pub mod format;
pub mod route;
pub mod sort;
pub mod view;

// Re-export commonly used types
pub use card::DealCard;
pub use category::unique_categories;
pub use collate::{Collator, FoldCollator};
pub use config::{Features, SectionConfig, SiteConfig};
pub use deal::{DealRecord, index_deals, load_deals};
pub use error::DealsError;
pub use filter::{FilterSelection, FilterState};
pub use format::{format_timestamp, parse_timestamp};
pub use route::{SectionResolution, resolve_section, section_id_from_hash};
pub use sort::{SortKind, SortState, arrange, compare_default, rearrange};
pub use view::DealsView;
