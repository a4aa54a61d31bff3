//! Deal records as they appear in `deals.json`.
use crate::error::DealsError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};

/// A single promotional deal.
///
/// Every field is optional in the source data. Missing, `null` or wrongly
/// typed values fall back to the defaults the page renders with. Numbers and
/// `true` are accepted where text is expected, and numeric text is accepted
/// for the discount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DealRecord {
    #[serde(default, deserialize_with = "loose_string")]
    pub title: String,
    #[serde(default, deserialize_with = "loose_string")]
    pub description: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub url: Option<String>,
    /// Filename under the images directory
    #[serde(default, deserialize_with = "loose_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub starts: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub ends: Option<String>,
    /// Percentage off; absent means 0
    #[serde(default, deserialize_with = "loose_number")]
    pub discount: Option<f64>,
    #[serde(default, deserialize_with = "loose_text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "loose_categories")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "loose_flag")]
    pub featured: bool,
    /// Position in the source array, assigned by the loader
    #[serde(default)]
    pub index: usize,
}

// A field of the wrong type falls back to its default; one bad record never
// rejects the list.

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number_text(&number)),
        Value::Bool(true) => Some(String::from("true")),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral numbers print without a fractional part, as the browser does.
fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        return int.to_string();
    }
    match number.as_f64() {
        Some(float) if float.fract() == 0.0 && float.abs() < 9_007_199_254_740_992.0 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(loose_text(deserializer)?.unwrap_or_default())
}

fn loose_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn loose_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => true,
    })
}

fn loose_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        _ => Vec::new(),
    })
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

impl DealRecord {
    /// Link target, if the deal has one.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        non_empty(self.url.as_ref())
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        non_empty(self.image.as_ref())
    }

    #[must_use]
    pub fn starts(&self) -> Option<&str> {
        non_empty(self.starts.as_ref())
    }

    #[must_use]
    pub fn ends(&self) -> Option<&str> {
        non_empty(self.ends.as_ref())
    }

    #[must_use]
    pub fn code(&self) -> Option<&str> {
        non_empty(self.code.as_ref())
    }

    /// Discount with absent, zero and NaN values all normalized to `0.0`.
    #[must_use]
    pub fn discount_or_zero(&self) -> f64 {
        self.discount
            .filter(|d| *d != 0.0 && !d.is_nan())
            .unwrap_or(0.0)
    }
}

/// Assign each record its position in the list.
#[must_use]
pub fn index_deals(mut deals: Vec<DealRecord>) -> Vec<DealRecord> {
    for (index, deal) in deals.iter_mut().enumerate() {
        deal.index = index;
    }
    deals
}

/// Parse a JSON array of deals and index them by position.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON array of deal objects.
pub fn load_deals(json: &str) -> Result<Vec<DealRecord>, DealsError> {
    let deals: Vec<DealRecord> = serde_json::from_str(json)?;
    log::debug!("parsed {} deals", deals.len());
    Ok(index_deals(deals))
}
