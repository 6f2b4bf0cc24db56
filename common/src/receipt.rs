use serde::{Deserialize, Serialize};

/// A purchase receipt as submitted for scoring.
///
/// Field values are kept as the raw strings from the JSON body; nothing is
/// normalized here. Rules that need a parsed total, date, or time attempt the
/// parse themselves and contribute zero points when it fails, so a receipt
/// with missing or garbled fields still scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Receipt {
    pub retailer: String,
    /// Purchase date as `YYYY-MM-DD` (calendar date, no time zone).
    pub purchase_date: String,
    /// Purchase time as `HH:MM` on a 24-hour clock.
    pub purchase_time: String,
    pub items: Vec<Item>,
    /// Total amount as a decimal string, e.g. "35.35".
    pub total: String,
}

/// A single line item on a receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub short_description: String,
    /// Item price as a decimal string, e.g. "12.25".
    pub price: String,
}
