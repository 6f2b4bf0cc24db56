//! Receipt scoring rules.
//!
//! Every rule is additive and evaluated independently. A rule whose field
//! fails to parse contributes zero instead of aborting the computation, so
//! [`score`] never fails.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::receipt::{Item, Receipt};

/// Bonus for a total with zero cents.
const ROUND_DOLLAR_BONUS: u64 = 50;
/// Bonus for a total divisible by 0.25.
const QUARTER_MULTIPLE_BONUS: u64 = 25;
/// Points per complete pair of items.
const ITEM_PAIR_BONUS: u64 = 5;
/// Bonus when the purchase day-of-month is odd.
const ODD_DAY_BONUS: u64 = 6;
/// Bonus for a purchase strictly between 14:00 and 16:00.
const AFTERNOON_BONUS: u64 = 10;

/// Compute the point total for a receipt.
///
/// Deterministic over the receipt contents; malformed numeric, date, or time
/// fields leave their rule's contribution at zero while the remaining rules
/// still apply.
pub fn score(receipt: &Receipt) -> u64 {
    retailer_name_points(&receipt.retailer)
        + round_dollar_points(&receipt.total)
        + quarter_multiple_points(&receipt.total)
        + item_pair_points(&receipt.items)
        + description_length_points(&receipt.items)
        + odd_day_points(&receipt.purchase_date)
        + afternoon_points(&receipt.purchase_time)
}

/// One point per ASCII-alphanumeric character in the retailer name.
fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

/// Parse a decimal currency string to minor units, rounding to whole cents.
fn parse_cents(amount: &str) -> Option<i64> {
    let value: f64 = amount.parse().ok()?;
    Some((value * 100.0).round() as i64)
}

/// Fifty points when the total is a whole-dollar amount.
fn round_dollar_points(total: &str) -> u64 {
    match total.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => ROUND_DOLLAR_BONUS,
        _ => 0,
    }
}

/// Twenty-five points when the total in cents is a multiple of 25.
///
/// Evaluated independently of the round-dollar rule: a whole-dollar total
/// earns both bonuses.
fn quarter_multiple_points(total: &str) -> u64 {
    match parse_cents(total) {
        Some(cents) if cents % 25 == 0 => QUARTER_MULTIPLE_BONUS,
        _ => 0,
    }
}

/// Five points per complete pair of items.
fn item_pair_points(items: &[Item]) -> u64 {
    (items.len() as u64 / 2) * ITEM_PAIR_BONUS
}

/// ceil(price × 0.2) for each item whose trimmed description length is a
/// multiple of 3. A length of 0 qualifies; an item with an unparseable price
/// drops out of this rule only.
fn description_length_points(items: &[Item]) -> u64 {
    items
        .iter()
        .filter(|item| item.short_description.trim().len() % 3 == 0)
        .filter_map(|item| item.price.parse::<f64>().ok())
        .map(|price| (price * 0.2).ceil().max(0.0) as u64)
        .sum()
}

/// Six points when the purchase day-of-month is odd.
fn odd_day_points(date: &str) -> u64 {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
        _ => 0,
    }
}

/// Ten points for a purchase strictly inside the 14:00–16:00 window.
/// The endpoints themselves do not qualify.
fn afternoon_points(time: &str) -> u64 {
    const WINDOW_START: u32 = 14 * 60;
    const WINDOW_END: u32 = 16 * 60;

    match NaiveTime::parse_from_str(time, "%H:%M") {
        Ok(time) => {
            let minute_of_day = time.hour() * 60 + time.minute();
            if minute_of_day > WINDOW_START && minute_of_day < WINDOW_END {
                AFTERNOON_BONUS
            } else {
                0
            }
        }
        Err(_) => 0,
    }
}
