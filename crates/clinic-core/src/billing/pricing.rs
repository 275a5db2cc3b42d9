//! Pricing engine for service selections.

use serde::{Deserialize, Serialize};

use crate::models::Service;

/// Computed totals for a service selection.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub subtotal: i64,
    pub discount_amount: i64,
    pub total: i64,
}

/// Round half-up to a whole currency unit. Amounts here are never negative.
pub(crate) fn round_half_up(value: f64) -> i64 {
    value.round() as i64
}

/// Price a selection against the catalog.
///
/// Unknown ids are silently dropped and duplicate ids count once. The draft
/// builder persists exactly what this returns, so the live summary and the
/// stored totals cannot diverge.
pub fn price_selection(selected_ids: &[String], catalog: &[Service], discount_percent: f64) -> Quote {
    let subtotal: i64 = catalog
        .iter()
        .filter(|s| selected_ids.iter().any(|id| id == &s.id))
        .map(|s| s.price)
        .sum();
    let discount_amount = round_half_up(subtotal as f64 * discount_percent / 100.0);
    Quote {
        subtotal,
        discount_amount,
        total: subtotal - discount_amount,
    }
}
