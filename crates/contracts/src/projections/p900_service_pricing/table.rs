use super::dto::{PricingResult, TableRow};
use crate::shared::collation::locale_compare;

/// Shown in place of a missing or empty formatted amount.
pub const MISSING_AMOUNT: &str = "N/A";

/// Build pricing table rows, sorted by service type.
///
/// Row ids are assigned in the mapping's order (as received) before sorting.
/// The sort is stable.
pub fn build_table_rows(pricing: &PricingResult) -> Vec<TableRow> {
    let mut rows: Vec<TableRow> = pricing
        .iter()
        .enumerate()
        .map(|(index, (service_type, formatted))| TableRow {
            id: format!("row-{}", index),
            service_type: service_type.to_string(),
            formatted_amount: match formatted {
                Some(amount) if !amount.is_empty() => amount.to_string(),
                _ => MISSING_AMOUNT.to_string(),
            },
        })
        .collect();

    rows.sort_by(|a, b| locale_compare(&a.service_type, &b.service_type));
    rows
}
