//! Category display formatting

use crate::config::Settings;
use crate::models::{Money, Period, DEFAULT_CATEGORIES};
use crate::store::LedgerStore;

/// Format the category vocabulary with each category's limit for `period`
///
/// Categories outside the seed list are marked as custom.
pub fn format_category_list(store: &LedgerStore, period: Period, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  {:24} {:>12}\n",
        "Category",
        format!("{} limit", period.key())
    ));

    for category in store.known_categories() {
        let limit = store
            .budget_for(&category, period)
            .map(|b| b.monthly_limit)
            .map(|m: Money| m.format_with_symbol(&settings.currency_symbol))
            .unwrap_or_else(|| "-".to_string());
        let marker = if DEFAULT_CATEGORIES.contains(&category.as_str()) {
            ""
        } else {
            "  (custom)"
        };
        output.push_str(&format!("  {:24} {:>12}{}\n", category, limit, marker));
    }

    output
}
