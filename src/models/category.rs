//! Category vocabulary
//!
//! Categories are plain labels. The known set is the seed list below plus
//! every category that has ever appeared on an expense or budget.

/// Seed list of expense categories
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Housing",
    "Transportation",
    "Food & Dining",
    "Utilities",
    "Healthcare",
    "Entertainment",
    "Shopping",
    "Personal Care",
    "Education",
    "Other",
];

/// Suggested income sources
pub const INCOME_SOURCES: &[&str] = &[
    "Salary",
    "Freelance",
    "Investment",
    "Rental",
    "Business",
    "Gift",
    "Other",
];

/// Filter value meaning "every category"
pub const ALL_CATEGORIES: &str = "All";

/// Merge the seed list with every category in use
///
/// Seed entries come first in their listed order, followed by other
/// categories in the order they are first seen. Duplicates are dropped.
pub fn build_vocabulary<'a, S, U>(seed: S, used: U) -> Vec<String>
where
    S: IntoIterator<Item = &'a str>,
    U: IntoIterator<Item = &'a str>,
{
    let mut vocabulary: Vec<String> = Vec::new();
    for category in seed.into_iter().chain(used) {
        if !vocabulary.iter().any(|known| known == category) {
            vocabulary.push(category.to_string());
        }
    }
    vocabulary
}
