/// Fold the case of a text so that it can be compared case-insensitively.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Check whether `needle` occurs in `haystack`, ignoring case.
///
/// An empty needle is contained in every text.
pub fn contains_ignoring_case(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}
