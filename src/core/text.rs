use std::collections::HashSet;

/// Normalize free text for lexical comparison
///
/// Lowercases, replaces every non-alphanumeric ASCII character with a space,
/// collapses whitespace runs and trims the ends.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Set of normalized, whitespace-delimited tokens
pub fn token_set(input: &str) -> HashSet<String> {
    normalize(input)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Containment-style similarity between two strings
///
/// Returns `|A ∩ B| / min(|A|, |B|)` over the token sets, or 0 when either set
/// is empty. A short string fully contained in a longer one scores 1.0.
pub fn token_overlap(a: &str, b: &str) -> f64 {
    let left = token_set(a);
    let right = token_set(b);

    if left.is_empty() || right.is_empty() {
        return 0.0;
    }

    let shared = left.intersection(&right).count();
    shared as f64 / left.len().min(right.len()) as f64
}

/// Whole-word phrase containment on already normalized text
#[inline]
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    format!(" {} ", haystack).contains(&format!(" {} ", needle))
}
