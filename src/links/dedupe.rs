// src/links/dedupe.rs
// =============================================================================
// Removes duplicate URLs while keeping first-seen order, so the output
// document lists sub-URLs and files in the order they appear on the page.
//
// Equality is exact: no case folding, no trailing-slash or query cleanup.
// "https://example.com/a" and "https://example.com/a/" stay distinct.
// =============================================================================

use std::collections::HashSet;

pub fn dedupe(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keeps_first_occurrence_order() {
        let deduped = dedupe(strings(&["b", "a", "b", "c", "a"]));
        assert_eq!(deduped, strings(&["b", "a", "c"]));
    }

    #[test]
    fn test_idempotent() {
        let once = dedupe(strings(&["x", "y", "x", "z", "y"]));
        let twice = dedupe(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_no_normalization() {
        let input = strings(&[
            "https://example.com/a",
            "https://example.com/a/",
            "https://EXAMPLE.com/a",
            "https://example.com/a#top",
        ]);
        assert_eq!(dedupe(input.clone()), input);
    }

    #[test]
    fn test_empty() {
        assert!(dedupe(Vec::new()).is_empty());
    }
}
