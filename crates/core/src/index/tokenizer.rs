//! Term tokenization shared by indexing and search.
//!
//! Both sides of the index must normalize identically, otherwise a query
//! can never match what was indexed. Keep this the single definition.

use std::collections::BTreeMap;

/// Split text into normalized terms: case-folded, punctuation and
/// whitespace act as separators, empty fragments dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Per-term occurrence counts for a note's content, in stable term order.
pub fn term_frequencies(text: &str) -> BTreeMap<String, i64> {
    let mut freqs = BTreeMap::new();
    for term in tokenize(text) {
        *freqs.entry(term).or_insert(0) += 1;
    }
    freqs
}
