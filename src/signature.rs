//! Canonical keys for words. Two words share a signature when they use the
//! same set of letters, however many times each letter appears.

use std::collections::BTreeSet;

/// Lowercases `word`, drops repeated characters and sorts what's left by
/// code point. `"Lake"` and `"kale"` both come out as `"aekl"`.
pub fn signature(word: &str) -> String {
    word.chars()
        .flat_map(char::to_lowercase)
        .collect::<BTreeSet<char>>()
        .into_iter()
        .collect()
}
