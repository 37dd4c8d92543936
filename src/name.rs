// src/name.rs

//! Normalization of handwritten recipe names
//!
//! Rules, applied in order:
//! - hyphens and underscores become spaces
//! - anything that is not an ASCII letter or whitespace is dropped
//! - runs of whitespace collapse to a single space, with no leading or
//!   trailing space
//! - every word is capitalised, with the rest of the word in lower case
//!
//! A name that is empty after cleanup is rejected.

use regex::Regex;
use std::sync::LazyLock;

static NOT_LETTER_OR_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z\s]").expect("static regex"));

/// Normalize a free-text recipe name
///
/// Returns `None` if nothing is left after cleanup.
///
/// ```
/// use cookbook::name::normalize_name;
///
/// assert_eq!(normalize_name("Riso-tto").as_deref(), Some("Riso Tto"));
/// assert_eq!(normalize_name("123"), None);
/// ```
pub fn normalize_name(input: &str) -> Option<String> {
    let spaced = input.replace(['-', '_'], " ");
    let letters = NOT_LETTER_OR_SPACE.replace_all(&spaced, "");

    let words: Vec<String> = letters.split_whitespace().map(capitalize).collect();
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(normalize_name("Riso-tto").as_deref(), Some("Riso Tto"));
        assert_eq!(
            normalize_name("Skibidi spaghetti  Rizz_").as_deref(),
            Some("Skibidi Spaghetti Rizz")
        );
    }

    #[test]
    fn test_capitalization() {
        assert_eq!(normalize_name("meatball").as_deref(), Some("Meatball"));
        assert_eq!(
            normalize_name("alpHa-alFRedo").as_deref(),
            Some("Alpha Alfredo")
        );
    }

    #[test]
    fn test_non_letters_are_dropped() {
        assert_eq!(normalize_name("Sk1b1d1 T0ilet!").as_deref(), Some("Skbd Tilet"));
        // Dropping a word made of digits must not leave a double space
        assert_eq!(normalize_name("Pie 3 14 Crust").as_deref(), Some("Pie Crust"));
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        assert_eq!(
            normalize_name("  \tchicken \n  soup  ").as_deref(),
            Some("Chicken Soup")
        );
    }

    #[test]
    fn test_empty_result_is_rejected() {
        assert_eq!(normalize_name(""), None);
        assert_eq!(normalize_name("!!!"), None);
        assert_eq!(normalize_name("-_- 42"), None);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for input in ["Riso-tto", "meatball", "Skibidi spaghetti  Rizz_"] {
            let once = normalize_name(input).unwrap();
            assert_eq!(normalize_name(&once).as_deref(), Some(once.as_str()));
        }
    }
}
