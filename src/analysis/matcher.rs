//! Coded word matching
//!
//! Counts every token, then keeps the tokens that contain a coded stem as a
//! substring. Matches are recorded under the token, not the stem, with the
//! token's full count.

use crate::config::WordLists;
use crate::models::{GenderedCounts, WordCounts};
use tracing::debug;

/// Count tokens by exact string equality, ordered by first appearance
pub fn count_words(tokens: &[String]) -> WordCounts {
    let mut counts = WordCounts::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}

/// Restrict `counts` to tokens containing at least one of `stems`.
///
/// A token matching several stems is recorded once.
pub fn gendered_counts(counts: &WordCounts, stems: &[String]) -> WordCounts {
    counts
        .iter()
        .filter(|(word, _)| stems.iter().any(|stem| word.contains(stem.as_str())))
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

/// Masculine and feminine counts for a token list
pub fn extract_coded_words(tokens: &[String], word_lists: &WordLists) -> GenderedCounts {
    let word_counts = count_words(tokens);
    let masculine = gendered_counts(&word_counts, &word_lists.masculine_coded_words);
    let feminine = gendered_counts(&word_counts, &word_lists.feminine_coded_words);
    debug!(
        "{} distinct words, {} masculine-coded, {} feminine-coded",
        word_counts.len(),
        masculine.len(),
        feminine.len()
    );

    GenderedCounts {
        masculine,
        feminine,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn stems(words: &[&str]) -> Vec<String> {
        tokens(words)
    }

    #[test]
    fn test_count_words_first_seen_order() {
        let counts = count_words(&tokens(&["b", "a", "b", "c", "a", "b"]));
        let entries: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(entries, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_count_words_empty() {
        assert!(count_words(&[]).is_empty());
    }

    #[test]
    fn test_substring_match_keyed_by_token() {
        let counts = count_words(&tokens(&["leadership", "leader", "leadership", "team"]));
        let masculine = gendered_counts(&counts, &stems(&["lead"]));
        assert_eq!(masculine.get("leadership"), Some(&2));
        assert_eq!(masculine.get("leader"), Some(&1));
        assert!(!masculine.contains_key("lead"));
        assert!(!masculine.contains_key("team"));
    }

    #[test]
    fn test_multiple_stems_do_not_double_count() {
        let counts = count_words(&tokens(&["self-confident", "self-confident"]));
        let masculine = gendered_counts(&counts, &stems(&["self-confiden", "confident"]));
        assert_eq!(masculine.len(), 1);
        assert_eq!(masculine.get("self-confident"), Some(&2));
    }

    #[test]
    fn test_guys_is_masculine() {
        let coded = extract_coded_words(&tokens(&["guys"]), &WordLists::default());
        assert_eq!(coded.masculine.get("guys"), Some(&1));
        assert_eq!(coded.masculine.len(), 1);
        assert!(coded.feminine.is_empty());
    }

    #[test]
    fn test_token_in_both_lists() {
        // "independent" holds both "independen" and "depend"
        let coded = extract_coded_words(
            &tokens(&["independent", "independent", "warm"]),
            &WordLists::default(),
        );
        assert_eq!(coded.masculine.get("independent"), Some(&2));
        assert_eq!(coded.feminine.get("independent"), Some(&2));
        assert_eq!(coded.feminine.get("warm"), Some(&1));
    }

    #[test]
    fn test_gendered_counts_are_subset_of_word_counts() {
        let words = tokens(&[
            "we", "need", "a", "driven", "leader", "who", "is", "supportive", "and", "driven",
            "to", "collaborate", "with", "a", "loyal", "team",
        ]);
        let all = count_words(&words);
        let coded = extract_coded_words(&words, &WordLists::default());
        for (word, count) in coded.masculine.iter().chain(coded.feminine.iter()) {
            assert_eq!(all.get(word), Some(count), "{word} count differs");
        }
        assert_eq!(coded.masculine.get("driven"), Some(&2));
        assert_eq!(coded.feminine.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_gendered_order_follows_text() {
        let words = tokens(&["trust", "kind", "support"]);
        let coded = extract_coded_words(&words, &WordLists::default());
        let keys: Vec<&str> = coded.feminine.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["trust", "kind", "support"]);
    }
}
