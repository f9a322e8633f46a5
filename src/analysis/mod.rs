//! Advert analysis pipeline
//!
//! ```text
//! text → normalizer → hyphen resolver → matcher → scorer → CodingResult
//! ```
//!
//! - **Normalizer**: blanks non-ASCII, whitespace and punctuation, lowercases
//! - **Hyphen resolver**: splits non-coded hyphenated tokens
//! - **Matcher**: counts tokens and filters them against the coded stems
//! - **Scorer**: turns the two gendered totals into a label
//!
//! Every stage allocates its own output, so one [`AnalysisConfig`] can be
//! shared freely between callers.

mod hyphens;
mod matcher;
mod normalizer;

pub use hyphens::{resolve_hyphens, HyphenPolicy};
pub use matcher::{count_words, extract_coded_words, gendered_counts};
pub use normalizer::clean_up_word_list;

use crate::config::WordLists;
use crate::models::CodingResult;
use crate::scoring::assess_coding;
use tracing::debug;

/// Everything an analysis depends on besides the advert text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub word_lists: WordLists,
    pub hyphen_policy: HyphenPolicy,
}

impl AnalysisConfig {
    pub fn new(word_lists: WordLists) -> Self {
        Self {
            word_lists,
            hyphen_policy: HyphenPolicy::default(),
        }
    }

    pub fn with_hyphen_policy(mut self, policy: HyphenPolicy) -> Self {
        self.hyphen_policy = policy;
        self
    }
}

/// Normalize advert text and resolve hyphenated tokens
pub fn tokenize(ad_text: &str, config: &AnalysisConfig) -> Vec<String> {
    let words = clean_up_word_list(ad_text);
    resolve_hyphens(
        words,
        &config.word_lists.hyphenated_coded_words,
        config.hyphen_policy,
    )
}

/// Analyse an advert's gender coding
pub fn analyse(ad_text: &str, config: &AnalysisConfig) -> CodingResult {
    let words = tokenize(ad_text, config);
    debug!(
        "Tokenized {} chars into {} words (hyphens: {})",
        ad_text.len(),
        words.len(),
        config.hyphen_policy
    );

    let coded = extract_coded_words(&words, &config.word_lists);
    assess_coding(coded)
}
