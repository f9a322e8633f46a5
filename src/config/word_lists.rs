//! Coded word stems
//!
//! Stems are matched by substring containment against whole tokens, so
//! "lead" catches "leader", "leadership" and "misleading" alike.

use crate::error::{DecoderError, DecoderResult};
use serde::{Deserialize, Serialize};

/// Compound prefixes that keep their hyphen when tokens are split
const HYPHENATED_CODED_WORDS: &[&str] = &[
    "co-operat",
    "inter-personal",
    "inter-dependen",
    "inter-persona",
    "self-confiden",
    "self-relian",
    "self-sufficien",
];

const MASCULINE_CODED_WORDS: &[&str] = &[
    "active",
    "adventurous",
    "aggress",
    "ambitio",
    "analy",
    "assert",
    "athlet",
    "autonom",
    "battle",
    "boast",
    "challeng",
    "champion",
    "compet",
    "confident",
    "courag",
    "decid",
    "decision",
    "decisive",
    "defend",
    "determin",
    "domina",
    "dominant",
    "driven",
    "fearless",
    "fight",
    "force",
    "greedy",
    "guys",
    "head-strong",
    "headstrong",
    "hierarch",
    "hostil",
    "impulsive",
    "independen",
    "individual",
    "intellect",
    "lead",
    "logic",
    "objective",
    "opinion",
    "outspoken",
    "persist",
    "principle",
    "reckless",
    "self-confiden",
    "self-relian",
    "self-sufficien",
    "selfconfiden",
    "selfrelian",
    "selfsufficien",
    "stubborn",
    "superior",
    "unreasonab",
];

const FEMININE_CODED_WORDS: &[&str] = &[
    "agree",
    "affectionate",
    "child",
    "cheer",
    "collab",
    "commit",
    "communal",
    "compassion",
    "connect",
    "considerate",
    "cooperat",
    "co-operat",
    "depend",
    "emotiona",
    "empath",
    "feel",
    "flatterable",
    "gentle",
    "honest",
    "interpersonal",
    "interdependen",
    "interpersona",
    "inter-personal",
    "inter-dependen",
    "inter-persona",
    "kind",
    "kinship",
    "loyal",
    "modesty",
    "nag",
    "nurtur",
    "pleasant",
    "polite",
    "quiet",
    "respon",
    "sensitiv",
    "submissive",
    "support",
    "sympath",
    "tender",
    "together",
    "trust",
    "understand",
    "warm",
    "whin",
    "enthusias",
    "inclusive",
    "yield",
    "share",
    "sharin",
];

/// The three stem lists an analysis runs against.
///
/// Any list left out of a config file falls back to the built-in one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordLists {
    #[serde(default = "default_hyphenated")]
    pub hyphenated_coded_words: Vec<String>,

    #[serde(default = "default_masculine")]
    pub masculine_coded_words: Vec<String>,

    #[serde(default = "default_feminine")]
    pub feminine_coded_words: Vec<String>,
}

impl Default for WordLists {
    fn default() -> Self {
        Self {
            hyphenated_coded_words: default_hyphenated(),
            masculine_coded_words: default_masculine(),
            feminine_coded_words: default_feminine(),
        }
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_hyphenated() -> Vec<String> {
    owned(HYPHENATED_CODED_WORDS)
}
fn default_masculine() -> Vec<String> {
    owned(MASCULINE_CODED_WORDS)
}
fn default_feminine() -> Vec<String> {
    owned(FEMININE_CODED_WORDS)
}

impl WordLists {
    /// Build lists from explicit stems (mainly for tests and library users)
    pub fn new<S: AsRef<str>>(hyphenated: &[S], masculine: &[S], feminine: &[S]) -> Self {
        let collect = |words: &[S]| -> Vec<String> {
            words.iter().map(|w| w.as_ref().to_string()).collect()
        };
        Self {
            hyphenated_coded_words: collect(hyphenated),
            masculine_coded_words: collect(masculine),
            feminine_coded_words: collect(feminine),
        }
    }

    /// Lowercase and trim every stem, rejecting blank ones.
    ///
    /// Tokens are always lowercase, so an uppercase stem could never match.
    pub fn normalized(self) -> DecoderResult<Self> {
        Ok(Self {
            hyphenated_coded_words: normalize_list(
                "hyphenated_coded_words",
                self.hyphenated_coded_words,
            )?,
            masculine_coded_words: normalize_list(
                "masculine_coded_words",
                self.masculine_coded_words,
            )?,
            feminine_coded_words: normalize_list("feminine_coded_words", self.feminine_coded_words)?,
        })
    }
}

fn normalize_list(name: &str, words: Vec<String>) -> DecoderResult<Vec<String>> {
    words
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let stem = word.trim().to_lowercase();
            if stem.is_empty() {
                Err(DecoderError::InvalidWordList {
                    list: name.to_string(),
                    message: format!("entry {} is blank", i),
                })
            } else {
                Ok(stem)
            }
        })
        .collect()
}
