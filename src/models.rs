//! Core data models for gender-decoder
//!
//! These models carry the intermediate and final results of an analysis:
//! word counts, the pair of gendered count maps and the coding result.

use crate::scoring::CodingScore;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Token → occurrence count, ordered by first appearance in the text.
pub type WordCounts = IndexMap<String, usize>;

/// Masculine- and feminine-coded word counts for one advert.
///
/// Both maps are filtered views of the advert's full word counts: every key
/// present here carries the same count it has in the full map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderedCounts {
    pub masculine: WordCounts,
    pub feminine: WordCounts,
}

/// Final result of analysing an advert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingResult {
    pub feminine_coding: WordCounts,
    pub masculine_coding: WordCounts,
    pub score: CodingScore,
}

impl CodingResult {
    /// Total number of feminine-coded word occurrences
    pub fn feminine_total(&self) -> usize {
        self.feminine_coding.values().sum()
    }

    /// Total number of masculine-coded word occurrences
    pub fn masculine_total(&self) -> usize {
        self.masculine_coding.values().sum()
    }
}
