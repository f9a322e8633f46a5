//! gender-decoder - gendered language checker for job adverts
//!
//! Splits advert text into words, matches them against lists of masculine-
//! and feminine-coded word stems, and labels the advert by which side
//! dominates.
//!
//! ```
//! use gender_decoder::{analyse, AnalysisConfig, CodingScore};
//!
//! let result = analyse("We need a competitive, driven leader.", &AnalysisConfig::default());
//! assert_eq!(result.score, CodingScore::MasculineCoded);
//! assert_eq!(result.masculine_coding.get("leader"), Some(&1));
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod reporters;
pub mod scoring;

pub use analysis::{analyse, tokenize, AnalysisConfig, HyphenPolicy};
pub use config::WordLists;
pub use error::{DecoderError, DecoderResult};
pub use models::{CodingResult, GenderedCounts, WordCounts};
pub use scoring::CodingScore;
