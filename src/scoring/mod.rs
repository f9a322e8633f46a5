//! Gender-coding score
//!
//! Turns the masculine and feminine word counts of an advert into a single
//! categorical label.
//!
//! # Scoring Formula
//!
//! ```text
//! diff = feminine_total - masculine_total
//!
//!   diff == 0     → neutral (if any feminine words) / empty
//!   diff >  3     → strongly feminine-coded
//!   0 < diff ≤ 3  → feminine-coded
//!   diff < -3     → strongly masculine-coded
//!   -3 ≤ diff < 0 → masculine-coded
//! ```
//!
//! # Example
//!
//! An advert with 2 feminine-coded words ("supportive", "collaborative") and
//! 5 masculine-coded words gives diff = -3 → masculine-coded.

mod coding_score;

pub use coding_score::{assess_coding, CodingScore, STRONG_CODING_THRESHOLD};
