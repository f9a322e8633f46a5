use crate::models::{CodingResult, GenderedCounts};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

/// A diff beyond this many words counts as strongly coded
pub const STRONG_CODING_THRESHOLD: i64 = 3;

/// Categorical gender-coding label for an advert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodingScore {
    /// No coded words at all
    #[serde(rename = "empty")]
    Empty,
    /// Coded words present, equal weight on both sides
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "feminine-coded")]
    FeminineCoded,
    #[serde(rename = "strongly feminine-coded")]
    StronglyFeminineCoded,
    #[serde(rename = "masculine-coded")]
    MasculineCoded,
    #[serde(rename = "strongly masculine-coded")]
    StronglyMasculineCoded,
}

impl CodingScore {
    /// Label for a signed `feminine - masculine` difference.
    ///
    /// `has_feminine` only matters when the difference is zero: it separates
    /// a balanced advert from one without any coded words.
    pub fn from_diff(diff: i64, has_feminine: bool) -> Self {
        match diff {
            0 if has_feminine => CodingScore::Neutral,
            0 => CodingScore::Empty,
            d if d > STRONG_CODING_THRESHOLD => CodingScore::StronglyFeminineCoded,
            d if d > 0 => CodingScore::FeminineCoded,
            d if d < -STRONG_CODING_THRESHOLD => CodingScore::StronglyMasculineCoded,
            _ => CodingScore::MasculineCoded,
        }
    }

    /// Label for a pair of occurrence totals
    pub fn from_totals(feminine_total: usize, masculine_total: usize) -> Self {
        let diff = feminine_total as i64 - masculine_total as i64;
        Self::from_diff(diff, feminine_total > 0)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CodingScore::Empty => "empty",
            CodingScore::Neutral => "neutral",
            CodingScore::FeminineCoded => "feminine-coded",
            CodingScore::StronglyFeminineCoded => "strongly feminine-coded",
            CodingScore::MasculineCoded => "masculine-coded",
            CodingScore::StronglyMasculineCoded => "strongly masculine-coded",
        }
    }
}

impl std::fmt::Display for CodingScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CodingScore {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" => Ok(CodingScore::Empty),
            "neutral" => Ok(CodingScore::Neutral),
            "feminine-coded" => Ok(CodingScore::FeminineCoded),
            "strongly feminine-coded" => Ok(CodingScore::StronglyFeminineCoded),
            "masculine-coded" => Ok(CodingScore::MasculineCoded),
            "strongly masculine-coded" => Ok(CodingScore::StronglyMasculineCoded),
            _ => Err(anyhow::anyhow!("Unknown coding score '{}'", s)),
        }
    }
}

/// Attach a score to a pair of gendered counts
pub fn assess_coding(counts: GenderedCounts) -> CodingResult {
    let mut result = CodingResult {
        feminine_coding: counts.feminine,
        masculine_coding: counts.masculine,
        score: CodingScore::Empty,
    };
    let (feminine_total, masculine_total) = (result.feminine_total(), result.masculine_total());
    result.score = CodingScore::from_totals(feminine_total, masculine_total);
    debug!(
        "Coding totals: feminine={} masculine={} -> {}",
        feminine_total, masculine_total, result.score
    );

    result
}
