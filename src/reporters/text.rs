//! Text reporter
//!
//! ```text
//! feminine-coded words: {
//!     "supportive": 1
//! }
//!
//! masculine-coded words: {}
//!
//! final score: feminine-coded
//! ```
//!
//! Word maps are printed as JSON with a 4-space indent, in the order the
//! words first appear in the advert.

use crate::models::{CodingResult, WordCounts};
use anyhow::Result;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

fn pretty_counts(counts: &WordCounts) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    counts.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Render result as the three-section text report
pub fn render(result: &CodingResult) -> Result<String> {
    Ok(format!(
        "feminine-coded words: {}\n\nmasculine-coded words: {}\n\nfinal score: {}",
        pretty_counts(&result.feminine_coding)?,
        pretty_counts(&result.masculine_coding)?,
        result.score
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;
    use crate::scoring::CodingScore;

    #[test]
    fn test_text_render_golden() {
        let out = render(&test_result()).unwrap();
        let expected = "feminine-coded words: {\n    \"supportive\": 1\n}\n\n\
masculine-coded words: {\n    \"leader\": 1,\n    \"competitive\": 2\n}\n\n\
final score: masculine-coded";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_text_render_empty() {
        let result = CodingResult {
            feminine_coding: Default::default(),
            masculine_coding: Default::default(),
            score: CodingScore::Empty,
        };
        assert_eq!(
            render(&result).unwrap(),
            "feminine-coded words: {}\n\nmasculine-coded words: {}\n\nfinal score: empty"
        );
    }

    #[test]
    fn test_three_sections() {
        let out = render(&test_result()).unwrap();
        let sections: Vec<&str> = out.split("\n\n").collect();
        assert_eq!(sections.len(), 3);
        assert!(sections[0].starts_with("feminine-coded words:"));
        assert!(sections[1].starts_with("masculine-coded words:"));
        assert_eq!(sections[2], "final score: masculine-coded");
    }
}
