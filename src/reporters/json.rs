//! JSON reporter
//!
//! Outputs the full CodingResult as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::models::CodingResult;
use anyhow::Result;

/// Render result as JSON
pub fn render(result: &CodingResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_result;

    #[test]
    fn test_json_render_valid() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(parsed["score"], "masculine-coded");
        assert_eq!(parsed["masculine_coding"]["competitive"], 2);
        assert_eq!(parsed["feminine_coding"]["supportive"], 1);
    }

    #[test]
    fn test_json_roundtrip() {
        let result = test_result();
        let json_str = render(&result).expect("render JSON");
        let back: CodingResult = serde_json::from_str(&json_str).expect("parse JSON");
        assert_eq!(back, result);
    }

    #[test]
    fn test_json_empty_mappings() {
        let mut result = test_result();
        result.feminine_coding.clear();
        result.masculine_coding.clear();
        let json_str = render(&result).expect("render JSON");
        let parsed: serde_json::Value = serde_json::from_str(&json_str).expect("parse JSON");
        assert!(parsed["feminine_coding"].as_object().expect("object").is_empty());
        assert!(parsed["masculine_coding"].as_object().expect("object").is_empty());
    }
}
