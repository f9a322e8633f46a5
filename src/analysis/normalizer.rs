//! Advert text → word tokens
//!
//! Non-ASCII characters, whitespace and a fixed set of punctuation marks all
//! act as token separators. Hyphens are left in place for the hyphen
//! resolver.

use regex::Regex;
use std::sync::OnceLock;

static PUNCTUATION_RE: OnceLock<Regex> = OnceLock::new();

/// Punctuation treated as a word separator. Typographic quotes are listed
/// even though the non-ASCII pass already blanks them.
fn punctuation_re() -> &'static Regex {
    PUNCTUATION_RE
        .get_or_init(|| Regex::new(r#"[.\t,“”‘’<>*?!"\[\]@':;()\\/&]"#).expect("valid regex"))
}

/// ASCII whitespace, including vertical tab and the `\x1c`-`\x1f` separators
#[inline]
fn is_separator_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c' | '\x1c'..='\x1f')
}

/// Blank out non-ASCII characters and whitespace, one space per character.
///
/// Runs of whitespace are not collapsed; empty pieces are dropped when the
/// text is split.
fn blank_non_ascii_and_whitespace(ad_text: &str) -> String {
    ad_text
        .chars()
        .map(|c| {
            if !c.is_ascii() || is_separator_space(c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

/// Split advert text into lowercase word tokens.
///
/// Every returned token is non-empty, ASCII, lowercase and free of
/// whitespace and separator punctuation. Empty input gives no tokens.
pub fn clean_up_word_list(ad_text: &str) -> Vec<String> {
    let cleaner_text = blank_non_ascii_and_whitespace(ad_text);
    punctuation_re()
        .replace_all(&cleaner_text, " ")
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect()
}
