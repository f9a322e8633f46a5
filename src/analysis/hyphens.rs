//! Hyphenated token splitting
//!
//! Hyphenated tokens are broken into their parts unless they start with a
//! known coded compound prefix such as "co-operat" or "self-confiden", which
//! must survive intact to be matched.
//!
//! Which tokens are considered for splitting depends on [`HyphenPolicy`].
//! The default, [`HyphenPolicy::LeadingOnly`], only looks at tokens that
//! *begin* with a hyphen, so ordinary compounds like "team-player" are never
//! split. [`HyphenPolicy::Anywhere`] is the inverse: every hyphenated token
//! is considered except those beginning with a hyphen, which stay whole.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which hyphenated tokens are candidates for splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HyphenPolicy {
    /// Only tokens starting with `-`
    #[default]
    #[serde(rename = "leading")]
    LeadingOnly,
    /// Tokens containing `-` anywhere but the first character
    #[serde(rename = "anywhere")]
    Anywhere,
}

impl HyphenPolicy {
    fn is_candidate(&self, token: &str) -> bool {
        match self {
            HyphenPolicy::LeadingOnly => token.starts_with('-'),
            HyphenPolicy::Anywhere => !token.starts_with('-') && token.contains('-'),
        }
    }
}

impl FromStr for HyphenPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leading" | "leading-only" => Ok(HyphenPolicy::LeadingOnly),
            "anywhere" => Ok(HyphenPolicy::Anywhere),
            _ => Err(anyhow::anyhow!(
                "Unknown hyphen policy '{}'. Valid policies: leading, anywhere",
                s
            )),
        }
    }
}

impl std::fmt::Display for HyphenPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HyphenPolicy::LeadingOnly => write!(f, "leading"),
            HyphenPolicy::Anywhere => write!(f, "anywhere"),
        }
    }
}

/// Split candidate hyphenated tokens in place.
///
/// A candidate that does not start with any of `coded_prefixes` is replaced,
/// at its own position, by its non-empty `-`-separated parts. All other
/// tokens pass through unchanged and in order.
pub fn resolve_hyphens(
    tokens: Vec<String>,
    coded_prefixes: &[String],
    policy: HyphenPolicy,
) -> Vec<String> {
    let mut resolved = Vec::with_capacity(tokens.len());

    for token in tokens {
        let keep = !policy.is_candidate(&token)
            || coded_prefixes
                .iter()
                .any(|prefix| token.starts_with(prefix.as_str()));

        if keep {
            resolved.push(token);
        } else {
            resolved.extend(
                token
                    .split('-')
                    .filter(|part| !part.is_empty())
                    .map(str::to_string),
            );
        }
    }

    resolved
}
