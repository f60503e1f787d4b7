//! URL normalization applied before feature extraction.
//!
//! Produces the canonical string every feature extractor measures: the raw
//! input lowercased, with the leading web scheme prefix removed.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches a run of `http://` / `https://` prefixes at the start of the input.
///
/// Only the leading run is stripped. Interior occurrences must survive so
/// that the `count_http` and `count_https` features can see them.
static SCHEME_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:https?://)+").expect("scheme prefix regex is valid"));

/// A URL string that went through [`normalize`].
///
/// Feature extractors accept only this type, so un-normalized input cannot
/// reach them by accident.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for NormalizedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a raw, untrusted URL string.
///
/// # Rules
///
/// 1. The whole string is lowercased
/// 2. A leading `http://` or `https://` is removed (repeated leading prefixes
///    are removed together, which keeps the operation idempotent)
/// 3. Everything else is preserved, including interior scheme strings
///
/// Never fails: empty and garbage input normalize to themselves (lowercased).
///
/// # Examples
///
/// ```
/// use url_classifier::domain::normalizer::normalize;
///
/// assert_eq!(normalize("HTTPS://Example.COM/Path").as_str(), "example.com/path");
/// assert_eq!(
///     normalize("http://a.com/?next=https://b.com").as_str(),
///     "a.com/?next=https://b.com"
/// );
/// ```
pub fn normalize(raw: &str) -> NormalizedUrl {
    let lowered = raw.to_lowercase();
    let stripped = SCHEME_PREFIX_REGEX.replace(&lowered, "");
    NormalizedUrl(stripped.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("WWW.EXAMPLE.COM").as_str(), "www.example.com");
    }

    #[test]
    fn test_normalize_strips_http() {
        assert_eq!(normalize("http://example.com").as_str(), "example.com");
    }

    #[test]
    fn test_normalize_strips_https_case_insensitive() {
        assert_eq!(normalize("HtTpS://example.com/a").as_str(), "example.com/a");
    }

    #[test]
    fn test_normalize_keeps_interior_scheme() {
        let url = normalize("https://redirect.example.com/?to=http://evil.com");
        assert_eq!(url.as_str(), "redirect.example.com/?to=http://evil.com");
    }

    #[test]
    fn test_normalize_keeps_non_leading_scheme() {
        assert_eq!(
            normalize("see http://example.com").as_str(),
            "see http://example.com"
        );
    }

    #[test]
    fn test_normalize_strips_repeated_leading_prefixes() {
        assert_eq!(normalize("http://https://example.com").as_str(), "example.com");
    }

    #[test]
    fn test_normalize_leaves_other_schemes() {
        assert_eq!(
            normalize("FTP://files.example.com").as_str(),
            "ftp://files.example.com"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize("").as_str(), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "HTTP://WWW.Example.com/Login?x=1",
            "http://http://http://x",
            "https:/not-a-prefix",
            "\u{0}\u{1f}garbage\u{7f}",
            "ПРИМЕР.рф/Путь",
            "http://",
        ];

        for input in inputs {
            let once = normalize(input);
            let twice = normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }
}
