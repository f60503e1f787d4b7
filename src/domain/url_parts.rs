//! Generic URI component splitting.
//!
//! Splits a URL string into scheme, authority, path, params, query and
//! fragment without requiring it to be a valid absolute URL. Normalized URLs
//! usually have no scheme at all, which a WHATWG parser such as `url::Url`
//! rejects; this splitter accepts any string and never fails.
//!
//! # Semantics
//!
//! - An authority exists only after a literal `//`. For `example.com/a` the
//!   authority is empty and the whole string is the path.
//! - The fragment starts at the first `#`, the query at the first `?` before it.
//! - For schemes that carry path parameters (including no scheme at all),
//!   a `;params` suffix of the last path segment is split off the path.

use regex::Regex;
use std::sync::LazyLock;

/// Generic URI component regex. Matches every input string.
static URI_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)\A(?:(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*):)?(?://(?P<authority>[^/?#]*))?(?P<path>[^?#]*)(?:\?(?P<query>[^#]*))?(?:#(?P<fragment>.*))?\z",
    )
    .expect("URI regex is valid")
});

/// Schemes whose last path segment may carry `;params`.
const SCHEMES_WITH_PARAMS: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtsps", "rtspu",
    "sip", "sips", "mms", "sftp", "tel",
];

/// Components of a split URL. Every component may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub authority: String,
    pub path: String,
    pub params: String,
    pub query: String,
    pub fragment: String,
}

impl UrlParts {
    /// Splits `url` into its components.
    ///
    /// Leading control characters and spaces are ignored, and tab, CR and LF
    /// are removed anywhere before splitting.
    pub fn split(url: &str) -> Self {
        let sanitized = sanitize(url);

        let Some(caps) = URI_REGEX.captures(&sanitized) else {
            return Self {
                path: sanitized,
                ..Self::default()
            };
        };

        let group = |name: &str| {
            caps.name(name)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default()
        };

        let scheme = group("scheme").to_ascii_lowercase();
        let authority = group("authority");
        let mut path = group("path");
        let query = group("query");
        let fragment = group("fragment");

        let mut params = String::new();
        if SCHEMES_WITH_PARAMS.contains(&scheme.as_str())
            && let Some(index) = params_start(&path)
        {
            params = path[index + 1..].to_string();
            path.truncate(index);
        }

        Self {
            scheme,
            authority,
            path,
            params,
            query,
            fragment,
        }
    }

    /// Host part of the authority: userinfo and port removed, IPv6 brackets
    /// stripped, lowercased.
    ///
    /// Returns `None` when there is no authority or the host is empty.
    pub fn hostname(&self) -> Option<String> {
        let host_info = match self.authority.rsplit_once('@') {
            Some((_, host_info)) => host_info,
            None => self.authority.as_str(),
        };

        let host = match host_info.split_once('[') {
            Some((_, bracketed)) => bracketed.split(']').next().unwrap_or(bracketed),
            None => host_info.split(':').next().unwrap_or(host_info),
        };

        if host.is_empty() {
            None
        } else {
            Some(host.to_lowercase())
        }
    }
}

fn sanitize(url: &str) -> String {
    url.trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect()
}

/// Byte offset of the `;` that starts the params of the last path segment.
fn params_start(path: &str) -> Option<usize> {
    match path.rfind('/') {
        Some(last_slash) => path[last_slash..].find(';').map(|i| last_slash + i),
        None => path.find(';'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_schemeless_has_no_authority() {
        let parts = UrlParts::split("www.example.com/login/index.html");

        assert_eq!(parts.scheme, "");
        assert_eq!(parts.authority, "");
        assert_eq!(parts.path, "www.example.com/login/index.html");
    }

    #[test]
    fn test_split_full_url() {
        let parts = UrlParts::split("https://user:pw@Example.com:8443/a/b;p?q=1&r=2#frag");

        assert_eq!(parts.scheme, "https");
        assert_eq!(parts.authority, "user:pw@Example.com:8443");
        assert_eq!(parts.path, "/a/b");
        assert_eq!(parts.params, "p");
        assert_eq!(parts.query, "q=1&r=2");
        assert_eq!(parts.fragment, "frag");
        assert_eq!(parts.hostname().as_deref(), Some("example.com"));
    }

    #[test]
    fn test_split_network_path_reference() {
        let parts = UrlParts::split("//www.example.co.uk/a//b");

        assert_eq!(parts.scheme, "");
        assert_eq!(parts.authority, "www.example.co.uk");
        assert_eq!(parts.path, "/a//b");
    }

    #[test]
    fn test_split_fragment_before_query() {
        let parts = UrlParts::split("a.com/x#frag?notquery");

        assert_eq!(parts.path, "a.com/x");
        assert_eq!(parts.query, "");
        assert_eq!(parts.fragment, "frag?notquery");
    }

    #[test]
    fn test_split_host_with_port_is_scheme() {
        // "example.com" is a syntactically valid scheme name.
        let parts = UrlParts::split("example.com:8080/path");

        assert_eq!(parts.scheme, "example.com");
        assert_eq!(parts.path, "8080/path");
    }

    #[test]
    fn test_split_userinfo_is_not_scheme() {
        let parts = UrlParts::split("user@host.com:80/x");

        assert_eq!(parts.scheme, "");
        assert_eq!(parts.path, "user@host.com:80/x");
    }

    #[test]
    fn test_split_params_only_in_last_segment() {
        let parts = UrlParts::split("a/b;c/d;e");

        assert_eq!(parts.path, "a/b;c/d");
        assert_eq!(parts.params, "e");
    }

    #[test]
    fn test_split_params_for_secure_rtsp() {
        let parts = UrlParts::split("rtsps://h/ab;c");

        assert_eq!(parts.authority, "h");
        assert_eq!(parts.path, "/ab");
        assert_eq!(parts.params, "c");
    }

    #[test]
    fn test_split_params_not_for_other_schemes() {
        let parts = UrlParts::split("mailto:a;b");

        assert_eq!(parts.scheme, "mailto");
        assert_eq!(parts.path, "a;b");
        assert_eq!(parts.params, "");
    }

    #[test]
    fn test_split_strips_leading_controls_and_newlines() {
        let parts = UrlParts::split("  \u{1}//exa\nmple.com/p\tq");

        assert_eq!(parts.authority, "example.com");
        assert_eq!(parts.path, "/pq");
    }

    #[test]
    fn test_split_empty_and_slashes() {
        assert_eq!(UrlParts::split(""), UrlParts::default());

        let parts = UrlParts::split("///");
        assert_eq!(parts.authority, "");
        assert_eq!(parts.path, "/");
        assert_eq!(parts.hostname(), None);
    }

    #[test]
    fn test_hostname_ipv6() {
        let parts = UrlParts::split("//[::1]:8080/");
        assert_eq!(parts.hostname().as_deref(), Some("::1"));
    }

    #[test]
    fn test_hostname_absent_for_port_only() {
        let parts = UrlParts::split("//:80/x");
        assert_eq!(parts.hostname(), None);
    }
}
