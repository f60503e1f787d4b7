//! Public-suffix-aware top-level domain resolution.

use psl::{List, Psl};

use crate::domain::url_parts::UrlParts;

/// Top-level domain of a URL, or an explicit marker that none could be
/// resolved.
///
/// Resolution never fails loudly: unparsable hosts, unknown suffixes and bare
/// suffixes all become [`TopLevelDomain::Absent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevelDomain {
    /// Public suffix of the host, e.g. `com` or `co.uk`. Never empty.
    Present(String),
    Absent,
}

impl TopLevelDomain {
    /// Resolves the TLD of the URL's host against the Public Suffix List.
    ///
    /// The host comes from the authority component only, so scheme-less
    /// input such as `example.com/path` resolves to [`Self::Absent`].
    pub fn resolve(parts: &UrlParts) -> Self {
        parts
            .hostname()
            .map_or(Self::Absent, |host| Self::from_host(&host))
    }

    /// Looks up the public suffix of a bare hostname.
    ///
    /// The suffix must be a listed rule (ICANN or private section) and the
    /// host needs at least one label to its left.
    pub fn from_host(host: &str) -> Self {
        let host = host.trim_end_matches('.');

        let Some(domain) = List.domain(host.as_bytes()) else {
            return Self::Absent;
        };

        let suffix = domain.suffix();
        if !suffix.is_known() {
            return Self::Absent;
        }

        match std::str::from_utf8(suffix.as_bytes()) {
            Ok(tld) if !tld.is_empty() => Self::Present(tld.to_string()),
            _ => Self::Absent,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(tld) => Some(tld),
            Self::Absent => None,
        }
    }

    /// Character length of the TLD, or `-1` when absent.
    pub fn length(&self) -> i64 {
        match self {
            Self::Present(tld) => tld.chars().count() as i64,
            Self::Absent => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_simple() {
        assert_eq!(
            TopLevelDomain::from_host("www.example.com"),
            TopLevelDomain::Present("com".to_string())
        );
    }

    #[test]
    fn test_from_host_multi_label_suffix() {
        let tld = TopLevelDomain::from_host("www.example.co.uk");
        assert_eq!(tld.as_str(), Some("co.uk"));
        assert_eq!(tld.length(), 5);
    }

    #[test]
    fn test_from_host_unknown_suffix() {
        assert_eq!(
            TopLevelDomain::from_host("intranet.notarealtld"),
            TopLevelDomain::Absent
        );
    }

    #[test]
    fn test_from_host_bare_suffix() {
        assert_eq!(TopLevelDomain::from_host("com"), TopLevelDomain::Absent);
    }

    #[test]
    fn test_from_host_empty() {
        assert_eq!(TopLevelDomain::from_host(""), TopLevelDomain::Absent);
    }

    #[test]
    fn test_resolve_requires_authority() {
        let parts = UrlParts::split("www.example.com/path");
        assert_eq!(TopLevelDomain::resolve(&parts), TopLevelDomain::Absent);

        let parts = UrlParts::split("//www.example.com/path");
        assert_eq!(
            TopLevelDomain::resolve(&parts),
            TopLevelDomain::Present("com".to_string())
        );
    }

    #[test]
    fn test_resolve_unparsable() {
        let parts = UrlParts::split("///");
        assert_eq!(TopLevelDomain::resolve(&parts).length(), -1);
    }

    #[test]
    fn test_absent_length_is_sentinel() {
        assert_eq!(TopLevelDomain::Absent.length(), -1);
        assert_eq!(TopLevelDomain::Absent.as_str(), None);
    }
}
