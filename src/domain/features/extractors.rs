//! Individual feature extractors.
//!
//! Each function computes one scalar from a normalized URL string or its
//! split components. None of them can fail; missing components count as
//! empty strings.

use icu_properties::CodePointMapData;
use icu_properties::props::{GeneralCategory, GeneralCategoryGroup, NumericType};

use super::keywords::{SHORTENING_SERVICES, SUSPICIOUS_WORDS, contains_any};
use crate::domain::tld::TopLevelDomain;
use crate::domain::url_parts::UrlParts;

/// Non-overlapping occurrences of `needle` in `haystack`.
fn count(haystack: &str, needle: &str) -> i64 {
    haystack.matches(needle).count() as i64
}

fn char_len(s: &str) -> i64 {
    s.chars().count() as i64
}

fn flag(value: bool) -> i64 {
    i64::from(value)
}

pub fn count_dot(url: &str) -> i64 {
    count(url, ".")
}

/// Plain substring count: `"wwwwww"` yields 2.
pub fn count_www(url: &str) -> i64 {
    count(url, "www")
}

pub fn count_atrate(url: &str) -> i64 {
    count(url, "@")
}

/// Number of `/` in the path component.
pub fn no_of_dir(parts: &UrlParts) -> i64 {
    count(&parts.path, "/")
}

/// Number of `//` in the path component.
pub fn no_of_embed(parts: &UrlParts) -> i64 {
    count(&parts.path, "//")
}

pub fn shortening_service(url: &str) -> i64 {
    flag(contains_any(url, SHORTENING_SERVICES))
}

pub fn count_https(url: &str) -> i64 {
    count(url, "https")
}

/// Also counts the `http` inside every `https`.
pub fn count_http(url: &str) -> i64 {
    count(url, "http")
}

pub fn count_per(url: &str) -> i64 {
    count(url, "%")
}

pub fn count_ques(url: &str) -> i64 {
    count(url, "?")
}

pub fn count_hyphen(url: &str) -> i64 {
    count(url, "-")
}

pub fn count_equal(url: &str) -> i64 {
    count(url, "=")
}

pub fn url_length(url: &str) -> i64 {
    char_len(url)
}

/// Length of the whole authority component, userinfo and port included.
pub fn hostname_length(parts: &UrlParts) -> i64 {
    char_len(&parts.authority)
}

pub fn suspicious_words(url: &str) -> i64 {
    flag(contains_any(url, SUSPICIOUS_WORDS))
}

/// Characters with any Unicode numeric type (decimal, digit or numeric).
///
/// Han numerals such as `三` count; they are letters by general category.
pub fn digit_count(url: &str) -> i64 {
    let numeric_type = CodePointMapData::<NumericType>::new();
    url.chars()
        .filter(|&c| numeric_type.get(c) != NumericType::None)
        .count() as i64
}

/// Characters in the letter categories Lu, Ll, Lt, Lm and Lo.
///
/// Letter numbers (`ⅷ`) and combining marks are not letters here.
pub fn letter_count(url: &str) -> i64 {
    let category = CodePointMapData::<GeneralCategory>::new();
    url.chars()
        .filter(|&c| GeneralCategoryGroup::Letter.contains(category.get(c)))
        .count() as i64
}

/// Length of the second `/`-separated piece of the path, 0 if there is none.
///
/// For a rooted path (`/foo/bar`) that is the first directory; for a
/// scheme-less URL (`example.com/foo/bar`) the host occupies index 0.
pub fn fd_length(parts: &UrlParts) -> i64 {
    parts.path.split('/').nth(1).map_or(0, char_len)
}

pub fn tld_length(tld: &TopLevelDomain) -> i64 {
    tld.length()
}
