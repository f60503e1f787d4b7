//! URL feature schema and vector assembly.
//!
//! The classifier was trained on 19 features in a fixed order. That order is
//! encoded once, in [`Feature`]: each variant's discriminant is its column in
//! the [`FeatureVector`], and [`Feature::ALL`] lists the variants in column
//! order. Reordering variants changes the model input and is caught by the
//! schema tests below.
//!
//! # Modules
//!
//! - [`extractors`] - One function per feature
//! - [`keywords`] - Shortener and suspicious-word substring lists

pub mod extractors;
pub mod keywords;

use serde::Serialize;

use crate::domain::normalizer::NormalizedUrl;
use crate::domain::tld::TopLevelDomain;
use crate::domain::url_parts::UrlParts;

/// Number of columns in a feature vector.
pub const FEATURE_COUNT: usize = 19;

/// One row of the classifier input matrix.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// Model input columns, in model order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    CountDot = 0,
    CountWww = 1,
    CountAtrate = 2,
    NoOfDir = 3,
    NoOfEmbed = 4,
    ShorteningService = 5,
    CountHttps = 6,
    CountHttp = 7,
    CountPer = 8,
    CountQues = 9,
    CountHyphen = 10,
    CountEqual = 11,
    UrlLength = 12,
    HostnameLength = 13,
    SuspiciousWords = 14,
    DigitCount = 15,
    LetterCount = 16,
    FdLength = 17,
    TldLength = 18,
}

impl Feature {
    /// Every feature, in column order.
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::CountDot,
        Feature::CountWww,
        Feature::CountAtrate,
        Feature::NoOfDir,
        Feature::NoOfEmbed,
        Feature::ShorteningService,
        Feature::CountHttps,
        Feature::CountHttp,
        Feature::CountPer,
        Feature::CountQues,
        Feature::CountHyphen,
        Feature::CountEqual,
        Feature::UrlLength,
        Feature::HostnameLength,
        Feature::SuspiciousWords,
        Feature::DigitCount,
        Feature::LetterCount,
        Feature::FdLength,
        Feature::TldLength,
    ];

    /// Column of this feature in a [`FeatureVector`].
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Feature::CountDot => "count_dot",
            Feature::CountWww => "count_www",
            Feature::CountAtrate => "count_atrate",
            Feature::NoOfDir => "no_of_dir",
            Feature::NoOfEmbed => "no_of_embed",
            Feature::ShorteningService => "shortening_service",
            Feature::CountHttps => "count_https",
            Feature::CountHttp => "count_http",
            Feature::CountPer => "count_per",
            Feature::CountQues => "count_ques",
            Feature::CountHyphen => "count_hyphen",
            Feature::CountEqual => "count_equal",
            Feature::UrlLength => "url_length",
            Feature::HostnameLength => "hostname_length",
            Feature::SuspiciousWords => "suspicious_words",
            Feature::DigitCount => "digit_count",
            Feature::LetterCount => "letter_count",
            Feature::FdLength => "fd_length",
            Feature::TldLength => "tld_length",
        }
    }

    /// Computes this feature for a prepared URL.
    pub fn extract(self, input: &FeatureInput<'_>) -> i64 {
        use crate::domain::features::extractors::*;

        let url = input.url.as_str();
        match self {
            Feature::CountDot => count_dot(url),
            Feature::CountWww => count_www(url),
            Feature::CountAtrate => count_atrate(url),
            Feature::NoOfDir => no_of_dir(&input.parts),
            Feature::NoOfEmbed => no_of_embed(&input.parts),
            Feature::ShorteningService => shortening_service(url),
            Feature::CountHttps => count_https(url),
            Feature::CountHttp => count_http(url),
            Feature::CountPer => count_per(url),
            Feature::CountQues => count_ques(url),
            Feature::CountHyphen => count_hyphen(url),
            Feature::CountEqual => count_equal(url),
            Feature::UrlLength => url_length(url),
            Feature::HostnameLength => hostname_length(&input.parts),
            Feature::SuspiciousWords => suspicious_words(url),
            Feature::DigitCount => digit_count(url),
            Feature::LetterCount => letter_count(url),
            Feature::FdLength => fd_length(&input.parts),
            Feature::TldLength => tld_length(&input.tld),
        }
    }
}

/// A normalized URL with its split components and resolved TLD, computed
/// once and shared by all extractors.
#[derive(Debug, Clone)]
pub struct FeatureInput<'a> {
    pub url: &'a NormalizedUrl,
    pub parts: UrlParts,
    pub tld: TopLevelDomain,
}

impl<'a> FeatureInput<'a> {
    pub fn new(url: &'a NormalizedUrl) -> Self {
        let parts = UrlParts::split(url.as_str());
        let tld = TopLevelDomain::resolve(&parts);
        Self { url, parts, tld }
    }
}

/// Feature values of one URL, in model column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeatureVector([i64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [i64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> i64 {
        self.0[feature.index()]
    }

    pub fn values(&self) -> &[i64; FEATURE_COUNT] {
        &self.0
    }

    /// The vector as one classifier input row.
    pub fn to_row(&self) -> FeatureRow {
        self.0.map(|value| value as f64)
    }

    /// `(feature, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, i64)> + '_ {
        Feature::ALL.iter().map(|&feature| (feature, self.get(feature)))
    }
}

/// Runs every extractor over `url`, in column order.
///
/// Always returns a complete vector: malformed URLs degrade to zeros and
/// the `-1` TLD sentinel.
pub fn assemble(url: &NormalizedUrl) -> FeatureVector {
    let input = FeatureInput::new(url);
    FeatureVector(Feature::ALL.map(|feature| feature.extract(&input)))
}
