//! Prediction labels and class-index resolution.

use serde::Serialize;
use std::fmt;

/// Category assigned to a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PredictionLabel {
    #[serde(rename = "SAFE")]
    Safe,
    #[serde(rename = "DEFACEMENT")]
    Defacement,
    #[serde(rename = "PHISHING")]
    Phishing,
    #[serde(rename = "MALWARE")]
    Malware,
    /// The classifier returned a class index outside the known set.
    Undefined,
}

impl PredictionLabel {
    /// Maps a classifier class index to a label.
    ///
    /// Total over all integers: anything but `0..=3` is [`Self::Undefined`].
    pub fn resolve(class_index: i64) -> Self {
        match class_index {
            0 => Self::Safe,
            1 => Self::Defacement,
            2 => Self::Phishing,
            3 => Self::Malware,
            _ => Self::Undefined,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Defacement => "DEFACEMENT",
            Self::Phishing => "PHISHING",
            Self::Malware => "MALWARE",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for PredictionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
