use std::fmt;

use serde::{Deserialize, Serialize};

use super::detectors::DetectorReport;

/// Closed set of charge tiers the classifier can recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ChargeLabel {
    #[serde(rename = "DVHAN")]
    Dvhan,
    #[serde(rename = "DV-1")]
    FirstDegree,
    #[serde(rename = "DV-2")]
    SecondDegree,
    #[serde(rename = "DV-3")]
    ThirdDegree,
    #[serde(rename = "NoQualifyingOffense")]
    NoQualifyingOffense,
}

impl ChargeLabel {
    pub const ALL: [ChargeLabel; 5] = [
        ChargeLabel::Dvhan,
        ChargeLabel::FirstDegree,
        ChargeLabel::SecondDegree,
        ChargeLabel::ThirdDegree,
        ChargeLabel::NoQualifyingOffense,
    ];

    /// Short code used on the wire and in logs.
    pub fn code(self) -> &'static str {
        match self {
            ChargeLabel::Dvhan => "DVHAN",
            ChargeLabel::FirstDegree => "DV-1",
            ChargeLabel::SecondDegree => "DV-2",
            ChargeLabel::ThirdDegree => "DV-3",
            ChargeLabel::NoQualifyingOffense => "NoQualifyingOffense",
        }
    }

    /// Display heading for the recommended charge.
    pub fn title(self) -> &'static str {
        match self {
            ChargeLabel::Dvhan => "DV of a High and Aggravated Nature",
            ChargeLabel::FirstDegree => "DV 1st Degree",
            ChargeLabel::SecondDegree => "DV 2nd Degree",
            ChargeLabel::ThirdDegree => "DV 3rd Degree",
            ChargeLabel::NoQualifyingOffense => "Does not meet DV criteria",
        }
    }

    pub fn is_offense(self) -> bool {
        self != ChargeLabel::NoQualifyingOffense
    }
}

impl fmt::Display for ChargeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Charge recommendation paired with the fixed rationale of the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClassificationResult {
    pub label: ChargeLabel,
    pub explanation: &'static str,
}

/// Full decision trail for a single classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub result: ClassificationResult,
    /// Priority rank (1-based) of the rule that fired.
    pub rule: u8,
    pub aggravator_count: u8,
    pub detectors: DetectorReport,
}

impl Assessment {
    pub fn label(&self) -> ChargeLabel {
        self.result.label
    }
}
