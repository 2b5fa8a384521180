//! Static reference guide of injury and conduct examples shown next to a classification.
//!
//! The lists are informational; the classifier never reads them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Moderate,
    Great,
    Indifference,
}

impl ReferenceKind {
    pub const ALL: [ReferenceKind; 3] = [
        ReferenceKind::Moderate,
        ReferenceKind::Great,
        ReferenceKind::Indifference,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ReferenceKind::Moderate => "moderate",
            ReferenceKind::Great => "great",
            ReferenceKind::Indifference => "indifference",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReferenceKind::Moderate => "Moderate Injury Examples",
            ReferenceKind::Great => "Great Bodily Injury Examples",
            ReferenceKind::Indifference => "Extreme Indifference Examples",
        }
    }

    pub fn examples(self) -> &'static [&'static str] {
        match self {
            ReferenceKind::Moderate => &[
                "Concussion",
                "swollen eye",
                "black eye",
                "deep bruises",
                "minor fracture",
                "stitches",
                "sprain",
            ],
            ReferenceKind::Great => &[
                "Broken bones",
                "lost tooth",
                "internal bleeding",
                "coma",
                "disfigurement",
                "gunshot",
                "stab wound",
                "brain injury",
            ],
            ReferenceKind::Indifference => &[
                "Threw into traffic",
                "ran over",
                "set on fire",
                "smashed head",
                "beat unconscious",
            ],
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown reference type '{0}' (expected moderate, great, or indifference)")]
pub struct UnknownReferenceKind(pub String);

impl FromStr for ReferenceKind {
    type Err = UnknownReferenceKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ReferenceKind::ALL
            .into_iter()
            .find(|kind| kind.key() == normalized)
            .ok_or_else(|| UnknownReferenceKind(value.to_string()))
    }
}
